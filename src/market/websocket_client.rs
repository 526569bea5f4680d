//! Generic WebSocket client for exchange kline feeds.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::Mutex;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::market::kline::{KlineStream, KlineUpdate};
use crate::market::message_parser::MessageParser;

// WebSocketClient<P: MessageParser> is generic over the parser type.
// All socket logic (connection, reconnection, channels, subscription
// tracking) lives here; each exchange only implements MessageParser.

/// Generic WebSocket client that works with any exchange.
/// Exchange-specific logic is provided by the MessageParser implementation.
pub struct WebSocketClient<P: MessageParser> {
    parser: Arc<P>,
    subscriptions: Vec<KlineStream>,
    connected_at: Option<Instant>, // for 24h reconnection limit tracking
    is_connected: bool,
    ws_sender: Option<mpsc::Sender<String>>,
    kline_sender: Option<mpsc::Sender<KlineUpdate>>,
}

impl<P: MessageParser> WebSocketClient<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser: Arc::new(parser),
            subscriptions: Vec::new(),
            connected_at: None,
            is_connected: false,
            ws_sender: None,
            kline_sender: None,
        }
    }

    /// Sets the channel for sending parsed kline updates to consumers.
    pub fn set_kline_sender(&mut self, sender: mpsc::Sender<KlineUpdate>) {
        self.kline_sender = Some(sender);
    }

    pub fn name(&self) -> &'static str {
        self.parser.name()
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected
    }

    pub fn subscriptions(&self) -> &[KlineStream] {
        &self.subscriptions
    }

    /// Checks if connection needs refresh (approaching 24h limit).
    pub fn needs_reconnect(&self) -> bool {
        if let Some(connected_at) = self.connected_at {
            let max_duration = Duration::from_secs(self.parser.max_connection_duration_secs());
            connected_at.elapsed() > max_duration
        } else {
            false
        }
    }

    /// Connects to the WebSocket endpoint.
    /// Spawns background tasks for message handling.
    /// Returns a receiver channel for kline updates.
    pub async fn connect(&mut self) -> Result<mpsc::Receiver<KlineUpdate>> {
        let endpoint = self.parser.endpoint();

        println!("[{}] Connecting to {}...", self.parser.name(), endpoint);

        let (ws_stream, _response) = connect_async(endpoint).await?;
        let (write, read) = ws_stream.split();

        // Channel for sending messages TO the WebSocket
        let (ws_tx, mut ws_rx) = mpsc::channel::<String>(100);
        self.ws_sender = Some(ws_tx);

        // Channel for kline updates FROM the WebSocket
        let (kline_tx, kline_rx) = if self.kline_sender.is_none() {
            let (tx, rx) = mpsc::channel::<KlineUpdate>(1000);
            self.kline_sender = Some(tx.clone());
            (tx, Some(rx))
        } else {
            (self.kline_sender.clone().unwrap(), None)
        };

        self.is_connected = true;
        self.connected_at = Some(Instant::now());

        let parser = Arc::clone(&self.parser);

        // Task: handle outgoing messages (write to WebSocket)
        let write = Arc::new(Mutex::new(write));
        let write_clone = Arc::clone(&write);

        tokio::spawn(async move {
            let mut write = write_clone.lock().await;
            while let Some(msg) = ws_rx.recv().await {
                if let Err(e) = write.send(Message::Text(msg.into())).await {
                    eprintln!("Failed to send WebSocket message: {}", e);
                    break;
                }
            }
        });

        // Task: handle incoming messages (read from WebSocket)
        tokio::spawn(async move {
            let mut read = read;
            while let Some(msg_result) = read.next().await {
                match msg_result {
                    Ok(Message::Text(text)) => {
                        // Parse and forward kline updates; control messages
                        // and unrelated event types are ignored here.
                        if let Some(update) = parser.parse_message(&text) {
                            if let Err(e) = kline_tx.send(update).await {
                                eprintln!("[{}] Failed to send kline update: {}", parser.name(), e);
                                break;
                            }
                        }
                    }
                    Ok(Message::Ping(_data)) => {
                        // Pong handled automatically by tungstenite
                    }
                    Ok(Message::Pong(_)) => {
                        // Connection alive
                    }
                    Ok(Message::Close(frame)) => {
                        println!("[{}] Connection closed: {:?}", parser.name(), frame);
                        break;
                    }
                    Ok(Message::Binary(_)) => {
                        // Binary messages not used for kline data
                    }
                    Err(e) => {
                        eprintln!("[{}] WebSocket error: {}", parser.name(), e);
                        break;
                    }
                    _ => {}
                }
            }
            println!("[{}] Read task ended", parser.name());
        });

        println!("[{}] Connected successfully!", self.parser.name());

        Ok(kline_rx.unwrap_or_else(|| {
            let (_tx, rx) = mpsc::channel(1);
            rx
        }))
    }

    pub async fn subscribe(&mut self, stream: KlineStream) -> Result<()> {
        if !self.is_connected {
            bail!("not connected");
        }

        // each exchange has its own subscribe format
        let msg = self.parser.format_subscribe(&stream);

        if let Some(sender) = &self.ws_sender {
            sender.send(msg).await?;
            self.subscriptions.push(stream.clone());
            println!("[{}] Subscribed to {:?}", self.parser.name(), stream);
        }

        Ok(())
    }

    pub async fn unsubscribe(&mut self, stream: &KlineStream) -> Result<()> {
        if !self.is_connected {
            bail!("not connected");
        }

        // each exchange has its own unsubscribe format
        let msg = self.parser.format_unsubscribe(stream);

        if let Some(sender) = &self.ws_sender {
            sender.send(msg).await?;
            self.subscriptions.retain(|s| s != stream);
            println!("[{}] Unsubscribed from {:?}", self.parser.name(), stream);
        }

        Ok(())
    }

    pub async fn disconnect(&mut self) {
        self.ws_sender = None;
        self.is_connected = false;
        self.connected_at = None;
        println!("[{}] Disconnected", self.parser.name());
    }

    /// Reconnects and restores all subscriptions.
    pub async fn reconnect(&mut self) -> Result<()> {
        println!("[{}] Reconnecting...", self.parser.name());

        let subs = self.subscriptions.clone();

        self.disconnect().await;
        self.subscriptions.clear();
        self.connect().await?;

        // Restore subscriptions
        for stream in subs {
            self.subscribe(stream).await?;
        }

        println!(
            "[{}] Reconnected and restored {} subscriptions",
            self.parser.name(),
            self.subscriptions.len()
        );

        Ok(())
    }
}
