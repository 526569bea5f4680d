//! Binance exchange implementation.

use serde_json::Value;

use crate::analysis::candle::Candle;
use crate::analysis::timeframe::Timeframe;
use crate::market::kline::{KlineStream, KlineUpdate};
use crate::market::message_parser::MessageParser;
use crate::market::websocket_client::WebSocketClient;

pub const BINANCE_WSS_BASE_ENDPOINT: &str = "wss://stream.binance.com:443/ws";
pub const BINANCE_WSS_FALLBACK_ENDPOINT: &str = "wss://stream.binance.com:9443/ws";

/// Binance-specific message parser.
/// Converts Binance kline JSON into a normalized KlineUpdate.
#[derive(Debug, Clone)]
pub struct BinanceParser;

impl BinanceParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses a Binance kline message.
    ///
    /// Binance nests the kline payload in a "k" object and sends OHLC
    /// values as strings; the "x" field marks a closed (final) candle.
    fn parse_kline(&self, value: &Value) -> Option<KlineUpdate> {
        let symbol = value.get("s")?.as_str()?.to_string();
        let k = value.get("k")?;

        let interval: Timeframe = k.get("i")?.as_str()?.parse().ok()?;
        let timestamp = k.get("t")?.as_u64()?;
        let open = string_price(k, "o")?;
        let high = string_price(k, "h")?;
        let low = string_price(k, "l")?;
        let close = string_price(k, "c")?;
        let is_closed = k.get("x")?.as_bool()?;

        let candle = Candle::new(timestamp, open, high, low, close);

        Some(KlineUpdate {
            symbol,
            interval,
            candle,
            is_closed,
        })
    }

    fn stream_name(stream: &KlineStream) -> String {
        format!("{}@kline_{}", stream.symbol.to_lowercase(), stream.interval)
    }
}

impl Default for BinanceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageParser for BinanceParser {
    fn endpoint(&self) -> &str {
        BINANCE_WSS_BASE_ENDPOINT
    }

    fn fallback_endpoint(&self) -> Option<&str> {
        Some(BINANCE_WSS_FALLBACK_ENDPOINT)
    }

    fn name(&self) -> &'static str {
        "Binance"
    }

    fn format_subscribe(&self, stream: &KlineStream) -> String {
        format!(
            r#"{{"method":"SUBSCRIBE","params":["{}"],"id":1}}"#,
            Self::stream_name(stream)
        )
    }

    fn format_unsubscribe(&self, stream: &KlineStream) -> String {
        format!(
            r#"{{"method":"UNSUBSCRIBE","params":["{}"],"id":1}}"#,
            Self::stream_name(stream)
        )
    }

    fn parse_message(&self, msg: &str) -> Option<KlineUpdate> {
        let value: Value = serde_json::from_str(msg).ok()?;

        // Detect message type by "e" field; anything but kline events
        // (trades, depth, subscription confirmations) is ignored.
        if value.get("e")?.as_str()? == "kline" {
            return self.parse_kline(&value);
        }

        None
    }
}

/// Binance sends numeric fields as JSON strings ("50000.00").
fn string_price(k: &Value, key: &str) -> Option<f64> {
    k.get(key)?.as_str()?.parse::<f64>().ok()
}

pub type BinanceClient = WebSocketClient<BinanceParser>;

pub fn new_binance_client() -> BinanceClient {
    WebSocketClient::new(BinanceParser::new())
}
