//! Exchange kline feed: the input collaborator of the analysis engine.

pub mod history;
pub mod kline;
pub mod message_parser;
pub mod providers;
pub mod websocket_client;

// Re-exports for convenience
pub use history::CandleHistory;
pub use kline::{KlineStream, KlineUpdate};
pub use message_parser::MessageParser;
pub use websocket_client::WebSocketClient;

// Re-export provider convenience functions
pub use providers::binance::new_binance_client;
