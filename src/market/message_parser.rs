//! MessageParser trait for exchange-specific message handling.

use crate::market::kline::{KlineStream, KlineUpdate};

// This trait is the key abstraction that makes WebSocketClient
// exchange-agnostic. Each exchange implements the methods below;
// WebSocketClient handles connection, channels, and reconnection.
// Adding a new exchange = implement this trait, no client changes.

/// Trait for exchange-specific message parsing and formatting.
/// Implement this for each exchange (Binance, Bybit, Hyperliquid, etc.)
pub trait MessageParser: Send + Sync + 'static {
    /// Returns the primary WebSocket endpoint URL.
    fn endpoint(&self) -> &str;

    /// Returns a fallback endpoint URL (if primary fails).
    fn fallback_endpoint(&self) -> Option<&str> {
        None
    }

    // Each exchange has different JSON formats for subscribe/unsubscribe
    fn format_subscribe(&self, stream: &KlineStream) -> String;
    fn format_unsubscribe(&self, stream: &KlineStream) -> String;

    /// Parses exchange-specific JSON into a normalized KlineUpdate.
    /// Returns Some for kline data, None for control or unrelated
    /// messages - unparseable input is dropped at this boundary, never
    /// propagated into the analysis engine.
    fn parse_message(&self, msg: &str) -> Option<KlineUpdate>;

    fn name(&self) -> &'static str;

    /// Most exchanges have 24h connection limit. Default: 23 hours (safe margin).
    fn max_connection_duration_secs(&self) -> u64 {
        23 * 60 * 60
    }
}
