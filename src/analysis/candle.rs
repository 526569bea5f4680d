//! Candle (OHLC) data structure with timestamp

use serde::Serialize;

/// Represents a single candlestick with OHLC data and timestamp.
///
/// The timestamp is stored as Unix time in milliseconds, which is the format
/// used by most cryptocurrency exchanges (Binance, Coinbase, etc.).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Candle {
    /// Unix timestamp in milliseconds (candle open time)
    timestamp: u64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
}

impl Candle {
    /// Creates a new Candle.
    ///
    /// `timestamp` should be Unix time in milliseconds (candle open time).
    /// Use `0` for the timestamp if not available (e.g., in tests).
    ///
    /// OHLC geometry is only checked in debug builds; the analysis functions
    /// themselves never re-validate it (garbage in, garbage out).
    pub fn new(timestamp: u64, open: f64, high: f64, low: f64, close: f64) -> Self {
        debug_assert!(high >= low, "candle high must be >= low");
        debug_assert!(open >= low && open <= high, "candle open must be within [low, high]");
        debug_assert!(close >= low && close <= high, "candle close must be within [low, high]");

        Self {
            timestamp,
            open,
            high,
            low,
            close,
        }
    }

    /// Returns the candle's timestamp (Unix time in milliseconds).
    pub fn get_timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn get_open(&self) -> f64 {
        self.open
    }

    pub fn get_high(&self) -> f64 {
        self.high
    }

    pub fn get_low(&self) -> f64 {
        self.low
    }

    pub fn get_close(&self) -> f64 {
        self.close
    }

    /// Returns true if this is a green candle (close > open).
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a red candle (close < open).
    ///
    /// A doji (close == open) is neither bullish nor bearish.
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}
