//! Normalized kline feed types

use crate::analysis::candle::Candle;
use crate::analysis::timeframe::Timeframe;

/// A kline stream subscription for one symbol and interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KlineStream {
    pub symbol: String,
    pub interval: Timeframe,
}

impl KlineStream {
    pub fn new(symbol: impl Into<String>, interval: Timeframe) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
        }
    }
}

/// A normalized kline event from an exchange.
///
/// The inner `Candle` is the calculation primitive handed to the analysis
/// engine; symbol and interval are streaming context only.
///
/// WARNING: if `is_closed` is false the candle is still updating - it must
/// not enter an analysis history yet.
#[derive(Debug, Clone)]
pub struct KlineUpdate {
    pub symbol: String,
    pub interval: Timeframe,
    pub candle: Candle,
    pub is_closed: bool,
}
