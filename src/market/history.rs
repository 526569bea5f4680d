//! Closed-candle history for analysis runs.

use crate::analysis::candle::Candle;
use crate::market::kline::KlineUpdate;

const DEFAULT_CAPACITY: usize = 1500;

/// Accumulates closed candles from a kline feed into the ascending
/// sequence the analysis engine consumes.
///
/// Exchanges re-send a candle while it forms and once more when it closes;
/// only closed candles are kept. An update repeating the last open time
/// replaces the stored candle (the closed version supersedes any earlier
/// snapshot), older open times are dropped, and the history is capped at a
/// fixed capacity by evicting from the front.
#[derive(Debug)]
pub struct CandleHistory {
    candles: Vec<Candle>,
    capacity: usize,
}

impl CandleHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            candles: Vec::new(),
            capacity,
        }
    }

    /// Applies one feed update. Returns true if the history changed.
    pub fn apply(&mut self, update: &KlineUpdate) -> bool {
        if !update.is_closed {
            return false;
        }

        let timestamp = update.candle.get_timestamp();

        match self.candles.last() {
            Some(last) if timestamp < last.get_timestamp() => false,
            Some(last) if timestamp == last.get_timestamp() => {
                *self.candles.last_mut().unwrap() = update.candle;
                true
            }
            _ => {
                self.candles.push(update.candle);
                if self.candles.len() > self.capacity {
                    self.candles.remove(0);
                }
                true
            }
        }
    }

    /// The ascending candle sequence, ready for `analysis::analyze`.
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }
}

impl Default for CandleHistory {
    fn default() -> Self {
        Self::new()
    }
}
