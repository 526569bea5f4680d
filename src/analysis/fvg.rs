//! Fair value gap detection (three-candle price gaps)

use serde::Serialize;

use crate::analysis::candle::Candle;

/// Direction of the impulse that left the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FvgKind {
    Bullish,
    Bearish,
}

/// A price range skipped over across three consecutive candles, treated
/// as a zone likely to be revisited.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FairValueGap {
    pub kind: FvgKind,
    pub low: f64,
    pub high: f64,
}

/// Finds fair value gaps over a slice of candles.
///
/// For each index i from 2 on, the candle is compared with the close two
/// candles back: a low above that close leaves a bullish gap bounded by
/// `[close[i-2], low[i]]`, a high below it leaves a bearish gap bounded by
/// `[high[i], close[i-2]]`. The close-based comparison is deliberate and
/// matches the reference behavior rather than the high/low gap variant.
///
/// Output is in scan order. Fewer than 3 candles yield an empty vector.
pub fn find_fair_value_gaps(candles: &[Candle]) -> Vec<FairValueGap> {
    let mut gaps = Vec::new();

    for i in 2..candles.len() {
        let anchor_close = candles[i - 2].get_close();

        if candles[i].get_low() > anchor_close {
            gaps.push(FairValueGap {
                kind: FvgKind::Bullish,
                low: anchor_close,
                high: candles[i].get_low(),
            });
        }

        if candles[i].get_high() < anchor_close {
            gaps.push(FairValueGap {
                kind: FvgKind::Bearish,
                low: candles[i].get_high(),
                high: anchor_close,
            });
        }
    }

    gaps
}
