//! Swing point detection (local price extrema)

use serde::Serialize;

use crate::analysis::candle::Candle;

/// Whether a swing marks a local high or a local low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SwingKind {
    High,
    Low,
}

/// A confirmed swing point.
///
/// `price` is the candle's high for a `SwingKind::High` swing and the
/// candle's low for a `SwingKind::Low` swing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Swing {
    pub index: usize,
    pub kind: SwingKind,
    pub price: f64,
}

/// Finds swing highs and swing lows over a slice of candles.
///
/// A swing high exists at index i when its high is strictly above both
/// neighbors' highs; a swing low when its low is strictly below both
/// neighbors' lows. The comparison window is fixed to one candle on each
/// side; ties never count. The first and last candle can never be swings.
///
/// A single index can carry both a swing high and a swing low; the high is
/// emitted first. Returns an empty vector for fewer than 3 candles - too
/// little data is a valid "no pattern" outcome, not an error.
pub fn find_swings(candles: &[Candle]) -> Vec<Swing> {
    let mut swings = Vec::new();

    if candles.len() < 3 {
        return swings;
    }

    for i in 1..candles.len() - 1 {
        let high = candles[i].get_high();
        if high > candles[i - 1].get_high() && high > candles[i + 1].get_high() {
            swings.push(Swing {
                index: i,
                kind: SwingKind::High,
                price: high,
            });
        }

        let low = candles[i].get_low();
        if low < candles[i - 1].get_low() && low < candles[i + 1].get_low() {
            swings.push(Swing {
                index: i,
                kind: SwingKind::Low,
                price: low,
            });
        }
    }

    swings
}
