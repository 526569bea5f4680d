//! Market structure analysis: BOS / CHOCH events and trend bias

use serde::Serialize;

use crate::analysis::candle::Candle;
use crate::analysis::swings::{Swing, SwingKind};

/// Kind of structure break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StructureKind {
    /// Break of structure: a close above the last recorded swing-high level,
    /// taken as bullish confirmation.
    Bos,
    /// Change of character: a close below the last recorded swing-low level,
    /// taken as a bearish reversal signal.
    Choch,
}

/// A structure break, stamped with the breaking candle's open time.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StructureEvent {
    pub kind: StructureKind,
    pub timestamp: u64,
}

/// Directional bias derived from the most recent structure event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Trend {
    Bullish,
    Bearish,
    /// No structure break fired during the run.
    #[default]
    Unset,
}

impl Trend {
    /// Returns the user-facing summary line for this bias.
    pub fn summary(&self) -> &'static str {
        match self {
            Trend::Bullish => "Trend Bias: Bullish - look for Buy setups near OB or FVG.",
            Trend::Bearish => "Trend Bias: Bearish - look for Sell setups after liquidity sweeps.",
            Trend::Unset => "No clear structure - wait for confirmation.",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// Scan accumulator for structure detection.
///
/// Kept as an explicit value threaded through the fold so the whole
/// analysis stays a pure function of its input; independent symbols can be
/// analyzed concurrently with no cross-run state.
#[derive(Debug, Clone, Copy, Default)]
struct ScanState {
    trend: Trend,
    last_high: Option<f64>,
    last_low: Option<f64>,
}

/// Detects structure breaks from the swing-annotated candle sequence.
///
/// Swings are visited in detection order (ascending index, high before low
/// at the same index). For a swing high, a close above the previously
/// recorded swing-high level emits `Bos` and flips the trend bullish; the
/// level is then updated unconditionally. Swing lows mirror this with
/// `Choch` and a bearish flip against the recorded swing-low level.
///
/// The first swing of each kind only seeds its level - there is no prior
/// level to break, so it can never emit an event. Returns the events in
/// order of detection together with the final trend (`Trend::Unset` when
/// nothing ever broke).
pub fn detect_structure(candles: &[Candle], swings: &[Swing]) -> (Vec<StructureEvent>, Trend) {
    let mut events = Vec::new();
    let mut state = ScanState::default();

    for swing in swings {
        let candle = &candles[swing.index];
        let close = candle.get_close();

        match swing.kind {
            SwingKind::High => {
                if let Some(last_high) = state.last_high {
                    if close > last_high {
                        events.push(StructureEvent {
                            kind: StructureKind::Bos,
                            timestamp: candle.get_timestamp(),
                        });
                        state.trend = Trend::Bullish;
                    }
                }
                state.last_high = Some(swing.price);
            }
            SwingKind::Low => {
                if let Some(last_low) = state.last_low {
                    if close < last_low {
                        events.push(StructureEvent {
                            kind: StructureKind::Choch,
                            timestamp: candle.get_timestamp(),
                        });
                        state.trend = Trend::Bearish;
                    }
                }
                state.last_low = Some(swing.price);
            }
        }
    }

    (events, state.trend)
}
