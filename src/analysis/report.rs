//! Full analysis pipeline composing the individual detectors

use serde::Serialize;

use crate::analysis::alerts::{Alert, generate_alerts};
use crate::analysis::candle::Candle;
use crate::analysis::fvg::{FairValueGap, find_fair_value_gaps};
use crate::analysis::order_blocks::{OrderBlock, find_order_blocks};
use crate::analysis::structure::{StructureEvent, Trend, detect_structure};
use crate::analysis::swings::{Swing, find_swings};

/// Combined output of one analysis run.
///
/// Plain data for the presentation side: all numeric fields carry full
/// precision, display rounding is the consumer's concern. Serializes to
/// JSON via serde.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub swings: Vec<Swing>,
    pub structure_events: Vec<StructureEvent>,
    pub trend: Trend,
    pub order_blocks: Vec<OrderBlock>,
    pub fair_value_gaps: Vec<FairValueGap>,
    pub alerts: Vec<Alert>,
}

/// Runs the full market-structure analysis over a candle sequence.
///
/// The candles must be in ascending time order; spacing between them is
/// irrelevant, only the index order matters. Each detector runs one pass
/// with its default parameters, then alerts are derived from the final
/// trend bias. The whole pipeline is a pure function: re-running it on the
/// same input yields an identical report, and nothing is cached between
/// runs - new candles require a fresh call.
pub fn analyze(candles: &[Candle]) -> AnalysisReport {
    let swings = find_swings(candles);
    let (structure_events, trend) = detect_structure(candles, &swings);
    let order_blocks = find_order_blocks(candles, None);
    let fair_value_gaps = find_fair_value_gaps(candles);
    let alerts = generate_alerts(trend, &order_blocks, &fair_value_gaps);

    AnalysisReport {
        swings,
        structure_events,
        trend,
        order_blocks,
        fair_value_gaps,
        alerts,
    }
}
