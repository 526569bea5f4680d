//! Market-structure analysis engine (swings, BOS/CHOCH, order blocks, FVGs)

pub mod alerts;
pub mod candle;
pub mod fvg;
pub mod order_blocks;
pub mod report;
pub mod structure;
pub mod swings;
pub mod timeframe;

// Re-exports for convenience
pub use alerts::{Alert, generate_alerts};
pub use candle::Candle;
pub use fvg::{FairValueGap, FvgKind, find_fair_value_gaps};
pub use order_blocks::{OrderBlock, OrderBlockKind, find_order_blocks};
pub use report::{AnalysisReport, analyze};
pub use structure::{StructureEvent, StructureKind, Trend, detect_structure};
pub use swings::{Swing, SwingKind, find_swings};
pub use timeframe::Timeframe;
