//! ICT-style market-structure analyst.
//!
//! The `analysis` module is the core: a pure, batch transformation of an
//! ascending candle sequence into swings, structure events (BOS/CHOCH),
//! order blocks, fair value gaps, and the directional alerts derived from
//! them. The `market` module is the thin collaborator that collects closed
//! candles from an exchange kline stream into a history the engine can
//! analyze.

pub mod analysis;
pub mod market;
