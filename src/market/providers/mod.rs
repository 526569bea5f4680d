//! Exchange-specific MessageParser implementations.

pub mod binance;
