//! Order block detection (reversal-precursor candles)

use serde::Serialize;

use crate::analysis::candle::Candle;

const DEFAULT_OB_LOOKBACK: usize = 3;

/// Direction of the move an order block precedes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderBlockKind {
    /// Last bearish candle before a bullish move.
    Bullish,
    /// Last bullish candle before a bearish move.
    Bearish,
}

/// The price range of a candle immediately preceding a reversal, treated
/// as a zone likely to see future price reaction.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OrderBlock {
    pub kind: OrderBlockKind,
    pub low: f64,
    pub high: f64,
}

/// Finds order blocks over a slice of candles.
///
/// Each candidate index i is compared with its confirmation candle i+1:
/// a bearish candle followed by a bullish one marks a bullish order block,
/// and the reverse marks a bearish one. The zone is always the precursor
/// candle's `[low, high]` range. A doji precursor or confirmation
/// (open == close) triggers neither rule, so a given pair yields at most
/// one block. Overlapping zones are kept as-is; output is in scan order.
///
/// Pass `None` for the default lookback of 3, or `Some(n)` to start the
/// scan at index n. The lookback only delays where the scan begins; the
/// comparison window is always the adjacent pair.
pub fn find_order_blocks(candles: &[Candle], lookback: Option<usize>) -> Vec<OrderBlock> {
    let lookback = lookback.unwrap_or(DEFAULT_OB_LOOKBACK);
    let mut blocks = Vec::new();

    if candles.len() < 2 {
        return blocks;
    }

    for i in lookback..candles.len().saturating_sub(1) {
        let precursor = &candles[i];
        let confirmation = &candles[i + 1];

        if precursor.is_bearish() && confirmation.is_bullish() {
            blocks.push(OrderBlock {
                kind: OrderBlockKind::Bullish,
                low: precursor.get_low(),
                high: precursor.get_high(),
            });
        }

        if precursor.is_bullish() && confirmation.is_bearish() {
            blocks.push(OrderBlock {
                kind: OrderBlockKind::Bearish,
                low: precursor.get_low(),
                high: precursor.get_high(),
            });
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_candle(open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle::new(0, open, high, low, close)
    }

    #[test]
    fn test_bullish_order_block() {
        // Bearish candle at index 0 followed by a bullish candle.
        let candles = vec![
            make_candle(10.0, 10.5, 8.5, 9.0),
            make_candle(9.5, 11.5, 9.2, 11.0),
        ];
        let blocks = find_order_blocks(&candles, Some(0));

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, OrderBlockKind::Bullish);
        assert_eq!(blocks[0].low, 8.5);
        assert_eq!(blocks[0].high, 10.5);
    }

    #[test]
    fn test_bearish_order_block() {
        let candles = vec![
            make_candle(9.0, 10.5, 8.5, 10.0),
            make_candle(10.0, 10.2, 8.8, 9.0),
        ];
        let blocks = find_order_blocks(&candles, Some(0));

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, OrderBlockKind::Bearish);
        assert_eq!(blocks[0].low, 8.5);
        assert_eq!(blocks[0].high, 10.5);
    }

    #[test]
    fn test_pair_yields_at_most_one_block() {
        // A pair can never be both: the precursor direction decides.
        let candles = vec![
            make_candle(10.0, 10.5, 8.5, 9.0),
            make_candle(9.5, 11.5, 9.2, 11.0),
            make_candle(11.0, 12.0, 10.5, 11.8),
            make_candle(11.8, 12.0, 10.0, 10.2),
        ];
        let blocks = find_order_blocks(&candles, Some(0));

        // Pair (0,1): bullish OB. Pair (1,2): both bullish, nothing.
        // Pair (2,3): bearish OB.
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind, OrderBlockKind::Bullish);
        assert_eq!(blocks[1].kind, OrderBlockKind::Bearish);
    }

    #[test]
    fn test_doji_triggers_nothing() {
        let candles = vec![
            make_candle(10.0, 10.5, 9.5, 10.0), // doji precursor
            make_candle(9.8, 11.5, 9.5, 11.0),
            make_candle(11.0, 11.5, 10.5, 11.0), // doji confirmation for pair (1,2)? index 1 is bullish
        ];
        let blocks = find_order_blocks(&candles, Some(0));
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_default_lookback_skips_early_pairs() {
        // Reversal pair sits at (0,1); with the default lookback of 3 the
        // scan starts past it.
        let candles = vec![
            make_candle(10.0, 10.5, 8.5, 9.0),
            make_candle(9.5, 11.5, 9.2, 11.0),
            make_candle(11.0, 12.0, 10.5, 11.8),
            make_candle(11.5, 12.5, 11.0, 12.0),
            make_candle(12.0, 13.0, 11.5, 12.5),
        ];
        let blocks = find_order_blocks(&candles, None);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_default_lookback_finds_later_pairs() {
        let mut candles = vec![
            make_candle(10.0, 10.5, 9.5, 10.2),
            make_candle(10.2, 10.8, 9.8, 10.5),
            make_candle(10.5, 11.0, 10.0, 10.8),
        ];
        // Reversal pair at (3,4), inside the default scan range.
        candles.push(make_candle(10.8, 11.0, 9.0, 9.5));
        candles.push(make_candle(9.5, 12.0, 9.3, 11.5));

        let blocks = find_order_blocks(&candles, None);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, OrderBlockKind::Bullish);
        assert_eq!(blocks[0].low, 9.0);
        assert_eq!(blocks[0].high, 11.0);
    }

    #[test]
    fn test_too_few_candles() {
        assert!(find_order_blocks(&[], None).is_empty());
        let one = vec![make_candle(10.0, 10.5, 9.5, 10.2)];
        assert!(find_order_blocks(&one, Some(0)).is_empty());
    }
}
