//! Directional alert generation from trend bias and detected zones

use serde::Serialize;

use crate::analysis::fvg::{FairValueGap, FvgKind};
use crate::analysis::order_blocks::{OrderBlock, OrderBlockKind};
use crate::analysis::structure::Trend;

/// A human-readable directional suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub text: String,
}

/// Generates directional alerts from the trend bias and the detected zones.
///
/// A bullish bias emits one buy alert per bullish order block, then one per
/// bullish fair value gap; a bearish bias does the symmetric filtering on
/// the bearish entries. Opposite-polarity zones are ignored entirely, and
/// an unset trend yields no alerts at all. There is no ranking, dedup, or
/// cap - one alert per matching zone, in the input lists' order.
///
/// Zone bounds are rendered with two decimals; the structured report keeps
/// the full-precision values.
pub fn generate_alerts(
    trend: Trend,
    order_blocks: &[OrderBlock],
    fair_value_gaps: &[FairValueGap],
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    match trend {
        Trend::Bullish => {
            for ob in order_blocks {
                if ob.kind == OrderBlockKind::Bullish {
                    alerts.push(Alert {
                        text: format!(
                            "Buy Alert: Price may react at OB {:.2}-{:.2}",
                            ob.low, ob.high
                        ),
                    });
                }
            }
            for fvg in fair_value_gaps {
                if fvg.kind == FvgKind::Bullish {
                    alerts.push(Alert {
                        text: format!(
                            "Buy Alert: Price may fill FVG {:.2}-{:.2}",
                            fvg.low, fvg.high
                        ),
                    });
                }
            }
        }
        Trend::Bearish => {
            for ob in order_blocks {
                if ob.kind == OrderBlockKind::Bearish {
                    alerts.push(Alert {
                        text: format!(
                            "Sell Alert: Price may react at OB {:.2}-{:.2}",
                            ob.low, ob.high
                        ),
                    });
                }
            }
            for fvg in fair_value_gaps {
                if fvg.kind == FvgKind::Bearish {
                    alerts.push(Alert {
                        text: format!(
                            "Sell Alert: Price may fill FVG {:.2}-{:.2}",
                            fvg.low, fvg.high
                        ),
                    });
                }
            }
        }
        Trend::Unset => {}
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_zones() -> (Vec<OrderBlock>, Vec<FairValueGap>) {
        let blocks = vec![
            OrderBlock {
                kind: OrderBlockKind::Bullish,
                low: 100.0,
                high: 105.0,
            },
            OrderBlock {
                kind: OrderBlockKind::Bearish,
                low: 110.0,
                high: 115.0,
            },
        ];
        let gaps = vec![
            FairValueGap {
                kind: FvgKind::Bullish,
                low: 102.0,
                high: 104.0,
            },
            FairValueGap {
                kind: FvgKind::Bearish,
                low: 112.0,
                high: 114.0,
            },
        ];
        (blocks, gaps)
    }

    #[test]
    fn test_bullish_trend_filters_bearish_zones() {
        let (blocks, gaps) = sample_zones();
        let alerts = generate_alerts(Trend::Bullish, &blocks, &gaps);

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].text, "Buy Alert: Price may react at OB 100.00-105.00");
        assert_eq!(alerts[1].text, "Buy Alert: Price may fill FVG 102.00-104.00");
        for alert in &alerts {
            assert!(!alert.text.contains("Sell"));
        }
    }

    #[test]
    fn test_bearish_trend_filters_bullish_zones() {
        let (blocks, gaps) = sample_zones();
        let alerts = generate_alerts(Trend::Bearish, &blocks, &gaps);

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].text, "Sell Alert: Price may react at OB 110.00-115.00");
        assert_eq!(alerts[1].text, "Sell Alert: Price may fill FVG 112.00-114.00");
        for alert in &alerts {
            assert!(!alert.text.contains("Buy"));
        }
    }

    #[test]
    fn test_unset_trend_yields_no_alerts() {
        let (blocks, gaps) = sample_zones();
        assert!(generate_alerts(Trend::Unset, &blocks, &gaps).is_empty());
    }

    #[test]
    fn test_order_blocks_come_before_gaps() {
        let (blocks, gaps) = sample_zones();
        let alerts = generate_alerts(Trend::Bullish, &blocks, &gaps);

        assert!(alerts[0].text.contains("OB"));
        assert!(alerts[1].text.contains("FVG"));
    }

    #[test]
    fn test_one_alert_per_matching_zone() {
        let blocks = vec![
            OrderBlock {
                kind: OrderBlockKind::Bullish,
                low: 100.0,
                high: 105.0,
            };
            3
        ];
        let alerts = generate_alerts(Trend::Bullish, &blocks, &[]);
        assert_eq!(alerts.len(), 3);
    }
}
