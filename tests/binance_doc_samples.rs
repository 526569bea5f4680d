//! Sample messages from the Binance WebSocket docs, checked both as raw
//! JSON shape and through the kline parser.

use serde_json::Value;

use ict_analyst::analysis::Timeframe;
use ict_analyst::market::MessageParser;
use ict_analyst::market::providers::binance::BinanceParser;

#[test]
fn test_binance_kline_sample_from_docs() {
    let msg = r#"{"e":"kline","E":1672515782136,"s":"BNBBTC","k":{"t":1672515780000,"T":1672515839999,"s":"BNBBTC","i":"1m","f":100,"L":200,"o":"0.0010","c":"0.0020","h":"0.0025","l":"0.0010","v":"1000","n":100,"x":false,"q":"1.0000","V":"500","Q":"0.500","B":"123456"}}"#;
    let value: Value = serde_json::from_str(msg).expect("Binance kline sample should be valid JSON");

    assert_eq!(value["e"], "kline");
    assert_eq!(value["s"], "BNBBTC");
    assert_eq!(value["k"]["i"], "1m");
    assert_eq!(value["k"]["x"], false);

    let update = BinanceParser::new()
        .parse_message(msg)
        .expect("doc sample should parse to a kline update");
    assert_eq!(update.symbol, "BNBBTC");
    assert_eq!(update.interval, Timeframe::M1);
    assert_eq!(update.candle.get_timestamp(), 1672515780000);
    assert_eq!(update.candle.get_high(), 0.0025);
    assert!(!update.is_closed);
}

#[test]
fn test_binance_subscribe_frame_shape() {
    use ict_analyst::market::KlineStream;

    let frame = BinanceParser::new().format_subscribe(&KlineStream::new("BTCUSDT", Timeframe::H1));
    let value: Value = serde_json::from_str(&frame).expect("subscribe frame should be valid JSON");

    assert_eq!(value["method"], "SUBSCRIBE");
    assert_eq!(value["params"][0], "btcusdt@kline_1h");
    assert_eq!(value["id"], 1);
}

#[test]
fn test_binance_control_messages_produce_no_updates() {
    let parser = BinanceParser::new();

    // Subscription confirmation and a depth event, both non-kline.
    assert!(parser.parse_message(r#"{"result":null,"id":1}"#).is_none());
    let depth = r#"{"e":"depthUpdate","E":1672515782136,"s":"BNBBTC","U":157,"u":160,"b":[["0.0024","10"]],"a":[["0.0026","100"]]}"#;
    assert!(parser.parse_message(depth).is_none());
}
