//! Integration tests for the line encoder
//!
//! These tests verify:
//! - Byte-exact output for tags, fields and timestamps
//! - Escaping of keys, tag values and string fields
//! - Fail-fast validation
//! - Zero timestamp handling for both policies
//! - Configuration loading

use influx_line::prelude::*;
use std::collections::HashMap;

const NO_TAGS: [(&str, &str); 0] = [];
const TS: i64 = 1_533_390_240_607_501_568;

fn line(bytes: Result<Vec<u8>>) -> String {
    String::from_utf8(bytes.expect("encoding failed")).expect("output is utf-8")
}

#[test]
fn test_one_field() {
    let result = line(encode("weather", NO_TAGS, [("temperature", 8.0)], None));
    assert_eq!(result, "weather temperature=8.0");
}

#[test]
fn test_one_tag_one_field() {
    let result = line(encode(
        "weather",
        [("station", "A1")],
        [("temperature", 8.0)],
        None,
    ));
    assert_eq!(result, "weather,station=A1 temperature=8.0");
}

#[test]
fn test_one_field_with_timestamp() {
    let result = line(encode(
        "weather",
        NO_TAGS,
        [("temperature", 8.0)],
        Some(Timestamp::from_nanos(TS)),
    ));
    assert_eq!(result, "weather temperature=8.0 1533390240607501568");
}

#[test]
fn test_measurement_with_trailing_backslash() {
    assert_eq!(line(encode("a\\", NO_TAGS, [("x", 1)], None)), r"a\\ x=1i");
    assert_eq!(
        line(encode("a\\", [("t", "v")], [("x", 1)], None)),
        r"a\\,t=v x=1i"
    );
}

#[test]
fn test_measurement_escaped_by_default_raw_in_legacy_mode() {
    assert_eq!(
        line(encode("cpu load", NO_TAGS, [("x", 1)], None)),
        r"cpu\ load x=1i"
    );
    assert_eq!(
        line(LineEncoder::legacy().encode("cpu load", NO_TAGS, [("x", 1)], None)),
        "cpu load x=1i"
    );
}

#[test]
fn test_tag_int_value() {
    let result = line(encode("m", [("t", 1)], [("x", "y")], None));
    assert_eq!(result, "m,t=1 x=\"y\"");
}

#[test]
fn test_field_int_value() {
    let result = line(encode("m", NO_TAGS, [("i", 3)], None));
    assert_eq!(result, "m i=3i");
}

#[test]
fn test_field_bool_values() {
    assert_eq!(line(encode("m", NO_TAGS, [("b", true)], None)), "m b=true");
    assert_eq!(line(encode("m", NO_TAGS, [("b", false)], None)), "m b=false");
}

#[test]
fn test_escape_tags_key_and_value() {
    let result = line(encode(
        "m",
        [("t t", "v,v"), ("u=u", "v,v")],
        [("x", "y")],
        None,
    ));
    assert_eq!(result, r#"m,t\ t=v\,v,u\=u=v\,v x="y""#);
}

#[test]
fn test_escape_field_keys() {
    let result = line(encode("m", NO_TAGS, [("t t", "v,v"), ("u=u", "v,v")], None));
    assert_eq!(result, r#"m t\ t="v,v",u\=u="v,v""#);
}

#[test]
fn test_escape_field_keys_awkward() {
    let result = line(encode("m", NO_TAGS, [("t\\,t", "val")], None));
    assert_eq!(result, r#"m t\\\,t="val""#);
}

#[test]
fn test_string_field_quotes_and_backslashes() {
    let result = line(encode(
        "m",
        NO_TAGS,
        [("msg", r#"path "C:\tmp" a=b, c"#)],
        None,
    ));
    assert_eq!(result, r#"m msg="path \"C:\\tmp\" a=b, c""#);
}

#[test]
fn test_utf8_message() {
    let result = line(encode("xyz", NO_TAGS, [("message", "Yes: \u{270C}")], None));
    assert_eq!(result, "xyz message=\"Yes: \u{270C}\"");
}

#[test]
fn test_mixed_field_types_are_sorted() {
    let point = Point::new("xyz")
        .tag("level_name", "INFO")
        .tag("host", "test-host")
        .field("message", "Processed 10 mails")
        .field("emails_processed", 10)
        .field("disk_utilization", 73.1)
        .field("debug", false);

    let result = line(point.encode());
    assert_eq!(
        result,
        "xyz,host=test-host,level_name=INFO \
         debug=false,disk_utilization=73.1,emails_processed=10i,message=\"Processed 10 mails\""
    );
}

#[test]
fn test_insertion_order_does_not_matter() {
    let forward: Vec<(&str, i64)> = vec![("a", 1), ("b", 2), ("c", 3)];
    let backward: Vec<(&str, i64)> = forward.iter().rev().copied().collect();

    assert_eq!(
        encode("m", [("x", "1"), ("y", "2")], forward, None),
        encode("m", [("y", "2"), ("x", "1")], backward, None)
    );
}

#[test]
fn test_hash_map_inputs() {
    let mut tags = HashMap::new();
    tags.insert("station", "A1");
    tags.insert("region", "north");

    let mut fields: HashMap<&str, FieldValue> = HashMap::new();
    fields.insert("temperature", 8.0.into());
    fields.insert("ok", true.into());

    let result = line(encode("weather", &tags, &fields, None));
    assert_eq!(result, "weather,region=north,station=A1 ok=true,temperature=8.0");
}

#[test]
fn test_empty_fields_fail() {
    let err = encode("weather", NO_TAGS, Vec::<(&str, f64)>::new(), None).unwrap_err();
    assert_eq!(err, EncodeError::EmptyFields);
    assert_eq!(err.to_string(), "need at least one field value.");
}

#[test]
fn test_empty_measurement_fail() {
    let err = encode("", [("x", "y")], [("x", "y")], None).unwrap_err();
    assert_eq!(err, EncodeError::InvalidMeasurement);
    assert_eq!(err.to_string(), "none or empty measurement");
}

#[test]
fn test_float_timestamp_fail() {
    let err = Point::new("m")
        .tag("x", "y")
        .field("x", "y")
        .timestamp(5.0)
        .encode()
        .unwrap_err();
    assert!(matches!(err, EncodeError::InvalidTimestamp { .. }));
    assert!(err.to_string().starts_with("ts not an integer"));
}

#[test]
fn test_overflowing_timestamp_fail() {
    let err = Point::new("m").field("x", 1).timestamp(u64::MAX).encode().unwrap_err();
    assert!(matches!(err, EncodeError::InvalidTimestamp { .. }));
}

#[test]
fn test_non_finite_float_fail() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = encode("m", NO_TAGS, [("v", value)], None).unwrap_err();
        assert_eq!(err, EncodeError::non_finite("v"));
    }
}

// A present zero timestamp is the epoch, not "absent". The legacy encoder
// keeps the historical behavior of dropping it.
#[test]
fn test_zero_timestamp_is_epoch_by_default() {
    let result = line(encode("m", NO_TAGS, [("x", 1)], Some(Timestamp::EPOCH)));
    assert_eq!(result, "m x=1i 0");
}

#[test]
fn test_zero_timestamp_omitted_in_legacy_mode() {
    let encoder = LineEncoder::legacy();
    let result = line(encoder.encode("m", NO_TAGS, [("x", 1)], Some(Timestamp::EPOCH)));
    assert_eq!(result, "m x=1i");
}

#[test]
fn test_absent_timestamp_omitted_in_both_modes() {
    for encoder in [LineEncoder::new(), LineEncoder::legacy()] {
        let result = line(encoder.encode("m", NO_TAGS, [("x", 1)], None));
        assert_eq!(result, "m x=1i");
    }
}

#[test]
fn test_encoder_from_json_config() {
    let config = EncoderConfig::from_json(r#"{"zero_timestamp": "omit"}"#).unwrap();
    let encoder = LineEncoder::with_config(config);
    let point = Point::new("m").field("x", 1).timestamp(0_i64);
    assert_eq!(line(point.encode_with(&encoder)), "m x=1i");
}

#[test]
fn test_timestamp_from_seconds_like_a_log_record() {
    let ts = Timestamp::from_millis(1_533_390_240_607).unwrap();
    let result = line(
        Point::new("test")
            .tag("level_name", "INFO")
            .field("message", "Hello")
            .timestamp(ts)
            .encode(),
    );
    assert_eq!(
        result,
        "test,level_name=INFO message=\"Hello\" 1533390240607000000"
    );
}

#[test]
fn test_output_has_no_trailing_newline() {
    let bytes = encode("m", NO_TAGS, [("x", 1)], None).unwrap();
    assert_ne!(bytes.last(), Some(&b'\n'));
}

#[test]
fn test_batch_of_points() {
    let points = vec![
        Point::new("cpu").tag("host", "a").field("usage", 0.5),
        Point::new("cpu").tag("host", "b").field("usage", 0.25),
    ];
    let result = line(LineEncoder::new().encode_batch(&points));
    assert_eq!(result, "cpu,host=a usage=0.5\ncpu,host=b usage=0.25");
}
