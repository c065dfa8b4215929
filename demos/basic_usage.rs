//! Basic encoder usage example
//!
//! Demonstrates encoding points with tags, typed fields and timestamps.
//!
//! Run with: cargo run --example basic_usage

use influx_line::prelude::*;

fn print_line(bytes: &[u8]) {
    println!("   {}", String::from_utf8_lossy(bytes));
}

fn main() -> Result<()> {
    println!("=== Influx Line - Basic Usage Example ===\n");

    println!("1. Fields only, server assigns the time:");
    print_line(&encode("weather", [("", ""); 0], [("temperature", 8.0)], None)?);

    println!("\n2. Tags, typed fields and an explicit timestamp:");
    let line = Point::new("weather")
        .tag("station", "A1")
        .field("temperature", 8.0)
        .field("readings", 12)
        .field("calibrated", true)
        .field("note", "sensor \"B\" offline")
        .timestamp(1_533_390_240_607_501_568_i64)
        .encode()?;
    print_line(&line);

    println!("\n3. Keys and tag values with special characters are escaped:");
    print_line(&encode("m", [("t t", "v,v"), ("u=u", "v,v")], [("x", "y")], None)?);

    println!("\n4. Zero timestamps under both policies:");
    let point = Point::new("m").field("x", 1).timestamp(0_i64);
    print_line(&point.encode()?);
    print_line(&point.encode_with(&LineEncoder::legacy())?);

    println!("\n5. Invalid input is rejected without output:");
    let no_tags: [(&str, &str); 0] = [];
    if let Err(e) = encode("", no_tags, [("x", 1)], None) {
        println!("   empty measurement: {}", e);
    }
    if let Err(e) = encode("m", no_tags, Vec::<(&str, f64)>::new(), None) {
        println!("   no fields: {}", e);
    }
    if let Err(e) = Point::new("m").field("x", 1).timestamp(5.0).encode() {
        println!("   float timestamp: {}", e);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
