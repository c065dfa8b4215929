//! Log record example
//!
//! Builds the kind of point a logging handler would emit for one record and
//! sends it as a single UDP datagram, without waiting for any reply.
//!
//! Run with: cargo run --example log_record
//! Send to a server with: INFLUX_UDP_ADDR=127.0.0.1:8089 cargo run --example log_record

use influx_line::prelude::*;
use std::net::UdpSocket;

// Syslog severity for INFO
const LEVEL_INFO: u8 = 6;

fn main() -> Result<()> {
    let point = Point::new("logs")
        .tag("host", "test-host")
        .tag("level", LEVEL_INFO)
        .tag("level_name", "INFO")
        .tag("facility", "log_record")
        .tag("logger", module_path!())
        .field("message", "Processed 10 mails")
        .field("file", file!())
        .field("line", line!())
        .field("pid", std::process::id())
        .field("emails_processed", 10)
        .field("disk_utilization", 73.1)
        .timestamp(Timestamp::now()?);

    let line = point.encode()?;
    println!("{}", String::from_utf8_lossy(&line));

    if let Ok(addr) = std::env::var("INFLUX_UDP_ADDR") {
        let sent = UdpSocket::bind("0.0.0.0:0").and_then(|socket| socket.send_to(&line, &addr));
        match sent {
            Ok(n) => println!("sent {} bytes to {}", n, addr),
            Err(e) => eprintln!("send to {} failed: {}", addr, e),
        }
    }

    Ok(())
}
