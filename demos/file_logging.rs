//! File logging example
//!
//! Demonstrates a file sink, swapping sinks at runtime and loading the format
//! configuration from JSON.
//!
//! Run with: cargo run --example file_logging

use leveled_log::prelude::*;
use leveled_log::sinks::FileSink;
use leveled_log::{error, warn};

const CONFIG: &str = r#"{
    "dev": { "date": true, "time": true, "level": true, "file": true, "line": true, "func": true },
    "additional_info": "demo=file_logging"
}"#;

fn main() -> Result<()> {
    println!("=== Leveled Log - File Logging Example ===\n");

    let config = FormatConfig::from_json(CONFIG)?;
    println!("1. Loaded format configuration:\n{}\n", config.to_json()?);

    let logger = Logger::builder()
        .format_config(config)
        .sink(FileSink::new("application.log")?)
        .build();

    println!("2. Logging to application.log:");
    logger.info(&[&"application started"])?;
    warn!(logger, "retry {} of {}", 1, 3)?;
    error!(logger, "giving up after {} attempts", 3)?;

    println!("3. Switching to stdout:");
    logger.set_sink(Box::new(StdoutSink::new()));
    logger.info(&[&"now printing to stdout"])?;

    println!("\n   Contents of application.log:");
    for line in std::fs::read_to_string("application.log")?.lines() {
        println!("   {}", line);
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
