//! Basic logger usage example
//!
//! Demonstrates the standard logger, both argument styles and the production filter.
//!
//! Run with: cargo run --example basic_usage
//! Or in production mode: MODE=PROD cargo run --example basic_usage

use leveled_log::prelude::*;
use leveled_log::{global, info, warn};

fn main() -> Result<()> {
    println!("=== Leveled Log - Basic Usage Example ===\n");

    let logger = standard();
    println!("1. Standard logger running in {} mode:", logger.mode_str());

    // Values are joined with single spaces
    logger.debug(&[&"cache warmed with", &128, &"entries"])?;
    logger.info(&[&"listening on port", &8080])?;

    // Templates go through format_args!
    warn!(logger, "slow request: {}ms", 870)?;
    logger.error_fmt(format_args!("upstream returned {}", 503))?;

    println!("\n2. Free functions on the standard logger:");
    global::print(&[&"print is an alias of info"])?;

    println!("\n3. Switching to production mode drops DEBUG and INFO:");
    logger.production_mode();
    info!(logger, "not shown")?;
    warn!(logger, "shown as JSON")?;

    println!("\n4. A helper reporting its own caller:");
    logger.development_mode();
    logger.set_call_depth(1);
    report_slow_query("SELECT 1", 1200)?;
    logger.set_call_depth(0);

    let metrics = logger.metrics();
    println!(
        "\nwritten={} suppressed={} failures={}",
        metrics.written(),
        metrics.suppressed(),
        metrics.write_failures()
    );

    println!("\n=== Example completed successfully! ===");
    Ok(())
}

#[inline(never)]
fn report_slow_query(query: &str, millis: u64) -> Result<()> {
    warn!(standard(), "slow query ({}ms): {}", millis, query)
}
