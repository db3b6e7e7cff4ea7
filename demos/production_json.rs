//! Production JSON example
//!
//! Shows the production shape with every optional field switched on, a stack
//! trace attached to an error, and the process-ending severities.
//!
//! Run with: cargo run --example production_json

use leveled_log::prelude::*;
use leveled_log::{error, panic_log};
use std::fmt;

#[derive(Debug)]
struct PaymentError {
    order: u64,
}

impl fmt::Display for PaymentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "payment for order {} was declined", self.order)
    }
}

impl std::error::Error for PaymentError {}

fn main() -> Result<()> {
    let flags = FormatFlags::production()
        .with_info(true)
        .with_file(true)
        .with_line(true)
        .with_func(true)
        .with_stack(true);
    let logger = Logger::builder()
        .mode(Mode::Production)
        .format_config(
            FormatConfig::default()
                .with_prod(flags)
                .with_additional_info("service=checkout"),
        )
        .sink(StdoutSink::new())
        .build();

    logger.info(&[&"dropped in production"])?;
    error!(logger, "charge failed: \"{}\"\n(retrying)", "card_declined")?;
    logger.stack_trace_error(&PaymentError { order: 4211 })?;

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        panic_log!(logger, "ledger out of balance by {}", 12);
    }));
    println!("panic caught: {}", outcome.is_err());

    Ok(())
}
