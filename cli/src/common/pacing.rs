//! # Simulated Latency (`common::pacing`)
//!
//! File: cli/src/common/pacing.rs
//!
//! The chat assistant and the toolkit demos answer instantly but pause before
//! showing the result, the way a person typing (or a model generating) would.
//! This module holds that single helper. There is no queue, retry, or
//! cancellation contract: dropping the future drops the value with it.
//!
use std::time::Duration;
use tracing::trace;

/// Resolves to `value` after `delay`. A zero delay resolves without touching the timer.
pub async fn delayed<T>(delay: Duration, value: T) -> T {
    if !delay.is_zero() {
        trace!("pausing for {:?}", delay);
        tokio::time::sleep(delay).await;
    }
    value
}
