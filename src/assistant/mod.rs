//! Canned writing help for event descriptions plus the dashboard's planning
//! insights. Nothing here calls out to a model: output is a deterministic
//! function of the inputs, held back by a configurable delay so the front end
//! can show a pending state.

use std::time::Duration;

pub mod description;
pub mod insights;

pub use description::DescriptionAssistant;
pub use insights::{insights, Insight, InsightKind};

/// Waits before an assistant result is handed back.
pub trait Delay: Send + Sync {
    fn wait(&self, duration: Duration);
}

/// Returns immediately. Used in tests and when simulated latency is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&self, _duration: Duration) {}
}

/// Blocks the calling thread for the full duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Delay for ThreadSleep {
    fn wait(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<D: Delay + ?Sized> Delay for Box<D> {
    fn wait(&self, duration: Duration) {
        (**self).wait(duration)
    }
}
