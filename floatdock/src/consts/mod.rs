use std::sync::atomic::{AtomicU64, Ordering};

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONFIG_FILE: &str = "floatdock.json";
pub static GLOBAL_COUNTER: Counter = Counter::new();

/// Hands out mount ids, so a remounted panel never inherits the old one's drag state.
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    pub const fn new() -> Counter {
        Self {
            value: AtomicU64::new(0),
        }
    }

    pub fn next(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}
