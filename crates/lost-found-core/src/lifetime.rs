//! View Lifetime
//!
//! Requests are never cancelled. A view that goes away ends its lifetime,
//! and results arriving afterwards are dropped instead of applied.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Mark the owning view as torn down. Shared by every clone.
    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}
