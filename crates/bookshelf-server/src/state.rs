//! Application state shared across handlers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::usecase::Usecases;

/// Liveness flag with thread-safe get/set.
///
/// Starts unhealthy; the binary flips it once the listener is bound.
/// Clones share the same underlying flag, so whoever holds a clone can
/// mutate what the health handler reports.
#[derive(Debug, Clone, Default)]
pub struct Health(Arc<AtomicBool>);

impl Health {
    /// Create a new flag, initially unhealthy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current liveness state.
    pub fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Set the liveness state.
    pub fn set(&self, healthy: bool) {
        self.0.store(healthy, Ordering::SeqCst);
    }
}

/// Application state shared across all handlers.
///
/// Generic over the usecase implementation so tests can substitute a
/// fake. Cloneable and extractable in handlers via `State<AppState<U>>`.
pub struct AppState<U> {
    usecases: Arc<U>,
    health: Health,
}

impl<U: Usecases> AppState<U> {
    /// Create new application state.
    pub fn new(usecases: U, health: Health) -> Self {
        Self {
            usecases: Arc::new(usecases),
            health,
        }
    }

    /// Get a reference to the usecase implementation.
    pub fn usecases(&self) -> &U {
        &self.usecases
    }

    /// Get a reference to the liveness flag.
    pub fn health(&self) -> &Health {
        &self.health
    }
}

impl<U> Clone for AppState<U> {
    fn clone(&self) -> Self {
        Self {
            usecases: Arc::clone(&self.usecases),
            health: self.health.clone(),
        }
    }
}

impl<U> std::fmt::Debug for AppState<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("health", &self.health)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_starts_unhealthy() {
        assert!(!Health::new().get());
    }

    #[test]
    fn health_clones_share_state() {
        let health = Health::new();
        let other = health.clone();

        health.set(true);
        assert!(other.get());

        other.set(false);
        assert!(!health.get());
    }
}
