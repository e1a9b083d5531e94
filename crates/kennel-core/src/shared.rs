//! # Shared Engine
//!
//! One engine behind one lock, for hosts that run requests concurrently.
//!
//! ## Thread Safety
//! The engine itself has no internal locking. `reserve`, `release` and undo
//! are not safe under interleaving, so the whole engine sits behind a single
//! `Mutex` and every operation holds it until it returns.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  request A ──► with_engine_mut(|e| e.check_in(..)) ──┐                  │
//! │                                                      ▼                  │
//! │                                      Arc<Mutex<CheckInEngine>>          │
//! │                                                      ▲                  │
//! │  request B ──► with_engine(|e| e.state()) ───────────┘ (waits)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use crate::engine::{CheckInEngine, EngineConfig};

/// Cloneable handle to one engine instance.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    engine: Arc<Mutex<CheckInEngine>>,
}

impl SharedEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::from_engine(CheckInEngine::new(config))
    }

    pub fn from_engine(engine: CheckInEngine) -> Self {
        SharedEngine {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    /// Runs `f` with read access to the engine.
    ///
    /// ## Usage
    /// ```rust
    /// use kennel_core::SharedEngine;
    ///
    /// let shared = SharedEngine::new(Default::default());
    /// let queued = shared.with_engine(|engine| engine.state().queue_length);
    /// assert_eq!(queued, 0);
    /// ```
    pub fn with_engine<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CheckInEngine) -> R,
    {
        let engine = self.lock();
        f(&engine)
    }

    /// Runs `f` with write access to the engine.
    pub fn with_engine_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CheckInEngine) -> R,
    {
        let mut engine = self.lock();
        f(&mut engine)
    }

    fn lock(&self) -> MutexGuard<'_, CheckInEngine> {
        self.engine.lock().unwrap_or_else(|poisoned| {
            // Operations never panic mid-mutation, so the state is still usable.
            tracing::error!("Engine mutex poisoned by a panicking caller; recovering");
            poisoned.into_inner()
        })
    }
}

impl Default for SharedEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
