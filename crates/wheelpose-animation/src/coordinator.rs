//! Advisory cap on concurrently running animations.
//!
//! Pickers and navigation bars ask the coordinator before starting a
//! transition. The coordinator only advises: [`AnimationCoordinator::register_animation`]
//! always succeeds, so the cap holds only for callers that consult
//! [`AnimationCoordinator::should_animate`] first. Already admitted animations
//! are never revoked when newcomers hit the cap; newcomers are refused instead.

use std::sync::{Mutex, MutexGuard, PoisonError};

use wheelpose_core::collections::map::{new_set, HashSet};

/// Default number of animations admitted at once.
pub const DEFAULT_MAX_CONCURRENT_ANIMATIONS: usize = 10;

/// Set of admitted animation ids shared by every widget of an application.
#[derive(Debug)]
pub struct AnimationCoordinator {
    max_concurrent: usize,
    active: Mutex<HashSet<String>>,
}

impl Default for AnimationCoordinator {
    fn default() -> Self {
        Self::with_max_concurrent(DEFAULT_MAX_CONCURRENT_ANIMATIONS)
    }
}

impl AnimationCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_concurrent(max_concurrent: usize) -> Self {
        Self {
            max_concurrent,
            active: Mutex::new(new_set()),
        }
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    fn active(&self) -> MutexGuard<'_, HashSet<String>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks `id` as running. Idempotent; ignores the cap.
    ///
    /// Returns `true` when the id was not registered before.
    pub fn register_animation(&self, id: &str) -> bool {
        let mut active = self.active();
        if active.contains(id) {
            return false;
        }
        active.insert(id.to_owned());
        if active.len() > self.max_concurrent {
            log::debug!(
                "animation {id} registered over the advisory cap ({} > {})",
                active.len(),
                self.max_concurrent
            );
        }
        true
    }

    /// Forgets `id`. Unknown ids are ignored.
    ///
    /// Returns `true` when the id was registered.
    pub fn unregister_animation(&self, id: &str) -> bool {
        self.active().remove(id)
    }

    /// `true` if `id` is already running or there is room for one more.
    pub fn should_animate(&self, id: &str) -> bool {
        let active = self.active();
        active.contains(id) || active.len() < self.max_concurrent
    }

    /// Checks and registers under one lock, so two callers racing for the
    /// last slot cannot both be admitted.
    pub fn try_begin(&self, id: &str) -> bool {
        let mut active = self.active();
        if active.contains(id) {
            return true;
        }
        if active.len() >= self.max_concurrent {
            log::trace!("animation {id} refused, {} running", active.len());
            return false;
        }
        active.insert(id.to_owned());
        true
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().contains(id)
    }

    pub fn active_count(&self) -> usize {
        self.active().len()
    }
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
