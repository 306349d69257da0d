use std::{
    collections::HashSet,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Keys of the delegated analyses currently running.
#[derive(Debug, Clone, Default)]
pub struct InFlightAnalyses {
    keys: Arc<Mutex<HashSet<String>>>,
}

impl InFlightAnalyses {
    /// Registers `key`, or returns `None` when an analysis for it is already
    /// pending. The key is released when the guard is dropped.
    pub fn try_acquire(&self, key: &str) -> Option<InFlightGuard> {
        if !self.lock().insert(key.to_string()) {
            return None;
        }

        Some(InFlightGuard {
            keys: Arc::clone(&self.keys),
            key: key.to_string(),
        })
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.lock().contains(key)
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.keys.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug)]
pub struct InFlightGuard {
    keys: Arc<Mutex<HashSet<String>>>,
    key: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}
