use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::LoadError;

/// Write-once slot for the first fatal read error of a load.
///
/// The first recorded error wins; later ones are dropped. Once sealed (after all workers
/// exit) nothing more can be recorded. Cloning shares the same slot.
#[derive(Clone, Default)]
pub struct FirstError {
    slot: Arc<Mutex<Option<LoadError>>>,
    sealed: Arc<AtomicBool>,
}

impl FirstError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `err` unless an error is already held or the slot is sealed.
    /// Never blocks on anything but the slot mutex. Returns true if `err` was stored.
    pub fn record(&self, err: LoadError) -> bool {
        if self.sealed.load(Ordering::Acquire) {
            log::debug!("error slot sealed, dropping: {}", err);
            return false;
        }
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            log::debug!("error already recorded, dropping: {}", err);
            return false;
        }
        *slot = Some(err);
        true
    }

    /// Close the slot. Called by the completion coordinator.
    pub fn seal(&self) {
        self.sealed.store(true, Ordering::Release);
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Acquire)
    }

    /// Take the recorded error, if any.
    pub fn take(&self) -> Option<LoadError> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

/// Check pipeline result after the drain: return the recorded read error, or log how many
/// rows the parser rejected.
pub fn check_for_read_error_or_rejects(
    first_error: &FirstError,
    rejected: u64,
) -> Result<(), LoadError> {
    if let Some(err) = first_error.take() {
        return Err(err);
    }
    if rejected > 0 {
        log::warn!("Skipped {} malformed rows", rejected);
    }
    Ok(())
}
