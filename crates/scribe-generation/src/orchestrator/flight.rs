//! Global single-flight slot.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Holds the label of the one generation allowed in flight.
#[derive(Debug, Default)]
pub(crate) struct FlightSlot {
    current: Mutex<Option<String>>,
}

impl FlightSlot {
    /// Claim the slot for `label`, or return the label already holding it.
    pub(crate) fn try_begin(&self, label: &str) -> Result<FlightGuard<'_>, String> {
        let mut current = self.lock();
        if let Some(in_flight) = current.as_ref() {
            return Err(in_flight.clone());
        }
        *current = Some(label.to_string());
        Ok(FlightGuard { slot: self })
    }

    pub(crate) fn current(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases the slot on drop: success, failure, or the future being dropped.
#[derive(Debug)]
pub(crate) struct FlightGuard<'a> {
    slot: &'a FlightSlot,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        *self.slot.lock() = None;
    }
}
