use std::time::Duration;

use shared::{clean_digits, validate, AddressField, AddressRecord, FieldErrors};
use storage::AddressPersistence;
use tracing::{debug, info, warn};

use crate::{
    clock::{Clock, SystemClock},
    status::{StatusKind, StatusMessage, StatusTimings},
    summary::AddressSummary,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    /// Validation failed; nothing was written.
    Invalid,
    /// Validation passed but the store rejected the write.
    StorageFailed,
}

/// Owns the record being edited, its validation errors, and the status line.
pub struct FormController<P, C = SystemClock> {
    persistence: P,
    clock: C,
    timings: StatusTimings,
    record: AddressRecord,
    errors: FieldErrors,
    status: Option<StatusMessage>,
}

impl<P: AddressPersistence> FormController<P, SystemClock> {
    pub fn new(persistence: P) -> Self {
        Self::with_clock(persistence, SystemClock)
    }
}

impl<P: AddressPersistence, C: Clock> FormController<P, C> {
    /// Builds the controller and restores any persisted record.
    pub fn with_clock(persistence: P, clock: C) -> Self {
        let mut controller = Self {
            persistence,
            clock,
            timings: StatusTimings::default(),
            record: AddressRecord::default(),
            errors: FieldErrors::new(),
            status: None,
        };
        controller.load();
        controller
    }

    pub fn with_timings(mut self, timings: StatusTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Replaces the in-memory record with the persisted one, or the empty
    /// record when nothing usable is stored.
    pub fn load(&mut self) {
        match self.persistence.load() {
            Some(record) => {
                debug!("restored saved address");
                self.record = record;
            }
            None => {
                debug!("no saved address; starting empty");
                self.record = AddressRecord::default();
            }
        }
    }

    /// Applies one input edit. Phone and pincode keep digits only.
    pub fn update_field(&mut self, field: AddressField, raw_value: &str) {
        let value = if field.is_numeric() {
            clean_digits(raw_value)
        } else {
            raw_value.to_string()
        };
        self.record.set(field, value);
        self.errors.clear_field(field);
        self.status = None;
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = validate(&self.record);
        if !errors.is_empty() {
            debug!(invalid_fields = errors.len(), "address failed validation");
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }
        self.errors.clear();

        match self.persistence.save(&self.record) {
            Ok(()) => {
                info!("address saved");
                self.set_status(StatusKind::Saved);
                SubmitOutcome::Saved
            }
            Err(err) => {
                warn!(error = %err, "failed to save address");
                self.set_status(StatusKind::SaveFailed);
                SubmitOutcome::StorageFailed
            }
        }
    }

    pub fn clear(&mut self) {
        self.record = AddressRecord::default();
        self.errors.clear();
        if let Err(err) = self.persistence.remove() {
            warn!(error = %err, "failed to remove saved address");
        }
        info!("address cleared");
        self.set_status(StatusKind::Cleared);
    }

    /// Drops the status once its timer is due. Returns whether it was dropped.
    pub fn poll_status(&mut self) -> bool {
        let now = self.clock.now();
        let due = self
            .status
            .as_ref()
            .and_then(StatusMessage::timer)
            .is_some_and(|timer| timer.is_due(now));
        if due {
            self.status = None;
        }
        due
    }

    /// Time left before the current status expires, if it expires at all.
    pub fn status_expires_in(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.status
            .as_ref()
            .and_then(StatusMessage::timer)
            .map(|timer| timer.remaining(now))
    }

    pub fn record(&self) -> &AddressRecord {
        &self.record
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: AddressField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn summary(&self) -> Option<AddressSummary> {
        AddressSummary::from_record(&self.record)
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn set_status(&mut self, kind: StatusKind) {
        // Replacing the message drops the previous timer.
        self.status = Some(StatusMessage::new(kind, self.clock.now(), &self.timings));
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
