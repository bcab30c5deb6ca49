//! Booking form controller
//!
//! The booking dialog is a two-state machine. Opening it starts a fresh
//! [`BookingSession`]; every quantity change rebuilds the name fields from
//! scratch, and every edit re-runs validation. The controller only decides
//! whether submission may proceed; the payment hand-off lives elsewhere.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visibility of the booking dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormState {
    #[default]
    Closed,
    Open,
}

/// First and last name of the person collecting one canoe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamePair {
    pub first_name: String,
    pub last_name: String,
}

impl NamePair {
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Both names contain something other than whitespace.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty() && !self.last_name.trim().is_empty()
    }
}

/// Which half of a [`NamePair`] an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    First,
    Last,
}

/// Ephemeral state of one open booking dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingSession {
    item_count: u32,
    fields: Vec<NamePair>,
    is_valid: bool,
}

impl BookingSession {
    #[must_use]
    pub const fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Name pairs in canoe order; canoe `i` lives at `fields()[i - 1]`.
    #[must_use]
    pub fn fields(&self) -> &[NamePair] {
        &self.fields
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    fn rebuild(&mut self, count: u32) {
        self.item_count = count;
        self.fields = vec![NamePair::default(); count as usize];
    }

    fn recompute_validity(&mut self) -> bool {
        // Zero canoes is not a bookable state, so the empty case stays invalid.
        self.is_valid = self.item_count > 0 && self.fields.iter().all(NamePair::is_complete);
        self.is_valid
    }

    fn first_incomplete(&self) -> Option<usize> {
        self.fields
            .iter()
            .position(|pair| !pair.is_complete())
            .map(|idx| idx + 1)
    }
}

/// Enabled state of the dialog's two action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitGate {
    pub submit_enabled: bool,
    pub cancel_enabled: bool,
}

/// Payload handed to the payment service once the gate opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub canoes: u32,
    pub names: Vec<NamePair>,
    pub total_price: u64,
}

/// Reasons a booking transition or submission is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("booking form is not open")]
    NotOpen,
    #[error("no canoe number {index} in a booking of {count}")]
    UnknownItem { index: usize, count: u32 },
    #[error("select at least one canoe")]
    NoItems,
    #[error("canoe {index} is missing a first or last name")]
    MissingName { index: usize },
}

/// State machine behind the booking dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingController {
    state: FormState,
    unit_price: u32,
    session: BookingSession,
}

impl BookingController {
    #[must_use]
    pub fn new(unit_price: u32) -> Self {
        Self {
            state: FormState::Closed,
            unit_price,
            session: BookingSession::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> FormState {
        self.state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open)
    }

    #[must_use]
    pub const fn unit_price(&self) -> u32 {
        self.unit_price
    }

    #[must_use]
    pub const fn session(&self) -> &BookingSession {
        &self.session
    }

    /// `item_count * unit_price`, derived on every call.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        u64::from(self.session.item_count) * u64::from(self.unit_price)
    }

    /// Show the dialog with a fresh session: no canoes, no fields, submit off.
    pub fn open(&mut self) {
        self.state = FormState::Open;
        self.session = BookingSession::default();
        self.validate();
    }

    /// Hide the dialog and discard the session.
    ///
    /// Returns `false` when the dialog was already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = FormState::Closed;
        self.session = BookingSession::default();
        true
    }

    /// Replace the field set with `count` empty name pairs.
    ///
    /// Previously typed names are dropped even when the count only grows.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotOpen`] while the dialog is closed.
    pub fn set_item_count(&mut self, count: u32) -> Result<(), BookingError> {
        if !self.is_open() {
            return Err(BookingError::NotOpen);
        }
        self.session.rebuild(count);
        self.validate();
        log::debug!(
            "booking: {count} canoes selected, total {}",
            self.total_price()
        );
        Ok(())
    }

    /// Store a name for canoe `index` (1-based) and re-validate.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotOpen`] while closed and
    /// [`BookingError::UnknownItem`] for an index outside `1..=item_count`.
    pub fn set_name(
        &mut self,
        index: usize,
        field: NameField,
        value: impl Into<String>,
    ) -> Result<(), BookingError> {
        if !self.is_open() {
            return Err(BookingError::NotOpen);
        }
        let count = self.session.item_count;
        let pair = index
            .checked_sub(1)
            .and_then(|slot| self.session.fields.get_mut(slot))
            .ok_or(BookingError::UnknownItem { index, count })?;
        match field {
            NameField::First => pair.first_name = value.into(),
            NameField::Last => pair.last_name = value.into(),
        }
        self.validate();
        Ok(())
    }

    /// # Errors
    ///
    /// See [`BookingController::set_name`].
    pub fn set_first_name(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), BookingError> {
        self.set_name(index, NameField::First, value)
    }

    /// # Errors
    ///
    /// See [`BookingController::set_name`].
    pub fn set_last_name(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), BookingError> {
        self.set_name(index, NameField::Last, value)
    }

    /// Recompute validity from the current fields and return it.
    pub fn validate(&mut self) -> bool {
        self.session.recompute_validity()
    }

    #[must_use]
    pub const fn gate(&self) -> SubmitGate {
        let open = self.is_open();
        SubmitGate {
            submit_enabled: open && self.session.is_valid,
            cancel_enabled: open,
        }
    }

    /// Build the hand-off for the payment service when the gate is open.
    ///
    /// # Errors
    ///
    /// Explains the first reason the booking cannot proceed.
    pub fn submit(&self) -> Result<BookingRequest, BookingError> {
        if !self.is_open() {
            return Err(BookingError::NotOpen);
        }
        if self.session.item_count == 0 {
            return Err(BookingError::NoItems);
        }
        if let Some(index) = self.session.first_incomplete() {
            return Err(BookingError::MissingName { index });
        }
        Ok(BookingRequest {
            canoes: self.session.item_count,
            names: self.session.fields.clone(),
            total_price: self.total_price(),
        })
    }
}
