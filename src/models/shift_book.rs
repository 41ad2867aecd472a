//! An owner's in-memory record set.
//!
//! [`ShiftBook`] is the only place shifts and work templates are mutated.
//! Every business rule runs before a mutation, so a rejected operation
//! leaves the book exactly as it was.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculation::{
    Rejection, ShiftCheck, check_duplicate_work, next_shift_id, promote_work, validate_edited_shift,
    validate_new_shift,
};
use crate::config::ShiftLimits;

use super::{ShiftKey, ShiftRecord, WorkTemplate};

/// A promoted shift that was not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedShift {
    /// Date the shift would have fallen on.
    pub date: NaiveDate,
    /// Rule that rejected it.
    pub rejection: Rejection,
}

/// Result of promoting a work template for one month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionOutcome {
    /// Shifts stored, in date order.
    pub added: Vec<ShiftRecord>,
    /// Dates rejected by the business rules.
    pub skipped: Vec<SkippedShift>,
}

/// Shifts and work templates of one owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftBook {
    shifts: Vec<ShiftRecord>,
    works: Vec<WorkTemplate>,
    #[serde(default)]
    limits: ShiftLimits,
}

impl ShiftBook {
    /// Creates an empty book enforcing `limits`.
    pub fn new(limits: ShiftLimits) -> Self {
        Self {
            shifts: Vec::new(),
            works: Vec::new(),
            limits,
        }
    }

    /// Creates a book over records loaded elsewhere. They are not re-validated.
    pub fn with_records(
        shifts: Vec<ShiftRecord>,
        works: Vec<WorkTemplate>,
        limits: ShiftLimits,
    ) -> Self {
        Self {
            shifts,
            works,
            limits,
        }
    }

    /// All stored shifts.
    pub fn shifts(&self) -> &[ShiftRecord] {
        &self.shifts
    }

    /// All registered work templates.
    pub fn works(&self) -> &[WorkTemplate] {
        &self.works
    }

    /// The limits this book enforces.
    pub fn limits(&self) -> &ShiftLimits {
        &self.limits
    }

    /// Adds a shift after validating it.
    ///
    /// The candidate's id is replaced with the next free id on its date.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::config::ShiftLimits;
    /// use timesheet_engine::models::{ShiftBook, ShiftRecord};
    ///
    /// let mut book = ShiftBook::new(ShiftLimits::default());
    /// let shift = ShiftRecord {
    ///     id: 0,
    ///     year: 2025,
    ///     month: 4,
    ///     day: 7,
    ///     label: String::new(),
    ///     class_name: "Physics".to_string(),
    ///     category: Default::default(),
    ///     teacher_name: String::new(),
    ///     start_time: "09:00".to_string(),
    ///     end_time: "11:00".to_string(),
    ///     break_minutes: 0,
    /// };
    ///
    /// let (key, check) = book.add(shift.clone()).unwrap();
    /// assert_eq!(key.id, 1);
    /// assert_eq!(check.weekly_minutes, 120);
    /// assert!(book.add(shift).is_err());
    /// assert_eq!(book.shifts().len(), 1);
    /// ```
    pub fn add(&mut self, mut candidate: ShiftRecord) -> Result<(ShiftKey, ShiftCheck), Rejection> {
        candidate.id = next_shift_id(&self.shifts, candidate.year, candidate.month, candidate.day);

        let check =
            validate_new_shift(&self.shifts, &candidate, &self.limits).inspect_err(|r| {
                warn!(key = %candidate.key(), rejection = %r, "Shift rejected");
            })?;

        let key = candidate.key();
        debug!(key = %key, weekly_minutes = check.weekly_minutes, "Shift added");
        self.shifts.push(candidate);
        Ok((key, check))
    }

    /// Replaces the shift at `original` with `candidate`.
    ///
    /// The id is kept when the date is unchanged; a shift moved to another
    /// date takes the next free id there.
    pub fn edit(
        &mut self,
        original: ShiftKey,
        mut candidate: ShiftRecord,
    ) -> Result<(ShiftKey, ShiftCheck), Rejection> {
        let moved = !candidate.is_on(original.year, original.month, original.day);
        candidate.id = if moved {
            next_shift_id(&self.shifts, candidate.year, candidate.month, candidate.day)
        } else {
            original.id
        };

        let check = validate_edited_shift(&self.shifts, original, &candidate, &self.limits)
            .inspect_err(|r| {
                warn!(key = %original, rejection = %r, "Shift edit rejected");
            })?;

        let key = candidate.key();
        if let Some(slot) = self.shifts.iter_mut().find(|s| s.key() == original) {
            *slot = candidate;
        }
        Ok((key, check))
    }

    /// Removes and returns the shift at `key`.
    pub fn delete(&mut self, key: ShiftKey) -> Result<ShiftRecord, Rejection> {
        let index = self
            .shifts
            .iter()
            .position(|s| s.key() == key)
            .ok_or(Rejection::NotFound { key })?;
        Ok(self.shifts.remove(index))
    }

    /// Registers a work template, replacing one with the same id.
    pub fn register_work(&mut self, work: WorkTemplate) -> Result<(), Rejection> {
        check_duplicate_work(&self.works, &work)?;

        match self.works.iter_mut().find(|w| w.id == work.id) {
            Some(slot) => *slot = work,
            None => self.works.push(work),
        }
        Ok(())
    }

    /// Promotes a work template into dated shifts for one month.
    ///
    /// Each date is validated against the book as it stands after the
    /// previous dates were added. Rejected dates are skipped and reported;
    /// the others are stored.
    pub fn promote_work(&mut self, work: &WorkTemplate, year: i32, month: u32) -> PromotionOutcome {
        let mut outcome = PromotionOutcome::default();

        for shift in promote_work(work, year, month, &self.shifts) {
            let date = shift.date();
            match self.add(shift) {
                Ok((key, _)) => {
                    if let Some(stored) = self.shifts.iter().find(|s| s.key() == key) {
                        outcome.added.push(stored.clone());
                    }
                }
                Err(rejection) => {
                    if let Some(date) = date {
                        outcome.skipped.push(SkippedShift { date, rejection });
                    }
                }
            }
        }

        outcome
    }
}
