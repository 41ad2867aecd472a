//! Core data models for the Timesheet Engine.
//!
//! This module contains the shift records, the owner's record set, the
//! profile printed on the timesheet and the template cell types.

mod aggregated;
mod profile;
mod shift;
mod shift_book;
mod template_cell;
mod work;

pub use aggregated::AggregatedSubjectShift;
pub use profile::UserProfile;
pub use shift::{Category, ShiftKey, ShiftRecord};
pub use shift_book::{PromotionOutcome, ShiftBook, SkippedShift};
pub use template_cell::{Align, CellStyle, CellValue, TemplateCell};
pub use work::WorkTemplate;
