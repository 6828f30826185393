//! Transaction Manager: validated writes, each run as one atomic unit.
//!
//! Field-level rules are checked before any statement is issued
//! (`DatabaseError::Validation`); storage rejections roll the unit back and
//! surface as `DatabaseError::Constraint`.

mod active_treatment;
mod condition;
mod history;
mod medication;
mod person;
mod test_report;
mod treatment;

pub use active_treatment::*;
pub use condition::*;
pub use history::*;
pub use medication::*;
pub use person::*;
pub use test_report::*;
pub use treatment::*;
