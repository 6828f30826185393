use serde::{Deserialize, Serialize};

use super::enums::TreatmentStatus;

/// A person undergoing a treatment (table `UNDERGOING_TREATMENTS`).
///
/// Keyed by `(person_id, treatment_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveTreatment {
    pub person_id: i64,
    pub treatment_id: i64,
    pub condition_id: i64,
    pub hospital: Option<String>,
    pub supervising_doctor: Option<String>,
    pub status: TreatmentStatus,
    pub description: Option<String>,
    pub age_at_start: Option<i32>,
}
