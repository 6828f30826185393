use serde::{Deserialize, Serialize};

use super::enums::TreatmentType;

/// A prescribed treatment for a condition (table `PRESCRIBED_TREATMENTS`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    pub id: i64,
    pub condition_id: i64,
    pub treatment_type: Option<TreatmentType>,
    pub description: Option<String>,
    pub expense: Option<f64>,
    pub cure_duration: Option<String>,
    pub prescribing_source: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTreatment {
    pub condition_id: i64,
    pub treatment_type: Option<TreatmentType>,
    pub description: Option<String>,
    pub expense: Option<f64>,
    pub cure_duration: Option<String>,
    pub prescribing_source: String,
}
