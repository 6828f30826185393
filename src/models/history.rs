use serde::{Deserialize, Serialize};

/// Medical history, at most one per person (table `MEDICAL_HISTORY`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalHistory {
    pub person_id: i64,
    pub allergies: Option<String>,
    pub genetic_characteristics: Option<String>,
}
