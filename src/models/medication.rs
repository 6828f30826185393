use serde::{Deserialize, Serialize};

use super::enums::TreatmentType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: i64,
    pub condition_id: i64,
    pub name: String,
    pub treatment_type: Option<TreatmentType>,
    pub food_restrictions: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMedication {
    pub condition_id: i64,
    pub name: String,
    pub treatment_type: Option<TreatmentType>,
    pub food_restrictions: Option<String>,
}
