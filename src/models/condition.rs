use serde::{Deserialize, Serialize};

use super::enums::Communicability;

/// A diagnosable condition from the catalog (table `DISEASE`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalCondition {
    pub id: i64,
    pub name: String,
    pub severity: i32,
    pub triggering_environment: Option<String>,
    pub communicability: Communicability,
    pub symptoms: Option<String>,
}

/// Field set for cataloguing a condition.
///
/// `communicability` is optional here only so that a missing value can be
/// rejected with a validation error instead of at deserialization time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCondition {
    pub name: String,
    pub severity: i32,
    pub triggering_environment: Option<String>,
    pub communicability: Option<Communicability>,
    pub symptoms: Option<String>,
}
