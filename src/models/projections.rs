use serde::{Deserialize, Serialize};

use super::person::Person;
use super::test_report::TestReport;

/// Name and location of a person, without the clinical fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonLocation {
    pub first_name: String,
    pub last_name: String,
    pub location: Option<String>,
}

/// A person who must be notified after a destructive change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectedPerson {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// A test report together with the person it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonTestReport {
    pub person: Person,
    pub report: TestReport,
}

/// Summary figures shown on the clinic dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub average_treatment_expense: Option<f64>,
    pub max_condition_severity: Option<i32>,
    pub ongoing_treatments: i64,
}
