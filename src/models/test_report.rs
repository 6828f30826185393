use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A lab test result for a person (table `TEST_REPORTS`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestReport {
    pub id: i64,
    pub person_id: i64,
    pub treatment_id: Option<i64>,
    pub test_type: String,
    pub result: Option<String>,
    pub lab_organization: Option<String>,
    pub consulting_doctor: String,
    pub test_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTestReport {
    pub person_id: i64,
    pub treatment_id: Option<i64>,
    pub test_type: String,
    pub result: Option<String>,
    pub lab_organization: Option<String>,
    pub consulting_doctor: String,
    pub test_date: Option<NaiveDate>,
}
