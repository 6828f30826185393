use rusqlite::params;

use crate::db::rows::contains_pattern;
use crate::db::{DatabaseError, Session};
use crate::models::HealthMetrics;

/// Condition-name fragment used for the dashboard's expense figure.
pub const CANCER_NAME_FRAGMENT: &str = "Cancer";

/// Round a currency amount to cents for display.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Average expense of treatments whose condition name contains `name_fragment`
/// (ASCII case-insensitive). `None` when nothing matches.
pub fn average_treatment_expense(
    session: &Session,
    name_fragment: &str,
) -> Result<Option<f64>, DatabaseError> {
    session.query_scalar(
        "SELECT AVG(pt.Expense)
         FROM PRESCRIBED_TREATMENTS pt
         JOIN DISEASE d ON pt.DiseaseID = d.DiseaseID
         WHERE d.DiseaseName LIKE ?1 ESCAPE '\\'",
        params![contains_pattern(name_fragment)],
    )
}

pub fn average_cancer_treatment_expense(session: &Session) -> Result<Option<f64>, DatabaseError> {
    average_treatment_expense(session, CANCER_NAME_FRAGMENT)
}

pub fn max_severity_of_diseases(session: &Session) -> Result<Option<i32>, DatabaseError> {
    session.query_scalar("SELECT MAX(Severity) FROM DISEASE", [])
}

/// Number of active-treatment rows currently Ongoing.
pub fn total_ongoing_treatments(session: &Session) -> Result<i64, DatabaseError> {
    session.query_scalar(
        "SELECT COUNT(*) FROM UNDERGOING_TREATMENTS WHERE Status = 'Ongoing'",
        [],
    )
}

/// Mean body-mass index over persons with both weight and height recorded.
///
/// Height is stored in centimetres and converted to metres before squaring.
pub fn average_bmi(session: &Session) -> Result<Option<f64>, DatabaseError> {
    session.query_scalar(
        "SELECT AVG(Weight / ((Height / 100.0) * (Height / 100.0)))
         FROM USER
         WHERE Height IS NOT NULL AND Weight IS NOT NULL AND Height > 0",
        [],
    )
}

pub fn health_metrics(session: &Session) -> Result<HealthMetrics, DatabaseError> {
    let metrics = HealthMetrics {
        average_treatment_expense: average_cancer_treatment_expense(session)?,
        max_condition_severity: max_severity_of_diseases(session)?,
        ongoing_treatments: total_ongoing_treatments(session)?,
    };
    tracing::debug!(?metrics, "Health metrics computed");
    Ok(metrics)
}
