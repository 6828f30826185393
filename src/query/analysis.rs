use rusqlite::params;

use crate::db::{DatabaseError, Session};
use crate::models::enums::TreatmentType;

/// Distinct persons with an Ongoing treatment for a condition whose severity
/// is strictly greater than `severity_threshold`.
pub fn analyze_high_severity_treatments(
    session: &Session,
    severity_threshold: i32,
) -> Result<i64, DatabaseError> {
    session.query_scalar(
        "SELECT COUNT(DISTINCT u.UserID)
         FROM USER u
         JOIN UNDERGOING_TREATMENTS ut ON u.UserID = ut.UserID
         JOIN DISEASE d ON ut.DiseaseID = d.DiseaseID
         WHERE ut.Status = 'Ongoing' AND d.Severity > ?1",
        params![severity_threshold],
    )
}

/// Number of prescribed treatments of `treatment_type`.
pub fn count_treatments_by_type(
    session: &Session,
    treatment_type: TreatmentType,
) -> Result<i64, DatabaseError> {
    session.query_scalar(
        "SELECT COUNT(*) FROM PRESCRIBED_TREATMENTS WHERE TypeOfTreatment = ?1",
        params![treatment_type.as_str()],
    )
}

/// Number of Allopathy treatment rows across all time.
///
/// Treatments carry no date, so no time window is applied.
pub fn analyze_allopathy_treatments(session: &Session) -> Result<i64, DatabaseError> {
    count_treatments_by_type(session, TreatmentType::Allopathy)
}
