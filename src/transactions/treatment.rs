use rusqlite::params;

use crate::db::{DatabaseError, Session};
use crate::models::validation::validate_new_treatment;
use crate::models::NewTreatment;

/// Prescribe a treatment for an existing condition.
///
/// A `condition_id` with no matching condition is rejected by the storage
/// engine and surfaces as `DatabaseError::Constraint`.
pub fn insert_treatment(session: &Session, treatment: &NewTreatment) -> Result<i64, DatabaseError> {
    validate_new_treatment(treatment)?;

    let id = session.transaction("insert_treatment", |conn| {
        conn.execute(
            "INSERT INTO PRESCRIBED_TREATMENTS
             (DiseaseID, TypeOfTreatment, Description, Expense, CureTime, SourceOfPrescription)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                treatment.condition_id,
                treatment.treatment_type.map(|t| t.as_str()),
                treatment.description,
                treatment.expense,
                treatment.cure_duration,
                treatment.prescribing_source,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })?;

    tracing::info!(treatment_id = id, condition_id = treatment.condition_id, "Treatment prescribed");
    Ok(id)
}
