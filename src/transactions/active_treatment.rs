use rusqlite::{params, OptionalExtension};

use crate::db::{DatabaseError, Session};
use crate::models::enums::TreatmentStatus;
use crate::models::ActiveTreatment;

/// Enrol a person in a prescribed treatment.
///
/// `condition_id` must be the condition the treatment was prescribed for;
/// a mismatch is rejected with `Validation` and nothing is written.
pub fn insert_active_treatment(session: &Session, active: &ActiveTreatment) -> Result<(), DatabaseError> {
    session.transaction("insert_active_treatment", |conn| {
        let prescribed_for: Option<i64> = conn
            .query_row(
                "SELECT DiseaseID FROM PRESCRIBED_TREATMENTS WHERE TreatmentID = ?1",
                params![active.treatment_id],
                |row| row.get(0),
            )
            .optional()?;
        // Unknown treatments fall through to the foreign-key check.
        if let Some(condition_id) = prescribed_for {
            if condition_id != active.condition_id {
                return Err(DatabaseError::Validation {
                    field: "condition_id".into(),
                    reason: format!(
                        "treatment {} is prescribed for condition {condition_id}, not {}",
                        active.treatment_id, active.condition_id
                    ),
                });
            }
        }

        conn.execute(
            "INSERT INTO UNDERGOING_TREATMENTS
             (UserID, TreatmentID, DiseaseID, AssociatedHospital, DoctorUnderConsultation,
              Status, Description, AgeAtTreatmentStart)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                active.person_id,
                active.treatment_id,
                active.condition_id,
                active.hospital,
                active.supervising_doctor,
                active.status.as_str(),
                active.description,
                active.age_at_start,
            ],
        )?;
        Ok(())
    })?;

    tracing::info!(
        person_id = active.person_id,
        treatment_id = active.treatment_id,
        status = %active.status,
        "Active treatment recorded"
    );
    Ok(())
}

/// Move an active treatment to `new_status`.
///
/// Either direction is allowed. Fails with `NotFound` when the
/// `(person_id, treatment_id)` pair does not exist.
pub fn update_active_treatment_status(
    session: &Session,
    person_id: i64,
    treatment_id: i64,
    new_status: TreatmentStatus,
) -> Result<(), DatabaseError> {
    session.transaction("update_active_treatment_status", |conn| {
        let updated = conn.execute(
            "UPDATE UNDERGOING_TREATMENTS SET Status = ?1 WHERE UserID = ?2 AND TreatmentID = ?3",
            params![new_status.as_str(), person_id, treatment_id],
        )?;
        if updated == 0 {
            return Err(DatabaseError::NotFound {
                entity_type: "ActiveTreatment".into(),
                id: format!("{person_id}/{treatment_id}"),
            });
        }
        Ok(())
    })?;

    tracing::info!(person_id, treatment_id, status = %new_status, "Treatment status updated");
    Ok(())
}
