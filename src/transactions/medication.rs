use rusqlite::params;

use crate::db::{DatabaseError, Session};
use crate::models::validation::validate_new_medication;
use crate::models::{AffectedPerson, NewMedication};

pub fn insert_medication(session: &Session, medication: &NewMedication) -> Result<i64, DatabaseError> {
    validate_new_medication(medication)?;

    let id = session.transaction("insert_medication", |conn| {
        conn.execute(
            "INSERT INTO MEDICATION (DiseaseID, MedicationName, TypeOfTreatment, FoodRestrictionConditions)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                medication.condition_id,
                medication.name,
                medication.treatment_type.map(|t| t.as_str()),
                medication.food_restrictions,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })?;

    tracing::info!(medication_id = id, condition_id = medication.condition_id, "Medication added");
    Ok(id)
}

/// Withdraw a discontinued or banned medication.
///
/// Collects every person with an active-treatment link to a treatment for the
/// medication's condition, then deletes the medication row. Both steps commit
/// together. The returned persons are the ones to notify; an unknown
/// `medication_id` yields an empty list and changes nothing.
///
/// Treatments and active treatments for the condition are left in place.
pub fn delete_medication(
    session: &Session,
    medication_id: i64,
) -> Result<Vec<AffectedPerson>, DatabaseError> {
    let (affected, deleted) = session.transaction("delete_medication", |conn| {
        let mut stmt = conn.prepare(
            "SELECT DISTINCT u.UserID, u.FirstName, u.LastName
             FROM USER u
             JOIN UNDERGOING_TREATMENTS ut ON u.UserID = ut.UserID
             JOIN PRESCRIBED_TREATMENTS pt ON ut.TreatmentID = pt.TreatmentID
             JOIN MEDICATION m ON pt.DiseaseID = m.DiseaseID
             WHERE m.MedicationID = ?1
             ORDER BY u.UserID",
        )?;
        let rows = stmt.query_map(params![medication_id], |row| {
            Ok(AffectedPerson {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
            })
        })?;

        let mut affected = Vec::new();
        for row in rows {
            affected.push(row?);
        }
        drop(stmt);

        let deleted = conn.execute(
            "DELETE FROM MEDICATION WHERE MedicationID = ?1",
            params![medication_id],
        )?;
        Ok((affected, deleted))
    })?;

    tracing::info!(
        medication_id,
        deleted,
        affected_persons = affected.len(),
        "Medication withdrawn"
    );
    Ok(affected)
}
