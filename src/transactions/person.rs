use rusqlite::params;

use crate::db::{DatabaseError, Session};
use crate::models::validation::{validate_new_person, validate_weight};
use crate::models::NewPerson;

/// Register a person and return the generated `UserID`.
pub fn insert_person(session: &Session, person: &NewPerson) -> Result<i64, DatabaseError> {
    validate_new_person(person)?;

    let id = session.transaction("insert_person", |conn| {
        conn.execute(
            "INSERT INTO USER (FirstName, LastName, Gender, DateOfBirth, Weight, Height, BloodGroup, Location)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                person.first_name,
                person.last_name,
                person.gender.map(|g| g.as_str()),
                person.date_of_birth,
                person.weight_kg,
                person.height_cm,
                person.blood_group.trim(),
                person.location,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })?;

    tracing::info!(person_id = id, "Person registered");
    Ok(id)
}

/// Record a new weight. Fails with `NotFound` when no such person exists.
pub fn update_person_weight(
    session: &Session,
    person_id: i64,
    new_weight_kg: f64,
) -> Result<(), DatabaseError> {
    validate_weight(new_weight_kg)?;

    session.transaction("update_person_weight", |conn| {
        let updated = conn.execute(
            "UPDATE USER SET Weight = ?1 WHERE UserID = ?2",
            params![new_weight_kg, person_id],
        )?;
        if updated == 0 {
            return Err(DatabaseError::NotFound {
                entity_type: "Person".into(),
                id: person_id.to_string(),
            });
        }
        Ok(())
    })?;

    tracing::info!(person_id, weight_kg = new_weight_kg, "Person weight updated");
    Ok(())
}
