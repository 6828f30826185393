use rusqlite::params;

use crate::db::{DatabaseError, Session};
use crate::models::MedicalHistory;

/// Record a person's medical history. A second record for the same person
/// violates the primary key and surfaces as `DatabaseError::Constraint`.
pub fn insert_medical_history(session: &Session, history: &MedicalHistory) -> Result<(), DatabaseError> {
    session.transaction("insert_medical_history", |conn| {
        conn.execute(
            "INSERT INTO MEDICAL_HISTORY (UserID, Allergies, GeneticCharacteristics)
             VALUES (?1, ?2, ?3)",
            params![
                history.person_id,
                history.allergies,
                history.genetic_characteristics,
            ],
        )?;
        Ok(())
    })?;

    tracing::info!(person_id = history.person_id, "Medical history recorded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::get_medical_history;
    use crate::test_fixtures::seed;

    #[test]
    fn at_most_one_history_per_person() {
        let session = Session::open_in_memory().unwrap();
        let f = seed(&session);
        let history = MedicalHistory {
            person_id: f.joanna,
            allergies: Some("Penicillin".into()),
            genetic_characteristics: None,
        };

        insert_medical_history(&session, &history).unwrap();
        let duplicate = insert_medical_history(&session, &history);
        assert!(matches!(duplicate, Err(DatabaseError::Constraint(_))));

        let stored = get_medical_history(&session, f.joanna).unwrap().unwrap();
        assert_eq!(stored.allergies.as_deref(), Some("Penicillin"));
    }

    #[test]
    fn history_for_unknown_person_rejected() {
        let session = Session::open_in_memory().unwrap();
        let result = insert_medical_history(&session, &MedicalHistory {
            person_id: 3,
            ..Default::default()
        });
        assert!(matches!(result, Err(DatabaseError::Constraint(_))));
    }
}
