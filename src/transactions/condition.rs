use rusqlite::params;

use crate::db::{DatabaseError, Session};
use crate::models::validation::validate_new_condition;
use crate::models::NewCondition;

/// Add a condition to the diagnosis catalog and return its `DiseaseID`.
pub fn insert_condition(session: &Session, condition: &NewCondition) -> Result<i64, DatabaseError> {
    validate_new_condition(condition)?;

    let id = session.transaction("insert_condition", |conn| {
        conn.execute(
            "INSERT INTO DISEASE (DiseaseName, Severity, TriggeringEnvironment, Communicability, Symptoms)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                condition.name,
                condition.severity,
                condition.triggering_environment,
                condition.communicability.map(|c| c.as_str()),
                condition.symptoms,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })?;

    tracing::info!(condition_id = id, severity = condition.severity, "Condition catalogued");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Communicability;
    use crate::query::get_condition;

    fn disease_count(session: &Session) -> i64 {
        session.query_scalar("SELECT COUNT(*) FROM DISEASE", []).unwrap()
    }

    #[test]
    fn insert_and_read_back() {
        let session = Session::open_in_memory().unwrap();
        let id = insert_condition(&session, &NewCondition {
            name: "Influenza".into(),
            severity: 4,
            triggering_environment: Some("Crowded indoor spaces".into()),
            communicability: Some(Communicability::High),
            symptoms: Some("fever, cough".into()),
        })
        .unwrap();

        let condition = get_condition(&session, id).unwrap().unwrap();
        assert_eq!(condition.name, "Influenza");
        assert_eq!(condition.communicability, Communicability::High);
        assert_eq!(condition.symptoms.as_deref(), Some("fever, cough"));
    }

    #[test]
    fn missing_communicability_rejected_without_write() {
        let session = Session::open_in_memory().unwrap();
        let before = disease_count(&session);

        let result = insert_condition(&session, &NewCondition {
            name: "Mystery".into(),
            severity: 5,
            communicability: None,
            ..Default::default()
        });

        assert!(matches!(result, Err(DatabaseError::Validation { .. })));
        assert_eq!(disease_count(&session), before);
    }

    #[test]
    fn out_of_range_severity_rejected() {
        let session = Session::open_in_memory().unwrap();
        for severity in [0, 11, -3] {
            let result = insert_condition(&session, &NewCondition {
                name: "Edge".into(),
                severity,
                communicability: Some(Communicability::Low),
                ..Default::default()
            });
            assert!(matches!(result, Err(DatabaseError::Validation { .. })), "severity {severity}");
        }
        assert_eq!(disease_count(&session), 0);
    }
}
