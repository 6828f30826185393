//! Substring and prefix search. Matching follows SQLite `LIKE`, which is
//! case-insensitive for ASCII letters only. Wildcards in the search text are
//! escaped and match literally.

use rusqlite::params;

use crate::db::rows::*;
use crate::db::{DatabaseError, Session};
use crate::models::*;

pub fn search_users_by_name_prefix(session: &Session, prefix: &str) -> Result<Vec<Person>, DatabaseError> {
    let sql = format!(
        "SELECT {PERSON_COLUMNS} FROM USER u WHERE u.FirstName LIKE ?1 ESCAPE '\\' ORDER BY u.UserID"
    );
    let rows = session.query_rows(&sql, params![prefix_pattern(prefix)], |row| read_person(row, 0))?;
    persons_from_rows(rows)
}

pub fn search_test_reports_by_type(session: &Session, fragment: &str) -> Result<Vec<TestReport>, DatabaseError> {
    let sql = format!(
        "SELECT {TEST_REPORT_COLUMNS} FROM TEST_REPORTS tr WHERE tr.TestType LIKE ?1 ESCAPE '\\' ORDER BY tr.TestID"
    );
    let rows = session.query_rows(&sql, params![contains_pattern(fragment)], |row| read_test_report(row, 0))?;
    Ok(rows.into_iter().map(test_report_from_row).collect())
}

pub fn search_diseases_by_symptom(
    session: &Session,
    symptom: &str,
) -> Result<Vec<MedicalCondition>, DatabaseError> {
    let sql = format!(
        "SELECT {CONDITION_COLUMNS} FROM DISEASE d WHERE d.Symptoms LIKE ?1 ESCAPE '\\' ORDER BY d.DiseaseID"
    );
    session
        .query_rows(&sql, params![contains_pattern(symptom)], read_condition)?
        .into_iter()
        .map(condition_from_row)
        .collect()
}
