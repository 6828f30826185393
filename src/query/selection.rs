use chrono::{Local, Months, NaiveDate};
use rusqlite::params;

use crate::db::rows::*;
use crate::db::{DatabaseError, Session};
use crate::models::*;

/// All persons whose blood group equals `blood_group` exactly.
pub fn users_by_blood_group(session: &Session, blood_group: &str) -> Result<Vec<Person>, DatabaseError> {
    let sql = format!("SELECT {PERSON_COLUMNS} FROM USER u WHERE u.BloodGroup = ?1 ORDER BY u.UserID");
    let rows = session.query_rows(&sql, params![blood_group], |row| read_person(row, 0))?;
    let persons = persons_from_rows(rows)?;
    tracing::debug!(blood_group, count = persons.len(), "Persons by blood group");
    Ok(persons)
}

/// Persons with at least one Ongoing active treatment, each listed once.
pub fn users_with_ongoing_treatments(session: &Session) -> Result<Vec<Person>, DatabaseError> {
    let sql = format!(
        "SELECT DISTINCT {PERSON_COLUMNS}
         FROM USER u
         JOIN UNDERGOING_TREATMENTS ut ON u.UserID = ut.UserID
         WHERE ut.Status = 'Ongoing'
         ORDER BY u.UserID"
    );
    let rows = session.query_rows(&sql, [], |row| read_person(row, 0))?;
    persons_from_rows(rows)
}

/// Test reports of exactly `test_type` dated within `years` years before `today`,
/// joined with the person they belong to. Undated reports are excluded.
pub fn test_reports_by_type_since(
    session: &Session,
    test_type: &str,
    years: u32,
    today: NaiveDate,
) -> Result<Vec<PersonTestReport>, DatabaseError> {
    let since = today
        .checked_sub_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN);

    let sql = format!(
        "SELECT {PERSON_COLUMNS}, {TEST_REPORT_COLUMNS}
         FROM USER u
         JOIN TEST_REPORTS tr ON u.UserID = tr.UserID
         WHERE tr.TestType = ?1 AND tr.TestDate >= ?2
         ORDER BY tr.TestDate DESC, tr.TestID"
    );
    let rows = session.query_rows(
        &sql,
        params![test_type, since],
        |row| Ok((read_person(row, 0)?, read_test_report(row, PERSON_COLUMN_COUNT)?)),
    )?;

    let mut out = Vec::with_capacity(rows.len());
    for (person, report) in rows {
        out.push(PersonTestReport {
            person: person_from_row(person)?,
            report: test_report_from_row(report),
        });
    }
    tracing::debug!(test_type, years, count = out.len(), "Recent test reports");
    Ok(out)
}

/// `test_reports_by_type_since` relative to the local calendar date.
pub fn recent_test_reports_by_type(
    session: &Session,
    test_type: &str,
    years: u32,
) -> Result<Vec<PersonTestReport>, DatabaseError> {
    test_reports_by_type_since(session, test_type, years, Local::now().date_naive())
}
