use rusqlite::params;

use crate::db::{DatabaseError, Session};
use crate::models::validation::validate_new_test_report;
use crate::models::NewTestReport;

pub fn insert_test_report(session: &Session, report: &NewTestReport) -> Result<i64, DatabaseError> {
    validate_new_test_report(report)?;

    let id = session.transaction("insert_test_report", |conn| {
        conn.execute(
            "INSERT INTO TEST_REPORTS
             (UserID, TreatmentID, TestType, TestReport, OrganizationLab, DoctorOnConsultation, TestDate)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                report.person_id,
                report.treatment_id,
                report.test_type,
                report.result,
                report.lab_organization,
                report.consulting_doctor,
                report.test_date,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })?;

    tracing::info!(test_id = id, person_id = report.person_id, "Test report filed");
    Ok(id)
}
