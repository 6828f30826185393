use rusqlite::params;

use crate::db::{DatabaseError, Session};
use crate::models::enums::TreatmentType;
use crate::models::PersonLocation;

/// Names and locations of persons with the given blood group.
pub fn person_locations_by_blood_group(
    session: &Session,
    blood_group: &str,
) -> Result<Vec<PersonLocation>, DatabaseError> {
    session.query_rows(
        "SELECT FirstName, LastName, Location FROM USER WHERE BloodGroup = ?1 ORDER BY UserID",
        params![blood_group],
        |row| {
            Ok(PersonLocation {
                first_name: row.get(0)?,
                last_name: row.get(1)?,
                location: row.get(2)?,
            })
        },
    )
}

/// Distinct names of conditions with at least one treatment of `treatment_type`.
pub fn condition_names_by_treatment_type(
    session: &Session,
    treatment_type: TreatmentType,
) -> Result<Vec<String>, DatabaseError> {
    session.query_rows(
        "SELECT DISTINCT d.DiseaseName
         FROM DISEASE d
         JOIN PRESCRIBED_TREATMENTS pt ON d.DiseaseID = pt.DiseaseID
         WHERE pt.TypeOfTreatment = ?1
         ORDER BY d.DiseaseName",
        params![treatment_type.as_str()],
        |row| row.get(0),
    )
}

pub fn allopathy_condition_names(session: &Session) -> Result<Vec<String>, DatabaseError> {
    condition_names_by_treatment_type(session, TreatmentType::Allopathy)
}
