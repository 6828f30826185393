use rusqlite::params;

use crate::db::rows::*;
use crate::db::{DatabaseError, Session};
use crate::models::*;

pub fn get_person(session: &Session, id: i64) -> Result<Option<Person>, DatabaseError> {
    let sql = format!("SELECT {PERSON_COLUMNS} FROM USER u WHERE u.UserID = ?1");
    let row = session
        .query_rows(&sql, params![id], |row| read_person(row, 0))?
        .into_iter()
        .next();
    row.map(person_from_row).transpose()
}

pub fn get_condition(session: &Session, id: i64) -> Result<Option<MedicalCondition>, DatabaseError> {
    let sql = format!("SELECT {CONDITION_COLUMNS} FROM DISEASE d WHERE d.DiseaseID = ?1");
    let row = session
        .query_rows(&sql, params![id], read_condition)?
        .into_iter()
        .next();
    row.map(condition_from_row).transpose()
}

pub fn get_treatment(session: &Session, id: i64) -> Result<Option<Treatment>, DatabaseError> {
    let sql = format!("SELECT {TREATMENT_COLUMNS} FROM PRESCRIBED_TREATMENTS pt WHERE pt.TreatmentID = ?1");
    let row = session
        .query_rows(&sql, params![id], read_treatment)?
        .into_iter()
        .next();
    row.map(treatment_from_row).transpose()
}

pub fn get_medication(session: &Session, id: i64) -> Result<Option<Medication>, DatabaseError> {
    let sql = format!("SELECT {MEDICATION_COLUMNS} FROM MEDICATION m WHERE m.MedicationID = ?1");
    let row = session
        .query_rows(&sql, params![id], read_medication)?
        .into_iter()
        .next();
    row.map(medication_from_row).transpose()
}

pub fn get_medical_history(session: &Session, person_id: i64) -> Result<Option<MedicalHistory>, DatabaseError> {
    let sql = format!("SELECT {HISTORY_COLUMNS} FROM MEDICAL_HISTORY mh WHERE mh.UserID = ?1");
    Ok(session
        .query_rows(&sql, params![person_id], read_history)?
        .into_iter()
        .next())
}

pub fn get_active_treatment(
    session: &Session,
    person_id: i64,
    treatment_id: i64,
) -> Result<Option<ActiveTreatment>, DatabaseError> {
    let sql = format!(
        "SELECT {ACTIVE_TREATMENT_COLUMNS} FROM UNDERGOING_TREATMENTS ut
         WHERE ut.UserID = ?1 AND ut.TreatmentID = ?2"
    );
    let row = session
        .query_rows(&sql, params![person_id, treatment_id], read_active_treatment)?
        .into_iter()
        .next();
    row.map(active_treatment_from_row).transpose()
}

/// Medications prescribed for a condition, in insertion order.
pub fn medications_for_condition(session: &Session, condition_id: i64) -> Result<Vec<Medication>, DatabaseError> {
    let sql = format!(
        "SELECT {MEDICATION_COLUMNS} FROM MEDICATION m WHERE m.DiseaseID = ?1 ORDER BY m.MedicationID"
    );
    session
        .query_rows(&sql, params![condition_id], read_medication)?
        .into_iter()
        .map(medication_from_row)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{TreatmentStatus, TreatmentType};
    use crate::test_fixtures::seed;

    #[test]
    fn lookups_return_none_for_unknown_ids() {
        let session = Session::open_in_memory().unwrap();
        seed(&session);
        assert!(get_person(&session, 500).unwrap().is_none());
        assert!(get_condition(&session, 500).unwrap().is_none());
        assert!(get_treatment(&session, 500).unwrap().is_none());
        assert!(get_medication(&session, 500).unwrap().is_none());
        assert!(get_medical_history(&session, 1).unwrap().is_none());
        assert!(get_active_treatment(&session, 1, 500).unwrap().is_none());
    }

    #[test]
    fn treatment_lookup_maps_stored_abbreviation() {
        let session = Session::open_in_memory().unwrap();
        let f = seed(&session);
        let treatment = get_treatment(&session, f.acupuncture).unwrap().unwrap();
        assert_eq!(treatment.treatment_type, Some(TreatmentType::TraditionalChineseMedicine));
        assert_eq!(treatment.condition_id, f.hepatitis);
        assert_eq!(treatment.expense, Some(80.0));
    }

    #[test]
    fn person_without_weight_maps_to_none() {
        let session = Session::open_in_memory().unwrap();
        let f = seed(&session);
        let maria = get_person(&session, f.maria).unwrap().unwrap();
        assert_eq!(maria.weight_kg, None);
        assert_eq!(maria.height_cm, Some(158.0));
    }

    #[test]
    fn active_treatment_lookup_by_composite_key() {
        let session = Session::open_in_memory().unwrap();
        let f = seed(&session);
        let row = get_active_treatment(&session, f.ravi, f.herbal_support).unwrap().unwrap();
        assert_eq!(row.status, TreatmentStatus::Completed);
        assert_eq!(row.condition_id, f.lung_cancer);
    }

    #[test]
    fn medications_grouped_by_condition() {
        let session = Session::open_in_memory().unwrap();
        let f = seed(&session);
        let meds = medications_for_condition(&session, f.tuberculosis).unwrap();
        assert_eq!(meds.len(), 1);
        assert_eq!(meds[0].id, f.isoniazid);
        assert_eq!(meds[0].name, "Isoniazid");
    }
}
