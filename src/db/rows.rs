//! Typed row mapping shared by the query engine and the transaction manager.
//!
//! Column lists are compile-time constants with fixed table aliases
//! (`u`, `d`, `pt`, `m`, `tr`, `mh`, `ut`). Caller-supplied values are never
//! spliced into SQL text; they are always bound as parameters. Dates bind and
//! read as `NaiveDate` through rusqlite's chrono support (ISO `YYYY-MM-DD`).

use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::Row;

use crate::db::DatabaseError;
use crate::models::enums::*;
use crate::models::*;

pub const PERSON_COLUMNS: &str =
    "u.UserID, u.FirstName, u.LastName, u.Gender, u.DateOfBirth, u.Weight, u.Height, u.BloodGroup, u.Location";
pub const PERSON_COLUMN_COUNT: usize = 9;

pub const CONDITION_COLUMNS: &str =
    "d.DiseaseID, d.DiseaseName, d.Severity, d.TriggeringEnvironment, d.Communicability, d.Symptoms";

pub const TREATMENT_COLUMNS: &str =
    "pt.TreatmentID, pt.DiseaseID, pt.TypeOfTreatment, pt.Description, pt.Expense, pt.CureTime, pt.SourceOfPrescription";

pub const MEDICATION_COLUMNS: &str =
    "m.MedicationID, m.DiseaseID, m.MedicationName, m.TypeOfTreatment, m.FoodRestrictionConditions";

pub const TEST_REPORT_COLUMNS: &str =
    "tr.TestID, tr.UserID, tr.TreatmentID, tr.TestType, tr.TestReport, tr.OrganizationLab, tr.DoctorOnConsultation, tr.TestDate";

pub const HISTORY_COLUMNS: &str = "mh.UserID, mh.Allergies, mh.GeneticCharacteristics";

pub const ACTIVE_TREATMENT_COLUMNS: &str =
    "ut.UserID, ut.TreatmentID, ut.DiseaseID, ut.AssociatedHospital, ut.DoctorUnderConsultation, ut.Status, ut.Description, ut.AgeAtTreatmentStart";

fn parse_optional<E>(value: Option<String>) -> Result<Option<E>, DatabaseError>
where
    E: FromStr<Err = DatabaseError>,
{
    value.as_deref().map(E::from_str).transpose()
}

// ── Person ───────────────────────────────────────────────

pub struct PersonRow {
    id: i64,
    first_name: String,
    last_name: String,
    gender: Option<String>,
    date_of_birth: Option<NaiveDate>,
    weight: Option<f64>,
    height: Option<f64>,
    blood_group: String,
    location: Option<String>,
}

/// Read the person columns starting at column index `at`.
pub fn read_person(row: &Row<'_>, at: usize) -> rusqlite::Result<PersonRow> {
    Ok(PersonRow {
        id: row.get(at)?,
        first_name: row.get(at + 1)?,
        last_name: row.get(at + 2)?,
        gender: row.get(at + 3)?,
        date_of_birth: row.get(at + 4)?,
        weight: row.get(at + 5)?,
        height: row.get(at + 6)?,
        blood_group: row.get(at + 7)?,
        location: row.get(at + 8)?,
    })
}

pub fn person_from_row(row: PersonRow) -> Result<Person, DatabaseError> {
    Ok(Person {
        id: row.id,
        first_name: row.first_name,
        last_name: row.last_name,
        gender: parse_optional(row.gender)?,
        date_of_birth: row.date_of_birth,
        weight_kg: row.weight,
        height_cm: row.height,
        blood_group: row.blood_group,
        location: row.location,
    })
}

pub fn persons_from_rows(rows: Vec<PersonRow>) -> Result<Vec<Person>, DatabaseError> {
    rows.into_iter().map(person_from_row).collect()
}

// ── MedicalCondition ─────────────────────────────────────

pub struct ConditionRow {
    id: i64,
    name: String,
    severity: i32,
    triggering_environment: Option<String>,
    communicability: String,
    symptoms: Option<String>,
}

pub fn read_condition(row: &Row<'_>) -> rusqlite::Result<ConditionRow> {
    Ok(ConditionRow {
        id: row.get(0)?,
        name: row.get(1)?,
        severity: row.get(2)?,
        triggering_environment: row.get(3)?,
        communicability: row.get(4)?,
        symptoms: row.get(5)?,
    })
}

pub fn condition_from_row(row: ConditionRow) -> Result<MedicalCondition, DatabaseError> {
    Ok(MedicalCondition {
        id: row.id,
        name: row.name,
        severity: row.severity,
        triggering_environment: row.triggering_environment,
        communicability: Communicability::from_str(&row.communicability)?,
        symptoms: row.symptoms,
    })
}

// ── Treatment ────────────────────────────────────────────

pub struct TreatmentRow {
    id: i64,
    condition_id: i64,
    treatment_type: Option<String>,
    description: Option<String>,
    expense: Option<f64>,
    cure_duration: Option<String>,
    prescribing_source: String,
}

pub fn read_treatment(row: &Row<'_>) -> rusqlite::Result<TreatmentRow> {
    Ok(TreatmentRow {
        id: row.get(0)?,
        condition_id: row.get(1)?,
        treatment_type: row.get(2)?,
        description: row.get(3)?,
        expense: row.get(4)?,
        cure_duration: row.get(5)?,
        prescribing_source: row.get(6)?,
    })
}

pub fn treatment_from_row(row: TreatmentRow) -> Result<Treatment, DatabaseError> {
    Ok(Treatment {
        id: row.id,
        condition_id: row.condition_id,
        treatment_type: parse_optional(row.treatment_type)?,
        description: row.description,
        expense: row.expense,
        cure_duration: row.cure_duration,
        prescribing_source: row.prescribing_source,
    })
}

// ── Medication ───────────────────────────────────────────

pub struct MedicationRow {
    id: i64,
    condition_id: i64,
    name: String,
    treatment_type: Option<String>,
    food_restrictions: Option<String>,
}

pub fn read_medication(row: &Row<'_>) -> rusqlite::Result<MedicationRow> {
    Ok(MedicationRow {
        id: row.get(0)?,
        condition_id: row.get(1)?,
        name: row.get(2)?,
        treatment_type: row.get(3)?,
        food_restrictions: row.get(4)?,
    })
}

pub fn medication_from_row(row: MedicationRow) -> Result<Medication, DatabaseError> {
    Ok(Medication {
        id: row.id,
        condition_id: row.condition_id,
        name: row.name,
        treatment_type: parse_optional(row.treatment_type)?,
        food_restrictions: row.food_restrictions,
    })
}

// ── TestReport ───────────────────────────────────────────

pub struct TestReportRow {
    id: i64,
    person_id: i64,
    treatment_id: Option<i64>,
    test_type: String,
    result: Option<String>,
    lab_organization: Option<String>,
    consulting_doctor: String,
    test_date: Option<NaiveDate>,
}

pub fn read_test_report(row: &Row<'_>, at: usize) -> rusqlite::Result<TestReportRow> {
    Ok(TestReportRow {
        id: row.get(at)?,
        person_id: row.get(at + 1)?,
        treatment_id: row.get(at + 2)?,
        test_type: row.get(at + 3)?,
        result: row.get(at + 4)?,
        lab_organization: row.get(at + 5)?,
        consulting_doctor: row.get(at + 6)?,
        test_date: row.get(at + 7)?,
    })
}

pub fn test_report_from_row(row: TestReportRow) -> TestReport {
    TestReport {
        id: row.id,
        person_id: row.person_id,
        treatment_id: row.treatment_id,
        test_type: row.test_type,
        result: row.result,
        lab_organization: row.lab_organization,
        consulting_doctor: row.consulting_doctor,
        test_date: row.test_date,
    }
}

// ── MedicalHistory ───────────────────────────────────────

pub fn read_history(row: &Row<'_>) -> rusqlite::Result<MedicalHistory> {
    Ok(MedicalHistory {
        person_id: row.get(0)?,
        allergies: row.get(1)?,
        genetic_characteristics: row.get(2)?,
    })
}

// ── ActiveTreatment ──────────────────────────────────────

pub struct ActiveTreatmentRow {
    person_id: i64,
    treatment_id: i64,
    condition_id: i64,
    hospital: Option<String>,
    supervising_doctor: Option<String>,
    status: String,
    description: Option<String>,
    age_at_start: Option<i32>,
}

pub fn read_active_treatment(row: &Row<'_>) -> rusqlite::Result<ActiveTreatmentRow> {
    Ok(ActiveTreatmentRow {
        person_id: row.get(0)?,
        treatment_id: row.get(1)?,
        condition_id: row.get(2)?,
        hospital: row.get(3)?,
        supervising_doctor: row.get(4)?,
        status: row.get(5)?,
        description: row.get(6)?,
        age_at_start: row.get(7)?,
    })
}

pub fn active_treatment_from_row(row: ActiveTreatmentRow) -> Result<ActiveTreatment, DatabaseError> {
    Ok(ActiveTreatment {
        person_id: row.person_id,
        treatment_id: row.treatment_id,
        condition_id: row.condition_id,
        hospital: row.hospital,
        supervising_doctor: row.supervising_doctor,
        status: TreatmentStatus::from_str(&row.status)?,
        description: row.description,
        age_at_start: row.age_at_start,
    })
}

/// Escape LIKE metacharacters so user text matches literally.
/// Pair with `ESCAPE '\'` in the statement.
pub fn escape_like(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

pub fn contains_pattern(fragment: &str) -> String {
    format!("%{}%", escape_like(fragment))
}

pub fn prefix_pattern(prefix: &str) -> String {
    format!("{}%", escape_like(prefix))
}
