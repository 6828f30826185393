//! Seed data shared by the query and transaction test suites.
//!
//! Persons: John (O+), Joanna (A-), Ravi (O+), Maria (B+, no weight).
//! Condition severities: 6, 7, 3, 4, 8. Only "Lung Cancer" matches "Cancer";
//! its treatments cost 200, 300 and 500.
//! Active treatments: John on chemotherapy + radiation (Ongoing), Joanna on
//! antibiotics (Ongoing), Ravi on herbal support (Completed), Maria on
//! acupuncture (Ongoing).

use chrono::NaiveDate;

use crate::db::Session;
use crate::models::enums::*;
use crate::models::*;
use crate::transactions::*;

#[allow(dead_code)]
pub struct Fixture {
    pub john: i64,
    pub joanna: i64,
    pub ravi: i64,
    pub maria: i64,

    pub lung_cancer: i64,
    pub tuberculosis: i64,
    pub migraine: i64,
    pub asthma: i64,
    pub hepatitis: i64,

    pub chemotherapy: i64,
    pub radiation: i64,
    pub herbal_support: i64,
    pub antibiotics: i64,
    pub homeopathic_drops: i64,
    pub acupuncture: i64,

    pub cisplatin: i64,
    pub isoniazid: i64,
    pub belladonna: i64,
    pub salbutamol: i64,
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[allow(clippy::too_many_arguments)]
fn person(
    session: &Session,
    first: &str,
    last: &str,
    gender: Gender,
    weight: Option<f64>,
    height: Option<f64>,
    blood_group: &str,
    location: &str,
) -> i64 {
    insert_person(session, &NewPerson {
        first_name: first.into(),
        last_name: last.into(),
        gender: Some(gender),
        date_of_birth: Some(date(1985, 4, 12)),
        weight_kg: weight,
        height_cm: height,
        blood_group: blood_group.into(),
        location: Some(location.into()),
    })
    .unwrap()
}

fn condition(
    session: &Session,
    name: &str,
    severity: i32,
    communicability: Communicability,
    symptoms: &str,
) -> i64 {
    insert_condition(session, &NewCondition {
        name: name.into(),
        severity,
        triggering_environment: None,
        communicability: Some(communicability),
        symptoms: Some(symptoms.into()),
    })
    .unwrap()
}

fn treatment(
    session: &Session,
    condition_id: i64,
    kind: TreatmentType,
    description: &str,
    expense: f64,
) -> i64 {
    insert_treatment(session, &NewTreatment {
        condition_id,
        treatment_type: Some(kind),
        description: Some(description.into()),
        expense: Some(expense),
        cure_duration: Some("6 months".into()),
        prescribing_source: "City General Hospital".into(),
    })
    .unwrap()
}

fn medication(session: &Session, condition_id: i64, name: &str, kind: TreatmentType) -> i64 {
    insert_medication(session, &NewMedication {
        condition_id,
        name: name.into(),
        treatment_type: Some(kind),
        food_restrictions: None,
    })
    .unwrap()
}

fn enrol(
    session: &Session,
    person_id: i64,
    treatment_id: i64,
    condition_id: i64,
    status: TreatmentStatus,
) {
    insert_active_treatment(session, &ActiveTreatment {
        person_id,
        treatment_id,
        condition_id,
        hospital: Some("City General Hospital".into()),
        supervising_doctor: Some("Dr. Mensah".into()),
        status,
        description: None,
        age_at_start: Some(38),
    })
    .unwrap();
}

fn report(
    session: &Session,
    person_id: i64,
    treatment_id: Option<i64>,
    test_type: &str,
    on: NaiveDate,
) {
    insert_test_report(session, &NewTestReport {
        person_id,
        treatment_id,
        test_type: test_type.into(),
        result: Some("See attached".into()),
        lab_organization: Some("Central Lab".into()),
        consulting_doctor: "Dr. Mensah".into(),
        test_date: Some(on),
    })
    .unwrap();
}

pub fn seed(session: &Session) -> Fixture {
    use Communicability::*;
    use TreatmentType::*;

    let john = person(session, "John", "Smith", Gender::Male, Some(80.0), Some(180.0), "O+", "Boston");
    let joanna = person(session, "Joanna", "Lee", Gender::Female, Some(60.0), Some(165.0), "A-", "Denver");
    let ravi = person(session, "Ravi", "Patel", Gender::Male, Some(75.0), Some(175.0), "O+", "Austin");
    let maria = person(session, "Maria", "Garcia", Gender::Female, None, Some(158.0), "B+", "Miami");

    let lung_cancer = condition(session, "Lung Cancer", 6, Low, "persistent cough, chest pain");
    let tuberculosis = condition(session, "Tuberculosis", 7, High, "cough, fever, night sweats");
    let migraine = condition(session, "Migraine", 3, Low, "headache, nausea");
    let asthma = condition(session, "Asthma", 4, Low, "wheezing, shortness of breath, cough");
    let hepatitis = condition(session, "Hepatitis B", 8, Medium, "fatigue, jaundice");

    let chemotherapy = treatment(session, lung_cancer, Allopathy, "Chemotherapy", 200.00);
    let radiation = treatment(session, lung_cancer, Allopathy, "Radiation therapy", 300.00);
    let herbal_support = treatment(session, lung_cancer, Ayurveda, "Herbal support", 500.00);
    let antibiotics = treatment(session, tuberculosis, Allopathy, "Antibiotic regimen", 150.00);
    let homeopathic_drops = treatment(session, migraine, Homeopathy, "Homeopathic drops", 40.00);
    let acupuncture = treatment(session, hepatitis, TraditionalChineseMedicine, "Acupuncture", 80.00);

    let cisplatin = medication(session, lung_cancer, "Cisplatin", Allopathy);
    let isoniazid = medication(session, tuberculosis, "Isoniazid", Allopathy);
    let belladonna = medication(session, migraine, "Belladonna", Homeopathy);
    let salbutamol = medication(session, asthma, "Salbutamol", Allopathy);

    enrol(session, john, chemotherapy, lung_cancer, TreatmentStatus::Ongoing);
    enrol(session, john, radiation, lung_cancer, TreatmentStatus::Ongoing);
    enrol(session, joanna, antibiotics, tuberculosis, TreatmentStatus::Ongoing);
    enrol(session, ravi, herbal_support, lung_cancer, TreatmentStatus::Completed);
    enrol(session, maria, acupuncture, hepatitis, TreatmentStatus::Ongoing);

    report(session, john, Some(chemotherapy), "MRI", date(2026, 3, 1));
    report(session, john, None, "Blood Test", date(2026, 9, 14));
    report(session, joanna, Some(antibiotics), "CT Scan", date(2026, 1, 20));
    report(session, ravi, Some(herbal_support), "MRI", date(2015, 6, 1));

    Fixture {
        john,
        joanna,
        ravi,
        maria,
        lung_cancer,
        tuberculosis,
        migraine,
        asthma,
        hepatitis,
        chemotherapy,
        radiation,
        herbal_support,
        antibiotics,
        homeopathic_drops,
        acupuncture,
        cisplatin,
        isoniazid,
        belladonna,
        salbutamol,
    }
}
