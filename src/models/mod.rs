pub mod enums;
pub mod validation;

mod active_treatment;
mod condition;
mod history;
mod medication;
mod person;
mod projections;
mod test_report;
mod treatment;

pub use active_treatment::*;
pub use condition::*;
pub use history::*;
pub use medication::*;
pub use person::*;
pub use projections::*;
pub use test_report::*;
pub use treatment::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn person(weight_kg: Option<f64>, height_cm: Option<f64>) -> Person {
        Person {
            id: 1,
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            gender: None,
            date_of_birth: None,
            weight_kg,
            height_cm,
            blood_group: "O+".into(),
            location: None,
        }
    }

    #[test]
    fn bmi_converts_centimetres_to_metres() {
        let bmi = person(Some(80.0), Some(200.0)).bmi().unwrap();
        assert!((bmi - 20.0).abs() < 1e-9);
    }

    #[test]
    fn bmi_requires_both_measurements() {
        assert!(person(None, Some(170.0)).bmi().is_none());
        assert!(person(Some(70.0), None).bmi().is_none());
    }
}
