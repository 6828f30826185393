// Write-time business rules. Every check here runs before a statement is
// issued, so a rejected field set never reaches storage.

use std::str::FromStr;

use super::enums::{Communicability, Gender, TreatmentStatus, TreatmentType};
use super::{NewCondition, NewMedication, NewPerson, NewTestReport, NewTreatment};
use crate::db::DatabaseError;

pub const MIN_SEVERITY: i32 = 1;
pub const MAX_SEVERITY: i32 = 10;

/// Enumerated columns whose values are restricted to a fixed domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumField {
    Gender,
    Communicability,
    TreatmentType,
    Status,
}

pub fn is_valid_severity(severity: i32) -> bool {
    (MIN_SEVERITY..=MAX_SEVERITY).contains(&severity)
}

/// Membership check against the stored representation of an enum column.
pub fn is_valid_enum(field: EnumField, value: &str) -> bool {
    match field {
        EnumField::Gender => Gender::from_str(value).is_ok(),
        EnumField::Communicability => Communicability::from_str(value).is_ok(),
        EnumField::TreatmentType => TreatmentType::from_str(value).is_ok(),
        EnumField::Status => TreatmentStatus::from_str(value).is_ok(),
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> DatabaseError {
    DatabaseError::Validation {
        field: field.into(),
        reason: reason.into(),
    }
}

fn require_text(field: &str, value: &str) -> Result<(), DatabaseError> {
    if value.trim().is_empty() {
        return Err(invalid(field, "must be provided"));
    }
    Ok(())
}

fn require_positive(field: &str, value: Option<f64>) -> Result<(), DatabaseError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(invalid(field, format!("must be positive, got {v}"))),
        _ => Ok(()),
    }
}

pub fn validate_weight(weight_kg: f64) -> Result<(), DatabaseError> {
    require_positive("weight_kg", Some(weight_kg))
}

pub fn validate_new_person(person: &NewPerson) -> Result<(), DatabaseError> {
    require_text("blood_group", &person.blood_group)?;
    require_text("first_name", &person.first_name)?;
    require_text("last_name", &person.last_name)?;
    require_positive("weight_kg", person.weight_kg)?;
    require_positive("height_cm", person.height_cm)?;
    Ok(())
}

pub fn validate_new_condition(condition: &NewCondition) -> Result<(), DatabaseError> {
    if condition.communicability.is_none() {
        return Err(invalid("communicability", "must be specified"));
    }
    require_text("name", &condition.name)?;
    if !is_valid_severity(condition.severity) {
        return Err(invalid(
            "severity",
            format!(
                "must be between {MIN_SEVERITY} and {MAX_SEVERITY}, got {}",
                condition.severity
            ),
        ));
    }
    Ok(())
}

pub fn validate_new_treatment(treatment: &NewTreatment) -> Result<(), DatabaseError> {
    require_text("prescribing_source", &treatment.prescribing_source)?;
    if let Some(expense) = treatment.expense {
        if !expense.is_finite() || expense < 0.0 {
            return Err(invalid("expense", format!("must be non-negative, got {expense}")));
        }
    }
    Ok(())
}

pub fn validate_new_medication(medication: &NewMedication) -> Result<(), DatabaseError> {
    require_text("name", &medication.name)
}

pub fn validate_new_test_report(report: &NewTestReport) -> Result<(), DatabaseError> {
    require_text("test_type", &report.test_type)?;
    require_text("consulting_doctor", &report.consulting_doctor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_bounds_are_inclusive() {
        assert!(is_valid_severity(1));
        assert!(is_valid_severity(10));
        assert!(!is_valid_severity(0));
        assert!(!is_valid_severity(11));
    }

    #[test]
    fn enum_membership_uses_stored_strings() {
        assert!(is_valid_enum(EnumField::TreatmentType, "TCM"));
        assert!(is_valid_enum(EnumField::Status, "Completed"));
        assert!(!is_valid_enum(EnumField::Gender, "Unknown"));
        assert!(!is_valid_enum(EnumField::Communicability, ""));
    }

    #[test]
    fn person_without_blood_group_rejected() {
        let person = NewPerson {
            first_name: "John".into(),
            last_name: "Doe".into(),
            blood_group: "  ".into(),
            ..Default::default()
        };
        match validate_new_person(&person) {
            Err(DatabaseError::Validation { field, .. }) => assert_eq!(field, "blood_group"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn person_with_non_positive_height_rejected() {
        let person = NewPerson {
            first_name: "John".into(),
            last_name: "Doe".into(),
            blood_group: "A+".into(),
            height_cm: Some(0.0),
            ..Default::default()
        };
        assert!(validate_new_person(&person).is_err());
    }

    #[test]
    fn condition_requires_communicability() {
        let condition = NewCondition {
            name: "Flu".into(),
            severity: 3,
            communicability: None,
            ..Default::default()
        };
        match validate_new_condition(&condition) {
            Err(DatabaseError::Validation { field, .. }) => assert_eq!(field, "communicability"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn condition_severity_out_of_range_rejected() {
        let condition = NewCondition {
            name: "Flu".into(),
            severity: 11,
            communicability: Some(Communicability::High),
            ..Default::default()
        };
        assert!(validate_new_condition(&condition).is_err());
    }

    #[test]
    fn negative_expense_rejected_but_zero_allowed() {
        let mut treatment = NewTreatment {
            condition_id: 1,
            prescribing_source: "Clinic".into(),
            expense: Some(-1.0),
            ..Default::default()
        };
        assert!(validate_new_treatment(&treatment).is_err());
        treatment.expense = Some(0.0);
        assert!(validate_new_treatment(&treatment).is_ok());
    }

    #[test]
    fn test_report_requires_consulting_doctor() {
        let report = NewTestReport {
            person_id: 1,
            test_type: "MRI".into(),
            consulting_doctor: String::new(),
            ..Default::default()
        };
        assert!(validate_new_test_report(&report).is_err());
    }
}
