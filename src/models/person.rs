use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::Gender;

/// A registered person (table `USER`).
///
/// Height is stored in centimetres, weight in kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub blood_group: String,
    pub location: Option<String>,
}

impl Person {
    /// Body-mass index, or `None` unless both weight and height are recorded.
    pub fn bmi(&self) -> Option<f64> {
        match (self.weight_kg, self.height_cm) {
            (Some(w), Some(h)) if h > 0.0 => {
                let metres = h / 100.0;
                Some(w / (metres * metres))
            }
            _ => None,
        }
    }
}

/// Field set for registering a person; the id is assigned by storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub blood_group: String,
    pub location: Option<String>,
}
