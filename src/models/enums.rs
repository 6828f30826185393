use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
///
/// The string form is the exact value stored in the database column.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every stored value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($s),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Gender {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

str_enum!(Communicability {
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

str_enum!(TreatmentType {
    Homeopathy => "Homeopathy",
    Allopathy => "Allopathy",
    Ayurveda => "Ayurveda",
    Chiropractic => "Chiropractic",
    TraditionalChineseMedicine => "TCM",
});

str_enum!(TreatmentStatus {
    Ongoing => "Ongoing",
    Completed => "Completed",
});
