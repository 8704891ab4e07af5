//! Profile enumerations.
//!
//! Both enumerations are closed sets: an unrecognized wire label is a
//! decode error, never a silent fallback to some default variant.

use serde::{Deserialize, Serialize};

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    /// Little to no movement during the day
    Sedentary,
    /// Light exercise 1-2 days a week
    LightlyActive,
    /// Moderate exercise 3-4 days a week
    ModeratelyActive,
    /// Intense exercise 5+ days a week
    VeryActive,
    /// Rarely or never exercises
    HardlyExercise,
}

impl ActivityLevel {
    /// All variants, in the order the product lists them
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::HardlyExercise,
    ];

    /// Human-readable option label as rendered by the UI
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly active",
            Self::ModeratelyActive => "Moderately active",
            Self::VeryActive => "Very active",
            Self::HardlyExercise => "Hardly exercise",
        }
    }
}

/// Self-reported menstrual status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenstrualStatus {
    /// Cycles arrive on a predictable schedule
    Regular,
    /// Cycle length varies noticeably
    Irregular,
    /// No cycle for twelve months or more
    Menopausal,
}

impl MenstrualStatus {
    /// All variants, in the order the product lists them
    pub const ALL: [Self; 3] = [Self::Regular, Self::Irregular, Self::Menopausal];

    /// Fixed human-readable label carried by the variant
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Regular => "Regular cycles",
            Self::Irregular => "Irregular cycles",
            Self::Menopausal => "Menopausal",
        }
    }

    /// Map a human-readable label back to a variant.
    ///
    /// Returns `None` for anything outside the closed set.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod activity_level_tests {
        use super::*;

        #[test]
        fn test_wire_labels_round() {
            let level: ActivityLevel = serde_json::from_str(r#""SEDENTARY""#).unwrap();
            assert_eq!(level, ActivityLevel::Sedentary);
            assert_eq!(
                serde_json::to_string(&ActivityLevel::HardlyExercise).unwrap(),
                r#""HARDLY_EXERCISE""#
            );
        }

        #[test]
        fn test_unknown_label_fails() {
            assert!(serde_json::from_str::<ActivityLevel>(r#""COUCH_POTATO""#).is_err());
        }

        #[test]
        fn test_closed_set_size() {
            assert_eq!(ActivityLevel::ALL.len(), 5);
        }
    }

    mod menstrual_status_tests {
        use super::*;

        #[test]
        fn test_labels_are_fixed() {
            assert_eq!(MenstrualStatus::Regular.label(), "Regular cycles");
            assert_eq!(MenstrualStatus::Menopausal.label(), "Menopausal");
        }

        #[test]
        fn test_from_label_rejects_unknown() {
            assert_eq!(
                MenstrualStatus::from_label("Irregular cycles"),
                Some(MenstrualStatus::Irregular)
            );
            assert_eq!(MenstrualStatus::from_label("Sometimes"), None);
        }

        #[test]
        fn test_unknown_wire_label_fails() {
            assert!(serde_json::from_str::<MenstrualStatus>(r#""UNKNOWN""#).is_err());
        }
    }
}
