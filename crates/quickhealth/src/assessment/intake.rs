use super::domain::Biometrics;

pub const DEFAULT_MAX_AGE_YEARS: u32 = 120;
pub const DEFAULT_MAX_HEIGHT_CM: f64 = 250.0;
pub const DEFAULT_MAX_WEIGHT_KG: f64 = 300.0;

/// A single biometric that failed intake validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("age must be provided (> 0)")]
    MissingAge,
    #[error("age {found} exceeds the accepted maximum of {max}")]
    AgeOutOfRange { max: u32, found: u32 },
    #[error("gender must be one of the offered options")]
    MissingGender,
    #[error("height must be provided (> 0 cm)")]
    MissingHeight,
    #[error("height {found} cm exceeds the accepted maximum of {max} cm")]
    HeightOutOfRange { max: f64, found: f64 },
    #[error("weight must be provided (> 0 kg)")]
    MissingWeight,
    #[error("weight {found} kg exceeds the accepted maximum of {max} kg")]
    WeightOutOfRange { max: f64, found: f64 },
}

/// Every violation found on a submission, reported together.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("incomplete submission: {}", join_violations(.violations))]
pub struct IntakeRejection {
    pub violations: Vec<IntakeViolation>,
}

fn join_violations(violations: &[IntakeViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Upper bounds accepted for each biometric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntakePolicy {
    max_age_years: u32,
    max_height_cm: f64,
    max_weight_kg: f64,
}

impl IntakePolicy {
    pub fn new(max_age_years: u32, max_height_cm: f64, max_weight_kg: f64) -> Self {
        let sanitize = |value: f64, fallback: f64| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };

        Self {
            max_age_years: if max_age_years == 0 {
                DEFAULT_MAX_AGE_YEARS
            } else {
                max_age_years
            },
            max_height_cm: sanitize(max_height_cm, DEFAULT_MAX_HEIGHT_CM),
            max_weight_kg: sanitize(max_weight_kg, DEFAULT_MAX_WEIGHT_KG),
        }
    }

    pub fn max_age_years(&self) -> u32 {
        self.max_age_years
    }

    pub fn max_height_cm(&self) -> f64 {
        self.max_height_cm
    }

    pub fn max_weight_kg(&self) -> f64 {
        self.max_weight_kg
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_AGE_YEARS,
            DEFAULT_MAX_HEIGHT_CM,
            DEFAULT_MAX_WEIGHT_KG,
        )
    }
}

/// Rejects submissions whose biometrics are missing before the scoring pipeline runs.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    pub fn validate(&self, biometrics: &Biometrics) -> Result<(), IntakeRejection> {
        let mut violations = Vec::new();

        if biometrics.age_years == 0 {
            violations.push(IntakeViolation::MissingAge);
        } else if biometrics.age_years > self.policy.max_age_years {
            violations.push(IntakeViolation::AgeOutOfRange {
                max: self.policy.max_age_years,
                found: biometrics.age_years,
            });
        }

        if biometrics.gender.known().is_none() {
            violations.push(IntakeViolation::MissingGender);
        }

        let height = biometrics.height_cm;
        if !(height.is_finite() && height > 0.0) {
            violations.push(IntakeViolation::MissingHeight);
        } else if height > self.policy.max_height_cm {
            violations.push(IntakeViolation::HeightOutOfRange {
                max: self.policy.max_height_cm,
                found: height,
            });
        }

        let weight = biometrics.weight_kg;
        if !(weight.is_finite() && weight > 0.0) {
            violations.push(IntakeViolation::MissingWeight);
        } else if weight > self.policy.max_weight_kg {
            violations.push(IntakeViolation::WeightOutOfRange {
                max: self.policy.max_weight_kg,
                found: weight,
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(IntakeRejection { violations })
        }
    }
}
