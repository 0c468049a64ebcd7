//! Physical indicators derived from biometrics.
//!
//! Every function degrades to `0.0` (or [`BmiCategory::NotApplicable`]) on non-positive or
//! non-finite input instead of failing, so one bad measurement never blocks the others.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{AnswerSet, Biometrics, Gender};
use super::questions::{ExerciseFrequency, Lifestyle};

pub const UNDERWEIGHT_BMI_CEILING: f64 = 18.5;
pub const NORMAL_BMI_CEILING: f64 = 25.0;
pub const OVERWEIGHT_BMI_CEILING: f64 = 30.0;

/// Millilitres of water recommended per kilogram of body weight.
pub const WATER_ML_PER_KG: f64 = 35.0;

/// Activity factor applied when the lifestyle answer is missing or unrecognized.
pub const DEFAULT_ACTIVITY_BASE: f64 = 1.20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
    NotApplicable,
}

impl BmiCategory {
    /// Lower bounds are inclusive: exactly 18.5 is `Normal`, 25 is `Overweight`, 30 is `Obese`.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi == 0.0 || !bmi.is_finite() {
            BmiCategory::NotApplicable
        } else if bmi < UNDERWEIGHT_BMI_CEILING {
            BmiCategory::Underweight
        } else if bmi < NORMAL_BMI_CEILING {
            BmiCategory::Normal
        } else if bmi < OVERWEIGHT_BMI_CEILING {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
            BmiCategory::NotApplicable => "N/A",
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if !is_positive(weight_kg) || !is_positive(height_cm) {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Harris-Benedict (revised) basal metabolic rate in kcal/day.
pub fn compute_bmr(gender: Option<Gender>, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    if !is_positive(weight_kg) || !is_positive(height_cm) || age_years == 0 {
        return 0.0;
    }
    let (w, h, a) = (weight_kg, height_cm, f64::from(age_years));
    match gender {
        Some(Gender::Male) => 88.362 + 13.397 * w + 4.799 * h - 5.677 * a,
        Some(Gender::Female) => 447.593 + 9.247 * w + 3.098 * h - 4.330 * a,
        None => 0.0,
    }
}

/// Lifestyle base multiplier plus an additive exercise modifier.
pub fn activity_factor(lifestyle: Option<Lifestyle>, exercise: Option<ExerciseFrequency>) -> f64 {
    let base = match lifestyle {
        Some(Lifestyle::Passive) | None => DEFAULT_ACTIVITY_BASE,
        Some(Lifestyle::ModeratelyActive) => 1.35,
        Some(Lifestyle::Active) => 1.55,
    };
    let modifier = match exercise {
        Some(ExerciseFrequency::Never) | None => 0.0,
        Some(ExerciseFrequency::OneToThree) => 0.05,
        Some(ExerciseFrequency::FourToEight) => 0.12,
        Some(ExerciseFrequency::EightOrMore) => 0.20,
    };
    base + modifier
}

pub fn tdee(bmr: f64, activity_factor: f64) -> f64 {
    if bmr > 0.0 {
        bmr * activity_factor
    } else {
        0.0
    }
}

/// Daily water requirement in litres, rounded to two decimals.
pub fn water_need_liters(weight_kg: f64) -> f64 {
    if !is_positive(weight_kg) {
        return 0.0;
    }
    let liters = WATER_ML_PER_KG * weight_kg / 1000.0;
    (liters * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub activity_factor: f64,
    pub tdee: f64,
    pub water_need_liters: f64,
}

impl Indicators {
    pub fn compute(biometrics: &Biometrics, answers: &AnswerSet) -> Self {
        let bmi = compute_bmi(biometrics.weight_kg, biometrics.height_cm);
        let bmr = compute_bmr(
            biometrics.gender.known(),
            biometrics.weight_kg,
            biometrics.height_cm,
            biometrics.age_years,
        );
        let activity_factor =
            activity_factor(answers.lifestyle.known(), answers.exercise_frequency.known());

        if bmi == 0.0 || bmr == 0.0 {
            debug!(bmi, bmr, "biometrics incomplete, indicators degraded to zero");
        }

        Self {
            bmi,
            bmi_category: BmiCategory::from_bmi(bmi),
            bmr,
            activity_factor,
            tdee: tdee(bmr, activity_factor),
            water_need_liters: water_need_liters(biometrics.weight_kg),
        }
    }
}
