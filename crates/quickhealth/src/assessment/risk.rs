use serde::{Deserialize, Serialize};

use super::domain::AnswerSet;
use super::questions::{
    DailySteps, ExerciseFrequency, FastFood, Question, SleepDuration, WakeCondition,
};

pub const OVERWEIGHT_BMI_THRESHOLD: f64 = 25.0;
pub const ELEVATED_STRESS_LEVEL: u8 = 4;
/// Water sub-scores at or below this value indicate low intake.
pub const DEHYDRATION_SCORE_CEILING: u8 = 40;

/// Qualitative risk signals, declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    Overweight,
    PoorSleep,
    PhysicalInactivity,
    MildDehydration,
    ElevatedStress,
    FrequentFastFood,
}

impl RiskFlag {
    pub const fn message(self) -> &'static str {
        match self {
            RiskFlag::Overweight => "Overweight risk (high BMI).",
            RiskFlag::PoorSleep => "Risk of insufficient sleep or poor sleep quality.",
            RiskFlag::PhysicalInactivity => "Risk of insufficient physical activity.",
            RiskFlag::MildDehydration => "Mild dehydration risk.",
            RiskFlag::ElevatedStress => "Signs of elevated stress.",
            RiskFlag::FrequentFastFood => {
                "Frequent fast food consumption: risk of suboptimal nutrition."
            }
        }
    }
}

/// Apply every risk rule against the answers and BMI; any subset may fire.
///
/// Rules that reference an unrecognized answer do not fire.
pub fn evaluate_risks(answers: &AnswerSet, bmi: f64) -> Vec<RiskFlag> {
    let mut flags = Vec::new();

    if bmi >= OVERWEIGHT_BMI_THRESHOLD {
        flags.push(RiskFlag::Overweight);
    }

    let short_sleep = answers.sleep_duration.is(SleepDuration::SixHoursOrLess);
    let tired_on_waking = matches!(
        answers.wake_condition.known(),
        Some(WakeCondition::VeryTired | WakeCondition::Tired)
    );
    if short_sleep || tired_on_waking {
        flags.push(RiskFlag::PoorSleep);
    }

    if answers.exercise_frequency.is(ExerciseFrequency::Never)
        && answers.daily_steps.is(DailySteps::UpTo3000)
    {
        flags.push(RiskFlag::PhysicalInactivity);
    }

    if answers
        .water_intake
        .known()
        .is_some_and(|water| water.score() <= DEHYDRATION_SCORE_CEILING)
    {
        flags.push(RiskFlag::MildDehydration);
    }

    if answers.stress.known().is_some() && answers.stress_level() >= ELEVATED_STRESS_LEVEL {
        flags.push(RiskFlag::ElevatedStress);
    }

    if answers.fast_food.is(FastFood::ThreeOrMore) {
        flags.push(RiskFlag::FrequentFastFood);
    }

    flags
}
