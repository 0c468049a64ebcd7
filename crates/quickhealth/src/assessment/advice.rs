use serde::{Deserialize, Serialize};

use super::domain::AnswerSet;
use super::questions::{
    DailySteps, ExerciseFrequency, FastFood, SleepConsistency, SleepDuration, WaterIntake,
};
use super::risk::{RiskFlag, ELEVATED_STRESS_LEVEL, OVERWEIGHT_BMI_THRESHOLD};
use super::scoring::ScoreResult;

/// Maximum number of advice entries returned per assessment.
pub const DEFAULT_ADVICE_LIMIT: usize = 6;

/// Actionable recommendations, declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    ExtendSleep,
    KeepSleepSchedule,
    StartLightExercise,
    RaiseStepTarget,
    DrinkMoreWater,
    ReduceFastFood,
    ModestCalorieDeficit,
    DailyRelaxation,
}

impl Advice {
    pub const fn text(self) -> &'static str {
        match self {
            Advice::ExtendSleep => {
                "Aim for at least 6-7 hours of sleep; add 30-60 minutes gradually."
            }
            Advice::KeepSleepSchedule => {
                "Keep a consistent sleep schedule (go to bed and wake up at the same time)."
            }
            Advice::StartLightExercise => {
                "Start light activity 3 times a week (20-30 minute walks)."
            }
            Advice::RaiseStepTarget => {
                "Raise your step target above 3000 per day, then work up to 7000."
            }
            Advice::DrinkMoreWater => "Increase water intake to about 1.5-2 L per day.",
            Advice::ReduceFastFood => {
                "Cut back on fast food; choose a protein source with vegetables instead."
            }
            Advice::ModestCalorieDeficit => {
                "Consider a small calorie deficit combined with more physical activity."
            }
            Advice::DailyRelaxation => {
                "Try a 10-minute relaxation technique every day (breathing, easy walk)."
            }
        }
    }
}

/// Everything the advice rules may consult for one submission.
#[derive(Debug, Clone, Copy)]
pub struct AdviceContext<'a> {
    pub answers: &'a AnswerSet,
    pub bmi: f64,
    pub score: &'a ScoreResult,
    pub flags: &'a [RiskFlag],
}

/// Run the advice rules, keeping the first occurrence of each entry and at most `limit` entries.
pub fn generate_advice(context: &AdviceContext<'_>, limit: usize) -> Vec<Advice> {
    let answers = context.answers;
    let candidates = [
        (
            answers.sleep_duration.is(SleepDuration::SixHoursOrLess),
            Advice::ExtendSleep,
        ),
        (
            answers.sleep_consistency.is(SleepConsistency::Irregular),
            Advice::KeepSleepSchedule,
        ),
        (
            answers.exercise_frequency.is(ExerciseFrequency::Never),
            Advice::StartLightExercise,
        ),
        (
            answers.daily_steps.is(DailySteps::UpTo3000),
            Advice::RaiseStepTarget,
        ),
        (
            answers.water_intake.is(WaterIntake::OneLiterOrLess),
            Advice::DrinkMoreWater,
        ),
        (
            answers.fast_food.is(FastFood::ThreeOrMore),
            Advice::ReduceFastFood,
        ),
        (
            context.bmi >= OVERWEIGHT_BMI_THRESHOLD,
            Advice::ModestCalorieDeficit,
        ),
        (
            answers.stress.known().is_some() && answers.stress_level() >= ELEVATED_STRESS_LEVEL,
            Advice::DailyRelaxation,
        ),
    ];

    let mut advice: Vec<Advice> = Vec::new();
    for (applies, entry) in candidates {
        if applies && !advice.contains(&entry) {
            advice.push(entry);
        }
    }
    advice.truncate(limit);
    advice
}
