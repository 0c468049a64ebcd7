use clap::ValueEnum;
use metrics_exporter_prometheus::PrometheusHandle;
use quickhealth::assessment::questions::{
    Alcohol, DailySteps, DaytimeNap, ExerciseFrequency, FastFood, LastMealBeforeSleep, Lifestyle,
    MealFrequency, Mood, ScreenTime, SleepConsistency, SleepDuration, Smoking, Stress,
    SweetDrinks, VegetablesFruit, WakeCondition, WaterIntake,
};
use quickhealth::assessment::{AnswerSet, AssessmentSubmission, Biometrics, Gender, Response};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Built-in respondents used by the `demo` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum SampleProfile {
    #[default]
    Healthy,
    AtRisk,
}

impl SampleProfile {
    pub(crate) fn label(self) -> &'static str {
        match self {
            SampleProfile::Healthy => "healthy",
            SampleProfile::AtRisk => "at-risk",
        }
    }
}

pub(crate) fn sample_submission(profile: SampleProfile) -> AssessmentSubmission {
    match profile {
        SampleProfile::Healthy => AssessmentSubmission {
            biometrics: Biometrics {
                age_years: 29,
                gender: Response::Known(Gender::Female),
                height_cm: 165.0,
                weight_kg: 58.0,
            },
            answers: AnswerSet {
                meal_frequency: MealFrequency::Three.into(),
                fast_food: FastFood::AtMostOnce.into(),
                vegetables_fruit: VegetablesFruit::FourteenOrMore.into(),
                sweet_drinks: SweetDrinks::AtMostOnce.into(),
                water_intake: WaterIntake::TwoLitersOrMore.into(),
                last_meal_before_sleep: LastMealBeforeSleep::ThreeHoursOrMore.into(),
                sleep_duration: SleepDuration::SixToEightHours.into(),
                sleep_consistency: SleepConsistency::Regular.into(),
                daytime_nap: DaytimeNap::Never.into(),
                wake_condition: WakeCondition::FairlyFresh.into(),
                exercise_frequency: ExerciseFrequency::FourToEight.into(),
                lifestyle: Lifestyle::ModeratelyActive.into(),
                daily_steps: DailySteps::Over7000.into(),
                screen_time: ScreenTime::FourHoursOrLess.into(),
                stress: Stress::FairlyCalm.into(),
                mood: Mood::Good.into(),
                smoking: Smoking::Never.into(),
                alcohol: Alcohol::Never.into(),
            },
        },
        SampleProfile::AtRisk => AssessmentSubmission {
            biometrics: Biometrics {
                age_years: 47,
                gender: Response::Known(Gender::Male),
                height_cm: 170.0,
                weight_kg: 92.0,
            },
            answers: AnswerSet {
                meal_frequency: MealFrequency::MoreThanThree.into(),
                fast_food: FastFood::ThreeOrMore.into(),
                vegetables_fruit: VegetablesFruit::SevenOrFewer.into(),
                sweet_drinks: SweetDrinks::FourOrMore.into(),
                water_intake: WaterIntake::OneLiterOrLess.into(),
                last_meal_before_sleep: LastMealBeforeSleep::TwoHoursOrLess.into(),
                sleep_duration: SleepDuration::SixHoursOrLess.into(),
                sleep_consistency: SleepConsistency::Irregular.into(),
                daytime_nap: DaytimeNap::OneToTwoHours.into(),
                wake_condition: WakeCondition::Tired.into(),
                exercise_frequency: ExerciseFrequency::Never.into(),
                lifestyle: Lifestyle::Passive.into(),
                daily_steps: DailySteps::UpTo3000.into(),
                screen_time: ScreenTime::SixHoursOrMore.into(),
                stress: Stress::SomewhatPressured.into(),
                mood: Mood::Low.into(),
                smoking: Smoking::OneToThreeMonthly.into(),
                alcohol: Alcohol::AtMostMonthly.into(),
            },
        },
    }
}
