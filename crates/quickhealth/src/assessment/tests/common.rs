use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{
    AnswerSet, AssessmentSubmission, Biometrics, Gender, Response as Answer,
};
use crate::assessment::questions::{
    Alcohol, DailySteps, DaytimeNap, ExerciseFrequency, FastFood, LastMealBeforeSleep, Lifestyle,
    MealFrequency, Mood, ScreenTime, SleepConsistency, SleepDuration, Smoking, Stress,
    SweetDrinks, VegetablesFruit, WakeCondition, WaterIntake,
};
use crate::assessment::{AssessmentConfig, AssessmentService};

/// Male, 30 years, 175 cm, 70 kg: BMI 22.86.
pub(super) fn biometrics() -> Biometrics {
    Biometrics {
        age_years: 30,
        gender: Answer::Known(Gender::Male),
        height_cm: 175.0,
        weight_kg: 70.0,
    }
}

/// Female, 45 years, 160 cm, 85 kg: BMI 33.2.
pub(super) fn overweight_biometrics() -> Biometrics {
    Biometrics {
        age_years: 45,
        gender: Answer::Known(Gender::Female),
        height_cm: 160.0,
        weight_kg: 85.0,
    }
}

/// Healthiest option for every question.
pub(super) fn healthy_answers() -> AnswerSet {
    AnswerSet {
        meal_frequency: MealFrequency::Three.into(),
        fast_food: FastFood::AtMostOnce.into(),
        vegetables_fruit: VegetablesFruit::FourteenOrMore.into(),
        sweet_drinks: SweetDrinks::AtMostOnce.into(),
        water_intake: WaterIntake::TwoLitersOrMore.into(),
        last_meal_before_sleep: LastMealBeforeSleep::ThreeHoursOrMore.into(),
        sleep_duration: SleepDuration::SixToEightHours.into(),
        sleep_consistency: SleepConsistency::Regular.into(),
        daytime_nap: DaytimeNap::UpToOneHour.into(),
        wake_condition: WakeCondition::VeryFresh.into(),
        exercise_frequency: ExerciseFrequency::EightOrMore.into(),
        lifestyle: Lifestyle::Active.into(),
        daily_steps: DailySteps::Over7000.into(),
        screen_time: ScreenTime::FourHoursOrLess.into(),
        stress: Stress::Relaxed.into(),
        mood: Mood::VeryGood.into(),
        smoking: Smoking::Never.into(),
        alcohol: Alcohol::Never.into(),
    }
}

/// Least healthy option for every question.
pub(super) fn at_risk_answers() -> AnswerSet {
    AnswerSet {
        meal_frequency: MealFrequency::TwoOrFewer.into(),
        fast_food: FastFood::ThreeOrMore.into(),
        vegetables_fruit: VegetablesFruit::SevenOrFewer.into(),
        sweet_drinks: SweetDrinks::FourOrMore.into(),
        water_intake: WaterIntake::OneLiterOrLess.into(),
        last_meal_before_sleep: LastMealBeforeSleep::TwoHoursOrLess.into(),
        sleep_duration: SleepDuration::SixHoursOrLess.into(),
        sleep_consistency: SleepConsistency::Irregular.into(),
        daytime_nap: DaytimeNap::OneToTwoHours.into(),
        wake_condition: WakeCondition::VeryTired.into(),
        exercise_frequency: ExerciseFrequency::Never.into(),
        lifestyle: Lifestyle::Passive.into(),
        daily_steps: DailySteps::UpTo3000.into(),
        screen_time: ScreenTime::SixHoursOrMore.into(),
        stress: Stress::VeryStressed.into(),
        mood: Mood::Bad.into(),
        smoking: Smoking::WeeklyOrMore.into(),
        alcohol: Alcohol::WeeklyOrMore.into(),
    }
}

/// Middle-of-the-road answers: diet 79, sleep 83, activity 71, mental 80, overall 78.
pub(super) fn typical_answers() -> AnswerSet {
    AnswerSet {
        meal_frequency: MealFrequency::Three.into(),
        fast_food: FastFood::TwoToThree.into(),
        vegetables_fruit: VegetablesFruit::SevenToFourteen.into(),
        sweet_drinks: SweetDrinks::TwoToFour.into(),
        water_intake: WaterIntake::OneToTwoLiters.into(),
        last_meal_before_sleep: LastMealBeforeSleep::TwoToThreeHours.into(),
        sleep_duration: SleepDuration::SixToEightHours.into(),
        sleep_consistency: SleepConsistency::FairlyRegular.into(),
        daytime_nap: DaytimeNap::Never.into(),
        wake_condition: WakeCondition::Neutral.into(),
        exercise_frequency: ExerciseFrequency::OneToThree.into(),
        lifestyle: Lifestyle::ModeratelyActive.into(),
        daily_steps: DailySteps::From3000To7000.into(),
        screen_time: ScreenTime::FourToSixHours.into(),
        stress: Stress::Normal.into(),
        mood: Mood::Good.into(),
        smoking: Smoking::Never.into(),
        alcohol: Alcohol::AtMostMonthly.into(),
    }
}

pub(super) fn submission(biometrics: Biometrics, answers: AnswerSet) -> AssessmentSubmission {
    AssessmentSubmission {
        biometrics,
        answers,
    }
}

pub(super) fn service() -> Arc<AssessmentService> {
    Arc::new(AssessmentService::new(AssessmentConfig::default()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("valid json")
}
