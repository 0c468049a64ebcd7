use super::common::*;
use crate::assessment::domain::Response;
use crate::assessment::questions::{
    DailySteps, ExerciseFrequency, FastFood, SleepDuration, Stress, WakeCondition, WaterIntake,
};
use crate::assessment::risk::{evaluate_risks, RiskFlag};

#[test]
fn healthy_answers_raise_no_flags() {
    assert!(evaluate_risks(&healthy_answers(), 22.9).is_empty());
}

#[test]
fn at_risk_answers_raise_flags_in_rule_order() {
    let flags = evaluate_risks(&at_risk_answers(), 33.2);

    assert_eq!(
        flags,
        vec![
            RiskFlag::Overweight,
            RiskFlag::PoorSleep,
            RiskFlag::PhysicalInactivity,
            RiskFlag::MildDehydration,
            RiskFlag::ElevatedStress,
            RiskFlag::FrequentFastFood,
        ]
    );
}

#[test]
fn overweight_flag_starts_at_bmi_25() {
    assert!(!evaluate_risks(&healthy_answers(), 24.99).contains(&RiskFlag::Overweight));
    assert_eq!(
        evaluate_risks(&healthy_answers(), 25.0),
        vec![RiskFlag::Overweight]
    );
}

#[test]
fn poor_sleep_fires_on_short_sleep_or_tired_waking() {
    let mut answers = healthy_answers();
    answers.sleep_duration = SleepDuration::SixHoursOrLess.into();
    assert_eq!(evaluate_risks(&answers, 22.0), vec![RiskFlag::PoorSleep]);

    let mut answers = healthy_answers();
    answers.wake_condition = WakeCondition::Tired.into();
    assert_eq!(evaluate_risks(&answers, 22.0), vec![RiskFlag::PoorSleep]);

    let mut answers = healthy_answers();
    answers.wake_condition = WakeCondition::Neutral.into();
    assert!(evaluate_risks(&answers, 22.0).is_empty());
}

#[test]
fn inactivity_requires_no_exercise_and_lowest_steps() {
    let mut answers = healthy_answers();
    answers.exercise_frequency = ExerciseFrequency::Never.into();
    assert!(evaluate_risks(&answers, 22.0).is_empty());

    answers.daily_steps = DailySteps::UpTo3000.into();
    assert_eq!(
        evaluate_risks(&answers, 22.0),
        vec![RiskFlag::PhysicalInactivity]
    );
}

#[test]
fn dehydration_fires_only_for_lowest_water_tier() {
    let mut answers = healthy_answers();
    answers.water_intake = WaterIntake::OneToTwoLiters.into();
    assert!(evaluate_risks(&answers, 22.0).is_empty());

    answers.water_intake = WaterIntake::OneLiterOrLess.into();
    assert_eq!(
        evaluate_risks(&answers, 22.0),
        vec![RiskFlag::MildDehydration]
    );
}

#[test]
fn elevated_stress_starts_at_level_four() {
    let mut answers = healthy_answers();
    answers.stress = Stress::Normal.into();
    assert!(evaluate_risks(&answers, 22.0).is_empty());

    answers.stress = Stress::SomewhatPressured.into();
    assert_eq!(
        evaluate_risks(&answers, 22.0),
        vec![RiskFlag::ElevatedStress]
    );
}

#[test]
fn frequent_fast_food_fires_for_highest_tier_only() {
    let mut answers = healthy_answers();
    answers.fast_food = FastFood::TwoToThree.into();
    assert!(evaluate_risks(&answers, 22.0).is_empty());

    answers.fast_food = FastFood::ThreeOrMore.into();
    assert_eq!(
        evaluate_risks(&answers, 22.0),
        vec![RiskFlag::FrequentFastFood]
    );
}

#[test]
fn unrecognized_answers_never_fire_rules() {
    let mut answers = at_risk_answers();
    answers.sleep_duration = Response::parse("<6 jam");
    answers.wake_condition = Response::parse("groggy");
    answers.exercise_frequency = Response::parse("");
    answers.water_intake = Response::parse("<1L");
    answers.stress = Response::parse("overwhelmed");
    answers.fast_food = Response::parse("Sering (>3x/minggu)");

    assert!(evaluate_risks(&answers, 22.0).is_empty());
}

#[test]
fn messages_are_distinct() {
    let flags = evaluate_risks(&at_risk_answers(), 33.2);
    let mut messages: Vec<&str> = flags.iter().map(|flag| flag.message()).collect();
    messages.sort_unstable();
    messages.dedup();
    assert_eq!(messages.len(), flags.len());
}
