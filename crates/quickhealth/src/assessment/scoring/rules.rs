use tracing::warn;

use super::super::domain::{AnswerSet, Response};
use super::super::questions::Question;
use super::config::ScoringConfig;
use super::ScoreComponent;

pub(crate) struct CategoryScores {
    pub diet: u8,
    pub sleep: u8,
    pub activity: u8,
    pub mental: u8,
}

/// Collects one component per looked-up answer, in lookup order.
struct Tally {
    fallback_score: u8,
    components: Vec<ScoreComponent>,
}

impl Tally {
    fn lookup<Q: Question>(&mut self, response: &Response<Q>) -> f64 {
        let (score, fallback) = match response.known() {
            Some(answer) => (answer.score(), false),
            None => {
                warn!(
                    question = Q::KEY.as_str(),
                    label = response.as_label(),
                    fallback_score = self.fallback_score,
                    "unrecognized answer, substituting neutral sub-score"
                );
                (self.fallback_score, true)
            }
        };

        self.components.push(ScoreComponent {
            question: Q::KEY,
            label: response.as_label().to_string(),
            score,
            fallback,
        });
        f64::from(score)
    }
}

fn truncate_score(weighted: f64) -> u8 {
    weighted.clamp(0.0, 100.0) as u8
}

pub(crate) fn score_answers(
    answers: &AnswerSet,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, CategoryScores) {
    let mut tally = Tally {
        fallback_score: config.fallback_score,
        components: Vec::with_capacity(18),
    };

    let meal_frequency = tally.lookup(&answers.meal_frequency);
    let fast_food = tally.lookup(&answers.fast_food);
    let vegetables_fruit = tally.lookup(&answers.vegetables_fruit);
    let sweet_drinks = tally.lookup(&answers.sweet_drinks);
    let water_intake = tally.lookup(&answers.water_intake);
    let last_meal_gap = tally.lookup(&answers.last_meal_before_sleep);
    let sleep_duration = tally.lookup(&answers.sleep_duration);
    let sleep_consistency = tally.lookup(&answers.sleep_consistency);
    tally.lookup(&answers.daytime_nap);
    let wake_condition = tally.lookup(&answers.wake_condition);
    let exercise_frequency = tally.lookup(&answers.exercise_frequency);
    tally.lookup(&answers.lifestyle);
    let daily_steps = tally.lookup(&answers.daily_steps);
    let screen_time = tally.lookup(&answers.screen_time);
    tally.lookup(&answers.stress);
    tally.lookup(&answers.mood);
    tally.lookup(&answers.smoking);
    tally.lookup(&answers.alcohol);

    let diet_weights = &config.diet;
    let diet = truncate_score(
        diet_weights.meal_frequency * meal_frequency
            + diet_weights.vegetables_fruit * vegetables_fruit
            + diet_weights.sweet_drinks * sweet_drinks
            + diet_weights.fast_food * fast_food
            + diet_weights.water_intake * water_intake,
    );

    let sleep_weights = &config.sleep;
    let sleep = truncate_score(
        sleep_weights.duration * sleep_duration
            + sleep_weights.consistency * sleep_consistency
            + sleep_weights.wake_condition * wake_condition
            + sleep_weights.last_meal_gap * last_meal_gap,
    );

    let activity_weights = &config.activity;
    let activity = truncate_score(
        activity_weights.daily_steps * daily_steps
            + activity_weights.exercise_frequency * exercise_frequency
            + activity_weights.screen_time * screen_time,
    );

    let mental = mental_score(answers.mood_level(), answers.stress_level(), config);

    let scores = CategoryScores {
        diet,
        sleep,
        activity,
        mental,
    };
    (tally.components, scores)
}

/// Mood moves the baseline linearly; stress only penalizes above the neutral level.
pub(crate) fn mental_score(mood_level: u8, stress_level: u8, config: &ScoringConfig) -> u8 {
    let policy = &config.mental;
    let mood = i32::from(mood_level) - 3;
    let stress = i32::from(stress_level) - 3;

    let mood_score = mood * policy.mood_step + policy.baseline;
    let stress_penalty = (stress * policy.stress_step).max(0);
    (mood_score - stress_penalty).clamp(0, 100) as u8
}

pub(crate) fn overall_score(scores: &CategoryScores, config: &ScoringConfig) -> u8 {
    let weights = &config.categories;
    let blended = (weights.diet * (f64::from(scores.diet) / 100.0)
        + weights.sleep * (f64::from(scores.sleep) / 100.0)
        + weights.activity * (f64::from(scores.activity) / 100.0)
        + weights.mental * (f64::from(scores.mental) / 100.0))
        * 100.0;

    // Half-way values round to even.
    blended.round_ties_even().clamp(0.0, 100.0) as u8
}
