use serde::{Deserialize, Serialize};

pub const DIET_WEIGHT: f64 = 0.35;
pub const SLEEP_WEIGHT: f64 = 0.25;
pub const ACTIVITY_WEIGHT: f64 = 0.25;
pub const MENTAL_WEIGHT: f64 = 0.15;

pub const MEAL_FREQUENCY_WEIGHT: f64 = 0.25;
pub const VEGETABLES_FRUIT_WEIGHT: f64 = 0.25;
pub const SWEET_DRINKS_WEIGHT: f64 = 0.20;
pub const FAST_FOOD_WEIGHT: f64 = 0.20;
pub const WATER_INTAKE_WEIGHT: f64 = 0.10;

pub const SLEEP_DURATION_WEIGHT: f64 = 0.40;
pub const SLEEP_CONSISTENCY_WEIGHT: f64 = 0.25;
pub const WAKE_CONDITION_WEIGHT: f64 = 0.25;
pub const LAST_MEAL_GAP_WEIGHT: f64 = 0.10;

pub const DAILY_STEPS_WEIGHT: f64 = 0.50;
pub const EXERCISE_FREQUENCY_WEIGHT: f64 = 0.30;
pub const SCREEN_TIME_WEIGHT: f64 = 0.20;

/// Mental score at neutral mood and stress.
pub const MENTAL_BASELINE: i32 = 75;
/// Points gained per mood level above neutral (lost below it).
pub const MOOD_STEP: i32 = 5;
/// Points lost per stress level above neutral; calmer answers never add points.
pub const STRESS_STEP: i32 = 8;

/// Sub-score substituted for an answer outside its question's vocabulary.
pub const FALLBACK_SUB_SCORE: u8 = 50;

/// Tolerance used when checking that a weight group sums to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// Weights combining the four category scores into the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub diet: f64,
    pub sleep: f64,
    pub activity: f64,
    pub mental: f64,
}

impl CategoryWeights {
    pub fn total(&self) -> f64 {
        self.diet + self.sleep + self.activity + self.mental
    }

    /// Finite, non-negative and summing to one.
    pub fn is_valid(&self) -> bool {
        let parts = [self.diet, self.sleep, self.activity, self.mental];
        parts.iter().all(|weight| weight.is_finite() && *weight >= 0.0)
            && (self.total() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            diet: DIET_WEIGHT,
            sleep: SLEEP_WEIGHT,
            activity: ACTIVITY_WEIGHT,
            mental: MENTAL_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DietWeights {
    pub meal_frequency: f64,
    pub vegetables_fruit: f64,
    pub sweet_drinks: f64,
    pub fast_food: f64,
    pub water_intake: f64,
}

impl Default for DietWeights {
    fn default() -> Self {
        Self {
            meal_frequency: MEAL_FREQUENCY_WEIGHT,
            vegetables_fruit: VEGETABLES_FRUIT_WEIGHT,
            sweet_drinks: SWEET_DRINKS_WEIGHT,
            fast_food: FAST_FOOD_WEIGHT,
            water_intake: WATER_INTAKE_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepWeights {
    pub duration: f64,
    pub consistency: f64,
    pub wake_condition: f64,
    pub last_meal_gap: f64,
}

impl Default for SleepWeights {
    fn default() -> Self {
        Self {
            duration: SLEEP_DURATION_WEIGHT,
            consistency: SLEEP_CONSISTENCY_WEIGHT,
            wake_condition: WAKE_CONDITION_WEIGHT,
            last_meal_gap: LAST_MEAL_GAP_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityWeights {
    pub daily_steps: f64,
    pub exercise_frequency: f64,
    pub screen_time: f64,
}

impl Default for ActivityWeights {
    fn default() -> Self {
        Self {
            daily_steps: DAILY_STEPS_WEIGHT,
            exercise_frequency: EXERCISE_FREQUENCY_WEIGHT,
            screen_time: SCREEN_TIME_WEIGHT,
        }
    }
}

/// Linear mood bonus and stress penalty around the neutral level 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentalPolicy {
    pub baseline: i32,
    pub mood_step: i32,
    pub stress_step: i32,
}

impl Default for MentalPolicy {
    fn default() -> Self {
        Self {
            baseline: MENTAL_BASELINE,
            mood_step: MOOD_STEP,
            stress_step: STRESS_STEP,
        }
    }
}

/// Full weighting policy for the score engine. `Default` is the published policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub categories: CategoryWeights,
    pub diet: DietWeights,
    pub sleep: SleepWeights,
    pub activity: ActivityWeights,
    pub mental: MentalPolicy,
    pub fallback_score: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            categories: CategoryWeights::default(),
            diet: DietWeights::default(),
            sleep: SleepWeights::default(),
            activity: ActivityWeights::default(),
            mental: MentalPolicy::default(),
            fallback_score: FALLBACK_SUB_SCORE,
        }
    }
}
