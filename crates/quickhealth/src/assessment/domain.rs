use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::questions::{
    Alcohol, DailySteps, DaytimeNap, ExerciseFrequency, FastFood, Label, LastMealBeforeSleep,
    Leveled, Lifestyle, MealFrequency, Mood, ScreenTime, SleepConsistency, SleepDuration, Smoking,
    Stress, SweetDrinks, VegetablesFruit, WakeCondition, WaterIntake,
};

/// Level assumed for stress and mood when the answer is not recognized.
pub const NEUTRAL_LEVEL: u8 = 3;

/// Identifier wrapper for processed submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Label for Gender {
    const VARIANTS: &'static [Self] = &[Gender::Male, Gender::Female];

    fn label(self) -> &'static str {
        match self {
            Gender::Male => "Laki-laki",
            Gender::Female => "Perempuan",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// A raw answer resolved against its closed vocabulary.
///
/// Unknown labels are retained verbatim instead of rejected so the scoring pipeline can apply
/// its neutral fallback and report which answers triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Response<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: Label> Response<T> {
    pub fn parse(raw: &str) -> Self {
        match T::from_label(raw) {
            Some(value) => Response::Known(value),
            None => Response::Unrecognized(raw.to_string()),
        }
    }

    pub fn known(&self) -> Option<T> {
        match self {
            Response::Known(value) => Some(*value),
            Response::Unrecognized(_) => None,
        }
    }

    pub fn as_label(&self) -> &str {
        match self {
            Response::Known(value) => value.label(),
            Response::Unrecognized(raw) => raw,
        }
    }
}

impl<T: Label + PartialEq> Response<T> {
    pub fn is(&self, expected: T) -> bool {
        self.known() == Some(expected)
    }
}

impl<T> Default for Response<T> {
    fn default() -> Self {
        Response::Unrecognized(String::new())
    }
}

impl<T: Label> From<T> for Response<T> {
    fn from(value: T) -> Self {
        Response::Known(value)
    }
}

impl<T: Label> fmt::Display for Response<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl<T: Label> Serialize for Response<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_label())
    }
}

/// Any JSON value is accepted: `null` reads as an absent answer and non-string values are kept
/// as unrecognized text.
impl<'de, T: Label> Deserialize<'de> for Response<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(raw) => Response::parse(&raw),
            Value::Null => Response::default(),
            other => Response::Unrecognized(other.to_string()),
        })
    }
}

/// Reads a whole number of years; anything else becomes `0`.
fn deserialize_lenient_years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let years = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_u64().and_then(|value| u32::try_from(value).ok()),
        Value::String(raw) => raw.trim().parse::<u32>().ok(),
        _ => None,
    };
    Ok(years.unwrap_or(0))
}

/// Reads a measurement from a number or numeric string; anything else becomes `0.0`.
fn deserialize_lenient_measure<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let measure = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(measure.filter(|value| value.is_finite()).unwrap_or(0.0))
}

fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body measurements supplied once per submission.
///
/// Missing, `null` or non-numeric values read as zero; the indicator calculator degrades them and
/// the intake guard is where a caller rejects them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Biometrics {
    #[serde(default, deserialize_with = "deserialize_lenient_years")]
    pub age_years: u32,
    #[serde(default)]
    pub gender: Response<Gender>,
    #[serde(default, deserialize_with = "deserialize_lenient_measure")]
    pub height_cm: f64,
    #[serde(default, deserialize_with = "deserialize_lenient_measure")]
    pub weight_kg: f64,
}

/// The eighteen categorical questionnaire answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerSet {
    pub meal_frequency: Response<MealFrequency>,
    pub fast_food: Response<FastFood>,
    pub vegetables_fruit: Response<VegetablesFruit>,
    pub sweet_drinks: Response<SweetDrinks>,
    pub water_intake: Response<WaterIntake>,
    pub last_meal_before_sleep: Response<LastMealBeforeSleep>,
    pub sleep_duration: Response<SleepDuration>,
    pub sleep_consistency: Response<SleepConsistency>,
    pub daytime_nap: Response<DaytimeNap>,
    pub wake_condition: Response<WakeCondition>,
    pub exercise_frequency: Response<ExerciseFrequency>,
    pub lifestyle: Response<Lifestyle>,
    pub daily_steps: Response<DailySteps>,
    pub screen_time: Response<ScreenTime>,
    pub stress: Response<Stress>,
    pub mood: Response<Mood>,
    pub smoking: Response<Smoking>,
    pub alcohol: Response<Alcohol>,
}

impl AnswerSet {
    pub fn stress_level(&self) -> u8 {
        level_of(&self.stress)
    }

    pub fn mood_level(&self) -> u8 {
        level_of(&self.mood)
    }
}

fn level_of<T: Leveled>(response: &Response<T>) -> u8 {
    response.known().map(T::level).unwrap_or(NEUTRAL_LEVEL)
}

/// Inbound payload pairing biometrics with the questionnaire answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub biometrics: Biometrics,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub answers: AnswerSet,
}
