use serde::{Deserialize, Serialize};

/// Closed vocabulary with a canonical form label and an ASCII alias per variant.
pub trait Label: Sized + Copy + 'static {
    const VARIANTS: &'static [Self];

    /// Label offered by the questionnaire form; this is the serialized form.
    fn label(self) -> &'static str;

    /// ASCII snake_case alias accepted on input.
    fn alias(self) -> &'static str;

    fn from_label(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| {
                variant.label() == trimmed || variant.alias().eq_ignore_ascii_case(trimmed)
            })
    }
}

/// A survey question whose answers map to a 0-100 sub-score.
pub trait Question: Label {
    const KEY: QuestionKey;

    fn score(self) -> u8;
}

/// Answers that also collapse to a 1-5 intensity level.
pub trait Leveled: Question {
    fn level(self) -> u8;
}

/// Identifies each of the eighteen questionnaire items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKey {
    MealFrequency,
    FastFood,
    VegetablesFruit,
    SweetDrinks,
    WaterIntake,
    LastMealBeforeSleep,
    SleepDuration,
    SleepConsistency,
    DaytimeNap,
    WakeCondition,
    ExerciseFrequency,
    Lifestyle,
    DailySteps,
    ScreenTime,
    Stress,
    Mood,
    Smoking,
    Alcohol,
}

impl QuestionKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            QuestionKey::MealFrequency => "meal_frequency",
            QuestionKey::FastFood => "fast_food",
            QuestionKey::VegetablesFruit => "vegetables_fruit",
            QuestionKey::SweetDrinks => "sweet_drinks",
            QuestionKey::WaterIntake => "water_intake",
            QuestionKey::LastMealBeforeSleep => "last_meal_before_sleep",
            QuestionKey::SleepDuration => "sleep_duration",
            QuestionKey::SleepConsistency => "sleep_consistency",
            QuestionKey::DaytimeNap => "daytime_nap",
            QuestionKey::WakeCondition => "wake_condition",
            QuestionKey::ExerciseFrequency => "exercise_frequency",
            QuestionKey::Lifestyle => "lifestyle",
            QuestionKey::DailySteps => "daily_steps",
            QuestionKey::ScreenTime => "screen_time",
            QuestionKey::Stress => "stress",
            QuestionKey::Mood => "mood",
            QuestionKey::Smoking => "smoking",
            QuestionKey::Alcohol => "alcohol",
        }
    }

    /// Prompt shown next to the question on the form.
    pub const fn prompt(self) -> &'static str {
        match self {
            QuestionKey::MealFrequency => "Main meals per day",
            QuestionKey::FastFood => "Fast food per week",
            QuestionKey::VegetablesFruit => "Vegetable/fruit servings per week",
            QuestionKey::SweetDrinks => "Sweet drinks per week",
            QuestionKey::WaterIntake => "Plain water per day",
            QuestionKey::LastMealBeforeSleep => "Gap between last meal and sleep",
            QuestionKey::SleepDuration => "Night sleep duration",
            QuestionKey::SleepConsistency => "Sleep schedule consistency",
            QuestionKey::DaytimeNap => "Average daytime nap",
            QuestionKey::WakeCondition => "Condition on waking",
            QuestionKey::ExerciseFrequency => "Exercise sessions per month",
            QuestionKey::Lifestyle => "Lifestyle",
            QuestionKey::DailySteps => "Daily steps",
            QuestionKey::ScreenTime => "Screen time per day",
            QuestionKey::Stress => "Recent stress",
            QuestionKey::Mood => "Average mood this week",
            QuestionKey::Smoking => "Smoking",
            QuestionKey::Alcohol => "Alcohol",
        }
    }
}

macro_rules! question {
    (
        $(#[$meta:meta])*
        $name:ident => $key:ident {
            $( $variant:ident = ($label:literal, $alias:literal, $score:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant ),+
        }

        impl Label for $name {
            const VARIANTS: &'static [Self] = &[$( Self::$variant ),+];

            fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }

            fn alias(self) -> &'static str {
                match self {
                    $( Self::$variant => $alias ),+
                }
            }
        }

        impl Question for $name {
            const KEY: QuestionKey = QuestionKey::$key;

            fn score(self) -> u8 {
                match self {
                    $( Self::$variant => $score ),+
                }
            }
        }
    };
}

question! {
    /// Main meals per day.
    MealFrequency => MealFrequency {
        TwoOrFewer = ("≤2x", "two_or_fewer", 45),
        Three = ("3x", "three", 100),
        MoreThanThree = ("≥3x", "more_than_three", 80),
    }
}

question! {
    /// Fast food per week.
    FastFood => FastFood {
        AtMostOnce = ("≤1x/minggu", "at_most_once_weekly", 100),
        TwoToThree = ("2–3x/minggu", "two_to_three_weekly", 65),
        ThreeOrMore = ("≥3x/minggu", "three_or_more_weekly", 30),
    }
}

question! {
    /// Vegetable and fruit servings per week.
    VegetablesFruit => VegetablesFruit {
        SevenOrFewer = ("≤7x", "seven_or_fewer", 30),
        SevenToFourteen = ("7–14x", "seven_to_fourteen", 80),
        FourteenOrMore = ("≥14x", "fourteen_or_more", 100),
    }
}

question! {
    /// Sweetened drinks per week.
    SweetDrinks => SweetDrinks {
        AtMostOnce = ("≤1x/minggu", "at_most_once_weekly", 100),
        TwoToFour = ("2–4x/minggu", "two_to_four_weekly", 70),
        FourOrMore = ("≥4x/minggu", "four_or_more_weekly", 35),
    }
}

question! {
    /// Plain water per day.
    WaterIntake => WaterIntake {
        OneLiterOrLess = ("≤1L", "one_liter_or_less", 25),
        OneToTwoLiters = ("1–2L", "one_to_two_liters", 75),
        TwoLitersOrMore = ("≥2L", "two_liters_or_more", 100),
    }
}

question! {
    /// Hours between the last meal and going to sleep.
    LastMealBeforeSleep => LastMealBeforeSleep {
        TwoHoursOrLess = ("≤2 jam", "two_hours_or_less", 35),
        TwoToThreeHours = ("2–3 jam", "two_to_three_hours", 75),
        ThreeHoursOrMore = ("≥3 jam", "three_hours_or_more", 100),
    }
}

question! {
    /// Night sleep duration.
    SleepDuration => SleepDuration {
        SixHoursOrLess = ("≤6 jam", "six_hours_or_less", 25),
        SixToEightHours = ("6–8 jam", "six_to_eight_hours", 100),
        EightHoursOrMore = ("≥8 jam", "eight_hours_or_more", 80),
    }
}

question! {
    SleepConsistency => SleepConsistency {
        Irregular = ("Tidak teratur", "irregular", 35),
        FairlyRegular = ("Cukup teratur", "fairly_regular", 80),
        Regular = ("Teratur", "regular", 100),
    }
}

question! {
    /// Average daytime nap.
    DaytimeNap => DaytimeNap {
        Never = ("Tidak pernah", "never", 90),
        UpToOneHour = ("≤1 jam/hari", "up_to_one_hour", 100),
        OneToTwoHours = ("1–2 jam/hari", "one_to_two_hours", 80),
    }
}

question! {
    /// How rested the respondent feels on waking.
    WakeCondition => WakeCondition {
        VeryTired = ("Sangat lelah", "very_tired", 10),
        Tired = ("Lelah", "tired", 35),
        Neutral = ("Netral", "neutral", 65),
        FairlyFresh = ("Cukup segar", "fairly_fresh", 90),
        VeryFresh = ("Sangat segar", "very_fresh", 100),
    }
}

question! {
    /// Exercise sessions per month.
    ExerciseFrequency => ExerciseFrequency {
        Never = ("Tidak pernah", "never", 25),
        OneToThree = ("1–3x", "one_to_three", 65),
        FourToEight = ("4–8x", "four_to_eight", 85),
        EightOrMore = ("≥8x", "eight_or_more", 100),
    }
}

question! {
    Lifestyle => Lifestyle {
        Passive = ("Pasif (jarang bergerak)", "passive", 45),
        ModeratelyActive = ("Cukup aktif (kadang olahraga)", "moderately_active", 80),
        Active = ("Aktif (sering bergerak)", "active", 100),
    }
}

question! {
    DailySteps => DailySteps {
        UpTo3000 = ("≤3000", "up_to_3000", 25),
        From3000To7000 = ("3000–7000", "3000_to_7000", 75),
        Over7000 = ("≥7000", "over_7000", 100),
    }
}

question! {
    /// Recreational screen time per day.
    ScreenTime => ScreenTime {
        FourHoursOrLess = ("≤4 jam", "four_hours_or_less", 100),
        FourToSixHours = ("4–6 jam", "four_to_six_hours", 70),
        SixHoursOrMore = ("≥6 jam", "six_hours_or_more", 35),
    }
}

question! {
    /// Self-reported stress over recent weeks.
    Stress => Stress {
        Relaxed = ("Santai", "relaxed", 100),
        FairlyCalm = ("Cukup tenang", "fairly_calm", 90),
        Normal = ("Normal", "normal", 70),
        SomewhatPressured = ("Sedikit tertekan", "somewhat_pressured", 45),
        VeryStressed = ("Sangat stres", "very_stressed", 25),
    }
}

question! {
    /// Average mood over the last week.
    Mood => Mood {
        Bad = ("Buruk", "bad", 30),
        Low = ("Kurang", "low", 55),
        Neutral = ("Netral", "neutral", 70),
        Good = ("Baik", "good", 90),
        VeryGood = ("Sangat baik", "very_good", 100),
    }
}

question! {
    Smoking => Smoking {
        Never = ("Tidak pernah", "never", 100),
        AtMostMonthly = ("≤1x/bulan", "at_most_monthly", 80),
        OneToThreeMonthly = ("1–3x/bulan", "one_to_three_monthly", 45),
        WeeklyOrMore = ("≥1x/minggu", "weekly_or_more", 20),
    }
}

question! {
    Alcohol => Alcohol {
        Never = ("Tidak pernah", "never", 100),
        AtMostMonthly = ("≤1x/bulan", "at_most_monthly", 80),
        OneToThreeMonthly = ("1–3x/bulan", "one_to_three_monthly", 45),
        WeeklyOrMore = ("≥1x/minggu", "weekly_or_more", 20),
    }
}

impl Leveled for Stress {
    fn level(self) -> u8 {
        match self {
            Stress::Relaxed => 1,
            Stress::FairlyCalm => 2,
            Stress::Normal => 3,
            Stress::SomewhatPressured => 4,
            Stress::VeryStressed => 5,
        }
    }
}

impl Leveled for Mood {
    fn level(self) -> u8 {
        match self {
            Mood::Bad => 1,
            Mood::Low => 2,
            Mood::Neutral => 3,
            Mood::Good => 4,
            Mood::VeryGood => 5,
        }
    }
}

/// One selectable option in the published catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    pub label: &'static str,
    pub alias: &'static str,
    pub score: u8,
}

/// Published description of a question so a form can be generated from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSpec {
    pub key: QuestionKey,
    pub prompt: &'static str,
    pub options: Vec<OptionSpec>,
}

fn describe<Q: Question>() -> QuestionSpec {
    QuestionSpec {
        key: Q::KEY,
        prompt: Q::KEY.prompt(),
        options: Q::VARIANTS
            .iter()
            .map(|variant| OptionSpec {
                label: variant.label(),
                alias: variant.alias(),
                score: variant.score(),
            })
            .collect(),
    }
}

/// Every question in form order.
pub fn catalogue() -> Vec<QuestionSpec> {
    vec![
        describe::<MealFrequency>(),
        describe::<FastFood>(),
        describe::<VegetablesFruit>(),
        describe::<SweetDrinks>(),
        describe::<WaterIntake>(),
        describe::<LastMealBeforeSleep>(),
        describe::<SleepDuration>(),
        describe::<SleepConsistency>(),
        describe::<DaytimeNap>(),
        describe::<WakeCondition>(),
        describe::<ExerciseFrequency>(),
        describe::<Lifestyle>(),
        describe::<DailySteps>(),
        describe::<ScreenTime>(),
        describe::<Stress>(),
        describe::<Mood>(),
        describe::<Smoking>(),
        describe::<Alcohol>(),
    ]
}
