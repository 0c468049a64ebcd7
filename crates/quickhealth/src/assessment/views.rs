use chrono::{DateTime, Utc};
use serde::Serialize;

use super::indicators::Indicators;
use super::questions::QuestionKey;
use super::scoring::{HealthGrade, ScoreComponent};
use super::service::AssessmentRecord;

pub const NO_RISK_MESSAGE: &str = "No major risk indicated by your answers.";
pub const NO_ADVICE_MESSAGE: &str = "No specific advice. Keep up your healthy habits.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Diet,
    Sleep,
    Activity,
    Mental,
}

impl ScoreCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreCategory::Diet => "Diet",
            ScoreCategory::Sleep => "Sleep",
            ScoreCategory::Activity => "Physical activity",
            ScoreCategory::Mental => "Daily life & mental",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScoreEntry {
    pub category: ScoreCategory,
    pub category_label: &'static str,
    pub score: u8,
}

/// Render-ready projection of an assessment record.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub submission_id: String,
    pub generated_at: DateTime<Utc>,
    pub indicators: Indicators,
    pub bmi_category_label: &'static str,
    pub overall_score: u8,
    pub grade: HealthGrade,
    pub grade_label: &'static str,
    pub breakdown: Vec<CategoryScoreEntry>,
    pub components: Vec<ScoreComponent>,
    pub risk_flags: Vec<&'static str>,
    pub risk_summary: &'static str,
    pub advice: Vec<&'static str>,
    pub advice_summary: &'static str,
    pub fallbacks: Vec<QuestionKey>,
}

impl AssessmentView {
    pub fn from_record(record: &AssessmentRecord) -> Self {
        let report = &record.report;
        let scores = &report.scores;

        let breakdown = [
            (ScoreCategory::Diet, scores.diet),
            (ScoreCategory::Sleep, scores.sleep),
            (ScoreCategory::Activity, scores.activity),
            (ScoreCategory::Mental, scores.mental),
        ]
        .into_iter()
        .map(|(category, score)| CategoryScoreEntry {
            category,
            category_label: category.label(),
            score,
        })
        .collect();

        let risk_summary = if report.risk_flags.is_empty() {
            NO_RISK_MESSAGE
        } else {
            "Risk indicators found; see the list below."
        };
        let advice_summary = if report.advice.is_empty() {
            NO_ADVICE_MESSAGE
        } else {
            "Suggested next steps."
        };

        Self {
            submission_id: record.submission_id.0.clone(),
            generated_at: record.generated_at,
            indicators: report.indicators.clone(),
            bmi_category_label: report.indicators.bmi_category.label(),
            overall_score: scores.overall,
            grade: scores.grade,
            grade_label: scores.grade.label(),
            breakdown,
            components: scores.components.clone(),
            risk_flags: report.risk_flags.iter().map(|flag| flag.message()).collect(),
            risk_summary,
            advice: report.advice.iter().map(|entry| entry.text()).collect(),
            advice_summary,
            fallbacks: scores.fallbacks.clone(),
        }
    }
}
