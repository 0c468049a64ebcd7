use crate::infra::{sample_submission, SampleProfile};
use clap::Args;
use quickhealth::assessment::{
    AssessmentConfig, AssessmentService, AssessmentSubmission, AssessmentView,
};
use quickhealth::config::AppConfig;
use quickhealth::error::AppError;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file holding `biometrics` and `answers`
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the assessment view as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Sample respondent to assess
    #[arg(long, value_enum, default_value_t = SampleProfile::Healthy)]
    pub(crate) profile: SampleProfile,
    /// Print the assessment view as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let view = assess_file(&args.input, config.assessment)?;
    print_view(&view, args.json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    println!("QuickHealth demo ({} respondent)", args.profile.label());
    let view = assess_submission(&sample_submission(args.profile), config.assessment)?;
    print_view(&view, args.json)
}

pub(crate) fn assess_file(
    path: &Path,
    config: AssessmentConfig,
) -> Result<AssessmentView, AppError> {
    let raw = fs::read_to_string(path)?;
    let submission: AssessmentSubmission = serde_json::from_str(&raw)?;
    assess_submission(&submission, config)
}

fn assess_submission(
    submission: &AssessmentSubmission,
    config: AssessmentConfig,
) -> Result<AssessmentView, AppError> {
    let service = AssessmentService::new(config);
    let record = service.submit(submission)?;
    Ok(AssessmentView::from_record(&record))
}

fn print_view(view: &AssessmentView, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        render_report(view);
    }
    Ok(())
}

pub(crate) fn render_report(view: &AssessmentView) {
    let indicators = &view.indicators;

    println!(
        "Assessment {} ({})",
        view.submission_id,
        view.generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    println!("\nBody indicators");
    println!("- BMI: {:.1} ({})", indicators.bmi, view.bmi_category_label);
    println!("- BMR: {:.0} kcal/day", indicators.bmr);
    println!(
        "- TDEE: {:.0} kcal/day (activity factor {:.2})",
        indicators.tdee, indicators.activity_factor
    );
    println!("- Water need: {:.2} L/day", indicators.water_need_liters);

    println!("\nHealth score: {}/100 ({})", view.overall_score, view.grade_label);
    for entry in &view.breakdown {
        println!("- {}: {}", entry.category_label, entry.score);
    }

    if !view.fallbacks.is_empty() {
        let keys: Vec<&str> = view.fallbacks.iter().map(|key| key.as_str()).collect();
        println!("  Unrecognized answers scored as neutral: {}", keys.join(", "));
    }

    println!("\nRisk indicators");
    if view.risk_flags.is_empty() {
        println!("- {}", view.risk_summary);
    } else {
        for flag in &view.risk_flags {
            println!("- {flag}");
        }
    }

    println!("\nAdvice");
    if view.advice.is_empty() {
        println!("- {}", view.advice_summary);
    } else {
        for (index, entry) in view.advice.iter().enumerate() {
            println!("{}. {entry}", index + 1);
        }
    }
}
