use crate::infra::build_profiler;
use clap::Args;
use health_risk::config::AppConfig;
use health_risk::error::AppError;
use health_risk::workflows::assessment::ProfileReport;
use health_risk::workflows::intake::{AnswerValue, BooleanParsing, CaptureScope, SubmittedAnswers};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file with survey answers, either `{"answers": {...}}` or a bare object
    #[arg(long, conflicts_with = "text", required_unless_present = "text")]
    pub(crate) answers: Option<PathBuf>,
    /// Plain-text transcription of a scanned survey form
    #[arg(long)]
    pub(crate) text: Option<PathBuf>,
    /// Read yes/no answers by exact token instead of substring
    #[arg(long)]
    pub(crate) strict_booleans: bool,
    /// Stop free-form answers at the end of their line
    #[arg(long)]
    pub(crate) line_bounded_captures: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswersFile {
    Wrapped { answers: SubmittedAnswers },
    Bare(SubmittedAnswers),
}

impl AnswersFile {
    fn into_answers(self) -> SubmittedAnswers {
        match self {
            AnswersFile::Wrapped { answers } | AnswersFile::Bare(answers) => answers,
        }
    }
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        text,
        strict_booleans,
        line_bounded_captures,
    } = args;

    let mut config = AppConfig::load()?.profiler;
    if strict_booleans {
        config.boolean_parsing = BooleanParsing::Strict;
    }
    if line_bounded_captures {
        config.capture_scope = CaptureScope::LineBounded;
    }
    let profiler = build_profiler(&config);

    let report = match (answers, text) {
        (Some(path), _) => {
            let raw = std::fs::read_to_string(path)?;
            let parsed: AnswersFile = serde_json::from_str(&raw)?;
            profiler.analyze_answers(parsed.into_answers())?
        }
        (None, Some(path)) => {
            let document = std::fs::read(path)?;
            profiler.analyze_document(&document)?
        }
        (None, None) => {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "pass --answers <FILE> or --text <FILE>",
            )))
        }
    };

    print!("{}", render_report(&report));
    Ok(())
}

pub(crate) fn render_report(report: &ProfileReport) -> String {
    let mut out = String::new();
    out.push_str("Health risk profile\n");
    out.push_str(&format!(
        "Risk level: {} (score {}/100)\n",
        report.risk_level, report.score
    ));
    out.push_str(&format!(
        "Confidence: extraction {:.2}, factors {:.2}\n",
        report.confidence, report.factors_confidence
    ));

    if report.missing_fields.is_empty() {
        out.push_str("Missing fields: none\n");
    } else {
        out.push_str(&format!(
            "Missing fields: {}\n",
            report.missing_fields.join(", ")
        ));
    }

    out.push_str("\nAnswers\n");
    for (field, value) in report.answers.iter() {
        let shown = match value {
            AnswerValue::Integer(number) => number.to_string(),
            AnswerValue::Boolean(true) => "yes".to_string(),
            AnswerValue::Boolean(false) => "no".to_string(),
            AnswerValue::Text(text) => text.clone(),
        };
        out.push_str(&format!("- {field}: {shown}\n"));
    }

    if report.rationale.is_empty() {
        out.push_str("\nRisk factors: none\n");
    } else {
        out.push_str("\nRisk factors\n");
        for reason in &report.rationale {
            out.push_str(&format!("- {reason}\n"));
        }
    }

    out.push_str("\nRecommendations\n");
    for advice in &report.recommendations {
        out.push_str(&format!("- {advice}\n"));
    }

    out
}
