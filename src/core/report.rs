use crate::domain::model::ScoreReport;
use crate::utils::error::Result;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Console layout: per-aspect raw scores with two decimals, final score rounded.
pub fn render_text(report: &ScoreReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.device);

    for aspect in &report.aspects {
        let _ = writeln!(out, "Evaluating {}", aspect.name);
        let _ = writeln!(out, "\tRaw score {:.2}%", aspect.raw_score * 100.0);
    }

    let _ = writeln!(out);
    let _ = write!(
        out,
        "This mobile device achieved a score of {:.0}%",
        report.score * 100.0
    );
    out
}
