//! Report rendering: console text, a text bar chart of role scores, and JSON.
//!
//! Rendering is the last step of a batch. A report that fails to render is
//! logged and skipped; the rest of the batch is still written.

use crate::report::{CandidateReport, Outcome, SimilarityReport, SkipReason};
use crate::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use skillmatch_core::JobIndex;
use std::io::{self, Write};
use tracing::warn;

pub const SEPARATOR: &str = "---------------------------";
pub const DEFAULT_CHART_WIDTH: usize = 40;

/// Output options for [`render_batch_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    pub chart: bool,
    pub chart_width: usize,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            chart: false,
            chart_width: DEFAULT_CHART_WIDTH,
        }
    }
}

/// Console report for one candidate.
pub fn render_text<W: Write>(out: &mut W, report: &CandidateReport) -> io::Result<()> {
    let n = report.index + 1;
    let name = report.identity.name_or_sentinel();
    let email = report.identity.email_or_sentinel();

    writeln!(out)?;
    writeln!(out, "{SEPARATOR}")?;

    if let Outcome::Skipped {
        reason: SkipReason::DocumentUnreadable,
    } = report.outcome
    {
        writeln!(out, "Warning: No text extracted from {}.", report.source)?;
        return Ok(());
    }

    writeln!(out, "Processing Resume {n} | name :  {name} | email :  ({email})")?;

    match &report.outcome {
        Outcome::Skipped { reason } => match reason {
            SkipReason::NoSkillsMatched => {
                writeln!(out, "Warning: No skills matched from resume {n}.")?;
            }
            SkipReason::NoSkillsAvailable => {
                writeln!(out, "Warning: No skills available in the job catalog; resume {n} not ranked.")?;
            }
            SkipReason::DocumentUnreadable => {}
        },
        Outcome::Ranked(ranked) => {
            let skills: Vec<&str> = ranked.extracted_skills.iter().map(String::as_str).collect();
            writeln!(out, "Extracted Candidate Skills: {}", skills.join(", "))?;
            writeln!(out, "{name} ({email}) most suits the role: {}", ranked.predicted_role)?;
            if ranked.is_tied() {
                writeln!(
                    out,
                    "\tTied at {:.2}: {}",
                    ranked.max_score,
                    ranked.tied_roles.join(", ")
                )?;
            }
            for s in &ranked.scores {
                writeln!(out, "\tSimilarity to {}: {:.2}", s.role, s.score)?;
            }
        }
    }
    Ok(())
}

/// Horizontal bar chart of one candidate's scores on a 0 to 1 scale.
pub fn render_chart<W: Write>(out: &mut W, index: usize, ranked: &SimilarityReport, width: usize) -> io::Result<()> {
    let label_width = ranked
        .scores
        .iter()
        .map(|s| s.role.chars().count())
        .max()
        .unwrap_or(0);

    writeln!(out, "Resume {} - Similarity Scores to Job Roles", index + 1)?;
    for s in &ranked.scores {
        let filled = bar_len(s.score, width);
        writeln!(
            out,
            "  {:<label_width$} |{}{}| {:.2}",
            s.role,
            "#".repeat(filled),
            " ".repeat(width - filled),
            s.score,
        )?;
    }
    Ok(())
}

fn bar_len(score: f64, width: usize) -> usize {
    let clamped = if score.is_finite() { score.clamp(0.0, 1.0) } else { 0.0 };
    ((clamped * width as f64).round() as usize).min(width)
}

/// Writes every report; returns how many rendered successfully.
pub fn render_batch_text<W: Write>(out: &mut W, reports: &[CandidateReport], options: TextOptions) -> usize {
    let mut rendered = 0;
    for report in reports {
        let result = render_text(out, report).and_then(|()| match (options.chart, report.ranked()) {
            (true, Some(ranked)) => render_chart(out, report.index, ranked, options.chart_width),
            _ => Ok(()),
        });
        match result {
            Ok(()) => rendered += 1,
            Err(e) => warn!(document = report.index + 1, error = %e, "Failed to render report"),
        }
    }
    rendered
}

/// JSON document for a whole batch.
#[derive(Debug, Serialize)]
pub struct BatchOutput<'a> {
    pub generated_at: DateTime<Utc>,
    pub roles: Vec<&'a str>,
    pub vocabulary_size: usize,
    pub reports: &'a [CandidateReport],
}

impl<'a> BatchOutput<'a> {
    pub fn new(index: &'a JobIndex, reports: &'a [CandidateReport]) -> Self {
        Self {
            generated_at: Utc::now(),
            roles: index.catalog().titles().collect(),
            vocabulary_size: index.vocabulary().len(),
            reports,
        }
    }
}

pub fn render_json<W: Write>(out: &mut W, output: &BatchOutput<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, output)?;
    writeln!(out)?;
    Ok(())
}
