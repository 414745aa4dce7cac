use anyhow::Context;
use clap::{Parser, ValueEnum};
use skillmatch::prelude::*;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Match candidate documents against a catalog of job roles
#[derive(Parser, Debug)]
#[command(name = "skillmatch", version)]
#[command(about = "Rank job roles for each candidate document by shared skills", long_about = None)]
struct Args {
    /// Job catalog: CSV with `role` and `skills` columns, or a JSON array
    #[arg(short, long, default_value = "Resume_Data/jobs.csv")]
    catalog: PathBuf,

    /// Candidate documents (.txt, .docx, .pdf) or directories containing them
    #[arg(required = true)]
    documents: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Draw a bar chart of role scores under each ranked candidate
    #[arg(long)]
    chart: bool,

    /// Chart bar width in characters
    #[arg(long, default_value_t = 40)]
    chart_width: usize,

    /// Evaluate documents in parallel (output order is unchanged)
    #[arg(long)]
    parallel: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting skillmatch v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.catalog);

    let catalog = read_catalog(&args.catalog)
        .with_context(|| format!("Failed to load job catalog {}", args.catalog.display()))?;
    let evaluator = Evaluator::from_catalog(catalog)?;

    let documents = expand_inputs(&args.documents)?;
    let mode = if args.parallel {
        BatchMode::Parallel
    } else {
        BatchMode::Sequential
    };
    let reports = evaluator.evaluate_batch(&FileDocumentReader::new(), &documents, mode)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => {
            let options = TextOptions {
                chart: args.chart,
                chart_width: args.chart_width,
            };
            let rendered = render_batch_text(&mut out, &reports, options);
            if rendered < reports.len() {
                warn!("{} of {} reports failed to render", reports.len() - rendered, reports.len());
            }
        }
        OutputFormat::Json => {
            render_json(&mut out, &BatchOutput::new(evaluator.index(), &reports))?;
        }
    }
    out.flush()?;

    let ranked = reports.iter().filter(|r| r.ranked().is_some()).count();
    info!(documents = reports.len(), ranked, "Evaluation finished");
    Ok(())
}
