mod collect;
mod model;
mod pipeline;
mod report;
mod scorecards;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::collect::openfda::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, OpenFdaClient, OpenFdaConfig};
use crate::collect::overrides::OverridePolicy;
use crate::collect::{SegmentData, SourceError, fetch_openfda, load_dataset};
use crate::model::entity::Segment;
use crate::pipeline::ScoreError;
use crate::pipeline::compose::{ComposeInputs, compose_scorecard};
use crate::report::{ReportInput, write_reports};
use crate::scorecards::{Variant, select};

#[derive(Parser, Debug)]
#[command(name = "rivalcard", version)]
#[command(about = "Competitive scorecards for medical-imaging and pharma manufacturers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Collect cohort data, compose the selected scorecards, write reports
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Output directory for report artifacts
    #[arg(long)]
    out: PathBuf,

    /// Where cohort data comes from
    #[arg(long, value_enum, default_value = "appendix")]
    source: SourceArg,

    /// Dataset file, required with --source file
    #[arg(long)]
    input: Option<PathBuf>,

    /// Market segment to score
    #[arg(long, value_enum, default_value = "both")]
    segment: SegmentArg,

    /// Scorecard variant to compose
    #[arg(long, value_enum, default_value = "both")]
    variant: VariantArg,

    /// Company highlighted with a radar chart
    #[arg(long)]
    focus: Option<String>,

    /// Saturation threshold for live counts; fetched counts at or above
    /// it are treated as truncated by the openFDA page cap
    #[arg(long)]
    override_cap: Option<u64>,

    /// JSON file with best-estimate overrides for truncated counts
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// openFDA base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// HTTP timeout in seconds for live queries
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceArg {
    /// Frozen counts captured from openFDA
    Appendix,
    /// Live openFDA queries
    Live,
    /// User-supplied JSON dataset
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SegmentArg {
    Radiology,
    Pharma,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    Raw,
    Factor,
    Both,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Run(args) => run(&args),
    };
    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &RunArgs) -> Result<(), AppError> {
    let segments = selected_segments(args.segment);
    let variants = selected_variants(args.variant);

    let data = collect_segments(args, &segments)?;

    let mut cards = Vec::with_capacity(data.len() * variants.len());
    for segment_data in &data {
        for &variant in &variants {
            let def = select(segment_data.segment, variant);
            let card = compose_scorecard(&ComposeInputs {
                def,
                cohort: &segment_data.cohort,
                experts: &segment_data.experts,
            })?;
            tracing::info!(
                "composed scorecard {} over {} companies",
                def.id,
                card.rows.len()
            );
            cards.push(card);
        }
    }

    let input = ReportInput {
        scorecards: &cards,
        focus: args.focus.as_deref(),
        source_label: source_label(args),
        tool_name: "rivalcard".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &args.out)?;
    tracing::info!("wrote reports to {}", args.out.display());

    Ok(())
}

fn selected_segments(arg: SegmentArg) -> Vec<Segment> {
    match arg {
        SegmentArg::Radiology => vec![Segment::Radiology],
        SegmentArg::Pharma => vec![Segment::Pharma],
        SegmentArg::Both => vec![Segment::Radiology, Segment::Pharma],
    }
}

fn selected_variants(arg: VariantArg) -> Vec<Variant> {
    match arg {
        VariantArg::Raw => vec![Variant::Raw],
        VariantArg::Factor => vec![Variant::Factor],
        VariantArg::Both => vec![Variant::Raw, Variant::Factor],
    }
}

fn build_policy(args: &RunArgs) -> Result<OverridePolicy, SourceError> {
    let mut policy = match &args.overrides {
        Some(path) => OverridePolicy::from_path(path)?,
        None => OverridePolicy::openfda_v1(),
    };
    if let Some(cap) = args.override_cap {
        policy.set_saturation(cap);
    }
    Ok(policy)
}

fn collect_segments(
    args: &RunArgs,
    segments: &[Segment],
) -> Result<Vec<SegmentData>, SourceError> {
    match args.source {
        SourceArg::Appendix => Ok(segments
            .iter()
            .map(|&segment| collect::appendix::appendix(segment))
            .collect()),
        SourceArg::Live => {
            let policy = build_policy(args)?;
            let client = OpenFdaClient::new(OpenFdaConfig {
                base_url: args.base_url.clone(),
                timeout: Duration::from_secs(args.timeout_secs),
                ..OpenFdaConfig::default()
            })?;
            Ok(segments
                .iter()
                .map(|&segment| fetch_openfda(&client, &policy, segment))
                .collect())
        }
        SourceArg::File => {
            let path = args.input.as_ref().ok_or_else(|| {
                SourceError::MissingInput("--source file requires --input <dataset.json>".to_string())
            })?;
            let data = load_dataset(path)?;
            if !segments.contains(&data.segment) {
                return Err(SourceError::InvalidInput(format!(
                    "dataset segment {} is excluded by --segment",
                    data.segment.label()
                )));
            }
            Ok(vec![data])
        }
    }
}

fn source_label(args: &RunArgs) -> String {
    match args.source {
        SourceArg::Appendix => "appendix".to_string(),
        SourceArg::Live => format!("openFDA ({})", args.base_url),
        SourceArg::File => match &args.input {
            Some(path) => format!("file:{}", path.display()),
            None => "file".to_string(),
        },
    }
}
