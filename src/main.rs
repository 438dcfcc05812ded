use anyhow::Result;
use clap::Parser;
use jadud_eq::cli::{Cli, OutputFormat};
use jadud_eq::config::EqConfig;
use jadud_eq::ingest::CsvRowSource;
use jadud_eq::pipeline::{self, AssignmentScores, CategoryReport, Pipeline};
use jadud_eq::report::{format_score, CsvReport, JsonReport, ScoreMatrix};
use jadud_eq::ErrorCategory;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
///
/// `--debug` forces TRACE; otherwise `RUST_LOG` decides (nothing by default).
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the effective configuration: file (or defaults), then CLI overrides
fn load_config(args: &Cli) -> Result<EqConfig> {
    let mut config = match &args.config {
        Some(path) => EqConfig::from_toml(path)?,
        None => EqConfig::default(),
    };

    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(dir) = &args.results_dir {
        config.results_dir = dir.clone();
    }
    if !args.assignments.is_empty() {
        config.assignments = args.assignments.clone();
    }
    if !args.categories.is_empty() {
        config.categories = args.categories.clone();
    }
    if let Some(encoding) = args.error_encoding {
        config.error_encoding = encoding;
    }
    if let Some(delimiter) = &args.delimiter {
        config.delimiter = delimiter.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Print `student_id score` lines, with pair detail when available
fn print_text(result: &AssignmentScores) {
    match &result.breakdown {
        Some(breakdown) => {
            for entry in breakdown {
                let pairs: Vec<String> =
                    entry.pair_scores.iter().map(|s| format_score(*s)).collect();
                println!(
                    "{} {} ({} events; pairs: [{}])",
                    entry.student_id,
                    format_score(entry.eq),
                    entry.events,
                    pairs.join(", ")
                );
            }
        }
        None => {
            for (student, score) in &result.scores {
                println!("{} {}", student, format_score(*score));
            }
        }
    }
}

/// Score one pair of log files given on the command line
fn run_single(args: &Cli, events: &Path, errors: &Path) -> Result<()> {
    let category = match args.categories.as_slice() {
        [] => ErrorCategory::CompilerErrors,
        [one] => *one,
        _ => anyhow::bail!("Single-file mode takes at most one --category"),
    };
    if args.assignments.len() > 1 {
        anyhow::bail!("Single-file mode takes at most one --assignment");
    }
    if args.data_dir.is_some() || args.results_dir.is_some() {
        anyhow::bail!("--data-dir and --results-dir only apply to --batch");
    }

    let config = load_config(args)?;
    let delimiter = config.delimiter_byte()?;
    let assignment = match args.assignments.first() {
        Some(a) => a.clone(),
        None => events
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "events".to_string()),
    };

    let error_source = CsvRowSource::open(errors, delimiter, config.error_encoding)?;
    let event_source = CsvRowSource::open(events, delimiter, config.event_encoding)?;
    let result = pipeline::score_assignment(
        &assignment,
        category,
        error_source,
        event_source,
        args.explain,
    )?;

    match args.format {
        OutputFormat::Text => print_text(&result),
        OutputFormat::Json => {
            let mut report = JsonReport::new(category);
            report.add_assignment(result.to_json());
            println!("{}", report.to_json()?);
        }
        OutputFormat::Csv => {
            let mut matrix = ScoreMatrix::new();
            matrix.add_assignment(&assignment, &result.scores);
            print!("{}", CsvReport::new(&matrix).to_csv()?);
        }
    }

    Ok(())
}

/// Score every configured assignment and category, writing report files
fn run_batch(args: &Cli) -> Result<()> {
    let pipeline = Pipeline::new(load_config(args)?)?;
    let mut reports: Vec<CategoryReport> = Vec::new();

    for category in pipeline.config().categories.clone() {
        let report = pipeline.run_category(category, args.explain)?;
        let written = pipeline.write_reports(&report)?;

        if args.format == OutputFormat::Text {
            println!(
                "{}: {} students, {} assignments",
                category,
                report.matrix.student_count(),
                report.matrix.assignments().len()
            );
            for path in &written {
                println!("  wrote {}", path.display());
            }
        }
        reports.push(report);
    }

    match args.format {
        OutputFormat::Text => {}
        OutputFormat::Json => {
            let docs: Vec<JsonReport> = reports.iter().map(CategoryReport::to_json).collect();
            println!("{}", serde_json::to_string_pretty(&docs)?);
        }
        OutputFormat::Csv => {
            for report in &reports {
                print!("{}", CsvReport::new(&report.matrix).to_csv()?);
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    match (args.batch, &args.events, &args.errors) {
        (true, None, None) => run_batch(&args),
        (true, _, _) => {
            anyhow::bail!("Cannot combine --batch with --events/--errors. Choose one mode.");
        }
        (false, Some(events), Some(errors)) => run_single(&args, events, errors),
        (false, _, _) => {
            anyhow::bail!(
                "Must specify --events FILE and --errors FILE, or --batch. Usage: jadud-eq --events E.csv --errors R.csv"
            );
        }
    }
}
