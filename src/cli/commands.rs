//! Command implementations for the HURDAT2 processor CLI
//!
//! Command execution, logging setup, progress reporting, and the final
//! summary block.

use std::time::Instant;

use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::app::services::hurdat_parser::{build_header_table, load_hurdat_file};
use crate::app::services::pipeline;
use crate::app::services::sampling::sample_storm_ids;
use crate::cli::args::{Args, Commands, ProcessArgs, SampleArgs};
use crate::config::Config;
use crate::error::Result;

/// Main command dispatcher.
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    debug!("Command line arguments: {:?}", args);

    match &args.command {
        Commands::Process(process_args) => run_process(process_args, args.quiet),
        Commands::Sample(sample_args) => run_sample(sample_args),
    }
}

/// Execute the full pipeline with progress reporting.
fn run_process(args: &ProcessArgs, quiet: bool) -> Result<()> {
    let start_time = Instant::now();

    let config = Config {
        input_path: args.input_path.clone(),
        output_dir: args.output_dir.clone(),
        basin_prefix: args.basin_prefix.clone(),
        min_year: args.min_year,
        ..Config::default()
    };

    if args.dry_run {
        config.validate()?;
        println!("{}", "Dry run - no output will be written".yellow().bold());
        println!("  Input:     {}", config.input_path.display());
        println!("  Output:    {}", config.full_tracks_path().display());
        println!("  Output:    {}", config.start_end_path().display());
        println!("  Year cutoff: >= {}", config.min_year);
        return Ok(());
    }

    let spinner = if quiet {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("spinner template is valid"),
        );
        pb.set_message(format!("Processing {}", config.input_path.display()));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    };

    let result = pipeline::run(&config);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let report = result?;
    info!("Pipeline finished in {:?}", start_time.elapsed());

    println!("{}", "Processing complete".green().bold());
    println!("  Storms parsed:         {}", report.storms_parsed);
    println!("  Track lines parsed:    {}", report.track_lines_parsed);
    println!("  Observations retained: {}", report.observations_cleaned);
    println!("  Track steps written:   {}", report.track_steps);
    println!("  Storm summaries:       {}", report.storm_summaries);
    println!("  Full tracks table:     {}", config.full_tracks_path().display());
    println!("  Start/end table:       {}", config.start_end_path().display());
    println!("  Elapsed:               {}", HumanDuration(start_time.elapsed()));

    Ok(())
}

/// Draw a reproducible storm selection and print it.
fn run_sample(args: &SampleArgs) -> Result<()> {
    let classified = load_hurdat_file(&args.input_path, &args.basin_prefix)?;
    let headers = build_header_table(&classified.header_lines)?;

    let ids: Vec<String> = headers.iter().map(|h| h.id.clone()).collect();
    let chosen = sample_storm_ids(&ids, args.count, args.seed)?;

    println!(
        "{} (seed {})",
        format!("Sampled {} of {} storms", chosen.len(), ids.len()).bold(),
        args.seed
    );
    for id in &chosen {
        let name = headers
            .iter()
            .find(|h| &h.id == id)
            .map(|h| h.name.as_str())
            .unwrap_or("?");
        println!("  {}  {}", id, name);
    }

    Ok(())
}

/// Initialize the tracing subscriber.
fn setup_logging(args: &Args) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hurdat_processor={}", args.log_level())));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
