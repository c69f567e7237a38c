//! PageRank estimator binary.
//!
//! Usage:
//!   cargo run --release --bin pagerank -- <CORPUS> [OPTIONS]
//!
//! Crawls the HTML pages in `<CORPUS>`, then prints the ranks from both the
//! sampling and the iterative estimator.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use solver_poc_ai::rank::{
    crawl, iterate_pagerank_from, sample_pagerank_with_callback, RankConfig, RankError,
    RankReport,
};

#[derive(Parser)]
#[command(name = "pagerank")]
#[command(version, about = "Estimate PageRank for a directory of HTML pages", long_about = None)]
struct Cli {
    /// Directory containing the corpus pages
    corpus: PathBuf,

    /// Configuration JSON file (flags below override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Damping factor
    #[arg(short, long)]
    damping: Option<f64>,

    /// Number of samples for the sampling estimator
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Random seed for reproducible sampling
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also write the results as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Show a progress bar while sampling
    #[arg(long)]
    progress: bool,
}

fn load_config(cli: &Cli) -> Result<RankConfig, RankError> {
    let mut config = match &cli.config {
        Some(path) => RankConfig::from_json_file(path)?,
        None => RankConfig::default(),
    };

    if let Some(damping) = cli.damping {
        config = config.with_damping(damping);
    }
    if let Some(samples) = cli.samples {
        config = config.with_samples(samples);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    config.validate()?;
    Ok(config)
}

fn progress_bar(total: usize) -> ProgressBar {
    let bar = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} samples ({elapsed})") {
        bar.set_style(style);
    }
    bar
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli).context("invalid configuration")?;

    let start = Instant::now();
    let corpus = crawl(&cli.corpus)
        .with_context(|| format!("failed to build corpus from {}", cli.corpus.display()))?;

    let total_steps = config.samples.saturating_sub(1);
    let bar = cli.progress.then(|| progress_bar(total_steps));
    let interval = (total_steps / 100).max(1);

    let mut rng = config.rng();
    let sampled = sample_pagerank_with_callback(
        &corpus,
        config.damping,
        config.samples,
        &mut rng,
        interval,
        |progress| {
            if let Some(bar) = &bar {
                bar.set_position(progress.steps as u64);
            }
        },
    )
    .context("sampling failed")?;
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    let convergence =
        iterate_pagerank_from(&corpus, &config, None).context("iteration failed")?;
    if !convergence.converged {
        eprintln!(
            "warning: iteration stopped after {} passes (last change {:.6})",
            convergence.iterations, convergence.max_delta
        );
    }

    let report = RankReport {
        pages: corpus.len(),
        damping: config.damping,
        samples: config.samples,
        iterations: convergence.iterations,
        sampled,
        iterated: convergence.ranks,
    };

    print!("{}", report);

    if let Some(path) = &cli.json {
        report
            .save_json(path)
            .with_context(|| format!("failed to save {}", path.display()))?;
        println!("Saved JSON: {}", path.display());
    }

    eprintln!(
        "{} pages, {} iterations, {:.2}s",
        report.pages,
        report.iterations,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
