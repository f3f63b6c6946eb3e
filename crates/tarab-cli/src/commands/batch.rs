//! Batch command implementation
//!
//! Generates every request of a JSON file on a rayon thread pool.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;
use tarab_backend_audio::{generate, GeneratorConfig};
use tarab_spec::{output_filename, GenerationRequest, GenerationResult};
use tracing::info;

use super::generate::print_result;
use super::EXIT_GENERATION_ERROR;
use crate::input::load_batch;

#[derive(Debug, Serialize)]
struct BatchReport<'a> {
    total: usize,
    succeeded: usize,
    failed: usize,
    results: &'a [GenerationResult],
}

/// Run the batch command
///
/// # Returns
/// Exit code: 0 if every request succeeded, 1 for an unreadable or
/// conflicting request file, 2 if any generation failed
pub fn run(
    requests_path: &Path,
    out_dir: &Path,
    jobs: Option<usize>,
    json_output: bool,
) -> Result<ExitCode> {
    let requests = load_batch(requests_path, out_dir)?;
    check_unique_outputs(&requests)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.unwrap_or(0))
        .build()
        .context("failed to start worker pool")?;
    info!(
        requests = requests.len(),
        threads = pool.current_num_threads(),
        "batch"
    );

    let start = Instant::now();
    let config = GeneratorConfig::default();
    let results: Vec<GenerationResult> =
        pool.install(|| requests.par_iter().map(|r| generate(r, &config)).collect());

    let succeeded = results.iter().filter(|r| r.success).count();
    let failed = results.len() - succeeded;

    if json_output {
        let report = BatchReport {
            total: results.len(),
            succeeded,
            failed,
            results: &results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (request, result) in requests.iter().zip(&results) {
            println!("{} {}", "->".cyan(), request.title);
            print_result(result);
        }
        println!();
        println!(
            "{} {} succeeded, {} failed in {:.2}s",
            "Batch:".bold(),
            succeeded.to_string().green(),
            failed.to_string().red(),
            start.elapsed().as_secs_f64()
        );
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_GENERATION_ERROR)
    })
}

/// Fails if two requests would write the same file.
fn check_unique_outputs(requests: &[GenerationRequest]) -> Result<()> {
    let mut seen: HashMap<PathBuf, usize> = HashMap::new();
    for (index, request) in requests.iter().enumerate() {
        let path = request.output_directory.join(output_filename(
            &request.title,
            &request.maqam,
            &request.style,
            request.format,
        ));
        if let Some(first) = seen.insert(path.clone(), index) {
            bail!(
                "requests {} and {} both write {}; give them distinct titles",
                first,
                index,
                path.display()
            );
        }
    }
    Ok(())
}
