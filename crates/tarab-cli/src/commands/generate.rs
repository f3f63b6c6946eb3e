//! Generate command implementation
//!
//! Synthesizes one song and writes it to the output directory.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use tarab_backend_audio::{generate, GeneratorConfig};
use tarab_spec::{GenerationRequest, GenerationResult};

use super::exit_code_for;

/// Run the generate command
///
/// # Returns
/// Exit code: 0 success, 1 invalid request, 2 generation error
pub fn run(request: &GenerationRequest, json_output: bool) -> Result<ExitCode> {
    let config = GeneratorConfig::default();
    if json_output {
        let result = generate(request, &config);
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(exit_code_for(&result));
    }

    let start = Instant::now();
    println!("{} {}", "Generating:".cyan().bold(), request.title);
    println!(
        "  {} {}  {} {}  {} {}  {} {} BPM",
        "maqam".dimmed(),
        request.maqam,
        "style".dimmed(),
        request.style,
        "emotion".dimmed(),
        request.emotion,
        "tempo".dimmed(),
        request.tempo
    );

    let result = generate(request, &config);
    print_result(&result);
    println!("{} {:.2}s", "Elapsed:".dimmed(), start.elapsed().as_secs_f64());
    Ok(exit_code_for(&result))
}

/// Prints a human-readable summary of a result.
pub(crate) fn print_result(result: &GenerationResult) {
    if result.success {
        println!(
            "{} {}",
            "SUCCESS".green().bold(),
            result.file_path.as_deref().unwrap_or_default()
        );
        println!(
            "  {:.2} MB, {:.1} s",
            result.file_size_mb.unwrap_or_default(),
            result.duration_seconds.unwrap_or_default()
        );
        if let Some(hash) = &result.pcm_hash {
            println!("  {} {}", "pcm".dimmed(), hash);
        }
    } else {
        let code = result.error_code.as_deref().unwrap_or("?");
        println!(
            "{} [{}] {}",
            "FAILED".red().bold(),
            code,
            result.error.as_deref().unwrap_or("unknown error")
        );
    }
}
