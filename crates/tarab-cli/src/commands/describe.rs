//! Describe command implementation
//!
//! Prints the composition brief and the resolved tables for a request.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use tarab_spec::{estimate_duration_seconds, validate_request, CompositionBrief, GenerationRequest};

/// Run the describe command
pub fn run(request: &GenerationRequest) -> Result<ExitCode> {
    println!("{}", CompositionBrief::new(request));

    let maqam = request.resolved_maqam();
    let style = request.resolved_style();
    let emotion = request.resolved_emotion();
    println!("{}", "Resolved:".bold());
    println!("  {} {} {:?}", "maqam".dimmed(), maqam, maqam.scale().ratios());
    println!(
        "  {} {} {}",
        "rhythm".dimmed(),
        style.name(),
        style.pattern().notation()
    );
    println!(
        "  {} {} (brightness {})",
        "emotion".dimmed(),
        emotion.name(),
        emotion.profile().brightness
    );
    println!(
        "  {} {} s",
        "duration".dimmed(),
        estimate_duration_seconds(&request.lyrics)
    );

    // Requests are described even when they would be rejected.
    let validation = validate_request(&GenerationRequest {
        output_directory: ".".into(),
        ..request.clone()
    });
    if !validation.is_ok() {
        println!("{} {}", "!!".yellow(), validation.summary());
    }

    Ok(ExitCode::SUCCESS)
}
