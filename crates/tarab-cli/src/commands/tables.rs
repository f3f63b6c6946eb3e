//! Tables command implementation
//!
//! Lists the maqam scales, rhythm patterns and emotion profiles.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tarab_spec::{Emotion, EmotionProfile, Maqam, MaqamScale, RhythmStyle};

#[derive(Debug, Serialize)]
struct TablesJson {
    maqams: Vec<MaqamEntry>,
    rhythms: Vec<RhythmEntry>,
    emotions: Vec<EmotionEntry>,
}

#[derive(Debug, Serialize)]
struct MaqamEntry {
    name: &'static str,
    #[serde(flatten)]
    scale: &'static MaqamScale,
}

#[derive(Debug, Serialize)]
struct RhythmEntry {
    name: &'static str,
    notation: String,
}

#[derive(Debug, Serialize)]
struct EmotionEntry {
    name: &'static str,
    #[serde(flatten)]
    profile: &'static EmotionProfile,
}

fn collect() -> TablesJson {
    TablesJson {
        maqams: Maqam::ALL
            .iter()
            .map(|m| MaqamEntry {
                name: m.name(),
                scale: m.scale(),
            })
            .collect(),
        rhythms: RhythmStyle::ALL
            .iter()
            .map(|s| RhythmEntry {
                name: s.name(),
                notation: s.pattern().notation(),
            })
            .collect(),
        emotions: Emotion::ALL
            .iter()
            .map(|e| EmotionEntry {
                name: e.name(),
                profile: e.profile(),
            })
            .collect(),
    }
}

/// Run the tables command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let tables = collect();
    if json_output {
        println!("{}", serde_json::to_string_pretty(&tables)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} (default {})", "Maqamat:".bold(), Maqam::DEFAULT);
    for entry in &tables.maqams {
        let ratios: Vec<String> = entry.scale.ratios().iter().map(|r| format!("{r:.3}")).collect();
        println!("  {:<10} {}", entry.name, ratios.join(" "));
    }
    println!();

    println!("{} (default {})", "Rhythms:".bold(), RhythmStyle::DEFAULT.name());
    for entry in &tables.rhythms {
        println!("  {:<12} {}", entry.name, entry.notation);
    }
    println!();

    println!("{} (default {})", "Emotions:".bold(), Emotion::DEFAULT.name());
    for entry in &tables.emotions {
        println!(
            "  {:<12} brightness {:.1}  complexity {:.1}",
            entry.name, entry.profile.brightness, entry.profile.rhythm_complexity
        );
    }

    Ok(ExitCode::SUCCESS)
}
