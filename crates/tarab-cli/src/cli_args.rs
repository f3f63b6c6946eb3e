//! CLI argument definitions for the Tarab command-line interface.
//!
//! All `#[derive(Parser)]` types live here, keeping `main.rs` focused on
//! dispatch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tarab_spec::OutputFormat;

/// Default directory for generated songs.
pub(crate) const DEFAULT_OUT_DIR: &str = "generated_songs";

/// Tarab - procedural songs in Arabic maqam scales
#[derive(Parser)]
#[command(name = "tarab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Log pipeline stages to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate one song
    Generate {
        #[command(flatten)]
        request: RequestArgs,

        /// Directory the song is written to
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Seed for a reproducible melody
        #[arg(long)]
        seed: Option<u64>,

        /// Output container (mp3 needs ffmpeg)
        #[arg(short, long, default_value = "mp3")]
        format: OutputFormat,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate every request in a JSON array file, in parallel
    Batch {
        /// Path to the JSON request file
        #[arg(short, long)]
        requests: PathBuf,

        /// Directory for requests that do not name one
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Worker threads (default: one per core)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the composition brief of a request without generating audio
    Describe {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// List maqam scales, rhythm patterns and emotion profiles
    Tables {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check ffmpeg and output directory permissions
    Doctor {
        /// Directory to check for write access
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,
    },
}

/// Musical parameters shared by `generate` and `describe`.
#[derive(Args, Debug, Clone)]
pub(crate) struct RequestArgs {
    /// Song title (default: first lyric line)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Lyrics text
    #[arg(short, long, conflicts_with = "lyrics_file")]
    pub lyrics: Option<String>,

    /// File containing the lyrics
    #[arg(long)]
    pub lyrics_file: Option<PathBuf>,

    /// Maqam (hijaz, bayati, saba, rast, kurd, nahawand, ajam, sikah)
    #[arg(short, long, default_value = "hijaz")]
    pub maqam: String,

    /// Rhythm style (classical, folk, modern, traditional)
    #[arg(short, long, default_value = "modern")]
    pub style: String,

    /// Emotion (happy, sad, romantic, dramatic, melancholic, energetic, peaceful)
    #[arg(short, long, default_value = "happy")]
    pub emotion: String,

    /// Regional tradition (recorded, not used by synthesis)
    #[arg(long, default_value = "mixed")]
    pub region: String,

    /// Tempo in BPM
    #[arg(long, default_value_t = 120, allow_negative_numbers = true)]
    pub tempo: i64,
}
