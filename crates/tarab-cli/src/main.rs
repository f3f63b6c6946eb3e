//! Tarab CLI - command-line interface for procedural maqam songs
//!
//! This binary generates songs, describes requests, lists the musical
//! tables and checks the local environment.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use tarab_cli::commands;
use tarab_cli::input::{resolve_lyrics, resolve_title};
use tarab_spec::GenerationRequest;

mod cli_args;

use cli_args::{Cli, Commands, RequestArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();
    tarab_cli::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            request,
            out_dir,
            seed,
            format,
            json,
        } => build_request(&request, out_dir).and_then(|mut req| {
            req.seed = seed;
            req.format = format;
            commands::generate::run(&req, json)
        }),
        Commands::Batch {
            requests,
            out_dir,
            jobs,
            json,
        } => commands::batch::run(&requests, &out_dir, jobs, json),
        Commands::Describe { request } => build_request(&request, PathBuf::new())
            .and_then(|req| commands::describe::run(&req)),
        Commands::Tables { json } => commands::tables::run(json),
        Commands::Doctor { out_dir } => commands::doctor::run(&out_dir),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

fn build_request(args: &RequestArgs, out_dir: PathBuf) -> anyhow::Result<GenerationRequest> {
    let lyrics = resolve_lyrics(args.lyrics.as_deref(), args.lyrics_file.as_deref())?;
    let title = resolve_title(args.title.as_deref(), &lyrics, &mut rand::thread_rng());
    Ok(GenerationRequest::new(title, lyrics, out_dir)
        .maqam(&args.maqam)
        .style(&args.style)
        .emotion(&args.emotion)
        .region(&args.region)
        .tempo(args.tempo))
}
