mod collector;
mod config;
mod diff;
mod extract;
mod language;
mod narrator;
mod normalize;
mod playlist;
mod report;
mod suggest;
mod track_order;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use config::Config;
use suggest::types::FolderSuggestion;
use suggest::{build_folder_suggestion, SuggestOptions};

#[derive(Parser, Debug)]
#[command(
    name = "tag-advisor",
    version,
    about = "Suggest metadata corrections for audiobook folders without touching the files"
)]
struct Cli {
    /// Folders (or library roots) to analyze
    #[arg(required_unless_present = "init_config")]
    paths: Vec<PathBuf>,

    /// Also write _tags_report.csv with one row per changed field
    #[arg(long)]
    csv: bool,

    /// Review only; do not write _tags_suggestions.json
    #[arg(long)]
    no_save: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.init_config {
        Config::default().save()?;
        info!("Wrote default config to {}", Config::path()?.display());
        return Ok(());
    }

    let config = Config::load()?;
    let options = SuggestOptions {
        fallback_genre: config.default_genre.clone(),
    };
    let write_csv = cli.csv || config.write_report_csv;

    let folders = collector::discover_folders(&cli.paths, &config.audio_extensions);
    if folders.is_empty() {
        anyhow::bail!("No audio files found under the given paths");
    }
    info!("Analyzing {} folder(s)", folders.len());

    let progress = (folders.len() > 1).then(|| {
        let bar = ProgressBar::new(folders.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{pos}/{len} [{bar:30}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    });

    // Folders share no state, so they can be processed in parallel; reviews
    // are printed afterwards to keep the console output per-folder.
    let results: Vec<(PathBuf, Result<FolderSuggestion>)> = folders
        .par_iter()
        .map(|(folder, files)| {
            let outcome = process_folder(folder, files, &options, write_csv, !cli.no_save);
            if let Some(bar) = &progress {
                bar.inc(1);
            }
            (folder.clone(), outcome)
        })
        .collect();

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    let total = results.len();
    let mut processed = 0usize;
    for (folder, outcome) in results {
        match outcome {
            Ok(suggestion) => {
                report::print_review(&suggestion);
                processed += 1;
            }
            Err(e) => error!("{}: {e:#}", folder.display()),
        }
    }

    if processed == 0 {
        anyhow::bail!("All {total} folder(s) failed");
    }
    info!("Done: {processed}/{total} folder(s)");
    Ok(())
}

/// Gather records and ordering hints for one folder, run the engine and
/// persist the outputs.
fn process_folder(
    folder: &Path,
    files: &[PathBuf],
    options: &SuggestOptions,
    write_csv: bool,
    save: bool,
) -> Result<FolderSuggestion> {
    let mut records = Vec::with_capacity(files.len());
    for file in files {
        match extract::read_tag_record(file) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping {}: {e:#}", file.display()),
        }
    }
    if records.is_empty() {
        anyhow::bail!("no readable audio files");
    }

    let playlist = match playlist::read_playlist_order(folder) {
        Ok(order) => order,
        Err(e) => {
            warn!("Ignoring playlist in {}: {e:#}", folder.display());
            None
        }
    };

    let suggestion = build_folder_suggestion(
        &folder.to_string_lossy(),
        &records,
        playlist.as_deref(),
        options,
    );

    if write_csv {
        report::save_report_csv(folder, &suggestion)?;
    }

    let document = report::SuggestionDocument::new(suggestion);
    if save {
        report::save_suggestions(folder, &document)?;
    }
    Ok(document.suggestion)
}
