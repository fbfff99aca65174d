//! Drei-Punkt-Bogen: Szenario-Wiedergabe auf der Kommandozeile.
//!
//! Spielt eine TOML-Schrittfolge gegen die In-Memory-Kollaborateure ab und
//! gibt pro Schritt den Anzeige-Zustand als JSON-Zeile aus.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use three_point_arch::replay;
use three_point_arch::ArchToolOptions;

#[derive(Parser)]
#[command(name = "three-point-arch")]
#[command(about = "Spielt ein Drei-Punkt-Bogen-Szenario ab", long_about = None)]
struct Cli {
    /// Szenario-Datei (TOML mit [[steps]])
    scenario: PathBuf,
    /// Werkzeug-Optionen (Standard: three_point_arch.toml neben der Binary)
    #[arg(long)]
    options: Option<PathBuf>,
    /// Wirksame Optionen in die Optionen-Datei zurückschreiben
    #[arg(long)]
    save_options: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Drei-Punkt-Bogen v{} startet...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("Wiedergabe fehlgeschlagen: {:#}", e);
        return Err(e);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let options_path = cli.options.unwrap_or_else(ArchToolOptions::config_path);
    let options = ArchToolOptions::load_from_file(&options_path);
    if cli.save_options {
        options.save_to_file(&options_path)?;
    }

    let scenario = replay::load_scenario(&cli.scenario)?;
    let report = replay::run(&scenario, options)?;

    for frame in &report.frames {
        println!("{}", serde_json::to_string(frame)?);
    }
    println!(
        "{}",
        serde_json::json!({
            "outcome": report.outcome,
            "mesh": report.mesh,
            "commands": report.commands.len(),
            "backend_calls": report.backend_calls.len(),
        })
    );

    log::info!("Szenario beendet: {:?}", report.outcome);
    Ok(())
}
