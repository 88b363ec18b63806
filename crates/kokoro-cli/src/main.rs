use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eyre::Result;
use kokoro_cli::config::{self, KokoroConfig, POPULATION_ENV};
use kokoro_cli::overview::build_overview;
use kokoro_insights::{Period, search_summaries};
use kokoro_synth::PatientCache;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kokoro")]
#[command(version)]
#[command(about = "Synthetic depression-care patient records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: <config dir>/kokoro/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List patient summaries
    List {
        /// Filter by id, name, age group or gender
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Print one full patient record. Unknown ids show the first patient.
    Show {
        /// Patient id, e.g. P001 (default: the configured patient)
        id: Option<String>,
    },

    /// Print the dashboard views for one patient
    Overview {
        /// Patient id, e.g. P001 (default: the configured patient)
        id: Option<String>,

        /// Timeline window: 3m, 6m or all
        #[arg(short, long, default_value = "all")]
        period: Period,

        /// Outcome scenario for the prognosis series
        #[arg(short, long, default_value = "current")]
        scenario: String,
    },

    /// Write the whole population as JSON
    Export {
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config
    Show,
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

fn load_effective_config(path: &Path) -> Result<KokoroConfig> {
    let mut config = config::load_or_default(path)?;
    let env_value = std::env::var(POPULATION_ENV).ok();
    config.apply_population_override(env_value.as_deref())?;
    Ok(config)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.json);

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                config::save_config(&config_path, &KokoroConfig::default())
            }
            ConfigAction::Show => print_json(&load_effective_config(&config_path)?),
        };
    }

    let config = load_effective_config(&config_path)?;
    let cache = PatientCache::with_size(config.population_size)?;

    match cli.command {
        Commands::List { query } => {
            let summaries = cache.patient_summaries();
            let matches = search_summaries(&summaries, query.as_deref().unwrap_or(""));
            print_json(&matches)?;
        }
        Commands::Show { id } => {
            let id = id.unwrap_or_else(|| config.default_patient.clone());
            print_json(cache.select(&id))?;
        }
        Commands::Overview {
            id,
            period,
            scenario,
        } => {
            let id = id.unwrap_or_else(|| config.default_patient.clone());
            let record = cache.select(&id);
            let overview =
                build_overview(record, period, config.reference_date_or_today(), &scenario)?;
            print_json(&overview)?;
        }
        Commands::Export { out } => {
            let records = cache.all_patients();
            match out {
                Some(path) => {
                    let json = serde_json::to_string_pretty(records)?;
                    std::fs::write(&path, json)?;
                    tracing::info!(path = %path.display(), count = records.len(), "population exported");
                }
                None => print_json(records)?,
            }
        }
        Commands::Config { .. } => {}
    }

    Ok(())
}
