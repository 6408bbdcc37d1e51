//! Olelo - Main entrypoint.
//!
//! Loads configuration, initializes logging, opens the dictionary file, runs
//! one dictionary command and writes the file back when the command changed
//! the dictionary.

use clap::{Parser, Subcommand};
use olelo_lib::config::{self, ConfigLoader, LogConfig, OleloConfig, ENV_PREFIX};
use olelo_lib::data_structures::OleloTrie;
use olelo_lib::error::{
    set_error_reporter, GlobalErrorReporter, OleloError, OleloResult, TracingErrorReporter,
};
use olelo_lib::report::{self, OutputFormat};
use olelo_lib::storage::{self, ExportMode};
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command line arguments for Olelo.
#[derive(Parser, Debug)]
#[clap(name = "olelo", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Dictionary file to operate on (overrides storage.path)
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Add a word with one of its meanings
    Add { word: String, meaning: String },

    /// List every word starting with a prefix
    Search { prefix: String },

    /// Show all meanings of a word
    Meaning { word: String },

    /// Delete a word and its meanings
    Delete { word: String },

    /// Replace the primary meaning of a word
    Edit { word: String, meaning: String },

    /// List every word with its meanings
    List {
        /// Output format
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Merge a tab-separated file into the dictionary
    Import {
        /// File to read
        input: PathBuf,
    },

    /// Write the dictionary to a tab-separated file
    Export {
        /// File to write
        output: PathBuf,

        /// Write only the first meaning of each word
        #[clap(long)]
        primary_only: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. `RUST_LOG` overrides the configured level.
fn init_logging(log: &LogConfig) -> OleloResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| OleloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    // Generating the defaults must work even when the current config is broken
    if let Command::GenConfig { output } = &args.command {
        if let Err(e) = init_logging(&LogConfig::default()) {
            eprintln!("{e}");
            process::exit(1);
        }
        if let Err(e) = generate_config(output) {
            error!("{}", e);
            process::exit(1);
        }
        return;
    }

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = loader.load();

    let log = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log) {
        eprintln!("{e}");
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    config::init_global_config(config);
    let global = config::get_global_config();

    if let Err(e) = run(args.command, args.dictionary, global.get()) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(command: Command, dictionary: Option<PathBuf>, config: &OleloConfig) -> OleloResult<()> {
    match command {
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => generate_config(&output),
        command => {
            let path = dictionary.unwrap_or_else(|| config.storage.path.clone());
            let (mut trie, _) = storage::load_dictionary(
                &path,
                (&config.dictionary).into(),
                &GlobalErrorReporter,
            )?;

            if execute(command, &mut trie, config)? {
                storage::save_dictionary(&trie, &path, config.storage.export_mode())?;
            }
            Ok(())
        }
    }
}

/// Writes the default configuration as TOML to `output`.
fn generate_config(output: &Path) -> OleloResult<()> {
    info!("Generating default configuration");
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let toml = toml::to_string_pretty(&OleloConfig::default())
        .map_err(|e| OleloError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;
    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Runs one dictionary command. Returns whether the dictionary changed.
fn execute(command: Command, trie: &mut OleloTrie, config: &OleloConfig) -> OleloResult<bool> {
    let out = stdout().lock();
    match command {
        Command::Add { word, meaning } => {
            let added = trie.add(&word, &meaning)?;
            if added {
                info!(word = %word, "Meaning added");
            } else {
                info!(word = %word, "Meaning already present");
            }
            Ok(added)
        }
        Command::Search { prefix } => {
            report::render_lines(trie.search_word(&prefix)?, out)?;
            Ok(false)
        }
        Command::Meaning { word } => {
            report::render_lines(trie.search_meaning_word(&word)?, out)?;
            Ok(false)
        }
        Command::Delete { word } => {
            trie.delete_word(&word)?;
            info!(word = %word, "Word deleted");
            Ok(true)
        }
        Command::Edit { word, meaning } => {
            trie.change_word(&word, &meaning)?;
            info!(word = %word, "Meaning changed");
            Ok(true)
        }
        Command::List { format } => {
            report::render(trie.entries(), format, out)?;
            Ok(false)
        }
        Command::Import { input } => {
            let summary = storage::import_file(trie, &input, &GlobalErrorReporter)?;
            Ok(summary.added > 0)
        }
        Command::Export {
            output,
            primary_only,
        } => {
            let mode = if primary_only {
                ExportMode::PrimaryMeaning
            } else {
                config.storage.export_mode()
            };
            storage::save_dictionary(trie, &output, mode)?;
            Ok(false)
        }
        Command::Validate | Command::GenConfig { .. } => Ok(false),
    }
}
