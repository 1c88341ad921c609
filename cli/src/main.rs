//! `elasthink` CLI: create/update index entries, search and suggest keywords
//! against the embedded set store.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use elasthink_core::types::{EngineConfig, Environment};
use elasthink_core::{Engine, RedbSetStore};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "elasthink")]
#[command(about = "Inverted index search for small document sets", long_about = None)]
struct Args {
    /// Directory holding `<env>.toml` and the stopword file
    #[arg(long, env = "ELASTHINK_CONFIG_DIR", default_value = "files/config")]
    config_dir: PathBuf,

    /// Environment (development / staging / production)
    #[arg(long, env = "ELASTHINK_ENV", default_value = "development")]
    env: String,

    /// Remove stopwords during indexing and searching, overriding the config
    #[arg(long)]
    swr: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default config for the selected environment
    InitConfig,
    #[command(flatten)]
    Index(IndexCommand),
}

#[derive(Subcommand)]
enum IndexCommand {
    /// Index a document name under a document ID
    Create {
        #[arg(long = "type")]
        document_type: String,
        #[arg(long = "id", allow_negative_numbers = true)]
        document_id: i64,
        #[arg(long = "name")]
        document_name: String,
    },
    /// Re-index a document from its old name to its new name
    Update {
        #[arg(long = "type")]
        document_type: String,
        #[arg(long = "id", allow_negative_numbers = true)]
        document_id: i64,
        #[arg(long)]
        old_name: String,
        #[arg(long)]
        new_name: String,
    },
    /// Rank documents by term overlap with the search term
    Search {
        #[arg(long = "type")]
        document_type: String,
        search_term: String,
    },
    /// List indexed keywords starting with a prefix
    Suggest {
        #[arg(long = "type")]
        document_type: String,
        prefix: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let env = Environment::from_name(&args.env);
    let config_path = EngineConfig::path(&args.config_dir, env);
    info!("Environment for elasthink: {env}");

    let command = match args.command {
        Command::InitConfig => {
            std::fs::create_dir_all(&args.config_dir)?;
            EngineConfig::default().save(&config_path)?;
            info!("Wrote default config to {}", config_path.display());
            return Ok(());
        }
        Command::Index(command) => command,
    };

    let mut config = EngineConfig::load(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    if args.swr {
        config.index.stopword_removal = true;
    }

    let problems = config.validate();
    if !problems.is_empty() {
        bail!("invalid config {}: {}", config_path.display(), problems.join("; "));
    }

    let settings = config.settings(&args.config_dir)?;
    debug!(
        types = settings.registry.len(),
        stopwords = settings.stopwords.len(),
        key_scheme = %settings.key_scheme,
        "engine settings loaded"
    );

    let store_config = config.store_config(&args.config_dir);
    let store = RedbSetStore::open(&store_config)
        .with_context(|| format!("failed to open {}", store_config.db_path().display()))?;
    let engine = Engine::new(store, settings);

    match command {
        IndexCommand::Create {
            document_type,
            document_id,
            document_name,
        } => {
            engine.create_index(document_id, &document_type, &document_name)?;
            info!("Indexed document {document_id}");
        }
        IndexCommand::Update {
            document_type,
            document_id,
            old_name,
            new_name,
        } => {
            engine.update_index(document_id, &document_type, &old_name, &new_name)?;
            info!("Re-indexed document {document_id}");
        }
        IndexCommand::Search {
            document_type,
            search_term,
        } => {
            let results = engine.search(&document_type, &search_term)?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        IndexCommand::Suggest {
            document_type,
            prefix,
        } => {
            let keywords = engine.suggest_keywords(&document_type, &prefix)?;
            println!("{}", serde_json::to_string_pretty(&keywords)?);
        }
    }

    Ok(())
}
