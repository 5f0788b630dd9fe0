use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vsm_search::config::StopWordSource;
use vsm_search::{Config, StemmerKind};
use vsm_search_backend::{AppState, api};

const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Parser)]
#[command(name = "vsm-server", about = "HTTP API for vector space model search")]
struct Args {
    /// Address to listen on
    #[arg(short, long, default_value = DEFAULT_BIND)]
    bind: String,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of .txt, .pdf and .docx files
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Two-column "surface stem" dictionary file
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Stop-word file, one word per line (default: bundled Indonesian list)
    #[arg(long)]
    stop_words: Option<PathBuf>,

    #[arg(long, value_enum)]
    stemmer: Option<StemmerKind>,
}

impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(dir) = &self.dir {
            config.corpus_dir = dir.clone();
        }
        if let Some(dictionary) = &self.dictionary {
            config.dictionary = Some(dictionary.clone());
        }
        if let Some(path) = &self.stop_words {
            config.stop_words = StopWordSource::File(path.clone());
        }
        if let Some(stemmer) = self.stemmer {
            config.stemmer = stemmer;
        }
        Ok(config)
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vsm_search=info,vsm_search_backend=info,vsm_server=info")),
        )
        .init();

    let args = Args::parse();
    let config = args.config()?;
    let corpus_dir = config.corpus_dir.clone();
    let state = AppState::load(config).with_context(|| format!("cannot index {}", corpus_dir.display()))?;
    let stats = state.snapshot().stats();
    tracing::info!(
        documents = stats.document_count,
        vocabulary = stats.vocabulary_size,
        skipped = stats.skipped,
        "index ready"
    );

    let data = web::Data::new(state);
    tracing::info!(bind = %args.bind, "starting HTTP server");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();
        App::new().wrap(cors).app_data(data.clone()).configure(api::configure)
    })
    .bind(&args.bind)?
    .run()
    .await?;
    Ok(())
}
