use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vsm_search::config::StopWordSource;
use vsm_search::{Config, SearchIndex, StemmerKind, format_matrix};

#[derive(Parser)]
#[command(name = "vsm", about = "Vector space model search over a document directory")]
struct Args {
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
    #[arg(long, conflicts_with = "no_stop_words")]
    stop_words: Option<PathBuf>,

    /// Keep stop words
    #[arg(long)]
    no_stop_words: bool,

    #[arg(long, value_enum)]
    stemmer: Option<StemmerKind>,

    /// Maximum number of search results
    #[arg(short, long)]
    limit: Option<usize>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every document's processing stages and the vocabulary
    Index,
    /// Rank the documents against a query
    Search { query: String },
    /// Show the vocabulary and the term counts of every document
    Vocabulary,
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
        if self.no_stop_words {
            config.stop_words = StopWordSource::Disabled;
        }
        if let Some(stemmer) = self.stemmer {
            config.stemmer = stemmer;
        }
        if self.limit.is_some() {
            config.limit = self.limit;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vsm_search=info,vsm=info")),
        )
        .init();

    let args = Args::parse();
    let config = args.config()?;
    let index = config
        .load_index()
        .with_context(|| format!("cannot index {}", config.corpus_dir.display()))?;

    match &args.command {
        Command::Index => print_index(&index, args.json)?,
        Command::Search { query } => print_search(&index, query, config.limit, args.json)?,
        Command::Vocabulary => print_vocabulary(&index, args.json)?,
    }
    Ok(())
}

fn print_index(index: &SearchIndex, json: bool) -> anyhow::Result<()> {
    if json {
        let documents: Vec<_> = index
            .documents()
            .iter()
            .map(|doc| {
                serde_json::json!({
                    "document": doc,
                    "word_counts": doc.word_count_table(),
                })
            })
            .collect();
        let out = serde_json::json!({
            "documents": documents,
            "vocabulary": index.vocabulary(),
            "skipped": index.skipped(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for doc in index.documents() {
        println!("File: {}", doc.name());
        println!("Original content: {}", doc.content());
        println!("After case folding: {}", doc.lower());
        println!("After cleaning: {}", doc.cleaned());
        println!("After tokenizing: {:?}", doc.tokens());
        println!("After stemming: {:?}", doc.stemmed());
        println!("Total words: {}", doc.word_count());
        println!("Word count table:");
        let rows = doc
            .word_count_table()
            .into_iter()
            .map(|row| [row.word, row.count.to_string()]);
        print!("{}", format_matrix(Some(&["Word", "Count"][..]), rows));
        println!();
    }
    println!("Unique words: {}", index.vocabulary().terms().join(" "));
    for skipped in index.skipped() {
        println!("Skipped {}: {}", skipped.name, skipped.reason);
    }
    Ok(())
}

fn print_search(index: &SearchIndex, query: &str, limit: Option<usize>, json: bool) -> anyhow::Result<()> {
    let hits = match limit {
        Some(limit) => index.search_top(query, limit),
        None => index.search(query),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else {
        for hit in &hits {
            println!("{}\t{:.4}", hit.name, hit.score);
        }
    }
    Ok(())
}

fn print_vocabulary(index: &SearchIndex, json: bool) -> anyhow::Result<()> {
    if json {
        let vectors: Vec<_> = index
            .documents()
            .iter()
            .zip(index.matrix().columns())
            .map(|(doc, vector)| serde_json::json!({ "name": doc.name(), "vector": vector }))
            .collect();
        let out = serde_json::json!({ "vocabulary": index.vocabulary(), "vectors": vectors });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let header: Vec<&str> = std::iter::once("document")
        .chain(index.vocabulary().terms().iter().map(String::as_str))
        .collect();
    let rows = index.documents().iter().zip(index.matrix().columns()).map(|(doc, vector)| {
        std::iter::once(doc.name().to_string())
            .chain(vector.as_slice().iter().map(u32::to_string))
            .collect::<Vec<_>>()
    });
    print!("{}", format_matrix(Some(header.as_slice()), rows));
    Ok(())
}
