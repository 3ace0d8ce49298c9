//! Veilmark CLI - Invisible Watermarking & Document Similarity
//!
//! Command-line interface for watermarking documents and checking them
//! against a reference corpus.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use veilmark::{
    Config, Reference, Result, Scorer, SimilarityConfig, SimilarityType, VeilmarkError,
};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "veilmark")]
#[command(version)]
#[command(about = "Invisible watermarking and document similarity", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed a marker into a document
    Embed {
        /// Input document ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Marker text to hide (byte-per-character representable)
        #[arg(short, long)]
        marker: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract a marker from a document
    Extract {
        /// Input document ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Check whether a document carries an expected marker
    Verify {
        /// Input document ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// The marker the document is expected to carry
        #[arg(short, long)]
        marker: String,
    },

    /// Remove all invisible-alphabet characters from a document
    Strip {
        /// Input document ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score a document against a corpus of reference documents
    Check {
        /// Input document ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Directory of reference documents (.txt and .md files)
        #[arg(short, long)]
        corpus: PathBuf,

        /// Minimum similarity to report
        #[arg(short, long, default_value = "0.1")]
        threshold: f64,

        /// Similarity measure (jaccard, overlap)
        #[arg(short, long, default_value = "jaccard")]
        measure: String,

        /// Tokens per chunk
        #[arg(short = 'k', long, default_value = "5")]
        chunk_size: usize,

        /// Emit results as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print the canonical chunks of a document
    Chunks {
        /// Input document ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Tokens per chunk
        #[arg(short = 'k', long, default_value = "5")]
        chunk_size: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Embed {
            input,
            marker,
            output,
        } => embed_document(input, marker, output),

        Commands::Extract { input } => extract_marker(input),

        Commands::Verify { input, marker } => verify_marker(input, marker),

        Commands::Strip { input, output } => strip_document(input, output),

        Commands::Check {
            input,
            corpus,
            threshold,
            measure,
            chunk_size,
            json,
        } => check_document(input, corpus, threshold, measure, chunk_size, json),

        Commands::Chunks { input, chunk_size } => print_chunks(input, chunk_size),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Reads a document from a file, or from stdin when the path is "-".
fn read_document(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

/// Writes a document to a file, or to stdout when no path is given.
fn write_document(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            info!("wrote {}", path.display());
        }
        None => {
            io::stdout().write_all(text.as_bytes())?;
        }
    }
    Ok(())
}

fn embed_document(input: PathBuf, marker: String, output: Option<PathBuf>) -> Result<()> {
    let host = read_document(&input)?;
    let marked = veilmark::embed(&host, &marker)?;
    write_document(output.as_deref(), &marked)
}

fn extract_marker(input: PathBuf) -> Result<()> {
    let text = read_document(&input)?;

    match veilmark::extract(&text) {
        Some(marker) => println!("{marker}"),
        None => println!("no marker found"),
    }
    Ok(())
}

fn verify_marker(input: PathBuf, marker: String) -> Result<()> {
    let text = read_document(&input)?;

    if veilmark::verify(&text, &marker) {
        println!("valid: document carries the expected marker");
        Ok(())
    } else {
        println!("tampered: marker missing or different");
        std::process::exit(1);
    }
}

fn strip_document(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let text = read_document(&input)?;
    write_document(output.as_deref(), &veilmark::strip(&text))
}

fn check_document(
    input: PathBuf,
    corpus: PathBuf,
    threshold: f64,
    measure: String,
    chunk_size: usize,
    json: bool,
) -> Result<()> {
    let query = read_document(&input)?;
    let references = load_corpus(&corpus)?;

    let config = Config {
        similarity: SimilarityConfig {
            chunk_size,
            measure: measure.parse::<SimilarityType>()?,
            ..SimilarityConfig::default()
        },
        ..Config::default()
    };

    let results = Scorer::new(config).score(&query, &references);
    let reported: Vec<_> = results.into_iter().filter(|r| r.score > threshold).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reported)?);
        return Ok(());
    }

    if reported.is_empty() {
        println!("No matches above threshold {threshold}");
        return Ok(());
    }

    println!("{:<6}{:<8}document", "rank", "score");
    for (rank, result) in reported.iter().enumerate() {
        println!("{:<6}{:<8.3}{}", rank + 1, result.score, result.id);
        for chunk in &result.evidence {
            println!("      \"{chunk}\"");
        }
    }
    Ok(())
}

/// Loads every .txt/.md file in the corpus directory, in sorted path order
/// so runs are reproducible. The file stem becomes the document id.
fn load_corpus(corpus: &Path) -> Result<Vec<Reference>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(corpus)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("txt") | Some("md")
            )
        })
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(VeilmarkError::EmptyCorpus(corpus.to_path_buf()));
    }

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template")
            .progress_chars("█▓▒░  "),
    );
    pb.set_message("loading corpus");

    let mut references = Vec::with_capacity(paths.len());
    for path in paths {
        match fs::read_to_string(&path) {
            Ok(text) => {
                let id = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("unnamed")
                    .to_string();
                references.push(Reference::new(id, text));
            }
            Err(e) => warn!("skipping unreadable {}: {}", path.display(), e),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if references.is_empty() {
        return Err(VeilmarkError::EmptyCorpus(corpus.to_path_buf()));
    }

    info!("loaded {} reference document(s)", references.len());
    Ok(references)
}

fn print_chunks(input: PathBuf, chunk_size: usize) -> Result<()> {
    let text = read_document(&input)?;
    let chunks = veilmark::Chunker::default_config().chunks(&text, chunk_size);

    for chunk in chunks.iter() {
        println!("{chunk}");
    }
    info!("{} unique chunk(s)", chunks.len());
    Ok(())
}
