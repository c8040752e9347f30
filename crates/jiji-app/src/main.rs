use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use jiji_config::Config;

pub mod frequency;
pub mod logging;
pub mod pipeline;

#[derive(Parser)]
#[command(name = "jiji")]
#[command(about = "Build jiji bilingual dictionaries and their frequency tag lists")]
struct Args {
    /// Emit log lines as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the Japanese dictionary from a JMdict JSON export
    Jmdict {
        /// JMdict records (jmdict-simplified JSON)
        #[arg(long)]
        records: PathBuf,

        /// Directory holding the tag lists
        #[arg(long)]
        tags_dir: Option<PathBuf>,

        /// Output YAML file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Gloss language kept from the records
        #[arg(long, default_value = "eng")]
        gloss_lang: String,
    },
    /// Write French frequency tag lists from a Lexique TSV export
    Lexique {
        #[arg(long)]
        input: PathBuf,

        /// Directory holding `stopword.txt`, and receiving `freqNN.txt`
        #[arg(long, default_value = "tags")]
        tags_dir: PathBuf,
    },
    /// Write Japanese frequency tag lists from the BCCWJ frequency list
    Bccwj {
        #[arg(long)]
        input: PathBuf,

        /// Directory receiving `freqNN.txt`
        #[arg(long, default_value = "tags")]
        tags_dir: PathBuf,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("cannot load config {}", path.display())),
        None => Ok(Config::new()),
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    match args.command {
        Command::Jmdict {
            records,
            tags_dir,
            output,
            config,
            gloss_lang,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(dir) = tags_dir {
                config.tags.directory = dir;
            }
            if let Some(output) = output {
                config.output = output;
            }
            logging::init(args.log_json || config.log_json);

            let summary = pipeline::build_jmdict(&records, &gloss_lang, &config)?;
            tracing::info!(
                records = summary.records,
                entries = summary.entries,
                rejected = summary.rejected,
                skipped = summary.skipped,
                tag_files = summary.tag_files,
                warnings = summary.warnings,
                "Wrote {} entries to {}",
                summary.written,
                config.output.display()
            );
        }
        Command::Lexique { input, tags_dir } => {
            logging::init(args.log_json);
            let written = frequency::lexique_tags(&input, &tags_dir)?;
            tracing::info!("Wrote {} tag lists to {}", written.len(), tags_dir.display());
        }
        Command::Bccwj { input, tags_dir } => {
            logging::init(args.log_json);
            let written = frequency::bccwj_tags(&input, &tags_dir)?;
            tracing::info!("Wrote {} tag lists to {}", written.len(), tags_dir.display());
        }
    }

    Ok(())
}
