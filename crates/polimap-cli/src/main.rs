//! `polimap` — place a set of survey answers on the political map from the
//! command line.

mod answers;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use polimap_common::PolimapConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "polimap", version, about = "Locate survey answers on the political map")]
struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(long, short, global = true, env = "POLIMAP_CONFIG")]
    config: Option<PathBuf>,

    /// Override the model directory from the configuration
    #[arg(long, global = true)]
    model_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the questionnaire in model order
    Questions,
    /// Load and validate the model artifacts
    Check,
    /// Analyze one set of answers
    Analyze {
        /// JSON or YAML file mapping question id to answer
        #[arg(long, short)]
        answers: Option<PathBuf>,
        /// Individual answer, ID=VALUE (repeatable, overrides the file)
        #[arg(long = "set", short = 's', value_name = "ID=VALUE")]
        sets: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("polimap=info,warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = PolimapConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(dir) = cli.model_dir {
        config.model.dir = dir;
    }

    match cli.command {
        Command::Questions => {
            let questions = config.question_set().context("loading question set")?;
            print!(
                "{}",
                report::questions_report(&questions, config.responses.min, config.responses.max)
            );
        }
        Command::Check => {
            let model = load(&config).await?;
            print!("{}", report::model_summary(&model));
            info!("Model artifacts are consistent");
        }
        Command::Analyze { answers: answers_file, sets, json } => {
            let model = load(&config).await?;
            let responses = answers::collect_answers(answers_file.as_deref(), &sets)?;
            let analysis = model.analyze(&responses).context("analyzing answers")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print!("{}", report::analysis_report(model.axes(), &analysis));
            }
        }
    }

    Ok(())
}

async fn load(config: &PolimapConfig) -> anyhow::Result<polimap_engine::PoliticalModel> {
    polimap_artifacts::load_model(config).await.map_err(|e| {
        error!("Model artifacts rejected: {e}");
        anyhow::Error::new(e).context(format!("loading model from {}", config.model.dir.display()))
    })
}
