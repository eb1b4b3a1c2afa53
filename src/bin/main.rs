use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use relnotes::{ChangelogBuilder, GitOps, RelnotesConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relnotes")]
#[command(version, about = "changelog generator for git repository history", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// path to the repository (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// output format (json or human)
    #[arg(short, long, default_value = "human", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Json,
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// build the changelog from repository history and write it out
    Generate {
        /// path to the repository (optional, defaults to current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// override the configured output file name
        #[arg(short, long)]
        output: Option<String>,
    },

    /// render the changelog to stdout without writing anything
    Preview {
        /// path to the repository (optional, defaults to current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { path, output } => {
            let repo_path = path.as_ref().unwrap_or(&cli.path);
            handle_generate(repo_path, &cli.format, output)?;
        }
        Commands::Preview { path } => {
            let repo_path = path.as_ref().unwrap_or(&cli.path);
            handle_preview(repo_path)?;
        }
    }

    Ok(())
}

fn handle_generate(path: &PathBuf, format: &OutputFormat, output: Option<String>) -> Result<()> {
    let root = GitOps::detect_repository_root(path).context("failed to open git repository")?;

    let mut config = RelnotesConfig::load_or_default(&root).changelog;
    if let Some(name) = output {
        config = config.output_file_name(name);
    }

    let report = ChangelogBuilder::build_from_repository(&root, &config)
        .context("failed to generate changelog")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            report.display();
        }
    }

    Ok(())
}

fn handle_preview(path: &PathBuf) -> Result<()> {
    let root = GitOps::detect_repository_root(path).context("failed to open git repository")?;

    let config = RelnotesConfig::load_or_default(&root).changelog;
    let raw = GitOps::read_history_log(&root).context("failed to read repository history")?;
    let document =
        ChangelogBuilder::render_from_text(&raw, &config).context("failed to render changelog")?;

    print!("{}", document.render());

    Ok(())
}
