use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use uiforge::config::Config;
use uiforge::llm::create_backend;
use uiforge::pipeline::prompt::Theme;
use uiforge::pipeline::{GenerationOptions, UiGenerator};

#[derive(Parser)]
#[command(name = "uiforge", version)]
#[command(about = "Generate a UI source file from an app description", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate app/GeneratedUI.tsx for an app idea
    Generate {
        /// Free-text description of the app to generate
        idea: String,

        /// Project root (defaults to current directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Visual theme
        #[arg(long, value_enum, default_value_t = Theme::Modern)]
        theme: Theme,

        /// Feature to request of the model (repeatable)
        #[arg(long = "feature")]
        features: Vec<String>,

        /// Path to config file (defaults to ~/.config/uiforge/config.toml or ./uiforge.toml)
        #[arg(long)]
        config: Option<String>,

        /// Use the mock backend instead of the API
        #[arg(long)]
        dry_run: bool,

        /// Validate the artifact after writing it
        #[arg(long)]
        validate: bool,
    },

    /// Check an existing artifact for the required markers
    Validate {
        /// Path to the artifact (defaults to ./app/GeneratedUI.tsx)
        #[arg(default_value = "app/GeneratedUI.tsx")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uiforge=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            idea,
            root,
            theme,
            features,
            config,
            dry_run,
            validate,
        } => {
            let config = Config::load_with_path(config)?;
            let mut generator = UiGenerator::new(root, &config)?;
            if dry_run {
                generator =
                    generator.with_backend(create_backend(&config.llm, String::new(), true)?);
            }

            let options = GenerationOptions {
                app_idea: idea,
                theme,
                features,
                api_key: None,
            };

            let path = generator.generate_ui(&options).await?;
            println!("{}", path.display());

            if validate {
                let report = generator.validate_generated_ui(&path);
                report_outcome(&report)?;
            }
        }

        Commands::Validate { path } => {
            let report = uiforge::validator::validate_artifact(&path);
            report_outcome(&report)?;
        }
    }

    Ok(())
}

fn report_outcome(report: &uiforge::validator::ValidationReport) -> Result<()> {
    if report.passed {
        println!("validation: pass");
        Ok(())
    } else {
        println!("validation: fail (missing: {})", report.missing.join(", "));
        std::process::exit(1);
    }
}
