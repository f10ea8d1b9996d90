//! `lostfoundctl`: run profile screen activations and sign-outs against the
//! configured backends, or against in-process demo data with `--demo`.

mod backend;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lostfound_config::{ConfigLoad, ConfigLoader, constants::ENV_CONFIG_PATH};
use lostfound_core::{Activation, SignOutOutcome};
use lostfound_model::{Route, UserId};
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "lostfoundctl",
    version,
    about = "Lostfound profile screen driver"
)]
struct Cli {
    /// Explicit .env file merged under the process environment
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
    /// TOML or JSON configuration file (overrides LOSTFOUND_CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Use in-process demo data instead of the live backends
    #[arg(long, global = true)]
    demo: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Activate a profile screen for a user and print what it shows
    Profile {
        #[arg(long)]
        user: UserId,
        /// Bearer token forwarded to the document store
        #[arg(long)]
        id_token: Option<String>,
        /// Follow one of the profile actions after loading, e.g. "Settings"
        #[arg(long)]
        open: Option<Route>,
    },
    /// Unregister the user's device and terminate their session
    SignOut {
        #[arg(long)]
        user: UserId,
        /// How long to wait for the push unregister before exiting
        #[arg(long, default_value = "10s", value_parser = humantime::parse_duration)]
        unregister_timeout: Duration,
    },
    /// Print the resolved configuration with secrets redacted
    Config {
        #[arg(long, value_enum, default_value = "toml")]
        format: ConfigFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ConfigFormat {
    Toml,
    Json,
}

fn load_config(cli: &Cli) -> Result<ConfigLoad> {
    let mut vars: Vec<(String, String)> = std::env::vars().collect();
    if let Some(path) = &cli.config {
        vars.push((ENV_CONFIG_PATH.to_string(), path.display().to_string()));
    }
    let mut loader = ConfigLoader::with_vars(vars);
    if let Some(env_file) = &cli.env_file {
        loader = loader.env_file(env_file);
    }
    loader.load().context("failed to load configuration")
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let ConfigLoad { config, metadata } = load_config(&cli)?;
    tracing::debug!(source = ?metadata.source, "using configuration");

    match cli.command {
        Command::Profile {
            user,
            id_token,
            open,
        } => {
            let backends = if cli.demo {
                backend::demo(&config, &user)
            } else {
                backend::live(&config, &user, id_token, backend::Need::Profile)
                    .await?
            };
            let screen = backends.screen;

            let activation = screen.activate().await;
            print!("{}", render::view(&screen.view()));
            if let Some(route) = open {
                screen.navigate(route);
            }
            Ok(match activation {
                Activation::Settled(state) if state.profile().is_some() => {
                    ExitCode::SUCCESS
                }
                _ => ExitCode::FAILURE,
            })
        }
        Command::SignOut {
            user,
            unregister_timeout,
        } => {
            let backends = if cli.demo {
                backend::demo(&config, &user)
            } else {
                backend::live(&config, &user, None, backend::Need::SignOut)
                    .await?
            };

            let (outcome, unregister) =
                backend::sign_out(&backends.screen, unregister_timeout).await;
            println!("{}", render::outcome(&outcome));
            if let Some(result) = unregister {
                println!("{}", render::unregister(&result));
            }
            Ok(match outcome {
                SignOutOutcome::SignedOut => ExitCode::SUCCESS,
                SignOutOutcome::Failed { .. } => ExitCode::FAILURE,
            })
        }
        Command::Config { format } => {
            let redacted = config.redacted();
            match format {
                ConfigFormat::Toml => {
                    let rendered = toml::to_string_pretty(&redacted)
                        .context("failed to render configuration as TOML")?;
                    println!("# source: {}", render::source(&metadata));
                    print!("{rendered}");
                }
                ConfigFormat::Json => {
                    let rendered = serde_json::to_string_pretty(&redacted)
                        .context("failed to render configuration as JSON")?;
                    println!("{rendered}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
