pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod domain;
pub mod entities;
pub mod services;
pub mod state;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands, UserCommands};
pub use config::Config;
use db::NewUser;

pub async fn run(config: Config) -> anyhow::Result<()> {
    let cli = Cli::parse();

    if matches!(cli.command, Some(Commands::Init)) {
        if Config::create_default_if_missing()? {
            println!("✓ Config file created. Edit config.toml and run again.");
        } else {
            println!("Config file already exists.");
        }
        return Ok(());
    }

    config.validate()?;
    init_tracing(&config)?;

    match cli.command {
        None | Some(Commands::Serve) => {
            let prometheus_handle = if config.observability.metrics_enabled {
                use metrics_exporter_prometheus::PrometheusBuilder;
                let handle = PrometheusBuilder::new()
                    .install_recorder()
                    .context("Failed to install Prometheus recorder")?;
                info!("Prometheus metrics recorder initialized");
                Some(handle)
            } else {
                None
            };

            cli::cmd_serve(config, prometheus_handle).await
        }

        Some(Commands::Init) => Ok(()),

        Some(Commands::User { command }) => match command {
            UserCommands::Add {
                username,
                password,
                district,
                first_name,
                last_name,
                full_name,
                party,
                borough,
            } => {
                let new_user = NewUser {
                    username,
                    password,
                    first_name,
                    last_name,
                    full_name,
                    district,
                    party,
                    borough,
                };
                cli::cmd_user_add(&config, new_user).await
            }
            UserCommands::Token { username } => cli::cmd_user_token(&config, &username).await,
            UserCommands::RotateToken { username } => {
                cli::cmd_user_rotate_token(&config, &username).await
            }
        },
    }
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = if config.observability.json_logs {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    if config.observability.loki_enabled {
        let url = url::Url::parse(&config.observability.loki_url).context("Invalid Loki URL")?;

        let (layer, task) = tracing_loki::builder()
            .label("app", "councildesk")?
            .extra_field("env", "production")?
            .build_url(url)?;

        tokio::spawn(task);

        registry.with(layer).init();
        info!(
            "Loki logging initialized at {}",
            config.observability.loki_url
        );
    } else {
        registry.init();
    }

    Ok(())
}
