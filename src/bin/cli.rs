//! osdispatch CLI
//!
//! Local entry point. For AWS Lambda, use `osdispatch-lambda`.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use osdispatch::{
    api,
    client::OpenSearch,
    dispatch::CallArgs,
    error::{AppError, Result},
    models::{Body, Config, MethodRule},
};
use serde_json::Value;

/// Dispatch REST calls to an OpenSearch cluster
#[derive(Parser, Debug)]
#[command(name = "osdispatch", version, about = "OpenSearch request dispatcher")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "osdispatch.toml")]
    config: PathBuf,

    /// Cluster URL, overriding the config file and environment
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the cluster answers
    Ping,

    /// Show cluster information
    Info,

    /// List known endpoints
    List {
        /// Only names starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Call an endpoint by name
    Call {
        /// Dotted endpoint name, e.g. `indices.create`
        name: String,

        /// Path argument
        #[arg(short = 'a', long = "arg", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        args: Vec<(String, String)>,

        /// Query option
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        params: Vec<(String, String)>,

        /// Extra request header
        #[arg(short = 'H', long = "header", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        headers: Vec<(String, String)>,

        /// Request body file, or `-` for stdin
        #[arg(long)]
        body: Option<PathBuf>,
    },

    /// Validate the configuration
    Validate,
}

fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Read a body as JSON, falling back to raw text (e.g. ndjson).
fn read_body(path: &PathBuf) -> Result<Body> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    Ok(match serde_json::from_str::<Value>(&text) {
        Ok(value) => Body::Json(value),
        Err(_) => Body::Text(text),
    })
}

/// Initialize logging; `-v` wins over the configured level.
fn init_logging(verbose: bool, configured: &str) {
    let level = if verbose { "debug" } else { configured };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

#[cfg(feature = "sigv4")]
async fn connect(config: &Config) -> Result<OpenSearch> {
    OpenSearch::connect(config).await
}

#[cfg(not(feature = "sigv4"))]
async fn connect(config: &Config) -> Result<OpenSearch> {
    OpenSearch::from_config(config)
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_found = cli.config.exists();
    let mut config = if config_found {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };
    init_logging(cli.verbose, &config.logging.level);
    if !config_found {
        log::debug!("No config at {}; using defaults", cli.config.display());
    }
    config.apply_env()?;
    if let Some(endpoint) = cli.endpoint {
        config.transport.endpoint = endpoint;
    }

    match cli.command {
        Command::Validate => {
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("Config OK: {}", config.transport.endpoint);
        }

        Command::List { prefix } => {
            let prefix = prefix.unwrap_or_default();
            for endpoint in api::endpoints().filter(|e| e.name.starts_with(&prefix)) {
                let method = match endpoint.method {
                    MethodRule::Fixed(method) => method.as_str(),
                    MethodRule::PutIfPresent(_) => "POST|PUT",
                };
                println!("{:<40} {:<8} {}", endpoint.name, method, endpoint.template());
            }
        }

        Command::Ping => {
            config.validate()?;
            let client = connect(&config).await?;
            if client.ping().await {
                log::info!("{} is reachable", config.transport.endpoint);
            } else {
                return Err(AppError::config(format!(
                    "{} did not answer ping",
                    config.transport.endpoint
                )));
            }
        }

        Command::Info => {
            config.validate()?;
            let client = connect(&config).await?;
            print_json(&client.info().await?)?;
        }

        Command::Call {
            name,
            args,
            params,
            headers,
            body,
        } => {
            config.validate()?;
            let client = connect(&config).await?;

            let mut call = CallArgs::new();
            for (key, value) in args {
                call = call.arg(key, value);
            }
            for (key, value) in params {
                call = call.param(key, value);
            }
            for (key, value) in headers {
                call = call.header(key, value);
            }
            if let Some(path) = body {
                call = call.body(read_body(&path)?);
            }

            let response = client.call(&name, call).await?;
            log::debug!("{} -> {}", name, response.status);
            print_json(&response.body)?;
        }
    }

    Ok(())
}
