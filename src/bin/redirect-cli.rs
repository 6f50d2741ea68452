use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use hash_redirect::config::loader::{load_config, ConfigError};
use hash_redirect::config::AppConfig;
use hash_redirect::redirect::{RedirectConfig, RedirectResult, RequestDescriptor};

#[derive(Parser)]
#[command(name = "redirect-cli")]
#[command(about = "Inspect hash-redirect configuration offline", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show what the middleware would do with a request path
    Decide {
        /// Full path including query, e.g. "/users/7?tab=info"
        path: String,
        /// Treat the request as XHR
        #[arg(long)]
        ajax: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Validate the configuration file
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            let Some(path) = cli.config else {
                eprintln!("Error: --config is required for check");
                std::process::exit(2);
            };
            match load_config(&path) {
                Ok(_) => println!("{}: ok", path.display()),
                Err(ConfigError::Validation(errors)) => {
                    for err in errors {
                        eprintln!("{}: {}", path.display(), err);
                    }
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("{}: {}", path.display(), e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Decide { path, ajax, json } => {
            let config = match &cli.config {
                Some(p) => load_config(p)?,
                None => AppConfig::default(),
            };
            let redirect = RedirectConfig::from_settings(&config.redirect)?;
            let full_path = if path.starts_with('/') { path } else { format!("/{}", path) };

            let outcome = redirect.evaluate(&RequestDescriptor::new(&full_path, ajax));
            let reason = outcome.label();
            let target = match RedirectResult::from(outcome) {
                RedirectResult::RedirectTo(target) => Some(target),
                RedirectResult::NoAction => None,
            };

            if json {
                let out = json!({
                    "path": full_path,
                    "ajax": ajax,
                    "outcome": reason,
                    "location": target,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                match target {
                    Some(location) => println!("302 -> {}", location),
                    None => println!("pass ({})", reason),
                }
            }
        }
    }

    Ok(())
}
