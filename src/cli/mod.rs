//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod render;
pub mod say;

use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cli::render::run_render;
use crate::cli::say::run_say;
use crate::core::config::Config;
use crate::ui::chat_loop::run_chat;

#[derive(Parser)]
#[command(name = "podium")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_DESCRIBE"),
    ", built ",
    env!("VERGEN_BUILD_DATE"),
    ")"
))]
#[command(about = "A terminal client for a speech-coaching chat server")]
#[command(
    long_about = "Podium sends your messages to a chat server and shows its replies, \
rendering the Markdown the server returns as HTML markup.\n\n\
Environment Variables:\n\
  PODIUM_BASE_URL   Chat server base URL (overrides the config file)\n\
  RUST_LOG          Diagnostic log filter (written to stderr)\n\n\
Input:\n\
  Enter             Send the message\n\
  \\ at line end     Continue the message on the next line\n\n\
Commands:\n\
  /help             List commands\n\
  /log <filename>   Enable transcript logging to the given file\n\
  /log              Toggle logging pause/resume\n\
  /dump [filename]  Write the conversation as HTML\n\
  /quit             Leave the chat"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Chat server base URL
    #[arg(short = 'u', long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Enable logging to specified file
    #[arg(short = 'l', long, global = true)]
    pub log: Option<String>,

    /// Show debug diagnostics on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive chat (default)
    Chat,
    /// Send one message and print the rendered reply
    Say {
        /// Message to send
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// Render Markdown from a file (or stdin) and print the markup
    Render {
        /// File to read; stdin when omitted or "-"
        file: Option<String>,
    },
    /// Set configuration values, or print them when no value is given
    Set {
        /// Configuration key to set
        key: Option<String>,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    tokio::runtime::Runtime::new()?.block_on(async_main(args))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("podium={default_level}")));
    // Another subscriber may already be installed when embedded.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn async_main(args: Args) -> Result<(), Box<dyn Error>> {
    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let config = Config::load()?;
            run_chat(&config, args.base_url.as_deref(), args.log).await
        }
        Commands::Say { prompt } => {
            let config = Config::load()?;
            run_say(&config, args.base_url.as_deref(), prompt).await
        }
        Commands::Render { file } => run_render(file.as_deref()),
        Commands::Set { key, value } => {
            let mut config = Config::load()?;
            let value = value.join(" ");
            match key {
                Some(key) if !value.is_empty() => {
                    if let Err(e) = config.set_key(&key, &value) {
                        eprintln!("❌ {e}");
                        std::process::exit(1);
                    }
                    config.save()?;
                    println!("✅ Set {key} to: {value}");
                }
                _ => config.print_all(),
            }
            Ok(())
        }
        Commands::Unset { key } => {
            let mut config = Config::load()?;
            if let Err(e) = config.unset_key(&key) {
                eprintln!("❌ {e}");
                std::process::exit(1);
            }
            config.save()?;
            println!("✅ Unset {key}");
            Ok(())
        }
    }
}
