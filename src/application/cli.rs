#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BOT_RESPONSES;
use crate::domain::services::actions::help_text;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

pub fn log_path() -> path::PathBuf {
    return dirs::cache_dir()
        .unwrap_or_else(|| return path::PathBuf::from("."))
        .join("oceanchat/debug.log");
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for Ocean Chat")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Ocean Chat with environment variable RUST_LOG=oceanchat")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        )
        .subcommand(
            Command::new("responses").about("List every reply the bot can pick from.")
        );
}

fn arg_reply_delay_min() -> Arg {
    return Arg::new(ConfigKey::ReplyDelayMin.to_string())
        .long(ConfigKey::ReplyDelayMin.to_string())
        .env("OCEANCHAT_REPLY_DELAY_MIN")
        .num_args(1)
        .help(format!(
            "Minimum time in milliseconds the bot waits before replying. [default: {}]",
            Config::default(ConfigKey::ReplyDelayMin)
        ));
}

fn arg_reply_delay_max() -> Arg {
    return Arg::new(ConfigKey::ReplyDelayMax.to_string())
        .long(ConfigKey::ReplyDelayMax.to_string())
        .env("OCEANCHAT_REPLY_DELAY_MAX")
        .num_args(1)
        .help(format!(
            "Maximum time in milliseconds the bot waits before replying, exclusive. [default: {}]",
            Config::default(ConfigKey::ReplyDelayMax)
        ));
}

fn arg_seed() -> Arg {
    return Arg::new(ConfigKey::Seed.to_string())
        .long(ConfigKey::Seed.to_string())
        .env("OCEANCHAT_SEED")
        .num_args(1)
        .help("Seed for the bot's random number generator. Makes reply delays and picks repeatable.");
}

fn subcommand_chat() -> Command {
    return Command::new("chat")
        .about("Start a new chat session.")
        .arg(arg_reply_delay_min())
        .arg(arg_reply_delay_max())
        .arg(arg_seed());
}

pub fn build() -> Command {
    let hotkeys_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("HOTKEYS:") {
                return Paint::new(format!("CHAT {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("oceanchat")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(hotkeys_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_chat())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .arg(arg_reply_delay_min())
        .arg(arg_reply_delay_max())
        .arg(arg_seed())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("OCEANCHAT_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .short('u')
                .long(ConfigKey::Username.to_string())
                .env("OCEANCHAT_USERNAME")
                .num_args(1)
                .help(format!("Your user name displayed in all chat bubbles. [default: {}]", Config::default(ConfigKey::Username)))
                .global(true),
        );
}

/// Parses the command line. Returns true when the chat UI should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    println!("{}", log_path().to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    println!("{}", ConfigKey::VARIANTS.join("\n"));
                }
                Some(("responses", _)) => {
                    println!("{}", BOT_RESPONSES.join("\n"));
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("chat", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        _ => {
            Config::load(vec![&matches]).await?;
        }
    }

    return Ok(true);
}
