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
use owo_colors::OwoColorize;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::views;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ScreeningApi;
use crate::infrastructure::api::HttpApi;

/// What to do once the command line has been handled.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    StartChat,
    Exit(i32),
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Tab / Shift+Tab - Switch between the Chat, Analytics and Report screens. On the login screen, switch fields.
- F1 / F2 / F3 - Jump to the Chat, Analytics or Report screen.
- Enter - Log in, or send the typed message.
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+R - Refresh analytics or the report.
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
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

fn required_user_id() -> Result<String> {
    let user_id = Config::get(ConfigKey::UserID);
    if user_id.trim().is_empty() {
        bail!("A user ID is required. Pass --user-id or set SCREENCHAT_USER_ID.");
    }

    return Ok(user_id);
}

/// Returns the exit code of the `analytics` subcommand.
async fn print_analytics(api: &(dyn ScreeningApi + Send + Sync), user_id: &str) -> i32 {
    match api.analytics(user_id).await {
        Ok(body) => {
            println!("{}", views::analytics::format_analytics(&body));
            return 0;
        }
        Err(err) => {
            eprintln!("{}", views::unreachable_notice(&err).red());
            return 1;
        }
    }
}

/// Returns the exit code of the `report` subcommand.
async fn print_report(api: &(dyn ScreeningApi + Send + Sync), user_id: &str) -> i32 {
    match api.report(user_id).await {
        Ok(report) => {
            println!("{}", views::report::report_text(&report));
            return 0;
        }
        Err(err) => {
            eprintln!("{}", views::report::failure_notice(&err).red());
            return 1;
        }
    }
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
        .about("Debug helpers for Screenchat")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Screenchat with environment variable RUST_LOG=screenchat")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn arg_user_id() -> Arg {
    return Arg::new(ConfigKey::UserID.to_string())
        .short('u')
        .long(ConfigKey::UserID.to_string())
        .env("SCREENCHAT_USER_ID")
        .num_args(1)
        .help("User ID to pre-fill on the login screen.")
        .global(true);
}

pub fn build() -> Command {
    let hotkeys_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("HOTKEYS:") {
                return format!("CHAT {line}").bold().underline().to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    return Command::new("screenchat")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(hotkeys_text)
        .arg_required_else_help(false)
        .subcommand(Command::new("chat").about("Log in and start a screening chat session."))
        .subcommand(Command::new("analytics").about("Print the session analytics for a user to stdout."))
        .subcommand(Command::new("report").about("Print the clinical screening report for a user to stdout."))
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .arg(
            Arg::new(ConfigKey::BaseURL.to_string())
                .short('b')
                .long(ConfigKey::BaseURL.to_string())
                .env("SCREENCHAT_BASE_URL")
                .num_args(1)
                .help(format!("Base URL of the screening service API. [default: {}]", Config::default(ConfigKey::BaseURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("SCREENCHAT_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::Language.to_string())
                .short('l')
                .long(ConfigKey::Language.to_string())
                .env("SCREENCHAT_LANGUAGE")
                .num_args(1)
                .help(format!("Language the screening session is held in. [default: {}]", Config::default(ConfigKey::Language)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::RevealInterval.to_string())
                .long(ConfigKey::RevealInterval.to_string())
                .env("SCREENCHAT_REVEAL_INTERVAL")
                .num_args(1)
                .help(format!("Milliseconds between each word when revealing a reply. [default: {}]", Config::default(ConfigKey::RevealInterval)))
                .global(true),
        )
        .arg(arg_user_id())
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .short('n')
                .long(ConfigKey::Username.to_string())
                .env("SCREENCHAT_USERNAME")
                .num_args(1)
                .help("User name to pre-fill on the login screen.")
                .global(true),
        );
}

/// Handles every subcommand that doesn't start the TUI.
pub async fn parse() -> Result<Outcome> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = Config::log_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(Outcome::Exit(0));
        }
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("analytics", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let user_id = required_user_id()?;
            let code = print_analytics(&HttpApi::default(), &user_id).await;
            return Ok(Outcome::Exit(code));
        }
        Some(("report", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let user_id = required_user_id()?;
            let code = print_report(&HttpApi::default(), &user_id).await;
            return Ok(Outcome::Exit(code));
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(Outcome::Exit(0));
        }
        Some(("config", subcmd_matches)) => {
            match subcmd_matches.subcommand() {
                Some(("create", _)) => {
                    create_config_file().await?;
                }
                Some(("default", _)) => {
                    println!("{}", Config::serialize_default(build()));
                }
                Some(("path", _)) => {
                    println!("{}", Config::default(ConfigKey::ConfigFile));
                }
                _ => {
                    subcommand_config().print_long_help()?;
                }
            }

            return Ok(Outcome::Exit(0));
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(Outcome::StartChat);
}
