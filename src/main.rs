#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Error;
use anyhow::Result;
use owo_colors::OwoColorize;
use tokio::sync::mpsc;
use tokio::task;

use crate::application::cli;
use crate::application::ui;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::services::actions::ActionsService;
use crate::infrastructure::api::HttpApi;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        format!(
            "Oh no! Screenchat has failed with the following app version and error.\n\nVersion: {}\nCommit: {}\nError: {}",
            env!("CARGO_PKG_VERSION"),
            env!("VERGEN_GIT_DESCRIBE"),
            err
        )
        .red()
    );

    let backtrace = err.backtrace();
    if backtrace.to_string() == "disabled backtrace" {
        let args = env::args().collect::<Vec<String>>().join(" ");
        eprintln!("\nRunning the following can help explain further what the issue is:");
        eprintln!("\nRUST_BACKTRACE=1 {args}");
    } else {
        eprintln!("\n{}", backtrace);
    }
}

fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    if !env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("screenchat")
    {
        return None;
    }

    let file_appender = tracing_appender::rolling::never(Config::log_dir(), "debug.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(writer)
        .init();

    return Some(guard);
}

async fn run() -> Result<()> {
    let reveal_interval =
        Duration::from_millis(Config::get(ConfigKey::RevealInterval).parse::<u64>()?);

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();
    background_futures.spawn(async move {
        return ActionsService::start(
            Arc::new(HttpApi::default()),
            reveal_interval,
            event_tx,
            &mut action_rx,
        )
        .await;
    });

    let ui_future = ui::start(action_tx, event_rx);

    return tokio::select!(
        res = background_futures.join_next() => match res {
            Some(Ok(res)) => res,
            Some(Err(err)) => Err(err.into()),
            None => Ok(()),
        },
        res = ui_future => res,
    );
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        ui::destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let log_guard = init_tracing();

    let mut exit_code = 0;
    match cli::parse().await {
        Err(err) => {
            handle_error(err);
            exit_code = 1;
        }
        Ok(cli::Outcome::Exit(code)) => {
            exit_code = code;
        }
        Ok(cli::Outcome::StartChat) => {
            if let Err(err) = run().await {
                ui::destruct_terminal_for_panic();
                handle_error(err);
                exit_code = 1;
            }
        }
    }

    drop(log_guard);
    process::exit(exit_code);
}
