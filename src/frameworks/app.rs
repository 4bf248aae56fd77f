use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::domain::{GameMode, NavigationTarget};
use crate::frameworks::config;
use crate::interface_adapters::client::LadderClient;
use crate::interface_adapters::navigation::ChannelNavigator;
use crate::interface_adapters::presenter;
use crate::use_cases::nickname::NicknameController;
use crate::use_cases::poller::QueuePoller;
use crate::use_cases::queue_panel::QueueController;

const HELP: &str = "\
commands:
  nick <name>                claim a nickname
  join | leave               enter or leave the matchmaking queue
  open | close               open or close the ladder (admin)
  modes <ap|rd|cd> <on|off>  toggle a mode filter for the next join
  status                     print the queue panel
  help                       show this message
  quit                       exit";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Nick(String),
    Join,
    Leave,
    Open,
    Close,
    Mode(GameMode, bool),
    Status,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let command = match (words.next()?, words.next(), words.next()) {
        ("nick", Some(name), None) => Command::Nick(name.to_string()),
        ("join", None, None) => Command::Join,
        ("leave", None, None) => Command::Leave,
        ("open", None, None) => Command::Open,
        ("close", None, None) => Command::Close,
        ("modes", Some(mode), Some(state)) => {
            let mode = match mode {
                "ap" => GameMode::AllPick,
                "rd" => GameMode::RandomDraft,
                "cd" => GameMode::CaptainsDraft,
                _ => return None,
            };
            let enabled = match state {
                "on" => true,
                "off" => false,
                _ => return None,
            };
            Command::Mode(mode, enabled)
        }
        ("status", None, None) => Command::Status,
        ("help", None, None) => Command::Help,
        ("quit" | "exit", None, None) => Command::Quit,
        _ => return None,
    };
    if words.next().is_some() {
        return None;
    }
    Some(command)
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Wire the controllers to the ladder service and drive them from stdin
/// until the user quits or a match assignment ends the session.
pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let base_url = match config::base_url() {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(error = %e, "invalid LADDER_BASE_URL");
            return; // Abort startup on bad configuration
        }
    };

    let client = match LadderClient::new(base_url.clone(), config::http_timeout()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!(error = %e, "failed to build http client");
            return;
        }
    };
    tracing::info!(%base_url, "ladder client ready");

    let (navigator, mut navigation) = ChannelNavigator::new();
    let navigator = Arc::new(navigator);

    let queue = Arc::new(QueueController::new(client.clone(), navigator.clone()));
    let nickname = NicknameController::new(client, navigator);

    let mut panel = queue.subscribe();
    let mut shown = panel.borrow().clone();

    let poller = QueuePoller::spawn(queue.clone(), config::poll_interval());

    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            changed = navigation.changed() => {
                if changed.is_err() {
                    break;
                }
                match navigation.borrow_and_update().clone() {
                    Some(target @ NavigationTarget::MatchPage { .. }) => {
                        println!("match ready, opening {}", target.path());
                        break;
                    }
                    Some(NavigationTarget::Home) => {
                        println!("nickname accepted, welcome");
                    }
                    None => {}
                }
            }
            changed = panel.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = panel.borrow_and_update().clone();
                if current != shown {
                    println!("{}", presenter::queue_panel_line(&current));
                    shown = current;
                }
            }
            line = lines.next_line() => {
                let Ok(Some(line)) = line else {
                    break;
                };
                match parse_command(&line) {
                    Some(Command::Nick(name)) => {
                        nickname.submit(&name).await;
                        if let Some(feedback) =
                            presenter::nickname_feedback(&nickname.state().await)
                        {
                            println!("{feedback}");
                        }
                    }
                    Some(Command::Join) => queue.set_membership(true).await,
                    Some(Command::Leave) => queue.set_membership(false).await,
                    Some(Command::Open) => queue.set_queue_open(true).await,
                    Some(Command::Close) => queue.set_queue_open(false).await,
                    Some(Command::Mode(mode, enabled)) => queue.set_mode(mode, enabled).await,
                    Some(Command::Status) => {
                        println!("{}", presenter::queue_panel_line(&queue.snapshot().await));
                    }
                    Some(Command::Help) => println!("{HELP}"),
                    Some(Command::Quit) => break,
                    None => {
                        if !line.trim().is_empty() {
                            println!("unknown command, try 'help'");
                        }
                    }
                }
            }
        }
    }

    poller.shutdown().await;
}
