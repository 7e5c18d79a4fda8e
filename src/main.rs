use anyhow::{Context, Result};
use clap::Parser;
use machikoro_web::command::{Command, HELP};
use machikoro_web::{view, ClientArgs, ClientConfig, ErrorKind, HttpTransport, Synchronizer};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ClientConfig::try_from(ClientArgs::parse())?;

    // stdout belongs to the game table, logs go to a file
    let file_appender = tracing_appender::rolling::daily(config.log_dir(), "client.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter)
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")?;
    info!("using game service at {}", config.base_url());

    let transport = HttpTransport::new(&config)?;
    let mut sync = Synchronizer::new(transport);

    println!("Machi Koro, playing at {}", config.base_url());
    println!("{}", HELP);
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                prompt();
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Cards => {
                let bank = sync.current().map(|s| *s.stock()).unwrap_or_default();
                println!("{}", view::inventory(&bank));
            }
            Command::Show => match sync.current() {
                Some(snapshot) => println!("{}", view::board(snapshot, sync.previous())),
                None => println!("No game in progress. Type start to begin."),
            },
            Command::Play(action) => {
                let outcome = sync.perform(action).await.map(|_| ());
                match outcome {
                    Ok(()) => {
                        for change in sync.changes() {
                            println!("  {}", view::change(&change));
                        }
                        if let Some(snapshot) = sync.current() {
                            println!("{}", view::board(snapshot, sync.previous()));
                        }
                    }
                    Err(err) => {
                        warn!("{} failed: {}", action, err);
                        match err.kind() {
                            ErrorKind::Validation => println!("{}", err),
                            ErrorKind::Network => {
                                println!("Could not reach the game server. {}", err)
                            }
                            ErrorKind::Server => println!("The game server said no. {}", err),
                        }
                    }
                }
            }
        }
        prompt();
    }

    info!("leaving");
    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
