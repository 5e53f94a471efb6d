//! Arcade - terminal front-end
//!
//! Renders one route at a time and reads one command per line from stdin.
//! `:go ROUTE` switches games, `:quit` exits.

#![warn(missing_docs)]

mod cli;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use arcade::{Arcade, ArcadeConfig, Command, Notice, NoticeLevel, Route, SessionId, ViewModel};
use clap::Parser;
use cli::Cli;
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

const SESSION: &str = "local";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let route = Route::parse(&cli.route)?;
    run(Arcade::new(config), route, cli.json)
}

/// Config file first, then flag overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<ArcadeConfig> {
    let mut config = match &cli.config {
        Some(path) => ArcadeConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ArcadeConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(bankroll) = cli.bankroll {
        config = config.with_starting_bankroll(bankroll);
    }
    config.validate()?;
    info!(?config, "Configuration loaded");
    Ok(config)
}

/// Read-eval-render loop over stdin.
fn run(arcade: Arcade, mut route: Route, json: bool) -> Result<()> {
    let session = SessionId::from(SESSION);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    let view = arcade.handle(&session, route, Command::Show)?;
    render(&mut out, &view, json)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case(":quit") {
            break;
        }

        let view = if let Some(name) = go_target(trimmed) {
            match Route::parse(name) {
                Ok(next) => {
                    route = next;
                    arcade.handle(&session, route, Command::Show)?
                }
                Err(err) => {
                    warn!(%err, "Route change refused");
                    let routes: Vec<&'static str> = Route::iter().map(Into::into).collect();
                    arcade
                        .handle(&session, route, Command::Show)?
                        .with_notice(Notice::warning(format!("{}. Try: {}", err, routes.join(", "))))
                }
            }
        } else {
            arcade.handle(&session, route, Command::parse(&line))?
        };
        render(&mut out, &view, json)?;
    }
    Ok(())
}

/// The route named by a `:go ROUTE` line, or `None` for any other line.
fn go_target(line: &str) -> Option<&str> {
    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    head.eq_ignore_ascii_case(":go").then_some(rest)
}

fn render(out: &mut impl Write, view: &ViewModel, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(view)?)?;
        return Ok(out.flush()?);
    }

    writeln!(out, "\n=== {} ===", view.title)?;
    writeln!(out, "{}", view.instructions)?;
    for line in &view.board {
        writeln!(out, "{}", line)?;
    }
    for line in &view.feedback {
        writeln!(out, "  {}", line)?;
    }
    if let Some(notice) = &view.notice {
        let tag = match notice.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "ok",
            NoticeLevel::Warning => "warn",
            NoticeLevel::Error => "error",
        };
        writeln!(out, "[{}] {}", tag, notice.text)?;
    }
    if view.terminal {
        writeln!(out, "(:reset to play again, :go ROUTE to switch, :quit to exit)")?;
    } else if let Some(prompt) = &view.prompt {
        write!(out, "{} ", prompt)?;
    }
    Ok(out.flush()?)
}
