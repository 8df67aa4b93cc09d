//! REPL Module
//!
//! Reads commands line by line, dispatches them through the command table
//! and keeps the per-session state: API client, pagination cursors and the
//! Pokédex.

mod catch;
pub mod commands;
mod render;

use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::api::Client;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::Pokedex;

pub use catch::{catch_difficulty, catch_rate, is_caught};
pub use commands::{execute, Category, Command, CommandSpec, Flow, COMMANDS};

/// Prompt shown before every command.
pub const PROMPT: &str = "Pokedex > ";

/// Lowercases `input` and splits it on whitespace.
pub fn clean_input(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// State carried between commands.
#[derive(Debug)]
pub struct Session {
    pub(crate) client: Client,
    pub(crate) pokedex: Pokedex,
    /// Link to the page `map` shows next; `None` means the first page
    pub(crate) next: Option<String>,
    /// Link to the page `mapb` shows
    pub(crate) previous: Option<String>,
    pub(crate) shake_delay: Duration,
    pub(crate) rng: StdRng,
}

impl Session {
    /// Starts a session with a fresh client built from `config`.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_client(Client::new(config)?, config.shake_delay()))
    }

    /// Starts a session around an existing client.
    pub fn with_client(client: Client, shake_delay: Duration) -> Self {
        Self {
            client,
            pokedex: Pokedex::new(),
            next: None,
            previous: None,
            shake_delay,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reseeds the catch roll generator.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn previous_page(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Parses and runs one input line.
    ///
    /// Unknown commands and command errors are reported on `out`; only a
    /// failure to write output is returned as an error.
    pub async fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };

        let Some(command) = Command::parse(name) else {
            writeln!(
                out,
                "{} {}",
                "Unknown command:".red(),
                format!("'{}' (type 'help' for a list)", name).bright_black()
            )?;
            return Ok(Flow::Continue);
        };

        match execute(self, command, args, out).await {
            Ok(flow) => Ok(flow),
            Err(PokedexError::Io(err)) => Err(PokedexError::Io(err)),
            Err(err) => {
                debug!(error = %err, "Command failed");
                writeln!(out, "{} {}", "Error:".red(), err)?;
                Ok(Flow::Continue)
            }
        }
    }
}

/// Runs the read-eval-print loop until `exit` or end of input.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    info!("REPL started");

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            // End of input behaves like `exit`
            commands::exit(session, out)?;
            break;
        };

        if session.handle_line(&line, out).await? == Flow::Exit {
            break;
        }
    }

    session.client.cache().stop();
    info!("REPL finished");
    Ok(())
}
