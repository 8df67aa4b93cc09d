//! Command table and handlers.
//!
//! Each handler writes to the session's output and returns whether the REPL
//! should keep going. Errors bubble up to the loop, which prints them.

use std::io::Write;

use colored::Colorize;
use rand::Rng;
use tracing::debug;

use crate::error::{PokedexError, Result};
use crate::models::{CaughtPokemon, LocationAreaPage};
use crate::repl::catch::{catch_difficulty, catch_rate, is_caught};
use crate::repl::render::{banner, banner_lines, header, humanize, paint_type, stat_bar};
use crate::repl::Session;

/// What the REPL does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Map,
    Mapb,
    Explore,
    Catch,
    Inspect,
    Pokedex,
    Help,
    Exit,
}

/// Help groups, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Navigation,
    Exploration,
    Collection,
    General,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Navigation,
        Category::Exploration,
        Category::Collection,
        Category::General,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::Navigation => "Navigation",
            Category::Exploration => "Exploration",
            Category::Collection => "Collection",
            Category::General => "General",
        }
    }
}

/// One row of the command table.
#[derive(Debug)]
pub struct CommandSpec {
    pub command: Command,
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    pub category: Category,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: Command::Map,
        name: "map",
        usage: "map",
        description: "Display the next page of locations",
        category: Category::Navigation,
    },
    CommandSpec {
        command: Command::Mapb,
        name: "mapb",
        usage: "mapb",
        description: "Display the previous page of locations",
        category: Category::Navigation,
    },
    CommandSpec {
        command: Command::Explore,
        name: "explore",
        usage: "explore <area_name>",
        description: "List all Pokémon in a specific area",
        category: Category::Exploration,
    },
    CommandSpec {
        command: Command::Catch,
        name: "catch",
        usage: "catch <pokemon_name>",
        description: "Attempt to catch a Pokémon",
        category: Category::Exploration,
    },
    CommandSpec {
        command: Command::Inspect,
        name: "inspect",
        usage: "inspect <pokemon_name>",
        description: "View details of a caught Pokémon",
        category: Category::Collection,
    },
    CommandSpec {
        command: Command::Pokedex,
        name: "pokedex",
        usage: "pokedex",
        description: "List all caught Pokémon",
        category: Category::Collection,
    },
    CommandSpec {
        command: Command::Help,
        name: "help",
        usage: "help",
        description: "Display a help message",
        category: Category::General,
    },
    CommandSpec {
        command: Command::Exit,
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
        category: Category::General,
    },
];

impl Command {
    /// Looks a command up by the word the user typed.
    pub fn parse(name: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.command)
    }

    /// Table row for this command.
    pub fn spec(self) -> &'static CommandSpec {
        let row = match self {
            Command::Map => 0,
            Command::Mapb => 1,
            Command::Explore => 2,
            Command::Catch => 3,
            Command::Inspect => 4,
            Command::Pokedex => 5,
            Command::Help => 6,
            Command::Exit => 7,
        };
        &COMMANDS[row]
    }
}

/// Runs `command` against the session.
pub async fn execute<W: Write>(
    session: &mut Session,
    command: Command,
    args: &[String],
    out: &mut W,
) -> Result<Flow> {
    debug!(?command, ?args, "Executing command");
    match command {
        Command::Map => map(session, out).await,
        Command::Mapb => mapb(session, out).await,
        Command::Explore => explore(session, required_arg(command, args)?, out).await,
        Command::Catch => catch(session, required_arg(command, args)?, out).await,
        Command::Inspect => inspect(session, required_arg(command, args)?, out).await,
        Command::Pokedex => pokedex(session, out),
        Command::Help => help(out),
        Command::Exit => exit(session, out),
    }
}

fn required_arg(command: Command, args: &[String]) -> Result<&str> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| PokedexError::Usage(command.spec().usage.to_string()))
}

// == Navigation ==

async fn map<W: Write>(session: &mut Session, out: &mut W) -> Result<Flow> {
    let page = session
        .client
        .list_location_areas(session.next.as_deref())
        .await?;

    write_locations(&page, out)?;

    session.next = page.next;
    session.previous = page.previous;

    if session.next.is_some() {
        writeln!(out, "\n{}", "Type 'map' for more locations".bright_black())?;
    }
    Ok(Flow::Continue)
}

async fn mapb<W: Write>(session: &mut Session, out: &mut W) -> Result<Flow> {
    let Some(previous) = session.previous.clone() else {
        writeln!(out, "{}", "⚠ You're on the first page".yellow())?;
        session.next = None;
        return Ok(Flow::Continue);
    };

    let page = session.client.list_location_areas(Some(&previous)).await?;

    write_locations(&page, out)?;

    session.next = page.next;
    session.previous = page.previous;

    if session.previous.is_some() {
        writeln!(out, "\n{}", "Type 'mapb' for previous locations".bright_black())?;
    }
    Ok(Flow::Continue)
}

fn write_locations<W: Write>(page: &LocationAreaPage, out: &mut W) -> Result<()> {
    writeln!(out, "{}", header("Locations").cyan())?;
    for (i, area) in page.results.iter().enumerate() {
        writeln!(out, "{} {}", format!("{:2}.", i + 1).bright_black(), area.name)?;
    }
    Ok(())
}

// == Exploration ==

async fn explore<W: Write>(session: &mut Session, area: &str, out: &mut W) -> Result<Flow> {
    writeln!(out, "{}", format!("Exploring {}...", area).yellow())?;

    let details = session.client.location_area(area).await?;

    if details.pokemon_encounters.is_empty() {
        writeln!(out, "{}", "No Pokémon found in this area".bright_black())?;
        return Ok(Flow::Continue);
    }

    writeln!(
        out,
        "\n{}",
        header(&format!("Pokémon Found in {}", area)).green()
    )?;
    for (i, encounter) in details.pokemon_encounters.iter().enumerate() {
        writeln!(
            out,
            "{} {}",
            format!("{:2}.", i + 1).bright_black(),
            encounter.pokemon.name
        )?;
    }
    writeln!(
        out,
        "\n{}",
        "Use 'catch <pokemon_name>' to attempt a catch!".bright_black()
    )?;
    Ok(Flow::Continue)
}

async fn catch<W: Write>(session: &mut Session, name: &str, out: &mut W) -> Result<Flow> {
    if session.pokedex.contains(name) {
        writeln!(out, "{}", format!("✓ You've already caught {}!", name).yellow())?;
        return Ok(Flow::Continue);
    }

    let pokemon = session.client.pokemon(name).await?;
    let difficulty = catch_difficulty(pokemon.base_experience);
    let roll: f32 = session.rng.gen();

    writeln!(out, "{}", format!("Throwing a Pokéball at {}...", name).yellow())?;
    for _ in 0..3 {
        tokio::time::sleep(session.shake_delay).await;
        write!(out, "Wobble... ")?;
        out.flush()?;
    }
    writeln!(out)?;

    if is_caught(difficulty, roll) {
        writeln!(out, "{}", format!("✓ Gotcha! {} was caught!", name).green())?;
        if let Some(exp) = pokemon.base_experience {
            writeln!(out, "  {}", format!("Base Experience: {}", exp).bright_black())?;
        }
        session.pokedex.insert(CaughtPokemon {
            name: pokemon.name,
            base_experience: pokemon.base_experience,
        });
    } else {
        writeln!(out, "{}", format!("✗ Oh no! {} broke free!", name).red())?;
        writeln!(
            out,
            "  {}",
            format!("Catch rate: {:.1}% - Try again!", catch_rate(difficulty)).bright_black()
        )?;
    }
    Ok(Flow::Continue)
}

// == Collection ==

async fn inspect<W: Write>(session: &mut Session, name: &str, out: &mut W) -> Result<Flow> {
    if !session.pokedex.contains(name) {
        writeln!(out, "{}", format!("✗ You haven't caught {} yet!", name).red())?;
        writeln!(
            out,
            "  {}",
            format!("Use 'catch {}' to attempt a catch", name).bright_black()
        )?;
        return Ok(Flow::Continue);
    }

    // Served from the cache when the catch happened within the TTL
    let pokemon = session.client.pokemon(name).await?;

    writeln!(out)?;
    for line in banner(&pokemon.name.to_uppercase()) {
        writeln!(out, "{}", line.cyan())?;
    }
    writeln!(out)?;

    writeln!(out, "{} {} decimetres", "Height:".bold(), pokemon.height)?;
    writeln!(out, "{} {} hectograms\n", "Weight:".bold(), pokemon.weight)?;

    writeln!(out, "{}", "Types:".bold())?;
    for slot in &pokemon.types {
        writeln!(out, "  • {}", paint_type(&slot.kind.name))?;
    }

    writeln!(out, "\n{}", "Stats:".bold())?;
    for stat in &pokemon.stats {
        let label = format!("{}:", humanize(&stat.stat.name));
        writeln!(
            out,
            "  {:<18} {} {}",
            label,
            format!("{:3}", stat.base_stat).bright_black(),
            stat_bar(stat.base_stat)
        )?;
    }
    Ok(Flow::Continue)
}

fn pokedex<W: Write>(session: &Session, out: &mut W) -> Result<Flow> {
    if session.pokedex.is_empty() {
        writeln!(out, "{}", "Your Pokédex is empty!".yellow())?;
        writeln!(
            out,
            "  {}",
            "Use 'explore' and 'catch' to start collecting Pokémon".bright_black()
        )?;
        return Ok(Flow::Continue);
    }

    for line in banner(&format!("YOUR POKÉDEX ({})", session.pokedex.len())) {
        writeln!(out, "{}", line.green())?;
    }
    writeln!(out)?;

    for (i, pokemon) in session.pokedex.iter().enumerate() {
        match pokemon.base_experience {
            Some(exp) => writeln!(
                out,
                "{} {} {}",
                format!("{:2}.", i + 1).bright_black(),
                pokemon.name,
                format!("(base exp {})", exp).bright_black()
            )?,
            None => writeln!(out, "{} {}", format!("{:2}.", i + 1).bright_black(), pokemon.name)?,
        }
    }
    writeln!(
        out,
        "\n{}",
        "Use 'inspect <pokemon_name>' to see details".bright_black()
    )?;
    Ok(Flow::Continue)
}

// == General ==

fn help<W: Write>(out: &mut W) -> Result<Flow> {
    for line in banner("POKÉDEX COMMANDS") {
        writeln!(out, "{}", line.cyan())?;
    }
    writeln!(out)?;

    for category in Category::ALL {
        writeln!(out, "{}", format!("{}:", category.title()).bold())?;
        for spec in COMMANDS.iter().filter(|spec| spec.category == category) {
            writeln!(
                out,
                "  {} {}",
                format!("{:<25}", spec.usage).green(),
                spec.description
            )?;
        }
        writeln!(out)?;
    }
    Ok(Flow::Continue)
}

/// Prints the farewell banner. Also used when input ends.
pub fn exit<W: Write>(session: &Session, out: &mut W) -> Result<Flow> {
    writeln!(out)?;
    let caught = format!("You caught {} Pokémon", session.pokedex.len());
    for line in banner_lines(&["Thanks for using Pokédex!", &caught]) {
        writeln!(out, "{}", line.cyan())?;
    }
    writeln!(out)?;
    Ok(Flow::Exit)
}
