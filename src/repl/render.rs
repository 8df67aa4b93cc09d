//! Terminal rendering helpers shared by the commands.

use colored::{ColoredString, Colorize};

/// Inner width of the boxed banners.
const BANNER_WIDTH: usize = 35;

/// Number of cells in a stat bar.
pub const STAT_BAR_CELLS: u32 = 20;

/// Highest base stat the bar is scaled to.
pub const MAX_BASE_STAT: u32 = 255;

/// Renders `title` centered in a box.
pub fn banner(title: &str) -> Vec<String> {
    banner_lines(&[title])
}

/// Renders each of `titles` centered on its own row of one box.
pub fn banner_lines(titles: &[&str]) -> Vec<String> {
    let rule = "═".repeat(BANNER_WIDTH);
    let mut lines = Vec::with_capacity(titles.len() + 2);
    lines.push(format!("╔{}╗", rule));
    for title in titles {
        lines.push(format!("║{:^width$}║", title, width = BANNER_WIDTH));
    }
    lines.push(format!("╚{}╝", rule));
    lines
}

/// Section header used above lists.
pub fn header(title: &str) -> String {
    format!("═══ {} ═══", title)
}

/// A 20-cell bar for a base stat, colored by strength.
pub fn stat_bar(stat: u32) -> ColoredString {
    let filled = (stat.min(MAX_BASE_STAT) * STAT_BAR_CELLS / MAX_BASE_STAT) as usize;
    let empty = STAT_BAR_CELLS as usize - filled;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));

    if stat >= 150 {
        bar.green()
    } else if stat >= 100 {
        bar.yellow()
    } else {
        bar.red()
    }
}

/// Paints a Pokémon type name in its conventional color.
pub fn paint_type(name: &str) -> ColoredString {
    match name {
        "fire" => name.red(),
        "water" => name.blue(),
        "grass" => name.green(),
        "electric" => name.yellow(),
        "psychic" | "dragon" | "fairy" => name.purple(),
        "ice" => name.cyan(),
        "dark" => name.bright_black(),
        _ => name.normal(),
    }
}

/// Turns `special-attack` into `special attack`.
pub fn humanize(name: &str) -> String {
    name.replace('-', " ")
}
