//! Clap derive structures for the `riftline` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::fmt::Display;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use strum::IntoEnumIterator;

use riftline_core::{Difficulty, EventStatus, NewsCategory, Role, Tier};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// riftline -- browse the game catalogs from the command line
#[derive(Debug, Parser)]
#[command(
    name = "riftline",
    version,
    about = "Browse champions, game modes, esports, news, and rankings",
    long_about = "A terminal browser for the Riftline game catalogs.\n\n\
        Every list command accepts a free-text --search plus facet flags;\n\
        filters combine with AND and results keep catalog order.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format (defaults to the config file setting, then table)
    #[arg(long, short = 'o', env = "RIFTLINE_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, env = "RIFTLINE_COLOR", global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the champion roster
    #[command(alias = "champs")]
    Champions(ChampionsArgs),

    /// Browse available game modes
    Modes(ModesArgs),

    /// Browse tournaments and the match schedule
    Esports(EsportsArgs),

    /// Browse the news feed
    News(NewsArgs),

    /// Browse solo queue and pro team leaderboards
    #[command(alias = "ranks")]
    Rankings(RankingsArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ── Facet value parsers ──────────────────────────────────────────────

/// Parse a strum-backed facet enum, listing the accepted values on failure.
fn parse_facet<T>(input: &str) -> Result<T, String>
where
    T: FromStr + IntoEnumIterator + Display,
{
    T::from_str(input).map_err(|_| {
        let known = T::iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
        format!("unrecognized value '{input}' (expected one of: {known})")
    })
}

pub fn parse_role(input: &str) -> Result<Role, String> {
    parse_facet(input)
}

pub fn parse_category(input: &str) -> Result<NewsCategory, String> {
    parse_facet(input)
}

pub fn parse_tier(input: &str) -> Result<Tier, String> {
    parse_facet(input)
}

pub fn parse_status(input: &str) -> Result<EventStatus, String> {
    parse_facet(input)
}

pub fn parse_difficulty(input: &str) -> Result<Difficulty, String> {
    parse_facet(input)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CHAMPIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ChampionsArgs {
    #[command(subcommand)]
    pub command: ChampionsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ChampionsCommand {
    /// List champions
    #[command(alias = "ls")]
    List {
        /// Case-insensitive substring match on name and title
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Filter by role (mage, fighter, marksman, support, tank)
        #[arg(long, value_parser = parse_role)]
        role: Option<Role>,
    },

    /// Show one champion in full
    Get {
        /// Champion id or name
        champion: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MODES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ModesArgs {
    #[command(subcommand)]
    pub command: ModesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ModesCommand {
    /// List game modes
    #[command(alias = "ls")]
    List {
        /// Case-insensitive substring match on name and description
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Filter by difficulty (low, medium, high)
        #[arg(long, value_parser = parse_difficulty)]
        difficulty: Option<Difficulty>,
    },

    /// Show one game mode in full
    Get {
        /// Mode id or name
        mode: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ESPORTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct EsportsArgs {
    #[command(subcommand)]
    pub command: EsportsCommand,
}

#[derive(Debug, Subcommand)]
pub enum EsportsCommand {
    /// List tournaments
    Tournaments {
        /// Case-insensitive substring match on name and location
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Filter by status (live, upcoming, completed)
        #[arg(long, value_parser = parse_status)]
        status: Option<EventStatus>,
    },

    /// List scheduled and finished matches
    Matches {
        /// Case-insensitive substring match on team and tournament names
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Filter by status (live, upcoming, completed)
        #[arg(long, value_parser = parse_status)]
        status: Option<EventStatus>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  NEWS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct NewsArgs {
    #[command(subcommand)]
    pub command: NewsCommand,
}

#[derive(Debug, Subcommand)]
pub enum NewsCommand {
    /// List news articles
    #[command(alias = "ls")]
    List {
        /// Case-insensitive substring match on title and excerpt
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Filter by category (e.g. "Patch Notes", esports, guides)
        #[arg(long, value_parser = parse_category)]
        category: Option<NewsCategory>,

        /// Only featured stories
        #[arg(long)]
        featured: bool,
    },

    /// Show one article in full
    Get {
        /// Article id
        article: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  RANKINGS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct RankingsArgs {
    #[command(subcommand)]
    pub command: RankingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RankingsCommand {
    /// Solo queue leaderboard
    Players {
        /// Case-insensitive substring match on player and champion names
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Filter by tier (challenger, grandmaster, master)
        #[arg(long, value_parser = parse_tier)]
        tier: Option<Tier>,

        /// Filter by region code (exact, e.g. KR, EUW)
        #[arg(long)]
        region: Option<String>,
    },

    /// Professional team leaderboard
    Teams {
        /// Case-insensitive substring match on team names
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Filter by league (exact, e.g. LCK, LEC)
        #[arg(long)]
        league: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,

    /// Show the resolved configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_tree_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn facet_parsers_accept_any_case_and_reject_garbage() {
        assert_eq!(parse_role("MAGE"), Ok(Role::Mage));
        assert_eq!(parse_category("Patch Notes"), Ok(NewsCategory::PatchNotes));
        assert_eq!(parse_status("live"), Ok(EventStatus::Live));
        assert!(parse_difficulty("impossible").is_err());
    }
}
