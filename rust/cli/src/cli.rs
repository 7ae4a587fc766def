//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use handsort_engine::cards::RankUniverse;
use handsort_engine::locate::ParenScope;

#[derive(Parser, Debug)]
#[command(
    name = "handsort",
    version,
    about = "Deterministic card-hand report: groups hand lines by card in canonical order"
)]
pub struct HandsortCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Group the hands of a text block by card
    Analyze {
        /// Input file (plain or .zst); `-` or omitted reads stdin
        #[arg(long)]
        input: Option<String>,
        /// Rank universe, overrides config
        #[arg(long, value_enum)]
        universe: Option<UniverseArg>,
        /// Which parenthesized groups of a line are read, overrides config
        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,
        /// Print the {success, result|error} envelope instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Answer a question about a text block of hands
    Ask {
        #[arg(long)]
        question: String,
        /// Input file (plain or .zst); `-` reads stdin, omitted means no hands
        #[arg(long)]
        input: Option<String>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum UniverseArg {
    /// Ranks 6 through Ace, 36 cards
    Restricted,
    /// Ranks 2 through Ace, 52 cards
    Full,
}

impl From<UniverseArg> for RankUniverse {
    fn from(arg: UniverseArg) -> Self {
        match arg {
            UniverseArg::Restricted => RankUniverse::Restricted,
            UniverseArg::Full => RankUniverse::Full,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Only the first group of each line
    FirstOnly,
    /// Every group of each line
    All,
}

impl From<ScopeArg> for ParenScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::FirstOnly => ParenScope::FirstOnly,
            ScopeArg::All => ParenScope::All,
        }
    }
}
