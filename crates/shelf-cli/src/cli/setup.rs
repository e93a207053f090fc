//! Argument parsing: the process-level flags and the session grammar.
//!
//! Session lines are parsed with clap in multicall mode, so the first word
//! of a line is the command itself and `help`, usage errors, and aliases all
//! behave like a regular CLI surface.

use clap::{Parser, Subcommand};

/// Process-level arguments.
#[derive(Debug, Parser)]
#[command(
    name = "shelf",
    version,
    about = "An interactive book shelf for the terminal",
    long_about = "An interactive book shelf for the terminal.\n\n\
        Starts a session that holds your list in memory: add books through \
        the add form, flip their read status, and remove them, addressing \
        cards by list index, range, or the #token printed on each card. \
        The list is re-rendered after every change and discarded when the \
        session ends."
)]
pub struct Cli {
    /// Start with an empty shelf instead of the sample book
    #[arg(long)]
    pub empty: bool,
}

/// One line of session input.
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct SessionCli {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Re-render the shelf
    #[command(visible_alias = "ls")]
    List,
    /// Open the add form (prompts for title, author, pages, read)
    #[command(visible_alias = "a")]
    Add,
    /// Flip read status; takes list indexes, ranges, or #tokens
    #[command(visible_alias = "t")]
    Toggle {
        #[arg(required = true)]
        selectors: Vec<String>,
    },
    /// Remove books; takes list indexes, ranges, or #tokens
    #[command(visible_alias = "rm")]
    Delete {
        #[arg(required = true)]
        selectors: Vec<String>,
    },
    /// Print the shelf as JSON
    Export,
    /// End the session
    #[command(visible_aliases = ["exit", "q"])]
    Quit,
}

/// Parses one session line into a command.
pub fn parse_session_line(line: &str) -> Result<SessionCommand, clap::Error> {
    SessionCli::try_parse_from(line.split_whitespace()).map(|cli| cli.command)
}
