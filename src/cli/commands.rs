use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lineup",
    about = concat!("[=] lineup v", env!("CARGO_PKG_VERSION"), " - keep your to-dos in order"),
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Snapshot file to use (default: `file` from .lineup.toml, or todo.md)
    #[arg(short, long, global = true)]
    pub file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new item at the top of the list
    Add(AddArgs),
    /// Print the list
    List,
    /// Move an item to the top
    Top(PosArgs),
    /// Move an item to the bottom
    Bottom(PosArgs),
    /// Move an item up one position
    Raise(PosArgs),
    /// Move an item down one position
    Lower(PosArgs),
    /// Remove an item
    Rm(PosArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Item text (single line)
    pub text: String,
}

#[derive(Args)]
pub struct PosArgs {
    /// Position of the item, 1-based, as printed by `lineup list`
    pub pos: usize,
}
