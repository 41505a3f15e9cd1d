use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskcard", about = concat!("taskcard v", env!("CARGO_PKG_VERSION"), " - status, owners, and notes on one card"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Card file to operate on (default: ./card.json)
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<PathBuf>,

    /// Copy to use: ko or en (default: card's own, then taskcard.toml)
    #[arg(long, global = true)]
    pub locale: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new card and seed its default rows
    New(NewArgs),
    /// Show the card
    Show,
    /// Add, remove, or edit rows of the notes table
    Row(RowCmd),
    /// Flip a flag: collapsed, progress, trouble, done
    Toggle(ToggleArgs),
    /// Set a text field: author, manager, content
    Set(SetArgs),
    /// Set the card color
    Color(ColorArgs),
    /// Show the property menu, or apply a menu selection
    Menu(MenuCmd),
    /// Re-render the card whenever its file changes
    Watch,
}

#[derive(Args)]
pub struct NewArgs {
    /// Replace an existing card file
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct RowCmd {
    #[command(subcommand)]
    pub action: RowAction,
}

#[derive(Subcommand)]
pub enum RowAction {
    /// Append an empty row; prints its id
    Add,
    /// Delete a row and its text
    Rm(RowIdArg),
    /// Set the header and/or body text of a row
    Set(RowSetArgs),
    /// Print one cell of a row
    Get(RowGetArgs),
}

#[derive(Args)]
pub struct RowIdArg {
    /// Row id
    pub id: String,
}

#[derive(Args)]
pub struct RowSetArgs {
    /// Row id
    pub id: String,
    /// Header text
    #[arg(long)]
    pub header: Option<String>,
    /// Body text
    #[arg(long)]
    pub body: Option<String>,
}

#[derive(Args)]
pub struct RowGetArgs {
    /// Row id
    pub id: String,
    /// Cell to print: header or body
    pub slot: String,
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ToggleArgs {
    /// collapsed, progress, trouble, or done
    pub what: String,
}

#[derive(Args)]
pub struct SetArgs {
    /// author, manager, or content
    pub field: String,
    /// New text (may be empty)
    pub text: String,
}

#[derive(Args)]
pub struct ColorArgs {
    /// Color code, e.g. #AFF4C6
    pub color: String,
}

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct MenuCmd {
    #[command(subcommand)]
    pub action: Option<MenuAction>,
}

#[derive(Subcommand)]
pub enum MenuAction {
    /// Apply a property change as the host would report it
    Apply(MenuApplyArgs),
}

#[derive(Args)]
pub struct MenuApplyArgs {
    /// Property name, e.g. toggle-collapsed or color
    pub property: String,
    /// Property value, if the item carries one
    pub value: Option<String>,
}
