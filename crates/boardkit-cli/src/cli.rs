use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "boardkit")]
#[command(about = "A multi-board kanban task manager", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Path to the board data file (or set BOARDKIT_FILE)
    #[arg(value_name = "FILE", env = "BOARDKIT_FILE")]
    pub file: Option<String>,

    /// Acting user id (or set BOARDKIT_USER)
    #[arg(long, env = "BOARDKIT_USER")]
    pub user: Option<Uuid>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Board operations
    Board(BoardCommand),
    /// List operations
    List(ListCommand),
    /// Card operations
    Card(CardCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Create a new board
    Create {
        #[arg(long)]
        title: String,
    },
    /// List the acting user's boards
    List,
    /// Get a board with its lists and active cards
    Get {
        #[arg(long)]
        id: Uuid,
    },
    /// Rename a board
    Rename {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        title: String,
    },
    /// Delete a board and everything on it
    Delete {
        #[arg(long)]
        id: Uuid,
    },
}

// List commands
#[derive(Args)]
pub struct ListCommand {
    #[command(subcommand)]
    pub action: ListAction,
}

#[derive(Subcommand)]
pub enum ListAction {
    /// Create a new list at the end of a board
    Create {
        #[arg(long)]
        board_id: Uuid,
        #[arg(long)]
        title: String,
    },
    /// Rename a list
    Rename {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        title: String,
    },
    /// Delete a list and its cards
    Delete {
        #[arg(long)]
        id: Uuid,
    },
    /// Archive every active card in a list
    ArchiveCards {
        #[arg(long)]
        id: Uuid,
    },
}

// Card commands
#[derive(Args)]
pub struct CardCommand {
    #[command(subcommand)]
    pub action: CardAction,
}

#[derive(Subcommand)]
pub enum CardAction {
    /// Create a card at the end of a list
    Create(CardCreateArgs),
    /// Get a specific card
    Get {
        #[arg(long)]
        id: Uuid,
    },
    /// Update card fields
    Update(CardUpdateArgs),
    /// Move a card to a slot in a list
    Move {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        list_id: Uuid,
        #[arg(long)]
        position: i32,
    },
    /// Archive a card
    Archive {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Args)]
pub struct CardCreateArgs {
    #[arg(long)]
    pub list_id: Uuid,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct CardUpdateArgs {
    #[arg(long)]
    pub id: Uuid,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,
    #[arg(long)]
    pub clear_description: bool,
    /// Due date, RFC 3339 or YYYY-MM-DD
    #[arg(long, conflicts_with = "clear_due_date")]
    pub due_date: Option<String>,
    #[arg(long)]
    pub clear_due_date: bool,
    /// Archive or restore the card
    #[arg(long)]
    pub archived: Option<bool>,
}
