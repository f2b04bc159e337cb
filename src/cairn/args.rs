use cairn::model::EntryKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cairn")]
#[command(about = "A mountaineering journal for the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Without a subcommand, cairn runs the interactive menu.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the store root directory
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a new climb
    #[command(alias = "s")]
    Start {
        /// Name for the climb (no whitespace)
        name: String,
    },

    /// Log a journal entry to the active climb
    #[command(alias = "l")]
    Log {
        /// Entry type
        #[arg(value_enum)]
        kind: EntryKindArg,

        /// Text body; for audio/image, a file path to copy in
        /// (any other string is stored as a placeholder)
        content: Option<String>,

        /// Name for the new climb if none is active
        #[arg(long)]
        name: Option<String>,
    },

    /// End the active climb
    #[command(alias = "e")]
    End,

    /// List all climbs
    #[command(alias = "ls")]
    List,

    /// Delete every climb in the store
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum EntryKindArg {
    Text,
    Audio,
    Image,
}

impl From<EntryKindArg> for EntryKind {
    fn from(kind: EntryKindArg) -> Self {
        match kind {
            EntryKindArg::Text => EntryKind::Text,
            EntryKindArg::Audio => EntryKind::Audio,
            EntryKindArg::Image => EntryKind::Image,
        }
    }
}
