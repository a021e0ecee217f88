use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "desnote")]
#[command(about = "Terminal-flavored note and folder organizer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List folders and notes
    #[command(alias = "ls")]
    List {
        /// Filter folders by name and notes by title/content
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Create a new note
    #[command(alias = "n")]
    Note {
        /// Title of the note
        title: String,

        /// Destination folder (defaults to root)
        #[arg(short, long)]
        folder: Option<String>,
    },

    /// Create a new folder
    #[command(alias = "f")]
    Folder {
        /// Name of the folder
        name: String,
    },

    /// Replace a note's content
    #[command(alias = "e")]
    Edit {
        /// Note to edit (id, id prefix, or title)
        selector: String,

        /// New content; reads stdin when omitted
        content: Option<String>,
    },

    /// Move one or more notes to another container
    Mv {
        /// Notes to move (id, id prefix, or title)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Destination: "root" or a folder
        #[arg(short, long)]
        to: String,
    },

    /// Delete notes and/or folders (folders cascade)
    #[command(alias = "rm")]
    Delete {
        /// Entities to delete (id, id prefix, title, or folder name)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Toggle the inline preview of a note
    Peek {
        /// Note to peek (id, id prefix, or title)
        selector: String,
    },

    /// Toggle a folder between expanded and collapsed
    #[command(alias = "o")]
    Open {
        /// Folder (id, id prefix, or name)
        selector: String,
    },

    /// Write a full backup to a JSON file
    Export {
        /// Output path (defaults to desnote_backup_<date>.json)
        output: Option<PathBuf>,
    },

    /// Restore a backup, replacing all current data
    Import {
        /// Backup file produced by export
        file: PathBuf,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
