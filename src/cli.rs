use clap::{Parser, Subcommand};
use std::path::PathBuf;

use story_reel::utils::APP_NAME;

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(about = "Terminal story viewer", long_about = None)]
pub struct Cli {
    /// Read stories from this JSON file instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub stories: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all stories, newest first
    List,

    /// Show the slides of one story
    Show {
        /// Story id
        id: String,
    },

    /// Fuzzy search stories by title or id
    Search {
        /// Search query
        query: String,
    },

    /// Open a story in the viewer
    Play {
        /// Story id
        id: String,
    },

    /// Play the images and videos of a directory as one story
    PlayDir {
        /// Directory to scan
        directory: PathBuf,
    },

    /// Print the active configuration
    Config {
        /// Write the default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}
