//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::config::DisplayStyle;
use crate::domain::Order;

/// Build a red-black tree from integers and inspect it
#[derive(Parser, Debug)]
#[command(name = "rbtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more: -d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Values inserted, in order, into a fresh tree.
#[derive(Args, Debug, Clone)]
pub struct Values {
    /// Integers to insert (duplicates are ignored)
    #[arg(allow_negative_numbers = true, num_args = 0..)]
    pub values: Vec<i64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tree
    Show {
        /// Rendering: tree or inline (default from config)
        #[arg(short, long)]
        style: Option<DisplayStyle>,

        #[command(flatten)]
        values: Values,
    },

    /// Print values in traversal order
    Walk {
        /// Order: pre, in, post or breadth (default from config)
        #[arg(short, long)]
        order: Option<Order>,

        #[command(flatten)]
        values: Values,
    },

    /// Report whether a value is present (exit code 1 if not)
    Find {
        /// Value to look up
        #[arg(allow_negative_numbers = true)]
        needle: i64,

        #[command(flatten)]
        values: Values,
    },

    /// Size, height estimate, measured depth, min and max
    Stats {
        #[command(flatten)]
        values: Values,
    },

    /// Verify the red-black invariants
    Check {
        #[command(flatten)]
        values: Values,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Print a template config file
    Template,
    /// Show global config file location
    Path,
}
