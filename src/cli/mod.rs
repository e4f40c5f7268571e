//! CLI module - Command-line interface for councildesk
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

pub use commands::*;

/// councildesk - district-scoped complaint lookup API
#[derive(Parser)]
#[command(name = "councildesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API until interrupted
    #[command(alias = "daemon")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Manage staff accounts
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a staff account and its district profile
    Add {
        /// Login name
        username: String,

        /// Initial password
        #[arg(long)]
        password: String,

        /// Council district number, one or two digits
        #[arg(long)]
        district: String,

        #[arg(long, default_value = "")]
        first_name: String,

        #[arg(long, default_value = "")]
        last_name: String,

        /// Display name of the council member
        #[arg(long, default_value = "")]
        full_name: String,

        #[arg(long, default_value = "")]
        party: String,

        #[arg(long, default_value = "")]
        borough: String,
    },

    /// Print a user's API token
    Token {
        username: String,
    },

    /// Replace a user's API token and print the new one
    RotateToken {
        username: String,
    },
}
