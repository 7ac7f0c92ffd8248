use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Status dashboard and control client for a Syncthing-compatible daemon.
///
/// Without a command the folder and device dashboard is rendered. API key
/// and target resolve from flags, then SYNCSTAT_APIKEY / APIKEY and
/// SYNCSTAT_TARGET, then the daemon's own config.xml.
#[derive(Debug, Parser)]
#[command(name = "syncstat", version)]
pub struct Cli {
    /// Daemon API key
    #[arg(long)]
    pub api_key: Option<String>,

    /// Daemon base URL, e.g. http://127.0.0.1:8384
    #[arg(long)]
    pub target: Option<String>,

    /// Daemon home directory to read config.xml from (skips the standard
    /// location probe)
    #[arg(long)]
    pub homedir: Option<PathBuf>,

    /// Accept invalid or self-signed TLS certificates
    #[arg(long)]
    pub ignore_certs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the daemon's recent log
    Log,
    /// Restart the daemon
    Restart,
    /// Shut the daemon down
    Shutdown,
    /// Reset the daemon's database / file index
    #[command(name = "reset_db")]
    ResetDb,
    /// Print errors visible in the daemon's web UI
    Errors,
    /// Clear the daemon's error log
    #[command(name = "clear_errors")]
    ClearErrors,
    /// Post a custom error message to the daemon's error log
    #[command(name = "post_error")]
    PostError { message: String },
    /// Print scan/pull errors for one folder
    #[command(name = "folder_errors")]
    FolderErrors { label: String },
    /// Pause a folder
    #[command(name = "folder_pause")]
    FolderPause { label: String },
    /// Resume a paused folder
    #[command(name = "folder_resume")]
    FolderResume { label: String },
    /// Print this node's device ID
    Id,
    /// Rescan a folder, or "all" for every folder
    Rescan { label: String },
    /// Override remote changes for a send-only folder
    Override { label: String },
    /// Revert local changes for a receive-only folder
    Revert { label: String },
    /// Print the latest daemon events as raw JSON, optionally filtered by a
    /// comma-separated list of event types
    Events { types: Option<String> },
    /// Emit the dashboard as a JSON document
    #[command(name = "json_dump")]
    JsonDump,
}
