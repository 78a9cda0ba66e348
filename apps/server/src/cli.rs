use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "goaltracker-server", version, about = "Track personal goals and their deadlines")]
pub struct Cli {
    /// SQLite database file (overrides GT_DB_PATH)
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the web server (default)
    Serve,
    /// Create the goal tables and exit
    Initdb,
}
