use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sentiment")]
#[command(
    author,
    version,
    about = "Terminal dashboard for a sentiment scoring service"
)]
pub struct Cli {
    /// Configuration file path
    #[clap(short, long, global = true, default_value = "sentiment.toml")]
    pub config: String,

    /// Override the scoring service base URL from the configuration file
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Override both request timeouts, in seconds
    #[clap(long, global = true)]
    pub timeout: Option<u64>,

    /// Print the session snapshot as JSON instead of the rendered dashboard
    #[clap(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Enable verbose output with debug logging
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[clap(long, default_value_t = false)]
        force: bool,
    },

    /// Analyze one piece of text and show the refreshed dashboard
    Analyze {
        /// Text to score
        text: String,
    },

    /// Show the analysis history and sentiment distribution
    History,

    /// Run the interactive dashboard
    Dashboard,
}
