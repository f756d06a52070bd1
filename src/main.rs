use anyhow::Result;
use clap::{Parser, Subcommand};
use smartrecipe::cli;
use smartrecipe_feedback::FeedbackSource;

/// smartrecipe - Recipe recommendations
#[derive(Parser)]
#[command(name = "smartrecipe")]
#[command(about = "Collaborative, content-based and hybrid recipe recommendations", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print recommendations as JSON
    Recommend {
        #[command(subcommand)]
        mode: cli::recommend::Mode,
    },
    /// List users known to the collaborative model
    Users,
    /// List selectable ingredients
    Vocabulary,
    /// Print sizes of the recommendation artifacts
    Stats,
    /// Append a rating to the feedback log
    Feedback {
        #[arg(long)]
        user: i64,

        #[arg(long)]
        title: String,

        /// Rating between 1 and 5
        #[arg(long)]
        rating: u8,

        /// Collaborative, Content-Based, Hybrid or AI
        #[arg(long)]
        source: FeedbackSource,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = smartrecipe::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    smartrecipe::observability::init_observability(
        "smartrecipe",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Recommend { mode } => cli::recommend::recommend(config, mode),
        Commands::Users => cli::recommend::users(config),
        Commands::Vocabulary => cli::recommend::vocabulary(config),
        Commands::Stats => cli::recommend::summary(config),
        Commands::Feedback {
            user,
            title,
            rating,
            source,
        } => cli::feedback::submit(config, user, title, rating, source),
    }
}
