mod cmd;
mod output;
mod ui;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "standup",
    about = "Standup companion — rotate your sprint team through a timed speaker queue",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the standup meeting in the terminal
    Run {
        /// Seconds each speaker gets before the countdown auto-advances
        #[arg(long, default_value = "60")]
        seconds: u32,

        /// Keep the fetched speaker order instead of shuffling at start
        #[arg(long)]
        no_shuffle: bool,

        /// Seed the shuffle for a reproducible speaker order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Start the HTTP API server
    Serve {
        /// Port to listen on (default: PORT env var, then 3001)
        #[arg(long)]
        port: Option<u16>,
    },

    /// List the open sprint's tickets
    Issues {
        /// Output as JSON
        #[arg(long, short = 'j')]
        json: bool,
    },

    /// List the people with assigned sprint tickets
    People {
        /// Output as JSON
        #[arg(long, short = 'j')]
        json: bool,
    },

    /// Print the sprint board URL
    Board {
        /// Open the board in the browser as well
        #[arg(long)]
        open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Run {
            seconds,
            no_shuffle,
            seed,
        } => cmd::run::run(seconds, no_shuffle, seed),
        Commands::Serve { port } => cmd::serve::run(port),
        Commands::Issues { json } => cmd::issues::run(json),
        Commands::People { json } => cmd::people::run(json),
        Commands::Board { open } => cmd::board::run(open),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
