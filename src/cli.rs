//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::core::models::ModelKind;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  toolhub chat                                  Chat with the default model
  toolhub ask --prompt \"what is this?\" --image cat.jpg
  toolhub image --prompt \"a red fox\" --size 1792x1024
  toolhub tweet generate --personality \"Calm Expert\" --content-type \"Tips and How-Tos\"
  toolhub tweet list --limit 10                 Saved tweets, newest first
  toolhub news \"interest rates\"                 Search recent articles
  toolhub mortgage --home-value 500000 --deposit 100000 --rate 5.5 --years 30
  toolhub config --open Gemini                  Open the Gemini key page
  toolhub completions bash                      Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "AI tool hub: chat, image generation, tweets, news and finance helpers",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive chat (/model <id>, /reset, /exit)
    Chat {
        /// Text model ID (see `toolhub models`)
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Ask a multimodal model about text and/or an image
    Ask {
        #[arg(short, long)]
        model: Option<String>,
        /// Question to ask
        #[arg(short, long)]
        prompt: Option<String>,
        /// Image file to attach
        #[arg(short, long)]
        image: Option<PathBuf>,
    },
    /// Generate an image from a prompt
    Image {
        #[arg(short, long)]
        model: Option<String>,
        #[arg(short, long)]
        prompt: String,
        /// 1024x1024, 1792x1024 or 1024x1792
        #[arg(short, long, default_value = "1024x1024")]
        size: String,
        /// Output file (default: derived from the prompt)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Generate and manage tweets
    Tweet {
        #[command(subcommand)]
        subcommand: TweetSubcommand,
    },
    /// Search news articles
    News {
        /// Topic to search for
        query: String,
    },
    /// Write a short explanatory article
    Article {
        #[arg(short, long)]
        model: Option<String>,
        #[arg(short, long)]
        topic: String,
        /// Voice to write in
        #[arg(long)]
        persona: Option<String>,
        /// Source material the article should draw on
        #[arg(long)]
        context: Option<String>,
    },
    /// Mortgage repayment calculator
    Mortgage {
        #[arg(long)]
        home_value: f64,
        #[arg(long, default_value_t = 0.0)]
        deposit: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        /// Loan term in years (1 to 50)
        #[arg(long, default_value_t = 30)]
        years: u32,
        /// Print the year-by-year remaining balance
        #[arg(long)]
        schedule: bool,
    },
    /// List the models offered for a command
    Models {
        #[arg(long, value_enum, default_value_t = ModelKind::Text)]
        kind: ModelKind,
        /// Filter models by id or name
        #[arg(long)]
        query: Option<String>,
    },
    /// Show config paths and API key status
    Config {
        /// Open the key page for an account in the browser (OpenAI, Gemini, News, ...)
        #[arg(long, value_name = "ACCOUNT")]
        open: Option<String>,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum TweetSubcommand {
    /// Generate a tweet and save it
    Generate {
        #[arg(short, long)]
        model: Option<String>,
        #[arg(long)]
        personality: String,
        #[arg(long)]
        content_type: String,
        #[arg(long, default_value = "Text")]
        format: String,
        /// Post to X after generating
        #[arg(long)]
        post: bool,
    },
    /// List saved tweets, newest first
    List {
        /// Maximum number of tweets to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one saved tweet
    Show { id: i64 },
    /// Record the URL of a tweet posted by hand
    MarkPosted { id: i64, url: String },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
