//! # Toolhub
//!
//! Command-line hub for a handful of AI and finance helpers: chat, multimodal
//! questions, image generation, tweet drafting with a local history, news search,
//! article writing, and a mortgage calculator.

mod cli;
mod core;
mod run;

use clap::Parser;
use dotenv::dotenv;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);
    run::dispatch(args).await;
}
