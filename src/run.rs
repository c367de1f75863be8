//! Logger init and command dispatch.

use std::io;

use clap::CommandFactory;

use crate::cli::{self, Args, Commands, TweetSubcommand};
use crate::core;
use crate::core::cli as commands;

/// Initialize env_logger. The interactive chat logs to a file so log lines don't
/// interleave with the conversation.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if matches!(args.command, Commands::Chat { .. }) {
        let log_path = core::paths::cache_dir().and_then(|d| {
            std::fs::create_dir_all(&d).ok()?;
            Some(d.join(format!("{}.log", core::app::NAME)))
        });
        if let Some(path) = log_path
            && let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Run the parsed command to completion.
pub async fn dispatch(args: Args) {
    match args.command {
        Commands::Chat { model } => commands::run_chat(model.as_deref()).await,
        Commands::Ask {
            model,
            prompt,
            image,
        } => commands::run_ask(model.as_deref(), prompt.as_deref(), image.as_deref()).await,
        Commands::Image {
            model,
            prompt,
            size,
            out,
        } => commands::run_image(model.as_deref(), &prompt, &size, out.as_deref()).await,
        Commands::Tweet { subcommand } => match subcommand {
            TweetSubcommand::Generate {
                model,
                personality,
                content_type,
                format,
                post,
            } => {
                commands::run_tweet_generate(commands::TweetGenerate {
                    model: model.as_deref(),
                    personality: &personality,
                    content_type: &content_type,
                    format: &format,
                    post,
                })
                .await
            }
            TweetSubcommand::List { limit } => commands::run_tweet_list(limit),
            TweetSubcommand::Show { id } => commands::run_tweet_show(id),
            TweetSubcommand::MarkPosted { id, url } => commands::run_tweet_mark_posted(id, &url),
        },
        Commands::News { query } => commands::run_news(&query).await,
        Commands::Article {
            model,
            topic,
            persona,
            context,
        } => {
            commands::run_article(
                model.as_deref(),
                &topic,
                persona.as_deref(),
                context.as_deref(),
            )
            .await
        }
        Commands::Mortgage {
            home_value,
            deposit,
            rate,
            years,
            schedule,
        } => commands::run_mortgage(home_value, deposit, rate, years, schedule),
        Commands::Models { kind, query } => commands::run_models(kind, query.as_deref()),
        Commands::Config { open } => commands::run_config(open.as_deref()),
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            cli::generate(shell, &mut cmd, core::app::NAME, &mut io::stdout());
        }
    }
}
