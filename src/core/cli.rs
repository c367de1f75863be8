//! Command handlers. Each prints plain text and exits with status 1 on failure.

use std::fmt::Display;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::core::config::{NewsConfig, Provider, ProviderConfig, XConfig};
use crate::core::llm::{self, ImageInput, InputError};
use crate::core::message;
use crate::core::models::{self, Model, ModelKind};
use crate::core::mortgage;
use crate::core::news::NewsClient;
use crate::core::paths;
use crate::core::post::XPoster;
use crate::core::prompt::{self, TweetOptions};
use crate::core::session::Session;
use crate::core::tweets::{NewTweet, POSTED_MARKER, TweetStore};

/// Terminal width used when wrapping long text.
const WRAP_WIDTH: usize = 88;

fn fail(e: impl Display) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}

fn model_or_exit(kind: ModelKind, id: Option<&str>) -> Model {
    models::resolve(kind, id)
        .unwrap_or_else(|| fail(InputError::UnknownModel(id.unwrap_or_default().to_string())))
}

fn open_store() -> TweetStore {
    let store = TweetStore::open_default().unwrap_or_else(|e| fail(e));
    log::debug!("Tweet store at {}", store.path().display());
    store
}

fn display_dir(p: Option<PathBuf>) -> String {
    p.map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn key_status(set: bool) -> &'static str {
    if set { "set ✓" } else { "not set" }
}

/// Run the `config` command: paths and which credentials are configured.
///
/// With `open`, show the key page of the named account instead: `News` or any
/// provider name (`OpenAI`, `Gemini`, `DALL-E 3`, ...).
pub fn run_config(open: Option<&str>) {
    let news = NewsConfig::from_env();

    if let Some(name) = open {
        let url = if name.eq_ignore_ascii_case("news") {
            Some(news.url)
        } else {
            ProviderConfig::from_env(name).unwrap_or_else(|e| fail(e)).url
        };
        let Some(url) = url else {
            fail("No help link configured");
        };
        println!("Opening {}", url);
        if let Err(e) = opener::open(&url) {
            fail(e);
        }
        return;
    }

    let load = |p: Provider| {
        ProviderConfig::from_env(p.display_name()).unwrap_or_else(|e| fail(e))
    };
    let openai = load(Provider::OpenAi);
    let gemini = load(Provider::Gemini);
    let x = XConfig::from_env();
    println!("Config:   {}", display_dir(paths::config_dir()));
    println!("Cache:    {}", display_dir(paths::cache_dir()));
    println!("Tweets:   {}", display_dir(paths::tweets_db_path()));
    for c in [&openai, &gemini] {
        let base = c
            .base_url
            .as_deref()
            .or(c.provider.default_base_url())
            .unwrap_or("(base URL not set)");
        println!(
            "{:<9} {} ({}) {}",
            format!("{}:", c.name),
            key_status(c.key.is_some()),
            c.provider.key_env_var(),
            base
        );
    }
    println!(
        "News:     {} ({})",
        key_status(news.key.is_some()),
        NewsConfig::KEY_ENV
    );
    println!(
        "X:        {} ({})",
        key_status(x.has_credentials()),
        XConfig::CREDENTIAL_ENVS.join(", ")
    );
}

/// Run the `models` command: list the option set for a command kind.
pub fn run_models(kind: ModelKind, query: Option<&str>) {
    let options = models::options(kind);
    let filtered = models::filter_models(options, query.unwrap_or(""));
    if filtered.is_empty() {
        println!("No models found.");
        return;
    }

    let id_w = filtered.iter().map(|m| m.model_name.len()).max().unwrap_or(20).max(20);
    let name_w = filtered.iter().map(|m| m.name.len()).max().unwrap_or(20).max(20);
    println!("{:<id_w$}  {:<name_w$}  Provider", "ID", "Name");
    println!("{}  {}  --------", "-".repeat(id_w), "-".repeat(name_w));
    for m in &filtered {
        println!("{:<id_w$}  {:<name_w$}  {}", m.model_name, m.name, m.provider);
    }
    println!("\n{} model(s) listed", filtered.len());
}

/// Run the `chat` command: a line-based conversation on stdin.
///
/// `/model <id>` switches model, `/reset` clears the conversation, `/exit` quits.
pub async fn run_chat(model: Option<&str>) {
    let mut model = model_or_exit(ModelKind::Text, model);
    let mut session = Session::from_env();
    if let Some(greeting) = session.history().first().and_then(message::extract_content) {
        println!("{}", greeting);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("[{}] > ", model.model_name);
        let _ = io::stdout().flush();
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => fail(e),
        };
        let line = line.trim();
        match line {
            "" => continue,
            "/exit" | "/quit" => break,
            "/reset" => {
                session.reset();
                println!("Conversation cleared.");
                continue;
            }
            _ => {}
        }
        if let Some(id) = line.strip_prefix("/model") {
            match models::find(ModelKind::Text, id.trim()) {
                Some(m) => {
                    model = m;
                    println!("Using {}", m.name);
                }
                None => eprintln!("Error: {}", InputError::UnknownModel(id.trim().to_string())),
            }
            continue;
        }

        match session.send(&model, line).await {
            Ok(reply) => println!("{}\n", reply),
            Err(e) if e.is_transient() => eprintln!("Error: {} (try again in a moment)", e),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

/// Run the `ask` command: one multimodal query with optional image.
pub async fn run_ask(model: Option<&str>, prompt: Option<&str>, image: Option<&Path>) {
    let model = model_or_exit(ModelKind::Multimodal, model);
    let image = image.map(|p| ImageInput::from_path(p).unwrap_or_else(|e| fail(e)));
    let parts = llm::multimodal_parts(prompt, image.as_ref()).unwrap_or_else(|e| fail(e));

    let mut session = Session::from_env();
    let client = session.client_for(&model).unwrap_or_else(|e| fail(e));
    match llm::ask(&client, model.model_name, parts).await {
        Ok(answer) => println!("{}", answer),
        Err(e) => fail(e),
    }
}

/// Run the `image` command: generate one image and write it to disk.
pub async fn run_image(model: Option<&str>, prompt: &str, size: &str, out: Option<&Path>) {
    let model = model_or_exit(ModelKind::Image, model);
    llm::validate_request(prompt, size).unwrap_or_else(|e| fail(e));

    let mut session = Session::from_env();
    let client = session.client_for(&model).unwrap_or_else(|e| fail(e));
    let bytes = llm::generate_image(&client, model.model_name, prompt, size)
        .await
        .unwrap_or_else(|e| fail(e));

    let path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(llm::default_file_name(prompt)));
    if let Err(e) = std::fs::write(&path, &bytes) {
        fail(e);
    }
    println!("Saved {} bytes to {}", bytes.len(), path.display());
}

/// Options for `tweet generate`.
pub struct TweetGenerate<'a> {
    pub model: Option<&'a str>,
    pub personality: &'a str,
    pub content_type: &'a str,
    pub format: &'a str,
    pub post: bool,
}

/// Run the `tweet generate` command: generate, optionally post, then record the tweet.
pub async fn run_tweet_generate(args: TweetGenerate<'_>) {
    let model = model_or_exit(ModelKind::Text, args.model);
    let options = TweetOptions::parse(args.personality, args.content_type, args.format)
        .unwrap_or_else(|e| fail(e));

    let mut session = Session::from_env();
    let client = session.client_for(&model).unwrap_or_else(|e| fail(e));
    let text = llm::chat(
        &client,
        model.model_name,
        &[message::text("user", &options.prompt())],
    )
    .await
    .unwrap_or_else(|e| fail(e));
    let text = text.trim().to_string();
    println!("{}\n", text);

    let mut posted_url = None;
    let mut post_error = None;
    if args.post {
        match XPoster::new(XConfig::from_env()).post(&text).await {
            Ok(Some(url)) => {
                println!("Posted: {}", url);
                posted_url = Some(url);
            }
            Ok(None) => {
                println!("Posted.");
                posted_url = Some(POSTED_MARKER.to_string());
            }
            Err(e) => post_error = Some(e),
        }
    }

    let store = open_store();
    let tweet = NewTweet {
        model_name: model.model_name.to_string(),
        personality: options.personality.to_string(),
        content_type: options.content_type.to_string(),
        content_format: options.content_format.to_string(),
        tweet_text: text,
        posted_url,
    };
    let Some(id) = store.add(&tweet) else {
        fail("Failed to save tweet to the database");
    };
    if let Some(e) = post_error {
        fail(format!("Tweet #{} saved unposted: {}", id, e));
    }
    println!("Saved as tweet #{}", id);
}

/// Run the `tweet list` command: newest first.
pub fn run_tweet_list(limit: Option<usize>) {
    let Some(tweets) = open_store().list_all() else {
        fail("Failed to read tweets from the database");
    };
    if tweets.is_empty() {
        println!("No tweets saved yet.");
        return;
    }
    let take = limit.unwrap_or(tweets.len());
    for t in tweets.iter().take(take) {
        let status = if t.is_posted() { "posted" } else { "draft" };
        println!(
            "{}\t{}\t{}\t{}\t{}",
            t.id,
            t.created_at.format("%Y-%m-%d %H:%M"),
            status,
            t.model_name,
            t.preview(60)
        );
    }
}

/// Run the `tweet show` command.
pub fn run_tweet_show(id: i64) {
    let Some(t) = open_store().get(id) else {
        fail(format!("No tweet with id {}", id));
    };
    println!("Tweet #{}", t.id);
    println!("Created:     {}", t.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("Model:       {}", t.model_name);
    println!("Personality: {}", t.personality);
    println!("Type:        {}", t.content_type);
    println!("Format:      {}", t.content_format);
    println!("Posted:      {}", t.posted_url.as_deref().unwrap_or("no"));
    println!();
    println!("{}", textwrap::fill(&t.tweet_text, WRAP_WIDTH));
}

/// Run the `tweet mark-posted` command.
pub fn run_tweet_mark_posted(id: i64, url: &str) {
    if open_store().update_posted_url(id, url) {
        println!("Tweet #{} marked as posted.", id);
    } else {
        fail(format!("Could not update tweet {}", id));
    }
}

/// Run the `news` command: search and print articles.
pub async fn run_news(query: &str) {
    let articles = NewsClient::new(NewsConfig::from_env())
        .search(query)
        .await
        .unwrap_or_else(|e| fail(e));
    if articles.is_empty() {
        println!("No articles found.");
        return;
    }
    for a in &articles {
        println!("{}", a.title);
        let meta: Vec<&str> = [a.source.as_deref(), a.published_at.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !meta.is_empty() {
            println!("  {}", meta.join(" | "));
        }
        if let Some(d) = a.description.as_deref().filter(|d| !d.is_empty()) {
            for line in textwrap::wrap(d, WRAP_WIDTH - 2) {
                println!("  {}", line);
            }
        }
        if let Some(image) = a.image_url.as_deref() {
            println!("  Image: {}", image);
        }
        println!("  {}\n", a.url);
    }
    println!("{} article(s)", articles.len());
}

/// Run the `article` command: write a short article on a topic.
pub async fn run_article(model: Option<&str>, topic: &str, persona: Option<&str>, context: Option<&str>) {
    let model = model_or_exit(ModelKind::Text, model);
    let prompt = prompt::article_prompt(topic, persona, context).unwrap_or_else(|e| fail(e));

    let mut session = Session::from_env();
    let client = session.client_for(&model).unwrap_or_else(|e| fail(e));
    match llm::chat(&client, model.model_name, &[message::text("user", &prompt)]).await {
        Ok(article) => println!("{}", article),
        Err(e) => fail(e),
    }
}

/// Run the `mortgage` command: repayment summary and optional yearly schedule.
pub fn run_mortgage(home_value: f64, deposit: f64, rate: f64, years: u32, schedule: bool) {
    let summary = match mortgage::summary(home_value, deposit, rate, years) {
        Ok(Some(s)) => s,
        Ok(None) => {
            println!("Nothing to borrow: the deposit covers the home value.");
            return;
        }
        Err(e) => fail(e),
    };

    println!("Loan amount:     {}", mortgage::format_amount(summary.loan_amount));
    println!("Monthly payment: {}", mortgage::format_amount(summary.monthly_payment));
    println!("Total payments:  {}", mortgage::format_amount(summary.total_payments));
    println!("Total interest:  {}", mortgage::format_amount(summary.total_interest));

    if schedule {
        let rows = mortgage::schedule(&summary, rate);
        println!("\n{:>4}  {:>16}", "Year", "Balance");
        for (year, balance) in mortgage::yearly_balances(&rows) {
            println!("{:>4}  {:>16}", year, mortgage::format_amount(balance));
        }
    }
}
