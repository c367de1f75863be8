pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod llm;
pub mod message;
pub mod models;
pub mod mortgage;
pub mod news;
pub mod oauth;
pub mod paths;
pub mod post;
pub mod prompt;
pub mod session;
pub mod tweets;
pub mod util;
