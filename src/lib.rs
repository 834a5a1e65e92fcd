use std::path::PathBuf;

use clap::Parser;

pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod framework;
pub mod handlers;
pub mod logging;
pub mod schedule;
pub mod strategy;

#[derive(Parser)]
pub struct Args {
    #[clap(short, long, default_value = "config.json")]
    /// Path to the configuration file
    pub config: PathBuf,
}
