// src/main.rs

use anyhow::Result;
use ringlist::commands;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    commands::run_cli()
}
