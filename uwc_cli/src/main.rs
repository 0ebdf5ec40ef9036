//! CLI performing a single schedule fetch, writing `calendar.ics` to the
//! current directory or printing the text summary.

use std::{env::current_dir, fs::write};

use anyhow::Result;
use clap::Parser;
use uwc_core::{calendar, collection_client, config::Config, text};

#[derive(Debug, Parser)]
pub struct Arguments {
    /// the property reference number, falls back to the UPRN environment variable
    pub uprn: Option<String>,
    /// print the schedule as text instead of writing calendar.ics
    #[arg(long)]
    pub text: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Arguments::parse();
    let config = Config::from_env();
    let uprn = args.uprn.or(config.uprn);
    let client = collection_client::http_client()?;
    let schedule = collection_client::get(&client, &config.base_url, uprn.as_deref()).await?;
    if args.text {
        println!("{}", text::render(&schedule));
    } else {
        let mut path = current_dir()?;
        path.push("calendar.ics");
        write(path, calendar::render(&schedule))?;
    }
    Ok(())
}
