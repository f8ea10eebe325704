mod app;
mod config;
mod error;
mod events;
mod logger;
mod nexum;
mod session;
mod state;
mod ui;
mod utils;

use anyhow::{anyhow, Result};
use app::{App, Launch};
use clap::{App as ClapApp, Arg};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new("nexum-tui")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A terminal user interface for the Nexum recruitment board")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("apply")
                .short("a")
                .long("apply")
                .value_name("SLUG")
                .help("Open the public application form for a company")
                .takes_value(true),
        )
        .get_matches();

    // The terminal belongs to the UI; logs go to an in-memory buffer shown
    // by the debug overlay.
    let log_buffer = logger::init().map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    let launch = match matches.value_of("apply") {
        Some(slug) => Launch::Apply(slug.to_string()),
        None => Launch::Panel,
    };

    App::start(config, launch, log_buffer).await
}
