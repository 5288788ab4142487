use anyhow::{anyhow, Result};
use clap::{App as ClapApp, Arg};
use feed_tui::{app::App, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("base-url")
                .long("base-url")
                .value_name("URL")
                .help("Base URL of the article API")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .short("n")
                .long("limit")
                .value_name("N")
                .help("Maximum number of articles to show")
                .takes_value(true),
        )
        .get_matches();

    let limit = match matches.value_of("limit") {
        Some(value) => Some(
            value
                .parse::<usize>()
                .map_err(|e| anyhow!("Invalid limit '{}': {}", value, e))?,
        ),
        None => None,
    };

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    config.apply_overrides(matches.value_of("base-url"), limit)?;
    App::start(config).await?;
    Ok(())
}
