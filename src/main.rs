#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod fetch;
mod parse;
mod places;
mod repl;
mod sites;

use std::io;

use crate::{config::Config, fetch::make_client, places::PlacesClient, repl::Repl};

pub use error::{Error, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Config::from_env()?;
    log::debug!("{config:?}");
    let client = make_client(config.timeout());
    let directory = sites::build_state_directory(&client, &config).await?;
    let places = PlacesClient::from_config(&config);
    let repl = Repl::new(&client, &config, &directory, &places);
    repl.run(io::stdin().lock(), io::stdout().lock()).await?;
    Ok(())
}
