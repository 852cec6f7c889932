//! The interactive prompt: pick a state, pick a site, see what is nearby.
use std::{
    fmt::{self, Display, Formatter},
    io::{BufRead, Write},
};

use crate::{
    config::Config,
    parse::{normalize_state_name, NationalSite, StateDirectory},
    places::{PlacesClient, SearchResponse},
    sites::sites_for_state,
};

const EXIT: &str = "exit";
const BACK: &str = "back";
const RULE: &str = "--------------------------------------------";

/// A reply at the site prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Back,
    Exit,
    /// Zero-based index into the listed sites.
    Site(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    NotANumber(String),
    OutOfRange { choice: usize, len: usize },
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(input) => write!(f, "`{input}` is not a number"),
            Self::OutOfRange { choice, len } => {
                write!(f, "{choice} is not between 1 and {len}")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}

impl Choice {
    /// Parses `back`, `exit`, or a 1-based index no greater than `len`.
    pub fn parse(input: &str, len: usize) -> Result<Self, InvalidInput> {
        let input = input.trim();
        if input.eq_ignore_ascii_case(BACK) {
            return Ok(Self::Back);
        }
        if input.eq_ignore_ascii_case(EXIT) {
            return Ok(Self::Exit);
        }
        let choice: usize = input
            .parse()
            .map_err(|_| InvalidInput::NotANumber(input.to_string()))?;
        if choice == 0 || choice > len {
            return Err(InvalidInput::OutOfRange { choice, len });
        }
        Ok(Self::Site(choice - 1))
    }
}

enum Flow {
    Back,
    Exit,
}

pub struct Repl<'a> {
    client: &'a reqwest::Client,
    config: &'a Config,
    directory: &'a StateDirectory,
    places: &'a PlacesClient,
}

impl<'a> Repl<'a> {
    pub const fn new(
        client: &'a reqwest::Client,
        config: &'a Config,
        directory: &'a StateDirectory,
        places: &'a PlacesClient,
    ) -> Self {
        Self {
            client,
            config,
            directory,
            places,
        }
    }

    /// Runs until `exit` or end of input. Failing to load a state's sites is
    /// fatal; nearby-place failures and bad choices are reported and re-prompted.
    pub async fn run(&self, mut input: impl BufRead, mut output: impl Write) -> crate::Result<()> {
        loop {
            writeln!(output, "Enter a state name or \"{EXIT}\":")?;
            output.flush()?;
            let Some(line) = read_line(&mut input)? else {
                return Ok(());
            };
            let state = normalize_state_name(&line);
            match self.directory.get(&state) {
                Some(state_url) => {
                    let sites = sites_for_state(self.client, self.config, state_url).await?;
                    writeln!(output, "{RULE}")?;
                    writeln!(output, "List of national sites in {}", capitalize(&state))?;
                    writeln!(output, "{RULE}")?;
                    if let Flow::Exit = self.list_sites(&sites, &mut input, &mut output).await? {
                        return Ok(());
                    }
                }
                None if state == EXIT => return Ok(()),
                None => writeln!(output, "State not found")?,
            }
        }
    }

    async fn list_sites(
        &self,
        sites: &[NationalSite],
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> crate::Result<Flow> {
        loop {
            for (i, site) in sites.iter().enumerate() {
                writeln!(output, "[{}] {}", i + 1, site.info())?;
            }
            writeln!(
                output,
                "Choose the number for detail search or \"{EXIT}\" or \"{BACK}\""
            )?;
            output.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(Flow::Exit);
            };
            match Choice::parse(&line, sites.len()) {
                Ok(Choice::Back) => return Ok(Flow::Back),
                Ok(Choice::Exit) => return Ok(Flow::Exit),
                Ok(Choice::Site(index)) => self.show_nearby(&sites[index], output).await?,
                Err(e) => {
                    log::debug!("Invalid choice: {e}");
                    writeln!(output, "[Error] Invalid input")?;
                }
            }
        }
    }

    async fn show_nearby(&self, site: &NationalSite, output: &mut impl Write) -> crate::Result<()> {
        let places = self
            .places
            .nearby_places(site)
            .await
            .and_then(SearchResponse::into_results);
        match places {
            Ok(places) => {
                writeln!(output, "Places near {}:", site.name())?;
                for place in places {
                    writeln!(output, "{place}")?;
                }
            }
            Err(e) => {
                tracing::warn!("No places near {}: {e}", site.name());
                writeln!(output, "No places nearby")?;
            }
        }
        Ok(())
    }
}

/// `None` at end of input.
fn read_line(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// First letter upper case, the rest as given: "new york" -> "New york".
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
