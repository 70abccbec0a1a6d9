use {
  self::{
    country::Country, error::Error, loader::Loader, phase::Phase, roster::Roster,
    subcommand::Subcommand, templates::CountriesHtml, transitions::Transitions,
  },
  axum::http::{header, StatusCode},
  boilerplate::Boilerplate,
  clap::Parser,
  libc::EXIT_FAILURE,
  mime_guess::{mime, Mime},
  rust_embed::RustEmbed,
  serde::{Deserialize, Serialize},
  snafu::{ensure, ErrorCompat, ResultExt, Snafu},
  std::{
    backtrace::{Backtrace, BacktraceStatus},
    collections::{BTreeMap, BTreeSet},
    io,
    net::SocketAddr,
    process,
    sync::Arc,
    time::{Duration, Instant},
  },
};


#[cfg(test)]
use test::*;

mod country;
mod error;
mod loader;
mod phase;
mod roster;
mod subcommand;
mod templates;
mod transitions;

type Result<T = (), E = Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  if let Err(err) = Subcommand::parse().run() {
    err.report();
    process::exit(EXIT_FAILURE)
  }
}
