use {super::*, tokio::runtime::Runtime};

#[derive(Parser)]
pub struct Fetch {
  #[arg(
    long,
    help = "Fetch country list from <URL>.",
    default_value = Loader::DEFAULT_URL
  )]
  url: String,
  #[arg(
    long,
    help = "Omit country <ISO_CODE2> from the list.",
    value_name = "<ISO_CODE2>",
    num_args = 0..
  )]
  without: Vec<String>,
}

impl Fetch {
  pub fn run(self) -> Result {
    let loader = Loader::new(self.url);

    let countries = Runtime::new()
      .context(error::Runtime)?
      .block_on(loader.load())?;

    let mut roster = Roster::new(countries);

    for iso_code2 in &self.without {
      roster.remove(iso_code2);
    }

    println!(
      "{}",
      serde_json::to_string_pretty(roster.countries()).unwrap()
    );

    Ok(())
  }
}
