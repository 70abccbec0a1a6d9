use super::*;

#[derive(Debug)]
pub(crate) struct Loader {
  url: String,
}

impl Loader {
  pub(crate) const DEFAULT_URL: &'static str = "https://gist.githubusercontent.com/sanchezzzhak/8606e9607396fb5f8216/raw/39de29950198a7332652e1e8224f988b2e94b166/ISO3166_RU.json";

  pub(crate) fn new(url: String) -> Self {
    Self { url }
  }

  pub(crate) async fn load(&self) -> Result<Vec<Country>> {
    let response = reqwest::get(&self.url)
      .await
      .context(error::Fetch { url: &self.url })?;

    let status = response.status();

    ensure!(
      status.is_success(),
      error::Status {
        status,
        url: &self.url,
      }
    );

    let body = response
      .text()
      .await
      .context(error::Fetch { url: &self.url })?;

    let countries: Vec<Country> =
      serde_json::from_str(&body).context(error::Parse { url: &self.url })?;

    log::debug!("fetched {} countries from `{}`", countries.len(), self.url);

    Ok(countries)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn load() {
    let loader = Loader::new(fixture(StatusCode::OK, COUNTRIES).await);

    let countries = loader.load().await.unwrap();

    assert_eq!(
      countries
        .iter()
        .map(|country| country.iso_code2.as_str())
        .collect::<Vec<&str>>(),
      ["US", "FR", "DE"],
    );
  }

  #[tokio::test]
  async fn load_surfaces_status_errors() {
    let loader = Loader::new(fixture(StatusCode::INTERNAL_SERVER_ERROR, "").await);

    assert_matches!(
      loader.load().await.unwrap_err(),
      Error::Status { status, .. }
      if status == StatusCode::INTERNAL_SERVER_ERROR,
    );
  }

  #[tokio::test]
  async fn load_surfaces_non_array_bodies() {
    let loader = Loader::new(fixture(StatusCode::OK, r#"{"countries":[]}"#).await);

    assert_matches!(loader.load().await.unwrap_err(), Error::Parse { .. });
  }

  #[tokio::test]
  async fn load_surfaces_malformed_json() {
    let loader = Loader::new(fixture(StatusCode::OK, "[{").await);

    assert_matches!(loader.load().await.unwrap_err(), Error::Parse { .. });
  }

  #[tokio::test]
  async fn load_surfaces_transport_errors() {
    let url = {
      let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
      format!("http://{}/countries.json", listener.local_addr().unwrap())
    };

    let loader = Loader::new(url);

    assert_matches!(loader.load().await.unwrap_err(), Error::Fetch { .. });
  }
}
