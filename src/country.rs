use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct Country {
  pub(crate) flag_url: String,
  pub(crate) name_ru: String,
  pub(crate) iso_code2: String,
  pub(crate) iso_code3: String,
}

impl Country {
  // Upstream flag URLs are protocol-relative.
  pub(crate) fn flag_src(&self) -> String {
    format!("https:{}", self.flag_url)
  }
}
