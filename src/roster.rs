use super::*;

#[derive(Debug)]
pub(crate) struct Roster {
  countries: Vec<Country>,
}

impl Roster {
  // Duplicate keys keep the first occurrence, so every surviving entry
  // retains its upstream position.
  pub(crate) fn new(countries: Vec<Country>) -> Self {
    let mut seen = BTreeSet::new();
    let mut deduped = Vec::with_capacity(countries.len());

    for country in countries {
      if !seen.insert(country.iso_code2.clone()) {
        log::warn!("dropping duplicate country `{}`", country.iso_code2);
        continue;
      }

      deduped.push(country);
    }

    Self { countries: deduped }
  }

  pub(crate) fn remove(&mut self, iso_code2: &str) {
    self
      .countries
      .retain(|country| country.iso_code2 != iso_code2);
  }

  pub(crate) fn countries(&self) -> &[Country] {
    &self.countries
  }

  pub(crate) fn len(&self) -> usize {
    self.countries.len()
  }
}
