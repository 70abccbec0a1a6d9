use super::*;

#[derive(Boilerplate, Debug)]
pub(crate) struct CountriesHtml {
  pub(crate) roster: Roster,
}

impl CountriesHtml {
  pub(crate) fn exit_duration_millis(&self) -> u128 {
    Transitions::EXIT_DURATION.as_millis()
  }

  pub(crate) fn exit_offset(&self) -> u32 {
    Transitions::EXIT_OFFSET
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn page_lists_countries() {
    let html = CountriesHtml {
      roster: Roster::new(vec![country("US"), country("FR")]),
    }
    .to_string();

    assert!(html.contains("<title>Список стран</title>"));
    assert!(html.contains("data-iso-code2=\"US\""));
    assert!(html.contains("data-iso-code2=\"FR\""));
    assert!(html.contains("https://flags.example/fr.svg"));
    assert!(html.contains("Франция"));
    assert!(html.contains("Удалить"));
  }

  #[test]
  fn page_renders_empty_roster() {
    let html = CountriesHtml {
      roster: Roster::new(Vec::new()),
    }
    .to_string();

    assert!(html.contains("<ul class=countries"));
    assert!(!html.contains("<li "));
  }

  #[test]
  fn page_escapes_remote_strings() {
    let mut hostile = country("US");
    hostile.name_ru = "<script>alert(1)</script>".into();

    let html = CountriesHtml {
      roster: Roster::new(vec![hostile]),
    }
    .to_string();

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
  }

  #[test]
  fn page_emits_exit_timing() {
    let html = CountriesHtml {
      roster: Roster::new(Vec::new()),
    }
    .to_string();

    assert!(html.contains("--exit-duration: 400ms"));
    assert!(html.contains("--exit-offset: 100px"));
  }
}
