use super::*;

#[derive(Default)]
pub(crate) struct Transitions {
  phases: BTreeMap<String, Phase>,
}

#[allow(unused)]
impl Transitions {
  pub(crate) const EXIT_DURATION: Duration = Duration::from_millis(400);
  pub(crate) const EXIT_OFFSET: u32 = 100;

  // Reconcile tracked entries with the roster: keys in the roster are
  // `Present`, keys that just left it begin exiting, keys already exiting
  // keep their original deadline, and `Removed` keys are purged.
  pub(crate) fn observe(&mut self, roster: &Roster, now: Instant) {
    self.phases.retain(|_, phase| *phase != Phase::Removed);

    for phase in self.phases.values_mut() {
      if *phase == Phase::Present {
        *phase = Phase::Exiting {
          until: now + Self::EXIT_DURATION,
        };
      }
    }

    for country in roster.countries() {
      self.phases.insert(country.iso_code2.clone(), Phase::Present);
    }
  }

  pub(crate) fn tick(&mut self, now: Instant) {
    for phase in self.phases.values_mut() {
      if let Phase::Exiting { until } = phase {
        if *until <= now {
          *phase = Phase::Removed;
        }
      }
    }
  }

  pub(crate) fn phase(&self, iso_code2: &str) -> Option<Phase> {
    self.phases.get(iso_code2).copied()
  }

  pub(crate) fn is_rendered(&self, iso_code2: &str) -> bool {
    self
      .phases
      .get(iso_code2)
      .map(|phase| phase.rendered())
      .unwrap_or_default()
  }
}
