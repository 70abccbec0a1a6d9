use super::*;

// Lifecycle of a rendered list entry. `Removed` is terminal: a key that
// reappears re-enters at `Present` as a new element, it never resumes an
// exit in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Phase {
  Present,
  Exiting { until: Instant },
  Removed,
}

impl Phase {
  pub(crate) fn rendered(self) -> bool {
    !matches!(self, Self::Removed)
  }
}
