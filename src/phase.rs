use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Phase {
  Finished,
  InProgress,
  NotStarted,
}

impl Phase {
  pub(crate) fn of(progress: &Progress) -> Self {
    if progress.is_finished() {
      Self::Finished
    } else if progress.is_started() {
      Self::InProgress
    } else {
      Self::NotStarted
    }
  }
}
