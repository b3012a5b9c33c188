use super::*;

pub(crate) trait Timer {
  fn elapsed(&self) -> Duration;

  /// Begins timing. Calling again after the first call does nothing.
  fn start(&mut self);

  /// Freezes the elapsed time. Does nothing unless running.
  fn stop(&mut self);
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Stopwatch {
  started_at: Option<Instant>,
  stopped: Option<Duration>,
}

impl Timer for Stopwatch {
  fn elapsed(&self) -> Duration {
    match (self.started_at, self.stopped) {
      (_, Some(elapsed)) => elapsed,
      (Some(started_at), None) => started_at.elapsed(),
      (None, None) => Duration::ZERO,
    }
  }

  fn start(&mut self) {
    if self.started_at.is_none() {
      self.started_at = Some(Instant::now());
    }
  }

  fn stop(&mut self) {
    if self.started_at.is_some() && self.stopped.is_none() {
      self.stopped = Some(self.elapsed());
    }
  }
}
