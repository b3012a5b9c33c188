use super::*;

const TICK: Duration = Duration::from_millis(100);

/// Raw mode and the alternate screen, restored on drop.
struct Screen;

impl Screen {
  fn enter() -> Result<Self> {
    terminal::enable_raw_mode()?;

    let screen = Self;

    execute!(stdout(), EnterAlternateScreen, Hide)?;

    Ok(screen)
  }
}

impl Drop for Screen {
  fn drop(&mut self) {
    let _ = execute!(stdout(), Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
  }
}

#[derive(Debug)]
pub(crate) struct App<T: Timer> {
  config: RenderConfig,
  progress: Progress,
  score: Option<Score>,
  text: ReferenceText,
  timer: T,
}

impl<T: Timer> App<T> {
  pub(crate) fn new(text: ReferenceText, config: RenderConfig, timer: T) -> Self {
    Self {
      config,
      progress: Progress::new(&text),
      score: None,
      text,
      timer,
    }
  }

  pub(crate) fn handle_action(&mut self, action: Action) -> Phase {
    if matches!(action, Action::Insert(_))
      && Phase::of(&self.progress) == Phase::NotStarted
    {
      self.timer.start();
      debug!("first keystroke, timer started");
    }

    let finished = self.progress.is_finished();

    self.progress = self.progress.apply(&self.text, action);

    trace!(
      "{action:?}: word {} cursor {}",
      self.progress.word_index(),
      self.progress.cursor()
    );

    if !finished && self.progress.is_finished() {
      let elapsed = self.timer.elapsed();

      self.timer.stop();

      debug!("completed by {:?}", self.progress.completion());

      let score = Score::evaluate(&self.text, &self.progress, elapsed);

      info!("{score}");

      self.score = Some(score);
    }

    Phase::of(&self.progress)
  }

  pub(crate) fn run(mut self) -> Result<Option<Score>> {
    let screen = Screen::enter()?;

    let mut out = stdout();

    loop {
      match &self.score {
        Some(score) => self.config.draw_score(&mut out, score)?,
        None => self.config.draw_progress(
          &mut out,
          &self.text,
          &self.progress,
          self.timer.elapsed(),
        )?,
      }

      if !event::poll(TICK)? {
        continue;
      }

      let event = event::read()?;

      if self.score.is_some() {
        if matches!(event, Event::Key(key) if key.kind == KeyEventKind::Press) {
          break;
        }
        continue;
      }

      match Action::from_event(event) {
        Some(Action::Cancel) => {
          info!("cancelled");
          return Ok(None);
        }
        Some(action) => {
          self.handle_action(action);
        }
        None => {}
      }
    }

    drop(screen);

    Ok(self.score)
  }
}
