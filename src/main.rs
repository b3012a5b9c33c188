use {
  crate::{
    action::Action,
    app::App,
    arguments::Arguments,
    phase::Phase,
    progress::{Completion, Progress},
    reference::ReferenceText,
    render::RenderConfig,
    score::Score,
    timer::{Stopwatch, Timer},
  },
  anyhow::{anyhow, bail},
  clap::Parser,
  crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{
      Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor,
    },
    terminal::{
      self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
    },
  },
  log::{debug, info, trace},
  rand::{Rng, seq::SliceRandom},
  std::{
    fmt::{self, Display, Formatter},
    fs::File,
    io::{Write, stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
};

mod action;
mod app;
mod arguments;
mod logging;
mod phase;
mod progress;
mod reference;
mod render;
mod score;
mod timer;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
