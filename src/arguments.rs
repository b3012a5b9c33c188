use {super::*, crate::reference::QUOTE};

#[derive(Debug, Parser)]
#[clap(version, about = "Type a quote, get your speed and accuracy")]
pub(crate) struct Arguments {
  #[clap(long, short, conflicts_with = "words", help = "Text to type")]
  text: Option<String>,
  #[clap(long, short, help = "Type this many random common words instead")]
  words: Option<usize>,
  #[clap(
    long,
    default_value_t = 70,
    value_parser = clap::value_parser!(u16).range(10..),
    help = "Width of the quote box in columns"
  )]
  width: u16,
  #[clap(long, help = "Write logs to this file")]
  log_file: Option<PathBuf>,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    if let Some(path) = &self.log_file {
      logging::init(path)?;
    }

    let text = self.reference_text()?;

    info!(
      "starting session with {} words, {} characters",
      text.word_count(),
      text.len()
    );

    let config = RenderConfig {
      width: self.width.into(),
      ..Default::default()
    };

    if let Some(score) = App::new(text, config, Stopwatch::default()).run()? {
      println!("{score}");
    }

    Ok(())
  }

  fn reference_text(&self) -> Result<ReferenceText> {
    match (&self.text, self.words) {
      (Some(text), _) => ReferenceText::new(text),
      (None, Some(count)) => ReferenceText::random(count, &mut rand::thread_rng()),
      (None, None) => ReferenceText::new(QUOTE),
    }
  }
}
