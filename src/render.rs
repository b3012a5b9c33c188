use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Style {
  Correct,
  Cursor,
  Incorrect,
  Missing,
  Pending,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Segment {
  pub(crate) style: Style,
  pub(crate) text: String,
}

impl Segment {
  fn new(style: Style, text: impl Into<String>) -> Self {
    Self {
      style,
      text: text.into(),
    }
  }
}

/// Presentation settings for the quote box.
#[derive(Clone, Debug)]
pub(crate) struct RenderConfig {
  pub(crate) border: Color,
  pub(crate) correct: Color,
  pub(crate) cursor: char,
  pub(crate) incorrect: Color,
  pub(crate) missing: Attribute,
  pub(crate) width: usize,
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self {
      border: Color::AnsiValue(63),
      correct: Color::Rgb {
        r: 0xAF,
        g: 0xE1,
        b: 0xAF,
      },
      cursor: '|',
      incorrect: Color::Rgb {
        r: 0xC7,
        g: 0x00,
        b: 0x39,
      },
      missing: Attribute::Underlined,
      width: 70,
    }
  }
}

impl RenderConfig {
  pub(crate) fn draw_progress(
    &self,
    out: &mut impl Write,
    text: &ReferenceText,
    progress: &Progress,
    elapsed: Duration,
  ) -> Result {
    let mut rows = vec![vec![(
      Style::Pending,
      format!("{:.2}s", elapsed.as_secs_f64()),
    )]];

    let cells = self.cells(&segments(text, progress));

    rows.extend(wrap(&cells, self.width).into_iter().map(|line| {
      line
        .iter()
        .map(|&(style, character)| (style, character.to_string()))
        .collect()
    }));

    self.draw_box(out, &rows)
  }

  pub(crate) fn draw_score(&self, out: &mut impl Write, score: &Score) -> Result {
    let rows = score
      .lines()
      .into_iter()
      .map(|line| vec![(Style::Pending, line)])
      .collect::<Vec<_>>();

    self.draw_box(out, &rows)
  }

  fn cells(&self, segments: &[Segment]) -> Vec<(Style, char)> {
    segments
      .iter()
      .flat_map(|segment| {
        let text = match segment.style {
          Style::Cursor => self.cursor.to_string(),
          _ => segment.text.clone(),
        };
        text
          .chars()
          .map(|character| (segment.style, character))
          .collect::<Vec<_>>()
      })
      .collect()
  }

  fn draw_box(&self, out: &mut impl Write, rows: &[Vec<(Style, String)>]) -> Result {
    let horizontal = "─".repeat(self.width + 2);

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    queue!(
      out,
      SetForegroundColor(self.border),
      Print(format!("┌{horizontal}┐")),
      ResetColor
    )?;

    for (index, row) in rows.iter().enumerate() {
      let line = u16::try_from(index + 1)?;

      queue!(
        out,
        MoveTo(0, line),
        SetForegroundColor(self.border),
        Print("│ "),
        ResetColor
      )?;

      let mut used = 0;

      for (style, text) in row {
        self.apply(out, *style)?;
        queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
        used += text.chars().count();
      }

      queue!(
        out,
        Print(" ".repeat(self.width.saturating_sub(used))),
        SetForegroundColor(self.border),
        Print(" │"),
        ResetColor
      )?;
    }

    let bottom = u16::try_from(rows.len() + 1)?;

    queue!(
      out,
      MoveTo(0, bottom),
      SetForegroundColor(self.border),
      Print(format!("└{horizontal}┘")),
      ResetColor
    )?;

    out.flush()?;

    Ok(())
  }

  fn apply(&self, out: &mut impl Write, style: Style) -> Result {
    match style {
      Style::Correct => queue!(
        out,
        SetAttribute(Attribute::Bold),
        SetForegroundColor(self.correct)
      )?,
      Style::Incorrect => queue!(
        out,
        SetAttribute(Attribute::Bold),
        SetForegroundColor(self.incorrect)
      )?,
      Style::Missing => queue!(out, SetAttribute(self.missing))?,
      Style::Cursor | Style::Pending => {}
    }

    Ok(())
  }
}

/// Styled pieces of the quote as it should appear for `progress`.
pub(crate) fn segments(text: &ReferenceText, progress: &Progress) -> Vec<Segment> {
  let mut segments = Vec::new();

  let current = progress.word_index();

  for index in 0..=current {
    let expected = text.word(index);
    let typed = progress.typed(index);

    for (position, &character) in typed.iter().enumerate() {
      segments.push(match expected.get(position) {
        Some(&reference) if reference == character => {
          Segment::new(Style::Correct, char::from(reference))
        }
        Some(&reference) => Segment::new(Style::Incorrect, char::from(reference)),
        None => Segment::new(Style::Incorrect, char::from(character)),
      });
    }

    if index == current {
      break;
    }

    if let Some(rest) = expected.get(typed.len()..).filter(|rest| !rest.is_empty()) {
      segments.push(Segment::new(
        Style::Missing,
        String::from_utf8_lossy(rest),
      ));
    }

    segments.push(Segment::new(Style::Pending, " "));
  }

  segments.push(Segment::new(Style::Cursor, ""));

  let start = text
    .words()
    .take(current)
    .map(|word| word.len() + 1)
    .sum::<usize>();

  let typed = progress.typed(current).len().min(text.word(current).len());

  let pending = text.joined().split_off(start + typed);

  if !pending.is_empty() {
    segments.push(Segment::new(Style::Pending, pending));
  }

  segments
}

/// Breaks cells into lines of at most `width`, preferring to break at spaces.
pub(crate) fn wrap<T: Copy>(cells: &[(T, char)], width: usize) -> Vec<&[(T, char)]> {
  let width = width.max(1);

  let mut lines = Vec::new();
  let mut rest = cells;

  while rest.len() > width {
    match rest[..=width].iter().rposition(|&(_, character)| character == ' ') {
      Some(space) if space > 0 => {
        lines.push(&rest[..space]);
        rest = &rest[space + 1..];
      }
      _ => {
        lines.push(&rest[..width]);
        rest = &rest[width..];
      }
    }
  }

  lines.push(rest);

  lines
}
