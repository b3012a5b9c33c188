use super::*;

/// Extra characters a word may be overtyped by before keystrokes stop landing.
pub(crate) const SLACK: usize = 3;

/// How the session reached its end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Completion {
  /// Space pressed on the last word.
  Boundary,
  /// The last character of the last word was typed correctly in place.
  TypedLastLetter,
}

/// Typing state for one pass over a reference text.
///
/// `cursor` is an offset into the rendered line, where every word takes up
/// the wider of its reference and typed lengths and words are separated by a
/// single space. Transitions never mutate in place: `apply` returns the next
/// state, leaving the current one untouched.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Progress {
  completion: Option<Completion>,
  cursor: usize,
  keystrokes: usize,
  started: bool,
  typed: Vec<Vec<u8>>,
  word: usize,
}

impl Progress {
  pub(crate) fn new(text: &ReferenceText) -> Self {
    Self {
      completion: None,
      cursor: 0,
      keystrokes: 0,
      started: false,
      typed: vec![Vec::new(); text.word_count()],
      word: 0,
    }
  }

  #[must_use]
  pub(crate) fn apply(&self, text: &ReferenceText, action: Action) -> Self {
    let mut next = self.clone();

    if next.completion.is_some() {
      return next;
    }

    match action {
      Action::Insert(character) => next.insert(text, character),
      Action::Delete => next.delete(text),
      Action::Space => next.space(text),
      Action::Cancel => {}
    }

    next
  }

  pub(crate) fn completion(&self) -> Option<Completion> {
    self.completion
  }

  pub(crate) fn cursor(&self) -> usize {
    self.cursor
  }

  pub(crate) fn is_finished(&self) -> bool {
    self.completion.is_some()
  }

  pub(crate) fn is_started(&self) -> bool {
    self.started
  }

  pub(crate) fn keystrokes(&self) -> usize {
    self.keystrokes
  }

  pub(crate) fn typed(&self, index: usize) -> &[u8] {
    &self.typed[index]
  }

  pub(crate) fn word_index(&self) -> usize {
    self.word
  }

  fn delete(&mut self, text: &ReferenceText) {
    if self.typed[self.word].pop().is_some() {
      self.cursor -= 1;
      return;
    }

    if self.word == 0 {
      return;
    }

    self.word -= 1;
    self.cursor = self.word_start(text, self.word) + self.typed[self.word].len();

    trace!("backspaced into word {}", self.word);
  }

  fn insert(&mut self, text: &ReferenceText, character: u8) {
    self.started = true;
    self.keystrokes += 1;

    let expected = text.word(self.word);

    if self.typed[self.word].len() > expected.len() + SLACK {
      trace!("dropped overtyped keystroke in word {}", self.word);
      return;
    }

    if self.word == text.last_index()
      && self.cursor + 1 == self.word_start(text, self.word) + expected.len()
      && expected.last() == Some(&character)
    {
      self.completion = Some(Completion::TypedLastLetter);
    }

    self.typed[self.word].push(character);
    self.cursor += 1;
  }

  fn space(&mut self, text: &ReferenceText) {
    if self.typed[self.word].is_empty() {
      return;
    }

    if self.word == text.last_index() {
      self.completion = Some(Completion::Boundary);
      return;
    }

    self.word += 1;
    self.cursor = self.word_start(text, self.word);

    trace!("advanced to word {}", self.word);
  }

  fn width(&self, text: &ReferenceText, index: usize) -> usize {
    text.word(index).len().max(self.typed[index].len())
  }

  /// Rendered offset of the first character of word `index`.
  pub(crate) fn word_start(&self, text: &ReferenceText, index: usize) -> usize {
    (0..index).map(|i| self.width(text, i) + 1).sum()
  }
}
