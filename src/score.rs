use super::*;

const CHARACTERS_PER_WORD: f64 = 5.0;

/// `numerator / denominator`, or `None` when the quotient is not a finite
/// number.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
  if denominator == 0.0 {
    return None;
  }

  Some(numerator / denominator).filter(|value| value.is_finite())
}

fn metric(value: Option<f64>, precision: usize) -> String {
  value.map_or_else(|| "-".into(), |value| format!("{value:.precision$}"))
}

/// Final metrics for a finished session.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Score {
  pub(crate) accuracy: Option<f64>,
  pub(crate) correct: usize,
  pub(crate) elapsed: Duration,
  pub(crate) missing: usize,
  pub(crate) total: usize,
  pub(crate) wpm: Option<f64>,
}

impl Score {
  /// Walks every typed word against its reference word.
  ///
  /// When the session ended on a correctly typed final character, that
  /// character is set aside during the walk and credited afterwards, and it
  /// counts toward the last word's length only when deciding whether the word
  /// is short. The shortfall itself is measured without it.
  pub(crate) fn evaluate(
    text: &ReferenceText,
    progress: &Progress,
    elapsed: Duration,
  ) -> Self {
    let typed_last_letter =
      progress.completion() == Some(Completion::TypedLastLetter);

    let mut correct = 0;
    let mut missing = 0;

    for (index, expected) in text.words().enumerate() {
      let finishing = typed_last_letter && index == text.last_index();

      let typed = match progress.typed(index).split_last() {
        Some((_, rest)) if finishing => rest,
        _ => progress.typed(index),
      };

      correct += typed
        .iter()
        .zip(expected)
        .filter(|(typed, expected)| typed == expected)
        .count();

      let effective = typed.len() + usize::from(finishing);

      if expected.len() > effective {
        missing += expected.len() - typed.len();
      }
    }

    if typed_last_letter {
      correct += 1;
    }

    let total = progress.keystrokes();

    let minutes = elapsed.as_secs_f64() / 60.0;

    Self {
      accuracy: ratio(correct as f64, (total + missing) as f64)
        .map(|accuracy| accuracy * 100.0),
      correct,
      elapsed,
      missing,
      total,
      wpm: ratio(correct as f64, CHARACTERS_PER_WORD * minutes),
    }
  }

  pub(crate) fn incorrect(&self) -> usize {
    self.total.saturating_sub(self.correct)
  }

  pub(crate) fn lines(&self) -> Vec<String> {
    vec![
      format!("WPM:{}", metric(self.wpm, 1)),
      format!("Accuracy: {}%", metric(self.accuracy, 2)),
      format!(
        "Correct: {}/Incorrect: {}/Missing: {}",
        self.correct,
        self.incorrect(),
        self.missing
      ),
    ]
  }
}

impl Display for Score {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "WPM: {} | Accuracy: {}% | Correct: {} | Incorrect: {} | Missing: {} | Elapsed Time: {:.2}s",
      metric(self.wpm, 1),
      metric(self.accuracy, 2),
      self.correct,
      self.incorrect(),
      self.missing,
      self.elapsed.as_secs_f64()
    )
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::reference::QUOTE, approx::assert_abs_diff_eq};

  fn finish(text: &str, keys: &str, elapsed: Duration) -> Score {
    let text = ReferenceText::new(text).unwrap();

    let progress = keys.bytes().fold(Progress::new(&text), |progress, key| {
      progress.apply(
        &text,
        match key {
          b' ' => Action::Space,
          b'<' => Action::Delete,
          _ => Action::Insert(key),
        },
      )
    });

    assert!(progress.is_finished());

    Score::evaluate(&text, &progress, elapsed)
  }

  #[test]
  fn ratio_guards_zero_denominator() {
    assert_eq!(ratio(1.0, 0.0), None);
    assert_eq!(ratio(0.0, 0.0), None);
    assert_eq!(ratio(1.0, 4.0), Some(0.25));
  }

  #[test]
  fn perfect_quote() {
    let score = finish(QUOTE, QUOTE, Duration::from_secs(60));

    assert_eq!(score.correct, ReferenceText::new(QUOTE).unwrap().len());
    assert_eq!(score.missing, 0);
    assert_eq!(score.incorrect(), 0);
    assert_abs_diff_eq!(score.accuracy.unwrap(), 100.0, epsilon = 1e-9);
  }

  #[test]
  fn two_letter_word() {
    let score = finish("hi", "hi", Duration::from_secs(6));

    assert_eq!(score.total, 2);
    assert_eq!(score.correct, 2);
    assert_eq!(score.missing, 0);
    assert_abs_diff_eq!(score.accuracy.unwrap(), 100.0, epsilon = 1e-9);
  }

  #[test]
  fn final_letter_is_credited_once() {
    let text = ReferenceText::new("ab cd").unwrap();

    let progress = "ab cd".bytes().fold(Progress::new(&text), |progress, key| {
      progress.apply(
        &text,
        if key == b' ' {
          Action::Space
        } else {
          Action::Insert(key)
        },
      )
    });

    assert_eq!(progress.completion(), Some(Completion::TypedLastLetter));

    let score = Score::evaluate(&text, &progress, Duration::from_secs(60));

    // The walk matches a, b and c; the finishing d is credited once on top,
    // so a clean run scores exactly the reference length of 4.
    assert_eq!(score.total, 4);
    assert_eq!(score.correct, 4);
    assert_eq!(score.missing, 0);
  }

  #[test]
  fn short_words_count_as_missing() {
    let score = finish("abc de", "a d ", Duration::from_secs(60));

    assert_eq!(score.total, 2);
    assert_eq!(score.correct, 2);
    assert_eq!(score.missing, 3);
    assert_abs_diff_eq!(score.accuracy.unwrap(), 40.0, epsilon = 1e-9);
  }

  #[test]
  fn wrong_characters() {
    let score = finish("hi", "x ", Duration::from_secs(60));

    assert_eq!(score.correct, 0);
    assert_eq!(score.incorrect(), 1);
    assert_eq!(score.missing, 1);
    assert_abs_diff_eq!(score.accuracy.unwrap(), 0.0, epsilon = 1e-9);
  }

  #[test]
  fn overtyped_characters_are_incorrect() {
    let score = finish("ab c", "abxx x ", Duration::from_secs(60));

    assert_eq!(score.total, 5);
    assert_eq!(score.correct, 2);
    assert_eq!(score.incorrect(), 3);
    assert_eq!(score.missing, 0);
    assert_abs_diff_eq!(score.accuracy.unwrap(), 40.0, epsilon = 1e-9);
  }

  #[test]
  fn corrected_mistakes_still_cost_accuracy() {
    let score = finish("ab", "ax<b", Duration::from_secs(60));

    assert_eq!(score.total, 3);
    assert_eq!(score.correct, 2);
    assert_abs_diff_eq!(score.accuracy.unwrap(), 66.66, epsilon = 0.01);
  }

  #[test]
  fn wpm() {
    let score = finish("hello world", "hello world", Duration::from_secs(60));

    assert_abs_diff_eq!(score.wpm.unwrap(), 2.0, epsilon = 0.01);

    let score = finish("hello world", "hello world", Duration::from_secs(30));

    assert_abs_diff_eq!(score.wpm.unwrap(), 4.0, epsilon = 0.01);
  }

  #[test]
  fn wpm_without_elapsed_time() {
    let score = finish("a", "a", Duration::ZERO);

    assert_eq!(score.wpm, None);
    assert_abs_diff_eq!(score.accuracy.unwrap(), 100.0, epsilon = 1e-9);
  }

  #[test]
  fn display() {
    let score = finish("hello world", "hello world", Duration::from_secs(60));

    assert_eq!(
      score.to_string(),
      "WPM: 2.0 | Accuracy: 100.00% | Correct: 10 | Incorrect: 0 | Missing: 0 | Elapsed Time: 60.00s"
    );

    let score = finish("a", "a", Duration::ZERO);

    assert_eq!(
      score.lines(),
      vec!["WPM:-", "Accuracy: 100.00%", "Correct: 1/Incorrect: 0/Missing: 0"]
    );
  }
}
