use super::*;

pub(crate) const QUOTE: &str = "Programming isn't about what you know; it's about what you can figure out. Every challenge is an opportunity to learn, and every line of code brings you closer to mastering the art of problem-solving. Type away, and let logic guide your fingers!";

const WORDS: &[&str] = &[
  "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on", "with",
  "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we", "say", "her",
  "she", "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", "so", "up",
  "out", "if", "about", "who", "get", "which", "go", "me", "when", "make", "can", "like", "time",
  "no", "just", "him", "know", "take", "people", "into", "year", "your", "good", "some", "could",
  "them", "see", "other", "than", "then", "now", "look", "only", "come", "its", "over", "think",
  "also", "back", "after", "use", "two", "how", "our", "work", "first", "well", "way", "even",
  "new", "want", "because", "any", "these", "give", "day", "most", "us",
];

/// The text being typed, split into words on single spaces.
///
/// Every word is non-empty printable ASCII, so byte offsets and character offsets
/// coincide.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ReferenceText {
  words: Vec<Vec<u8>>,
}

impl ReferenceText {
  pub(crate) fn new(text: &str) -> Result<Self> {
    if text.is_empty() {
      bail!("reference text is empty");
    }

    if !text
      .bytes()
      .all(|byte| byte == b' ' || byte.is_ascii_graphic())
    {
      bail!("reference text must be printable ASCII");
    }

    let words = text
      .split(' ')
      .map(|word| word.as_bytes().to_vec())
      .collect::<Vec<Vec<u8>>>();

    if let Some(position) = words.iter().position(Vec::is_empty) {
      bail!("reference text has an empty word at position {position}");
    }

    Ok(Self { words })
  }

  pub(crate) fn random(count: usize, rng: &mut impl Rng) -> Result<Self> {
    if count == 0 {
      bail!("word count must be at least one");
    }

    let words = (0..count)
      .map(|_| {
        WORDS
          .choose(rng)
          .copied()
          .ok_or_else(|| anyhow!("word list is empty"))
      })
      .collect::<Result<Vec<&str>>>()?;

    Self::new(&words.join(" "))
  }

  pub(crate) fn joined(&self) -> String {
    self
      .words
      .iter()
      .map(|word| String::from_utf8_lossy(word))
      .collect::<Vec<_>>()
      .join(" ")
  }

  pub(crate) fn last_index(&self) -> usize {
    self.words.len() - 1
  }

  pub(crate) fn len(&self) -> usize {
    self.words.iter().map(Vec::len).sum()
  }

  pub(crate) fn word(&self, index: usize) -> &[u8] {
    &self.words[index]
  }

  pub(crate) fn word_count(&self) -> usize {
    self.words.len()
  }

  pub(crate) fn words(&self) -> impl Iterator<Item = &[u8]> {
    self.words.iter().map(Vec::as_slice)
  }
}
