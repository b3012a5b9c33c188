use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Action {
  Cancel,
  Delete,
  Insert(u8),
  Space,
}

impl Action {
  pub(crate) fn from_event(event: Event) -> Option<Self> {
    match event {
      Event::Key(key) if key.kind != KeyEventKind::Release => {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
          return match key.code {
            KeyCode::Char('c') => Some(Self::Cancel),
            _ => None,
          };
        }

        match key.code {
          KeyCode::Backspace => Some(Self::Delete),
          KeyCode::Char(' ') => Some(Self::Space),
          KeyCode::Char(c) if c.is_ascii_graphic() => Some(Self::Insert(c as u8)),
          KeyCode::Esc => Some(Self::Cancel),
          _ => None,
        }
      }
      _ => None,
    }
  }
}
