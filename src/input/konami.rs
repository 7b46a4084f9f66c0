//! The classic cheat sequence, tracked one key press at a time.

use crossterm::event::{KeyCode, KeyEvent};

const SEQUENCE: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Char('b'),
    KeyCode::Char('a'),
];

/// Watches the global key stream for the konami sequence.
///
/// Feeding never consumes the key; the caller routes it onward regardless of
/// the tracker's progress.
#[derive(Debug, Default)]
pub struct KonamiTracker {
    progress: usize,
}

impl KonamiTracker {
    pub fn new() -> Self {
        KonamiTracker { progress: 0 }
    }

    /// Advance on a matching key, reset on anything else. Returns true when
    /// the full sequence just completed; the tracker rearms itself.
    pub fn feed(&mut self, key: &KeyEvent) -> bool {
        if key.code == SEQUENCE[self.progress] {
            self.progress += 1;
            if self.progress == SEQUENCE.len() {
                self.progress = 0;
                return true;
            }
        } else {
            self.progress = 0;
        }
        false
    }
}
