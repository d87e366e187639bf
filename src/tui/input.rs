//! Key chord state for the input dispatch layer.
//!
//! Chords (gg, p0-p9, d0-d9) are tracked with a non-blocking state machine:
//! the first key is remembered and the main event loop clears it on timeout.

use crossterm::event::KeyCode;
use std::time::Instant;

/// How long a chord prefix waits for its second key
const CHORD_TIMEOUT_MS: u128 = 500;

/// State machine for handling key chords.
///
/// Instead of blocking with `event::poll()` inline, we track pending keys
/// and check for timeout in the main event loop.
#[derive(Debug, Default)]
pub struct InputState {
    /// The first key of a potential chord sequence
    pub pending: Option<KeyCode>,
    /// When the pending key was pressed (for timeout detection)
    pub pending_since: Option<Instant>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there's a pending chord that has timed out.
    pub fn has_timed_out(&self) -> bool {
        if let Some(since) = self.pending_since {
            since.elapsed().as_millis() > CHORD_TIMEOUT_MS
        } else {
            false
        }
    }

    /// Clear the pending chord state.
    pub fn clear(&mut self) {
        self.pending = None;
        self.pending_since = None;
    }

    /// Set a pending chord key.
    pub fn set_pending(&mut self, key: KeyCode) {
        self.pending = Some(key);
        self.pending_since = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear_pending() {
        let mut input = InputState::new();
        input.set_pending(KeyCode::Char('p'));
        assert_eq!(input.pending, Some(KeyCode::Char('p')));
        assert!(input.pending_since.is_some());

        input.clear();
        assert!(input.pending.is_none());
        assert!(input.pending_since.is_none());
    }

    #[test]
    fn test_input_state_timeout() {
        let mut input = InputState::new();
        assert!(!input.has_timed_out());
        input.set_pending(KeyCode::Char('g'));
        assert!(!input.has_timed_out());
        // Note: actual timeout test would need to wait 500ms
    }
}
