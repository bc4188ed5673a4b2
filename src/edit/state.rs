//! The per-field edit state machine.
//!
//! Free-text numeric entry passes through intermediate states ("", "-",
//! "1.") that must never reach the committed config. Each buffered field
//! moves `Idle -> Editing -> Committing -> Idle`; the display buffer is only
//! authoritative while editing, and external value updates are ignored
//! while the user is typing.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Lifecycle of one buffered field.
pub enum EditState {
    /// Showing the committed value.
    Idle,
    /// User is typing; the buffer may be transiently invalid.
    Editing,
    /// A commit has been emitted and not yet acknowledged by the host.
    Committing,
}

#[derive(Clone, Debug)]
/// A display buffer over a committed text representation.
pub struct EditBuffer {
    committed: String,
    buffer: String,
    state: EditState,
}

impl EditBuffer {
    /// Start idle on a committed representation.
    pub fn new(committed: impl Into<String>) -> Self {
        let committed = committed.into();
        Self {
            buffer: committed.clone(),
            committed,
            state: EditState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> EditState {
        self.state
    }

    /// Text to render: the buffer while editing, the committed value after.
    pub fn display(&self) -> &str {
        match self.state {
            EditState::Idle => &self.committed,
            EditState::Editing | EditState::Committing => &self.buffer,
        }
    }

    /// Last committed representation.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Enter editing without changing the buffer (focus).
    pub fn focus(&mut self) {
        if self.state == EditState::Idle {
            self.buffer = self.committed.clone();
            self.state = EditState::Editing;
        }
    }

    /// Record a keystroke. Implies focus.
    pub fn input(&mut self, text: impl Into<String>) {
        self.focus();
        self.buffer = text.into();
        self.state = EditState::Editing;
    }

    /// Adopt an externally committed value.
    ///
    /// Ignored while the user is editing so a slow host update cannot
    /// clobber in-progress typing.
    pub fn sync(&mut self, committed: impl Into<String>) {
        if self.state == EditState::Idle {
            self.committed = committed.into();
            self.buffer = self.committed.clone();
        }
    }

    /// Leave editing. `canonicalize` turns the buffer into a committed
    /// representation, or `None` when the buffer is invalid.
    ///
    /// A valid buffer commits (returning the canonical text and entering
    /// `Committing`); an invalid or empty buffer reverts the display to the
    /// last committed value — it never substitutes a default over the
    /// user's in-progress edit.
    pub fn blur(
        &mut self,
        canonicalize: impl FnOnce(&str) -> Option<String>,
    ) -> Option<String> {
        match canonicalize(&self.buffer) {
            Some(canonical) => {
                self.committed = canonical.clone();
                self.buffer = canonical.clone();
                self.state = EditState::Committing;
                Some(canonical)
            }
            None => {
                self.buffer = self.committed.clone();
                self.state = EditState::Idle;
                None
            }
        }
    }

    /// Host applied the committed change; return to idle.
    pub fn settle(&mut self) {
        if self.state == EditState::Committing {
            self.state = EditState::Idle;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/state.rs"]
mod tests;
