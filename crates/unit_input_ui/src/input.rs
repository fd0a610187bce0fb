//! Per-frame input for the widget.
//!
//! The host feeds raw events in, calls [`InputState::begin_frame`] before the
//! next batch, and the widget reads edge-triggered state from it.

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
}

/// Keys the value field reacts to.
///
/// Printable characters arrive through [`InputState::text`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Commits the field and releases focus.
    Enter,
    /// Moves focus away, which also commits.
    Tab,
    /// Releases focus like [`Key::Tab`].
    Escape,
    /// Removes the last typed character.
    Backspace,
}

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current mouse X position.
    pub mouse_x: f32,
    /// Current mouse Y position.
    pub mouse_y: f32,
    /// Mouse buttons pressed this frame.
    buttons_pressed: u8,
    /// Mouse buttons currently held.
    buttons_down: u8,
    /// Keys pressed this frame.
    keys_pressed: Vec<Key>,
    /// Text typed this frame.
    text_input: String,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing edge-triggered state.
    pub fn begin_frame(&mut self) {
        self.buttons_pressed = 0;
        self.keys_pressed.clear();
        self.text_input.clear();
    }

    /// Updates mouse position.
    pub fn set_mouse_pos(&mut self, x: f32, y: f32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    /// Records a mouse button press.
    pub fn mouse_button_down(&mut self, button: MouseButton) {
        let mask = Self::button_mask(button);
        self.buttons_pressed |= mask;
        self.buttons_down |= mask;
    }

    /// Records a mouse button release.
    pub fn mouse_button_up(&mut self, button: MouseButton) {
        self.buttons_down &= !Self::button_mask(button);
    }

    /// Records a key press.
    pub fn key_down(&mut self, key: Key) {
        if !self.keys_pressed.contains(&key) {
            self.keys_pressed.push(key);
        }
    }

    /// Records typed text.
    pub fn text(&mut self, text: &str) {
        self.text_input.push_str(text);
    }

    /// Returns the text typed this frame.
    #[must_use]
    pub fn typed_text(&self) -> &str {
        &self.text_input
    }

    /// Returns true if the mouse button was pressed this frame.
    #[must_use]
    pub fn mouse_clicked(&self, button: MouseButton) -> bool {
        (self.buttons_pressed & Self::button_mask(button)) != 0
    }

    /// Returns true if the mouse button is currently held.
    #[must_use]
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        (self.buttons_down & Self::button_mask(button)) != 0
    }

    /// Returns true if the key was pressed this frame.
    #[must_use]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns the bit mask for a button.
    const fn button_mask(button: MouseButton) -> u8 {
        match button {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_is_edge_triggered() {
        let mut input = InputState::new();

        input.mouse_button_down(MouseButton::Left);
        assert!(input.mouse_clicked(MouseButton::Left));
        assert!(input.mouse_down(MouseButton::Left));
        assert!(!input.mouse_clicked(MouseButton::Right));

        input.begin_frame();
        assert!(!input.mouse_clicked(MouseButton::Left));
        assert!(input.mouse_down(MouseButton::Left));

        input.mouse_button_up(MouseButton::Left);
        assert!(!input.mouse_down(MouseButton::Left));
    }

    #[test]
    fn test_keys_and_text_cleared_per_frame() {
        let mut input = InputState::new();
        input.key_down(Key::Enter);
        input.key_down(Key::Enter);
        input.text("1");
        input.text("2,5");

        assert!(input.key_pressed(Key::Enter));
        assert_eq!(input.typed_text(), "12,5");

        input.begin_frame();
        assert!(!input.key_pressed(Key::Enter));
        assert!(input.typed_text().is_empty());
    }
}
