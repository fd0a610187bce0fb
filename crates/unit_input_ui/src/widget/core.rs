//! Core widget types and traits.

use crate::input::InputState;
use crate::layout::Rect;
use crate::render::RenderCommand;

/// Unique identifier for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Creates a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Derives the ID of the `index`-th child of this widget.
    #[must_use]
    pub const fn child(self, index: u64) -> Self {
        Self(self.0 * 1000 + index)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Widget state flags (bitfield).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget is visible.
    pub const VISIBLE: u32 = 1 << 0;
    /// Widget is enabled (reacts to clicks).
    pub const ENABLED: u32 = 1 << 1;
    /// Widget has keyboard focus.
    pub const FOCUSED: u32 = 1 << 2;
    /// Widget is hovered.
    pub const HOVERED: u32 = 1 << 3;
    /// Widget is held down.
    pub const PRESSED: u32 = 1 << 4;
    /// Widget needs redraw.
    pub const DIRTY_RENDER: u32 = 1 << 5;

    /// Default flags for a new widget.
    pub const DEFAULT: Self = Self(Self::VISIBLE | Self::ENABLED | Self::DIRTY_RENDER);

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }

    /// Sets or clears a flag, returning true if it changed.
    pub fn assign(&mut self, flag: u32, on: bool) -> bool {
        let was = self.has(flag);
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
        was != on
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Common widget state.
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// Widget identifier.
    pub id: WidgetId,
    /// Bounding rectangle (set by the parent's layout).
    pub rect: Rect,
    /// State flags.
    pub flags: WidgetFlags,
}

impl WidgetState {
    /// Creates a new widget state.
    #[must_use]
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            rect: Rect::ZERO,
            flags: WidgetFlags::DEFAULT,
        }
    }

    /// Returns true if the widget is visible.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.has(WidgetFlags::VISIBLE)
    }

    /// Returns true if the widget reacts to clicks.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.flags.has(WidgetFlags::ENABLED)
    }

    /// Returns true if the widget has keyboard focus.
    #[inline]
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.flags.has(WidgetFlags::FOCUSED)
    }

    /// Returns true if the widget is hovered.
    #[inline]
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.flags.has(WidgetFlags::HOVERED)
    }

    /// Returns true if the widget is held down.
    #[inline]
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.flags.has(WidgetFlags::PRESSED)
    }

    /// Returns true if the widget needs redraw.
    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.flags.has(WidgetFlags::DIRTY_RENDER)
    }

    /// Marks the widget as needing redraw.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.flags.set(WidgetFlags::DIRTY_RENDER);
    }

    /// Clears the redraw flag after rendering.
    #[inline]
    pub fn mark_clean(&mut self) {
        self.flags.clear(WidgetFlags::DIRTY_RENDER);
    }

    /// Updates the hover flag from the mouse position.
    ///
    /// Reports enter/leave edges in `response` and marks the widget dirty on
    /// change.
    pub fn track_hover(&mut self, input: &InputState, response: &mut WidgetResponse) -> bool {
        let hovered = self.is_visible() && self.rect.contains(input.mouse_x, input.mouse_y);
        if self.flags.assign(WidgetFlags::HOVERED, hovered) {
            if hovered {
                response.hovered = true;
            } else {
                response.unhovered = true;
            }
            self.mark_dirty();
        }
        hovered
    }
}

/// Response from widget update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetResponse {
    /// Widget was clicked while enabled.
    pub clicked: bool,
    /// Widget gained focus.
    pub focused: bool,
    /// Widget lost focus.
    pub unfocused: bool,
    /// Widget was hovered (just entered).
    pub hovered: bool,
    /// Widget was unhovered (just left).
    pub unhovered: bool,
    /// Widget value or text changed.
    pub changed: bool,
    /// Widget content was submitted (Enter).
    pub submitted: bool,
}

/// Base trait for all widgets.
pub trait Widget {
    /// Returns the widget's state.
    fn state(&self) -> &WidgetState;

    /// Returns mutable access to the widget's state.
    fn state_mut(&mut self) -> &mut WidgetState;

    /// Handles this frame's input and updates widget state.
    ///
    /// Called every frame, even without input events.
    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse;

    /// Generates render commands for this widget.
    fn render(&self, commands: &mut Vec<RenderCommand>);

    /// Returns the minimum size of this widget.
    fn min_size(&self) -> (f32, f32) {
        (0.0, 0.0)
    }

    /// Returns the preferred size of this widget.
    fn preferred_size(&self) -> (f32, f32) {
        self.min_size()
    }
}

/// Widget with tooltip support.
pub trait TooltipWidget: Widget {
    /// Returns the tooltip text for this widget, if one should show now.
    fn tooltip_text(&self) -> Option<&str>;
}
