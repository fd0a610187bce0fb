//! Geometry for the unit input.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Unit            ┌─────────┬─────────┐  │
//! │                  │    %    │   px    │  │
//! │                  └─────────┴─────────┘  │
//! │  Value           ┌───┬───────────┬───┐  │
//! │                  │ - │   value   │ + │  │
//! │                  └───┴───────────┴───┘  │
//! └─────────────────────────────────────────┘
//! ```

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrinks the rectangle by `amount` on all sides, never below zero size.
    #[must_use]
    pub fn shrink(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            (self.width - amount * 2.0).max(0.0),
            (self.height - amount * 2.0).max(0.0),
        )
    }

    /// Splits into a left and right part at `fraction` of the width.
    #[must_use]
    pub fn split_horizontal(&self, fraction: f32) -> (Self, Self) {
        let left_width = self.width * fraction.clamp(0.0, 1.0);
        (
            Self::new(self.x, self.y, left_width, self.height),
            Self::new(self.x + left_width, self.y, self.width - left_width, self.height),
        )
    }
}

/// Resolved rectangles for every part of the unit input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UnitInputLayout {
    /// Whole widget.
    pub bounds: Rect,
    /// "Unit" label cell.
    pub unit_label: Rect,
    /// Background of the toggle pair.
    pub toggle_group: Rect,
    /// Percent toggle.
    pub percent_toggle: Rect,
    /// Pixel toggle.
    pub pixel_toggle: Rect,
    /// "Value" label cell.
    pub value_label: Rect,
    /// Background of the stepper.
    pub stepper_group: Rect,
    /// Decrement button.
    pub decrement: Rect,
    /// Text field.
    pub field: Rect,
    /// Increment button.
    pub increment: Rect,
}

impl UnitInputLayout {
    /// Padding around both rows.
    pub const PADDING: f32 = 16.0;
    /// Vertical gap between the rows.
    pub const ROW_GAP: f32 = 24.0;
    /// Height of one row.
    pub const ROW_HEIGHT: f32 = 28.0;
    /// Inset between a control group's background and its buttons.
    pub const GROUP_INSET: f32 = 2.0;
    /// Width of the `-` and `+` buttons.
    pub const STEP_WIDTH: f32 = 32.0;
    /// Share of the row taken by the label; controls get the rest.
    pub const LABEL_FRACTION: f32 = 0.5;
    /// Width the widget asks for when unconstrained.
    pub const PREFERRED_WIDTH: f32 = 320.0;

    /// Height of the widget; it does not grow vertically.
    pub const HEIGHT: f32 = Self::PADDING * 2.0 + Self::ROW_HEIGHT * 2.0 + Self::ROW_GAP;

    /// Lays the widget out inside `bounds`.
    #[must_use]
    pub fn compute(bounds: Rect) -> Self {
        let content = bounds.shrink(Self::PADDING);
        let unit_row = Rect::new(content.x, content.y, content.width, Self::ROW_HEIGHT);
        let value_row = Rect::new(
            content.x,
            content.y + Self::ROW_HEIGHT + Self::ROW_GAP,
            content.width,
            Self::ROW_HEIGHT,
        );

        let (unit_label, toggle_group) = unit_row.split_horizontal(Self::LABEL_FRACTION);
        let (percent_toggle, pixel_toggle) =
            toggle_group.shrink(Self::GROUP_INSET).split_horizontal(0.5);

        let (value_label, stepper_group) = value_row.split_horizontal(Self::LABEL_FRACTION);
        let inner = stepper_group.shrink(Self::GROUP_INSET);
        let step_width = Self::STEP_WIDTH.min(inner.width / 3.0);
        let decrement = Rect::new(inner.x, inner.y, step_width, inner.height);
        let increment = Rect::new(inner.right() - step_width, inner.y, step_width, inner.height);
        let field = Rect::new(
            decrement.right(),
            inner.y,
            (increment.x - decrement.right()).max(0.0),
            inner.height,
        );

        Self {
            bounds,
            unit_label,
            toggle_group,
            percent_toggle,
            pixel_toggle,
            value_label,
            stepper_group,
            decrement,
            field,
            increment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(50.0, 30.0));
        assert!(!rect.contains(5.0, 30.0));
        assert!(!rect.contains(50.0, 80.0));
    }

    #[test]
    fn test_split_horizontal() {
        let (left, right) = Rect::new(0.0, 0.0, 200.0, 20.0).split_horizontal(0.25);
        assert_eq!(left, Rect::new(0.0, 0.0, 50.0, 20.0));
        assert_eq!(right, Rect::new(50.0, 0.0, 150.0, 20.0));
    }

    #[test]
    fn test_layout_rows() {
        let layout = UnitInputLayout::compute(Rect::new(0.0, 0.0, 320.0, UnitInputLayout::HEIGHT));

        assert_eq!(layout.unit_label.x, 16.0);
        assert_eq!(layout.toggle_group.x, 160.0);
        assert_eq!(layout.percent_toggle.width, layout.pixel_toggle.width);
        assert!(layout.value_label.y > layout.unit_label.bottom());
        assert_eq!(layout.stepper_group.bottom(), 96.0);
    }

    #[test]
    fn test_stepper_parts_do_not_overlap() {
        let layout = UnitInputLayout::compute(Rect::new(5.0, 5.0, 320.0, 112.0));

        assert_eq!(layout.decrement.right(), layout.field.x);
        assert_eq!(layout.field.right(), layout.increment.x);
        assert_eq!(
            layout.increment.right(),
            layout.stepper_group.right() - UnitInputLayout::GROUP_INSET
        );
    }
}
