//! Colours the unit input is drawn with.
//!
//! Dark neutral surfaces, white for anything active, greys for the rest.

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from a `0xRRGGBB` value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn rgb_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, 1.0)
    }

    /// Linearly interpolates between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Fixed colour set for the control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Background of the toggle and stepper groups.
    pub group: Color,
    /// Background of a disabled stepper button.
    pub disabled_background: Color,
    /// Background of a hovered stepper button.
    pub hover_background: Color,
    /// Background of the active toggle and a pressed stepper button.
    pub active_background: Color,
    /// Row labels ("Unit", "Value").
    pub label: Color,
    /// Idle button text.
    pub muted_text: Color,
    /// Disabled button text.
    pub disabled_text: Color,
    /// Active or hovered text and the field value.
    pub text: Color,
    /// Tooltip background.
    pub tooltip_background: Color,
}

impl Palette {
    /// Neutral dark palette.
    pub const NEUTRAL: Self = Self {
        group: Color::rgb_hex(0x26_26_26),
        disabled_background: Color::rgb_hex(0x17_17_17),
        hover_background: Color::rgb_hex(0x40_40_40),
        active_background: Color::rgb_hex(0x52_52_52),
        label: Color::rgb_hex(0xD4_D4_D4),
        muted_text: Color::rgb_hex(0xA3_A3_A3),
        disabled_text: Color::rgb_hex(0x52_52_52),
        text: Color::WHITE,
        tooltip_background: Color::rgb_hex(0x26_26_26),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
