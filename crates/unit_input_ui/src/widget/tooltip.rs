//! Tooltips for disabled controls.
//!
//! A tooltip sits centred above the control it explains, with a small nub
//! pointing down at it. No delay: it shows on the first hovered frame.

use crate::layout::Rect;
use crate::render::{RenderCommand, TextAlign};
use crate::style::{Color, Palette};

/// Configuration for tooltip rendering.
#[derive(Debug, Clone, Copy)]
pub struct TooltipConfig {
    /// Background color.
    pub background: Color,
    /// Text color.
    pub text: Color,
    /// Horizontal padding inside the tooltip.
    pub padding_x: f32,
    /// Vertical padding inside the tooltip.
    pub padding_y: f32,
    /// Gap between the tooltip and its anchor.
    pub gap: f32,
    /// Font size.
    pub font_size: f32,
    /// Side length of the pointer nub.
    pub nub_size: f32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        let palette = Palette::NEUTRAL;
        Self {
            background: palette.tooltip_background,
            text: palette.text,
            padding_x: 8.0,
            padding_y: 4.0,
            gap: 8.0,
            font_size: 12.0,
            nub_size: 8.0,
        }
    }
}

/// A tooltip to be displayed.
#[derive(Debug, Clone)]
pub struct Tooltip {
    /// Text content.
    pub text: String,
    /// Control the tooltip points at.
    pub anchor: Rect,
    /// Calculated bounds after layout.
    pub bounds: Rect,
    /// Configuration.
    pub config: TooltipConfig,
}

impl Tooltip {
    /// Average glyph advance as a fraction of the font size.
    const CHAR_WIDTH_EM: f32 = 0.6;
    /// Line height as a fraction of the font size.
    const LINE_HEIGHT_EM: f32 = 1.4;

    /// Creates a new tooltip for `anchor`.
    #[must_use]
    pub fn new(text: impl Into<String>, anchor: Rect) -> Self {
        Self {
            text: text.into(),
            anchor,
            bounds: Rect::ZERO,
            config: TooltipConfig::default(),
        }
    }

    /// Calculates the tooltip bounds.
    ///
    /// Flips below the anchor if there is no room above and keeps the whole
    /// box on screen horizontally. Text never wraps.
    #[allow(clippy::cast_precision_loss)]
    pub fn layout(&mut self, screen_width: f32, screen_height: f32) {
        let config = &self.config;
        let text_width = self.text.chars().count() as f32 * config.font_size * Self::CHAR_WIDTH_EM;
        let width = text_width + config.padding_x * 2.0;
        let height = config.font_size * Self::LINE_HEIGHT_EM + config.padding_y * 2.0;

        let (center_x, _) = self.anchor.center();
        let max_x = (screen_width - width).max(0.0);
        let x = (center_x - width * 0.5).clamp(0.0, max_x);

        let mut y = self.anchor.y - config.gap - height;
        if y < 0.0 {
            y = (self.anchor.bottom() + config.gap).min((screen_height - height).max(0.0));
        }

        self.bounds = Rect::new(x, y, width, height);
    }

    /// Returns true if layout placed the tooltip below its anchor.
    #[must_use]
    pub fn is_below_anchor(&self) -> bool {
        self.bounds.y >= self.anchor.bottom()
    }

    /// Generates render commands for this tooltip.
    pub fn render(&self, commands: &mut Vec<RenderCommand>) {
        let config = &self.config;
        let (anchor_x, _) = self.anchor.center();
        let half_nub = config.nub_size * 0.5;
        let nub_y = if self.is_below_anchor() {
            self.bounds.y - half_nub
        } else {
            self.bounds.bottom() - half_nub
        };

        commands.push(RenderCommand::Rect {
            bounds: Rect::new(anchor_x - half_nub, nub_y, config.nub_size, config.nub_size),
            color: config.background,
            corner_radius: 0.0,
        });

        commands.push(RenderCommand::Rect {
            bounds: self.bounds,
            color: config.background,
            corner_radius: 4.0,
        });

        let (text_x, text_y) = self.bounds.center();
        commands.push(RenderCommand::Text {
            text: self.text.clone(),
            x: text_x,
            y: text_y,
            color: config.text,
            font_size: config.font_size,
            align: TextAlign::Center,
        });
    }
}

/// Holds the tooltip currently shown by a widget.
#[derive(Debug, Clone)]
pub struct TooltipManager {
    /// Currently active tooltip (if any).
    current: Option<Tooltip>,
    /// Screen dimensions for clamping.
    screen_size: (f32, f32),
}

impl TooltipManager {
    /// Creates a new tooltip manager.
    #[must_use]
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            current: None,
            screen_size: (screen_width, screen_height),
        }
    }

    /// Updates screen size and re-lays out the active tooltip.
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_size = (width, height);
        if let Some(tooltip) = &mut self.current {
            tooltip.layout(width, height);
        }
    }

    /// Shows `text` for `anchor` immediately.
    ///
    /// Re-showing the same text for the same anchor keeps the existing
    /// tooltip.
    pub fn show(&mut self, text: &str, anchor: Rect) {
        if let Some(current) = &self.current {
            if current.text == text && current.anchor == anchor {
                return;
            }
        }
        let mut tooltip = Tooltip::new(text, anchor);
        tooltip.layout(self.screen_size.0, self.screen_size.1);
        self.current = Some(tooltip);
    }

    /// Hides the current tooltip.
    pub fn hide(&mut self) {
        self.current = None;
    }

    /// Returns true if a tooltip is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the current tooltip.
    #[must_use]
    pub fn current(&self) -> Option<&Tooltip> {
        self.current.as_ref()
    }

    /// Generates render commands for the active tooltip.
    pub fn render(&self, commands: &mut Vec<RenderCommand>) {
        if let Some(tooltip) = &self.current {
            tooltip.render(commands);
        }
    }
}

impl Default for TooltipManager {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_centered_above_anchor() {
        let anchor = Rect::new(200.0, 200.0, 32.0, 24.0);
        let mut tooltip = Tooltip::new("Value must smaller than 100", anchor);
        tooltip.layout(1920.0, 1080.0);

        let (tooltip_x, _) = tooltip.bounds.center();
        assert!((tooltip_x - 216.0).abs() < 0.01);
        assert!(tooltip.bounds.bottom() <= anchor.y);
        assert!(!tooltip.is_below_anchor());
    }

    #[test]
    fn test_tooltip_flips_and_clamps_at_screen_edge() {
        let anchor = Rect::new(0.0, 4.0, 32.0, 24.0);
        let mut tooltip = Tooltip::new("Value must greater than 0", anchor);
        tooltip.layout(1920.0, 1080.0);

        assert_eq!(tooltip.bounds.x, 0.0);
        assert!(tooltip.is_below_anchor());
    }

    #[test]
    fn test_manager_instant_show_and_hide() {
        let mut manager = TooltipManager::default();
        manager.show("Value must greater than 0", Rect::new(100.0, 100.0, 32.0, 24.0));
        assert!(manager.is_active());

        let mut commands = Vec::new();
        manager.render(&mut commands);
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[2].text(), Some("Value must greater than 0"));

        manager.hide();
        assert!(manager.current().is_none());
    }
}
