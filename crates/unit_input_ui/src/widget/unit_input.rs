//! The composed unit input widget.
//!
//! Owns one [`ValueEditor`] and maps clicks and keystrokes onto it. Every
//! frame the toggles, stepper enabled states and the field text are derived
//! from the editor again, so the widget never disagrees with its model.

use unit_input_core::{
    format_value, sanitize_input, EditOutcome, Unit, UnitInputConfig, UnitInputResult, ValueEditor,
};

use super::button::{Button, ButtonKind};
use super::field::ValueField;
use super::tooltip::{Tooltip, TooltipManager};
use super::{TooltipWidget, Widget, WidgetId, WidgetResponse, WidgetState};
use crate::input::InputState;
use crate::layout::{Rect, UnitInputLayout};
use crate::render::{RenderCommand, TextAlign};
use crate::style::Palette;

/// Tooltip on the decrement button when the value is at the minimum.
pub const DECREMENT_DISABLED_TOOLTIP: &str = "Value must greater than 0";
/// Tooltip on the increment button when a percent value is at 100.
pub const INCREMENT_DISABLED_TOOLTIP: &str = "Value must smaller than 100";

/// Percent/pixel value editor widget.
#[derive(Debug, Clone)]
pub struct UnitInputWidget {
    /// Widget state.
    state: WidgetState,
    /// Unit and value.
    editor: ValueEditor,
    /// Resolved child rectangles.
    layout: UnitInputLayout,
    /// `%` toggle.
    percent_toggle: Button,
    /// `px` toggle.
    pixel_toggle: Button,
    /// `-` button.
    decrement: Button,
    /// Value text field.
    field: ValueField,
    /// `+` button.
    increment: Button,
    /// Disabled-button tooltip.
    tooltips: TooltipManager,
    /// Colours.
    palette: Palette,
}

impl UnitInputWidget {
    /// Font size of the row labels.
    pub const LABEL_FONT_SIZE: f32 = 14.0;
    /// Corner radius of the control groups.
    pub const GROUP_RADIUS: f32 = 6.0;

    /// Creates the widget from a configuration. Call [`Self::set_bounds`]
    /// before the first update.
    #[must_use]
    pub fn new(id: WidgetId, config: UnitInputConfig) -> Self {
        let editor = ValueEditor::new(config);
        let field = ValueField::new(id.child(5), editor.display_value());

        let mut widget = Self {
            state: WidgetState::new(id),
            editor,
            layout: UnitInputLayout::default(),
            percent_toggle: Button::new(id.child(1), ButtonKind::Toggle, Unit::Percent.symbol()),
            pixel_toggle: Button::new(id.child(2), ButtonKind::Toggle, Unit::Pixel.symbol()),
            decrement: Button::new(id.child(3), ButtonKind::Step, "-")
                .with_disabled_tooltip(DECREMENT_DISABLED_TOOLTIP),
            increment: Button::new(id.child(4), ButtonKind::Step, "+")
                .with_disabled_tooltip(INCREMENT_DISABLED_TOOLTIP),
            field,
            tooltips: TooltipManager::default(),
            palette: Palette::NEUTRAL,
        };
        widget.sync_controls();
        widget
    }

    /// Creates the widget from a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns the parse or validation error of
    /// [`UnitInputConfig::from_toml_str`].
    pub fn from_toml_str(id: WidgetId, text: &str) -> UnitInputResult<Self> {
        Ok(Self::new(id, UnitInputConfig::from_toml_str(text)?))
    }

    /// Returns the underlying editor.
    #[must_use]
    pub fn editor(&self) -> &ValueEditor {
        &self.editor
    }

    /// Returns the current unit.
    #[must_use]
    pub fn unit(&self) -> Unit {
        self.editor.unit()
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.editor.value()
    }

    /// Returns the text currently shown in the field.
    #[must_use]
    pub fn field_text(&self) -> &str {
        self.field.text()
    }

    /// Returns true while the field has keyboard focus.
    #[must_use]
    pub fn is_field_focused(&self) -> bool {
        self.field.is_focused()
    }

    /// Returns the `-` button.
    #[must_use]
    pub fn decrement_button(&self) -> &Button {
        &self.decrement
    }

    /// Returns the `+` button.
    #[must_use]
    pub fn increment_button(&self) -> &Button {
        &self.increment
    }

    /// Returns the toggle for `unit`.
    #[must_use]
    pub fn unit_toggle(&self, unit: Unit) -> &Button {
        match unit {
            Unit::Percent => &self.percent_toggle,
            Unit::Pixel => &self.pixel_toggle,
        }
    }

    /// Returns the resolved layout.
    #[must_use]
    pub fn layout(&self) -> &UnitInputLayout {
        &self.layout
    }

    /// Returns the tooltip currently shown, if any.
    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltips.current()
    }

    /// Places the widget and all of its parts inside `bounds`.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.layout = UnitInputLayout::compute(bounds);
        self.state.rect = bounds;
        self.percent_toggle.state_mut().rect = self.layout.percent_toggle;
        self.pixel_toggle.state_mut().rect = self.layout.pixel_toggle;
        self.decrement.state_mut().rect = self.layout.decrement;
        self.field.state_mut().rect = self.layout.field;
        self.increment.state_mut().rect = self.layout.increment;
        self.state.mark_dirty();
    }

    /// Places the widget at its preferred size with the top-left at `(x, y)`.
    pub fn layout_at(&mut self, x: f32, y: f32) {
        let (width, height) = self.preferred_size();
        self.set_bounds(Rect::new(x, y, width, height));
    }

    /// Sets the screen size the tooltip is kept inside.
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.tooltips.set_screen_size(width, height);
    }

    /// Returns true if anything needs redraw, clearing the flags.
    pub fn take_dirty(&mut self) -> bool {
        let mut dirty = false;
        for state in [
            &mut self.state,
            self.percent_toggle.state_mut(),
            self.pixel_toggle.state_mut(),
            self.decrement.state_mut(),
            self.field.state_mut(),
            self.increment.state_mut(),
        ] {
            dirty |= state.is_dirty();
            state.mark_clean();
        }
        dirty
    }

    /// Derives toggle, stepper and field state from the editor.
    fn sync_controls(&mut self) {
        let unit = self.editor.unit();
        self.percent_toggle.set_active(unit == Unit::Percent);
        self.pixel_toggle.set_active(unit == Unit::Pixel);
        self.decrement.set_enabled(!self.editor.is_decrement_disabled());
        self.increment.set_enabled(!self.editor.is_increment_disabled());
        if !self.field.is_focused() {
            self.field.set_text(self.editor.display_value());
        }
    }

    /// Feeds the field text to the editor.
    #[allow(clippy::float_cmp)]
    fn apply_edit(&mut self) -> bool {
        let before = self.editor.value();
        match self.editor.edit_text(self.field.text()) {
            EditOutcome::Clamped(value) => self.field.set_text(format_value(value)),
            EditOutcome::Accepted(_) | EditOutcome::Ignored => {
                let sanitized = sanitize_input(self.field.text());
                self.field.set_text(sanitized);
            }
        }
        self.editor.value() != before
    }

    /// Shows the tooltip of whichever disabled stepper is hovered.
    fn update_tooltip(&mut self) {
        let hovered = [&self.decrement, &self.increment]
            .into_iter()
            .find(|button| button.state().is_hovered() && button.tooltip_text().is_some());

        let shown = hovered
            .and_then(|button| button.tooltip_text().map(|text| (text, button.state().rect)));
        match shown {
            Some((text, anchor)) => self.tooltips.show(text, anchor),
            None => self.tooltips.hide(),
        }
    }

    /// Pushes a row label.
    fn render_label(&self, text: &str, cell: Rect, commands: &mut Vec<RenderCommand>) {
        let (_, y) = cell.center();
        commands.push(RenderCommand::Text {
            text: text.to_string(),
            x: cell.x,
            y,
            color: self.palette.label,
            font_size: Self::LABEL_FONT_SIZE,
            align: TextAlign::Left,
        });
    }
}

impl Widget for UnitInputWidget {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse {
        let mut response = WidgetResponse::default();
        self.state.track_hover(input, &mut response);

        // The field goes first: a click on a button blurs it before the
        // button sees the click.
        let field = self.field.update(input, dt);
        if field.changed {
            response.changed |= self.apply_edit();
        }
        if field.unfocused {
            response.changed |= self.editor.commit();
            self.field.set_text(self.editor.display_value());
        }
        response.focused = field.focused;
        response.unfocused = field.unfocused;
        response.submitted = field.submitted;

        if self.percent_toggle.update(input, dt).clicked {
            response.changed |= self.editor.switch_unit(Unit::Percent);
        }
        if self.pixel_toggle.update(input, dt).clicked {
            response.changed |= self.editor.switch_unit(Unit::Pixel);
        }

        self.sync_controls();
        if self.decrement.update(input, dt).clicked {
            response.changed |= self.editor.decrement();
        }
        if self.increment.update(input, dt).clicked {
            response.changed |= self.editor.increment();
        }

        self.sync_controls();
        self.update_tooltip();

        if response.changed {
            tracing::debug!(
                "Unit input {} now {}{}",
                self.state.id.raw(),
                self.editor.display_value(),
                self.editor.unit()
            );
            self.state.mark_dirty();
        }
        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        if !self.state.is_visible() {
            return;
        }
        let layout = &self.layout;

        self.render_label("Unit", layout.unit_label, commands);
        commands.push(RenderCommand::Rect {
            bounds: layout.toggle_group,
            color: self.palette.group,
            corner_radius: Self::GROUP_RADIUS,
        });
        self.percent_toggle.render(commands);
        self.pixel_toggle.render(commands);

        self.render_label("Value", layout.value_label, commands);
        commands.push(RenderCommand::Rect {
            bounds: layout.stepper_group,
            color: self.palette.group,
            corner_radius: Self::GROUP_RADIUS,
        });
        self.decrement.render(commands);
        self.field.render(commands);
        self.increment.render(commands);

        self.tooltips.render(commands);
    }

    fn min_size(&self) -> (f32, f32) {
        (UnitInputLayout::PREFERRED_WIDTH * 0.5, UnitInputLayout::HEIGHT)
    }

    fn preferred_size(&self) -> (f32, f32) {
        (UnitInputLayout::PREFERRED_WIDTH, UnitInputLayout::HEIGHT)
    }
}

impl TooltipWidget for UnitInputWidget {
    fn tooltip_text(&self) -> Option<&str> {
        self.tooltips.current().map(|tooltip| tooltip.text.as_str())
    }
}

impl Default for UnitInputWidget {
    fn default() -> Self {
        Self::new(WidgetId::new(1), UnitInputConfig::DEFAULT)
    }
}
