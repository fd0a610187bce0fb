//! # Widget Interaction Tests
//!
//! Drives a placed [`UnitInputWidget`] through whole frames the way a host
//! does: feed input, update, render into a [`UIRenderer`], inspect the batch.
//!
//! Run with: cargo test --package unit_input_ui --test widget_interaction

use unit_input_ui::widget::{DECREMENT_DISABLED_TOOLTIP, INCREMENT_DISABLED_TOOLTIP};
use unit_input_ui::{
    InputState, Key, MouseButton, Rect, TooltipWidget, UIRenderer, Unit, UnitInputConfig,
    UnitInputWidget, Widget, WidgetId,
};

fn widget(config: UnitInputConfig) -> UnitInputWidget {
    let mut widget = UnitInputWidget::new(WidgetId::new(1), config);
    widget.layout_at(40.0, 200.0);
    widget
}

fn frame_texts(widget: &UnitInputWidget) -> Vec<String> {
    let mut renderer = UIRenderer::new();
    renderer.begin_frame();
    widget.render(renderer.commands_mut());
    renderer.end_frame().texts().map(str::to_string).collect()
}

/// Press on one frame, release on the next.
fn click(widget: &mut UnitInputWidget, target: Rect) {
    let (x, y) = target.center();
    let mut input = InputState::new();
    input.set_mouse_pos(x, y);
    input.mouse_button_down(MouseButton::Left);
    widget.update(&input, 0.016);

    input.begin_frame();
    input.mouse_button_up(MouseButton::Left);
    widget.update(&input, 0.016);
}

fn press(widget: &mut UnitInputWidget, key: Key) {
    let mut input = InputState::new();
    input.key_down(key);
    widget.update(&input, 0.016);
}

/// Focuses the field, clears it and types `text`.
fn replace_text(widget: &mut UnitInputWidget, text: &str) {
    let field = widget.layout().field;
    click(widget, field);
    while !widget.field_text().is_empty() {
        press(widget, Key::Backspace);
    }
    let mut input = InputState::new();
    input.text(text);
    widget.update(&input, 0.016);
}

#[test]
fn test_default_widget_renders_all_labels() {
    let texts = frame_texts(&widget(UnitInputConfig::default()));
    for expected in ["Unit", "%", "px", "Value", "-", "0", "+"] {
        assert!(texts.iter().any(|t| t == expected), "missing {expected:?} in {texts:?}");
    }
}

#[test]
fn test_default_value_fifty_enables_both_steppers() {
    let widget = widget(UnitInputConfig::default().with_value(50.0));
    assert!(widget.decrement_button().is_enabled());
    assert!(widget.increment_button().is_enabled());
    assert_eq!(widget.field_text(), "50");
}

#[test]
fn test_pixel_default_never_disables_increment() {
    let mut widget = widget(UnitInputConfig::default().with_unit(Unit::Pixel).with_value(250.0));
    assert!(widget.unit_toggle(Unit::Pixel).is_active());
    assert!(!widget.unit_toggle(Unit::Percent).is_active());
    assert!(widget.increment_button().is_enabled());

    let increment = widget.layout().increment;
    click(&mut widget, increment);
    assert_eq!(widget.value(), 251.0);
}

#[test]
fn test_steppers_walk_to_the_bounds() {
    let mut widget = widget(UnitInputConfig::default().with_value(98.0));
    let increment = widget.layout().increment;
    for _ in 0..5 {
        click(&mut widget, increment);
    }
    assert_eq!(widget.value(), 100.0);
    assert!(!widget.increment_button().is_enabled());

    let decrement = widget.layout().decrement;
    for _ in 0..105 {
        click(&mut widget, decrement);
    }
    assert_eq!(widget.value(), 0.0);
    assert!(!widget.decrement_button().is_enabled());
}

#[test]
fn test_typed_value_clamps_in_percent_only() {
    let mut percent = widget(UnitInputConfig::default());
    replace_text(&mut percent, "150");
    assert_eq!(percent.value(), 100.0);
    assert_eq!(percent.field_text(), "100");

    let mut pixel = widget(UnitInputConfig::default().with_unit(Unit::Pixel));
    replace_text(&mut pixel, "150");
    assert_eq!(pixel.value(), 150.0);
    assert_eq!(pixel.field_text(), "150");
}

#[test]
fn test_switching_to_percent_clamps_typed_pixels() {
    let mut widget = widget(UnitInputConfig::default().with_unit(Unit::Pixel));
    replace_text(&mut widget, "1,5");
    assert_eq!(widget.value(), 1.5);

    replace_text(&mut widget, "400");
    let percent = widget.layout().percent_toggle;
    click(&mut widget, percent);

    assert!(!widget.is_field_focused());
    assert_eq!(widget.unit(), Unit::Percent);
    assert_eq!(widget.value(), 100.0);
    assert!(frame_texts(&widget).iter().any(|t| t == "100"));
}

#[test]
fn test_garbage_keeps_value_and_enter_restores_text() {
    let mut widget = widget(UnitInputConfig::default().with_value(7.0));
    replace_text(&mut widget, "abc");
    assert_eq!(widget.value(), 7.0);
    assert_eq!(widget.field_text(), "");

    press(&mut widget, Key::Enter);
    assert!(!widget.is_field_focused());
    assert_eq!(widget.field_text(), "7");
}

#[test]
fn test_hovering_disabled_steppers_shows_tooltips() {
    let mut widget = widget(UnitInputConfig::default());
    let mut input = InputState::new();

    let (x, y) = widget.layout().decrement.center();
    input.set_mouse_pos(x, y);
    widget.update(&input, 0.016);
    assert_eq!(widget.tooltip_text(), Some(DECREMENT_DISABLED_TOOLTIP));
    assert!(frame_texts(&widget).iter().any(|t| t == DECREMENT_DISABLED_TOOLTIP));

    let increment = widget.layout().increment;
    for _ in 0..100 {
        click(&mut widget, increment);
    }
    let (x, y) = increment.center();
    input.set_mouse_pos(x, y);
    widget.update(&input, 0.016);
    assert_eq!(widget.tooltip_text(), Some(INCREMENT_DISABLED_TOOLTIP));

    let tooltip = widget.tooltip().map(|t| t.bounds);
    assert!(tooltip.is_some_and(|bounds| bounds.bottom() <= increment.y));
}

#[test]
fn test_enabled_stepper_has_no_tooltip() {
    let mut widget = widget(UnitInputConfig::default().with_value(50.0));
    let (x, y) = widget.layout().increment.center();
    let mut input = InputState::new();
    input.set_mouse_pos(x, y);
    widget.update(&input, 0.016);
    assert_eq!(widget.tooltip_text(), None);
}
