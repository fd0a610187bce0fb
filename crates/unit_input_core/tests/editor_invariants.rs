//! # Value Editor Invariant Tests
//!
//! Drives editors through long seeded sequences of random interactions and
//! checks the unit bounds after every single step:
//!
//! 1. **Percent**: `0 <= value <= 100`
//! 2. **Pixel**: `value >= min`
//! 3. **Switching**: percent → pixel never moves the value
//!
//! Run with: cargo test --package unit_input_core --test editor_invariants

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use unit_input_core::{EditOutcome, Unit, UnitInputConfig, ValueEditor, PERCENT_CEILING};

const STEPS: usize = 10_000;

fn assert_in_bounds(editor: &ValueEditor, context: &str) {
    let min = editor.config().min;
    let value = editor.value();
    assert!(value >= min, "{context}: {value} fell below min {min}");
    if editor.unit() == Unit::Percent {
        assert!(value <= PERCENT_CEILING, "{context}: {value}% exceeds the ceiling");
    }
}

fn random_text(rng: &mut StdRng) -> String {
    match rng.gen_range(0..4) {
        0 => String::new(),
        1 => format!("{:.2}", rng.gen_range(0.0..500.0)),
        2 => format!("{},{}", rng.gen_range(0..300), rng.gen_range(0..100)),
        _ => "a.b.c".to_string(),
    }
}

fn run_sequence(seed: u64, config: UnitInputConfig) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut editor = ValueEditor::new(config);
    editor.commit();
    assert_in_bounds(&editor, "initial commit");

    for step in 0..STEPS {
        let context = format!("seed {seed} step {step}");
        match rng.gen_range(0..6) {
            0 => {
                editor.increment();
            }
            1 => {
                editor.decrement();
            }
            2 => {
                let before = editor.value();
                let was_percent = editor.unit() == Unit::Percent;
                editor.switch_unit(Unit::Pixel);
                if was_percent {
                    assert_eq!(editor.value(), before, "{context}: % -> px moved the value");
                }
            }
            3 => {
                editor.switch_unit(Unit::Percent);
            }
            4 => {
                let before = editor.value();
                let text = random_text(&mut rng);
                if editor.edit_text(&text) == EditOutcome::Ignored {
                    assert_eq!(
                        editor.value(),
                        before,
                        "{context}: ignored edit {text:?} changed value"
                    );
                }
            }
            _ => {
                editor.commit();
            }
        }
        assert_in_bounds(&editor, &context);
    }
}

#[test]
fn test_default_config_stays_in_bounds() {
    for seed in 0..8 {
        run_sequence(seed, UnitInputConfig::default());
    }
}

#[test]
fn test_fractional_step_stays_in_bounds() {
    let config = UnitInputConfig::default().with_step(7.5).with_min(2.5).with_value(50.0);
    for seed in 100..104 {
        run_sequence(seed, config);
    }
}

#[test]
fn test_pixel_start_with_large_value() {
    let config = UnitInputConfig::default().with_unit(Unit::Pixel).with_value(900.0);
    for seed in 200..204 {
        run_sequence(seed, config);
    }
}

#[test]
fn test_increment_sequence_never_exceeds_ceiling() {
    for start in [0.0, 42.0, 99.0, 99.99, 100.0] {
        let mut editor =
            ValueEditor::new(UnitInputConfig::default().with_step(3.0).with_value(start));
        for _ in 0..200 {
            editor.increment();
            assert!(editor.value() <= PERCENT_CEILING);
        }
        assert_eq!(editor.value(), PERCENT_CEILING);
    }
}

#[test]
fn test_decrement_sequence_never_below_min() {
    let mut editor = ValueEditor::new(
        UnitInputConfig::default()
            .with_unit(Unit::Pixel)
            .with_min(3.0)
            .with_step(4.0)
            .with_value(250.0),
    );
    for _ in 0..200 {
        editor.decrement();
        assert!(editor.value() >= 3.0);
    }
    assert_eq!(editor.value(), 3.0);
    assert!(editor.is_decrement_disabled());
}

#[test]
fn test_config_file_round_trip() {
    let path = std::env::temp_dir().join(format!("unit_input_core_{}.toml", std::process::id()));
    std::fs::write(&path, "default_unit = \"px\"\nstep = 2\ndefault_value = 10\n").unwrap();

    let config = UnitInputConfig::from_toml_file(&path).unwrap();
    let mut editor = ValueEditor::new(config);
    editor.increment();
    assert_eq!(editor.unit(), Unit::Pixel);
    assert_eq!(editor.value(), 12.0);

    std::fs::remove_file(&path).ok();
}
