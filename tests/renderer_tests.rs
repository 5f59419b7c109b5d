//! Integration tests for StatusRenderer

mod common;
use common::*;

use bicolor_led_controller::{ControllerState, Millis, StatusRenderer};

#[test]
fn initial_render_shows_startup_state() {
    let mut display = MockDisplay::new();
    let mut state = ControllerState::new(Millis(0));
    let mut renderer = StatusRenderer::new(state.button_pressed());

    assert!(renderer.render(&mut state, &mut display));
    assert_eq!(display.last_values(), ("AUTO MODE", "RED", "NOT PRESSED"));
    assert_eq!(display.last_frame()[0], "Current State:");
    assert_eq!(display.last_frame()[3], "Current Colour:");
    assert_eq!(display.last_frame()[6], "Button State:");
    assert!(!state.is_dirty());
}

#[test]
fn render_is_noop_when_clean_and_button_unchanged() {
    let mut display = MockDisplay::new();
    let mut state = ControllerState::new(Millis(0));
    let mut renderer = StatusRenderer::new(state.button_pressed());

    renderer.render(&mut state, &mut display);
    assert!(!renderer.render(&mut state, &mut display));
    assert!(!renderer.render(&mut state, &mut display));
    assert_eq!(display.frame_count(), 1);
}

#[test]
fn dirty_state_triggers_exactly_one_redraw() {
    let mut led = MockLed::new();
    let mut display = MockDisplay::new();
    let mut state = ControllerState::new(Millis(0));
    let mut renderer = StatusRenderer::new(state.button_pressed());
    renderer.render(&mut state, &mut display);

    state.advance_color(&mut led);
    assert!(renderer.render(&mut state, &mut display));
    assert!(!renderer.render(&mut state, &mut display));
    assert_eq!(display.frame_count(), 2);
    assert_eq!(display.last_values(), ("AUTO MODE", "GREEN", "NOT PRESSED"));
}

#[test]
fn button_level_change_forces_redraw() {
    let mut display = MockDisplay::new();
    let mut state = ControllerState::new(Millis(0));
    let mut renderer = StatusRenderer::new(state.button_pressed());
    renderer.render(&mut state, &mut display);

    state.set_button_pressed(true);
    assert!(renderer.render(&mut state, &mut display));
    assert_eq!(display.last_values().2, "PRESSED");

    state.set_button_pressed(false);
    assert!(renderer.render(&mut state, &mut display));
    assert_eq!(display.last_values().2, "NOT PRESSED");
}

#[test]
fn fresh_renderer_draws_once_even_for_clean_state() {
    let mut display = MockDisplay::new();
    let mut state = ControllerState::new(Millis(0));
    let mut renderer = StatusRenderer::new(state.button_pressed());
    renderer.render(&mut state, &mut display);

    assert!(!state.is_dirty());
    let mut other = StatusRenderer::new(state.button_pressed());
    assert!(other.needs_redraw(&state));
    assert!(other.render(&mut state, &mut display));
    assert!(!other.render(&mut state, &mut display));
    assert_eq!(display.frame_count(), 2);
}
