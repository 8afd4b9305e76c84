//! Keyboard, mouse and controller input.
//!
//! Every query goes straight to the engine; nothing is sampled or buffered
//! on the script side.

use std::sync::Arc;

use engine_host::{CursorMode, GamepadButton, HostResult, KeyCode, MouseButton};
use engine_math::Vector2;

use crate::runtime::ScriptContext;

#[derive(Debug, Clone)]
pub struct Input {
    context: Arc<ScriptContext>,
}

impl Input {
    pub(crate) fn new(context: Arc<ScriptContext>) -> Self {
        Self { context }
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> HostResult<bool> {
        self.context.host().is_key_pressed(key)
    }

    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> HostResult<bool> {
        self.context.host().is_mouse_button_pressed(button)
    }

    /// Cursor position in window coordinates.
    pub fn mouse_position(&self) -> HostResult<Vector2> {
        self.context.host().mouse_position()
    }

    pub fn is_controller_present(&self, id: i32) -> HostResult<bool> {
        self.context.host().is_controller_present(id)
    }

    pub fn connected_controller_ids(&self) -> HostResult<Vec<i32>> {
        self.context.host().controller_ids()
    }

    pub fn controller_name(&self, id: i32) -> HostResult<Option<String>> {
        self.context.host().controller_name(id)
    }

    pub fn is_controller_button_pressed(&self, id: i32, button: GamepadButton) -> HostResult<bool> {
        self.is_controller_button_index_pressed(id, button.index())
    }

    /// Like [`Input::is_controller_button_pressed`] for buttons outside the
    /// standard layout.
    pub fn is_controller_button_index_pressed(&self, id: i32, button: i32) -> HostResult<bool> {
        self.context.host().is_controller_button_pressed(id, button)
    }

    pub fn controller_axis(&self, id: i32, axis: i32) -> HostResult<f32> {
        self.context.host().controller_axis(id, axis)
    }

    pub fn controller_hat(&self, id: i32, hat: i32) -> HostResult<u8> {
        self.context.host().controller_hat(id, hat)
    }

    pub fn cursor_mode(&self) -> HostResult<CursorMode> {
        self.context.host().cursor_mode()
    }

    pub fn set_cursor_mode(&self, mode: CursorMode) -> HostResult<()> {
        self.context.host().set_cursor_mode(mode)
    }
}

#[cfg(test)]
mod tests {
    use engine_host::InMemoryHost;

    use super::*;
    use crate::runtime::ScriptRuntime;

    fn setup() -> (Arc<InMemoryHost>, Input) {
        let host = Arc::new(InMemoryHost::new());
        let input = ScriptRuntime::new(host.clone()).input();
        (host, input)
    }

    #[test]
    fn test_keyboard_and_mouse() {
        let (host, input) = setup();
        assert!(!input.is_key_pressed(KeyCode::W).unwrap());
        host.press_key(KeyCode::W);
        host.press_mouse_button(MouseButton::Right);
        host.move_mouse(Vector2::new(10.0, 20.0));

        assert!(input.is_key_pressed(KeyCode::W).unwrap());
        assert!(input.is_mouse_button_pressed(MouseButton::Right).unwrap());
        assert!(!input.is_mouse_button_pressed(MouseButton::Left).unwrap());
        assert_eq!(input.mouse_position().unwrap(), Vector2::new(10.0, 20.0));

        host.release_key(KeyCode::W);
        assert!(!input.is_key_pressed(KeyCode::W).unwrap());
    }

    #[test]
    fn test_controllers() {
        let (host, input) = setup();
        assert!(!input.is_controller_present(0).unwrap());
        assert_eq!(input.controller_name(0).unwrap(), None);

        host.connect_controller(0, "Pad");
        host.set_controller_button(0, GamepadButton::Start.index(), true);
        host.set_controller_button(0, 20, true);
        host.set_controller_axis(0, 1, -0.5);
        host.set_controller_hat(0, 0, 4);

        assert!(input.is_controller_present(0).unwrap());
        assert_eq!(input.connected_controller_ids().unwrap(), vec![0]);
        assert_eq!(input.controller_name(0).unwrap().as_deref(), Some("Pad"));
        assert!(input.is_controller_button_pressed(0, GamepadButton::Start).unwrap());
        assert!(!input.is_controller_button_pressed(0, GamepadButton::A).unwrap());
        assert!(input.is_controller_button_index_pressed(0, 20).unwrap());
        assert_eq!(input.controller_axis(0, 1).unwrap(), -0.5);
        assert_eq!(input.controller_hat(0, 0).unwrap(), 4);
    }

    #[test]
    fn test_cursor_mode() {
        let (_host, input) = setup();
        assert_eq!(input.cursor_mode().unwrap(), CursorMode::Normal);
        input.set_cursor_mode(CursorMode::Locked).unwrap();
        assert_eq!(input.cursor_mode().unwrap(), CursorMode::Locked);
    }
}
