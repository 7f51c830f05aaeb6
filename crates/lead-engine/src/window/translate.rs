//! `winit` → engine event conversion.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode as W, PhysicalKey};
use winit::window::Window as NativeWindow;

use crate::event::{
    Event, KeyCode, KeyPressEvent, KeyReleaseEvent, MouseButton, MouseButtonPressEvent,
    MouseButtonReleaseEvent, MouseMoveEvent, MouseScrollEvent, WindowCloseEvent,
    WindowFocusEvent, WindowLostFocusEvent, WindowMovedEvent, WindowResizeEvent,
};

/// Builds the engine event for a platform window event, if it has one.
///
/// Pointer coordinates are converted to logical pixels; sizes and window
/// positions stay physical.
pub(crate) fn translate_window_event(window: &NativeWindow, event: &WindowEvent) -> Option<Event> {
    let event = match event {
        WindowEvent::CloseRequested => Event::new(WindowCloseEvent),

        WindowEvent::Resized(size) => Event::new(WindowResizeEvent::new(size.width, size.height)),

        WindowEvent::Moved(pos) => Event::new(WindowMovedEvent::new(pos.x, pos.y)),

        WindowEvent::Focused(true) => Event::new(WindowFocusEvent),
        WindowEvent::Focused(false) => Event::new(WindowLostFocusEvent),

        WindowEvent::KeyboardInput { event, .. } => {
            let key = map_key(event.physical_key);
            match event.state {
                ElementState::Pressed => {
                    Event::new(KeyPressEvent::new(key, u32::from(event.repeat)))
                }
                ElementState::Released => Event::new(KeyReleaseEvent::new(key)),
            }
        }

        WindowEvent::MouseInput { state, button, .. } => {
            let button = map_mouse_button(*button);
            match state {
                ElementState::Pressed => Event::new(MouseButtonPressEvent::new(button)),
                ElementState::Released => Event::new(MouseButtonReleaseEvent::new(button)),
            }
        }

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical(window, *position);
            Event::new(MouseMoveEvent::new(x, y))
        }

        WindowEvent::MouseWheel { delta, .. } => {
            let (x, y) = match delta {
                MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                MouseScrollDelta::PixelDelta(p) => to_logical(window, *p),
            };
            Event::new(MouseScrollEvent::new(x, y))
        }

        _ => return None,
    };

    Some(event)
}

fn to_logical(window: &NativeWindow, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(window.scale_factor());
    (logical.x as f32, logical.y as f32)
}

pub(crate) fn map_mouse_button(b: WinitButton) -> MouseButton {
    match b {
        WinitButton::Left => MouseButton::Left,
        WinitButton::Right => MouseButton::Right,
        WinitButton::Middle => MouseButton::Middle,
        WinitButton::Back => MouseButton::Back,
        WinitButton::Forward => MouseButton::Forward,
        WinitButton::Other(v) => MouseButton::Other(v),
    }
}

pub(crate) fn map_key(pk: PhysicalKey) -> KeyCode {
    let PhysicalKey::Code(code) = pk else {
        // Native codes have no stable numeric form in winit 0.30.
        return KeyCode::Unknown(0);
    };

    match code {
        W::Escape => KeyCode::Escape,
        W::Enter | W::NumpadEnter => KeyCode::Enter,
        W::Tab => KeyCode::Tab,
        W::Backspace => KeyCode::Backspace,
        W::Space => KeyCode::Space,

        W::Insert => KeyCode::Insert,
        W::Delete => KeyCode::Delete,
        W::Home => KeyCode::Home,
        W::End => KeyCode::End,
        W::PageUp => KeyCode::PageUp,
        W::PageDown => KeyCode::PageDown,

        W::ArrowUp => KeyCode::ArrowUp,
        W::ArrowDown => KeyCode::ArrowDown,
        W::ArrowLeft => KeyCode::ArrowLeft,
        W::ArrowRight => KeyCode::ArrowRight,

        W::ShiftLeft | W::ShiftRight => KeyCode::Shift,
        W::ControlLeft | W::ControlRight => KeyCode::Control,
        W::AltLeft | W::AltRight => KeyCode::Alt,
        W::SuperLeft | W::SuperRight => KeyCode::Meta,

        W::KeyA => KeyCode::A,
        W::KeyB => KeyCode::B,
        W::KeyC => KeyCode::C,
        W::KeyD => KeyCode::D,
        W::KeyE => KeyCode::E,
        W::KeyF => KeyCode::F,
        W::KeyG => KeyCode::G,
        W::KeyH => KeyCode::H,
        W::KeyI => KeyCode::I,
        W::KeyJ => KeyCode::J,
        W::KeyK => KeyCode::K,
        W::KeyL => KeyCode::L,
        W::KeyM => KeyCode::M,
        W::KeyN => KeyCode::N,
        W::KeyO => KeyCode::O,
        W::KeyP => KeyCode::P,
        W::KeyQ => KeyCode::Q,
        W::KeyR => KeyCode::R,
        W::KeyS => KeyCode::S,
        W::KeyT => KeyCode::T,
        W::KeyU => KeyCode::U,
        W::KeyV => KeyCode::V,
        W::KeyW => KeyCode::W,
        W::KeyX => KeyCode::X,
        W::KeyY => KeyCode::Y,
        W::KeyZ => KeyCode::Z,

        W::Digit0 => KeyCode::Digit0,
        W::Digit1 => KeyCode::Digit1,
        W::Digit2 => KeyCode::Digit2,
        W::Digit3 => KeyCode::Digit3,
        W::Digit4 => KeyCode::Digit4,
        W::Digit5 => KeyCode::Digit5,
        W::Digit6 => KeyCode::Digit6,
        W::Digit7 => KeyCode::Digit7,
        W::Digit8 => KeyCode::Digit8,
        W::Digit9 => KeyCode::Digit9,

        W::F1 => KeyCode::F1,
        W::F2 => KeyCode::F2,
        W::F3 => KeyCode::F3,
        W::F4 => KeyCode::F4,
        W::F5 => KeyCode::F5,
        W::F6 => KeyCode::F6,
        W::F7 => KeyCode::F7,
        W::F8 => KeyCode::F8,
        W::F9 => KeyCode::F9,
        W::F10 => KeyCode::F10,
        W::F11 => KeyCode::F11,
        W::F12 => KeyCode::F12,

        other => KeyCode::Unknown(other as u32),
    }
}
