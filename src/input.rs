//! Input model: the gesture event payloads and keyboard key wrapper consumed
//! by the editor engine.
//!
//! The host translates its native pointer/keyboard events into these types.
//! Pointer coordinates are in container space (origin at the container's
//! top-left corner), matching the coordinate system the clamp policies in
//! [`crate::geometry`] operate in.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// One frame of a resize gesture on an element's handle.
#[derive(Debug, Clone, Copy)]
pub struct ResizeEvent {
    /// Proposed new width from the gesture.
    pub width: f64,
    /// Proposed new height from the gesture.
    pub height: f64,
    /// Accumulated x offset of the anchor corner since the gesture started.
    pub translate_x: f64,
    /// Accumulated y offset of the anchor corner since the gesture started.
    pub translate_y: f64,
}

/// One frame of a drag gesture on an element's body.
#[derive(Debug, Clone, Copy)]
pub struct DragEvent {
    /// Pointer x position in container space.
    pub client_x: f64,
    /// Pointer y position in container space.
    pub client_y: f64,
    /// Top offset as reported by the gesture for this frame.
    pub top: f64,
    /// Left offset as reported by the gesture for this frame.
    pub left: f64,
    /// Width of the element's rendered box, as measured by the host.
    pub width: f64,
    /// Height of the element's rendered box, as measured by the host.
    pub height: f64,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the host (e.g.
/// `"Backspace"`, `"Escape"`). Deletion is the only keyboard interaction the
/// engine recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this key is the delete keystroke (`Backspace`).
    #[must_use]
    pub fn is_backspace(&self) -> bool {
        self.0 == "Backspace"
    }
}
