//! Editor core for a bounded canvas of draggable, resizable elements.
//!
//! This crate owns the full editor logic: translating host gesture events into
//! element mutations, clamping drag and resize geometry to the container
//! bounds, tracking the selected element, and fetching a placeholder
//! background image per element. The host UI layer is responsible only for
//! wiring pointer/keyboard events to the engine and re-rendering from the
//! element snapshot whenever a handler returns [`engine::Action::RenderNeeded`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::EditorCore`] and the host [`engine::Action`] protocol |
//! | [`element`] | Element records, sparse updates, and the ordered store |
//! | [`geometry`] | Container bounds and the drag/resize clamp policies |
//! | [`input`] | Gesture event payloads and the keyboard key wrapper |
//! | [`image`] | Placeholder-photo fetcher for element backgrounds |
//! | [`consts`] | Shared numeric constants (default sizes, photo index range) |

pub mod consts;
pub mod element;
pub mod engine;
pub mod geometry;
pub mod image;
pub mod input;
