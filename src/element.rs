//! Element model: canvas elements, sparse updates, and the ordered store.
//!
//! This module defines the record type for one draggable rectangle
//! (`Element`), a sparse-update type for per-gesture-frame edits
//! (`PartialElement`), the fixed color palette (`Color`), and the runtime
//! store that owns all live elements (`ElementStore`).
//!
//! The store is an ordered list, not a map: insertion order is render order,
//! and the host draws the snapshot returned by `elements` back to front.
//! Mutations flow in from the editor engine; every mutation is a
//! replace-by-id over the latest snapshot.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_ELEMENT_SIZE;

/// Unique identifier for an element, assigned by the store at creation.
pub type ElementId = u64;

/// Background color of an element, drawn from a fixed palette at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
}

impl Color {
    /// The full palette, in the order new-element colors are drawn from.
    pub const PALETTE: [Color; 5] = [Self::Red, Self::Blue, Self::Yellow, Self::Green, Self::Purple];

    /// Pick a palette color uniformly at random.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::PALETTE[rng.random_range(0..Self::PALETTE.len())]
    }

    /// CSS color keyword for the host's background style.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Purple => "purple",
        }
    }
}

/// One draggable, resizable rectangle on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier, immutable after creation.
    pub id: ElementId,
    /// Offset in pixels from the container's top edge.
    pub top: f64,
    /// Offset in pixels from the container's left edge.
    pub left: f64,
    /// Width of the rectangle in pixels.
    pub width: f64,
    /// Height of the rectangle in pixels.
    pub height: f64,
    /// Palette color assigned at creation, immutable.
    pub color: Color,
    /// Background image URL, populated once the decorator fetch resolves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// `false` while a gesture frame is mutating this element, `true` at rest.
    /// Set at creation and cleared by every drag/resize update; not otherwise
    /// consumed by engine logic.
    pub update_end: bool,
}

/// Sparse update for an element. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialElement {
    /// New top offset, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    /// New left offset, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    /// New width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Background image URL, if being set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// New gesture flag, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_end: Option<bool>,
}

/// Ordered in-memory store of elements. The entire application state.
pub struct ElementStore {
    elements: Vec<Element>,
    next_id: ElementId,
}

impl ElementStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { elements: Vec::new(), next_id: 1 }
    }

    /// Append a new element with a freshly assigned id and default geometry
    /// (top 0, left 0, 100×100, no image, at rest). Returns a clone of the
    /// stored record.
    pub fn add(&mut self, color: Color) -> Element {
        let element = Element {
            id: self.next_id,
            top: 0.0,
            left: 0.0,
            width: DEFAULT_ELEMENT_SIZE,
            height: DEFAULT_ELEMENT_SIZE,
            color,
            image_url: None,
            update_end: true,
        };
        self.next_id += 1;
        self.elements.push(element.clone());
        element
    }

    /// Return a reference to the element matching `id`.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Merge a sparse update over the element matching `id`, leaving every
    /// other element untouched. Returns `false` (and changes nothing) when no
    /// element matches.
    pub fn apply_partial(&mut self, id: ElementId, partial: &PartialElement) -> bool {
        let Some(element) = self.elements.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        if let Some(top) = partial.top {
            element.top = top;
        }
        if let Some(left) = partial.left {
            element.left = left;
        }
        if let Some(width) = partial.width {
            element.width = width;
        }
        if let Some(height) = partial.height {
            element.height = height;
        }
        if let Some(ref url) = partial.image_url {
            element.image_url = Some(url.clone());
        }
        if let Some(update_end) = partial.update_end {
            element.update_end = update_end;
        }
        true
    }

    /// Remove the element matching `id`, returning it if it was present.
    /// No-op when absent.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(index))
    }

    /// The full snapshot in render order (insertion order).
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of elements currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the store contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for ElementStore {
    fn default() -> Self {
        Self::new()
    }
}
