//! The editor engine: element collection, selection state, and the handlers
//! that turn host events into collection mutations.
//!
//! Handlers return [`Action`] values rather than performing host work
//! directly: the engine never renders and never touches the network. The host
//! re-renders on [`Action::RenderNeeded`], and spawns an image fetch on
//! [`Action::ImageRequested`], feeding the resolved URL back through
//! [`EditorCore::set_image`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::element::{Color, Element, ElementId, ElementStore, PartialElement};
use crate::geometry::{self, Container, Placement};
use crate::input::{DragEvent, Key, ResizeEvent};

/// Actions returned from engine handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    None,
    ElementAdded(Element),
    ElementUpdated { id: ElementId, fields: PartialElement },
    ElementRemoved { id: ElementId },
    ImageRequested { id: ElementId },
    RenderNeeded,
}

/// Core editor state: the element collection, the selected element, and the
/// container bounds every gesture is clamped against.
pub struct EditorCore {
    pub store: ElementStore,
    pub selected_id: Option<ElementId>,
    pub container: Container,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self {
            store: ElementStore::new(),
            selected_id: None,
            container: Container::default(),
        }
    }
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the container bounds, as measured by the host's layout.
    pub fn set_container(&mut self, container: Container) {
        self.container = container;
    }

    // --- Creation ---

    /// Append a new element with a random palette color and default geometry.
    ///
    /// Emits the created record, a request for the host to fetch its
    /// background image, and a render.
    pub fn add_element(&mut self) -> Vec<Action> {
        let color = Color::random(&mut rand::rng());
        let element = self.store.add(color);
        let id = element.id;
        vec![Action::ElementAdded(element), Action::ImageRequested { id }, Action::RenderNeeded]
    }

    // --- Selection ---

    /// Select the clicked element. Clicking an unknown id (or re-clicking the
    /// current selection) changes nothing.
    pub fn on_element_clicked(&mut self, id: ElementId) -> Vec<Action> {
        if self.store.get(id).is_none() || self.selected_id == Some(id) {
            return Vec::new();
        }
        self.selected_id = Some(id);
        vec![Action::RenderNeeded]
    }

    // --- Gestures ---

    /// Apply one drag frame to an element.
    ///
    /// Each position produced by the clamp policy becomes its own
    /// replace-by-id update, marked as a live gesture frame
    /// (`update_end: false`). A drag frame the policy rejects outright
    /// (upper/left overflow) leaves the collection untouched.
    pub fn on_drag(&mut self, id: ElementId, event: &DragEvent) -> Vec<Action> {
        if self.store.get(id).is_none() {
            return Vec::new();
        }
        let mut actions = Vec::new();
        for position in geometry::clamp_drag(self.container, event) {
            let fields = PartialElement {
                top: Some(position.top),
                left: Some(position.left),
                update_end: Some(false),
                ..Default::default()
            };
            if self.store.apply_partial(id, &fields) {
                actions.push(Action::ElementUpdated { id, fields });
            }
        }
        if !actions.is_empty() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Apply one resize frame to an element, clamping the proposed dimensions
    /// against the container before writing them back.
    pub fn on_resize(&mut self, id: ElementId, event: &ResizeEvent) -> Vec<Action> {
        let Some(element) = self.store.get(id) else {
            return Vec::new();
        };
        let current = Placement {
            top: element.top,
            left: element.left,
            width: element.width,
            height: element.height,
        };
        let clamped = geometry::clamp_resize(current, self.container, event);
        let fields = PartialElement {
            top: Some(clamped.top),
            left: Some(clamped.left),
            width: Some(clamped.width),
            height: Some(clamped.height),
            update_end: Some(false),
            ..Default::default()
        };
        self.store.apply_partial(id, &fields);
        vec![Action::ElementUpdated { id, fields }, Action::RenderNeeded]
    }

    // --- Keyboard ---

    /// Handle a keypress. `Backspace` removes the selected element; every
    /// other key (or `Backspace` with nothing selected) is a no-op.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if !key.is_backspace() {
            return Vec::new();
        }
        let Some(id) = self.selected_id else {
            return Vec::new();
        };
        if self.store.remove(id).is_none() {
            return Vec::new();
        }
        self.selected_id = None;
        vec![Action::ElementRemoved { id }, Action::RenderNeeded]
    }

    // --- Image decoration ---

    /// Store a fetched background image URL on an element.
    ///
    /// A fetch that resolves after its element was deleted lands here as a
    /// silent no-op and returns [`Action::None`].
    pub fn set_image(&mut self, id: ElementId, url: String) -> Action {
        let fields = PartialElement { image_url: Some(url), ..Default::default() };
        if self.store.apply_partial(id, &fields) {
            Action::ElementUpdated { id, fields }
        } else {
            Action::None
        }
    }

    // --- Queries ---

    /// The currently selected element, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.selected_id
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.store.get(id)
    }

    /// The full element snapshot in render order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        self.store.elements()
    }
}
