//! Headless demo host for the editor engine.
//!
//! Stands in for the host UI layer: feeds a short scripted session through
//! [`EditorCore`], spawns a fire-and-forget image fetch per created element,
//! and prints the final element snapshot as JSON.

use std::str::FromStr;
use std::sync::Arc;

use tokio::task::JoinHandle;

use moveboard::consts::{DEFAULT_CONTAINER_HEIGHT, DEFAULT_CONTAINER_WIDTH};
use moveboard::element::ElementId;
use moveboard::engine::{Action, EditorCore};
use moveboard::geometry::Container;
use moveboard::image::{ImageError, ImageService};
use moveboard::input::{DragEvent, Key, ResizeEvent};

type Fetch = (ElementId, JoinHandle<Result<String, ImageError>>);

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// Process engine actions the way a real host would: log everything, spawn
/// an image fetch per created element.
fn process(actions: Vec<Action>, images: &Arc<ImageService>, fetches: &mut Vec<Fetch>) {
    for action in actions {
        match &action {
            Action::ElementAdded(element) => {
                tracing::info!(id = element.id, color = ?element.color, "element added");
            }
            Action::ElementUpdated { id, fields } => {
                tracing::info!(id, ?fields, "element updated");
            }
            Action::ElementRemoved { id } => {
                tracing::info!(id, "element removed");
            }
            Action::ImageRequested { id } => {
                let id = *id;
                let images = Arc::clone(images);
                fetches.push((id, tokio::spawn(async move { images.fetch_random_url().await })));
            }
            Action::RenderNeeded | Action::None => {}
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let width: f64 = env_parse("CONTAINER_WIDTH", DEFAULT_CONTAINER_WIDTH);
    let height: f64 = env_parse("CONTAINER_HEIGHT", DEFAULT_CONTAINER_HEIGHT);

    let images = Arc::new(ImageService::from_env());
    let mut editor = EditorCore::new();
    editor.set_container(Container::new(width, height));
    tracing::info!(width, height, base_url = images.base_url(), "editor ready");

    let mut fetches: Vec<Fetch> = Vec::new();

    for _ in 0..3 {
        let actions = editor.add_element();
        process(actions, &images, &mut fetches);
    }
    let ids: Vec<ElementId> = editor.elements().iter().map(|e| e.id).collect();

    // Drag the first element to the middle, then past the right edge.
    for client_x in [200.0, width - 50.0] {
        let element = editor.element(ids[0]).expect("element exists");
        let event = DragEvent {
            client_x,
            client_y: 200.0,
            top: 200.0,
            left: client_x,
            width: element.width,
            height: element.height,
        };
        let actions = editor.on_drag(ids[0], &event);
        process(actions, &images, &mut fetches);
    }

    // Resize the second element well past the container bounds.
    let event = ResizeEvent { width: width * 2.0, height: 150.0, translate_x: 0.0, translate_y: 0.0 };
    let actions = editor.on_resize(ids[1], &event);
    process(actions, &images, &mut fetches);

    // Select the third element and delete it with Backspace.
    let actions = editor.on_element_clicked(ids[2]);
    process(actions, &images, &mut fetches);
    let actions = editor.on_key_down(&Key("Backspace".into()));
    process(actions, &images, &mut fetches);

    // Drain the outstanding image fetches. The deleted element's fetch (if
    // still in flight) lands as a silent no-op.
    for (id, handle) in fetches {
        match handle.await {
            Ok(Ok(url)) => {
                editor.set_image(id, url);
                tracing::info!(id, "image attached");
            }
            Ok(Err(e)) => tracing::warn!(id, error = %e, "image fetch failed"),
            Err(e) => tracing::warn!(id, error = %e, "image fetch task failed"),
        }
    }

    let snapshot = serde_json::to_string_pretty(editor.elements()).expect("snapshot serializes");
    println!("{snapshot}");
}
