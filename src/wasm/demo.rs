//! Flag demo wired into `static/index.html`.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use super::loader::add_wavable_image;
use crate::config::{ImageOptions, Orientation};
use crate::error::WaveError;

/// Still flag shown behind the canvas.
const FLAG_BACKGROUND: &str = "flag-left.png";
/// Flag drawn into the canvas and waved.
const FLAG_IMAGE: &str = "flag-right.png";

#[derive(Clone, Copy)]
struct FlagSlot {
    container_id: &'static str,
    canvas_id: &'static str,
    title: &'static str,
    orientation: Orientation,
}

const FLAGS: [FlagSlot; 2] = [
    FlagSlot {
        container_id: "flag-horizontal",
        canvas_id: "flag-horizontal-canvas",
        title: "wave a flag horizontally",
        orientation: Orientation::Horizontal,
    },
    FlagSlot {
        container_id: "flag-vertical",
        canvas_id: "flag-vertical-canvas",
        title: "wave a flag vertically",
        orientation: Orientation::Vertical,
    },
];

/// Put a waving flag into every flag container present on the page.
pub fn add_wavable_flags(document: &Document) -> Result<(), WaveError> {
    for slot in FLAGS {
        let Some(container) = document.get_element_by_id(slot.container_id) else {
            log::debug!("#{} not on page", slot.container_id);
            continue;
        };
        let container: HtmlElement = container
            .dyn_into()
            .map_err(|_| WaveError::Host(format!("#{} is not an HTML element", slot.container_id)))?;

        container
            .style()
            .set_property("background-image", &format!("url({FLAG_BACKGROUND})"))
            .map_err(WaveError::host)?;
        container.set_inner_html(&format!(
            r#"<canvas id="{}" title="{}"></canvas>"#,
            slot.canvas_id, slot.title
        ));

        let mut options = ImageOptions::new(FLAG_IMAGE, slot.canvas_id);
        options.wave.orientation = Some(slot.orientation);
        let pending = add_wavable_image(options)?;
        spawn_local(async move {
            match pending.await {
                Ok(handle) => handle.forget(),
                Err(e) => log::error!("#{}: {e}", slot.canvas_id),
            }
        });
    }
    Ok(())
}
