use crate::dom;
use crate::render::CanvasStarSurface;
use gaussfield_core::{DeviceClass, DeviceHints, Starfield};
use rand::rngs::StdRng;

/// Canvas-backed starfield plus the page events that rebuild it.
pub struct StarfieldLayer {
    field: Starfield,
    surface: CanvasStarSurface,
    rng: StdRng,
    hints: DeviceHints,
}

impl StarfieldLayer {
    pub fn new(
        surface: CanvasStarSurface,
        rng: StdRng,
        device: DeviceClass,
        hints: DeviceHints,
    ) -> Self {
        Self {
            field: Starfield::new(device.star_count()),
            surface,
            rng,
            hints,
        }
    }

    /// Size the canvas to the document and draw a fresh set of stars.
    pub fn rebuild(&mut self) {
        let (w, h) = dom::document_size();
        self.field.rebuild(w, h, &mut self.rng, &mut self.surface);
    }

    /// Viewport resized: re-evaluate the device class, then rebuild.
    pub fn on_resize(&mut self) {
        let device = self.hints.resolve(dom::viewport_size().x);
        if self.field.on_viewport(device) {
            log::info!(
                "[starfield] device class now {}, {} stars",
                device,
                self.field.star_count()
            );
        }
        self.rebuild();
    }

    /// Scrolled: rebuild only if the document grew past the canvas.
    pub fn on_scroll(&mut self) {
        let (_, h) = dom::document_size();
        if self.field.needs_growth(h) {
            log::debug!(
                "[starfield] document grew to {}px (canvas {}px)",
                h,
                self.field.height()
            );
            self.rebuild();
        }
    }
}
