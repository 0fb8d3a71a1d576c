//! DOM-backed render surfaces.
//!
//! The starfield draws into a 2D canvas; the curve and particles live in an
//! SVG group so they scale with the plot's viewBox.

use crate::constants::SVG_NS;
use gaussfield_core::{path_data, Circle, SceneSurface, StarSurface};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasStarSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasStarSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }
}

impl StarSurface for CanvasStarSurface {
    fn resize(&mut self, width: u32, height: u32) {
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
    }

    fn clear_and_draw(&mut self, circles: &[Circle]) {
        let ctx = &self.ctx;
        ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        for c in circles {
            ctx.begin_path();
            let _ = ctx.arc(c.center.x, c.center.y, c.radius, 0.0, TAU);
            ctx.set_fill_style_str(&c.color.to_css());
            ctx.fill();
        }
    }
}

/// SVG path for the curve plus a pool of `<circle>` elements for particles.
pub struct SvgSceneSurface {
    document: web::Document,
    path: web::Element,
    container: web::Element,
    circles: Vec<web::Element>,
}

impl SvgSceneSurface {
    pub fn new(document: web::Document, path: web::Element, container: web::Element) -> Self {
        Self {
            document,
            path,
            container,
            circles: Vec::new(),
        }
    }

    fn grow_pool(&mut self, len: usize) {
        while self.circles.len() < len {
            let circle = match self.document.create_element_ns(Some(SVG_NS), "circle") {
                Ok(c) => c,
                Err(e) => {
                    log::error!("[render] create circle failed: {:?}", e);
                    return;
                }
            };
            if let Err(e) = self.container.append_child(&circle) {
                log::error!("[render] append circle failed: {:?}", e);
                return;
            }
            self.circles.push(circle);
        }
    }

    fn shrink_pool(&mut self, len: usize) {
        while self.circles.len() > len {
            if let Some(circle) = self.circles.pop() {
                let _ = self.container.remove_child(&circle);
            }
        }
    }
}

impl SceneSurface for SvgSceneSurface {
    fn draw_curve(&mut self, vertices: &[DVec2]) {
        let _ = self.path.set_attribute("d", &path_data(vertices));
    }

    fn draw_particles(&mut self, circles: &[Circle]) {
        self.grow_pool(circles.len());
        self.shrink_pool(circles.len());
        for (el, c) in self.circles.iter().zip(circles) {
            let _ = el.set_attribute("cx", &c.center.x.to_string());
            let _ = el.set_attribute("cy", &c.center.y.to_string());
            let _ = el.set_attribute("r", &c.radius.to_string());
            let _ = el.set_attribute("fill", &c.color.to_css());
        }
    }
}
