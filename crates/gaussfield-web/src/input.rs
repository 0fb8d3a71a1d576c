use crate::dom;
use gaussfield_core::InputSource;
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Last known pointer position and viewport size, in CSS pixels.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub position: DVec2,
    pub viewport: DVec2,
}

impl PointerState {
    /// Start centered in the current viewport.
    pub fn centered(viewport: DVec2) -> Self {
        Self {
            position: viewport / 2.0,
            viewport,
        }
    }
}

impl InputSource for PointerState {
    fn pointer(&self) -> DVec2 {
        self.position
    }
    fn viewport(&self) -> DVec2 {
        self.viewport
    }
}

pub struct InputWiring {
    pub pointer: Rc<RefCell<PointerState>>,
    pub cursor_dot: Option<web::HtmlElement>,
    pub touch: bool,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_mousemove(&w);
    if w.touch {
        wire_touchmove(&w);
    }
    let pointer = w.pointer.clone();
    dom::add_window_listener("resize", move || {
        pointer.borrow_mut().viewport = dom::viewport_size();
    });
}

fn wire_mousemove(w: &InputWiring) {
    let pointer = w.pointer.clone();
    // the cursor dot is a desktop nicety; touch devices have no hover cursor
    let cursor_dot = if w.touch { None } else { w.cursor_dot.clone() };
    let update_scheduled = Rc::new(Cell::new(false));

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        pointer.borrow_mut().position = pos;

        if let Some(dot) = &cursor_dot {
            if !update_scheduled.get() {
                update_scheduled.set(true);
                schedule_cursor_dot(dot.clone(), pointer.clone(), update_scheduled.clone());
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Move the dot on the next animation frame, coalescing bursts of mouse events.
fn schedule_cursor_dot(
    dot: web::HtmlElement,
    pointer: Rc<RefCell<PointerState>>,
    scheduled: Rc<Cell<bool>>,
) {
    let Some(wnd) = web::window() else {
        scheduled.set(false);
        return;
    };
    let cb = Closure::once_into_js(move || {
        let pos = pointer.borrow().position;
        let style = dot.style();
        let _ = style.set_property("left", &format!("{}px", pos.x));
        let _ = style.set_property("top", &format!("{}px", pos.y));
        scheduled.set(false);
    });
    if wnd.request_animation_frame(cb.unchecked_ref()).is_err() {
        log::warn!("[input] requestAnimationFrame failed; cursor dot not updated");
    }
}

fn wire_touchmove(w: &InputWiring) {
    let pointer = w.pointer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            pointer.borrow_mut().position =
                DVec2::new(touch.client_x() as f64, touch.client_y() as f64);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}
