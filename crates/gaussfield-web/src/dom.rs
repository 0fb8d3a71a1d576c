use glam::DVec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up `id` and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{id} has unexpected type: {:?}", e))
}

/// Run `handler` on clicks of `#element_id`. Pages without the element
/// just lose the control.
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::debug!("[ui] no #{element_id}; click handler skipped");
        return;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        log::error!("[ui] #{element_id}: addEventListener failed: {:?}", e);
    }
    closure.forget();
}

#[inline]
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> DVec2 {
    let Some(w) = web::window() else {
        return DVec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    DVec2::new(width, height)
}

/// Full scrollable document size, never smaller than the viewport height.
pub fn document_size() -> (u32, u32) {
    let viewport = viewport_size();
    let root = window_document().and_then(|d| d.document_element());
    let (scroll_w, scroll_h) = root
        .map(|el| (el.scroll_width(), el.scroll_height()))
        .unwrap_or((0, 0));
    let width = if scroll_w > 0 {
        scroll_w as f64
    } else {
        viewport.x
    };
    let height = (scroll_h as f64).max(viewport.y);
    (width as u32, height as u32)
}

pub fn user_agent() -> String {
    web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

/// Resolve once the DOM has been parsed.
pub async fn document_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("DOMContentLoaded wait failed: {:?}", e))?;
    Ok(())
}
