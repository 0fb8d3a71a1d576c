#![cfg(target_arch = "wasm32")]
use gaussfield_core::{AnimationLoop, DeviceClass, DeviceHints, SceneConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod device;
mod dom;
mod events;
mod frame;
mod input;
mod locale;
mod render;
mod starfield;
mod ui;

use constants::{
    CURSOR_DOT_SELECTOR, CURVE_PATH_ID, DEVICE_OVERRIDE_ATTR, POINTS_CONTAINER_ID,
    STARFIELD_CANVAS_ID,
};

/// Logical scene, built before any element is touched.
struct Scene {
    config: SceneConfig,
    hints: DeviceHints,
    anim: Rc<RefCell<AnimationLoop>>,
    pointer: Rc<RefCell<input::PointerState>>,
}

fn device_override(document: &web::Document) -> Option<DeviceClass> {
    let raw = document.body()?.get_attribute(DEVICE_OVERRIDE_ATTR)?;
    match raw.parse() {
        Ok(d) => Some(d),
        Err(e) => {
            log::warn!("[config] ignoring {DEVICE_OVERRIDE_ATTR}: {e}");
            None
        }
    }
}

fn build_scene(document: &web::Document) -> anyhow::Result<Scene> {
    let viewport = dom::viewport_size();
    let hints = DeviceHints {
        mobile_user_agent: device::is_mobile_user_agent(&dom::user_agent()),
        device_override: device_override(document),
    };
    let device = hints.resolve(viewport.x);
    let config = SceneConfig::for_device(device);
    config.validate()?;
    log::info!(
        "[config] device={} points={} stars={} spawn={}ms",
        config.device,
        config.max_points,
        config.star_count,
        config.spawn_interval_ms
    );

    let anim = Rc::new(RefCell::new(AnimationLoop::new(
        &config,
        StdRng::from_entropy(),
    )));
    let pointer = Rc::new(RefCell::new(input::PointerState::centered(viewport)));
    Ok(Scene {
        config,
        hints,
        anim,
        pointer,
    })
}

fn bind_starfield(document: &web::Document, scene: &Scene) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = dom::element_by_id(document, STARFIELD_CANVAS_ID)?;
    let surface = render::CanvasStarSurface::new(canvas)?;
    let layer = Rc::new(RefCell::new(starfield::StarfieldLayer::new(
        surface,
        StdRng::from_entropy(),
        scene.config.device,
        scene.hints,
    )));
    layer.borrow_mut().rebuild();
    events::wire_starfield_events(layer);
    Ok(())
}

fn bind_curve(document: &web::Document, scene: &Scene) -> anyhow::Result<()> {
    let path: web::Element = dom::element_by_id(document, CURVE_PATH_ID)?;
    let container: web::Element = dom::element_by_id(document, POINTS_CONTAINER_ID)?;
    let scene_surface = render::SvgSceneSurface::new(document.clone(), path, container);

    let cursor_dot = document
        .query_selector(CURSOR_DOT_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    input::wire_input_handlers(input::InputWiring {
        pointer: scene.pointer.clone(),
        cursor_dot,
        touch: scene.config.device.is_constrained(),
    });
    events::wire_stop_button(document, scene.anim.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        anim: scene.anim.clone(),
        pointer: scene.pointer.clone(),
        scene: scene_surface,
    }));
    frame::start_loop(frame_ctx);
    frame::start_spawn_timer(scene.anim.clone(), scene.config.spawn_interval_ms);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gaussfield-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Phase one: pure state, no elements required.
    let scene = build_scene(&document)?;

    // Phase two: bind to the page once it has been parsed.
    dom::document_ready(&document).await?;

    // The layers are independent; one missing should not take down the other.
    if let Err(e) = bind_starfield(&document, &scene) {
        log::error!("[starfield] disabled: {:?}", e);
    }
    if let Err(e) = bind_curve(&document, &scene) {
        log::error!("[loop] curve disabled: {:?}", e);
    }
    events::wire_menu_toggle(&document);
    events::wire_locale_toggle(&document, Rc::new(locale::Dictionary::builtin()));
    Ok(())
}
