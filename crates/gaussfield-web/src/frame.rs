use crate::input::PointerState;
use crate::render::SvgSceneSurface;
use gaussfield_core::AnimationLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub anim: Rc<RefCell<AnimationLoop>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub scene: SvgSceneSurface,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = instant::now();
        let pointer = *self.pointer.borrow();
        let mut anim = self.anim.borrow_mut();
        anim.frame(now, &pointer);
        anim.render(&mut self.scene);
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame`, rescheduling after every frame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[loop] requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// Spawn particles on a fixed period, independent of the frame rate.
pub fn start_spawn_timer(anim: Rc<RefCell<AnimationLoop>>, interval_ms: u32) {
    let Some(w) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        anim.borrow_mut().spawn_particle(instant::now());
    }) as Box<dyn FnMut()>);
    let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
    match w.set_interval_with_callback_and_timeout_and_arguments_0(callback, interval_ms as i32) {
        Ok(_) => log::info!("[loop] spawning every {interval_ms} ms"),
        Err(e) => log::error!("[loop] setInterval failed: {:?}", e),
    }
    closure.forget();
}
