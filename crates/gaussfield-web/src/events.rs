use crate::constants::{
    stop_button_glyph, LANG_TOGGLE_ID, MENU_ID, MENU_TOGGLE_ID, STOP_BUTTON_ID,
};
use crate::dom;
use crate::locale::{Dictionary, Locale};
use crate::starfield::StarfieldLayer;
use crate::ui;
use gaussfield_core::{AnimationLoop, LoopState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Pause/resume on the stop button, keeping its glyph in sync.
pub fn wire_stop_button(document: &web::Document, anim: Rc<RefCell<AnimationLoop>>) {
    let Some(button) = document.get_element_by_id(STOP_BUTTON_ID) else {
        log::warn!("[ui] no #{STOP_BUTTON_ID}; animation cannot be paused");
        return;
    };
    ui::set_button_glyph(&button, stop_button_glyph(anim.borrow().is_paused()));
    dom::add_click_listener(document, STOP_BUTTON_ID, move || {
        let state = anim.borrow_mut().toggle_pause(instant::now());
        let paused = state == LoopState::Paused;
        ui::set_button_glyph(&button, stop_button_glyph(paused));
        log::info!("[ui] animation {}", if paused { "paused" } else { "resumed" });
    });
}

/// Rebuild the starfield on resize, and on scroll when the page grew.
pub fn wire_starfield_events(layer: Rc<RefCell<StarfieldLayer>>) {
    let on_resize = layer.clone();
    dom::add_window_listener("resize", move || on_resize.borrow_mut().on_resize());
    let on_scroll = layer;
    dom::add_window_listener("scroll", move || on_scroll.borrow_mut().on_scroll());
}

pub fn wire_menu_toggle(document: &web::Document) {
    let (Some(toggle), Some(menu)) = (
        document.get_element_by_id(MENU_TOGGLE_ID),
        document.get_element_by_id(MENU_ID),
    ) else {
        log::debug!("[ui] no menu on this page");
        return;
    };
    dom::add_click_listener(document, MENU_TOGGLE_ID, move || {
        ui::toggle_menu(&menu, &toggle);
    });
}

/// Swap every translatable string between the two locales on each click.
pub fn wire_locale_toggle(document: &web::Document, dictionary: Rc<Dictionary>) {
    let current = Rc::new(Cell::new(ui::page_locale(document)));
    let n = ui::apply_locale(document, &dictionary, current.get());
    log::info!(
        "[locale] {} ({} of {} entries applied)",
        current.get().tag(),
        n,
        dictionary.len()
    );

    let doc = document.clone();
    dom::add_click_listener(document, LANG_TOGGLE_ID, move || {
        let next: Locale = current.get().toggled();
        current.set(next);
        let n = ui::apply_locale(&doc, &dictionary, next);
        log::info!("[locale] switched to {} ({} strings)", next.tag(), n);
    });
}
