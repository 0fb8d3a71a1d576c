use crate::constants::{I18N_ATTR, MENU_OPEN_CLASS};
use crate::locale::{Dictionary, Locale};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Flip the menu's open class and mirror it on the toggle's `aria-expanded`.
pub fn toggle_menu(menu: &web::Element, toggle: &web::Element) -> bool {
    let open = menu
        .class_list()
        .toggle(MENU_OPEN_CLASS)
        .unwrap_or(false);
    let _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
    open
}

pub fn set_button_glyph(button: &web::Element, glyph: &str) {
    button.set_inner_html(glyph);
}

/// Current page locale from `<html lang>`, defaulting to English.
pub fn page_locale(document: &web::Document) -> Locale {
    document
        .document_element()
        .and_then(|el| el.get_attribute("lang"))
        .and_then(|tag| Locale::from_tag(&tag))
        .unwrap_or_default()
}

/// Rewrite every `[data-i18n]` element's text for `locale`. Returns how many
/// elements were updated; unknown keys are left as they are.
pub fn apply_locale(document: &web::Document, dictionary: &Dictionary, locale: Locale) -> usize {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", locale.tag());
    }
    let nodes = match document.query_selector_all(&format!("[{I18N_ATTR}]")) {
        Ok(n) => n,
        Err(e) => {
            log::warn!("[locale] query failed: {:?}", e);
            return 0;
        }
    };
    let mut updated = 0;
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(key) = el.get_attribute(I18N_ATTR) else {
            continue;
        };
        match dictionary.lookup(locale, &key) {
            Some(text) => {
                el.set_text_content(Some(text));
                updated += 1;
            }
            None => log::debug!("[locale] no text for {key:?}"),
        }
    }
    updated
}
