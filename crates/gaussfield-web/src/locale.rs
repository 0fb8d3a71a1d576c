// Two-locale text swap.
//
// Translatable elements carry a `data-i18n` key; switching locale rewrites
// their text from a dictionary. Keys missing in the active locale fall back
// to English. Only a handful of built-in strings ship with the crate.

use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Parse a BCP-47-ish tag; only the primary language subtag matters.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.trim();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    /// The other locale.
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Es,
            Locale::Es => Locale::En,
        }
    }
}

const BUILTIN: &[(&str, &str, &str)] = &[
    // key, en, es
    ("nav.home", "Home", "Inicio"),
    ("nav.about", "About", "Acerca de"),
    ("nav.projects", "Projects", "Proyectos"),
    ("nav.contact", "Contact", "Contacto"),
    ("hero.title", "Everything follows a distribution", "Todo sigue una distribución"),
    (
        "hero.subtitle",
        "Move the pointer to reshape the curve",
        "Mueve el puntero para cambiar la curva",
    ),
    ("controls.pause", "Pause animation", "Pausar animación"),
    ("lang.toggle", "ES", "EN"),
];

#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    entries: FnvHashMap<(Locale, String), String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut d = Self::new();
        for (key, en, es) in BUILTIN {
            d.insert(Locale::En, key, en);
            d.insert(Locale::Es, key, es);
        }
        d
    }

    pub fn insert(&mut self, locale: Locale, key: &str, text: &str) {
        self.entries
            .insert((locale, key.to_string()), text.to_string());
    }

    /// Text for `key` in `locale`, falling back to English.
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.entries
            .get(&(locale, key.to_string()))
            .or_else(|| self.entries.get(&(Locale::En, key.to_string())))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
