use crate::palette::Palette;
use crate::sections::{default_sections, Section};

/// Construction inputs for the hero. Everything is optional on the caller
/// side; the defaults reproduce the stock marketing page.
#[derive(Clone, Debug)]
pub struct HeroConfig {
    pub sections: Vec<Section>,
    pub palette: Palette,
    pub logo: String,
    pub menu_items: Vec<String>,
    pub background_only: bool,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            sections: default_sections(),
            palette: Palette::default(),
            logo: "GROVE".to_string(),
            menu_items: Vec::new(),
            background_only: false,
        }
    }
}
