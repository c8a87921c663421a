use crate::constants::*;
use anyhow::anyhow;
use hero_core::{RevealStyle, Section, SectionBand, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn read_viewport(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
        .max(0.0) as u32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
        .max(0.0) as u32;
    Viewport {
        width,
        height,
        device_pixel_ratio: window.device_pixel_ratio(),
    }
}

/// Keep the canvas backing store at CSS size times the (capped) pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w, h) = viewport.backing_size();
    canvas.set_width(w);
    canvas.set_height(h);
}

fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el: web::HtmlElement = document
        .create_element("div")
        .map_err(|e| anyhow!("{e:?}"))?
        .dyn_into()
        .map_err(|e| anyhow!("{e:?}"))?;
    el.set_class_name(class);
    Ok(el)
}

/// One rendered section: its block plus the text elements in stagger order.
pub struct SectionSurface {
    pub root: web::HtmlElement,
    pub elements: Vec<web::HtmlElement>,
}

/// Every DOM node the hero creates. The canvas itself is page-supplied and is
/// only styled, never created or removed, by us.
pub struct Surfaces {
    pub container: web::Element,
    pub canvas: web::HtmlCanvasElement,
    style: Option<web::Element>,
    rail: Option<web::HtmlElement>,
    pub rail_bar: Option<web::HtmlElement>,
    nav: Option<web::HtmlElement>,
    pub nav_items: Vec<web::HtmlElement>,
    pub sections: Vec<SectionSurface>,
    pub overlay: Option<web::HtmlElement>,
}

impl Surfaces {
    /// Build the output surfaces next to `canvas`. With `background_only`
    /// nothing but the style sheet and canvas class is set up.
    pub fn build(
        document: &web::Document,
        canvas: web::HtmlCanvasElement,
        sections: &[Section],
        logo: &str,
        menu_items: &[String],
        background_only: bool,
    ) -> anyhow::Result<Self> {
        let container: web::Element = canvas
            .parent_element()
            .or_else(|| document.body().map(Into::into))
            .ok_or_else(|| anyhow!("canvas has no parent to attach to"))?;
        let _ = container.class_list().add_1(CONTAINER_CLASS);
        let _ = canvas.class_list().add_1(CANVAS_CLASS);

        let style = document.create_element("style").map_err(|e| anyhow!("{e:?}"))?;
        style.set_text_content(Some(HERO_CSS));
        container
            .append_child(&style)
            .map_err(|e| anyhow!("{e:?}"))?;

        let mut surfaces = Self {
            container: container.clone(),
            canvas,
            style: Some(style),
            rail: None,
            rail_bar: None,
            nav: None,
            nav_items: Vec::new(),
            sections: Vec::new(),
            overlay: None,
        };
        if background_only {
            return Ok(surfaces);
        }

        let rail = create_div(document, RAIL_CLASS)?;
        let rail_bar = create_div(document, RAIL_BAR_CLASS)?;
        rail.append_child(&rail_bar).map_err(|e| anyhow!("{e:?}"))?;
        container.append_child(&rail).map_err(|e| anyhow!("{e:?}"))?;
        surfaces.rail = Some(rail);
        surfaces.rail_bar = Some(rail_bar);

        if !menu_items.is_empty() {
            let nav = create_div(document, NAV_CLASS)?;
            let logo_el = create_div(document, NAV_LOGO_CLASS)?;
            logo_el.set_text_content(Some(logo));
            nav.append_child(&logo_el).map_err(|e| anyhow!("{e:?}"))?;
            for label in menu_items {
                let item = create_div(document, NAV_ITEM_CLASS)?;
                item.set_text_content(Some(label));
                nav.append_child(&item).map_err(|e| anyhow!("{e:?}"))?;
                surfaces.nav_items.push(item);
            }
            container.append_child(&nav).map_err(|e| anyhow!("{e:?}"))?;
            surfaces.nav = Some(nav);
        }

        for section in sections {
            let root = create_div(document, SECTION_CLASS)?;
            root.set_attribute("data-section", &section.id)
                .map_err(|e| anyhow!("{e:?}"))?;
            let content = create_div(document, SECTION_CONTENT_CLASS)?;
            let mut elements = Vec::with_capacity(3);
            for (class, text) in [
                (HEADLINE_CLASS, &section.headline),
                (SUBHEADLINE_CLASS, &section.subheadline),
                (BODY_CLASS, &section.body),
            ] {
                let el = create_div(document, class)?;
                el.set_text_content(Some(text));
                content.append_child(&el).map_err(|e| anyhow!("{e:?}"))?;
                elements.push(el);
            }
            root.append_child(&content).map_err(|e| anyhow!("{e:?}"))?;
            container.append_child(&root).map_err(|e| anyhow!("{e:?}"))?;
            surfaces.sections.push(SectionSurface { root, elements });
        }

        let overlay = create_div(document, OVERLAY_CLASS)?;
        overlay.set_text_content(Some("Loading"));
        container
            .append_child(&overlay)
            .map_err(|e| anyhow!("{e:?}"))?;
        surfaces.overlay = Some(overlay);

        Ok(surfaces)
    }

    /// Document-space extents of the section blocks, for tracking and reveal.
    pub fn measure_bands(&self, scroll_y: f32) -> Vec<SectionBand> {
        self.sections
            .iter()
            .map(|s| {
                let rect = s.root.get_bounding_client_rect();
                SectionBand {
                    top: rect.top() as f32 + scroll_y,
                    height: rect.height() as f32,
                }
            })
            .collect()
    }

    /// Container extent used for scroll progress.
    pub fn container_metrics(&self, scroll_y: f32) -> (f32, f32) {
        let rect = self.container.get_bounding_client_rect();
        (rect.top() as f32 + scroll_y, rect.height() as f32)
    }

    /// Detach every node this component created. Safe to call twice.
    pub fn remove(&mut self) {
        if let Some(style) = self.style.take() {
            style.remove();
        }
        if let Some(rail) = self.rail.take() {
            rail.remove();
        }
        self.rail_bar = None;
        if let Some(nav) = self.nav.take() {
            nav.remove();
        }
        self.nav_items.clear();
        for section in self.sections.drain(..) {
            section.root.remove();
        }
        if let Some(overlay) = self.overlay.take() {
            overlay.remove();
        }
        let _ = self.container.class_list().remove_1(CONTAINER_CLASS);
        let _ = self.canvas.class_list().remove_1(CANVAS_CLASS);
    }
}

pub fn apply_reveal(el: &web::HtmlElement, style: &RevealStyle) {
    let css = el.style();
    let _ = css.set_property("opacity", &format!("{:.4}", style.opacity));
    let _ = css.set_property(
        "transform",
        &format!(
            "translateY({:.2}px) rotateX({:.2}deg)",
            style.offset_y, style.tilt_deg
        ),
    );
}

pub fn set_rail_scale(bar: &web::HtmlElement, scale: f32) {
    let _ = bar
        .style()
        .set_property("transform", &format!("scaleY({:.4})", scale));
}

pub fn set_nav_active(items: &[web::HtmlElement], active: usize) {
    for (i, item) in items.iter().enumerate() {
        let list = item.class_list();
        if i == active {
            let _ = list.add_1(NAV_ACTIVE_CLASS);
        } else {
            let _ = list.remove_1(NAV_ACTIVE_CLASS);
        }
    }
}
