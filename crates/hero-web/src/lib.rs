#![cfg(target_arch = "wasm32")]
use hero_core::{default_sections, HeroConfig, Palette, Section};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");
    Ok(())
}

/// Construction inputs, built up from the page script. Everything is
/// optional; defaults reproduce the stock page.
#[wasm_bindgen]
pub struct HeroOptions {
    sections: Vec<Section>,
    palette: Palette,
    logo: String,
    menu_items: Vec<String>,
    background_only: bool,
}

#[wasm_bindgen]
impl HeroOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> HeroOptions {
        let defaults = HeroConfig::default();
        HeroOptions {
            sections: Vec::new(),
            palette: defaults.palette,
            logo: defaults.logo,
            menu_items: defaults.menu_items,
            background_only: false,
        }
    }

    pub fn section(&mut self, id: &str, headline: &str, subheadline: &str, body: &str) {
        self.sections
            .push(Section::new(id, headline, subheadline, body));
    }

    pub fn palette(
        &mut self,
        primary: &str,
        secondary: &str,
        tertiary: &str,
        accent: &str,
        dark: &str,
    ) -> Result<(), JsValue> {
        self.palette = Palette::from_hex(primary, secondary, tertiary, accent, dark)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn logo(&mut self, label: &str) {
        self.logo = label.to_string();
    }

    pub fn menu_item(&mut self, label: &str) {
        self.menu_items.push(label.to_string());
    }

    pub fn background_only(&mut self, on: bool) {
        self.background_only = on;
    }
}

impl Default for HeroOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroOptions {
    fn into_config(self) -> HeroConfig {
        HeroConfig {
            sections: if self.sections.is_empty() {
                default_sections()
            } else {
                self.sections
            },
            palette: self.palette,
            logo: self.logo,
            menu_items: self.menu_items,
            background_only: self.background_only,
        }
    }
}

struct Mounted {
    loop_handle: frame::LoopHandle,
    listeners: events::ListenerRegistry,
    ctx: Rc<RefCell<frame::FrameContext>>,
}

/// Handle to a mounted (or inert) hero. Dropping the handle leaves the hero
/// running for the page lifetime; `unmount` tears it down deterministically.
#[wasm_bindgen]
pub struct ScrollHero {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl ScrollHero {
    /// Mount onto `#hero-canvas`. When the canvas is absent the page is
    /// treated as not yet ready: no throw, no partial state, just an inert
    /// handle.
    pub fn mount(options: HeroOptions) -> ScrollHero {
        Self::mount_config(options.into_config())
    }

    /// Stop the frame loop, detach every listener and created DOM node, and
    /// release GPU resources. Safe to call repeatedly, and before the async
    /// renderer init has finished.
    pub fn unmount(&mut self) {
        let Some(mounted) = self.mounted.take() else {
            return;
        };
        mounted.loop_handle.stop();
        let mut listeners = mounted.listeners;
        listeners.clear();
        let mut ctx = mounted.ctx.borrow_mut();
        ctx.alive = false;
        ctx.gpu = None;
        ctx.surfaces.remove();
        log::info!("[hero] unmounted");
    }

    /// Index of the section currently owning the viewport center.
    pub fn active_section(&self) -> u32 {
        self.mounted
            .as_ref()
            .map(|m| m.ctx.borrow().tracker.active() as u32)
            .unwrap_or(0)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }
}

impl ScrollHero {
    fn mount_config(config: HeroConfig) -> ScrollHero {
        let inert = ScrollHero { mounted: None };
        let Some((window, document)) = dom::window_document() else {
            log::warn!("[hero] no window/document; setup skipped");
            return inert;
        };
        let Some(canvas_el) = document.get_element_by_id(constants::CANVAS_ID) else {
            log::info!("[hero] missing #{}; setup skipped", constants::CANVAS_ID);
            return inert;
        };
        let canvas: web::HtmlCanvasElement = match canvas_el.dyn_into() {
            Ok(canvas) => canvas,
            Err(_) => {
                log::error!("[hero] #{} is not a canvas; setup skipped", constants::CANVAS_ID);
                return inert;
            }
        };

        let viewport = dom::read_viewport(&window);
        dom::sync_canvas_backing_size(&canvas, &viewport);
        let section_count = config.sections.len();
        let surfaces = match dom::Surfaces::build(
            &document,
            canvas.clone(),
            &config.sections,
            &config.logo,
            &config.menu_items,
            config.background_only,
        ) {
            Ok(surfaces) => surfaces,
            Err(e) => {
                log::error!("[hero] failed to build surfaces: {e:?}");
                return inert;
            }
        };

        let ctx = Rc::new(RefCell::new(frame::FrameContext::new(
            surfaces,
            config.palette,
            config.background_only,
            viewport,
        )));
        {
            let mut ctx = ctx.borrow_mut();
            ctx.on_resize();
            ctx.on_scroll();
        }

        let mut listeners = events::ListenerRegistry::new();
        events::wire(&window, &ctx, &mut listeners);
        let loop_handle = frame::start_loop(ctx.clone());

        // Renderer init is async; frames run immediately and start presenting
        // once the device is ready.
        {
            let ctx = ctx.clone();
            let clear = config.palette.dark;
            spawn_local(async move {
                match render::GpuState::new(&canvas, clear).await {
                    Ok(gpu) => {
                        let mut ctx = ctx.borrow_mut();
                        if ctx.alive {
                            ctx.gpu = Some(gpu);
                            log::info!("[gpu] WebGPU renderer ready");
                        }
                    }
                    Err(e) => log::error!("[gpu] WebGPU init error: {e:?}"),
                }
            });
        }

        log::info!("[hero] mounted with {section_count} sections");
        ScrollHero {
            mounted: Some(Mounted {
                loop_handle,
                listeners,
                ctx,
            }),
        }
    }
}
