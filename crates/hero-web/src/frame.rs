use crate::{dom, overlay, render};
use glam::{Mat4, Vec3};
use hero_core::{
    reveal_progress, reveal_style, Camera, Layout, MeshUniforms, Palette, ScrollCoordinator,
    ScrollMetrics, SectionBand, SectionTracker, Viewport, BOB_AMPLITUDE, BOB_DECAY_PER_FRAME,
    BOB_FREQUENCY, IDLE_VELOCITY_THRESHOLD,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub surfaces: dom::Surfaces,
    palette: Palette,
    background_only: bool,

    coordinator: ScrollCoordinator,
    pub tracker: SectionTracker,
    bands: Vec<SectionBand>,

    viewport: Viewport,
    layout: Layout,
    camera: Camera,
    mesh_scale: f32,
    bob_y: f32,
    last_scroll_y: f32,

    pub gpu: Option<render::GpuState>,
    /// Cleared at teardown so late async init results are discarded.
    pub alive: bool,

    start: Instant,
    last: Instant,
    first_frame_presented: bool,
    applied_nav_active: Option<usize>,
}

impl FrameContext {
    pub fn new(
        surfaces: dom::Surfaces,
        palette: Palette,
        background_only: bool,
        viewport: Viewport,
    ) -> Self {
        let layout = viewport.layout();
        let now = Instant::now();
        Self {
            surfaces,
            palette,
            background_only,
            coordinator: ScrollCoordinator::new(),
            tracker: SectionTracker::new(Vec::new()),
            bands: Vec::new(),
            viewport,
            layout,
            camera: Camera::hero(viewport.aspect(), layout),
            mesh_scale: layout.mesh_scale(),
            bob_y: 0.0,
            last_scroll_y: 0.0,
            gpu: None,
            alive: true,
            start: now,
            last: now,
            first_frame_presented: false,
            applied_nav_active: None,
        }
    }

    /// Scroll handler: record progress, velocity, and section crossings. Only
    /// writes shared state; the next frame tick consumes it.
    pub fn on_scroll(&mut self) {
        let Some((window, _)) = dom::window_document() else {
            return;
        };
        let y = window.scroll_y().unwrap_or(0.0) as f32;
        self.last_scroll_y = y;
        let (container_top, container_height) = self.surfaces.container_metrics(y);
        let metrics = ScrollMetrics {
            container_top,
            container_height,
            viewport_height: self.viewport.height as f32,
        };
        self.coordinator.observe(y, &metrics);
        if !self.background_only {
            self.tracker.observe(y, self.viewport.height as f32);
        }
    }

    /// Resize handler. Idempotent for an unchanged viewport; the layout class
    /// (mesh scale and camera distance) changes at most once per breakpoint
    /// crossing.
    pub fn on_resize(&mut self) {
        let Some((window, _)) = dom::window_document() else {
            return;
        };
        let viewport = dom::read_viewport(&window);
        self.viewport = viewport;
        dom::sync_canvas_backing_size(&self.surfaces.canvas, &viewport);
        self.camera.aspect = viewport.aspect();
        let layout = viewport.layout();
        if layout != self.layout {
            self.layout = layout;
            self.mesh_scale = layout.mesh_scale();
            self.camera.eye.z = layout.camera_z();
            log::info!("[hero] layout -> {layout:?}");
        }
        if let Some(gpu) = &mut self.gpu {
            let (w, h) = viewport.backing_size();
            gpu.resize_if_needed(w, h);
        }
        if !self.background_only {
            self.remeasure();
        }
    }

    /// Re-read section geometry from the DOM after layout changes.
    pub fn remeasure(&mut self) {
        let bands = self.surfaces.measure_bands(self.last_scroll_y);
        self.tracker.set_bands(bands.clone());
        self.bands = bands;
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32();
        self.last = now;
        let t = (now - self.start).as_secs_f32();

        self.coordinator.advance(dt);
        self.tracker.advance(dt);

        // Gentle vertical bob while idle; decay it away while scrolling.
        if self.coordinator.velocity().abs() < IDLE_VELOCITY_THRESHOLD {
            self.bob_y = (t * BOB_FREQUENCY).sin() * BOB_AMPLITUDE;
        } else {
            self.bob_y *= BOB_DECAY_PER_FRAME;
        }

        if !self.background_only {
            self.drive_page_chrome();
        }

        let (rx, ry) = self.coordinator.rotation();
        let model = Mat4::from_translation(Vec3::new(0.0, self.bob_y, 0.0))
            * Mat4::from_rotation_x(rx)
            * Mat4::from_rotation_y(ry)
            * Mat4::from_scale(Vec3::splat(self.mesh_scale));

        if let Some(gpu) = &mut self.gpu {
            let uniforms = MeshUniforms::compose(
                model,
                self.camera.view_proj(),
                &self.palette,
                t,
                self.coordinator.velocity(),
                self.tracker.uniform_index(),
            );
            let (w, h) = self.viewport.backing_size();
            gpu.resize_if_needed(w, h);
            match gpu.render(&uniforms, t) {
                Ok(()) => {
                    if !self.first_frame_presented {
                        self.first_frame_presented = true;
                        if let Some(ov) = &self.surfaces.overlay {
                            overlay::mark_loaded(ov);
                        }
                        log::info!("[hero] first frame presented");
                    }
                }
                Err(e) => log::error!("[gpu] render error: {e:?}"),
            }
        }
    }

    fn drive_page_chrome(&mut self) {
        let vh = self.viewport.height as f32;
        for (band, section) in self.bands.iter().zip(&self.surfaces.sections) {
            let scrub = reveal_progress(band, self.last_scroll_y, vh);
            let count = section.elements.len();
            for (i, el) in section.elements.iter().enumerate() {
                dom::apply_reveal(el, &reveal_style(scrub, i, count));
            }
        }
        if let Some(bar) = &self.surfaces.rail_bar {
            dom::set_rail_scale(bar, self.coordinator.rail_scale());
        }
        let active = self.tracker.active();
        if self.applied_nav_active != Some(active) {
            dom::set_nav_active(&self.surfaces.nav_items, active);
            self.applied_nav_active = Some(active);
        }
    }
}

/// Handle for the requestAnimationFrame loop. Dropping it does not stop the
/// loop; teardown calls [`LoopHandle::stop`] explicitly.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl LoopHandle {
    /// Stop scheduling frames and cancel the pending callback. Safe to call
    /// more than once.
    pub fn stop(&self) {
        if self.running.replace(false) {
            if let Some(window) = web::window() {
                let _ = window.cancel_animation_frame(self.raf_id.get());
            }
        }
        // Break the closure's self-reference so it is dropped.
        self.tick.borrow_mut().take();
    }
}

pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(0));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let running_tick = running.clone();
    let raf_tick = raf_id.clone();
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        ctx.borrow_mut().frame();
        if !running_tick.get() {
            return;
        }
        if let Some(window) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    raf_tick.set(id);
                }
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(window) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_id.set(id);
            }
        }
    }
    LoopHandle {
        running,
        raf_id,
        tick,
    }
}
