use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Explicit per-component listener registry. Closures are registered at
/// construction and removed (and dropped) at teardown, so repeated
/// mount/unmount cycles leave nothing behind.
pub struct ListenerRegistry {
    entries: Vec<(web::EventTarget, &'static str, Closure<dyn FnMut()>)>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        closure: Closure<dyn FnMut()>,
    ) {
        match target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
            Ok(()) => self.entries.push((target.clone(), kind, closure)),
            Err(e) => log::error!("[events] failed to attach {kind} listener: {e:?}"),
        }
    }

    /// Remove every registered listener. Safe to call twice.
    pub fn clear(&mut self) {
        for (target, kind, closure) in self.entries.drain(..) {
            let _ = target.remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ListenerRegistry {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Attach the scroll and resize handlers. Handlers only write shared state;
/// the frame loop consumes it on the next tick.
pub fn wire(window: &web::Window, ctx: &Rc<RefCell<FrameContext>>, registry: &mut ListenerRegistry) {
    let target: web::EventTarget = window.clone().into();

    let ctx_scroll = ctx.clone();
    registry.add(
        &target,
        "scroll",
        Closure::wrap(Box::new(move || {
            ctx_scroll.borrow_mut().on_scroll();
        }) as Box<dyn FnMut()>),
    );

    let ctx_resize = ctx.clone();
    registry.add(
        &target,
        "resize",
        Closure::wrap(Box::new(move || {
            ctx_resize.borrow_mut().on_resize();
        }) as Box<dyn FnMut()>),
    );
}
