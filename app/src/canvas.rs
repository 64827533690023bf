//! Canvas binding for the seasonal particle effects
//!
//! [`AnimationLoop`] owns the `requestAnimationFrame` chain, the window
//! `resize` listener and the [`EffectRun`] they drive. Dropping it stops the
//! run, cancels a pending frame and detaches the listener.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::particles::{EffectRun, Surface, Viewport};
use folio_types::EffectDefinition;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::utils::{EventListener, viewport_size};

pub const CANVAS_ID: &str = "seasonal-effects-canvas";

// ─────────────────────────────────────────────────────────────────────────────
// Surface over CanvasRenderingContext2d
// ─────────────────────────────────────────────────────────────────────────────

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn set_blur(&mut self, px: f64) {
        if px > 0.0 {
            self.ctx.set_filter(&format!("blur({}px)", px));
        } else {
            self.ctx.set_filter("none");
        }
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str, alpha: f64) {
        self.ctx.begin_path();
        if self.ctx.arc(x, y, radius.max(0.0), 0.0, TAU).is_err() {
            return;
        }
        self.ctx.set_global_alpha(alpha);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn fill_rotated_square(
        &mut self,
        x: f64,
        y: f64,
        size: f64,
        rotation: f64,
        color: &str,
        alpha: f64,
    ) {
        self.ctx.save();
        let placed = self.ctx.translate(x, y).and_then(|_| self.ctx.rotate(rotation));
        if placed.is_ok() {
            self.ctx.set_global_alpha(alpha);
            self.ctx.set_fill_style_str(color);
            self.ctx.fill_rect(-size / 2.0, -size / 2.0, size, size);
        }
        self.ctx.restore();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Animation loop
// ─────────────────────────────────────────────────────────────────────────────

type FrameCallback = Closure<dyn FnMut(f64)>;

struct LoopState {
    run: EffectRun,
    surface: CanvasSurface,
    canvas: HtmlCanvasElement,
    /// Handle of the scheduled animation frame, if any
    pending: Option<i32>,
}

pub struct AnimationLoop {
    state: Rc<RefCell<LoopState>>,
    tick: Rc<RefCell<Option<FrameCallback>>>,
    _resize: Option<EventListener>,
}

impl AnimationLoop {
    /// Start animating `effect` on `canvas`. Returns `None` when the 2D
    /// context is unavailable; the effect is then skipped.
    pub fn start(canvas: HtmlCanvasElement, effect: &EffectDefinition) -> Option<Self> {
        let window = web_sys::window()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let viewport = viewport_size(&window);
        fit_canvas(&canvas, viewport);

        let state = Rc::new(RefCell::new(LoopState {
            run: EffectRun::start(effect.kind, &effect.settings, viewport),
            surface: CanvasSurface { ctx },
            canvas,
            pending: None,
        }));

        // The callback reschedules itself through `tick`; the cycle is
        // broken in Drop.
        let tick: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let frame_state = Rc::clone(&state);
        let next_tick = Rc::clone(&tick);
        *tick.borrow_mut() = Some(Closure::new(move |now: f64| {
            let mut guard = frame_state.borrow_mut();
            let st = &mut *guard;
            st.pending = None;
            if !st.run.frame(now, &mut st.surface) {
                return;
            }
            if let Some(callback) = next_tick.borrow().as_ref() {
                st.pending = request_frame(callback);
            }
        }));

        let resize_state = Rc::clone(&state);
        let resize = EventListener::window("resize", move |_| {
            if let Some(window) = web_sys::window() {
                let viewport = viewport_size(&window);
                let mut st = resize_state.borrow_mut();
                fit_canvas(&st.canvas, viewport);
                st.run.resize(viewport);
            }
        });

        let first = tick.borrow().as_ref().and_then(request_frame);
        state.borrow_mut().pending = first;

        tracing::info!(name = %effect.name, kind = effect.kind.label(), "Seasonal effect started");

        Some(Self {
            state,
            tick,
            _resize: resize,
        })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        {
            let mut st = self.state.borrow_mut();
            st.run.stop();
            if let Some(handle) = st.pending.take()
                && let Some(window) = web_sys::window()
            {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    web_sys::window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

fn fit_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width.max(0.0) as u32);
    canvas.set_height(viewport.height.max(0.0) as u32);
}

// ─────────────────────────────────────────────────────────────────────────────
// Component
// ─────────────────────────────────────────────────────────────────────────────

/// Full-viewport, click-through canvas running one effect. Unmounting it
/// tears the animation down.
#[component]
pub fn EffectCanvas(effect: EffectDefinition) -> Element {
    let mut animation = use_signal(|| None::<AnimationLoop>);

    use_effect(use_reactive!(|effect| {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CANVAS_ID))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());

        let started = canvas.and_then(|canvas| AnimationLoop::start(canvas, &effect));
        if started.is_none() {
            tracing::debug!(name = %effect.name, "Canvas unavailable, skipping seasonal effect");
        }
        // Replacing the slot drops the previous loop
        animation.set(started);
    }));

    use_drop(move || {
        if let Ok(mut slot) = animation.try_write() {
            slot.take();
        }
    });

    rsx! {
        canvas {
            id: CANVAS_ID,
            class: "seasonal-canvas",
            aria_hidden: "true",
        }
    }
}
