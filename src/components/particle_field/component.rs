//! Leptos component wrapping the particle field canvas.
//!
//! Mounts a viewport-sized canvas and runs the simulation via a
//! self-rescheduling `requestAnimationFrame` closure. A window resize
//! rebuilds the particle set for the new dimensions. If the 2d drawing
//! context cannot be acquired the loop never starts; the background is
//! decorative, so the rest of the page carries on.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::ParticleField;
use super::render;
use super::theme::FieldTheme;

fn window_size(window: &Window) -> (f64, f64) {
	(
		window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
		window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
	)
}

/// Renders the animated particle background on a fullscreen canvas.
#[component]
pub fn ParticleFieldCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (field_init, animate_init, resize_cb_init) =
		(field.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = window_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// Fatal for this subsystem only: no context, no animation.
		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					warn!("particle field: 2d context has unexpected type, not starting");
					return;
				}
			},
			_ => {
				warn!("particle field: 2d context unavailable, not starting");
				return;
			}
		};

		let mut rng = || js_sys::Math::random();
		*field_init.borrow_mut() = Some(ParticleField::new(w, h, &mut rng));
		info!(
			"particle field: {} particles over {w}x{h}",
			field_init.borrow().as_ref().map(|f| f.particles.len()).unwrap_or(0)
		);

		let (field_resize, canvas_resize) = (field_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = window_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh, &mut || js_sys::Math::random());
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let theme = FieldTheme::default();
		let (field_anim, animate_inner) = (field_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.tick();
				render::render(f, &ctx, &theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="digitalBackground"
			class="particle-field-canvas"
			style="position: fixed; inset: 0; display: block; pointer-events: none;"
		/>
	}
}
