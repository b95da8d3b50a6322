//! Leptos component hosting the constellation canvas.
//!
//! The component creates an HTML canvas element, builds the sky state once
//! the canvas is mounted, and wires pointer and window-resize handlers into
//! it. An [`AnimationLoop`] on top of `requestAnimationFrame` renders and
//! advances the sky every frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::SkyConfig;
use super::scheduler::{AnimationFrameScheduler, AnimationLoop};
use super::state::SkyState;
use super::theme::Theme;

/// Bundles the simulation with its visual theme.
struct SkyContext {
	state: SkyState,
	theme: Theme,
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Fresh seed per page load.
fn random_seed() -> u64 {
	(js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

/// Pointer position relative to the canvas' top-left corner.
fn canvas_point(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Stops a running loop and unhooks a registered resize listener.
fn teardown(
	window: &Window,
	animation: &RefCell<Option<AnimationLoop>>,
	resize_cb: &RefCell<Option<Closure<dyn FnMut()>>>,
) {
	if let Some(previous) = animation.borrow_mut().take() {
		previous.stop();
	}
	if let Some(cb) = resize_cb.borrow_mut().take() {
		let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
	}
}

/// Renders the animated constellation on a canvas element.
///
/// The canvas sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and follow window resizes.
/// Explicit `width`/`height` override automatic sizing.
#[component]
pub fn ConstellationCanvas(
	#[prop(optional)] config: SkyConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<SkyContext>>> = Rc::new(RefCell::new(None));
	let animation: Rc<RefCell<Option<AnimationLoop>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animation_init, resize_cb_init) =
		(context.clone(), animation.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("homepage-sky: no window, background disabled");
			return;
		};
		// A re-run replaces the previous loop and listener.
		teardown(&window, &animation_init, &resize_cb_init);

		let (w, h) = if fullscreen {
			viewport_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(mut ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("homepage-sky: 2d context unavailable, background disabled");
			return;
		};

		let seed = config.seed.unwrap_or_else(random_seed);
		info!("homepage-sky: starting {}x{} sky with seed {}", w, h, seed);
		*context_init.borrow_mut() = Some(SkyContext {
			state: SkyState::new(config.clone(), w, h, seed),
			theme: Theme::default(),
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.state.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let context_anim = context_init.clone();
		let scheduler = Rc::new(AnimationFrameScheduler::new(window));
		*animation_init.borrow_mut() = Some(AnimationLoop::start(scheduler, move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick(&mut ctx, &c.theme);
			}
		}));
	});

	let context_me = context.clone();
	let on_mouseenter = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *context_me.borrow_mut() {
			c.state.pointer_enter(x, y);
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.state.pointer_move(x, y);
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.pointer_leave();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="constellation-canvas"
			on:mouseenter=on_mouseenter
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block;"
		/>
	}
}
