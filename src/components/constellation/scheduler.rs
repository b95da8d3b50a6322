//! Frame scheduling for the animation loop.
//!
//! The loop never calls `requestAnimationFrame` directly; it asks a
//! [`FrameScheduler`] for the next frame. The browser implementation wraps
//! `window.requestAnimationFrame`, while [`ManualScheduler`] runs frames only
//! when told to, which makes stepping the sky deterministic.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Identifies a scheduled frame so it can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub u64);

/// Runs a callback once, at the next frame.
pub trait FrameScheduler {
	/// Queue `callback` for the next frame. `None` if the host refused.
	fn schedule(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle>;
	/// Drop a queued callback without running it.
	fn cancel(&self, handle: FrameHandle);
}

/// Schedules frames with `window.requestAnimationFrame`.
pub struct AnimationFrameScheduler {
	window: Window,
}

impl AnimationFrameScheduler {
	pub fn new(window: Window) -> Self {
		Self { window }
	}
}

impl FrameScheduler for AnimationFrameScheduler {
	fn schedule(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle> {
		let js_callback = Closure::once_into_js(move || callback());
		match self
			.window
			.request_animation_frame(js_callback.unchecked_ref())
		{
			Ok(id) => Some(FrameHandle(id as u64)),
			Err(e) => {
				warn!("homepage-sky: requestAnimationFrame failed: {:?}", e);
				None
			}
		}
	}

	fn cancel(&self, handle: FrameHandle) {
		let _ = self.window.cancel_animation_frame(handle.0 as i32);
	}
}

/// Holds callbacks until [`ManualScheduler::run_pending`] is called.
#[derive(Default)]
pub struct ManualScheduler {
	queue: RefCell<Vec<(FrameHandle, Box<dyn FnOnce()>)>>,
	next_id: Cell<u64>,
}

impl ManualScheduler {
	pub fn new() -> Self {
		Self::default()
	}

	/// Run the callbacks queued so far. Callbacks they schedule wait for the
	/// next call. Returns how many ran.
	pub fn run_pending(&self) -> usize {
		let batch = std::mem::take(&mut *self.queue.borrow_mut());
		let count = batch.len();
		for (_, callback) in batch {
			callback();
		}
		count
	}

	pub fn pending(&self) -> usize {
		self.queue.borrow().len()
	}
}

impl FrameScheduler for ManualScheduler {
	fn schedule(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle> {
		let handle = FrameHandle(self.next_id.get());
		self.next_id.set(handle.0 + 1);
		self.queue.borrow_mut().push((handle, callback));
		Some(handle)
	}

	fn cancel(&self, handle: FrameHandle) {
		self.queue.borrow_mut().retain(|(h, _)| *h != handle);
	}
}

struct LoopInner {
	scheduler: Rc<dyn FrameScheduler>,
	frame: RefCell<Box<dyn FnMut()>>,
	pending: Cell<Option<FrameHandle>>,
	running: Cell<bool>,
}

impl LoopInner {
	fn schedule_next(this: &Rc<Self>) {
		let weak: Weak<Self> = Rc::downgrade(this);
		let handle = this.scheduler.schedule(Box::new(move || {
			if let Some(inner) = weak.upgrade() {
				LoopInner::run_frame(&inner);
			}
		}));
		if handle.is_none() {
			this.running.set(false);
		}
		this.pending.set(handle);
	}

	fn run_frame(this: &Rc<Self>) {
		this.pending.set(None);
		if !this.running.get() {
			return;
		}
		{
			let mut frame = this.frame.borrow_mut();
			(*frame)();
		}
		if this.running.get() {
			Self::schedule_next(this);
		}
	}
}

/// Self-rescheduling frame loop. Runs `frame` once per scheduled frame until
/// stopped or dropped.
pub struct AnimationLoop {
	inner: Rc<LoopInner>,
}

impl AnimationLoop {
	pub fn start(scheduler: Rc<dyn FrameScheduler>, frame: impl FnMut() + 'static) -> Self {
		let inner = Rc::new(LoopInner {
			scheduler,
			frame: RefCell::new(Box::new(frame)),
			pending: Cell::new(None),
			running: Cell::new(true),
		});
		LoopInner::schedule_next(&inner);
		info!("homepage-sky: animation loop started");
		Self { inner }
	}

	/// Cancel the pending frame. No further frames run.
	pub fn stop(&self) {
		if self.inner.running.replace(false) {
			if let Some(handle) = self.inner.pending.take() {
				self.inner.scheduler.cancel(handle);
			}
			info!("homepage-sky: animation loop stopped");
		}
	}

	pub fn is_running(&self) -> bool {
		self.inner.running.get()
	}
}

impl Drop for AnimationLoop {
	fn drop(&mut self) {
		self.stop();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::constellation::config::SkyConfig;
	use crate::components::constellation::render::testing::RecordingCanvas;
	use crate::components::constellation::state::SkyState;
	use crate::components::constellation::theme::Theme;

	fn counting_loop(scheduler: &Rc<ManualScheduler>) -> (AnimationLoop, Rc<Cell<u32>>) {
		let ticks = Rc::new(Cell::new(0));
		let counter = ticks.clone();
		let animation = AnimationLoop::start(scheduler.clone(), move || {
			counter.set(counter.get() + 1);
		});
		(animation, ticks)
	}

	#[test]
	fn one_tick_per_frame() {
		let scheduler = Rc::new(ManualScheduler::new());
		let (animation, ticks) = counting_loop(&scheduler);

		assert_eq!(scheduler.pending(), 1);
		assert_eq!(ticks.get(), 0);

		for frame in 1..=4 {
			assert_eq!(scheduler.run_pending(), 1);
			assert_eq!(ticks.get(), frame);
			assert_eq!(scheduler.pending(), 1);
		}
		assert!(animation.is_running());
	}

	#[test]
	fn stop_cancels_pending_frame() {
		let scheduler = Rc::new(ManualScheduler::new());
		let (animation, ticks) = counting_loop(&scheduler);
		scheduler.run_pending();

		animation.stop();
		assert!(!animation.is_running());
		assert_eq!(scheduler.pending(), 0);
		assert_eq!(scheduler.run_pending(), 0);
		assert_eq!(ticks.get(), 1);

		animation.stop();
	}

	#[test]
	fn dropping_the_loop_stops_it() {
		let scheduler = Rc::new(ManualScheduler::new());
		let (animation, ticks) = counting_loop(&scheduler);
		drop(animation);

		assert_eq!(scheduler.pending(), 0);
		scheduler.run_pending();
		assert_eq!(ticks.get(), 0);
	}

	#[test]
	fn restarting_replaces_the_previous_loop() {
		let scheduler = Rc::new(ManualScheduler::new());
		let slot = RefCell::new(None);
		let (first, first_ticks) = counting_loop(&scheduler);
		*slot.borrow_mut() = Some(first);

		if let Some(previous) = slot.borrow_mut().take() {
			previous.stop();
		}
		let (second, second_ticks) = counting_loop(&scheduler);
		*slot.borrow_mut() = Some(second);

		assert_eq!(scheduler.pending(), 1);
		scheduler.run_pending();
		scheduler.run_pending();
		assert_eq!(first_ticks.get(), 0);
		assert_eq!(second_ticks.get(), 2);
	}

	#[test]
	fn cancel_only_removes_matching_handle() {
		let scheduler = ManualScheduler::new();
		let ran = Rc::new(Cell::new(0));
		let (a, b) = (ran.clone(), ran.clone());
		let first = scheduler.schedule(Box::new(move || a.set(a.get() + 1))).unwrap();
		scheduler.schedule(Box::new(move || b.set(b.get() + 10)));

		scheduler.cancel(first);
		assert_eq!(scheduler.run_pending(), 1);
		assert_eq!(ran.get(), 10);
	}

	#[test]
	fn drives_the_sky() {
		let scheduler = Rc::new(ManualScheduler::new());
		let sky = Rc::new(RefCell::new(SkyState::new(
			SkyConfig::default(),
			800.0,
			600.0,
			21,
		)));
		let canvas = Rc::new(RefCell::new(RecordingCanvas::default()));
		let theme = Theme::default();

		let (sky_frame, canvas_frame) = (sky.clone(), canvas.clone());
		let _animation = AnimationLoop::start(scheduler.clone(), move || {
			sky_frame
				.borrow_mut()
				.tick(&mut *canvas_frame.borrow_mut(), &theme);
		});

		for _ in 0..10 {
			scheduler.run_pending();
		}
		assert_eq!(sky.borrow().frame_count(), 10);
		assert!(!canvas.borrow().circles().is_empty());
	}
}
