//! Infinite-loop carousel controller.
//!
//! ## Usage
//!
//! Mount a [`Carousel`] over a [`Surface`], forward host input through
//! [`Carousel::handle_event`], and pump deferred work with
//! [`Carousel::poll`]. All timing flows through injected `Instant` values,
//! so hosts decide when time advances and tests never wait on a real
//! clock.

use std::time::{Duration, Instant};

use derive_setters::Setters;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    error::ContainerNotFoundError,
    surface::{CarouselEvent, EventClass, SlideTransition, Surface, SurfaceRegistry},
};

/// Minimum horizontal travel for a touch gesture to count as a swipe.
const SWIPE_THRESHOLD: f32 = 50.0;

/// Grace period between a completed navigation and the autoplay restart,
/// so a manual navigation never races the next automatic tick.
const AUTOPLAY_RESTART_GRACE: Duration = Duration::from_millis(2_000);

const DEFAULT_DELAY: Duration = Duration::from_millis(5_000);
const DEFAULT_SPEED: Duration = Duration::from_millis(500);

/// Carousel configuration. Immutable once mounted.
///
/// Start from [`CarouselArgs::default`] and override individual fields with
/// the generated setters:
///
/// ```
/// use std::time::Duration;
/// use infinite_carousel::CarouselArgs;
///
/// let args = CarouselArgs::default()
///     .autoplay(false)
///     .speed(Duration::from_millis(300));
/// assert!(args.infinite);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Setters)]
pub struct CarouselArgs {
    /// Interval between automatic advances.
    pub delay: Duration,
    /// Whether autoplay is armed at mount and re-armed after navigations.
    pub autoplay: bool,
    /// Duration of one slide transition.
    pub speed: Duration,
    /// Whether wraparound uses shortest-path positioning.
    pub infinite: bool,
    /// Whether touch gestures are bound at mount.
    pub swipe: bool,
}

impl Default for CarouselArgs {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            autoplay: true,
            speed: DEFAULT_SPEED,
            infinite: true,
            swipe: true,
        }
    }
}

/// Deferred work scheduled against the injected clock.
///
/// Listed in firing priority for equal deadlines: an animation must
/// release its lock before an autoplay tick gets a chance to navigate.
#[derive(Clone, Copy)]
enum DeferredTask {
    AnimationDone,
    AutoplayRestart,
    AutoplayTick,
}

/// Controller driving an infinite-loop carousel over a rendering surface.
///
/// The controller is the single writer of its own state: navigation
/// methods mutate it synchronously, and the only deferred work is the
/// animation-completion task and the autoplay tick, both stored as
/// explicit deadlines and fired by [`Carousel::poll`].
pub struct Carousel<S: Surface> {
    surface: S,
    args: CarouselArgs,
    current_index: usize,
    /// Re-entrancy lock; `Some` while a transition is in flight.
    animating_until: Option<Instant>,
    /// Repeating autoplay timer; `Some` iff autoplay is running.
    autoplay_next: Option<Instant>,
    /// Pending debounced restart after a completed navigation.
    autoplay_restart_at: Option<Instant>,
    touch_start_x: f32,
    touch_end_x: f32,
    subscriptions: SmallVec<[EventClass; 5]>,
    destroyed: bool,
}

impl<S: Surface> Carousel<S> {
    /// Mounts a carousel over an already-resolved container surface.
    ///
    /// Performs the initial layout (slide `i` at `i * 100.0` percent,
    /// transitions disabled, only slide 0 keyboard-reachable), marks
    /// indicator 0 active, binds subscriptions for the event classes the
    /// surface and configuration call for, and arms autoplay when
    /// configured.
    pub fn mount(surface: S, args: CarouselArgs, now: Instant) -> Self {
        let mut carousel = Self {
            surface,
            args,
            current_index: 0,
            animating_until: None,
            autoplay_next: None,
            autoplay_restart_at: None,
            touch_start_x: 0.0,
            touch_end_x: 0.0,
            subscriptions: SmallVec::new(),
            destroyed: false,
        };

        carousel.setup_slides();
        carousel.bind_subscriptions();
        carousel.update_indicators();
        if carousel.args.autoplay {
            carousel.start_autoplay(now);
        }
        carousel
    }

    /// Resolves `selector` through `registry` and mounts the result.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerNotFoundError`] when the selector matches no
    /// container. This is the crate's only failure path.
    pub fn mount_selector<R>(
        registry: &R,
        selector: &str,
        args: CarouselArgs,
        now: Instant,
    ) -> Result<Self, ContainerNotFoundError>
    where
        R: SurfaceRegistry<Surface = S>,
    {
        let surface = registry
            .resolve(selector)
            .ok_or_else(|| ContainerNotFoundError {
                selector: selector.to_owned(),
            })?;
        Ok(Self::mount(surface, args, now))
    }

    /// Index of the current slide.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether a slide transition is in flight, as of the last pumped
    /// deadline.
    pub fn is_animating(&self) -> bool {
        self.animating_until.is_some()
    }

    /// Whether the repeating autoplay timer is armed.
    pub fn autoplay_running(&self) -> bool {
        self.autoplay_next.is_some()
    }

    /// Whether `destroy` has been called.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// The mounted configuration.
    pub fn args(&self) -> &CarouselArgs {
        &self.args
    }

    /// Read access to the underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Event classes currently bound. Hosts can use this to decide which
    /// native listeners to wire up; it drains to empty on `destroy`.
    pub fn subscriptions(&self) -> &[EventClass] {
        &self.subscriptions
    }

    /// Earliest pending deadline, if any; a host can sleep until then.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_task().map(|(due, _)| due)
    }

    /// Fires every deferred task due at `now`, in deadline order.
    pub fn poll(&mut self, now: Instant) {
        if self.destroyed {
            return;
        }
        self.drain_due_tasks(now);
    }

    /// Advances to the next slide, wrapping past the last one.
    ///
    /// No-op while a transition is in flight.
    pub fn next(&mut self, now: Instant) {
        if self.destroyed {
            return;
        }
        self.drain_due_tasks(now);
        self.nav_next(now);
    }

    /// Moves to the previous slide, wrapping from 0 to the last one.
    ///
    /// No-op while a transition is in flight.
    pub fn prev(&mut self, now: Instant) {
        if self.destroyed {
            return;
        }
        self.drain_due_tasks(now);
        self.nav_prev(now);
    }

    /// Navigates to `target`.
    ///
    /// No-op while a transition is in flight, when `target` is the
    /// current slide, or when `target` is out of range.
    pub fn go_to(&mut self, target: usize, now: Instant) {
        if self.destroyed {
            return;
        }
        self.drain_due_tasks(now);
        self.nav_go_to(target, now);
    }

    /// Arms the repeating autoplay timer.
    ///
    /// Stops any existing timer first, so the call is idempotent. Arms
    /// nothing when autoplay is disabled in the configuration or the
    /// configured delay is zero.
    pub fn start_autoplay(&mut self, now: Instant) {
        if self.destroyed {
            return;
        }
        self.stop_autoplay();
        if self.args.autoplay && !self.args.delay.is_zero() {
            self.autoplay_next = Some(now + self.args.delay);
            debug!(delay = ?self.args.delay, "autoplay armed");
        }
    }

    /// Cancels the autoplay timer and any pending debounced restart,
    /// leaving both handles explicitly empty. Idempotent.
    pub fn stop_autoplay(&mut self) {
        if self.autoplay_next.take().is_some() {
            debug!("autoplay stopped");
        }
        self.autoplay_restart_at = None;
    }

    /// Dispatches a host input event.
    ///
    /// Events whose class was not bound at mount (or has been released by
    /// `destroy`) are dropped without effect.
    pub fn handle_event(&mut self, event: CarouselEvent, now: Instant) {
        if self.destroyed || !self.subscriptions.contains(&event.class()) {
            return;
        }
        self.drain_due_tasks(now);

        match event {
            CarouselEvent::PrevPressed => self.nav_prev(now),
            CarouselEvent::NextPressed => self.nav_next(now),
            CarouselEvent::IndicatorPressed(indicator) => self.nav_go_to(indicator, now),
            CarouselEvent::TouchStart(x) => self.touch_start_x = x,
            CarouselEvent::TouchEnd(x) => {
                self.touch_end_x = x;
                self.handle_swipe(now);
            }
            CarouselEvent::PointerEnter => self.stop_autoplay(),
            CarouselEvent::PointerLeave => {
                if self.args.autoplay {
                    self.start_autoplay(now);
                }
            }
        }
    }

    /// Tears the carousel down: stops autoplay, removes inline
    /// offset/transition styling from every slide, and releases every
    /// subscription. The instance is inert afterwards; calling `destroy`
    /// again is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.stop_autoplay();
        self.animating_until = None;
        for slide in 0..self.surface.slide_count() {
            self.surface.clear_slide_style(slide);
        }
        while let Some(class) = self.subscriptions.pop() {
            trace!(?class, "subscription released");
        }
        self.destroyed = true;
        debug!("carousel destroyed");
    }

    fn setup_slides(&mut self) {
        for slide in 0..self.surface.slide_count() {
            self.surface.set_slide_offset(slide, slide as f32 * 100.0);
            self.surface
                .set_slide_transition(slide, SlideTransition::Instant);
            self.surface.set_slide_focusable(slide, slide == 0);
        }
    }

    fn bind_subscriptions(&mut self) {
        if self.surface.has_prev_control() {
            self.subscriptions.push(EventClass::PrevControl);
        }
        if self.surface.has_next_control() {
            self.subscriptions.push(EventClass::NextControl);
        }
        if self.surface.indicator_count() > 0 {
            self.subscriptions.push(EventClass::Indicators);
        }
        if self.args.swipe {
            self.subscriptions.push(EventClass::Touch);
        }
        self.subscriptions.push(EventClass::Hover);
    }

    fn nav_next(&mut self, now: Instant) {
        if self.animating_until.is_some() {
            return;
        }
        let count = self.surface.slide_count();
        if count == 0 {
            return;
        }
        self.nav_go_to((self.current_index + 1) % count, now);
    }

    fn nav_prev(&mut self, now: Instant) {
        if self.animating_until.is_some() {
            return;
        }
        let count = self.surface.slide_count();
        if count == 0 {
            return;
        }
        let target = if self.current_index == 0 {
            count - 1
        } else {
            self.current_index - 1
        };
        self.nav_go_to(target, now);
    }

    fn nav_go_to(&mut self, target: usize, now: Instant) {
        let count = self.surface.slide_count();
        if count == 0 || target >= count {
            return;
        }
        if self.animating_until.is_some() || target == self.current_index {
            return;
        }

        debug!(from = self.current_index, to = target, "slide navigation");
        self.animating_until = Some(now + self.args.speed);
        self.current_index = target;

        for slide in 0..count {
            self.surface
                .set_slide_transition(slide, SlideTransition::Animated(self.args.speed));
        }
        self.update_slide_positions();
        self.update_indicators();
    }

    fn update_slide_positions(&mut self) {
        let count = self.surface.slide_count();
        let half = count as f32 / 2.0;
        for slide in 0..count {
            let diff = slide as f32 - self.current_index as f32;
            let mut position = diff * 100.0;

            // Shortest-path adjustment: a slide more than half the
            // carousel away re-enters from the other side instead of
            // traversing the whole strip.
            if self.args.infinite {
                if diff < -half {
                    position += count as f32 * 100.0;
                } else if diff > half {
                    position -= count as f32 * 100.0;
                }
            }

            self.surface.set_slide_offset(slide, position);
        }
    }

    fn update_accessibility(&mut self) {
        for slide in 0..self.surface.slide_count() {
            self.surface
                .set_slide_focusable(slide, slide == self.current_index);
            self.surface
                .set_slide_hidden(slide, slide != self.current_index);
        }
    }

    fn update_indicators(&mut self) {
        for indicator in 0..self.surface.indicator_count() {
            self.surface
                .set_indicator_active(indicator, indicator == self.current_index);
        }
    }

    fn handle_swipe(&mut self, now: Instant) {
        let diff = self.touch_start_x - self.touch_end_x;
        if diff.abs() > SWIPE_THRESHOLD {
            // Positive delta is a leftward drag revealing the next slide.
            if diff > 0.0 {
                self.nav_next(now);
            } else {
                self.nav_prev(now);
            }
        }
    }

    fn next_task(&self) -> Option<(Instant, DeferredTask)> {
        let candidates = [
            (self.animating_until, DeferredTask::AnimationDone),
            (self.autoplay_restart_at, DeferredTask::AutoplayRestart),
            (self.autoplay_next, DeferredTask::AutoplayTick),
        ];

        let mut best: Option<(Instant, DeferredTask)> = None;
        for (deadline, task) in candidates {
            if let Some(due) = deadline
                && best.is_none_or(|(earliest, _)| due < earliest)
            {
                best = Some((due, task));
            }
        }
        best
    }

    /// Fires every task due at `now`, in deadline order. Each task runs
    /// with its own deadline as the logical clock, so follow-on deadlines
    /// land where they would have under a live timer facility even when
    /// the host polls late.
    fn drain_due_tasks(&mut self, now: Instant) {
        while let Some((due, task)) = self.next_task() {
            if due > now {
                break;
            }
            match task {
                DeferredTask::AnimationDone => self.finish_animation(due),
                DeferredTask::AutoplayRestart => {
                    self.autoplay_restart_at = None;
                    self.start_autoplay(due);
                }
                DeferredTask::AutoplayTick => {
                    self.autoplay_next = Some(due + self.args.delay);
                    self.nav_next(due);
                }
            }
        }
    }

    fn finish_animation(&mut self, now: Instant) {
        self.animating_until = None;
        self.update_accessibility();
        if self.args.autoplay {
            self.stop_autoplay();
            self.autoplay_restart_at = Some(now + AUTOPLAY_RESTART_GRACE);
            trace!("autoplay restart scheduled");
        }
    }
}
