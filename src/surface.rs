//! Rendering-surface capabilities consumed by the carousel controller.
//!
//! The controller never touches a concrete UI tree. It mutates slides and
//! indicators through [`Surface`] and receives input as [`CarouselEvent`]
//! values pushed by the host, so the same navigation logic drives a browser
//! bridge, a TUI, or the in-memory surface in [`crate::memory`].

use std::time::Duration;

/// Inline transition style applied to a slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideTransition {
    /// Instantaneous placement, no animation.
    Instant,
    /// Animated movement over the given duration.
    Animated(Duration),
}

/// An input event forwarded by the host to [`Carousel::handle_event`].
///
/// Touch coordinates are horizontal positions in whatever unit the host
/// surface uses; only their difference is ever evaluated.
///
/// [`Carousel::handle_event`]: crate::Carousel::handle_event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    /// The previous-slide control was activated.
    PrevPressed,
    /// The next-slide control was activated.
    NextPressed,
    /// The indicator at this position was activated.
    IndicatorPressed(usize),
    /// A touch gesture started at this horizontal coordinate.
    TouchStart(f32),
    /// The current touch gesture ended at this horizontal coordinate.
    TouchEnd(f32),
    /// The pointer entered the container.
    PointerEnter,
    /// The pointer left the container.
    PointerLeave,
}

impl CarouselEvent {
    /// The subscription class this event is delivered under.
    pub fn class(self) -> EventClass {
        match self {
            CarouselEvent::PrevPressed => EventClass::PrevControl,
            CarouselEvent::NextPressed => EventClass::NextControl,
            CarouselEvent::IndicatorPressed(_) => EventClass::Indicators,
            CarouselEvent::TouchStart(_) | CarouselEvent::TouchEnd(_) => EventClass::Touch,
            CarouselEvent::PointerEnter | CarouselEvent::PointerLeave => EventClass::Hover,
        }
    }
}

/// A class of events the carousel subscribes to on its surface.
///
/// The set of classes bound at mount depends on what the surface offers
/// (controls, indicators) and on the configuration (swipe). Events whose
/// class was never bound, or whose binding has been released by
/// `destroy`, are dropped without effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventClass {
    /// Clicks on the previous-slide control.
    PrevControl,
    /// Clicks on the next-slide control.
    NextControl,
    /// Clicks on the indicator controls.
    Indicators,
    /// Touch gestures on the slide container.
    Touch,
    /// Pointer enter/leave over the container.
    Hover,
}

/// Mutation capabilities a rendering surface provides to the controller.
///
/// Slides and indicators are addressed by position. Both collections are
/// fixed once the carousel is mounted; implementations must not grow or
/// reorder them afterwards. Out-of-range indexes must be ignored.
pub trait Surface {
    /// Number of slides in the container, in document order.
    fn slide_count(&self) -> usize;

    /// Number of indicator controls; zero when the host has none.
    fn indicator_count(&self) -> usize;

    /// Whether a previous-slide control exists.
    fn has_prev_control(&self) -> bool;

    /// Whether a next-slide control exists.
    fn has_next_control(&self) -> bool;

    /// Sets a slide's inline horizontal offset, in percent of the
    /// container width.
    fn set_slide_offset(&mut self, slide: usize, percent: f32);

    /// Sets a slide's inline transition style.
    fn set_slide_transition(&mut self, slide: usize, transition: SlideTransition);

    /// Removes a slide's inline offset and transition, restoring
    /// stylesheet defaults. Focus and hidden state are left as-is.
    fn clear_slide_style(&mut self, slide: usize);

    /// Marks a slide's interactive content as keyboard-reachable or not.
    /// A DOM host maps this to `tabindex="0"` / `tabindex="-1"` on the
    /// slide's interactive descendants.
    fn set_slide_focusable(&mut self, slide: usize, focusable: bool);

    /// Marks a slide as hidden from assistive technology (`aria-hidden`
    /// on a DOM host).
    fn set_slide_hidden(&mut self, slide: usize, hidden: bool);

    /// Marks an indicator as the active one or clears the marking. A DOM
    /// host maps this to an `active` class plus `aria-current="true"`.
    fn set_indicator_active(&mut self, indicator: usize, active: bool);
}

/// Resolves container surfaces from lookup selectors.
///
/// Implemented by hosts whose containers are addressed by name; the
/// in-memory counterpart is [`MemoryStage`](crate::MemoryStage).
pub trait SurfaceRegistry {
    /// The surface type this registry hands out.
    type Surface: Surface;

    /// Looks up a container. `None` when the selector matches nothing.
    fn resolve(&self, selector: &str) -> Option<Self::Surface>;
}
