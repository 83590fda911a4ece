//! Infinite-loop carousel widget.
//!
//! A single controller cycles through a fixed set of slides with animated
//! transitions, optional autoplay, touch-swipe navigation, and
//! accessibility bookkeeping (focus reachability, hidden marking, active
//! indicator). The controller talks to its host through the [`Surface`]
//! capability trait and receives time as injected [`std::time::Instant`]
//! values, so it runs unchanged against a browser bridge, a TUI, or the
//! bundled in-memory surface.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use infinite_carousel::{Carousel, CarouselArgs, MemorySurface};
//!
//! let now = Instant::now();
//! let surface = MemorySurface::new(3).indicators(3);
//! let mut carousel = Carousel::mount(
//!     surface,
//!     CarouselArgs::default().autoplay(false),
//!     now,
//! );
//!
//! carousel.next(now);
//! carousel.poll(now + Duration::from_millis(500));
//!
//! assert_eq!(carousel.current_index(), 1);
//! assert!(carousel.surface().indicator_active(1));
//! ```
//!
//! Hosts with real timers drive the same controller by sleeping until
//! [`Carousel::next_deadline`] and calling [`Carousel::poll`]; hosts with
//! callback-shaped event sources share it through
//! [`SharedCarousel`](crate::SharedCarousel).
#![deny(missing_docs, clippy::unwrap_used)]

pub mod carousel;
pub mod error;
pub mod handle;
pub mod memory;
pub mod surface;

pub use carousel::{Carousel, CarouselArgs};
pub use error::ContainerNotFoundError;
pub use handle::SharedCarousel;
pub use memory::{MemoryStage, MemorySurface, SlideStyle};
pub use surface::{CarouselEvent, EventClass, SlideTransition, Surface, SurfaceRegistry};
