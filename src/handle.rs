//! Shared ownership wrapper for callback-shaped hosts.
//!
//! Hosts whose event sources are callbacks (native click handlers, timer
//! services) need to reach the same controller from several closures.
//! [`SharedCarousel`] wraps a mounted [`Carousel`] in a cloneable handle
//! with closure-based access, keeping the controller itself a plain
//! single-writer struct.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{carousel::Carousel, surface::Surface};

/// Cloneable shared handle around a mounted [`Carousel`].
pub struct SharedCarousel<S: Surface> {
    inner: Arc<RwLock<Carousel<S>>>,
}

impl<S: Surface> Clone for SharedCarousel<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Surface> SharedCarousel<S> {
    /// Wraps a mounted carousel.
    pub fn new(carousel: Carousel<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(carousel)),
        }
    }

    /// Executes a closure with a shared reference to the carousel.
    pub fn with<R>(&self, f: impl FnOnce(&Carousel<S>) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Executes a closure with a mutable reference to the carousel.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Carousel<S>) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{carousel::CarouselArgs, memory::MemorySurface, surface::CarouselEvent};
    use std::time::{Duration, Instant};

    #[test]
    fn test_clones_share_one_controller() {
        let base = Instant::now();
        let args = CarouselArgs::default()
            .autoplay(false)
            .speed(Duration::from_millis(100));
        let shared = SharedCarousel::new(Carousel::mount(
            MemorySurface::new(3).controls(),
            args,
            base,
        ));

        let for_click = shared.clone();
        for_click.with_mut(|carousel| carousel.handle_event(CarouselEvent::NextPressed, base));
        shared.with_mut(|carousel| carousel.poll(base + Duration::from_millis(150)));

        assert_eq!(shared.with(|carousel| carousel.current_index()), 1);
        assert_eq!(for_click.with(|carousel| carousel.current_index()), 1);
    }
}
