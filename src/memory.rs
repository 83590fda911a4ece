//! In-memory rendering surface.
//!
//! [`MemorySurface`] records every mutation the controller performs, which
//! makes it both the reference [`Surface`] implementation for headless
//! hosts and the substrate for this crate's own tests. [`MemoryStage`] is
//! the matching [`SurfaceRegistry`]: a named-container table resolving
//! selectors to fresh surface instances.

use std::collections::HashMap;

use crate::surface::{SlideTransition, Surface, SurfaceRegistry};

/// Recorded inline state of one slide.
///
/// Every field starts as `None`, meaning the controller has not written it
/// yet; `clear_slide_style` resets `offset` and `transition` back to `None`
/// while leaving focus and hidden state untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlideStyle {
    /// Inline horizontal offset in percent of the container width.
    pub offset: Option<f32>,
    /// Inline transition style.
    pub transition: Option<SlideTransition>,
    /// Keyboard reachability of the slide's interactive content.
    pub focusable: Option<bool>,
    /// Hidden marking for assistive technology.
    pub hidden: Option<bool>,
}

/// An in-memory carousel container.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    slides: Vec<SlideStyle>,
    indicators: Vec<bool>,
    prev_control: bool,
    next_control: bool,
    mutations: usize,
}

impl MemorySurface {
    /// Creates a container holding `slide_count` unstyled slides, with no
    /// indicators and no controls.
    pub fn new(slide_count: usize) -> Self {
        Self {
            slides: vec![SlideStyle::default(); slide_count],
            ..Self::default()
        }
    }

    /// Adds `count` indicator controls.
    pub fn indicators(mut self, count: usize) -> Self {
        self.indicators = vec![false; count];
        self
    }

    /// Adds previous and next controls.
    pub fn controls(mut self) -> Self {
        self.prev_control = true;
        self.next_control = true;
        self
    }

    /// Recorded state of the slide at `index`.
    ///
    /// Panics when `index` is out of range.
    pub fn slide(&self, index: usize) -> SlideStyle {
        self.slides[index]
    }

    /// Whether the indicator at `index` is marked active.
    ///
    /// Panics when `index` is out of range.
    pub fn indicator_active(&self, index: usize) -> bool {
        self.indicators[index]
    }

    /// Total number of mutations applied so far.
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }
}

impl Surface for MemorySurface {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn has_prev_control(&self) -> bool {
        self.prev_control
    }

    fn has_next_control(&self) -> bool {
        self.next_control
    }

    fn set_slide_offset(&mut self, slide: usize, percent: f32) {
        if let Some(style) = self.slides.get_mut(slide) {
            style.offset = Some(percent);
            self.mutations += 1;
        }
    }

    fn set_slide_transition(&mut self, slide: usize, transition: SlideTransition) {
        if let Some(style) = self.slides.get_mut(slide) {
            style.transition = Some(transition);
            self.mutations += 1;
        }
    }

    fn clear_slide_style(&mut self, slide: usize) {
        if let Some(style) = self.slides.get_mut(slide) {
            style.offset = None;
            style.transition = None;
            self.mutations += 1;
        }
    }

    fn set_slide_focusable(&mut self, slide: usize, focusable: bool) {
        if let Some(style) = self.slides.get_mut(slide) {
            style.focusable = Some(focusable);
            self.mutations += 1;
        }
    }

    fn set_slide_hidden(&mut self, slide: usize, hidden: bool) {
        if let Some(style) = self.slides.get_mut(slide) {
            style.hidden = Some(hidden);
            self.mutations += 1;
        }
    }

    fn set_indicator_active(&mut self, indicator: usize, active: bool) {
        if let Some(slot) = self.indicators.get_mut(indicator) {
            *slot = active;
            self.mutations += 1;
        }
    }
}

/// A named-container registry of [`MemorySurface`] blueprints.
#[derive(Debug, Default)]
pub struct MemoryStage {
    containers: HashMap<String, MemorySurface>,
}

impl MemoryStage {
    /// Creates an empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a container under `selector`, replacing any previous one.
    pub fn insert(&mut self, selector: impl Into<String>, surface: MemorySurface) {
        self.containers.insert(selector.into(), surface);
    }
}

impl SurfaceRegistry for MemoryStage {
    type Surface = MemorySurface;

    fn resolve(&self, selector: &str) -> Option<MemorySurface> {
        self.containers.get(selector).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_surface_records_mutations() {
        let mut surface = MemorySurface::new(2).indicators(2);

        surface.set_slide_offset(0, 100.0);
        surface.set_slide_transition(0, SlideTransition::Animated(Duration::from_millis(500)));
        surface.set_slide_focusable(1, false);
        surface.set_slide_hidden(1, true);
        surface.set_indicator_active(1, true);

        assert_eq!(surface.slide(0).offset, Some(100.0));
        assert_eq!(
            surface.slide(0).transition,
            Some(SlideTransition::Animated(Duration::from_millis(500)))
        );
        assert_eq!(surface.slide(1).focusable, Some(false));
        assert_eq!(surface.slide(1).hidden, Some(true));
        assert!(surface.indicator_active(1));
        assert_eq!(surface.mutation_count(), 5);
    }

    #[test]
    fn test_clear_slide_style_keeps_accessibility_state() {
        let mut surface = MemorySurface::new(1);
        surface.set_slide_offset(0, 200.0);
        surface.set_slide_transition(0, SlideTransition::Instant);
        surface.set_slide_focusable(0, true);

        surface.clear_slide_style(0);

        assert_eq!(surface.slide(0).offset, None);
        assert_eq!(surface.slide(0).transition, None);
        assert_eq!(surface.slide(0).focusable, Some(true));
    }

    #[test]
    fn test_out_of_range_writes_are_ignored() {
        let mut surface = MemorySurface::new(1);
        surface.set_slide_offset(5, 100.0);
        surface.set_indicator_active(0, true);

        assert_eq!(surface.mutation_count(), 0);
    }

    #[test]
    fn test_stage_resolves_registered_containers() {
        let mut stage = MemoryStage::new();
        stage.insert(".hero-carousel", MemorySurface::new(3).controls());

        let resolved = stage.resolve(".hero-carousel");
        assert!(resolved.is_some_and(|surface| surface.slide_count() == 3));
        assert!(stage.resolve(".missing").is_none());
    }
}
