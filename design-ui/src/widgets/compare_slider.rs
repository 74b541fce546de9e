//! Before/after comparison slider.

use std::time::Duration;

use super::Carousel;

/// Horizontal extent of the slider track in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

impl Bounds {
    pub fn new(
        left: f64,
        width: f64,
    ) -> Self {
        Self { left, width }
    }
}

/// Divider position over a pair of images, plus navigation between projects.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareSlider {
    position: f64,
    dragging: bool,
    projects: Carousel,
}

impl CompareSlider {
    pub const DEFAULT_POSITION: f64 = 50.0;

    pub fn new(project_count: usize) -> Self {
        Self {
            position: Self::DEFAULT_POSITION,
            dragging: false,
            projects: Carousel::new(project_count, Duration::ZERO),
        }
    }

    /// Divider position as a percentage of the track, in `[0, 100]`.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn project(&self) -> usize {
        self.projects.index()
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Pointer pressed at `x`: starts a drag and moves the divider there.
    pub fn press(
        &mut self,
        x: f64,
        bounds: Bounds,
    ) {
        self.dragging = true;
        self.move_to(x, bounds);
    }

    /// Pointer moved to `x`. Only has an effect while dragging.
    pub fn drag(
        &mut self,
        x: f64,
        bounds: Bounds,
    ) {
        if self.dragging {
            self.move_to(x, bounds);
        }
    }

    /// Pointer released, or left the window.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    fn move_to(
        &mut self,
        x: f64,
        bounds: Bounds,
    ) {
        // zero or degenerate width has no meaningful percentage
        if bounds.width.is_nan() || bounds.width <= 0.0 || !x.is_finite() {
            return;
        }
        let offset = (x - bounds.left).clamp(0.0, bounds.width);
        self.position = (offset / bounds.width * 100.0).clamp(0.0, 100.0);
    }

    pub fn next_project(&mut self) {
        self.projects.next();
    }

    pub fn previous_project(&mut self) {
        self.projects.previous();
    }

    pub fn select_project(
        &mut self,
        index: usize,
    ) -> bool {
        self.projects.go_to(index)
    }
}
