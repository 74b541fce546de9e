//! Slide carousels: the autoplaying banner and the testimonial strip.

use std::time::Duration;

use tracing::trace;

/// Repeating timer that fires once per elapsed interval.
///
/// A zero interval never fires.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Autoplay {
    interval: Duration,
    elapsed: Duration,
    paused: bool,
}

impl Autoplay {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            paused: false,
        }
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Returns how many intervals completed during `dt`.
    fn advance(
        &mut self,
        dt: Duration,
    ) -> u32 {
        if self.paused || self.interval.is_zero() {
            return 0;
        }
        self.elapsed += dt;

        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}

/// Banner slider with wrap-around navigation and hover-pausable autoplay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay: Autoplay,
}

impl Carousel {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

    /// A carousel over `len` slides. A zero `interval` disables autoplay.
    pub fn new(
        len: usize,
        interval: Duration,
    ) -> Self {
        Self {
            len,
            index: 0,
            autoplay: Autoplay::new(interval),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_paused(&self) -> bool {
        self.autoplay.paused
    }

    /// Index of the slide after the current one, wrapping.
    pub fn peek_next(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.index + 1) % self.len
        }
    }

    /// Index of the slide before the current one, wrapping.
    pub fn peek_previous(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.index + self.len - 1) % self.len
        }
    }

    pub fn next(&mut self) {
        self.set_index(self.peek_next());
    }

    pub fn previous(&mut self) {
        self.set_index(self.peek_previous());
    }

    /// Jumps to slide `index`. Out-of-range indices are ignored.
    pub fn go_to(
        &mut self,
        index: usize,
    ) -> bool {
        if index >= self.len {
            return false;
        }
        self.set_index(index);
        true
    }

    fn set_index(
        &mut self,
        index: usize,
    ) {
        self.index = index;
        self.autoplay.reset();
    }

    /// Pointer entered (`true`) or left (`false`) the carousel.
    pub fn set_hovered(
        &mut self,
        hovered: bool,
    ) {
        self.autoplay.paused = hovered;
    }

    /// Advances time by `dt`. Returns whether the visible slide changed.
    pub fn tick(
        &mut self,
        dt: Duration,
    ) -> bool {
        if self.is_empty() {
            return false;
        }
        let fired = self.autoplay.advance(dt) as usize;
        if fired == 0 {
            return false;
        }

        let before = self.index;
        self.index = (self.index + fired) % self.len;
        trace!(from = before, to = self.index, "carousel autoplay");
        self.index != before
    }
}

/// Direction of a running slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Transition {
    target: usize,
    remaining: Duration,
}

/// Testimonial strip: slide changes animate for a fixed time and further
/// navigation is ignored until the animation ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionCarousel {
    slides: Carousel,
    transition_time: Duration,
    transition: Option<Transition>,
    direction: Option<Direction>,
}

impl TransitionCarousel {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(8);
    pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(500);

    pub fn new(
        len: usize,
        interval: Duration,
        transition_time: Duration,
    ) -> Self {
        Self {
            slides: Carousel::new(len, interval),
            transition_time,
            transition: None,
            direction: None,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.slides.index()
    }

    /// Neighbours shown beside the active card: `(previous, next)`.
    pub fn neighbours(&self) -> (usize, usize) {
        (self.slides.peek_previous(), self.slides.peek_next())
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Direction of the last transition started.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn next(&mut self) -> bool {
        let target = self.slides.peek_next();
        self.begin(target, Direction::Right)
    }

    pub fn previous(&mut self) -> bool {
        let target = self.slides.peek_previous();
        self.begin(target, Direction::Left)
    }

    /// Animates to slide `index`. Ignored for the current slide, out-of-range
    /// indices and while a transition is running.
    pub fn go_to(
        &mut self,
        index: usize,
    ) -> bool {
        if index == self.index() || index >= self.len() {
            return false;
        }
        let direction = if index > self.index() {
            Direction::Right
        } else {
            Direction::Left
        };
        self.begin(index, direction)
    }

    fn begin(
        &mut self,
        target: usize,
        direction: Direction,
    ) -> bool {
        if self.is_animating() || self.is_empty() {
            return false;
        }
        self.direction = Some(direction);
        self.transition = Some(Transition {
            target,
            remaining: self.transition_time,
        });
        if self.transition_time.is_zero() {
            self.finish();
        }
        true
    }

    fn finish(&mut self) {
        if let Some(transition) = self.transition.take() {
            self.slides.go_to(transition.target);
        }
    }

    /// Advances time by `dt`: completes a running transition, otherwise
    /// runs autoplay, which requests the next slide.
    pub fn tick(
        &mut self,
        dt: Duration,
    ) {
        if let Some(transition) = &mut self.transition {
            transition.remaining = transition.remaining.saturating_sub(dt);
            if transition.remaining.is_zero() {
                self.finish();
            }
            return;
        }

        if self.slides.autoplay.advance(dt) > 0 {
            self.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn banner(len: usize) -> Carousel {
        Carousel::new(len, Carousel::DEFAULT_INTERVAL)
    }

    fn testimonials(len: usize) -> TransitionCarousel {
        TransitionCarousel::new(
            len,
            TransitionCarousel::DEFAULT_INTERVAL,
            TransitionCarousel::DEFAULT_TRANSITION,
        )
    }

    // =========================================================================
    // Carousel
    // =========================================================================

    #[test]
    fn next_and_previous_wrap() {
        let mut carousel = banner(3);

        carousel.previous();
        assert_eq!(carousel.index(), 2);

        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut carousel = banner(3);

        assert!(carousel.go_to(2));
        assert!(!carousel.go_to(3));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn autoplay_advances_once_per_interval() {
        let mut carousel = banner(3);

        assert!(!carousel.tick(Duration::from_millis(4999)));
        assert!(carousel.tick(Duration::from_millis(1)));
        assert_eq!(carousel.index(), 1);

        carousel.tick(Duration::from_secs(10));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let mut carousel = banner(3);

        carousel.set_hovered(true);
        assert!(carousel.is_paused());
        assert!(!carousel.tick(Duration::from_secs(30)));
        assert_eq!(carousel.index(), 0);

        carousel.set_hovered(false);
        assert!(carousel.tick(Duration::from_secs(5)));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn manual_navigation_resets_autoplay_timer() {
        let mut carousel = banner(4);

        carousel.tick(Duration::from_secs(4));
        carousel.next();
        carousel.tick(Duration::from_secs(4));

        assert_eq!(carousel.index(), 1);
        assert!(carousel.tick(Duration::from_secs(1)));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn empty_carousel_never_advances() {
        let mut carousel = banner(0);

        carousel.next();
        carousel.previous();

        assert!(!carousel.tick(Duration::from_secs(60)));
        assert!(!carousel.go_to(0));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn zero_interval_disables_autoplay() {
        let mut carousel = Carousel::new(3, Duration::ZERO);

        assert!(!carousel.tick(Duration::from_secs(60)));
    }

    // =========================================================================
    // TransitionCarousel
    // =========================================================================

    #[test]
    fn index_changes_when_transition_completes() {
        let mut strip = testimonials(4);

        assert!(strip.next());
        assert!(strip.is_animating());
        assert_eq!(strip.direction(), Some(Direction::Right));
        assert_eq!(strip.index(), 0);

        strip.tick(Duration::from_millis(499));
        assert_eq!(strip.index(), 0);

        strip.tick(Duration::from_millis(1));
        assert_eq!(strip.index(), 1);
        assert!(!strip.is_animating());
    }

    #[test]
    fn navigation_ignored_while_animating() {
        let mut strip = testimonials(4);

        strip.previous();
        assert!(!strip.next());
        assert!(!strip.go_to(2));

        strip.tick(Duration::from_millis(500));
        assert_eq!(strip.index(), 3);
        assert_eq!(strip.direction(), Some(Direction::Left));
    }

    #[test]
    fn go_to_picks_direction_and_skips_current() {
        let mut strip = testimonials(4);

        assert!(!strip.go_to(0));
        assert!(!strip.go_to(9));

        assert!(strip.go_to(2));
        assert_eq!(strip.direction(), Some(Direction::Right));
        strip.tick(Duration::from_millis(500));

        assert!(strip.go_to(1));
        assert_eq!(strip.direction(), Some(Direction::Left));
    }

    #[test]
    fn autoplay_requests_next_with_transition() {
        let mut strip = testimonials(3);

        strip.tick(Duration::from_secs(8));
        assert!(strip.is_animating());
        assert_eq!(strip.index(), 0);

        strip.tick(Duration::from_millis(500));
        assert_eq!(strip.index(), 1);
        assert_eq!(strip.neighbours(), (0, 2));
    }

    #[test]
    fn zero_transition_completes_immediately() {
        let mut strip = TransitionCarousel::new(3, Duration::ZERO, Duration::ZERO);

        assert!(strip.next());
        assert_eq!(strip.index(), 1);
        assert!(!strip.is_animating());
    }

    #[test]
    fn neighbours_wrap() {
        let strip = testimonials(5);

        assert_eq!(strip.neighbours(), (4, 1));
    }
}
