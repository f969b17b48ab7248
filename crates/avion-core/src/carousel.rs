//! Slide rotation for the image carousels

use std::time::Duration;

/// How long each slide stays visible
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
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

    pub fn is_current(&self, index: usize) -> bool {
        !self.is_empty() && self.index == index
    }

    /// Move to the next slide, wrapping after the last one
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let mut carousel = Carousel::new(3);
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.index(), 2);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut carousel = Carousel::new(5);
        for _ in 0..5 {
            carousel.advance();
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_empty_carousel_never_moves() {
        let mut carousel = Carousel::new(0);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.is_current(0));
    }
}
