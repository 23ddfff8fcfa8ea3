//! Slide rotation for the services slider and testimonials rotator

use std::time::Duration;

use crate::{CoreError, CoreResult};

/// Auto-advance period of the services slider
pub const SERVICES_INTERVAL: Duration = Duration::from_secs(3);
/// Auto-advance period of the testimonials rotator
pub const TESTIMONIALS_INTERVAL: Duration = Duration::from_secs(5);

/// Current slide of a rotating set.
///
/// `index < total` holds whenever `total > 0`; an empty carousel stays at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    total: usize,
}

impl Carousel {
    pub fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// Whether a timer should advance this carousel.
    pub fn autoplays(&self) -> bool {
        self.total > 1
    }

    pub fn next(&mut self) {
        if self.total == 0 {
            return;
        }
        self.index = (self.index + 1) % self.total;
    }

    pub fn prev(&mut self) {
        if self.total == 0 {
            return;
        }
        self.index = (self.index + self.total - 1) % self.total;
    }

    pub fn jump(&mut self, index: usize) -> CoreResult<()> {
        if index >= self.total {
            return Err(CoreError::SlideOutOfRange {
                index,
                total: self.total,
            });
        }
        self.index = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_rotation_wraps() {
        let mut carousel = Carousel::new(4);
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 3);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_next_prev_roundtrip() {
        for total in 2..8 {
            for start in 0..total {
                let mut carousel = Carousel::new(total);
                carousel.jump(start).unwrap();

                carousel.next();
                carousel.prev();
                assert_eq!(carousel.index(), start);

                carousel.prev();
                carousel.next();
                assert_eq!(carousel.index(), start);
            }
        }
    }

    #[test]
    fn test_index_stays_in_bounds() {
        // deterministic pseudo-random walk of next/prev steps
        let mut seed: u32 = 0x2545_f491;
        for total in 1..10 {
            let mut carousel = Carousel::new(total);
            for _ in 0..500 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                if seed % 2 == 0 {
                    carousel.next();
                } else {
                    carousel.prev();
                }
                assert!(carousel.index() < total);
            }
        }
    }

    #[test]
    fn test_jump() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.jump(2).is_ok());
        assert!(carousel.is_active(2));

        let err = carousel.jump(3).unwrap_err();
        assert_eq!(err, CoreError::SlideOutOfRange { index: 3, total: 3 });
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty = Carousel::new(0);
        empty.next();
        empty.prev();
        assert_eq!(empty.index(), 0);
        assert!(!empty.autoplays());
        assert!(empty.jump(0).is_err());

        let mut single = Carousel::new(1);
        single.next();
        assert_eq!(single.index(), 0);
        assert!(!single.autoplays());
        assert!(Carousel::new(2).autoplays());
    }

    #[test]
    fn test_intervals() {
        assert_eq!(SERVICES_INTERVAL.as_millis(), 3000);
        assert_eq!(TESTIMONIALS_INTERVAL.as_millis(), 5000);
    }
}
