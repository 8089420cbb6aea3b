/// A range of ray parameters.
///
/// `min > max` is a valid state meaning "no valid range": both
/// [`contains`](Interval::contains) and [`surrounds`](Interval::surrounds)
/// reject every value, so an exhausted search needs no separate sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    /// True when no value can satisfy `min <= x <= max`.
    pub fn is_empty(&self) -> bool {
        self.min > self.max || self.min.is_nan() || self.max.is_nan()
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    ///
    /// Hit tests use this so a root sitting exactly on the lower bound (the
    /// surface a secondary ray just left) is rejected.
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    ///
    /// Unlike `f64::clamp` this never panics; on an empty interval the lower
    /// bound is checked first.
    pub fn clamp(&self, x: f64) -> f64 {
        if x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }

    /// Same lower bound, new upper bound.
    #[inline]
    pub fn with_max(&self, max: f64) -> Interval {
        Interval::new(self.min, max)
    }

    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// A universe interval (contains everything).
    pub const UNIVERSE: Interval = Interval {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };
}

impl Default for Interval {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_creation() {
        let interval = Interval::new(0.0, 10.0);
        assert_eq!(interval.min, 0.0);
        assert_eq!(interval.max, 10.0);
        assert!(!interval.is_empty());
    }

    #[test]
    fn test_interval_size() {
        assert_eq!(Interval::new(2.0, 7.0).size(), 5.0);
        assert_eq!(Interval::new(-5.0, 5.0).size(), 10.0);
    }

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
        assert!(!interval.contains(f64::NAN));
    }

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));

        assert!(interval.surrounds(5.0));
        assert!(interval.surrounds(0.1));
        assert!(interval.surrounds(9.9));

        assert!(!interval.surrounds(-0.1));
        assert!(!interval.surrounds(10.1));
    }

    #[test]
    fn test_containment_grid() {
        let bounds = [(-3.0, 2.0), (0.0, 0.5), (0.5, 1024.0), (4.0, 4.0)];
        for (a, b) in bounds {
            let interval = Interval::new(a, b);
            for i in 0..=16 {
                let x = a + (b - a) * (i as f64 / 16.0);
                assert!(interval.contains(x), "{x} in [{a}, {b}]");
                if x > a && x < b {
                    assert!(interval.surrounds(x), "{x} inside ({a}, {b})");
                }
            }
            assert!(!interval.surrounds(a));
            assert!(!interval.surrounds(b));
        }
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::new(0.0, 10.0);

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(0.0), 0.0);
        assert_eq!(interval.clamp(5.0), 5.0);
        assert_eq!(interval.clamp(10.0), 10.0);
        assert_eq!(interval.clamp(15.0), 10.0);
    }

    #[test]
    fn test_clamp_on_empty_does_not_panic() {
        let empty = Interval::new(1.0, -1.0);
        assert_eq!(empty.clamp(-5.0), 1.0);
        assert_eq!(empty.clamp(5.0), -1.0);
    }

    #[test]
    fn test_with_max_keeps_lower_bound() {
        let shrunk = Interval::new(0.001, f64::INFINITY).with_max(2.5);
        assert_eq!(shrunk, Interval::new(0.001, 2.5));
    }

    #[test]
    fn test_interval_empty() {
        let empty = Interval::EMPTY;

        assert!(empty.is_empty());
        assert_eq!(empty.size(), f64::NEG_INFINITY);
        assert_eq!(Interval::default(), empty);

        for x in [0.0, -1e300, 1e300, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(!empty.contains(x));
            assert!(!empty.surrounds(x));
        }

        let reversed = Interval::new(5.0, 1.0);
        assert!(reversed.is_empty());
        for x in [0.0, 1.0, 3.0, 5.0, 6.0] {
            assert!(!reversed.contains(x));
            assert!(!reversed.surrounds(x));
        }
    }

    #[test]
    fn test_interval_universe() {
        let universe = Interval::UNIVERSE;

        assert!(universe.contains(0.0));
        assert!(universe.contains(1e10));
        assert!(universe.contains(-1e10));
        assert!(universe.surrounds(1e300));
        assert_eq!(universe.size(), f64::INFINITY);
    }
}
