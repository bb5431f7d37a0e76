/*

    Responsible for creating a struct that represents
    ranges from a to b and functionality to grow it
    one observation at a time while scanning.

    See also associated constants of Interval class:
    - EMPTY: (inf, -inf)
    - UNIVERSE: (-inf, inf)

    EMPTY is the starting state of every axis of a
    bounding box: any finite x expanded into it replaces
    both ends at once.

    @author: Bartu
    @date: Sept 2025

*/

use crate::numeric::Float;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Default for Interval {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Interval {

    pub const EMPTY: Self = Self {
        min: FloatConst::INF,
        max: FloatConst::NEG_INF,
    };

    pub const UNIVERSE: Self = Self {
        min: FloatConst::NEG_INF,
        max: FloatConst::INF,
    };

    pub fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    /// Degenerate interval [x, x]
    pub fn point(x: Float) -> Self {
        Self { min: x, max: x }
    }

    pub fn validate(&self) -> bool {
        self.max >= self.min
    }

    /// True until the first expand() call
    pub fn is_empty(&self) -> bool {
        !self.validate()
    }

    pub fn size(&self) -> Float {
        self.max - self.min
    }

    pub fn midpoint(&self) -> Float {
        0.5 * (self.min + self.max)
    }

    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn expand(&mut self, x: Float) {
        if x < self.min { self.min = x; }
        if x > self.max { self.max = x; }
    }

    /// Smallest interval covering both
    pub fn union(&self, other: &Interval) -> Interval {
        Interval {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}


pub trait FloatConst: Copy {
    const INF: Self;
    const NEG_INF: Self;
}

impl FloatConst for f32 {
    const INF: Self = f32::INFINITY;
    const NEG_INF: Self = f32::NEG_INFINITY;
}

impl FloatConst for f64 {
    const INF: Self = f64::INFINITY;
    const NEG_INF: Self = f64::NEG_INFINITY;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_not_valid() {
        assert!(Interval::EMPTY.is_empty());
        assert!(!Interval::EMPTY.contains(0.0));
        assert!(Interval::UNIVERSE.contains(1e300));
    }

    #[test]
    fn test_first_expand_sets_both_ends() {
        let mut int = Interval::EMPTY;
        int.expand(-4.0);
        assert_eq!(int, Interval::point(-4.0));
        assert!(int.validate());
        assert_eq!(int.size(), 0.0);
    }

    #[test]
    fn test_expand_tracks_extremes() {
        let mut int = Interval::default();
        for x in [3.0, -1.0, 7.5, 2.0] {
            int.expand(x);
        }
        assert_eq!(int.min, -1.0);
        assert_eq!(int.max, 7.5);
        assert_eq!(int.size(), 8.5);
        assert_eq!(int.midpoint(), 3.25);
    }

    #[test]
    fn test_all_negative_values_give_negative_max() {
        let mut int = Interval::EMPTY;
        int.expand(-10.0);
        int.expand(-2.0);
        assert_eq!(int.max, -2.0);
    }

    #[test]
    fn test_union_with_empty_is_identity() {
        let int = Interval::new(1.0, 2.0);
        assert_eq!(int.union(&Interval::EMPTY), int);
        assert_eq!(int.union(&Interval::new(-1.0, 0.0)), Interval::new(-1.0, 2.0));
    }
}
