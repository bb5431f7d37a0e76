/*

    Axis Aligned Bounding Box accumulated from vertex positions.

    A BBox starts as EMPTY and grows with every expand() call.
    Once scanning is over, finish() turns it into an Option so
    that callers never see the (inf, -inf) starting state.

    @author: bartu
    @date: 9 Nov, 2025
*/

use std::fmt;

use crate::interval::Interval;
use crate::numeric::{Float, Vector3, to_array};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BBox {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl BBox {

    pub const EMPTY: Self = Self {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    pub fn new_from(xint: &Interval, yint: &Interval, zint: &Interval) -> Self {
        debug_assert!(xint.validate() && yint.validate() && zint.validate(), "Invalid interval, found max < min");
        Self {
            x: *xint,
            y: *yint,
            z: *zint,
        }
    }

    /// Box spanning exactly the two corners given (in any order)
    pub fn from_corners(a: &Vector3, b: &Vector3) -> Self {
        let mut bbox = Self::EMPTY;
        bbox.expand(a);
        bbox.expand(b);
        bbox
    }

    fn axes(&self) -> [&Interval; 3] {
        [&self.x, &self.y, &self.z]
    }

    fn axes_mut(&mut self) -> [&mut Interval; 3] {
        [&mut self.x, &mut self.y, &mut self.z]
    }

    pub fn expand(&mut self, v: &Vector3) {
        let coords = to_array(v);
        for (axis, c) in self.axes_mut().into_iter().zip(coords) {
            axis.expand(c);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.axes().iter().any(|axis| axis.is_empty())
    }

    /// None if nothing was ever expanded into this box
    pub fn finish(self) -> Option<BBox> {
        if self.is_empty() { None } else { Some(self) }
    }

    pub fn min(&self) -> Vector3 {
        Vector3::new(self.x.min, self.y.min, self.z.min)
    }

    pub fn max(&self) -> Vector3 {
        Vector3::new(self.x.max, self.y.max, self.z.max)
    }

    /// Width, height and depth
    pub fn size(&self) -> Vector3 {
        Vector3::new(self.x.size(), self.y.size(), self.z.size())
    }

    pub fn center(&self) -> Vector3 {
        Vector3::new(self.x.midpoint(), self.y.midpoint(), self.z.midpoint())
    }

    pub fn volume(&self) -> Float {
        let s = self.size();
        s.x * s.y * s.z
    }

    pub fn contains(&self, v: &Vector3) -> bool {
        self.x.contains(v.x) && self.y.contains(v.y) && self.z.contains(v.z)
    }

    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x: self.x.union(&other.x),
            y: self.y.union(&other.y),
            z: self.z.union(&other.z),
        }
    }
}

impl Extend<Vector3> for BBox {
    fn extend<I: IntoIterator<Item = Vector3>>(&mut self, iter: I) {
        for v in iter {
            self.expand(&v);
        }
    }
}

impl FromIterator<Vector3> for BBox {
    fn from_iter<I: IntoIterator<Item = Vector3>>(iter: I) -> Self {
        let mut bbox = BBox::EMPTY;
        bbox.extend(iter);
        bbox
    }
}

impl fmt::Display for BBox {
    // Min: [x, y, z]
    // Max: [x, y, z]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Min: {:?}", to_array(&self.min()))?;
        write!(f, "Max: {:?}", to_array(&self.max()))
    }
}
