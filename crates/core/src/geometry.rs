use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, rhs: Offset) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Mul<usize> for Offset {
    type Output = Offset;

    fn mul(self, rhs: usize) -> Offset {
        let n = rhs as i32;
        Offset::new(self.dx * n, self.dy * n)
    }
}

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self {
            width: (self.width as f32 * factor) as u32,
            height: (self.height as f32 * factor) as u32,
        }
    }
}

/// Screen-space rectangle. `contains` is half-open on the far edges.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn contains(&self, point: Point) -> bool {
        let (px, py) = (i64::from(point.x), i64::from(point.y));
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        px >= x && px < x + i64::from(self.width) && py >= y && py < y + i64::from(self.height)
    }

    pub fn translated(&self, offset: Offset) -> Self {
        Self::new(self.origin() + offset, self.size())
    }

    /// Grow the rectangle by `pad` on every side.
    pub fn inflated(&self, pad: u32) -> Self {
        let pad_i = pad as i32;
        Self {
            x: self.x - pad_i,
            y: self.y - pad_i,
            width: self.width + pad * 2,
            height: self.height + pad * 2,
        }
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Self {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = (i64::from(self.x) + i64::from(self.width))
            .max(i64::from(other.x) + i64::from(other.width));
        let bottom = (i64::from(self.y) + i64::from(self.height))
            .max(i64::from(other.y) + i64::from(other.height));
        Self {
            x: left,
            y: top,
            width: (right - i64::from(left)) as u32,
            height: (bottom - i64::from(top)) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(Point::new(10, 10), Size::new(100, 145));
        assert!(rect.contains(Point::new(10, 10)));
        assert!(rect.contains(Point::new(109, 154)));
        assert!(!rect.contains(Point::new(110, 10)));
        assert!(!rect.contains(Point::new(10, 155)));
        assert!(!rect.contains(Point::new(9, 10)));
    }

    #[test]
    fn union_covers_both() {
        let a = Rect::new(Point::new(0, 0), Size::new(10, 10));
        let b = Rect::new(Point::new(20, 5), Size::new(10, 10));
        assert_eq!(a.union(&b), Rect::new(Point::new(0, 0), Size::new(30, 15)));
    }

    #[test]
    fn offset_multiplies_per_slot() {
        let anchor = Point::new(10, 10);
        assert_eq!(anchor + Offset::new(18, 0) * 5, Point::new(100, 10));
    }
}
