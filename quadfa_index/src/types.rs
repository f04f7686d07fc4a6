// Copyright 2025 the Quadfa Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer geometry primitives and the payload trait.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Sub, SubAssign};

use crate::error::{Error, Result};

/// Integer 2D vector, also used as a point.
///
/// `x` grows to the right and `y` grows downwards, so the top-left corner of a
/// [`Bound`] holds its minimum coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

impl Vec2 {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a vector from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Vec2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

/// Componentwise division, truncating towards zero.
impl Div<i32> for Vec2 {
    type Output = Self;

    fn div(self, rhs: i32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// One of the four sub-rectangles produced by [`Bound::quad_division`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Top-left quarter.
    NorthWest = 0,
    /// Top-right quarter.
    NorthEast = 1,
    /// Bottom-left quarter.
    SouthWest = 2,
    /// Bottom-right quarter.
    SouthEast = 3,
}

impl Quadrant {
    /// All quadrants, in the order used for seam tie-breaking.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Position of this quadrant in [`Quadrant::ALL`] and in [`Bound::quad_division`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Axis-aligned integer rectangle with inclusive corners.
///
/// A `Bound` always satisfies `top_left <= bottom_right` componentwise. Zero width
/// or zero height is allowed; such bounds cannot be subdivided.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bound {
    top_left: Vec2,
    bottom_right: Vec2,
}

impl Bound {
    /// Create a bound from its top-left and bottom-right corners.
    ///
    /// Returns [`Error::InvalidBound`] if the corners are inverted on either axis.
    /// Use [`Bound::from_corners`] to accept any two opposite corners instead.
    pub const fn new(top_left: Vec2, bottom_right: Vec2) -> Result<Self> {
        if top_left.x > bottom_right.x || top_left.y > bottom_right.y {
            return Err(Error::InvalidBound {
                top_left,
                bottom_right,
            });
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Create a bound spanning two opposite corners given in any order.
    pub const fn from_corners(a: Vec2, b: Vec2) -> Self {
        let (min_x, max_x) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
        let (min_y, max_y) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };
        Self {
            top_left: Vec2::new(min_x, min_y),
            bottom_right: Vec2::new(max_x, max_y),
        }
    }

    /// Create a bound from its top-left corner and size.
    ///
    /// Negative sizes are rejected with [`Error::InvalidBound`].
    pub const fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        Self::new(Vec2::new(x, y), Vec2::new(x + w, y + h))
    }

    /// Top-left (minimum) corner.
    pub const fn top_left(&self) -> Vec2 {
        self.top_left
    }

    /// Bottom-right (maximum) corner.
    pub const fn bottom_right(&self) -> Vec2 {
        self.bottom_right
    }

    /// Horizontal extent.
    pub const fn width(&self) -> i32 {
        self.bottom_right.x - self.top_left.x
    }

    /// Vertical extent.
    pub const fn height(&self) -> i32 {
        self.bottom_right.y - self.top_left.y
    }

    /// Extent on both axes.
    pub const fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Center point, rounded towards the top-left corner.
    pub const fn center(&self) -> Vec2 {
        Vec2::new(
            self.top_left.x + self.width() / 2,
            self.top_left.y + self.height() / 2,
        )
    }

    /// Whether the two bounds share at least one point. Touching edges count.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.top_left.x <= other.bottom_right.x
            && self.bottom_right.x >= other.top_left.x
            && self.top_left.y <= other.bottom_right.y
            && self.bottom_right.y >= other.top_left.y
    }

    /// Whether this bound fully covers `other`. Equal bounds contain each other.
    pub const fn contains(&self, other: &Self) -> bool {
        self.top_left.x <= other.top_left.x
            && self.top_left.y <= other.top_left.y
            && self.bottom_right.x >= other.bottom_right.x
            && self.bottom_right.y >= other.bottom_right.y
    }

    /// Whether the bound has positive width and height.
    pub const fn quad_divisible(&self) -> bool {
        self.top_left.x < self.bottom_right.x && self.top_left.y < self.bottom_right.y
    }

    /// Split into quadrants, ordered as [`Quadrant::ALL`].
    ///
    /// The half size is truncated, so neighbouring quadrants share their edge on
    /// the halving line and odd extents leave the larger half to the east/south.
    pub fn quad_division(&self) -> [Self; 4] {
        let tl = self.top_left;
        let br = self.bottom_right;
        let half = (br - tl) / 2;
        let mid = tl + half;
        [
            Self {
                top_left: tl,
                bottom_right: mid,
            },
            Self {
                top_left: Vec2::new(mid.x, tl.y),
                bottom_right: Vec2::new(br.x, mid.y),
            },
            Self {
                top_left: Vec2::new(tl.x, mid.y),
                bottom_right: Vec2::new(mid.x, br.y),
            },
            Self {
                top_left: mid,
                bottom_right: br,
            },
        ]
    }

    /// A single quadrant of [`Bound::quad_division`].
    pub fn quadrant(&self, quadrant: Quadrant) -> Self {
        self.quad_division()[quadrant.index()]
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[({}, {}), ({}, {})]",
            self.top_left.x, self.top_left.y, self.bottom_right.x, self.bottom_right.y
        )
    }
}

/// Payloads that can be placed in a container.
///
/// The bound of an item must not change while the item is stored.
pub trait Bounded {
    /// The rectangle occupied by the item.
    fn bound(&self) -> Bound;
}

impl Bounded for Bound {
    fn bound(&self) -> Bound {
        *self
    }
}

impl<P> Bounded for (Bound, P) {
    fn bound(&self) -> Bound {
        self.0
    }
}

impl<B: Bounded + ?Sized> Bounded for &B {
    fn bound(&self) -> Bound {
        (**self).bound()
    }
}
