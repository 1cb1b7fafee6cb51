// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Affine, Size, Vec2};

/// Rotation of an image in quarter turns, clockwise on a y-down screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    /// Upright.
    #[default]
    Deg0,
    /// A quarter turn clockwise.
    Deg90,
    /// Upside down.
    Deg180,
    /// A quarter turn counter-clockwise.
    Deg270,
}

impl Rotation {
    /// Snaps an arbitrary angle in degrees to the nearest quarter turn.
    ///
    /// The angle is normalized into `[0, 360)` first, so `-90.0` and `270.0`
    /// give the same result. Halfway angles round up, so `45.0` becomes
    /// [`Rotation::Deg90`] and `-45.0` (that is, `315.0`) becomes
    /// [`Rotation::Deg0`]. Non-finite input yields
    /// [`Rotation::Deg0`].
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return Self::Deg0;
        }
        let normalized = degrees % 360.0;
        let normalized = if normalized < 0.0 {
            normalized + 360.0
        } else {
            normalized
        };
        match (normalized / 90.0).round() % 4.0 {
            s if s < 0.5 => Self::Deg0,
            s if s < 1.5 => Self::Deg90,
            s if s < 2.5 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    /// Returns the rotation for a number of clockwise quarter turns.
    #[must_use]
    pub fn from_quarter_turns(turns: i32) -> Self {
        match turns.rem_euclid(4) {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    /// Number of clockwise quarter turns, in `0..4`.
    #[must_use]
    pub fn quarter_turns(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    /// Angle in degrees: one of `0`, `90`, `180`, `270`.
    #[must_use]
    pub fn degrees(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Adds `turns` clockwise quarter turns (negative turns rotate counter-clockwise).
    #[must_use]
    pub fn rotate_by(self, turns: i32) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + turns)
    }

    /// Returns `true` when the rotated image has its width and height swapped.
    #[must_use]
    pub fn is_transposed(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// Bounding size of a `size`d box after this rotation.
    #[must_use]
    pub fn apply_to_size(self, size: Size) -> Size {
        if self.is_transposed() {
            Size::new(size.height, size.width)
        } else {
            size
        }
    }

    /// Rotates a screen-space vector by this rotation.
    #[must_use]
    pub fn apply_to_vec(self, v: Vec2) -> Vec2 {
        match self {
            Self::Deg0 => v,
            Self::Deg90 => Vec2::new(-v.y, v.x),
            Self::Deg180 => Vec2::new(-v.x, -v.y),
            Self::Deg270 => Vec2::new(v.y, -v.x),
        }
    }

    /// Exact rotation combined with a uniform `scale`, about the origin.
    ///
    /// Built from the matrix entries directly so quarter turns stay free of
    /// trigonometric rounding.
    #[must_use]
    pub fn scaled(self, scale: f64) -> Affine {
        match self {
            Self::Deg0 => Affine::scale(scale),
            Self::Deg90 => Affine::new([0.0, scale, -scale, 0.0, 0.0, 0.0]),
            Self::Deg180 => Affine::new([-scale, 0.0, 0.0, -scale, 0.0, 0.0]),
            Self::Deg270 => Affine::new([0.0, -scale, scale, 0.0, 0.0, 0.0]),
        }
    }
}
