//! Boundary policy implementations.

use serde::{Deserialize, Serialize};

use crate::core::Coordinate;
use crate::error::ConfigError;

/// Decides whether, and where, a coordinate is kept.
///
/// ## Contract
///
/// - Pure: the result depends only on the input coordinate.
/// - Total and terminating for every `Coordinate`, including ones far
///   outside any display.
/// - `None` means "discard": the cell does not exist on this topology.
///
/// Violating the contract is a caller bug; the engine does not check it.
pub trait BoundaryPolicy {
    fn apply(&self, coord: Coordinate) -> Option<Coordinate>;
}

impl<F> BoundaryPolicy for F
where
    F: Fn(Coordinate) -> Option<Coordinate>,
{
    fn apply(&self, coord: Coordinate) -> Option<Coordinate> {
        self(coord)
    }
}

/// Unbounded plane: every coordinate is kept as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl BoundaryPolicy for Identity {
    #[inline]
    fn apply(&self, coord: Coordinate) -> Option<Coordinate> {
        Some(coord)
    }
}

/// Half-open rectangle `[0, width) × [0, height)`; anything outside dies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clip {
    width: u32,
    height: u32,
}

impl Clip {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn contains(&self, coord: Coordinate) -> bool {
        u32::try_from(coord.x).is_ok_and(|x| x < self.width)
            && u32::try_from(coord.y).is_ok_and(|y| y < self.height)
    }
}

impl BoundaryPolicy for Clip {
    #[inline]
    fn apply(&self, coord: Coordinate) -> Option<Coordinate> {
        self.contains(coord).then_some(coord)
    }
}

/// Torus of `width × height`: coordinates fold back onto the rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wrap {
    width: i64,
    height: i64,
}

impl Wrap {
    /// Create a wrapping policy. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroWrap { width, height });
        }
        Ok(Self {
            width: i64::from(width),
            height: i64::from(height),
        })
    }
}

impl BoundaryPolicy for Wrap {
    #[inline]
    fn apply(&self, coord: Coordinate) -> Option<Coordinate> {
        // Dimensions past i32::MAX leave part of the torus unaddressable.
        let x = i64::from(coord.x).rem_euclid(self.width);
        let y = i64::from(coord.y).rem_euclid(self.height);
        Some(Coordinate::new(
            i32::try_from(x).ok()?,
            i32::try_from(y).ok()?,
        ))
    }
}

/// Which boundary to build at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryKind {
    /// Kill cells that leave the screen.
    #[default]
    Clip,
    /// Infinite plane.
    Identity,
    /// Opposite edges are joined.
    Wrap,
}

impl std::fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BoundaryKind::Clip => "clip",
            BoundaryKind::Identity => "identity",
            BoundaryKind::Wrap => "wrap",
        };
        f.write_str(name)
    }
}

/// A boundary resolved once from a [`BoundaryKind`] and screen dimensions.
///
/// Dispatch is a `match` on a small enum, so the engine's per-cell calls
/// stay monomorphic without boxing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    Clip(Clip),
    Identity(Identity),
    Wrap(Wrap),
}

impl Boundary {
    /// Resolve a boundary kind against the current screen size.
    pub fn resolve(kind: BoundaryKind, width: u32, height: u32) -> Result<Self, ConfigError> {
        Ok(match kind {
            BoundaryKind::Clip => Boundary::Clip(Clip::new(width, height)),
            BoundaryKind::Identity => Boundary::Identity(Identity),
            BoundaryKind::Wrap => Boundary::Wrap(Wrap::new(width, height)?),
        })
    }

    #[must_use]
    pub fn kind(&self) -> BoundaryKind {
        match self {
            Boundary::Clip(_) => BoundaryKind::Clip,
            Boundary::Identity(_) => BoundaryKind::Identity,
            Boundary::Wrap(_) => BoundaryKind::Wrap,
        }
    }
}

impl BoundaryPolicy for Boundary {
    #[inline]
    fn apply(&self, coord: Coordinate) -> Option<Coordinate> {
        match self {
            Boundary::Clip(p) => p.apply(coord),
            Boundary::Identity(p) => p.apply(coord),
            Boundary::Wrap(p) => p.apply(coord),
        }
    }
}
