//! Boundary policies: how the plane is clipped or wrapped at its edges.
//!
//! A boundary policy is a pure function `Coordinate -> Option<Coordinate>`.
//! The engine never bounds-checks on its own; supplying a different policy
//! turns the same rule into an infinite plane, a clipped screen or a torus.
//!
//! - `Clip`: half-open screen rectangle, everything outside dies
//! - `Identity`: infinite plane
//! - `Wrap`: toroidal screen
//! - any `Fn(Coordinate) -> Option<Coordinate>` closure
//!
//! `Boundary` is the enum the simulation resolves once at startup.

pub mod policy;

pub use policy::{Boundary, BoundaryKind, BoundaryPolicy, Clip, Identity, Wrap};
