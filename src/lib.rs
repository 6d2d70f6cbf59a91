//! # Phalanx
//!
//! **Composable 2D and 3D transform matrices for graphics pipelines.**
//!
//! Phalanx provides the transform types that sit beneath a scene's sprites,
//! views, and cameras: build them from translate/rotate/scale steps, compose
//! them, invert them, and push points and rectangles through them. No
//! rendering, no windowing — just the math, in a memory layout a GPU can
//! consume directly.
//!
//! ## Quick Start
//!
//! ```
//! use phalanx::{Transform, Transform3D, Vec2, Vec3};
//!
//! // Position a sprite: move it, then spin it in its own frame.
//! let mut model = Transform::new();
//! model.translate((100.0, 50.0)).rotate(45.0);
//! let top_left = model.transform_point(Vec2::new(-8.0, -8.0));
//!
//! // A camera for the 3D side of the scene.
//! let mut view_proj = Transform3D::new();
//! view_proj
//!     .perspective(60.0, 16.0 / 9.0, 0.1, 1000.0)
//!     .look_at(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::Y);
//!
//! let clip = view_proj.transform_point(top_left.extend(0.0));
//! # let _ = clip;
//! ```
//!
//! ## Design
//!
//! - **One storage, two views** — Both [`Transform`] (2D affine) and
//!   [`Transform3D`] (general 4×4) store 16 floats column-major, so either
//!   can be handed to a graphics API without conversion. The 2D type keeps
//!   its z row and column neutral and runs composition and inversion on the
//!   cheaper 3×3 form.
//! - **Chainable builders** — `translate`/`rotate`/`scale` mutate in place
//!   and return `&mut Self`; each call operates in the local frame set up by
//!   the calls before it.
//! - **No failure paths** — Inversion of a singular matrix yields the
//!   identity; `try_inverse` exists for callers that need to tell the
//!   difference. Everything else is a total function, and NaNs propagate
//!   rather than panic.

mod base;
mod rect;
mod transform;
mod transform3d;

pub use rect::Rect;
pub use transform::Transform;
pub use transform3d::Transform3D;

// Re-export glam math types for convenience
pub use glam::{Vec2, Vec3};
