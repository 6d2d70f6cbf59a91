//! 2D affine transforms for positioning sprites, views, and scene nodes.

use std::ops::{Mul, MulAssign};

use glam::Vec2;

use crate::base;
use crate::rect::Rect;
use crate::transform3d::Transform3D;

/// A 2D affine transform: rotation, scale, shear, and translation.
///
/// A `Transform` is stored as a full 4×4 matrix (the layout shared with
/// [`Transform3D`]) but only ever uses the embedded 3×3 affine subset — the
/// z row and column stay at their identity values through every builder
/// call. This keeps the matrix directly uploadable to a graphics pipeline
/// while letting composition and inversion run on the cheaper 3×3 form.
///
/// Builder methods mutate in place and return `&mut Self`, so calls chain.
/// Each call combines the new operation *into the current local frame*:
/// `t.translate(...)` then `.rotate(...)` rotates in the already-translated
/// coordinate system.
///
/// # Example
///
/// ```
/// use phalanx::{Transform, Vec2};
///
/// let mut sprite = Transform::new();
/// sprite.translate((100.0, 50.0)).rotate(90.0);
///
/// let p = sprite.transform_point(Vec2::ZERO);
/// assert!((p - Vec2::new(100.0, 50.0)).length() < 1e-5);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Transform {
    matrix: [f32; 16],
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform (does nothing).
    pub const IDENTITY: Transform = Transform {
        matrix: base::IDENTITY,
    };

    /// Creates an identity transform.
    ///
    /// Equivalent to `Transform::default()` and [`Transform::IDENTITY`].
    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Creates a transform from the 9 elements of a 3×3 affine matrix, given
    /// in row-major reading order:
    ///
    /// ```text
    /// | a00 a01 a02 |
    /// | a10 a11 a12 |
    /// | a20 a21 a22 |
    /// ```
    ///
    /// The translation terms are `a02` and `a12`.
    #[rustfmt::skip]
    pub const fn from_affine(
        a00: f32, a01: f32, a02: f32,
        a10: f32, a11: f32, a12: f32,
        a20: f32, a21: f32, a22: f32,
    ) -> Self {
        Transform {
            matrix: base::from_affine(
                a00, a01, a02,
                a10, a11, a12,
                a20, a21, a22,
            ),
        }
    }

    /// Returns the transform as a 4×4 matrix: 16 floats in column-major
    /// order, element (row, col) at index `col * 4 + row`.
    ///
    /// This layout is directly compatible with the matrix-upload conventions
    /// of fixed-function graphics APIs. The type also implements
    /// [`bytemuck::Pod`], so `bytemuck::bytes_of` yields the same 64 bytes
    /// for a GPU buffer write.
    pub fn matrix(&self) -> &[f32; 16] {
        &self.matrix
    }

    /// Applies the transform to a 2D point.
    ///
    /// # Example
    ///
    /// ```
    /// use phalanx::{Transform, Vec2};
    ///
    /// let mut t = Transform::new();
    /// t.scale((2.0, 2.0));
    /// assert_eq!(t.transform_point(Vec2::new(3.0, 4.0)), Vec2::new(6.0, 8.0));
    /// ```
    pub fn transform_point(&self, point: impl Into<Vec2>) -> Vec2 {
        let point = point.into();
        base::transform_point2(&self.matrix, point.x, point.y)
    }

    /// Applies the transform to a rectangle.
    ///
    /// Oriented rectangles are not representable, so the result is always
    /// the axis-aligned bounding box of the four transformed corners. Under
    /// a rotation this is an enclosing box, not the rotated quad itself.
    pub fn transform_rect(&self, rect: Rect) -> Rect {
        base::transform_rect(&self.matrix, rect)
    }

    /// Combines this transform with another: `self` becomes
    /// `self × other`.
    ///
    /// The result applied to a point runs `other` through `self`'s frame —
    /// this is what makes chained builder calls operate in the local
    /// coordinate system established by the calls before them.
    ///
    /// Both operands are affine, so only the 3×3 subset is multiplied; the
    /// z and projective rows keep their identity values.
    pub fn combine(&mut self, other: &Transform) -> &mut Self {
        let a = self.matrix;
        let b = other.matrix;

        *self = Transform::from_affine(
            a[0] * b[0] + a[4] * b[1] + a[12] * b[3],
            a[0] * b[4] + a[4] * b[5] + a[12] * b[7],
            a[0] * b[12] + a[4] * b[13] + a[12] * b[15],
            a[1] * b[0] + a[5] * b[1] + a[13] * b[3],
            a[1] * b[4] + a[5] * b[5] + a[13] * b[7],
            a[1] * b[12] + a[5] * b[13] + a[13] * b[15],
            a[3] * b[0] + a[7] * b[1] + a[15] * b[3],
            a[3] * b[4] + a[7] * b[5] + a[15] * b[7],
            a[3] * b[12] + a[7] * b[13] + a[15] * b[15],
        );

        self
    }

    /// Returns the inverse transform, or [`Transform::IDENTITY`] if the
    /// matrix is singular.
    ///
    /// Callers that need to distinguish a singular matrix from an identity
    /// result should use [`Transform::try_inverse`].
    pub fn inverse(&self) -> Transform {
        self.try_inverse().unwrap_or(Transform::IDENTITY)
    }

    /// Returns the inverse transform, or `None` if the determinant is zero.
    ///
    /// The determinant is compared against exactly zero, with no epsilon:
    /// it may really be tiny. Near-singular matrices invert "successfully"
    /// with whatever numeric stability they have.
    pub fn try_inverse(&self) -> Option<Transform> {
        let m = &self.matrix;

        let det = m[0] * (m[15] * m[5] - m[7] * m[13])
            - m[1] * (m[15] * m[4] - m[7] * m[12])
            + m[3] * (m[13] * m[4] - m[5] * m[12]);

        if det == 0.0 {
            return None;
        }

        Some(Transform::from_affine(
            (m[15] * m[5] - m[7] * m[13]) / det,
            -(m[15] * m[4] - m[7] * m[12]) / det,
            (m[13] * m[4] - m[5] * m[12]) / det,
            -(m[15] * m[1] - m[3] * m[13]) / det,
            (m[15] * m[0] - m[3] * m[12]) / det,
            -(m[13] * m[0] - m[1] * m[12]) / det,
            (m[7] * m[1] - m[3] * m[5]) / det,
            -(m[7] * m[0] - m[3] * m[4]) / det,
            (m[5] * m[0] - m[1] * m[4]) / det,
        ))
    }

    /// Combines a translation into the current frame.
    ///
    /// Accepts anything convertible to a [`Vec2`]: `t.translate((10.0, 0.0))`
    /// or `t.translate(Vec2::X * 10.0)`.
    pub fn translate(&mut self, offset: impl Into<Vec2>) -> &mut Self {
        let offset = offset.into();
        self.combine(&Transform::from_affine(
            1.0, 0.0, offset.x, //
            0.0, 1.0, offset.y, //
            0.0, 0.0, 1.0,
        ))
    }

    /// Combines a rotation about the origin into the current frame.
    ///
    /// The angle is in degrees; positive angles rotate counter-clockwise in
    /// a y-up frame (clockwise under the usual y-down screen convention).
    pub fn rotate(&mut self, angle: f32) -> &mut Self {
        let rad = angle.to_radians();
        let cos = rad.cos();
        let sin = rad.sin();

        self.combine(&Transform::from_affine(
            cos, -sin, 0.0, //
            sin, cos, 0.0, //
            0.0, 0.0, 1.0,
        ))
    }

    /// Combines a rotation about an arbitrary pivot into the current frame.
    ///
    /// The pivot composition is fused into a single matrix: one combine,
    /// equal to the chain `translate(center).rotate(angle).translate(-center)`.
    pub fn rotate_around(&mut self, angle: f32, center: impl Into<Vec2>) -> &mut Self {
        let center = center.into();
        let rad = angle.to_radians();
        let cos = rad.cos();
        let sin = rad.sin();

        self.combine(&Transform::from_affine(
            cos,
            -sin,
            center.x * (1.0 - cos) + center.y * sin,
            sin,
            cos,
            center.y * (1.0 - cos) - center.x * sin,
            0.0,
            0.0,
            1.0,
        ))
    }

    /// Combines a scale about the origin into the current frame.
    pub fn scale(&mut self, factors: impl Into<Vec2>) -> &mut Self {
        let factors = factors.into();
        self.combine(&Transform::from_affine(
            factors.x, 0.0, 0.0, //
            0.0, factors.y, 0.0, //
            0.0, 0.0, 1.0,
        ))
    }

    /// Combines a scale about an arbitrary pivot into the current frame,
    /// fused into a single matrix like [`Transform::rotate_around`].
    pub fn scale_around(
        &mut self,
        factors: impl Into<Vec2>,
        center: impl Into<Vec2>,
    ) -> &mut Self {
        let factors = factors.into();
        let center = center.into();
        self.combine(&Transform::from_affine(
            factors.x,
            0.0,
            center.x * (1.0 - factors.x),
            0.0,
            factors.y,
            center.y * (1.0 - factors.y),
            0.0,
            0.0,
            1.0,
        ))
    }
}

/// Adopts the matrix of a 3D transform verbatim.
///
/// The 2D affine invariant (neutral z row and column) only holds if the
/// source matrix was itself 2D-affine; no check is performed.
impl From<Transform3D> for Transform {
    fn from(transform: Transform3D) -> Self {
        Transform {
            matrix: *transform.matrix(),
        }
    }
}

impl Mul for Transform {
    type Output = Transform;

    /// Combines two transforms without mutating either operand.
    fn mul(self, rhs: Transform) -> Transform {
        let mut result = self;
        result.combine(&rhs);
        result
    }
}

impl MulAssign for Transform {
    fn mul_assign(&mut self, rhs: Transform) {
        self.combine(&rhs);
    }
}

impl Mul<Vec2> for Transform {
    type Output = Vec2;

    /// Applies the transform to a point.
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.transform_point(rhs)
    }
}
