//! General 3D transforms and the projection builders used by cameras.

use std::ops::{Mul, MulAssign};

use glam::Vec3;

use crate::base;
use crate::rect::Rect;
use crate::transform::Transform;

/// A general 4×4 transform: the 3D counterpart of [`Transform`].
///
/// Unlike the 2D type, nothing restricts the matrix to an affine subset —
/// the projection builders ([`perspective`](Transform3D::perspective),
/// [`frustum`](Transform3D::frustum), [`orthographic`](Transform3D::orthographic))
/// produce genuinely projective matrices. Note that
/// [`transform_point`](Transform3D::transform_point) does not divide by the
/// homogeneous w component, so points mapped through a projective transform
/// come back unnormalized; the perspective divide is expected to happen in a
/// later clip stage.
///
/// Builder methods mutate in place and return `&mut Self` for chaining, with
/// the same local-frame composition semantics as [`Transform`].
///
/// # Example
///
/// ```
/// use phalanx::{Transform3D, Vec3};
///
/// // A classic view-projection chain for a camera hovering behind the
/// // origin, looking down the negative z axis.
/// let mut view_proj = Transform3D::new();
/// view_proj
///     .perspective(60.0, 16.0 / 9.0, 0.1, 1000.0)
///     .look_at(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::Y)
///     .translate(Vec3::new(0.0, -2.0, -5.0));
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Transform3D {
    matrix: [f32; 16],
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform3D {
    /// The identity transform (does nothing).
    pub const IDENTITY: Transform3D = Transform3D {
        matrix: base::IDENTITY,
    };

    /// Creates an identity transform.
    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Creates a transform from the 16 elements of a 4×4 matrix, given in
    /// row-major reading order. The translation terms are `a03`, `a13`,
    /// `a23`.
    #[rustfmt::skip]
    pub const fn from_matrix(
        a00: f32, a01: f32, a02: f32, a03: f32,
        a10: f32, a11: f32, a12: f32, a13: f32,
        a20: f32, a21: f32, a22: f32, a23: f32,
        a30: f32, a31: f32, a32: f32, a33: f32,
    ) -> Self {
        Transform3D {
            matrix: base::from_rows(
                a00, a01, a02, a03,
                a10, a11, a12, a13,
                a20, a21, a22, a23,
                a30, a31, a32, a33,
            ),
        }
    }

    /// Returns the transform as a 4×4 matrix: 16 floats in column-major
    /// order, element (row, col) at index `col * 4 + row`.
    ///
    /// See [`Transform::matrix`] — the layout contract is identical.
    pub fn matrix(&self) -> &[f32; 16] {
        &self.matrix
    }

    /// Applies the transform to a 3D point with implicit w = 1.
    ///
    /// The computed w component is ignored, which is exact for affine
    /// transforms and leaves projective results unnormalized (see the type
    /// docs).
    ///
    /// # Example
    ///
    /// ```
    /// use phalanx::{Transform3D, Vec3};
    ///
    /// let mut t = Transform3D::new();
    /// t.translate(Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(t.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn transform_point(&self, point: impl Into<Vec3>) -> Vec3 {
        let point = point.into();
        base::transform_point3(&self.matrix, point.x, point.y, point.z)
    }

    /// Applies the transform to a rectangle in the z = 0 plane, returning
    /// the axis-aligned bounding box of the four transformed corners.
    pub fn transform_rect(&self, rect: Rect) -> Rect {
        base::transform_rect(&self.matrix, rect)
    }

    /// Combines this transform with another: `self` becomes `self × other`,
    /// a full 4×4 product.
    ///
    /// See [`Transform::combine`] for the composition-order contract shared
    /// by both types.
    pub fn combine(&mut self, other: &Transform3D) -> &mut Self {
        self.matrix = base::multiply(&self.matrix, &other.matrix);
        self
    }

    /// Returns the inverse transform, or [`Transform3D::IDENTITY`] if the
    /// matrix is singular.
    ///
    /// Callers that need to distinguish a singular matrix from an identity
    /// result should use [`Transform3D::try_inverse`].
    pub fn inverse(&self) -> Transform3D {
        self.try_inverse().unwrap_or(Transform3D::IDENTITY)
    }

    /// Returns the inverse transform, or `None` if the determinant is zero.
    ///
    /// The inverse is computed as adjugate over determinant: 16 cofactors by
    /// 3×3-minor expansion, with the determinant taken along the first row.
    /// The determinant is compared against exactly zero, with no epsilon:
    /// it may really be tiny.
    pub fn try_inverse(&self) -> Option<Transform3D> {
        let a = &self.matrix;
        let mut b = [0.0f32; 16];

        b[0] = a[5] * a[10] * a[15] - a[5] * a[11] * a[14] - a[9] * a[6] * a[15]
            + a[9] * a[7] * a[14]
            + a[13] * a[6] * a[11]
            - a[13] * a[7] * a[10];
        b[4] = -a[4] * a[10] * a[15] + a[4] * a[11] * a[14] + a[8] * a[6] * a[15]
            - a[8] * a[7] * a[14]
            - a[12] * a[6] * a[11]
            + a[12] * a[7] * a[10];
        b[8] = a[4] * a[9] * a[15] - a[4] * a[11] * a[13] - a[8] * a[5] * a[15]
            + a[8] * a[7] * a[13]
            + a[12] * a[5] * a[11]
            - a[12] * a[7] * a[9];
        b[12] = -a[4] * a[9] * a[14] + a[4] * a[10] * a[13] + a[8] * a[5] * a[14]
            - a[8] * a[6] * a[13]
            - a[12] * a[5] * a[10]
            + a[12] * a[6] * a[9];

        b[1] = -a[1] * a[10] * a[15] + a[1] * a[11] * a[14] + a[9] * a[2] * a[15]
            - a[9] * a[3] * a[14]
            - a[13] * a[2] * a[11]
            + a[13] * a[3] * a[10];
        b[5] = a[0] * a[10] * a[15] - a[0] * a[11] * a[14] - a[8] * a[2] * a[15]
            + a[8] * a[3] * a[14]
            + a[12] * a[2] * a[11]
            - a[12] * a[3] * a[10];
        b[9] = -a[0] * a[9] * a[15] + a[0] * a[11] * a[13] + a[8] * a[1] * a[15]
            - a[8] * a[3] * a[13]
            - a[12] * a[1] * a[11]
            + a[12] * a[3] * a[9];
        b[13] = a[0] * a[9] * a[14] - a[0] * a[10] * a[13] - a[8] * a[1] * a[14]
            + a[8] * a[2] * a[13]
            + a[12] * a[1] * a[10]
            - a[12] * a[2] * a[9];

        b[2] = a[1] * a[6] * a[15] - a[1] * a[7] * a[14] - a[5] * a[2] * a[15]
            + a[5] * a[3] * a[14]
            + a[13] * a[2] * a[7]
            - a[13] * a[3] * a[6];
        b[6] = -a[0] * a[6] * a[15] + a[0] * a[7] * a[14] + a[4] * a[2] * a[15]
            - a[4] * a[3] * a[14]
            - a[12] * a[2] * a[7]
            + a[12] * a[3] * a[6];
        b[10] = a[0] * a[5] * a[15] - a[0] * a[7] * a[13] - a[4] * a[1] * a[15]
            + a[4] * a[3] * a[13]
            + a[12] * a[1] * a[7]
            - a[12] * a[3] * a[5];
        b[14] = -a[0] * a[5] * a[14] + a[0] * a[6] * a[13] + a[4] * a[1] * a[14]
            - a[4] * a[2] * a[13]
            - a[12] * a[1] * a[6]
            + a[12] * a[2] * a[5];

        b[3] = -a[1] * a[6] * a[11] + a[1] * a[7] * a[10] + a[5] * a[2] * a[11]
            - a[5] * a[3] * a[10]
            - a[9] * a[2] * a[7]
            + a[9] * a[3] * a[6];
        b[7] = a[0] * a[6] * a[11] - a[0] * a[7] * a[10] - a[4] * a[2] * a[11]
            + a[4] * a[3] * a[10]
            + a[8] * a[2] * a[7]
            - a[8] * a[3] * a[6];
        b[11] = -a[0] * a[5] * a[11] + a[0] * a[7] * a[9] + a[4] * a[1] * a[11]
            - a[4] * a[3] * a[9]
            - a[8] * a[1] * a[7]
            + a[8] * a[3] * a[5];
        b[15] = a[0] * a[5] * a[10] - a[0] * a[6] * a[9] - a[4] * a[1] * a[10]
            + a[4] * a[2] * a[9]
            + a[8] * a[1] * a[6]
            - a[8] * a[2] * a[5];

        let det = a[0] * b[0] + a[1] * b[4] + a[2] * b[8] + a[3] * b[12];

        if det == 0.0 {
            return None;
        }

        Some(Transform3D {
            matrix: b.map(|cofactor| cofactor / det),
        })
    }

    /// Combines an orthographic projection mapping the box
    /// `[left, right] × [bottom, top] × [znear, zfar]` onto the canonical
    /// clip cube.
    pub fn orthographic(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        znear: f32,
        zfar: f32,
    ) -> &mut Self {
        self.combine(&Transform3D::from_matrix(
            2.0 / (right - left),
            0.0,
            0.0,
            (left + right) / (left - right),
            0.0,
            2.0 / (top - bottom),
            0.0,
            (bottom + top) / (bottom - top),
            0.0,
            0.0,
            2.0 / (znear - zfar),
            (znear + zfar) / (znear - zfar),
            0.0,
            0.0,
            0.0,
            1.0,
        ))
    }

    /// Combines an orthographic projection with the default depth range
    /// `znear = -1, zfar = 1` — the usual choice for 2D content rendered
    /// through the 3D pipeline.
    pub fn orthographic_2d(&mut self, left: f32, right: f32, bottom: f32, top: f32) -> &mut Self {
        self.orthographic(left, right, bottom, top, -1.0, 1.0)
    }

    /// Combines an asymmetric perspective-frustum projection (OpenGL-style,
    /// fourth row `[0, 0, -1, 0]`).
    pub fn frustum(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        znear: f32,
        zfar: f32,
    ) -> &mut Self {
        self.combine(&Transform3D::from_matrix(
            (2.0 * znear) / (right - left),
            0.0,
            (right + left) / (right - left),
            0.0,
            0.0,
            (2.0 * znear) / (top - bottom),
            (top + bottom) / (top - bottom),
            0.0,
            0.0,
            0.0,
            (znear + zfar) / (znear - zfar),
            (2.0 * znear * zfar) / (znear - zfar),
            0.0,
            0.0,
            -1.0,
            0.0,
        ))
    }

    /// Combines a symmetric perspective projection from a vertical field of
    /// view (in degrees) and an aspect ratio, by deriving the frustum bounds
    /// and delegating to [`Transform3D::frustum`].
    ///
    /// # Example
    ///
    /// ```
    /// use phalanx::Transform3D;
    ///
    /// let mut projection = Transform3D::new();
    /// projection.perspective(90.0, 16.0 / 9.0, 0.1, 1000.0);
    /// ```
    pub fn perspective(&mut self, fov: f32, aspect: f32, znear: f32, zfar: f32) -> &mut Self {
        let fh = (fov.to_radians() / 2.0).tan() * znear;
        let fw = fh * aspect;
        self.frustum(-fw, fw, -fh, fh, znear, zfar)
    }

    /// Combines a camera-orientation matrix looking from `eye` toward
    /// `target`.
    ///
    /// Builds the orthonormal basis forward = `normalize(eye - target)`,
    /// right = `normalize(up × forward)`, up' = `normalize(forward × right)`
    /// and combines the rotation whose columns are (right, up', forward).
    /// Pass [`Vec3::Y`](glam::Vec3::Y) for `up` unless the camera rolls.
    ///
    /// `up` must not be parallel to the view direction; the basis is
    /// degenerate in that case and NaNs propagate through the result.
    pub fn look_at(
        &mut self,
        eye: impl Into<Vec3>,
        target: impl Into<Vec3>,
        up: impl Into<Vec3>,
    ) -> &mut Self {
        let (eye, target, up) = (eye.into(), target.into(), up.into());

        let f = (eye - target).normalize();
        let r = up.cross(f).normalize();
        let u = f.cross(r).normalize();

        self.combine(&Transform3D::from_matrix(
            r.x, u.x, f.x, 0.0, //
            r.y, u.y, f.y, 0.0, //
            r.z, u.z, f.z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ))
    }

    /// Combines a translation into the current frame.
    pub fn translate(&mut self, offset: impl Into<Vec3>) -> &mut Self {
        let offset = offset.into();
        self.combine(&Transform3D::from_matrix(
            1.0, 0.0, 0.0, offset.x, //
            0.0, 1.0, 0.0, offset.y, //
            0.0, 0.0, 1.0, offset.z, //
            0.0, 0.0, 0.0, 1.0,
        ))
    }

    /// Combines a rotation of `angle` degrees about an arbitrary axis
    /// through the origin.
    ///
    /// The axis must already be unit length — it is not normalized here,
    /// and the rotation matrix is wrong for non-unit axes.
    pub fn rotate(&mut self, angle: f32, axis: impl Into<Vec3>) -> &mut Self {
        let axis = axis.into();
        let rad = angle.to_radians();
        let cos = rad.cos();
        let sin = rad.sin();

        let xx = axis.x * axis.x;
        let xy = axis.x * axis.y;
        let xz = axis.x * axis.z;
        let yy = axis.y * axis.y;
        let yz = axis.y * axis.z;
        let zz = axis.z * axis.z;
        let xs = axis.x * sin;
        let ys = axis.y * sin;
        let zs = axis.z * sin;
        let mc = 1.0 - cos;

        self.combine(&Transform3D::from_matrix(
            xx * mc + cos,
            xy * mc - zs,
            xz * mc + ys,
            0.0,
            xy * mc + zs,
            yy * mc + cos,
            yz * mc - xs,
            0.0,
            xz * mc - ys,
            yz * mc + xs,
            zz * mc + cos,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ))
    }

    /// Combines a rotation about an arbitrary axis through `center`.
    pub fn rotate_around(
        &mut self,
        angle: f32,
        axis: impl Into<Vec3>,
        center: impl Into<Vec3>,
    ) -> &mut Self {
        let center = center.into();
        // TODO: fuse the pivot into a single combine like the 2D builders.
        self.translate(-center).rotate(angle, axis).translate(center)
    }

    /// Combines a per-axis scale about the origin.
    pub fn scale(&mut self, factors: impl Into<Vec3>) -> &mut Self {
        let factors = factors.into();
        self.combine(&Transform3D::from_matrix(
            factors.x, 0.0, 0.0, 0.0, //
            0.0, factors.y, 0.0, 0.0, //
            0.0, 0.0, factors.z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ))
    }

    /// Combines a uniform scale about the origin.
    pub fn uniform_scale(&mut self, factor: f32) -> &mut Self {
        self.scale(Vec3::splat(factor))
    }

    /// Combines a per-axis scale about `center`.
    pub fn scale_around(
        &mut self,
        factors: impl Into<Vec3>,
        center: impl Into<Vec3>,
    ) -> &mut Self {
        let factors = factors.into();
        let center = center.into();
        // TODO: fuse the pivot into a single combine like the 2D builders.
        self.translate(-center).scale(factors).translate(center)
    }

    /// Combines a uniform scale about `center`.
    pub fn uniform_scale_around(&mut self, factor: f32, center: impl Into<Vec3>) -> &mut Self {
        self.scale_around(Vec3::splat(factor), center)
    }
}

/// Widens a 2D transform; the matrix carries over verbatim.
impl From<Transform> for Transform3D {
    fn from(transform: Transform) -> Self {
        Transform3D {
            matrix: *transform.matrix(),
        }
    }
}

impl Mul for Transform3D {
    type Output = Transform3D;

    /// Combines two transforms without mutating either operand.
    fn mul(self, rhs: Transform3D) -> Transform3D {
        let mut result = self;
        result.combine(&rhs);
        result
    }
}

impl MulAssign for Transform3D {
    fn mul_assign(&mut self, rhs: Transform3D) {
        self.combine(&rhs);
    }
}

impl Mul<Vec3> for Transform3D {
    type Output = Vec3;

    /// Applies the transform to a point.
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform_point(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_matrix_eq(a: &[f32; 16], b: &[f32; 16]) {
        assert_matrix_eq_with(a, b, 1e-5);
    }

    fn assert_matrix_eq_with(a: &[f32; 16], b: &[f32; 16], tolerance: f32) {
        for i in 0..16 {
            assert!(
                (a[i] - b[i]).abs() < tolerance,
                "matrices differ at index {i}: {} vs {}",
                a[i],
                b[i]
            );
        }
    }

    fn assert_point_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a} vs {b}");
    }

    #[test]
    fn identity_combine_is_noop() {
        let mut t = Transform3D::new();
        t.translate(Vec3::new(4.0, 5.0, 6.0)).rotate(30.0, Vec3::Z);

        assert_matrix_eq((t * Transform3D::IDENTITY).matrix(), t.matrix());
        assert_matrix_eq((Transform3D::IDENTITY * t).matrix(), t.matrix());
    }

    #[test]
    fn translate_moves_the_origin() {
        let mut t = Transform3D::new();
        t.translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t * Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn inverse_round_trip_affine() {
        let mut t = Transform3D::new();
        t.translate(Vec3::new(5.0, -3.0, 2.0))
            .rotate(40.0, Vec3::new(1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0))
            .scale(Vec3::new(2.0, 0.5, 4.0));

        assert_matrix_eq((t * t.inverse()).matrix(), Transform3D::IDENTITY.matrix());
        assert_matrix_eq((t.inverse() * t).matrix(), Transform3D::IDENTITY.matrix());
    }

    #[test]
    fn inverse_round_trip_projective() {
        let mut t = Transform3D::new();
        t.frustum(-1.0, 1.0, -1.0, 1.0, 0.5, 100.0);

        assert_matrix_eq_with(
            (t * t.inverse()).matrix(),
            Transform3D::IDENTITY.matrix(),
            1e-4,
        );
    }

    #[test]
    fn singular_inverse_falls_back_to_identity() {
        let zero = Transform3D::from_matrix(
            0.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0,
        );
        assert_eq!(zero.inverse(), Transform3D::IDENTITY);
        assert!(zero.try_inverse().is_none());
    }

    #[test]
    fn rotate_about_y_sends_x_to_negative_z() {
        let mut t = Transform3D::new();
        t.rotate(90.0, Vec3::Y);
        assert_point_eq(t.transform_point(Vec3::X), Vec3::NEG_Z);

        let mut t = Transform3D::new();
        t.rotate(90.0, Vec3::Z);
        assert_point_eq(t.transform_point(Vec3::X), Vec3::Y);
    }

    #[test]
    fn rotate_around_matches_explicit_chain() {
        let axis = Vec3::new(0.0, 1.0, 0.0);
        let center = Vec3::new(3.0, 1.0, -2.0);

        let mut pivot = Transform3D::new();
        pivot.rotate_around(55.0, axis, center);

        let mut chain = Transform3D::new();
        chain.translate(-center).rotate(55.0, axis).translate(center);

        assert_matrix_eq(pivot.matrix(), chain.matrix());
    }

    #[test]
    fn scale_around_matches_explicit_chain() {
        let factors = Vec3::new(2.0, 3.0, 0.5);
        let center = Vec3::new(-1.0, 4.0, 2.0);

        let mut pivot = Transform3D::new();
        pivot.scale_around(factors, center);

        let mut chain = Transform3D::new();
        chain.translate(-center).scale(factors).translate(center);

        assert_matrix_eq(pivot.matrix(), chain.matrix());

        let mut uniform = Transform3D::new();
        uniform.uniform_scale_around(2.0, center);
        let mut uniform_chain = Transform3D::new();
        uniform_chain
            .translate(-center)
            .uniform_scale(2.0)
            .translate(center);
        assert_matrix_eq(uniform.matrix(), uniform_chain.matrix());
    }

    #[test]
    fn perspective_matches_manual_frustum() {
        let (fov, aspect, znear, zfar) = (70.0f32, 1.5, 0.5, 100.0);

        let mut p = Transform3D::new();
        p.perspective(fov, aspect, znear, zfar);

        let fh = (fov.to_radians() / 2.0).tan() * znear;
        let fw = fh * aspect;
        let mut f = Transform3D::new();
        f.frustum(-fw, fw, -fh, fh, znear, zfar);

        assert_matrix_eq(p.matrix(), f.matrix());
    }

    #[test]
    fn frustum_has_projective_fourth_row() {
        let mut t = Transform3D::new();
        t.frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0);
        let m = t.matrix();
        // Row 3 is [0, 0, -1, 0]: indices 3, 7, 11, 15.
        assert_eq!(m[3], 0.0);
        assert_eq!(m[7], 0.0);
        assert_eq!(m[11], -1.0);
        assert_eq!(m[15], 0.0);
    }

    #[test]
    fn orthographic_defaults_to_unit_depth_range() {
        let mut four = Transform3D::new();
        four.orthographic_2d(0.0, 800.0, 600.0, 0.0);

        let mut six = Transform3D::new();
        six.orthographic(0.0, 800.0, 600.0, 0.0, -1.0, 1.0);

        assert_eq!(four, six);
    }

    #[test]
    fn orthographic_maps_box_corners_to_clip_cube() {
        let mut t = Transform3D::new();
        t.orthographic(0.0, 800.0, 600.0, 0.0, -1.0, 1.0);

        assert_point_eq(
            t.transform_point(Vec3::new(0.0, 600.0, 0.0)),
            Vec3::new(-1.0, -1.0, 0.0),
        );
        assert_point_eq(
            t.transform_point(Vec3::new(800.0, 0.0, 0.0)),
            Vec3::new(1.0, 1.0, 0.0),
        );
        assert_point_eq(
            t.transform_point(Vec3::new(400.0, 300.0, 0.0)),
            Vec3::ZERO,
        );
    }

    #[test]
    fn look_at_down_z_axis_is_identity() {
        let mut t = Transform3D::new();
        t.look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        assert_matrix_eq(t.matrix(), Transform3D::IDENTITY.matrix());
    }

    #[test]
    fn look_at_basis_is_orthonormal() {
        let mut t = Transform3D::new();
        t.look_at(Vec3::new(3.0, 4.0, -2.0), Vec3::new(0.5, -1.0, 2.0), Vec3::Y);

        let m = t.matrix();
        let r = Vec3::new(m[0], m[1], m[2]);
        let u = Vec3::new(m[4], m[5], m[6]);
        let f = Vec3::new(m[8], m[9], m[10]);

        for basis in [r, u, f] {
            assert!((basis.length() - 1.0).abs() < 1e-5);
        }
        assert!(r.dot(u).abs() < 1e-5);
        assert!(u.dot(f).abs() < 1e-5);
        assert!(f.dot(r).abs() < 1e-5);
    }

    #[test]
    fn conversions_carry_the_matrix_verbatim() {
        let mut flat = Transform::new();
        flat.translate((7.0, -2.0)).rotate(15.0);

        let widened = Transform3D::from(flat);
        assert_eq!(widened.matrix(), flat.matrix());

        let narrowed = Transform::from(widened);
        assert_eq!(narrowed, flat);
    }

    #[test]
    fn mul_assign_combines_in_place() {
        let mut a = Transform3D::new();
        a.translate(Vec3::new(1.0, 2.0, 3.0));
        let mut b = Transform3D::new();
        b.uniform_scale(2.0);

        let product = a * b;
        a *= b;
        assert_eq!(a, product);
    }

    #[test]
    fn matrix_layout_is_column_major() {
        let t = Transform3D::from_matrix(
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0, //
            13.0, 14.0, 15.0, 16.0,
        );
        let m = t.matrix();
        assert_eq!(m[0], 1.0);
        assert_eq!(m[4], 2.0);
        assert_eq!(m[8], 3.0);
        assert_eq!(m[12], 4.0);
        assert_eq!(m[13], 8.0);
        assert_eq!(m[15], 16.0);

        assert_eq!(bytemuck::bytes_of(&t).len(), 64);
    }
}
