//! Shared 4×4 matrix plumbing for [`Transform`](crate::Transform) and
//! [`Transform3D`](crate::Transform3D).
//!
//! Matrices are 16 `f32` values in column-major order — element (row, col)
//! lives at index `col * 4 + row` — the layout fixed-function graphics APIs
//! expect when a matrix is uploaded directly. Constructors take their
//! arguments in row-major reading order and remap into storage.

use glam::{Vec2, Vec3};

use crate::rect::Rect;

pub(crate) const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

/// Embeds a 3×3 affine matrix into the 4×4 layout, keeping the z row and
/// column at their identity values.
#[rustfmt::skip]
pub(crate) const fn from_affine(
    a00: f32, a01: f32, a02: f32,
    a10: f32, a11: f32, a12: f32,
    a20: f32, a21: f32, a22: f32,
) -> [f32; 16] {
    [
        a00, a10, 0.0, a20,
        a01, a11, 0.0, a21,
        0.0, 0.0, 1.0, 0.0,
        a02, a12, 0.0, a22,
    ]
}

/// Builds the column-major storage from a full 4×4 matrix given in row-major
/// reading order.
#[rustfmt::skip]
pub(crate) const fn from_rows(
    a00: f32, a01: f32, a02: f32, a03: f32,
    a10: f32, a11: f32, a12: f32, a13: f32,
    a20: f32, a21: f32, a22: f32, a23: f32,
    a30: f32, a31: f32, a32: f32, a33: f32,
) -> [f32; 16] {
    [
        a00, a10, a20, a30,
        a01, a11, a21, a31,
        a02, a12, a22, a32,
        a03, a13, a23, a33,
    ]
}

/// Full 4×4 product `a × b`.
pub(crate) fn multiply(a: &[f32; 16], b: &[f32; 16]) -> [f32; 16] {
    from_rows(
        a[0] * b[0] + a[4] * b[1] + a[8] * b[2] + a[12] * b[3],
        a[0] * b[4] + a[4] * b[5] + a[8] * b[6] + a[12] * b[7],
        a[0] * b[8] + a[4] * b[9] + a[8] * b[10] + a[12] * b[11],
        a[0] * b[12] + a[4] * b[13] + a[8] * b[14] + a[12] * b[15],
        a[1] * b[0] + a[5] * b[1] + a[9] * b[2] + a[13] * b[3],
        a[1] * b[4] + a[5] * b[5] + a[9] * b[6] + a[13] * b[7],
        a[1] * b[8] + a[5] * b[9] + a[9] * b[10] + a[13] * b[11],
        a[1] * b[12] + a[5] * b[13] + a[9] * b[14] + a[13] * b[15],
        a[2] * b[0] + a[6] * b[1] + a[10] * b[2] + a[14] * b[3],
        a[2] * b[4] + a[6] * b[5] + a[10] * b[6] + a[14] * b[7],
        a[2] * b[8] + a[6] * b[9] + a[10] * b[10] + a[14] * b[11],
        a[2] * b[12] + a[6] * b[13] + a[10] * b[14] + a[14] * b[15],
        a[3] * b[0] + a[7] * b[1] + a[11] * b[2] + a[15] * b[3],
        a[3] * b[4] + a[7] * b[5] + a[11] * b[6] + a[15] * b[7],
        a[3] * b[8] + a[7] * b[9] + a[11] * b[10] + a[15] * b[11],
        a[3] * b[12] + a[7] * b[13] + a[11] * b[14] + a[15] * b[15],
    )
}

/// Maps a 2D point through the matrix with implicit z = 0, w = 1.
/// The computed w is ignored.
pub(crate) fn transform_point2(m: &[f32; 16], x: f32, y: f32) -> Vec2 {
    Vec2::new(
        m[0] * x + m[4] * y + m[12],
        m[1] * x + m[5] * y + m[13],
    )
}

/// Maps a 3D point through the matrix with implicit w = 1.
/// The computed w is ignored.
pub(crate) fn transform_point3(m: &[f32; 16], x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(
        m[0] * x + m[4] * y + m[8] * z + m[12],
        m[1] * x + m[5] * y + m[9] * z + m[13],
        m[2] * x + m[6] * y + m[10] * z + m[14],
    )
}

/// Maps the four corners of `rect` through the matrix and returns their
/// axis-aligned bounding box.
pub(crate) fn transform_rect(m: &[f32; 16], rect: Rect) -> Rect {
    let points = [
        transform_point2(m, rect.left, rect.top),
        transform_point2(m, rect.left, rect.top + rect.height),
        transform_point2(m, rect.left + rect.width, rect.top),
        transform_point2(m, rect.left + rect.width, rect.top + rect.height),
    ];

    let mut left = points[0].x;
    let mut top = points[0].y;
    let mut right = points[0].x;
    let mut bottom = points[0].y;
    for point in &points[1..] {
        if point.x < left {
            left = point.x;
        } else if point.x > right {
            right = point.x;
        }
        if point.y < top {
            top = point.y;
        } else if point.y > bottom {
            bottom = point.y;
        }
    }

    Rect::new(left, top, right - left, bottom - top)
}
