use glam::Vec2;

/// Rotate `v` counter-clockwise by `angle` radians.
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c * v.x - s * v.y, s * v.x + c * v.y)
}

/// Quarter turn counter-clockwise: (x, y) -> (-y, x).
#[inline]
pub fn rotate90(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Unit direction of the segment `a -> b`, or zero when the points coincide.
#[inline]
pub fn segment_tangent(a: Vec2, b: Vec2) -> Vec2 {
    (b - a).normalize_or_zero()
}

/// Averaged normal at `points[i]`.
///
/// The normals of the incoming and outgoing segments are averaged without
/// renormalizing, so the ribbon narrows at sharp corners. End points reuse
/// their single adjacent segment for both sides. Fewer than two points have
/// no segment, so the normal is zero.
pub fn point_normal(points: &[Vec2], i: usize) -> Vec2 {
    if points.len() < 2 {
        return Vec2::ZERO;
    }
    let last_count = points.len() - 1;

    let last = i.saturating_sub(1);
    let last_normal = rotate90(segment_tangent(points[last], points[last + 1]));

    let next = (i + 1).min(last_count);
    let next_normal = rotate90(segment_tangent(points[next - 1], points[next]));

    (last_normal + next_normal) * 0.5
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn rotate90_on_axes() {
        assert_eq!(rotate90(Vec2::X), Vec2::Y);
        assert_eq!(rotate90(Vec2::Y), -Vec2::X);
        assert_eq!(rotate90(-Vec2::X), -Vec2::Y);
        assert_eq!(rotate90(-Vec2::Y), Vec2::X);
    }

    #[test]
    fn rotate_matches_rotate90_at_quarter_turn() {
        let v = Vec2::new(0.3, -0.7);
        let r = rotate(v, FRAC_PI_2);
        let q = rotate90(v);
        assert_abs_diff_eq!(r.x, q.x, epsilon = 1e-6);
        assert_abs_diff_eq!(r.y, q.y, epsilon = 1e-6);
    }

    #[test]
    fn rotate_half_turn_flips() {
        let r = rotate(Vec2::new(1.0, 0.0), PI);
        assert_abs_diff_eq!(r.x, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn duplicate_points_do_not_produce_nan() {
        let t = segment_tangent(Vec2::ONE, Vec2::ONE);
        assert_eq!(t, Vec2::ZERO);

        let pts = [Vec2::ZERO, Vec2::ZERO, Vec2::X];
        for i in 0..pts.len() {
            assert!(point_normal(&pts, i).is_finite());
        }
    }

    #[test]
    fn no_segment_means_no_normal() {
        assert_eq!(point_normal(&[], 0), Vec2::ZERO);
        assert_eq!(point_normal(&[Vec2::ONE], 0), Vec2::ZERO);
    }

    #[test]
    fn endpoints_use_their_only_segment() {
        let pts = [Vec2::ZERO, Vec2::new(0.0, 2.0)];
        // tangent +Y -> normal -X at both ends
        assert_eq!(point_normal(&pts, 0), -Vec2::X);
        assert_eq!(point_normal(&pts, 1), -Vec2::X);
    }
}
