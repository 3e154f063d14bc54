//! Collision primitives for closed vertex loops
//!
//! Tests are discrete: they look at where two shapes are this frame, not
//! where they travelled between frames. A fast bullet can therefore skip
//! over a thin shape, and that is the expected behavior.

use glam::Vec2;

/// Tolerance for zero-length edges and collinearity
const EPSILON: f32 = 1e-6;

/// Check whether `point` lies inside the loop `vertices` (even-odd rule)
///
/// A point sitting exactly on a vertex counts as outside. Loops with fewer
/// than three vertices contain nothing.
pub fn point_in_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    if vertices.iter().any(|v| v.distance_squared(point) <= EPSILON * EPSILON) {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for (i, &a) in vertices.iter().enumerate() {
        let b = vertices[j];
        // Edge straddles the horizontal ray through `point`
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Signed area of the triangle (a, b, c), doubled
#[inline]
fn orient(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

/// `p` is collinear with `a`-`b` and lies within its bounding box
#[inline]
fn on_segment(a: Vec2, b: Vec2, p: Vec2) -> bool {
    p.x >= a.x.min(b.x) - EPSILON
        && p.x <= a.x.max(b.x) + EPSILON
        && p.y >= a.y.min(b.y) - EPSILON
        && p.y <= a.y.max(b.y) + EPSILON
}

/// Check whether segments `p1`-`p2` and `q1`-`q2` cross or touch
///
/// Zero-length segments never intersect anything.
pub fn segments_intersect(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    if p1.distance_squared(p2) <= EPSILON * EPSILON || q1.distance_squared(q2) <= EPSILON * EPSILON
    {
        return false;
    }

    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);

    let straddles = |a: f32, b: f32| (a > EPSILON && b < -EPSILON) || (a < -EPSILON && b > EPSILON);
    if straddles(d1, d2) && straddles(d3, d4) {
        return true;
    }

    // Collinear or touching cases
    (d1.abs() <= EPSILON && on_segment(q1, q2, p1))
        || (d2.abs() <= EPSILON && on_segment(q1, q2, p2))
        || (d3.abs() <= EPSILON && on_segment(p1, p2, q1))
        || (d4.abs() <= EPSILON && on_segment(p1, p2, q2))
}

/// Iterate the edges of a closed loop, including the closing edge
fn edges(vertices: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

/// Check whether two closed loops overlap
///
/// True if any edge of `a` crosses any edge of `b`, or if one loop sits
/// entirely inside the other (a bullet buried in an asteroid has no
/// crossing edges).
pub fn polygons_intersect(a: &[Vec2], b: &[Vec2]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    for (a1, a2) in edges(a) {
        for (b1, b2) in edges(b) {
            if segments_intersect(a1, a2, b1, b2) {
                return true;
            }
        }
    }

    // No crossings: either disjoint or fully nested
    point_in_polygon(a[0], b) || point_in_polygon(b[0], a)
}

/// Cheap broad-phase rejection using bounding circles
#[inline]
pub fn circles_overlap(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    center_a.distance_squared(center_b) <= reach * reach
}
