//! SVG path helpers for drawing angular slices. Angle zero points up and grows clockwise.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

const FULL_TURN_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub fn polar_to_cartesian(center: Point, radius: f64, angle: f64) -> Point {
    Point {
        x: center.x + radius * (angle - FRAC_PI_2).cos(),
        y: center.y + radius * (angle - FRAC_PI_2).sin(),
    }
}

/// A sweep of a whole turn has coincident endpoints, which SVG renders as nothing,
/// so such paths are drawn as two half arcs through the midpoint.
fn is_full_turn(start_angle: f64, end_angle: f64) -> bool {
    end_angle - start_angle >= TAU - FULL_TURN_EPSILON
}

/// Open arc path from `start_angle` to `end_angle`, drawn from the end point back.
pub fn describe_arc(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> String {
    let start = polar_to_cartesian(center, radius, end_angle);
    let end = polar_to_cartesian(center, radius, start_angle);

    if is_full_turn(start_angle, end_angle) {
        let mid = polar_to_cartesian(center, radius, (start_angle + end_angle) / 2.0);
        return format!(
            "M {} {} A {radius} {radius} 0 0 0 {} {} A {radius} {radius} 0 0 0 {} {}",
            start.x, start.y, mid.x, mid.y, end.x, end.y
        );
    }
    let large_arc = u8::from(end_angle - start_angle > PI);

    format!(
        "M {} {} A {radius} {radius} 0 {large_arc} 0 {} {}",
        start.x, start.y, end.x, end.y
    )
}

/// Closed ring segment between `inner_radius` and `outer_radius`.
pub fn describe_donut_segment(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> String {
    let start_outer = polar_to_cartesian(center, outer_radius, start_angle);
    let end_outer = polar_to_cartesian(center, outer_radius, end_angle);
    let start_inner = polar_to_cartesian(center, inner_radius, start_angle);
    let end_inner = polar_to_cartesian(center, inner_radius, end_angle);

    if is_full_turn(start_angle, end_angle) {
        let mid_angle = (start_angle + end_angle) / 2.0;
        let mid_outer = polar_to_cartesian(center, outer_radius, mid_angle);
        let mid_inner = polar_to_cartesian(center, inner_radius, mid_angle);
        return format!(
            "M {} {} A {outer_radius} {outer_radius} 0 0 1 {} {} A {outer_radius} {outer_radius} 0 0 1 {} {} L {} {} A {inner_radius} {inner_radius} 0 0 0 {} {} A {inner_radius} {inner_radius} 0 0 0 {} {} Z",
            start_outer.x,
            start_outer.y,
            mid_outer.x,
            mid_outer.y,
            end_outer.x,
            end_outer.y,
            end_inner.x,
            end_inner.y,
            mid_inner.x,
            mid_inner.y,
            start_inner.x,
            start_inner.y,
        );
    }

    let large_arc = u8::from(end_angle - start_angle > PI);

    format!(
        "M {} {} A {outer_radius} {outer_radius} 0 {large_arc} 1 {} {} L {} {} A {inner_radius} {inner_radius} 0 {large_arc} 0 {} {} Z",
        start_outer.x,
        start_outer.y,
        end_outer.x,
        end_outer.y,
        end_inner.x,
        end_inner.y,
        start_inner.x,
        start_inner.y,
    )
}
