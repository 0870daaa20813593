//! Path construction shared by the primitives

use crate::types::Point;

use super::Surface;

/// Ellipse bezier approximation constant: 4/3 * (sqrt(2) - 1)
pub const KAPPA: f64 = 0.552_284_749_830_793_6;

/// Open polyline through `points`, in order.
pub fn polyline(surface: &mut dyn Surface, points: impl IntoIterator<Item = Point>) {
    let mut points = points.into_iter();
    let Some(first) = points.next() else {
        return;
    };
    surface.move_to(first);
    for p in points {
        surface.line_to(p);
    }
}

/// Closed ellipse around `center` as four cubic beziers.
///
/// The path starts at angle 0 (the rightmost point) and runs through the
/// positive-y quadrant first.
pub fn ellipse(surface: &mut dyn Surface, center: Point, rx: f64, ry: f64) {
    let kx = KAPPA * rx;
    let ky = KAPPA * ry;
    let at = |x: f64, y: f64| center + Point::new(x, y);

    surface.move_to(at(rx, 0.0));
    surface.curve_to(at(rx, ky), at(kx, ry), at(0.0, ry));
    surface.curve_to(at(-kx, ry), at(-rx, ky), at(-rx, 0.0));
    surface.curve_to(at(-rx, -ky), at(-kx, -ry), at(0.0, -ry));
    surface.curve_to(at(kx, -ry), at(rx, -ky), at(rx, 0.0));
    surface.close_path();
}
