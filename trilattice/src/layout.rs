//! Projection of the lattice onto a pixel canvas.
//!
//! Rows are drawn `sin 60°` lattice units apart and shifted sideways by the variant's
//! [`skew`][crate::geometry::Diagonal::skew], so every edge has the same length. A
//! [`Layout`] is cheap to build and should be rebuilt for every redraw, since it depends
//! on the canvas size.
use crate::{
    board::Coordinate,
    geometry::{Geometry, Variant},
};

/// Default hit-test radius, as a fraction of the distance between adjacent vertices.
pub const DEFAULT_TOLERANCE: f64 = 0.3;

const SIN_60: f64 = 0.866_025_403_784_438_6;

/// Position of the coordinate in lattice units, before scaling and centring.
fn lattice_point(skew: f64, coord: Coordinate) -> (f64, f64) {
    (coord.j as f64 + skew * coord.i as f64, coord.i as f64 * SIN_60)
}

/// Maps board coordinates to pixels for a canvas of a particular size, with the board
/// scaled to fit and centred.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layout {
    variant: Variant,
    /// Pixels between adjacent vertices.
    unit: f64,
    offset_x: f64,
    offset_y: f64,
    /// Hit-test radius as a fraction of `unit`.
    tolerance: f64,
}

impl Layout {
    /// Fit the board of the given variant into a `width` by `height` canvas, leaving
    /// half a unit of margin on every side.
    pub fn new(variant: &Variant, width: f64, height: f64) -> Self {
        let skew = variant.diagonal().skew();
        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for coord in variant.vertices() {
            let (x, y) = lattice_point(skew, coord);
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        let (span_x, span_y) = (max_x - min_x, max_y - min_y);
        let unit = (width / (span_x + 1.))
            .min(height / (span_y + 1.))
            .floor()
            .max(0.);
        Self {
            variant: *variant,
            unit,
            offset_x: ((width - span_x * unit) / 2.).floor() - min_x * unit,
            offset_y: ((height - span_y * unit) / 2.).floor() - min_y * unit,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Use a different hit-test radius, as a fraction of the distance between adjacent
    /// vertices.
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Pixels between adjacent vertices.
    pub fn unit(&self) -> f64 {
        self.unit
    }

    /// Pixel position of the given coordinate.
    pub fn to_pixel(&self, coord: Coordinate) -> (f64, f64) {
        let (x, y) = lattice_point(self.variant.diagonal().skew(), coord);
        (self.offset_x + x * self.unit, self.offset_y + y * self.unit)
    }

    /// Find the vertex drawn within the hit-test radius of the given pixel, if any.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<Coordinate> {
        let radius = self.tolerance * self.unit;
        self.variant.vertices().find(|&coord| {
            let (px, py) = self.to_pixel(coord);
            (px - x).hypot(py - y) < radius
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance((ax, ay): (f64, f64), (bx, by): (f64, f64)) -> f64 {
        (ax - bx).hypot(ay - by)
    }

    #[test]
    fn vertices_hit_themselves() {
        for &(players, size) in &[(2, 10), (3, 4)] {
            let variant = Variant::new(players, size).unwrap();
            let layout = Layout::new(&variant, 800., 600.);
            assert!(layout.unit() > 0.);
            for coord in variant.vertices() {
                let (x, y) = layout.to_pixel(coord);
                assert_eq!(layout.hit_test(x + 1., y - 1.), Some(coord));
            }
        }
    }

    #[test]
    fn edges_have_unit_length() {
        for &(players, size) in &[(2, 7), (3, 3)] {
            let variant = Variant::new(players, size).unwrap();
            let layout = Layout::new(&variant, 1024., 768.);
            for (a, b) in variant.edges() {
                let length = distance(layout.to_pixel(a), layout.to_pixel(b));
                assert!((length - layout.unit()).abs() < 1e-6, "{} {}", a, b);
            }
        }
    }

    #[test]
    fn board_fits_and_is_centred() {
        let variant = Variant::new(3, 5).unwrap();
        let (width, height) = (640., 480.);
        let layout = Layout::new(&variant, width, height);
        let pixels: Vec<_> = variant.vertices().map(|c| layout.to_pixel(c)).collect();
        let min_x = pixels.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let max_x = pixels.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        let min_y = pixels.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max_y = pixels.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        assert!(min_x >= 0. && max_x <= width);
        assert!(min_y >= 0. && max_y <= height);
        assert!(((min_x + max_x) / 2. - width / 2.).abs() <= 1.);
        assert!(((min_y + max_y) / 2. - height / 2.).abs() <= 1.);
    }

    #[test]
    fn clicks_between_vertices_miss() {
        let variant = Variant::new(2, 10).unwrap();
        let layout = Layout::new(&variant, 800., 600.);
        let (ax, ay) = layout.to_pixel(Coordinate::new(5, 5));
        let (bx, by) = layout.to_pixel(Coordinate::new(5, 6));
        let (mx, my) = ((ax + bx) / 2., (ay + by) / 2.);
        assert_eq!(layout.hit_test(mx, my), None);
        assert_eq!(layout.hit_test(-100., -100.), None);

        let loose = layout.with_tolerance(0.6);
        assert!(loose.hit_test(mx, my).is_some());
    }
}
