//! Angular bookkeeping for ring charts.
//!
//! Angles are radians, measured anticlockwise from the positive x axis in
//! data space (y up). Shares are percentages of the full circle.

use kurbo::Point;
use std::f64::consts::PI;

/// The angular span of one slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start: f64,
    pub end: f64,
}

impl Slice {
    /// Angle of the slice bisector.
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Convert a percentage share (0..=100) to radians.
pub fn share_to_radians(share: f64) -> f64 {
    2. * PI * share / 100.
}

/// Running-total slicing: each slice starts where the previous one ended,
/// with the first starting at `origin`. Zero shares produce zero-width
/// slices, which are kept so indices stay aligned with the input.
pub fn cumulative_slices(origin: f64, shares: impl IntoIterator<Item = f64>) -> Vec<Slice> {
    let mut start = origin;
    shares
        .into_iter()
        .map(|share| {
            let end = start + share_to_radians(share);
            let slice = Slice { start, end };
            start = end;
            slice
        })
        .collect()
}

/// The point at radius `r` on the bisector of `slice`.
pub fn polar_to_cartesian(r: f64, slice: Slice) -> Point {
    let alpha = slice.mid();
    Point::new(r * alpha.cos(), r * alpha.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn quarter_share() {
        assert!((share_to_radians(25.) - PI / 2.).abs() < EPS);
        assert_eq!(share_to_radians(0.), 0.);
    }

    #[test]
    fn slices_are_contiguous() {
        let slices = cumulative_slices(0., [50., 25., 25.]);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].start, 0.);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert!((slices[2].end - 2. * PI).abs() < EPS);
    }

    #[test]
    fn origin_offsets_every_slice() {
        let slices = cumulative_slices(1.0, [10., 10.]);
        assert_eq!(slices[0].start, 1.0);
        assert!((slices[1].end - (1.0 + share_to_radians(20.))).abs() < EPS);
    }

    #[test]
    fn zero_share_keeps_its_slot() {
        let slices = cumulative_slices(0., [10., 0., 10.]);
        assert_eq!(slices[1].width(), 0.);
        assert_eq!(slices[1].start, slices[1].end);
        assert_eq!(slices.len(), 3);
    }

    #[test]
    fn empty_input() {
        assert!(cumulative_slices(0., []).is_empty());
    }

    #[test]
    fn midpoint_placement() {
        // bisector of the first quadrant points at 45 degrees
        let slice = Slice {
            start: 0.,
            end: PI / 2.,
        };
        let p = polar_to_cartesian(2f64.sqrt(), slice);
        assert!((p.x - 1.).abs() < EPS);
        assert!((p.y - 1.).abs() < EPS);
    }

    #[test]
    fn midpoint_straight_up() {
        let slice = Slice {
            start: PI / 4.,
            end: 3. * PI / 4.,
        };
        let p = polar_to_cartesian(1., slice);
        assert!(p.x.abs() < EPS);
        assert!((p.y - 1.).abs() < EPS);
    }
}
