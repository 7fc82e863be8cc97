use crate::model::Point;

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 5.0;

/// Zoom and pan of the image inside the overlay container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub zoom: f64,
    /// Offset in client pixels, applied before scaling.
    pub pan: Point,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: MIN_ZOOM,
            pan: Point::ORIGIN,
        }
    }
}

impl ViewportState {
    pub fn zoom_in(&mut self, step: f64) {
        if !step.is_finite() {
            return;
        }
        self.zoom = (self.zoom + step.abs()).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self, step: f64) {
        if !step.is_finite() {
            return;
        }
        self.zoom = (self.zoom - step.abs()).max(MIN_ZOOM);
        if self.zoom == MIN_ZOOM {
            self.pan = Point::ORIGIN;
        }
    }

    /// Negative delta (wheel away from the user) zooms in.
    pub fn zoom_from_wheel(&mut self, delta_y: f64, step: f64) {
        if delta_y.is_nan() {
            return;
        }
        if delta_y < 0.0 {
            self.zoom_in(step);
        } else {
            self.zoom_out(step);
        }
    }

    /// Pan magnitude is intentionally unbounded; only the zoom gate applies.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if !self.is_zoomed() || !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.pan.x += dx;
        self.pan.y += dy;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom > MIN_ZOOM
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_bounds(v: &ViewportState) -> bool {
        (MIN_ZOOM..=MAX_ZOOM).contains(&v.zoom)
    }

    #[test]
    fn button_zoom_scenario() {
        let mut v = ViewportState::default();
        for _ in 0..5 {
            v.zoom_in(0.5);
        }
        assert_eq!(v.zoom, 3.5);
        for _ in 0..5 {
            v.zoom_in(0.5);
        }
        assert_eq!(v.zoom, 5.0);
        v.pan_by(120.0, -30.0);
        for _ in 0..8 {
            v.zoom_out(0.5);
        }
        assert_eq!(v.zoom, 1.0);
        assert_eq!(v.pan, Point::ORIGIN);
    }

    #[test]
    fn zoom_stays_bounded_for_mixed_sequences() {
        let mut v = ViewportState::default();
        let deltas = [-120.0, -3.0, 100.0, -1.0, 0.0, -53.0, 9999.0, -0.1];
        for i in 0..200 {
            match i % 5 {
                0 => v.zoom_in(0.5),
                1 => v.zoom_out(0.75),
                2 => v.zoom_from_wheel(deltas[i % deltas.len()], 0.25),
                3 => v.zoom_in(2.0),
                _ => v.zoom_from_wheel(-1.0, 0.25),
            }
            assert!(in_bounds(&v), "zoom {} escaped after step {}", v.zoom, i);
        }
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut v = ViewportState::default();
        v.zoom_in(f64::INFINITY);
        v.zoom_from_wheel(f64::NAN, 0.25);
        assert_eq!(v.zoom, 1.0);
        v.zoom_in(1.0);
        v.pan_by(f64::NAN, 3.0);
        assert_eq!(v.pan, Point::ORIGIN);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut v = ViewportState::default();
        v.zoom_in(1.5);
        v.pan_by(40.0, 40.0);
        v.reset();
        let once = v;
        v.reset();
        assert_eq!(v, once);
        assert_eq!(v, ViewportState::default());
    }

    #[test]
    fn pan_requires_zoom() {
        let mut v = ViewportState::default();
        v.pan_by(10.0, 10.0);
        assert_eq!(v.pan, Point::ORIGIN);
        v.zoom_in(0.5);
        v.pan_by(10.0, -5.0);
        v.pan_by(10.0, -5.0);
        assert_eq!(v.pan, Point::new(20.0, -10.0));
    }

    #[test]
    fn partial_zoom_out_keeps_pan() {
        let mut v = ViewportState::default();
        v.zoom_in(1.0);
        v.pan_by(30.0, 30.0);
        v.zoom_out(0.5);
        assert_eq!(v.zoom, 1.5);
        assert_eq!(v.pan, Point::new(30.0, 30.0));
    }

    #[test]
    fn wheel_direction() {
        let mut v = ViewportState::default();
        v.zoom_from_wheel(-100.0, 0.25);
        assert_eq!(v.zoom, 1.25);
        v.zoom_from_wheel(100.0, 0.25);
        assert_eq!(v.zoom, 1.0);
        assert_eq!(v.zoom_percent(), 100);
    }
}
