// Coordinate mapping between pointer, container and lens spaces.
// Everything here is pure; callers own the state.

use crate::model::{ContainerRect, ContainerSize, Point};
use crate::state::viewport::MIN_ZOOM;

/// Placement of the magnified image copy inside the lens element.
/// Applied as `translate(tx, ty) scale(s)` with a top-left transform origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LensCrop {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    /// The magnified copy is laid out at the container's size before scaling.
    pub width: f64,
    pub height: f64,
}

impl LensCrop {
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ViewportTransform {
    /// Translate comes after scale, so it runs in the scaled space.
    pub fn css(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.scale, self.translate_x, self.translate_y
        )
    }
}

fn clamp_axis(v: f64, extent: f64) -> f64 {
    if !(extent > 0.0) || !v.is_finite() {
        return 0.0;
    }
    v.clamp(0.0, extent)
}

/// Pointer client coordinates relative to the container's top-left corner,
/// clamped into the container box. Fast moves across the border can report
/// positions a few pixels outside.
pub fn to_container_local(pointer_x: f64, pointer_y: f64, rect: ContainerRect) -> Point {
    Point::new(
        clamp_axis(pointer_x - rect.left, rect.width),
        clamp_axis(pointer_y - rect.top, rect.height),
    )
}

/// Clamps an already container-local point into `size`. Guards against the
/// pointer rect and the observed size disagreeing by a rounding pixel.
pub fn clamp_to_size(point: Point, size: ContainerSize) -> Point {
    Point::new(clamp_axis(point.x, size.width), clamp_axis(point.y, size.height))
}

/// Transform that puts `center` (container-local) in the middle of the lens.
/// `None` while the container has no usable size.
pub fn lens_crop_transform(
    center: Point,
    container: ContainerSize,
    lens_size: f64,
    magnification: f64,
) -> Option<LensCrop> {
    if container.is_empty() {
        return None;
    }
    let half = lens_size / 2.0;
    Some(LensCrop {
        scale: magnification,
        translate_x: -(center.x * magnification - half),
        translate_y: -(center.y * magnification - half),
        width: container.width,
        height: container.height,
    })
}

/// Viewport transform for the zoomed image. Pan is stored in client pixels,
/// so it is divided by zoom to keep drags 1:1 at every zoom level.
pub fn viewport_transform(zoom: f64, pan: Point) -> ViewportTransform {
    let zoom = zoom.max(MIN_ZOOM);
    ViewportTransform {
        scale: zoom,
        translate_x: pan.x / zoom,
        translate_y: pan.y / zoom,
    }
}

/// Top-left corner of the lens element for a given center.
pub fn lens_origin(center: Point, lens_size: f64) -> Point {
    Point::new(center.x - lens_size / 2.0, center.y - lens_size / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lens_crop_centers_pointer() {
        let crop = lens_crop_transform(
            Point::new(400.0, 300.0),
            ContainerSize::new(800.0, 600.0),
            200.0,
            3.0,
        )
        .unwrap();
        assert_eq!(crop.scale, 3.0);
        assert_eq!(crop.translate_x, -1100.0);
        assert_eq!(crop.translate_y, -800.0);
        assert_eq!((crop.width, crop.height), (800.0, 600.0));
    }

    #[test]
    fn lens_crop_keeps_crosshair_under_cursor_at_edges() {
        let size = ContainerSize::new(1024.0, 512.0);
        for &(x, y) in &[(0.0, 0.0), (1024.0, 512.0), (17.5, 300.25)] {
            let crop = lens_crop_transform(Point::new(x, y), size, 160.0, 2.5).unwrap();
            // image point (x, y) lands at the lens center
            assert!((x * crop.scale + crop.translate_x - 80.0).abs() < 1e-9);
            assert!((y * crop.scale + crop.translate_y - 80.0).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_sized_container_hides_lens() {
        assert!(lens_crop_transform(Point::ORIGIN, ContainerSize::default(), 200.0, 3.0).is_none());
        assert!(
            lens_crop_transform(Point::ORIGIN, ContainerSize::new(0.0, 600.0), 200.0, 3.0)
                .is_none()
        );
    }

    #[test]
    fn container_local_is_clamped() {
        let rect = ContainerRect::new(100.0, 50.0, 800.0, 600.0);
        assert_eq!(to_container_local(500.0, 350.0, rect), Point::new(400.0, 300.0));
        assert_eq!(to_container_local(-20.0, 10.0, rect), Point::new(0.0, 0.0));
        assert_eq!(to_container_local(5000.0, 5000.0, rect), Point::new(800.0, 600.0));
        assert_eq!(
            to_container_local(f64::NAN, 60.0, rect),
            Point::new(0.0, 10.0)
        );
    }

    #[test]
    fn container_local_with_empty_rect_is_origin() {
        let rect = ContainerRect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(to_container_local(42.0, 42.0, rect), Point::ORIGIN);
    }

    #[test]
    fn viewport_translate_is_compensated_by_zoom() {
        let t = viewport_transform(2.0, Point::new(100.0, -40.0));
        assert_eq!(t.scale, 2.0);
        assert_eq!((t.translate_x, t.translate_y), (50.0, -20.0));
        assert_eq!(t.css(), "scale(2) translate(50px, -20px)");
    }

    #[test]
    fn viewport_transform_floors_degenerate_zoom() {
        let pan = Point::new(30.0, -12.0);
        for zoom in [0.0, -2.0, 0.5] {
            let t = viewport_transform(zoom, pan);
            assert_eq!(t.scale, 1.0);
            assert_eq!((t.translate_x, t.translate_y), (30.0, -12.0));
        }
    }

    #[test]
    fn clamp_to_size_trims_rounding_overshoot() {
        let size = ContainerSize::new(800.0, 600.0);
        assert_eq!(clamp_to_size(Point::new(802.0, 602.0), size), Point::new(800.0, 600.0));
        assert_eq!(clamp_to_size(Point::new(10.0, 20.0), size), Point::new(10.0, 20.0));
    }

    #[test]
    fn lens_origin_offsets_by_half_size() {
        assert_eq!(lens_origin(Point::new(400.0, 300.0), 200.0), Point::new(300.0, 200.0));
    }
}
