//! Plain data types shared by the viewer and the dashboard host.

use serde::Deserialize;

/// A 2D point or offset in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered size of the image container, as last reported by the resize tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Layout has not produced a usable box yet (initial mount, hidden parent).
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Bounding client rect of the container, sampled when a pointer event arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Padding box of `el` in client coordinates: the same box absolutely
    /// positioned children (the lens) are laid out in. The container has no
    /// padding, so this also matches the ResizeObserver content rect.
    pub fn from_element(el: &web_sys::Element) -> Self {
        let outer = el.get_bounding_client_rect();
        Self::new(
            outer.left() + el.client_left() as f64,
            outer.top() + el.client_top() as f64,
            el.client_width() as f64,
            el.client_height() as f64,
        )
    }

    pub fn size(&self) -> ContainerSize {
        ContainerSize::new(self.width, self.height)
    }
}

/// Per-viewer tuning. Lens size and magnification are fixed for the lifetime
/// of an overlay; pages may override them through the `config` prop.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Lens diameter in CSS pixels.
    pub lens_size: f64,
    /// Scale used inside the lens only, independent of viewport zoom.
    pub magnification: f64,
    /// Zoom increment for the control buttons and `+`/`-` keys.
    pub button_zoom_step: f64,
    /// Zoom increment per wheel notch.
    pub wheel_zoom_step: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            lens_size: 200.0,
            magnification: 3.0,
            button_zoom_step: 0.5,
            wheel_zoom_step: 0.25,
        }
    }
}

/// One row of the dashboard's image dataset.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GalleryItem {
    pub src: String,
    pub alt: String,
    pub title: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub viewer: Option<ViewerConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Gallery {
    pub heading: String,
    pub items: Vec<GalleryItem>,
}

impl Gallery {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let cfg: ViewerConfig = serde_json::from_str(r#"{ "magnification": 4.5 }"#).unwrap();
        assert_eq!(cfg.magnification, 4.5);
        assert_eq!(cfg.lens_size, 200.0);
        assert_eq!(cfg.button_zoom_step, 0.5);
        assert_eq!(cfg.wheel_zoom_step, 0.25);
    }

    #[test]
    fn embedded_gallery_manifest_parses() {
        let gallery = Gallery::from_json(include_str!("../assets/gallery.json")).unwrap();
        assert!(!gallery.items.is_empty());
        assert!(gallery.items.iter().all(|i| !i.src.is_empty() && !i.title.is_empty()));
    }

    #[test]
    fn empty_container_is_detected() {
        assert!(ContainerSize::default().is_empty());
        assert!(ContainerSize::new(800.0, 0.0).is_empty());
        assert!(!ContainerSize::new(800.0, 600.0).is_empty());
    }
}
