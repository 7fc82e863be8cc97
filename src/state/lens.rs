use crate::model::{Point, ViewerConfig};

/// Magnifier lens state. `size` and `magnification` are fixed per overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensState {
    pub active: bool,
    /// Active but the pointer is outside the container => false.
    pub visible: bool,
    /// Container-local center of the lens.
    pub center: Point,
    size: f64,
    magnification: f64,
}

impl Default for LensState {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl LensState {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            active: false,
            visible: false,
            center: Point::ORIGIN,
            size: config.lens_size.max(0.0),
            magnification: config.magnification.max(1.0),
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn magnification(&self) -> f64 {
        self.magnification
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.visible = false;
    }

    /// Returns the new `active` value.
    pub fn toggle(&mut self) -> bool {
        if self.active {
            self.deactivate();
        } else {
            self.activate();
        }
        self.active
    }

    pub fn update_position(&mut self, point: Point) {
        if !self.active {
            return;
        }
        self.center = point;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}
