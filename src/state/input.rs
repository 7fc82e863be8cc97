//! Interaction state machine for the overlay viewer.
//!
//! All viewer state lives in one [`ViewerState`] record and every input goes
//! through [`ViewerState::apply`], so the Panning/lens exclusivity is decided
//! in a single place. The Yew side drives it through [`Reducible`].

use std::rc::Rc;
use yew::Reducible;

use crate::geometry::{self, LensCrop, ViewportTransform};
use crate::model::{ContainerRect, ContainerSize, Point, ViewerConfig};

use super::lens::LensState;
use super::viewport::ViewportState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionMode {
    Idle,
    /// Dragging the zoomed image; `anchor` is the last pointer client position.
    Panning { anchor: Point },
    /// Lens active and the pointer inside the container.
    MagnifierTracking,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewerAction {
    PointerDown { client: Point, primary: bool },
    PointerMove { client: Point, rect: ContainerRect },
    PointerUp,
    PointerLeave,
    Wheel { delta_y: f64 },
    ZoomIn,
    ZoomOut,
    ToggleLens,
    Reset,
    Resized(ContainerSize),
    /// Overlay is going away: reset viewport and switch the lens off.
    Close,
}

/// Overlay hotkeys. Only consulted while the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Close,
    ZoomIn,
    ZoomOut,
    ToggleLens,
    Reset,
}

impl KeyCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(KeyCommand::Close),
            "+" | "=" => Some(KeyCommand::ZoomIn),
            "-" => Some(KeyCommand::ZoomOut),
            "m" | "M" => Some(KeyCommand::ToggleLens),
            "r" | "R" => Some(KeyCommand::Reset),
            _ => None,
        }
    }

    pub fn action(self) -> ViewerAction {
        match self {
            KeyCommand::Close => ViewerAction::Close,
            KeyCommand::ZoomIn => ViewerAction::ZoomIn,
            KeyCommand::ZoomOut => ViewerAction::ZoomOut,
            KeyCommand::ToggleLens => ViewerAction::ToggleLens,
            KeyCommand::Reset => ViewerAction::Reset,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    pub viewport: ViewportState,
    pub lens: LensState,
    pub mode: InteractionMode,
    pub container: ContainerSize,
    config: ViewerConfig,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl ViewerState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            viewport: ViewportState::default(),
            lens: LensState::new(&config),
            mode: InteractionMode::Idle,
            container: ContainerSize::default(),
            config,
        }
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.mode, InteractionMode::Panning { .. })
    }

    pub fn apply(&mut self, action: ViewerAction) {
        use ViewerAction::*;
        match action {
            PointerDown { client, primary } => {
                if primary && self.viewport.is_zoomed() && !self.lens.active {
                    self.mode = InteractionMode::Panning { anchor: client };
                }
            }
            PointerMove { client, rect } => match self.mode {
                InteractionMode::Panning { anchor } => {
                    self.viewport.pan_by(client.x - anchor.x, client.y - anchor.y);
                    self.mode = InteractionMode::Panning { anchor: client };
                }
                _ if self.lens.active => {
                    let mut local = geometry::to_container_local(client.x, client.y, rect);
                    if !self.container.is_empty() {
                        local = geometry::clamp_to_size(local, self.container);
                    }
                    self.lens.update_position(local);
                    self.mode = InteractionMode::MagnifierTracking;
                }
                _ => {}
            },
            PointerUp => {
                if self.is_panning() {
                    self.mode = InteractionMode::Idle;
                }
            }
            PointerLeave => {
                self.lens.hide();
                if self.mode == InteractionMode::MagnifierTracking {
                    self.mode = InteractionMode::Idle;
                }
            }
            Wheel { delta_y } => {
                self.viewport
                    .zoom_from_wheel(delta_y, self.config.wheel_zoom_step);
                self.end_drag_if_unzoomed();
            }
            ZoomIn => self.viewport.zoom_in(self.config.button_zoom_step),
            ZoomOut => {
                self.viewport.zoom_out(self.config.button_zoom_step);
                self.end_drag_if_unzoomed();
            }
            ToggleLens => {
                // On: a drag in progress is cancelled. Off: tracking ends.
                // Tracking resumes on the next pointer move.
                self.lens.toggle();
                self.mode = InteractionMode::Idle;
            }
            Reset => {
                self.viewport.reset();
                self.end_drag_if_unzoomed();
            }
            Resized(size) => self.container = size,
            Close => {
                self.viewport.reset();
                self.lens.deactivate();
                self.mode = InteractionMode::Idle;
            }
        }
        debug_assert!(!(self.is_panning() && self.lens.active));
    }

    fn end_drag_if_unzoomed(&mut self) {
        if self.is_panning() && !self.viewport.is_zoomed() {
            self.mode = InteractionMode::Idle;
        }
    }

    pub fn viewport_transform(&self) -> ViewportTransform {
        geometry::viewport_transform(self.viewport.zoom, self.viewport.pan)
    }

    /// Crop for the lens image, or `None` when nothing should be drawn.
    pub fn lens_crop(&self) -> Option<LensCrop> {
        if !(self.lens.active && self.lens.visible) {
            return None;
        }
        geometry::lens_crop_transform(
            self.lens.center,
            self.container,
            self.lens.size(),
            self.lens.magnification(),
        )
    }
}

impl Reducible for ViewerState {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        new.apply(action);
        if new == *self {
            return self;
        }
        Rc::new(new)
    }
}
