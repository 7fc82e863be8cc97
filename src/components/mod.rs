pub mod app;
pub mod image_viewer;
pub mod lens_view;
pub mod viewer_controls;
pub mod viewer_overlay;
