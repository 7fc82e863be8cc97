use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Event, EventTarget};

use crate::state::lifecycle::Resource;

#[derive(Debug, Error)]
pub enum AttachError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("ResizeObserver unavailable: {0}")]
    Observer(String),
}

pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Bubble-phase, non-passive: every overlay listener may call `preventDefault`
/// (Yew registers `wheel` as passive, so that one can't go through the vdom).
fn cancelable() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

/// An event listener held by an [`OverlayScope`](crate::state::OverlayScope).
/// Releasing drops the gloo listener, which removes it from the target.
pub struct DomListener {
    kind: &'static str,
    listener: Option<EventListener>,
}

impl DomListener {
    pub fn attach<F>(target: &EventTarget, kind: &'static str, handler: F) -> Self
    where
        F: FnMut(&Event) + 'static,
    {
        Self {
            kind,
            listener: Some(EventListener::new_with_options(
                target,
                kind,
                cancelable(),
                handler,
            )),
        }
    }

    pub fn on_window<F>(kind: &'static str, handler: F) -> Result<Self, AttachError>
    where
        F: FnMut(&Event) + 'static,
    {
        let window = web_sys::window().ok_or(AttachError::NoWindow)?;
        Ok(Self::attach(&window, kind, handler))
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl Resource for DomListener {
    fn release(&mut self) {
        self.listener.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_listeners_can_prevent_default() {
        let opts = cancelable();
        assert!(!opts.passive);
        assert!(matches!(opts.phase, EventListenerPhase::Bubble));
    }
}
