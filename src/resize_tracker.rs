// Keeps the overlay's ContainerSize current via ResizeObserver.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, ResizeObserver, ResizeObserverEntry};

use crate::listener::{AttachError, js_message};
use crate::model::{ContainerRect, ContainerSize};
use crate::state::lifecycle::Resource;

pub struct ResizeTracker {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, ResizeObserver)>,
}

impl ResizeTracker {
    /// Reports the current size right away, then once per observed change.
    pub fn observe<F>(element: &Element, mut on_size: F) -> Result<Self, AttachError>
    where
        F: FnMut(ContainerSize) + 'static,
    {
        on_size(ContainerRect::from_element(element).size());

        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: ResizeObserver| {
            if let Some(size) = latest_size(&entries) {
                on_size(size);
            }
        }) as Box<dyn FnMut(js_sys::Array, ResizeObserver)>);
        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| AttachError::Observer(js_message(&e)))?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

// Only one element is observed; the last entry is the newest box.
fn latest_size(entries: &js_sys::Array) -> Option<ContainerSize> {
    let entry: ResizeObserverEntry = entries.iter().last()?.dyn_into().ok()?;
    let rect = entry.content_rect();
    Some(ContainerSize::new(rect.width(), rect.height()))
}

impl Resource for ResizeTracker {
    fn release(&mut self) {
        self.observer.disconnect();
    }
}
