use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, KeyboardEvent, WheelEvent};
use yew::prelude::*;

use crate::listener::DomListener;
use crate::model::{ContainerRect, Point, ViewerConfig};
use crate::resize_tracker::ResizeTracker;
use crate::state::viewport::{MAX_ZOOM, MIN_ZOOM};
use crate::state::{InteractionMode, KeyCommand, OverlayScope, ViewerAction, ViewerState};
use crate::util::{clog, cwarn};

use super::{lens_view::LensView, viewer_controls::ViewerControls};

#[derive(Properties, PartialEq, Clone)]
pub struct ViewerOverlayProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub title: AttrValue,
    pub config: ViewerConfig,
    pub on_close: Callback<()>,
}

/// Full-screen viewer. Mounted only while open: its reducer state and its
/// resource scope live exactly as long as the overlay does.
#[function_component(ViewerOverlay)]
pub fn viewer_overlay(props: &ViewerOverlayProps) -> Html {
    let config = props.config;
    let state = use_reducer(move || ViewerState::new(config));
    let container_ref = use_node_ref();
    let backdrop_ref = use_node_ref();

    // Scope: window keys + mouseup, container wheel, resize observer
    {
        let container_ref = container_ref.clone();
        let dispatcher = state.dispatcher();
        let on_close = props.on_close.clone();
        let title = props.title.clone();
        use_effect_with((), move |_| {
            let mut scope = OverlayScope::open();
            let token = scope.token();

            let keydown = {
                let token = token.clone();
                let dispatcher = dispatcher.clone();
                let on_close = on_close.clone();
                DomListener::on_window("keydown", move |e: &Event| {
                    let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if e.ctrl_key() || e.meta_key() || e.alt_key() {
                        return;
                    }
                    let Some(cmd) = KeyCommand::from_key(&e.key()) else {
                        return;
                    };
                    token.run(|| {
                        e.prevent_default();
                        dispatcher.dispatch(cmd.action());
                        if cmd == KeyCommand::Close {
                            on_close.emit(());
                        }
                    });
                })
            };
            let mouseup = {
                let token = token.clone();
                let dispatcher = dispatcher.clone();
                DomListener::on_window("mouseup", move |_e: &Event| {
                    token.run(|| dispatcher.dispatch(ViewerAction::PointerUp));
                })
            };
            for attached in [keydown, mouseup] {
                match attached {
                    Ok(listener) => {
                        clog(&format!("attached window `{}` listener", listener.kind()));
                        scope.hold(listener);
                    }
                    Err(err) => cwarn(&err.to_string()),
                }
            }

            match container_ref.cast::<Element>() {
                Some(container) => {
                    let wheel = {
                        let token = token.clone();
                        let dispatcher = dispatcher.clone();
                        DomListener::attach(&container, "wheel", move |e: &Event| {
                            let Some(e) = e.dyn_ref::<WheelEvent>() else {
                                return;
                            };
                            token.run(|| {
                                e.prevent_default();
                                dispatcher.dispatch(ViewerAction::Wheel {
                                    delta_y: e.delta_y(),
                                });
                            });
                        })
                    };
                    scope.hold(wheel);
                    let tracker = {
                        let token = token.clone();
                        let dispatcher = dispatcher.clone();
                        ResizeTracker::observe(&container, move |size| {
                            token.run(|| dispatcher.dispatch(ViewerAction::Resized(size)));
                        })
                    };
                    match tracker {
                        Ok(tracker) => scope.hold(tracker),
                        Err(err) => cwarn(&err.to_string()),
                    }
                }
                None => cwarn("image container not mounted; wheel zoom and lens sizing disabled"),
            }
            if scope.is_empty() {
                cwarn("overlay opened without page listeners; only buttons will respond");
            }
            clog(&format!("overlay opened: {} ({} resources)", title, scope.len()));

            move || {
                scope.close();
                clog("overlay closed; resources released");
            }
        });
    }

    let close = {
        let dispatcher = state.dispatcher();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            dispatcher.dispatch(ViewerAction::Close);
            on_close.emit(());
        })
    };
    let action_cb = |action: ViewerAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(action.clone()))
    };

    // Yew delegates from the portal host, so `current_target` is `<body>`;
    // compare against the backdrop node instead.
    let backdrop_click = {
        let close = close.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().map(JsValue::from);
            let backdrop = backdrop_ref.get().map(JsValue::from);
            if is_direct_hit(target, backdrop) {
                close.emit(());
            }
        })
    };
    let container_rect = {
        let container_ref = container_ref.clone();
        move || {
            container_ref
                .cast::<Element>()
                .map(|el| ContainerRect::from_element(&el))
                .unwrap_or_default()
        }
    };
    let onmousedown = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(ViewerAction::PointerDown {
                client: Point::new(e.client_x() as f64, e.client_y() as f64),
                primary: e.button() == 0,
            });
        })
    };
    let onmousemove = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            dispatcher.dispatch(ViewerAction::PointerMove {
                client: Point::new(e.client_x() as f64, e.client_y() as f64),
                rect: container_rect(),
            });
        })
    };
    let onmouseleave = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_e: MouseEvent| dispatcher.dispatch(ViewerAction::PointerLeave))
    };

    let cursor = match state.mode {
        InteractionMode::Panning { .. } => "grabbing",
        _ if state.lens.active => "crosshair",
        _ if state.viewport.is_zoomed() => "grab",
        _ => "default",
    };
    let container_style = format!(
        "position:relative; overflow:hidden; width:90vw; height:78vh; background:#0d1117; border:1px solid #30363d; border-radius:8px; cursor:{};",
        cursor
    );
    let image_style = format!(
        "width:100%; height:100%; object-fit:contain; transform-origin:center center; transform:{}; user-select:none; pointer-events:none;",
        state.viewport_transform().css()
    );

    html! {
        <div ref={backdrop_ref} style="position:fixed; inset:0; z-index:1000; background:rgba(0,0,0,0.85); display:flex; flex-direction:column; align-items:center; justify-content:center; gap:10px;" onclick={backdrop_click} role="dialog" aria-label={props.title.clone()}>
            <div style="width:90vw; display:flex; justify-content:space-between; align-items:center; color:#e6edf3;">
                <h3 style="margin:0; font-size:18px;">{ props.title.clone() }</h3>
                <ViewerControls
                    zoom_percent={state.viewport.zoom_percent()}
                    can_zoom_in={state.viewport.zoom < MAX_ZOOM}
                    can_zoom_out={state.viewport.zoom > MIN_ZOOM}
                    lens_active={state.lens.active}
                    on_zoom_in={action_cb(ViewerAction::ZoomIn)}
                    on_zoom_out={action_cb(ViewerAction::ZoomOut)}
                    on_toggle_lens={action_cb(ViewerAction::ToggleLens)}
                    on_reset={action_cb(ViewerAction::Reset)}
                    on_close={close.clone()}
                />
            </div>
            <div ref={container_ref} style={container_style} {onmousedown} {onmousemove} {onmouseleave}>
                <img src={props.src.clone()} alt={props.alt.clone()} draggable="false" style={image_style} />
                {
                    if let Some(crop) = state.lens_crop() {
                        html! { <LensView src={props.src.clone()} center={state.lens.center} size={state.lens.size()} {crop} /> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div style="font-size:12px; opacity:0.7; color:#e6edf3;">
                {"Scroll or +/- to zoom · drag to pan when zoomed · M lens · R reset · Esc close"}
            </div>
        </div>
    }
}

/// True only when the click landed on `host` itself rather than a descendant.
fn is_direct_hit<T: PartialEq>(target: Option<T>, host: Option<T>) -> bool {
    matches!((target, host), (Some(t), Some(h)) if t == h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_closes_only_on_its_own_node() {
        assert!(is_direct_hit(Some("backdrop"), Some("backdrop")));
        assert!(!is_direct_hit(Some("image-container"), Some("backdrop")));
        // delegated host (e.g. <body>) is never the backdrop
        assert!(!is_direct_hit(Some("body"), Some("backdrop")));
        assert!(!is_direct_hit(None, Some("backdrop")));
        assert!(!is_direct_hit(Some("backdrop"), None));
    }
}
