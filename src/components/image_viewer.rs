use yew::prelude::*;

use crate::model::ViewerConfig;

use super::viewer_overlay::ViewerOverlay;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageViewerProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub config: ViewerConfig,
}

/// Inline preview that opens the full-screen magnifier overlay.
///
/// The overlay is portalled into `<body>` so page layout (transforms,
/// `overflow:hidden` cards) cannot clip it.
#[function_component(ImageViewer)]
pub fn image_viewer(props: &ImageViewerProps) -> Html {
    let open = use_state(|| false);

    let open_cb = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let close_cb = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(false))
    };

    let overlay = if *open {
        let overlay = html! {
            <ViewerOverlay
                src={props.src.clone()}
                alt={props.alt.clone()}
                title={props.title.clone()}
                config={props.config}
                on_close={close_cb}
            />
        };
        match web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            Some(body) => create_portal(overlay, body.into()),
            None => overlay,
        }
    } else {
        html! {}
    };

    html! {
        <figure class={classes!("image-viewer", props.class.clone())} style="margin:0; display:flex; flex-direction:column; gap:6px;">
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                title={props.title.clone()}
                loading="lazy"
                style="width:100%; height:auto; display:block; border-radius:6px; cursor:zoom-in;"
                onclick={open_cb.clone()}
            />
            <figcaption style="display:flex; justify-content:space-between; align-items:center; gap:8px; font-size:13px;">
                <span>{ props.title.clone() }</span>
                <button onclick={open_cb} aria-label={format!("Expand {}", props.title)}>{"Expand"}</button>
            </figcaption>
            { overlay }
        </figure>
    }
}
