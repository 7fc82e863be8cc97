use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewerControlsProps {
    pub zoom_percent: u32,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    pub lens_active: bool,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_toggle_lens: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(ViewerControls)]
pub fn viewer_controls(props: &ViewerControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let lens = {
        let cb = props.on_toggle_lens.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rs = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let cl = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let lens_style = if props.lens_active {
        "background:#1f6feb; border-color:#58a6ff; color:#fff;"
    } else {
        ""
    };
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button onclick={zo} disabled={!props.can_zoom_out} title="Zoom out (-)"> {"-"} </button>
        <span style="min-width:48px; text-align:center; font-variant-numeric:tabular-nums;">{ format!("{}%", props.zoom_percent) }</span>
        <button onclick={zi} disabled={!props.can_zoom_in} title="Zoom in (+)"> {"+"} </button>
        <span style="width:8px;"></span>
        <button onclick={lens} style={lens_style} title="Magnifier (M)" aria-pressed={props.lens_active.to_string()}> {"Lens"} </button>
        <button onclick={rs} title="Reset view (R)"> {"Reset"} </button>
        <span style="width:8px;"></span>
        <button onclick={cl} title="Close (Esc)"> {"✕"} </button>
    </div>}
}
