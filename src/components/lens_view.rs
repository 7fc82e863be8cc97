use yew::prelude::*;

use crate::geometry::{LensCrop, lens_origin};
use crate::model::Point;

#[derive(Properties, PartialEq, Clone)]
pub struct LensViewProps {
    pub src: AttrValue,
    pub center: Point,
    pub size: f64,
    pub crop: LensCrop,
}

/// Circular magnifier drawn over the image container.
#[function_component]
pub fn LensView(props: &LensViewProps) -> Html {
    let origin = lens_origin(props.center, props.size);
    let half = props.size / 2.0;
    let frame = format!(
        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; border-radius:50%; overflow:hidden; border:2px solid rgba(255,255,255,0.9); box-shadow:0 4px 16px rgba(0,0,0,0.6); pointer-events:none; background:#0d1117;",
        origin.x, origin.y, props.size, props.size
    );
    let magnified = format!(
        "position:absolute; left:0; top:0; width:{}px; height:{}px; max-width:none; object-fit:contain; transform-origin:0 0; transform:{};",
        props.crop.width,
        props.crop.height,
        props.crop.css()
    );
    let h_line = format!(
        "position:absolute; left:{}px; top:{}px; width:16px; height:1px; background:rgba(255,80,80,0.9);",
        half - 8.0,
        half
    );
    let v_line = format!(
        "position:absolute; left:{}px; top:{}px; width:1px; height:16px; background:rgba(255,80,80,0.9);",
        half,
        half - 8.0
    );
    html! {
        <div style={frame}>
            <img src={props.src.clone()} alt="" draggable="false" style={magnified} />
            <div style={h_line}></div>
            <div style={v_line}></div>
        </div>
    }
}
