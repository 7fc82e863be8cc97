use super::image_viewer::ImageViewer;
use crate::model::Gallery;
use crate::util::cwarn;
use yew::prelude::*;

const GALLERY_MANIFEST: &str = include_str!("../../assets/gallery.json");

fn load_gallery() -> Gallery {
    match Gallery::from_json(GALLERY_MANIFEST) {
        Ok(gallery) => gallery,
        Err(err) => {
            cwarn(&format!("gallery manifest unreadable: {}", err));
            Gallery::default()
        }
    }
}

// Dashboard page hosting one viewer per dataset row.
#[function_component(App)]
pub fn app() -> Html {
    let gallery = use_state(load_gallery);

    html! {
        <div style="min-height:100vh; background:#0d1117; color:#e6edf3; font-family:system-ui, sans-serif; padding:24px; box-sizing:border-box;">
            <h2 style="margin:0 0 16px 0; font-size:22px; color:#58a6ff;">{ gallery.heading.clone() }</h2>
            if gallery.items.is_empty() {
                <div style="opacity:0.7;">{"No images available."}</div>
            }
            <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(280px, 1fr)); gap:16px;">
                { for gallery.items.iter().map(|item| html! {
                    <div key={item.src.clone()} style="background:#161b22; border:1px solid #30363d; border-radius:8px; padding:12px; display:flex; flex-direction:column; gap:8px;">
                        <ImageViewer
                            src={item.src.clone()}
                            alt={item.alt.clone()}
                            title={item.title.clone()}
                            config={item.viewer.unwrap_or_default()}
                        />
                        {
                            if let Some(caption) = &item.caption {
                                html! { <div style="font-size:12px; opacity:0.7;">{ caption.clone() }</div> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                }) }
            </div>
        </div>
    }
}
