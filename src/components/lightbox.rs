use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config::asset_url;
use crate::content::GalleryImage;
use crate::state::{ClickTarget, Lightbox, LightboxAction};

#[derive(Properties, PartialEq)]
pub struct LightboxViewProps {
    pub images: Vec<GalleryImage>,
    pub state: Lightbox,
    pub on_action: Callback<LightboxAction>,
}

fn on_click(on_action: &Callback<LightboxAction>, target: ClickTarget) -> Callback<MouseEvent> {
    let on_action = on_action.clone();
    Callback::from(move |e: MouseEvent| {
        if target.stops_propagation() {
            e.stop_propagation();
        }
        if let Some(action) = target.action() {
            on_action.emit(action);
        }
    })
}

#[function_component(LightboxView)]
pub fn lightbox_view(props: &LightboxViewProps) -> Html {
    let LightboxViewProps { images, state, on_action } = props;

    if !state.is_open() {
        return html! {};
    }
    let Some(image) = images.get(state.selected()) else {
        return html! {};
    };

    html! {
        <div class="lightbox-backdrop" onclick={on_click(on_action, ClickTarget::Backdrop)}>
            <button
                class="lightbox-control lightbox-close"
                aria-label="Close lightbox"
                onclick={on_click(on_action, ClickTarget::Close)}
            >
                {"✕"}
            </button>
            <button
                class="lightbox-control lightbox-prev"
                aria-label="Previous image"
                onclick={on_click(on_action, ClickTarget::Previous)}
            >
                {"‹"}
            </button>
            <button
                class="lightbox-control lightbox-next"
                aria-label="Next image"
                onclick={on_click(on_action, ClickTarget::Next)}
            >
                {"›"}
            </button>
            <div
                key={state.selected().to_string()}
                class="lightbox-image"
                onclick={on_click(on_action, ClickTarget::Image)}
            >
                <img src={asset_url(&image.src)} alt={image.alt.clone()} />
            </div>
            <div class="lightbox-counter">
                <span>{state.counter()}</span>
            </div>
            <style>
                {r#"
                .lightbox-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: rgba(0, 0, 0, 0.95);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: lightboxFade 0.3s ease;
                }

                .lightbox-control {
                    position: absolute;
                    z-index: 110;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .lightbox-control:hover {
                    background: rgba(255, 255, 255, 0.2);
                }

                .lightbox-close {
                    top: 1rem;
                    right: 1rem;
                    padding: 0.5rem 0.9rem;
                    font-size: 1.75rem;
                }

                .lightbox-prev,
                .lightbox-next {
                    padding: 0.5rem 1.1rem;
                    font-size: 2.5rem;
                }

                .lightbox-prev { left: 1rem; }
                .lightbox-next { right: 1rem; }

                .lightbox-image {
                    max-width: 90vw;
                    max-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: lightboxZoom 0.3s ease;
                }

                .lightbox-image img {
                    max-width: 100%;
                    max-height: 90vh;
                    object-fit: contain;
                    border-radius: 16px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }

                .lightbox-counter {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    color: #fff;
                    font-weight: 500;
                }

                @keyframes lightboxFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes lightboxZoom {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                "#}
            </style>
        </div>
    }
}
