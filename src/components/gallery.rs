use yew::prelude::*;

use crate::config::asset_url;
use crate::content::GalleryImage;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<GalleryImage>,
    pub on_open: Callback<usize>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    html! {
        <section id="gallery" class="page-section">
            <h2>{"Photo Gallery"}</h2>
            <div class="gallery-grid">
                {
                    props.images.iter().enumerate().map(|(index, image)| {
                        let on_open = props.on_open.clone();
                        html! {
                            <div
                                key={index.to_string()}
                                class="gallery-thumb"
                                onclick={Callback::from(move |_| on_open.emit(index))}
                            >
                                <img src={asset_url(&image.src)} alt={image.alt.clone()} loading="lazy" />
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    max-width: 1024px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .gallery-thumb {
                    aspect-ratio: 1 / 1;
                    overflow: hidden;
                    border-radius: 24px;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }

                .gallery-thumb:hover {
                    transform: scale(1.05);
                }

                .gallery-thumb img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                @media (max-width: 768px) {
                    .gallery-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
