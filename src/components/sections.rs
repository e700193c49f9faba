use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::asset_url;
use crate::Route;
use crate::content::{ClubEvent, FishingReport, GalleryImage};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: String,
    pub image: GalleryImage,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section id="hero" class="hero">
            <img class="hero-image" src={asset_url(&props.image.src)} alt={props.image.alt.clone()} />
            <div class="hero-shade"></div>
            <div class="hero-title">
                <h1>{props.title.clone()}</h1>
            </div>
        </section>
    }
}

fn wave_divider(width: u32, path: &'static str, stroke: &'static str) -> Html {
    html! {
        <div class="section-divider" aria-hidden="true">
            <svg width={width.to_string()} height="18" viewBox={format!("0 0 {} 18", width)}>
                <path d={path} fill="none" stroke={stroke} stroke-width="2" stroke-linecap="round" />
            </svg>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="page-section about">
            <h2>{"🎣 About the Arlington Anglers Club: More Than Just Fishing"}</h2>
            <p class="section-lead">
                {"Welcome! Our club started with a simple idea and a big passion, proving you don't need a boat or a beard to love fishing, just a good attitude and a fishing rod. We were founded right here in Arlington by a local 6th grader! Starting with a handful of friends and a shared love for local waters like Spy Pond, the club's goal is to grow into a vibrant, family-friendly community."}
            </p>
            { wave_divider(160, "M0 9c20-8 40 8 60 0s40 8 60 0 40 8 40 8", "#800000") }
            <h3>{"Our Core Catch: Fun, Learning, and Community"}</h3>
            <ul class="core-list">
                <li>{"🎉 "}<strong>{"Fun:"}</strong>{" Fishing should always be enjoyable! We keep our events lighthearted and welcoming, whether it's a casual Sunday morning cast or a lively evening clinic."}</li>
                <li>{"🧠 "}<strong>{"Learning:"}</strong>{" We're committed to passing on the passion. Our club plans to offer tutorials on everything from knot-tying and tackle selection to reading the water and local conservation practices. Beginners are always welcome!"}</li>
                <li>{"🏆 "}<strong>{"Friendly Competition:"}</strong>{" We love a little challenge! Our friendly tournaments will be a great way to improve your skills and win bragging rights (and maybe a small trophy!). It's all about mutual respect and cheering on the next big catch."}</li>
                <li>{"🤝 "}<strong>{"Community Involvement:"}</strong>{" We believe in protecting the places we fish. We organize regular clean-up days, support local conservation efforts, and host community education events to keep our waters healthy for everyone."}</li>
            </ul>
            { wave_divider(200, "M0 9c30-10 60 10 90 0s60 10 110 0", "#9a1a1a") }
            <h3>{"Join the School of Fish!"}</h3>
            <p class="section-lead">
                {"Whether you're a seasoned angler who knows every local honey hole or you're looking to cast your very first line, the Arlington Anglers Club is your home base. We're proud of our local roots and the friendly, enthusiastic environment our young founder created."}
            </p>
            <div class="join-cta">
                <Link<Route> to={Route::Join} classes="join-button">
                    {"Join the Club"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct EventsProps {
    pub events: Vec<ClubEvent>,
}

#[function_component(Events)]
pub fn events(props: &EventsProps) -> Html {
    html! {
        <section id="events" class="page-section muted">
            <h2>{"Upcoming Events"}</h2>
            <div class="card-row">
                {
                    props.events.iter().map(|event| html! {
                        <div class="card" key={event.title.clone()}>
                            <div class="card-icon" aria-hidden="true">{"📅"}</div>
                            <h3>{event.title.clone()}</h3>
                            <p class="card-meta">{event.when.clone()}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(Reviews)]
pub fn reviews() -> Html {
    html! {
        <section id="reviews" class="page-section">
            <h2>{"Product Reviews"}</h2>
            <p class="section-lead">
                {"Check out our latest gear reviews, tackle tests, and fishing equipment breakdowns. Watch and learn what works best on the water!"}
            </p>
            <div class="video-placeholder">
                <div class="video-icon">{"📺"}</div>
                <span class="video-title">{"YouTube Video Coming Soon"}</span>
                <span class="video-subtitle">{"Stay tuned for our latest product reviews!"}</span>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReportsProps {
    pub reports: Vec<FishingReport>,
}

#[function_component(Reports)]
pub fn reports(props: &ReportsProps) -> Html {
    html! {
        <section id="reports" class="page-section">
            <h2>{"Fishing Reports"}</h2>
            <div class="report-list">
                {
                    props.reports.iter().map(|report| html! {
                        <div class="card report" key={report.title.clone()}>
                            <h3>{report.title.clone()}</h3>
                            <p class="card-meta">{report.date.clone()}</p>
                            <p>{report.body.clone()}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

/// Sign-up form. Nothing is submitted anywhere; the submit event is only
/// kept from reloading the page.
#[function_component(JoinForm)]
pub fn join_form() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        log::info!("join form submitted; no handler configured");
    });

    html! {
        <section id="join" class="page-section">
            <h2>{"Join the Club"}</h2>
            <p class="section-lead">
                {"Tell us a little about yourself and we'll reach out before the next outing."}
            </p>
            <form class="join-form" {onsubmit}>
                <label for="join-name">{"Name"}</label>
                <input id="join-name" name="name" type="text" placeholder="Your name" />
                <label for="join-email">{"Email"}</label>
                <input id="join-email" name="email" type="email" placeholder="you@example.com" />
                <label for="join-experience">{"Experience"}</label>
                <select id="join-experience" name="experience">
                    <option value="new">{"Never fished before"}</option>
                    <option value="some">{"A few trips"}</option>
                    <option value="seasoned">{"Seasoned angler"}</option>
                </select>
                <label for="join-message">{"Anything else?"}</label>
                <textarea id="join-message" name="message" rows="4" />
                <button type="submit" class="join-submit">{"Sign Me Up"}</button>
            </form>
            <div class="join-cta">
                <Link<Route> to={Route::Home} classes="join-button secondary">
                    {"Back to the Club"}
                </Link<Route>>
            </div>
        </section>
    }
}

/// Styles shared by every page variant.
#[function_component(PageStyles)]
pub fn page_styles() -> Html {
    html! {
        <style>
            {r#"
            body {
                margin: 0;
                background: #f9fafb;
                color: #1f2937;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            }

            .hero {
                position: relative;
                min-height: 90vh;
                display: flex;
                align-items: center;
                justify-content: center;
                overflow: hidden;
                border-radius: 0 0 24px 24px;
                box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
            }

            .hero-image {
                position: absolute;
                inset: 0;
                width: 100%;
                height: 100%;
                object-fit: cover;
                filter: brightness(1.1) contrast(1.1);
                animation: heroDrift 35s ease-in-out infinite;
            }

            .hero-shade {
                position: absolute;
                inset: 0;
                background: rgba(0, 0, 0, 0.35);
            }

            .hero-title {
                z-index: 10;
                backdrop-filter: blur(4px);
                background: rgba(0, 0, 0, 0.3);
                border-radius: 24px;
                padding: 1rem 2rem;
                animation: heroRise 0.6s ease-out;
            }

            .hero-title h1 {
                margin: 0;
                color: #fff;
                font-size: 4.5rem;
                text-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
            }

            @keyframes heroDrift {
                0% { transform: scale(1) translate(-1%, 0); }
                50% { transform: scale(1.06) translate(1%, -0.5%); }
                100% { transform: scale(1) translate(-1%, 0); }
            }

            @keyframes heroRise {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }

            .page-section {
                scroll-margin-top: 7rem;
                margin: 2rem 1rem 0;
                padding: 4rem 1.5rem;
                background: #fff;
                border-radius: 24px;
                box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
                text-align: center;
            }

            .page-section.muted {
                background: #f3f4f6;
            }

            .page-section h2 {
                color: #800000;
                font-size: 1.875rem;
                margin-bottom: 2rem;
            }

            .page-section h3 {
                color: #800000;
            }

            .section-lead {
                max-width: 56rem;
                margin: 0 auto;
                font-size: 1.125rem;
                color: #374151;
            }

            .section-divider {
                display: flex;
                justify-content: center;
                margin: 2rem 0;
                opacity: 0.4;
            }

            .core-list {
                max-width: 56rem;
                margin: 0 auto;
                padding: 0;
                list-style: none;
                color: #374151;
            }

            .core-list li {
                margin-bottom: 0.75rem;
            }

            .card-row {
                display: flex;
                justify-content: center;
            }

            .card {
                width: 100%;
                max-width: 28rem;
                padding: 1.5rem;
                border-radius: 24px;
                background: #fff;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                transition: box-shadow 0.3s ease;
            }

            .card:hover {
                box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
            }

            .card-icon {
                font-size: 2.5rem;
                margin-bottom: 1rem;
            }

            .card-meta {
                color: #6b7280;
                font-size: 0.875rem;
            }

            .report-list {
                max-width: 48rem;
                margin: 0 auto;
                display: flex;
                flex-direction: column;
                gap: 1.5rem;
                text-align: left;
            }

            .report-list .card {
                max-width: none;
            }

            .video-placeholder {
                max-width: 56rem;
                aspect-ratio: 16 / 9;
                margin: 2rem auto 0;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                border-radius: 24px;
                border: 2px solid #9ca3af;
                background: linear-gradient(135deg, #e5e7eb, #d1d5db);
            }

            .video-icon {
                font-size: 3.75rem;
                margin-bottom: 1rem;
            }

            .video-title {
                font-size: 1.25rem;
                font-weight: 600;
                color: #374151;
            }

            .video-subtitle {
                margin-top: 0.5rem;
                font-size: 0.875rem;
                color: #6b7280;
            }

            .join-form {
                max-width: 32rem;
                margin: 2rem auto 0;
                display: flex;
                flex-direction: column;
                gap: 0.5rem;
                text-align: left;
            }

            .join-form input,
            .join-form select,
            .join-form textarea {
                padding: 0.75rem;
                border: 1px solid #d1d5db;
                border-radius: 12px;
                font: inherit;
            }

            .join-submit {
                margin-top: 1rem;
                padding: 0.9rem;
                border: none;
                border-radius: 9999px;
                background: #800000;
                color: #fff;
                font-size: 1.1rem;
                cursor: pointer;
            }

            .join-cta {
                margin-top: 2rem;
            }

            .join-button {
                display: inline-block;
                padding: 0.9rem 2rem;
                border-radius: 9999px;
                background: #800000;
                color: #fff;
                font-weight: 600;
                text-decoration: none;
                transition: transform 0.2s ease;
            }

            .join-button:hover {
                transform: translateY(-2px);
            }

            .join-button.secondary {
                background: transparent;
                color: #800000;
                border: 2px solid #800000;
            }

            .site-footer {
                margin-top: 2rem;
                padding: 2rem 0;
                background: #800000;
                color: #fff;
                text-align: center;
                border-radius: 24px;
            }

            .footer-icons {
                display: flex;
                justify-content: center;
                gap: 1rem;
                margin-bottom: 0.5rem;
            }

            @media (max-width: 768px) {
                .hero {
                    min-height: 85vh;
                }

                .hero-title h1 {
                    font-size: 3rem;
                }
            }
            "#}
        </style>
    }
}
