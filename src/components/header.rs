use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::content::NavLink;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub club_name: String,
    pub links: Vec<NavLink>,
    /// Highlighted section; `None` on pages without scroll-spy.
    #[prop_or_default]
    pub active: Option<String>,
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<String>,
}

fn link_click(on_navigate: &Callback<String>, target: &str) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    let target = target.to_string();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(target.clone());
    })
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let SiteHeaderProps { club_name, links, active, scrolled, menu_open, on_toggle_menu, on_navigate } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    html! {
        <header class={classes!("site-header", scrolled.then(|| "scrolled"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <span class="logo-fish" aria-hidden="true">{"🐟"}</span>
                    <span>{club_name.clone()}</span>
                </Link<Route>>
                <nav class="desktop-nav">
                    {
                        links.iter().map(|link| {
                            let is_active = active.as_deref() == Some(link.target.as_str());
                            html! {
                                <a
                                    key={link.name.clone()}
                                    href={link.href()}
                                    class={classes!("nav-link", is_active.then(|| "active"))}
                                    onclick={link_click(on_navigate, &link.target)}
                                >
                                    {link.name.clone()}
                                </a>
                            }
                        }).collect::<Html>()
                    }
                </nav>
                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            {
                                links.iter().map(|link| html! {
                                    <a
                                        key={link.name.clone()}
                                        href={link.href()}
                                        class="mobile-link"
                                        onclick={link_click(on_navigate, &link.target)}
                                    >
                                        {link.name.clone()}
                                    </a>
                                }).collect::<Html>()
                            }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    background: #800000;
                    border-radius: 24px;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.2);
                    transition: background 0.5s ease, box-shadow 0.5s ease;
                }

                .site-header.scrolled {
                    background: rgba(128, 0, 0, 0.95);
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.35);
                }

                .header-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem;
                }

                .header-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    font-size: 1.25rem;
                    color: #fff;
                    text-decoration: none;
                }

                .desktop-nav {
                    display: flex;
                    gap: 1.5rem;
                    font-weight: 500;
                }

                .nav-link {
                    color: #e5e7eb;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #fff;
                }

                .nav-link.active {
                    color: #fff;
                    font-weight: 600;
                    text-decoration: underline;
                    text-underline-offset: 8px;
                    text-decoration-color: rgba(255, 255, 255, 0.7);
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: rgba(255, 255, 255, 0.1);
                    border: none;
                    border-radius: 9999px;
                    padding: 0.6rem;
                    cursor: pointer;
                }

                .burger-menu span {
                    display: block;
                    width: 20px;
                    height: 2px;
                    background: #fff;
                }

                .mobile-menu {
                    display: none;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 0;
                    border-top: 1px solid #6b7280;
                    animation: menuOpen 0.4s ease-in-out;
                    overflow: hidden;
                }

                .mobile-link {
                    color: #e5e7eb;
                    font-size: 1.125rem;
                    text-decoration: none;
                }

                @keyframes menuOpen {
                    from { max-height: 0; opacity: 0; }
                    to { max-height: 400px; opacity: 1; }
                }

                @media (max-width: 768px) {
                    .desktop-nav {
                        display: none;
                    }

                    .burger-menu,
                    .mobile-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
