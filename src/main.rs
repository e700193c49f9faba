use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod dom;
mod error;
mod hooks;
mod state;
mod components {
    pub mod footer;
    pub mod gallery;
    pub mod header;
    pub mod lightbox;
    pub mod sections;
}
mod pages {
    pub mod join;
    pub mod landing;
}

use content::SiteContent;
use pages::{join::JoinPage, landing::Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/join")]
    Join,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Join => {
            info!("Rendering Join page");
            html! { <JoinPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Nothing biting here"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the club"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| SiteContent::load_or_fallback(), ());

    html! {
        <ContextProvider<Rc<SiteContent>> context={content}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteContent>>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_page_has_its_own_path() {
        assert_eq!(Route::Join.to_path(), "/join");
        assert!(Route::recognize("/join") == Some(Route::Join));
    }

    #[test]
    fn home_is_the_root_path() {
        assert_eq!(Route::Home.to_path(), "/");
        assert!(Route::recognize("/") == Some(Route::Home));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert!(Route::recognize("/tackle-box") == Some(Route::NotFound));
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
