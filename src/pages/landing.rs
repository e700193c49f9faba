use std::rc::Rc;
use yew::prelude::*;

use crate::components::{
    footer::Footer,
    gallery::Gallery,
    header::SiteHeader,
    lightbox::LightboxView,
    sections::{About, Events, Hero, PageStyles, Reports, Reviews},
};
use crate::config::SECTION_IDS;
use crate::content::SiteContent;
use crate::hooks::{section_nav, use_lightbox, use_scrolled, use_section_tracker, use_smooth_scroll};
use crate::state::{LightboxAction, Menu, MenuAction};

/// The full club page: scroll-spy nav, gallery with lightbox, mobile menu.
#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_context::<Rc<SiteContent>>()
        .unwrap_or_else(|| Rc::new(SiteContent::fallback()));

    use_smooth_scroll();
    let scrolled = use_scrolled();
    let tracker = use_section_tracker(&SECTION_IDS);
    let lightbox = use_lightbox(content.gallery.len());
    let menu = use_reducer_eq(Menu::default);

    let on_navigate = section_nav(&menu);

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Toggle))
    };

    let on_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |action: LightboxAction| lightbox.dispatch(action))
    };

    let on_open_image = {
        let on_lightbox = on_lightbox.clone();
        Callback::from(move |index: usize| on_lightbox.emit(LightboxAction::Open(index)))
    };

    html! {
        <div class="club-page">
            <PageStyles />
            <SiteHeader
                club_name={content.club_name.clone()}
                links={content.nav_links.clone()}
                active={Some(tracker.active().to_string())}
                scrolled={scrolled}
                menu_open={menu.is_open()}
                on_toggle_menu={on_toggle_menu}
                on_navigate={on_navigate}
            />
            <Hero title={content.club_name.clone()} image={content.hero_image.clone()} />
            <About />
            <Events events={content.events.clone()} />
            <Gallery images={content.gallery.clone()} on_open={on_open_image} />
            <Reviews />
            <Reports reports={content.reports.clone()} />
            <Footer club_name={content.club_name.clone()} />
            <LightboxView
                images={content.gallery.clone()}
                state={(*lightbox).clone()}
                on_action={on_lightbox}
            />
        </div>
    }
}
