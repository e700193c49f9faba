use std::rc::Rc;
use yew::prelude::*;

use crate::components::{
    footer::Footer,
    header::SiteHeader,
    sections::{JoinForm, PageStyles},
};
use crate::config::SECTION_IDS;
use crate::content::SiteContent;
use crate::hooks::{section_nav, use_scrolled, use_section_tracker, use_smooth_scroll};
use crate::state::{Menu, MenuAction};

// Only #about exists here; the other nav targets and observed sections are
// absent on this variant and are skipped.
#[function_component(JoinPage)]
pub fn join_page() -> Html {
    let content = use_context::<Rc<SiteContent>>()
        .unwrap_or_else(|| Rc::new(SiteContent::fallback()));

    use_smooth_scroll();
    let scrolled = use_scrolled();
    let tracker = use_section_tracker(&SECTION_IDS);
    let menu = use_reducer_eq(Menu::default);

    let on_navigate = section_nav(&menu);
    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Toggle))
    };

    html! {
        <div class="club-page join-page">
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
            <section id="about" class="page-section join-intro">
                <h2>{format!("Become part of the {}", content.club_name)}</h2>
                <p class="section-lead">
                    {"Founded in Arlington by a local 6th grader, we're a family-friendly crew that fishes Spy Pond, the Mystic River and everything in between. Beginners are always welcome."}
                </p>
            </section>
            <JoinForm />
            <Footer club_name={content.club_name.clone()} />
            <style>
                {r#"
                .join-intro {
                    margin-top: 7rem;
                }
                "#}
            </style>
        </div>
    }
}
