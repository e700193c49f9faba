use chrono::{Datelike, Local};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub club_name: String,
}

pub fn copyright_line(year: i32, club_name: &str) -> String {
    format!("© {} {}. All rights reserved.", year, club_name)
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-icons" aria-hidden="true">
                <span>{"🐟"}</span>
                <span>{"✉️"}</span>
            </div>
            <p>{copyright_line(year, &props.club_name)}</p>
        </footer>
    }
}
