// templates/pages/home.rs

use crate::domain::content::AGENT;
use crate::domain::PageState;
use crate::templates::{sections, site_layout};
use maud::{html, Markup};

pub fn home_page(state: &PageState, year: i32) -> Markup {
    site_layout(
        &format!("{} | {}", AGENT.headline, AGENT.name),
        html! {
            main {
                (sections::hero())
                (sections::profile())
                (sections::why_choose_us(state))
                (sections::listings(state))
                (sections::gallery(state))
                (sections::emblems())
                (sections::services())
                (sections::contact())
                (sections::map())
            }
            (sections::footer(year))
        },
    )
}
