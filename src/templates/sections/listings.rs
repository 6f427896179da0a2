use crate::domain::PageState;
use crate::templates::components::{results_panel, search_form, section_heading};
use maud::{html, Markup};

pub fn listings(state: &PageState) -> Markup {
    html! {
        section id="listings" class="listings" style="background-image: url('/static/images/listings.webp')" {
            div class="listings-overlay" {}
            div class="container narrow" {
                (section_heading("Find Your Home", "Search through our available listings in Pahrump"))
                (search_form(state))
                (results_panel(state))
            }
        }
    }
}
