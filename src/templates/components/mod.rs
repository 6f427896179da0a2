use maud::{html, Markup};

pub mod error;
pub mod listing_card;
pub mod results;
pub mod search_form;

pub use error::html_error_response;
pub use listing_card::listing_card;
pub use results::results_panel;
pub use search_form::search_form;

/// Centered `h2` with a muted line under it, used at the top of most sections.
pub fn section_heading(title: &str, subtitle: &str) -> Markup {
    html! {
        div class="section-heading" {
            h2 { (title) }
            p class="muted" { (subtitle) }
        }
    }
}

/// Hidden inputs carrying `pairs` through a GET form.
pub fn hidden_inputs(pairs: &[(&str, String)]) -> Markup {
    html! {
        @for (name, value) in pairs {
            input type="hidden" name=(name) value=(value);
        }
    }
}
