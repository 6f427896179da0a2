use crate::domain::search::{search, SortKey};
use crate::domain::{PageState, LISTINGS};
use crate::templates::components::{hidden_inputs, listing_card};
use maud::{html, Markup};

/// The `#search-results` block. Renders an empty placeholder until a search
/// has been made so htmx always has a swap target.
pub fn results_panel(state: &PageState) -> Markup {
    if !state.searched {
        return html! { div id="search-results" {} };
    }

    let found = search(LISTINGS, &state.criteria);
    let noun = if found.len() == 1 { "listing" } else { "listings" };

    html! {
        div id="search-results" class="results" {
            div class="results-header" {
                div {
                    h3 { "Search Results" }
                    p class="muted" { (found.len()) " " (noun) " found" }
                    @if state.criteria.is_unconstrained() {
                        p class="muted small" { "Showing all listings" }
                    }
                }
                a href=(state.close_results().href("listings")) class="icon-btn" aria-label="Close results" { "✕" }
            }
            @if found.is_empty() {
                div class="results-empty" {
                    p class="strong" { "No listings found" }
                    p class="muted" { "Try adjusting your search filters" }
                }
            } @else {
                (sort_form(state))
                div class="listing-grid" {
                    @for listing in &found {
                        (listing_card(listing))
                    }
                }
            }
        }
    }
}

fn sort_form(state: &PageState) -> Markup {
    let carried: Vec<(&str, String)> = state
        .collapse_image()
        .to_pairs()
        .into_iter()
        .filter(|(k, _)| *k != "sort")
        .collect();

    html! {
        form class="sort-form" method="get" action="/#listings" {
            (hidden_inputs(&carried))
            label for="sort" { "Sort by:" }
            select id="sort" name="sort" onchange="this.form.submit()" {
                @for key in SortKey::ALL {
                    option value=(key.as_param()) selected[state.criteria.sort == key] { (key.label()) }
                }
            }
            noscript { button type="submit" class="btn" { "Apply" } }
        }
    }
}
