use crate::domain::search::{distinct_locations, distinct_property_types};
use crate::domain::{PageState, LISTINGS};
use crate::templates::components::hidden_inputs;
use maud::{html, Markup};

// Keys owned by the visible controls below; everything else rides along hidden.
const FILTER_KEYS: [&str; 6] = ["location", "type", "bedrooms", "baths", "min_price", "max_price"];

pub fn search_form(state: &PageState) -> Markup {
    let criteria = &state.criteria;
    let carried: Vec<(&str, String)> = state
        .search()
        .collapse_image()
        .to_pairs()
        .into_iter()
        .filter(|(k, _)| !FILTER_KEYS.contains(k))
        .collect();

    let number = |v: Option<String>| v.unwrap_or_default();

    html! {
        form
            class="search-form"
            method="get"
            action="/#listings"
            hx-get="/listings/results"
            hx-target="#search-results"
            hx-swap="outerHTML"
        {
            div class="search-grid" {
                div class="field" {
                    label for="location" { "Location" }
                    select id="location" name="location" {
                        option value="" { "All Locations" }
                        @for location in distinct_locations(LISTINGS) {
                            option value=(location) selected[criteria.location.as_deref() == Some(location)] { (location) }
                        }
                    }
                }
                div class="field" {
                    label for="type" { "Property Type" }
                    select id="type" name="type" {
                        option value="" { "All Types" }
                        @for kind in distinct_property_types(LISTINGS) {
                            option value=(kind) selected[criteria.property_type.as_deref() == Some(kind)] { (kind) }
                        }
                    }
                }
                div class="field" {
                    label for="bedrooms" { "Min Bedrooms" }
                    input type="number" id="bedrooms" name="bedrooms" min="0" placeholder="Bedrooms"
                        value=(number(criteria.min_bedrooms.map(|n| n.to_string())));
                }
                div class="field" {
                    label for="baths" { "Min Bathrooms" }
                    input type="number" id="baths" name="baths" min="0" placeholder="Bathrooms"
                        value=(number(criteria.min_bathrooms.map(|n| n.to_string())));
                }
                div class="field" {
                    label for="min_price" { "Min Price" }
                    input type="number" id="min_price" name="min_price" min="0" placeholder="Min price"
                        value=(number(criteria.min_price.map(|n| n.to_string())));
                }
                div class="field" {
                    label for="max_price" { "Max Price" }
                    input type="number" id="max_price" name="max_price" min="0" placeholder="Max price"
                        value=(number(criteria.max_price.map(|n| n.to_string())));
                }
            }
            (hidden_inputs(&carried))
            div class="search-actions" {
                button type="submit" class="btn primary" { "Search Listings" }
                a href=(state.clear().href("listings")) class="btn outline" { "Clear Filters" }
            }
        }
    }
}
