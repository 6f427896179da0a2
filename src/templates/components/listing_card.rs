use crate::domain::Listing;
use maud::{html, Markup};

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        article class="listing-card" {
            div class="listing-banner" {
                p { (listing.property_type) }
            }
            div class="listing-body" {
                div {
                    h3 { (listing.location) }
                    p class="muted" { (listing.property_type) }
                }
                div class="listing-stats" {
                    div {
                        p class="stat" { (listing.bedrooms) }
                        p class="muted" { (listing.bedrooms_label()) }
                    }
                    div {
                        p class="stat" { (listing.bathrooms_display()) }
                        p class="muted" { (listing.bathrooms_label()) }
                    }
                }
                div class="listing-footer" {
                    p class="price" { (listing.price_display()) }
                    a href="#contact" class="btn" { "View Details" }
                }
            }
        }
    }
}
