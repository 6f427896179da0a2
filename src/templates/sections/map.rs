use crate::domain::content::OFFICE_MAP;
use crate::templates::components::section_heading;
use maud::{html, Markup};

pub fn map() -> Markup {
    html! {
        section id="map" class="map" {
            div class="container" {
                (section_heading("Visit Us", "Find us at our office location in Pahrump"))
                div
                    class="map-frame"
                    data-lat=(OFFICE_MAP.lat)
                    data-lng=(OFFICE_MAP.lng)
                    data-zoom=(OFFICE_MAP.zoom)
                {
                    iframe
                        title="Office location"
                        width="100%"
                        height="100%"
                        style="border: 0"
                        loading="lazy"
                        allowfullscreen
                        referrerpolicy="no-referrer-when-downgrade"
                        src=(OFFICE_MAP.embed_url) {}
                }
                p class="map-link" {
                    a href=(OFFICE_MAP.directions_url()) target="_blank" rel="noopener noreferrer" { "Open in Google Maps" }
                }
            }
        }
    }
}
