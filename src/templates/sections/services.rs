use crate::domain::content::{EMBLEMS, SERVICES};
use crate::templates::components::section_heading;
use maud::{html, Markup};

pub fn emblems() -> Markup {
    html! {
        section id="emblems" class="emblems" {
            div class="emblem-row" {
                @for emblem in EMBLEMS {
                    img alt=(emblem.name) src=(emblem.image);
                }
            }
        }
    }
}

pub fn services() -> Markup {
    html! {
        section id="services" class="services" {
            div class="container" {
                (section_heading("Our Services", "Comprehensive real estate solutions tailored to your needs"))
                @for (i, service) in SERVICES.iter().enumerate() {
                    // Every other row puts the image on the right.
                    div.service-row.flipped[i % 2 == 1] {
                        div class="service-media" {
                            img src=(service.image) alt=(service.title);
                        }
                        div class="service-copy" {
                            h3 { (service.title) }
                            p class="muted" { (service.description) }
                            a href="#contact" class="btn outline" { "Learn More" }
                        }
                    }
                }
            }
        }
    }
}
