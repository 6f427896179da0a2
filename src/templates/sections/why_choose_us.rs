use crate::domain::content::WHY_CHOOSE_US;
use crate::domain::PageState;
use crate::templates::components::section_heading;
use maud::{html, Markup};

pub fn why_choose_us(state: &PageState) -> Markup {
    let carousel = state.carousel();
    let active = WHY_CHOOSE_US.get(carousel.index());

    html! {
        section id="why-choose-us" class="why" {
            div class="container" {
                (section_heading("Why Choose Us", "Discover what sets us apart in the real estate market"))
                div class="two-col" {
                    div class="carousel" {
                        @if let Some(slide) = active {
                            img class="carousel-image" src=(slide.image) alt=(slide.title);
                        }
                        div class="carousel-controls" {
                            a href=(state.why_prev().href("why-choose-us")) class="icon-btn" aria-label="Previous image" { "‹" }
                            div class="dots" {
                                @for i in 0..carousel.len() {
                                    a.dot.active[i == carousel.index()]
                                        href=(state.why_go_to(i).href("why-choose-us"))
                                        aria-label=(format!("Go to image {}", i + 1))
                                    {}
                                }
                            }
                            a href=(state.why_next().href("why-choose-us")) class="icon-btn" aria-label="Next image" { "›" }
                        }
                    }
                    ol class="why-list" {
                        @for (i, item) in WHY_CHOOSE_US.iter().enumerate() {
                            li.current[i == carousel.index()] {
                                span class="why-number" { (i + 1) }
                                div {
                                    h3 { (item.title) }
                                    p class="muted" { (item.description) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
