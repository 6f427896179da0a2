use crate::domain::content::GALLERY;
use crate::domain::PageState;
use crate::templates::components::section_heading;
use maud::{html, Markup};

pub fn gallery(state: &PageState) -> Markup {
    html! {
        section id="gallery" class="gallery" {
            div class="container" {
                (section_heading("Our Gallery", "Explore our beautiful properties and stunning Pahrump homes"))
                div class="gallery-track" {
                    @for (i, src) in GALLERY.iter().enumerate() {
                        a href=(state.expand_image(i).href("gallery")) class="gallery-item" {
                            img src=(src) alt=(format!("Gallery image {}", i + 1)) loading="lazy";
                        }
                    }
                }
            }
        }
        @if let Some(src) = state.expanded_image.and_then(|i| GALLERY.get(i)) {
            (lightbox(state, src))
        }
    }
}

fn lightbox(state: &PageState, src: &str) -> Markup {
    let close = state.collapse_image().href("gallery");

    html! {
        div class="lightbox" role="dialog" aria-modal="true" {
            a href=(close) class="lightbox-backdrop" aria-label="Close expanded image" {}
            div class="lightbox-frame" {
                img src=(src) alt="Expanded gallery image" width="1200" height="800";
                a href=(close) class="icon-btn lightbox-close" aria-label="Close expanded image" { "✕" }
            }
        }
    }
}
