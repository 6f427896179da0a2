use crate::domain::content::AGENT;
use maud::{html, Markup};

pub fn profile() -> Markup {
    html! {
        section id="profile" class="profile" {
            div class="container two-col" {
                div class="profile-copy" {
                    p class="eyebrow primary" { (AGENT.tagline) }
                    h1 { (AGENT.name.to_uppercase()) }
                    p class="subtitle primary" { (AGENT.brokerage) }
                    p class="muted" { (AGENT.bio) }
                    a href="#contact" class="btn primary" { "Get In Touch" }
                }
                div class="profile-media" {
                    img src=(AGENT.portrait) alt=(format!("Profile Image of {}", AGENT.name));
                    blockquote class="quote" {
                        p { "\u{201c}" (AGENT.quote) "\u{201d}" }
                        footer { "— " (AGENT.name) }
                    }
                }
            }
        }
    }
}
