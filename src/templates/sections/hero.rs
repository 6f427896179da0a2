use crate::domain::content::AGENT;
use crate::templates::layouts::site::top_nav;
use maud::{html, Markup};

pub fn hero() -> Markup {
    html! {
        section id="home" class="hero" style=(format!("background-image: url('{}')", AGENT.hero_image)) {
            div class="hero-overlay" {}
            div class="hero-inner" {
                img class="hero-logo" src=(AGENT.logo) alt="marci_metzger_homes_logo";
                (top_nav())
                div class="hero-copy" {
                    p class="eyebrow" { (AGENT.name.to_uppercase()) " - " (AGENT.brokerage.to_uppercase()) }
                    p class="hero-title" { (AGENT.headline) }
                    a href="#contact" class="pill primary" { "Let's Talk" }
                }
            }
        }
    }
}
