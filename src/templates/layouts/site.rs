use crate::domain::content::{AGENT, NAV_LINKS};
use maud::{html, Markup, DOCTYPE};

pub fn site_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(format!("{} - {}, {}", AGENT.name, AGENT.brokerage, AGENT.headline));
                title { (title) }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                // Mobile menu ("sheet"); <details> keeps it open/closed without script.
                details class="sheet" {
                    summary class="sheet-trigger" aria-label="Open menu" { "☰" }
                    nav class="sheet-content" {
                        img src=(AGENT.logo) alt="marci_metzger_homes_logo";
                        ul {
                            @for (href, label) in NAV_LINKS {
                                li { a href=(href) { (label) } }
                            }
                        }
                        a href="#contact" class="pill primary" { "Let's Talk" }
                    }
                }
                (content)
            }
        }
    }
}

/// Horizontal navigation shown inside the hero on wide screens.
pub fn top_nav() -> Markup {
    html! {
        nav class="top-nav" {
            @for (href, label) in NAV_LINKS {
                a href=(href) { (label) }
            }
        }
    }
}
