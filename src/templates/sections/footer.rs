use crate::domain::content::{AGENT, CONTACT, FOOTER_QUICK_LINKS, FOOTER_SERVICES};
use maud::{html, Markup};

pub fn footer(year: i32) -> Markup {
    html! {
        footer class="site-footer" {
            div class="container footer-grid" {
                div {
                    img class="footer-logo" src=(AGENT.logo) alt=(format!("{} Logo", AGENT.name));
                    p { "Your trusted real estate partner in Pahrump, Nevada." }
                }
                div {
                    h3 { "Quick Links" }
                    ul {
                        @for (href, label) in FOOTER_QUICK_LINKS {
                            li { a href=(href) { (label) } }
                        }
                    }
                }
                div {
                    h3 { "Services" }
                    ul {
                        @for label in FOOTER_SERVICES {
                            li { a href="#services" { (label) } }
                        }
                    }
                }
                div {
                    h3 { "Contact" }
                    ul {
                        li {
                            p class="muted" { "Phone" }
                            a href=(CONTACT.phone_href) { (CONTACT.phone_display) }
                        }
                        li {
                            p class="muted" { "Address" }
                            p { (CONTACT.address_short[0]) br; (CONTACT.address_short[1]) }
                        }
                    }
                }
            }
            div class="container footer-bottom" {
                p { "© " (year) " " (AGENT.name) " - " (AGENT.brokerage) ". All rights reserved." }
                div {
                    a href="#" { "Privacy Policy" }
                    a href="#" { "Terms of Service" }
                }
            }
        }
    }
}
