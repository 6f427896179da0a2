use crate::domain::content::{AGENT, CONTACT};
use crate::templates::components::section_heading;
use maud::{html, Markup};

pub fn contact() -> Markup {
    html! {
        section id="contact" class="contact" {
            div class="container" {
                (section_heading(
                    "Get In Touch",
                    "Have questions? We'd love to hear from you. Send us a message and we'll respond as soon as possible.",
                ))
                div class="two-col" {
                    div {
                        // No submission endpoint: the form is presentational only.
                        form class="contact-form" onsubmit="return false;" {
                            div class="field" {
                                label for="contact-name" { "Name" }
                                input type="text" id="contact-name" name="name" placeholder="Your name";
                            }
                            div class="field" {
                                label for="contact-email" { "Email " span class="required" { "*" } }
                                input type="email" id="contact-email" name="email" placeholder="your@email.com" required;
                            }
                            div class="field" {
                                label for="contact-message" { "Message" }
                                textarea id="contact-message" name="message" rows="5"
                                    placeholder="Tell us about your real estate needs..." {}
                            }
                            button type="submit" class="btn primary" { "Send Message" }
                            p class="microcopy" {
                                "This site is protected by reCAPTCHA and the Google "
                                a href="#" { "Privacy Policy" }
                                " and "
                                a href="#" { "Terms of Service" }
                                " apply."
                            }
                        }
                        div class="chat-cta" {
                            p { "Prefer to chat?" }
                            a href=(CONTACT.whatsapp_href) target="_blank" rel="noopener noreferrer" class="btn whatsapp" {
                                "Message us on WhatsApp"
                            }
                        }
                    }
                    div class="contact-info" {
                        div class="card" {
                            h3 { "Contact Information" }
                            p class="muted" { (AGENT.name) " - " (AGENT.brokerage.to_lowercase()) }
                            dl {
                                dt { "Address" }
                                dd { (CONTACT.address) }
                                dt { "Phone" }
                                dd { a href=(CONTACT.phone_href) { (CONTACT.phone_display) } }
                            }
                        }
                        div class="card" {
                            h3 { "Office Hours" }
                            p class="strong" { (CONTACT.hours_days) }
                            p { (CONTACT.hours_time) }
                            p class="muted" { (CONTACT.hours_note) }
                        }
                    }
                }
            }
        }
    }
}
