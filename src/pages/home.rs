use dioxus::prelude::*;

use crate::pages;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "hero",
            h1 { "NEAR Horizon" }
            p { "An open directory of early-stage projects building on NEAR." }
            Link {
                class: "hero-cta",
                to: pages::Pages::Projects { q: String::new() },
                "Browse projects"
            }
        }
    }
}
