use dioxus::prelude::*;

use crate::pages;

#[component]
pub fn PageNotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        h1 { "Page not found" }
        p { "Nothing lives at /{path}" }
        Link { to: pages::Pages::Home {}, "Back to the portal" }
    }
}
