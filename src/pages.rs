use dioxus::prelude::*;

use home::Home;
use page_not_found::PageNotFound;
use projects::Projects;

mod home;
mod page_not_found;
mod projects;

#[derive(Clone, Routable, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[rustfmt::skip]
pub enum Pages {
    #[layout(NavBar)]
        #[route("/")]
        Home,
        #[route("/projects?:q")]
        Projects { q: String },
    #[end_layout]
    #[route("/:..route")]
    PageNotFound { route: Vec<String> }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        div { class: "nav-bar",
            Link { class: "nav-bar-tab", to: Pages::Home, "Home" }
            Link { class: "nav-bar-tab", to: Pages::Projects { q: String::new() }, "Projects" }
        }
        Outlet::<Pages> {}
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Pages;

    #[test]
    fn projects_route_parses_search_query() {
        let Ok(route) = Pages::from_str("/projects?q=zebra") else {
            panic!("route should parse");
        };
        assert_eq!(
            route,
            Pages::Projects {
                q: "zebra".to_string()
            }
        );
    }

    #[test]
    fn projects_route_defaults_to_empty_search() {
        let Ok(route) = Pages::from_str("/projects") else {
            panic!("route should parse");
        };
        assert_eq!(route, Pages::Projects { q: String::new() });
    }
}
