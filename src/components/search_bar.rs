use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SearchBarProps {
    pub query: String,
    pub on_search: EventHandler<String>,
}

/// Controlled search input; every edit is reported through `on_search`.
pub fn SearchBar(props: SearchBarProps) -> Element {
    let on_search = props.on_search;
    rsx! {
        div { class: "search-bar",
            input {
                class: "search-bar-input",
                r#type: "search",
                placeholder: "Search projects...",
                value: "{props.query}",
                oninput: move |evt| on_search.call(evt.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::prelude::*;

    use super::SearchBar;

    #[test]
    fn renders_the_current_query() {
        fn app() -> Element {
            rsx! {
                SearchBar { query: "zero knowledge", on_search: move |_| {} }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("zero knowledge"), "missing query in: {html}");
        assert!(html.contains("Search projects..."), "missing placeholder in: {html}");
    }
}
