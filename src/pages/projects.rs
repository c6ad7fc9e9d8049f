use dioxus::prelude::*;

use crate::api;
use crate::components::{ProjectList, SearchBar};
use crate::feed::Feed;
use crate::pages;

/// Project discovery page. The search term lives in the route, so results are
/// shareable and the feed refetches exactly when the term changes.
#[component]
pub fn Projects(q: ReadOnlySignal<String>) -> Element {
    rsx! {
        h1 { "Projects" }
        SearchBar {
            query: q(),
            on_search: move |term: String| {
                navigator().push(pages::Pages::Projects { q: term });
            },
        }
        ProjectsFeed { search: q() }
    }
}

/// Fetches the listing for `search` and renders it. Re-renders from unrelated
/// state reuse the in-flight or settled fetch; only a new search term issues a
/// new request, dropping the superseded one.
#[component]
pub fn ProjectsFeed(search: ReadOnlySignal<String>) -> Element {
    let fetched = use_resource(move || {
        let term = search();
        async move { api::fetch_projects(&term).await.map_err(|err| err.to_string()) }
    });

    rsx! {
        match Feed::from_fetch(fetched()) {
            Feed::Loading => rsx! {
                p { class: "feed-loading", "Loading..." }
            },
            Feed::Failed(err) => rsx! {
                p { style: "color: red", "Error: {err}" }
            },
            Feed::Loaded(projects) => rsx! {
                ProjectList { filter: projects.membership(), items: projects }
            },
        }
    }
}
