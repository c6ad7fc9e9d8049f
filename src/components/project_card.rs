use dioxus::prelude::*;

use crate::api;

/// Self-contained card for one project. The account id renders immediately;
/// name and tagline arrive from the project's profile once it loads.
#[component]
pub fn ProjectCard(account_id: ReadOnlySignal<String>) -> Element {
    let profile = use_resource(move || {
        let id = account_id();
        async move { api::fetch_project(&id).await.map_err(|err| err.to_string()) }
    });

    let detail_url = format!(
        "https://near.org/{}/widget/Index?tab=project&accountId={}",
        api::PORTAL_OWNER,
        account_id()
    );

    let profile_view = match &*profile.read() {
        None => rsx! {
            p { class: "project-card-tagline", "..." }
        },
        Some(Err(_)) => rsx! {
        },
        Some(Ok(profile)) => {
            let name = profile.name.clone().unwrap_or_else(|| account_id());
            let tagline = profile.tagline.clone().unwrap_or_default();
            rsx! {
                p { class: "project-card-name", "{name}" }
                p { class: "project-card-tagline", "{tagline}" }
            }
        }
    };

    rsx! {
        div { class: "project-card",
            a { class: "project-card-link", href: "{detail_url}", target: "_blank",
                h3 { class: "project-card-account", "{account_id}" }
            }
            {profile_view}
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::prelude::*;

    use super::ProjectCard;

    #[test]
    fn shows_the_account_id_while_the_profile_loads() {
        fn app() -> Element {
            rsx! {
                ProjectCard { account_id: "alice.near" }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("alice.near"), "missing account id in: {html}");
    }
}
