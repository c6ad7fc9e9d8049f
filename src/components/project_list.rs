use dioxus::prelude::*;

use crate::components::ProjectCard;
use crate::feed::{MembershipFilter, ProjectSet};

#[derive(Props, PartialEq, Clone)]
pub struct ProjectListProps {
    pub items: ProjectSet,
    pub filter: MembershipFilter,
}

/// Renders one card per account id that passes the filter, in listing order.
pub fn ProjectList(props: ProjectListProps) -> Element {
    let count = props.items.len();
    rsx! {
        div { class: "project-list",
            if props.items.is_empty() {
                p { class: "project-list-empty", "No projects matched this search." }
            } else {
                p { class: "project-list-count", "{count} projects" }
            }
            for id in props.items.iter().filter(|id| props.filter.allows(id)) {
                ProjectCard { account_id: id.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::prelude::*;

    use super::ProjectList;
    use crate::feed::ProjectSet;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_a_card_per_listed_account() {
        fn app() -> Element {
            let items = ProjectSet::new(["alice.near", "bob.near"].map(String::from));
            let filter = items.membership();
            rsx! {
                ProjectList { items, filter }
            }
        }
        let html = render(app);
        assert!(html.contains("alice.near"), "missing alice.near in: {html}");
        assert!(html.contains("bob.near"), "missing bob.near in: {html}");
    }

    #[test]
    fn filter_drops_accounts_outside_the_membership() {
        fn app() -> Element {
            let items = ProjectSet::new(["alice.near", "bob.near"].map(String::from));
            let filter = ProjectSet::new(["alice.near".to_string()]).membership();
            rsx! {
                ProjectList { items, filter }
            }
        }
        let html = render(app);
        assert!(html.contains("alice.near"), "missing alice.near in: {html}");
        assert!(!html.contains("bob.near"), "bob.near should be filtered out of: {html}");
    }

    #[test]
    fn empty_set_renders_the_empty_state_not_cards() {
        fn app() -> Element {
            let items = ProjectSet::default();
            let filter = items.membership();
            rsx! {
                ProjectList { items, filter }
            }
        }
        let html = render(app);
        assert!(html.contains("No projects matched"), "missing empty state in: {html}");
    }
}
