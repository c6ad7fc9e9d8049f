//! Fetch lifecycle state for the project feed.
//!
//! The listing endpoint returns an ordered array of account ids. [`ProjectSet`]
//! keeps that order (first occurrence wins on duplicates) while supporting the
//! membership test the list widget filters with.

use std::collections::HashSet;

/// Ordered collection of project account ids, replaced wholesale on each fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectSet {
    ids: Vec<String>,
    index: HashSet<String>,
}

impl ProjectSet {
    pub fn new(ids: impl IntoIterator<Item = String>) -> Self {
        let mut set = Self::default();
        for id in ids {
            if set.index.insert(id.clone()) {
                set.ids.push(id);
            }
        }
        set
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Membership predicate over this set, for the list widget's `filter` slot.
    pub fn membership(&self) -> MembershipFilter {
        MembershipFilter {
            members: self.index.clone(),
        }
    }
}

/// Accepts exactly the account ids that were present in the fetched set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MembershipFilter {
    members: HashSet<String>,
}

impl MembershipFilter {
    pub fn allows(&self, id: &str) -> bool {
        self.members.contains(id)
    }
}

/// Render state of the feed. `Loaded` is the only state carrying projects, so
/// the list can never render before a response has arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum Feed {
    Loading,
    Loaded(ProjectSet),
    Failed(String),
}

impl Feed {
    /// Collapse the raw outcome of the listing request into a render state.
    /// `None` means the request has not resolved yet.
    pub fn from_fetch(fetch: Option<Result<Vec<String>, String>>) -> Self {
        match fetch {
            None => Feed::Loading,
            Some(Ok(ids)) => Feed::Loaded(ProjectSet::new(ids)),
            Some(Err(err)) => Feed::Failed(err),
        }
    }
}
