use crate::types::{Contributor, Repository};
use std::collections::HashMap;

/// Repositories that count toward the tally.
pub fn non_fork(repos: &[Repository]) -> impl Iterator<Item = &Repository> {
    repos.iter().filter(|repo| !repo.fork)
}

/// Contributions summed per login across repositories.
///
/// The first record seen for a login is kept whole; later sightings only add
/// to its `contributions`. Entries remember the order they were first seen in,
/// which is the tie-break order when ranking.
#[derive(Debug, Default, Clone)]
pub struct ContributionTally {
    entries: Vec<Contributor>,
    index: HashMap<String, usize>,
}

impl ContributionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one contributor in. Returns `false` if it was not a user account.
    pub fn add(&mut self, contributor: Contributor) -> bool {
        if !contributor.is_user() {
            return false;
        }

        match self.index.get(&contributor.login).copied() {
            Some(slot) => {
                let existing = &mut self.entries[slot];
                existing.contributions = existing
                    .contributions
                    .saturating_add(contributor.contributions);
            }
            None => {
                self.index
                    .insert(contributor.login.clone(), self.entries.len());
                self.entries.push(contributor);
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, login: &str) -> Option<&Contributor> {
        self.index.get(login).map(|&slot| &self.entries[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contributor> {
        self.entries.iter()
    }

    /// Highest totals first, at most `limit` of them.
    pub fn into_ranked(self, limit: usize) -> Vec<Contributor> {
        let mut ranked = self.entries;
        // sort_by is stable: equal totals stay in first-seen order
        ranked.sort_by(|a, b| b.contributions.cmp(&a.contributions));
        ranked.truncate(limit);
        ranked
    }
}

impl Extend<Contributor> for ContributionTally {
    fn extend<I: IntoIterator<Item = Contributor>>(&mut self, iter: I) {
        for contributor in iter {
            self.add(contributor);
        }
    }
}
