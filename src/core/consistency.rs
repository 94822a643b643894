//! Consistency checks over per-board observations
//!
//! Every check returns all violations it finds so callers can report them
//! together before giving up.

use std::collections::BTreeMap;
use std::fmt;

use crate::core::format::format_version;
use crate::error::ConsistencyError;

/// Version a board contributes to a per-SoC vote
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellVersion {
    /// Raw recipe version
    Version(String),
    /// The package does not apply to the board
    NotApplicable,
}

impl CellVersion {
    /// Text shown in a table cell
    pub fn display(&self) -> String {
        match self {
            Self::Version(v) => format_version(v),
            Self::NotApplicable => "-".to_string(),
        }
    }
}

impl fmt::Display for CellVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Version(v) => f.write_str(v),
            Self::NotApplicable => f.write_str("-"),
        }
    }
}

/// Report every name observed with more than one distinct value
///
/// Conflicting values are listed in first-seen order.
pub fn check_uniform_versions<N, V>(observed: &BTreeMap<N, Vec<V>>) -> Vec<ConsistencyError>
where
    N: AsRef<str>,
    V: PartialEq + fmt::Display,
{
    let mut conflicts = Vec::new();

    for (name, values) in observed {
        let mut distinct: Vec<&V> = Vec::new();
        for value in values {
            if !distinct.contains(&value) {
                distinct.push(value);
            }
        }

        if distinct.len() > 1 {
            conflicts.push(ConsistencyError::VersionConflict {
                package: name.as_ref().to_string(),
                versions: distinct.iter().map(ToString::to_string).collect(),
            });
        }
    }

    conflicts
}

/// Report every member that appears in more than one group
///
/// Each violation names all groups owning the member.
pub fn check_no_multi_membership<G, M>(groups: &BTreeMap<G, Vec<M>>) -> Vec<ConsistencyError>
where
    G: AsRef<str>,
    M: AsRef<str>,
{
    let mut owners: Vec<(&str, Vec<&str>)> = Vec::new();

    for (group, members) in groups {
        for member in members {
            let member = member.as_ref();
            match owners.iter_mut().find(|(m, _)| *m == member) {
                Some((_, owning)) => {
                    if !owning.contains(&group.as_ref()) {
                        owning.push(group.as_ref());
                    }
                }
                None => owners.push((member, vec![group.as_ref()])),
            }
        }
    }

    owners
        .into_iter()
        .filter(|(_, owning)| owning.len() > 1)
        .map(|(member, owning)| ConsistencyError::MultiMembership {
            board: member.to_string(),
            groups: owning.into_iter().map(ToString::to_string).collect(),
        })
        .collect()
}

/// Pick the most frequent value among the votes of one group
///
/// Returns `Ok(None)` when nobody voted. A tie for the highest frequency
/// is an `AmbiguousMajority` error naming the tied values.
pub fn resolve_majority<M, V>(
    package: &str,
    group: &str,
    votes: &BTreeMap<M, V>,
) -> Result<Option<V>, ConsistencyError>
where
    V: Ord + Clone + fmt::Display,
{
    let mut histogram: BTreeMap<&V, usize> = BTreeMap::new();
    for value in votes.values() {
        *histogram.entry(value).or_insert(0) += 1;
    }

    let Some(most_frequent) = histogram.values().copied().max() else {
        return Ok(None);
    };

    let winners: Vec<&V> = histogram
        .iter()
        .filter(|(_, count)| **count == most_frequent)
        .map(|(value, _)| *value)
        .collect();

    match winners.as_slice() {
        [winner] => Ok(Some((*winner).clone())),
        tied => Err(ConsistencyError::AmbiguousMajority {
            package: package.to_string(),
            soc: group.to_string(),
            candidates: tied.iter().map(ToString::to_string).collect(),
        }),
    }
}
