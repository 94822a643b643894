//! Aggregation of board-level records into classes
//!
//! Boards are bucketed by SoC or bootloader, and each bucket is reduced to
//! a single representative package version.

use regex::Regex;
use std::collections::BTreeMap;

use crate::core::consistency::{
    check_no_multi_membership, check_uniform_versions, resolve_majority, CellVersion,
};
use crate::core::dataset::{BoardRecord, Dataset, BAREBOX, DEFAULT_BOOTLOADER};
use crate::error::ConsistencyError;

/// Boards grouped under a shared key, in dataset order
pub type Buckets<'a, K> = BTreeMap<K, Vec<&'a str>>;

/// Bucket boards by the keys a classifier assigns them
///
/// A board the classifier returns no key for is left out of every bucket.
pub fn group_by_shared_value<'a, K, F>(dataset: &'a Dataset, classifier: F) -> Buckets<'a, K>
where
    K: Ord,
    F: Fn(&str, &BoardRecord) -> Vec<K>,
{
    let mut buckets: Buckets<'a, K> = BTreeMap::new();
    for (name, board) in dataset.boards() {
        for key in classifier(name, board) {
            buckets.entry(key).or_default().push(name);
        }
    }
    buckets
}

/// Bootloader tables a board is documented in
///
/// Boards without an override boot u-boot. Boards with a barebox recipe
/// selected either by override or as the bootloader provider are barebox
/// boards. A board may be in both classes or in none.
pub fn bootloader_classes(board: &BoardRecord) -> Vec<&'static str> {
    let mut classes = Vec::new();
    if board.uses_default_bootloader() {
        classes.push(DEFAULT_BOOTLOADER);
    }
    if board.recipe(BAREBOX).is_some() && board.uses_bootloader(BAREBOX) {
        classes.push(BAREBOX);
    }
    classes
}

/// Bucket boards under each known SoC they belong to
///
/// Every known SoC gets a bucket, possibly empty. A board found under more
/// than one SoC is an error; all such boards are reported.
pub fn soc_membership<'a>(
    dataset: &'a Dataset,
    socs: &[String],
) -> Result<Buckets<'a, String>, Vec<ConsistencyError>> {
    let mut buckets = group_by_shared_value(dataset, |_, board| {
        socs.iter()
            .filter(|soc| board.in_soc_family(soc))
            .cloned()
            .collect()
    });
    for soc in socs {
        buckets.entry(soc.clone()).or_default();
    }

    let conflicts = check_no_multi_membership(&buckets);
    if conflicts.is_empty() {
        Ok(buckets)
    } else {
        Err(conflicts)
    }
}

/// Check whether a compatible-machine pattern accepts one of the board's SoCs
///
/// The pattern must match at the start of a SoC token but need not consume
/// all of it, so `mx6` accepts `mx6q`.
pub fn is_compatible_machine(board: &BoardRecord, pattern: &str) -> Result<bool, regex::Error> {
    let re = Regex::new(&format!("^(?:{pattern})"))?;
    Ok(board.soc_tokens().any(|soc| re.is_match(soc)))
}

/// Version a board contributes for a package
fn board_cell(
    dataset: &Dataset,
    board: &str,
    package: &str,
) -> Result<CellVersion, ConsistencyError> {
    let missing = || ConsistencyError::MissingRecipe {
        board: board.to_string(),
        recipe: package.to_string(),
    };
    let record = dataset.get(board).ok_or_else(missing)?;
    let recipe = record.recipe(package).ok_or_else(missing)?;
    let Some(pattern) = recipe.compatible_machine.as_deref() else {
        return Ok(CellVersion::Version(recipe.version.clone()));
    };

    let compatible =
        is_compatible_machine(record, pattern).map_err(|e| ConsistencyError::InvalidPattern {
            package: package.to_string(),
            board: board.to_string(),
            pattern: pattern.to_string(),
            error: e.to_string(),
        })?;

    Ok(if compatible {
        CellVersion::Version(recipe.version.clone())
    } else {
        CellVersion::NotApplicable
    })
}

/// Resolve one version of a package per SoC
///
/// Boards of each SoC vote with their recipe version, or with
/// [`CellVersion::NotApplicable`] when the package's compatible-machine
/// excludes them. An SoC without boards resolves to not applicable.
pub fn per_soc_package_version(
    dataset: &Dataset,
    membership: &Buckets<'_, String>,
    package: &str,
) -> Result<BTreeMap<String, CellVersion>, Vec<ConsistencyError>> {
    let mut versions = BTreeMap::new();
    let mut errors = Vec::new();

    for (soc, boards) in membership {
        let mut votes: BTreeMap<&str, CellVersion> = BTreeMap::new();
        for board in boards {
            match board_cell(dataset, board, package) {
                Ok(cell) => {
                    votes.insert(*board, cell);
                }
                Err(e) => errors.push(e),
            }
        }

        match resolve_majority(package, soc, &votes) {
            Ok(Some(cell)) => {
                tracing::debug!("{package} on {soc}: {cell} ({} boards)", votes.len());
                versions.insert(soc.clone(), cell);
            }
            Ok(None) => {
                versions.insert(soc.clone(), CellVersion::NotApplicable);
            }
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(versions)
    } else {
        Err(errors)
    }
}

/// Resolve the single version of a package every board must share
///
/// Divergent versions and boards restricting the package with a
/// compatible-machine are both reported. Returns `Ok(None)` for an empty
/// dataset.
pub fn uniform_package_version(
    dataset: &Dataset,
    package: &str,
) -> Result<Option<String>, Vec<ConsistencyError>> {
    let mut observed: Vec<&str> = Vec::new();
    let mut errors = Vec::new();

    for (name, _) in dataset.boards() {
        match dataset.require_recipe(name, package) {
            Ok(recipe) => observed.push(&recipe.version),
            Err(e) => errors.push(e),
        }
    }

    let mut by_package = BTreeMap::new();
    by_package.insert(package, observed);
    errors.extend(check_uniform_versions(&by_package));

    for (name, board) in dataset.boards() {
        if let Some(pattern) = board
            .recipe(package)
            .and_then(|r| r.compatible_machine.as_deref())
        {
            errors.push(ConsistencyError::RestrictionViolation {
                package: package.to_string(),
                board: name.to_string(),
                pattern: pattern.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(by_package
            .remove(package)
            .and_then(|versions| versions.first().map(ToString::to_string)))
    } else {
        Err(errors)
    }
}
