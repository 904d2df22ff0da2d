//! Column name assignment under a case style

use super::types::CollisionPolicy;
use crate::case::CaseStyle;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Name used when a key converts to an empty identifier
const EMPTY_NAME_FALLBACK: &str = "field";

/// Convert every original key into `style`, resolving collisions per `policy`
///
/// The returned names are in the same order as `originals` and are unique.
pub fn assign_names(
    originals: &[&str],
    style: CaseStyle,
    policy: CollisionPolicy,
) -> Result<Vec<String>> {
    let bases: Vec<String> = originals
        .iter()
        .map(|original| {
            let name = style.apply(original);
            if name.is_empty() {
                style.apply(EMPTY_NAME_FALLBACK)
            } else {
                name
            }
        })
        .collect();

    let reserved: HashSet<&str> = bases.iter().map(String::as_str).collect();
    let mut taken: HashSet<String> = HashSet::with_capacity(bases.len());
    let mut names = Vec::with_capacity(bases.len());

    for (index, base) in bases.iter().enumerate() {
        if taken.insert(base.clone()) {
            names.push(base.clone());
            continue;
        }

        match policy {
            CollisionPolicy::Error => {
                let first = bases
                    .iter()
                    .position(|b| b == base)
                    .map_or(originals[index], |i| originals[i]);
                return Err(Error::collision(base, first, originals[index]));
            }
            CollisionPolicy::Suffix => {
                let separator = style.separator().map(String::from).unwrap_or_default();
                let mut counter = 2usize;
                let candidate = loop {
                    let candidate = format!("{base}{separator}{counter}");
                    if !reserved.contains(candidate.as_str()) && !taken.contains(&candidate) {
                        break candidate;
                    }
                    counter += 1;
                };
                tracing::debug!(
                    original = originals[index],
                    name = %candidate,
                    "Resolved field name collision with suffix"
                );
                taken.insert(candidate.clone());
                names.push(candidate);
            }
        }
    }

    Ok(names)
}
