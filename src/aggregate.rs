//! Consistency aggregator: merges every completed task into the final
//! report.
//!
//! This is where the run's verdict is decided. Staleness (an older version
//! of a reference still published somewhere) is a warning; content drift
//! under a fixed version, dead links, and failed tasks are errors. Tasks
//! are canonicalized by (url, branch) before anything is emitted, so the
//! report is byte-identical no matter which worker finished first.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::task::RepoTask;
use crate::types::{ContentHash, Location, Reference, format_locations};

/// The final output of a run: ordered diagnostic lines plus a verdict.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Report {
    /// Ordered, human-readable report lines.
    pub lines: Vec<String>,
    /// Overall verdict: false when any task failed, any reference content
    /// mismatched, or any dead link was found.
    pub ok: bool,
}

/// All locations publishing one `(name, version)` key with identical
/// content. The first reference seen for the key fixes the canonical hash.
struct Group {
    /// Canonical content hash for this key.
    hash: ContentHash,
    /// Every location that produced matching content.
    locations: Vec<Location>,
}

/// Merge all completed tasks into the final report.
///
/// Pure over its input: aggregating the same task list twice yields
/// byte-identical lines.
pub fn aggregate(tasks: &[RepoTask], verbose: bool) -> Report {
    let mut ordered: Vec<(String, &RepoTask)> = tasks
        .iter()
        .map(|t| (t.redacted_url(), t))
        .collect();
    ordered.sort_by(|a, b| (&a.0, &a.1.branch).cmp(&(&b.0, &b.1.branch)));

    let mut lines = Vec::new();
    let mut ok = true;

    // Pass 1: per-task diagnostics, prefixed so lines from different
    // repositories stay tellable apart.
    for (cleared, task) in &ordered {
        if task.failed {
            ok = false;
        }
        for diagnostic in &task.diagnostics {
            if !verbose && diagnostic.starts_with("VERB:") {
                continue;
            }
            lines.push(format!("[{cleared} / {}] {diagnostic}", task.branch));
        }
    }

    // Passes 2 and 3: highest version per name, and per-key groups.
    // References from failed tasks are partial by definition and excluded.
    let mut last_version: BTreeMap<&str, u64> = BTreeMap::new();
    let mut groups: BTreeMap<(&str, u64), Group> = BTreeMap::new();
    let mut dissenters: Vec<&Reference> = Vec::new();

    for (_, task) in &ordered {
        if task.failed {
            continue;
        }
        for reference in &task.references {
            let current = last_version.entry(reference.name.as_str()).or_insert(0);
            *current = (*current).max(reference.version);

            match groups.entry((reference.name.as_str(), reference.version)) {
                Entry::Vacant(slot) => {
                    slot.insert(Group {
                        hash: reference.hash.clone(),
                        locations: vec![reference.location.clone()],
                    });
                }
                Entry::Occupied(mut slot) => {
                    if slot.get().hash == reference.hash {
                        slot.get_mut().locations.push(reference.location.clone());
                    } else {
                        // Content drift under a fixed version: kept aside
                        // per physical location, reported in pass 5.
                        dissenters.push(reference);
                    }
                }
            }
        }
    }

    // Pass 4: staleness warnings. Groups at the highest version for their
    // name never warn; ties for the highest all count as current.
    for (key, group) in &groups {
        let (name, version) = *key;
        let newest = last_version.get(&name).copied().unwrap_or(version);
        if version >= newest {
            continue;
        }
        let newest_group = groups
            .get(&(name, newest))
            .expect("the highest version always has a group");
        lines.push(format!(
            "WARN: Reference \"{name}\" is outdated for files: {}. Current version: \"{version}\". \
             Last version: \"{newest}\" available on files: {}. Consider updating!",
            format_locations(&group.locations),
            format_locations(&newest_group.locations),
        ));
    }

    // Pass 5: content mismatches force failure.
    for reference in &dissenters {
        let canonical = groups
            .get(&(reference.name.as_str(), reference.version))
            .expect("a dissenter always has a canonical group");
        lines.push(format!(
            "ERR: Reference \"{}\" version \"{}\" at {} does not match the content defined at: {}.",
            reference.name,
            reference.version,
            reference.location,
            format_locations(&canonical.locations),
        ));
        ok = false;
    }

    // Pass 6: dead links force failure.
    for (cleared, task) in &ordered {
        for dead in &task.dead_links {
            lines.push(format!(
                "[{cleared} / {}] ERR: Dead link {} found in file {} (status {}).",
                task.branch, dead.link, dead.file, dead.status,
            ));
            ok = false;
        }
    }

    return Report { lines, ok };
}
