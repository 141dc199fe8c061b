//! Free-text search over projects.
//!
//! Matching is a case-insensitive substring test. Both sides are folded with
//! [`str::to_lowercase`], which applies Unicode lowercase mappings and agrees
//! with plain ASCII folding on ASCII input.

use crate::model::Project;

/// Return, in their original order, the projects whose name, location,
/// description or category contains `term`. An empty term matches everything.
pub fn filter<'a>(projects: &'a [Project], term: &str) -> Vec<&'a Project> {
    let needle = term.to_lowercase();
    projects.iter().filter(|p| matches(p, &needle)).collect()
}

/// Keep, in order, the projects whose location mentions `region`, such as
/// `"West Africa"` or `"South Asia"`.
pub fn in_region<'a>(projects: &[&'a Project], region: &str) -> Vec<&'a Project> {
    let needle = region.to_lowercase();
    projects
        .iter()
        .copied()
        .filter(|p| p.location.to_lowercase().contains(&needle))
        .collect()
}

/// `needle` must already be lowercase.
fn matches(project: &Project, needle: &str) -> bool {
    project
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
