//! Search, region and sort controls applied together, as the listing page
//! and the `list` command do.

use crate::filter::{filter, in_region};
use crate::model::Project;
use crate::sort::{SortField, SortOrder, sort};
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Listing {
    pub search: String,
    pub region: Option<String>,
    pub sort: Option<SortField>,
    pub order: SortOrder,
}

impl Listing {
    /// Filter by search term and region, then sort when a sort field is set.
    /// Without a sort field the repository order is kept.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        let mut selected = filter(projects, &self.search);
        if let Some(region) = &self.region {
            selected = in_region(&selected, region);
        }
        match self.sort {
            Some(field) => sort(&selected, field, self.order),
            None => selected,
        }
    }
}
