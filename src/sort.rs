//! Stable ordering of project listings.

use crate::model::Project;
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Beneficiaries,
    Status,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SortError {
    #[error("unknown sort field {0:?} (expected name, beneficiaries or status)")]
    Field(String),
    #[error("unknown sort order {0:?} (expected asc or desc)")]
    Order(String),
}

type Comparator = fn(&Project, &Project) -> Ordering;

impl SortField {
    fn comparator(self) -> Comparator {
        match self {
            SortField::Name => |a, b| collate(&a.name, &b.name),
            SortField::Beneficiaries => |a, b| a.beneficiaries.cmp(&b.beneficiaries),
            SortField::Status => |a, b| collate(a.status.label(), b.status.label()),
        }
    }

    /// Ascending comparison of two projects on this field.
    pub fn compare(self, a: &Project, b: &Project) -> Ordering {
        (self.comparator())(a, b)
    }
}

/// Order `projects` by `field`. The sort is stable in both directions:
/// `Desc` reverses the comparison, not the resulting sequence, so projects
/// with equal keys always keep their input order.
pub fn sort<'a>(projects: &[&'a Project], field: SortField, order: SortOrder) -> Vec<&'a Project> {
    let compare = field.comparator();
    let mut sorted = projects.to_vec();
    match order {
        SortOrder::Asc => sorted.sort_by(|a, b| compare(a, b)),
        SortOrder::Desc => sorted.sort_by(|a, b| compare(b, a)),
    }
    sorted
}

/// Compare labels the way an English-locale collation orders them:
/// letters compare case-insensitively first, and only labels differing
/// solely by case fall back to lowercase-before-uppercase.
fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    primary.then_with(|| {
        a.chars()
            .zip(b.chars())
            .find(|(x, y)| x != y)
            .map_or(Ordering::Equal, |(x, y)| {
                x.is_uppercase().cmp(&y.is_uppercase())
            })
    })
}

impl FromStr for SortField {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "beneficiaries" => Ok(SortField::Beneficiaries),
            "status" => Ok(SortField::Status),
            other => Err(SortError::Field(other.to_owned())),
        }
    }
}

impl FromStr for SortOrder {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(SortError::Order(other.to_owned())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortField::Name => "name",
            SortField::Beneficiaries => "beneficiaries",
            SortField::Status => "status",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Projects, Status};

    fn refs(projects: &[Project]) -> Vec<&Project> {
        projects.iter().collect()
    }

    fn names<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
        projects.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn by_name() {
        let projects = Projects::reference();
        let sorted = sort(&refs(&projects), SortField::Name, SortOrder::Asc);
        assert_eq!(
            names(&sorted),
            [
                "Clean Water Initiative",
                "Climate Resilience",
                "Digital Literacy",
                "Education for All",
                "Food Security Program",
                "Healthcare Access",
                "Renewable Energy Access",
                "Women Empowerment",
            ]
        );
        let sorted = sort(&refs(&projects), SortField::Name, SortOrder::Desc);
        assert_eq!(sorted[0].name, "Women Empowerment");
        assert_eq!(sorted[7].name, "Clean Water Initiative");
    }

    #[test]
    fn by_beneficiaries() {
        let projects = Projects::reference();
        let asc = sort(&refs(&projects), SortField::Beneficiaries, SortOrder::Asc);
        let counts = asc.iter().map(|p| p.beneficiaries).collect::<Vec<_>>();
        assert_eq!(
            counts,
            [25_000, 35_000, 45_000, 67_000, 78_000, 85_000, 95_000, 120_000]
        );
        // No ties in the reference dataset: descending is the exact reverse.
        let mut desc = sort(&refs(&projects), SortField::Beneficiaries, SortOrder::Desc);
        desc.reverse();
        assert_eq!(names(&asc), names(&desc));
    }

    #[test]
    fn status_sorts_alphabetically_and_stably() {
        let projects = Projects::reference();
        let asc = sort(&refs(&projects), SortField::Status, SortOrder::Asc);
        assert_eq!(
            asc.iter().map(|p| p.id.0).collect::<Vec<_>>(),
            [1, 4, 6, 2, 5, 7, 3, 8]
        );
        assert_eq!(asc[0].status, Status::Active);
        let desc = sort(&refs(&projects), SortField::Status, SortOrder::Desc);
        // Ties keep input order in descending sorts too.
        assert_eq!(
            desc.iter().map(|p| p.id.0).collect::<Vec<_>>(),
            [3, 8, 2, 5, 7, 1, 4, 6]
        );
    }

    #[test]
    fn input_is_untouched() {
        let projects = Projects::reference();
        let input = refs(&projects);
        let _ = sort(&input, SortField::Name, SortOrder::Desc);
        assert_eq!(input[0].name, "Clean Water Initiative");
    }

    #[test]
    fn collation() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Banana", "apple"), Ordering::Greater);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("Same", "Same"), Ordering::Equal);
        assert_eq!(collate("In Progress", "Planning"), Ordering::Less);
    }

    #[test]
    fn parse_controls() {
        assert_eq!("beneficiaries".parse(), Ok(SortField::Beneficiaries));
        assert_eq!("desc".parse(), Ok(SortOrder::Desc));
        assert_eq!(
            "impact".parse::<SortField>(),
            Err(SortError::Field("impact".into()))
        );
        assert_eq!("up".parse::<SortOrder>(), Err(SortError::Order("up".into())));
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }
}
