use chips::filter::filter;
use chips::model::{Impact, Project, ProjectId, Status};
use chips::sort::{SortField, SortOrder, sort};
use chips::stats::compute_stats;
use proptest::prelude::*;
use std::cmp::Ordering;

fn status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Active),
        Just(Status::InProgress),
        Just(Status::Planning)
    ]
}

fn impact() -> impl Strategy<Value = Impact> {
    prop_oneof![Just(Impact::NotMeasured), (0u32..=100).prop_map(|p| Impact::Measured(p.into()))]
}

/// Projects with ids 1..=n, small alphabets so that searches and ties hit.
fn projects() -> impl Strategy<Value = Vec<Project>> {
    prop::collection::vec(
        (
            "[a-cA-C ]{1,8}",
            "[a-c ]{0,8}",
            "[a-cA-C, ]{0,8}",
            0u64..5,
            status(),
            impact(),
            "[a-c]{0,4}",
        ),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .zip(1..)
            .map(
                |((name, description, location, beneficiaries, status, impact, category), id)| {
                    Project {
                        id: ProjectId(id),
                        name,
                        description,
                        location,
                        beneficiaries,
                        status,
                        impact,
                        category,
                        icon: String::new(),
                        color: String::new(),
                    }
                },
            )
            .collect()
    })
}

fn field() -> impl Strategy<Value = SortField> {
    prop_oneof![
        Just(SortField::Name),
        Just(SortField::Beneficiaries),
        Just(SortField::Status)
    ]
}

fn order() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Asc), Just(SortOrder::Desc)]
}

fn contains(project: &Project, term: &str) -> bool {
    let term = term.to_lowercase();
    [
        &project.name,
        &project.location,
        &project.description,
        &project.category,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&term))
}

fn tied(a: &Project, b: &Project, field: SortField) -> bool {
    match field {
        SortField::Name => a.name == b.name,
        SortField::Beneficiaries => a.beneficiaries == b.beneficiaries,
        SortField::Status => a.status == b.status,
    }
}

proptest! {
    /// Returned projects match, rejected projects do not, order is kept.
    #[test]
    fn filter_partitions(projects in projects(), term in "[a-cA-C]{0,3}") {
        let found = filter(&projects, &term);
        prop_assert!(found.iter().all(|p| contains(p, &term)));
        let expected = projects.iter().filter(|p| contains(p, &term)).map(|p| p.id).collect::<Vec<_>>();
        prop_assert_eq!(found.iter().map(|p| p.id).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn empty_term_keeps_everything(projects in projects()) {
        let found = filter(&projects, "");
        prop_assert_eq!(found.len(), projects.len());
        prop_assert!(found.iter().zip(&projects).all(|(a, b)| a.id == b.id));
    }

    /// Output is ordered in the requested direction and equal keys keep
    /// their input order.
    #[test]
    fn sort_is_ordered_and_stable(projects in projects(), field in field(), order in order()) {
        let input = projects.iter().collect::<Vec<_>>();
        let sorted = sort(&input, field, order);
        let mut ids = sorted.iter().map(|p| p.id).collect::<Vec<_>>();
        ids.sort();
        prop_assert_eq!(ids, projects.iter().map(|p| p.id).collect::<Vec<_>>());
        let out_of_order = match order {
            SortOrder::Asc => Ordering::Greater,
            SortOrder::Desc => Ordering::Less,
        };
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert_ne!(field.compare(a, b), out_of_order, "{} before {}", a.id, b.id);
            if tied(a, b, field) {
                // Ids follow input order.
                prop_assert!(a.id < b.id);
            }
        }
    }

    #[test]
    fn beneficiaries_desc_is_reversed_asc_without_ties(mut projects in projects()) {
        for (n, p) in projects.iter_mut().enumerate() {
            p.beneficiaries = (n as u64 * 7919) % 1009;
        }
        let input = projects.iter().collect::<Vec<_>>();
        let mut asc = sort(&input, SortField::Beneficiaries, SortOrder::Asc);
        let desc = sort(&input, SortField::Beneficiaries, SortOrder::Desc);
        asc.reverse();
        prop_assert_eq!(
            asc.iter().map(|p| p.id).collect::<Vec<_>>(),
            desc.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn stats_totals(projects in projects()) {
        let stats = compute_stats(&projects);
        prop_assert_eq!(stats.total_projects, projects.len());
        prop_assert_eq!(stats.total_beneficiaries, projects.iter().map(|p| p.beneficiaries).sum::<u64>());
        prop_assert_eq!(stats.active_projects, projects.iter().filter(|p| p.status == Status::Active).count());
        let measured = projects.iter().filter(|p| p.impact.is_measured()).count();
        prop_assert_eq!(stats.avg_impact.is_nan(), measured == 0);
    }
}
