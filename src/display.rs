use crate::model::Project;
use crate::stats::{CategoryStats, Stats};

pub fn display_projects(projects: &[&Project]) {
    if projects.is_empty() {
        println!("No matching projects.");
        return;
    }
    for p in projects {
        println!("{} {} [{}]", p.icon, p.name, p.status);
        println!("  - location: {}", p.location);
        println!("  - category: {}", p.category);
        println!("  - beneficiaries: {}", p.beneficiaries);
        println!("  - impact: {}", p.impact);
        println!();
    }
    println!("{} project(s)", projects.len());
}

pub fn display_stats(stats: &Stats) {
    println!(
        "Projects active/total: {}/{}",
        stats.active_projects, stats.total_projects
    );
    println!("Beneficiaries: {}", stats.beneficiaries_display());
    println!("Average impact: {}", stats.avg_impact_display());
}

pub fn display_categories(categories: &[CategoryStats]) {
    if !categories.is_empty() {
        println!("By category:");
        for c in categories {
            println!(
                "  - {}: {} project(s), {} beneficiaries",
                c.category, c.projects, c.beneficiaries
            );
        }
    }
}
