use crate::model::Project;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    pub total_beneficiaries: u64,
    pub active_projects: usize,
    pub total_projects: usize,
    /// Mean of the measured impacts. NaN when no project has been measured.
    pub avg_impact: f64,
}

/// Summary as displayed on the site.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub beneficiaries: String,
    pub total_beneficiaries: u64,
    pub active_projects: usize,
    pub total_projects: usize,
    pub avg_impact: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CategoryStats {
    pub category: String,
    pub projects: usize,
    pub beneficiaries: u64,
}

pub fn compute_stats(projects: &[Project]) -> Stats {
    let measured = projects
        .iter()
        .filter_map(|p| p.impact.percent())
        .collect::<Vec<_>>();
    // An empty set yields 0 / 0 = NaN, which is reported as is.
    let avg_impact = measured.iter().sum::<f64>() / measured.len() as f64;
    Stats {
        total_beneficiaries: projects.iter().map(|p| p.beneficiaries).sum(),
        active_projects: projects.iter().filter(|p| p.is_active()).count(),
        total_projects: projects.len(),
        avg_impact,
    }
}

/// Projects and beneficiaries per category, in order of first appearance.
pub fn by_category(projects: &[Project]) -> Vec<CategoryStats> {
    let mut categories: Vec<CategoryStats> = Vec::new();
    for p in projects {
        match categories.iter_mut().find(|c| c.category == p.category) {
            Some(c) => {
                c.projects += 1;
                c.beneficiaries += p.beneficiaries;
            }
            None => categories.push(CategoryStats {
                category: p.category.clone(),
                projects: 1,
                beneficiaries: p.beneficiaries,
            }),
        }
    }
    categories
}

impl Stats {
    pub fn beneficiaries_display(&self) -> String {
        group_thousands(self.total_beneficiaries)
    }

    pub fn avg_impact_display(&self) -> String {
        format!("{}%", one_decimal(self.avg_impact))
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            beneficiaries: self.beneficiaries_display(),
            total_beneficiaries: self.total_beneficiaries,
            active_projects: self.active_projects,
            total_projects: self.total_projects,
            avg_impact: self.avg_impact_display(),
        }
    }
}

/// Format with one decimal, rounding an exact half away from zero where
/// `{:.1}` would round it to even (80.25 gives "80.3", not "80.2").
fn one_decimal(value: f64) -> String {
    // From 2^53 on every f64 is an integer.
    if !value.is_finite() || value.abs() >= 9_007_199_254_740_992.0 {
        return format!("{value:.1}");
    }
    // 17 places keep the neighbours of a half apart from the half itself.
    let digits = format!("{:.17}", value.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let fraction = fraction.as_bytes();
    let mut tenths =
        whole.parse::<u64>().unwrap_or_default() * 10 + u64::from(fraction[0] - b'0');
    if fraction[1] >= b'5' {
        tenths += 1;
    }
    let sign = if value < 0.0 && tenths > 0 { "-" } else { "" };
    format!("{sign}{}.{}", tenths / 10, tenths % 10)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
