use super::{Impact, Project, ProjectId, Status};

type Row = (
    u32,
    &'static str,
    &'static str,
    &'static str,
    u64,
    Status,
    Impact,
    &'static str,
    &'static str,
    &'static str,
);

const ROWS: [Row; 8] = [
    (
        1,
        "Clean Water Initiative",
        "Sustainable water infrastructure and purification systems",
        "Kenya, East Africa",
        45_000,
        Status::Active,
        Impact::Measured(92.0),
        "Infrastructure",
        "💧",
        "from-blue-500 to-cyan-500",
    ),
    (
        2,
        "Education for All",
        "Digital learning platform with AI-powered tutoring",
        "Bangladesh, South Asia",
        120_000,
        Status::InProgress,
        Impact::Measured(87.0),
        "Education",
        "📚",
        "from-purple-500 to-pink-500",
    ),
    (
        3,
        "Healthcare Access",
        "Mobile clinic deployment with telemedicine",
        "Rural Brazil",
        25_000,
        Status::Planning,
        Impact::NotMeasured,
        "Healthcare",
        "🏥",
        "from-green-500 to-emerald-500",
    ),
    (
        4,
        "Food Security Program",
        "Agricultural development and food distribution",
        "Mali, West Africa",
        78_000,
        Status::Active,
        Impact::Measured(89.0),
        "Agriculture",
        "🌾",
        "from-amber-500 to-orange-500",
    ),
    (
        5,
        "Digital Literacy",
        "Technology training and digital skills development",
        "Philippines, Southeast Asia",
        95_000,
        Status::InProgress,
        Impact::Measured(76.0),
        "Education",
        "💻",
        "from-indigo-500 to-purple-500",
    ),
    (
        6,
        "Renewable Energy Access",
        "Solar power installation for rural communities",
        "Ghana, West Africa",
        35_000,
        Status::Active,
        Impact::Measured(95.0),
        "Infrastructure",
        "☀️",
        "from-yellow-500 to-amber-500",
    ),
    (
        7,
        "Women Empowerment",
        "Skills training and microfinance initiatives",
        "India, South Asia",
        85_000,
        Status::InProgress,
        Impact::Measured(83.0),
        "Economic Development",
        "👩‍💼",
        "from-rose-500 to-pink-500",
    ),
    (
        8,
        "Climate Resilience",
        "Disaster preparedness and climate adaptation",
        "Indonesia, Southeast Asia",
        67_000,
        Status::Planning,
        Impact::NotMeasured,
        "Environment",
        "🌱",
        "from-teal-500 to-green-500",
    ),
];

/// The projects published on the site.
pub fn projects() -> Vec<Project> {
    ROWS.iter()
        .map(
            |&(id, name, description, location, beneficiaries, status, impact, category, icon, color)| {
                Project {
                    id: ProjectId(id),
                    name: name.into(),
                    description: description.into(),
                    location: location.into(),
                    beneficiaries,
                    status,
                    impact,
                    category: category.into(),
                    icon: icon.into(),
                    color: color.into(),
                }
            },
        )
        .collect()
}
