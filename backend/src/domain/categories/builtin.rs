//! Built-in category list used when no remote table is configured.

use std::sync::OnceLock;

use tracing::error;

use super::record::ProcessCategory::{Emergency, Operational, Strategic, Systemic};
use super::record::Timeframe::{Annual, Daily, Monthly, MultiYear, RealTime, Weekly};
use super::record::{CategoryRecord, CategoryRecordDraft, ProcessCategory, Timeframe};

struct Seed {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    icon: &'static str,
    category: ProcessCategory,
    timeframe: Timeframe,
}

const fn seed(
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    icon: &'static str,
    category: ProcessCategory,
    timeframe: Timeframe,
) -> Seed {
    Seed {
        name,
        slug,
        description,
        icon,
        category,
        timeframe,
    }
}

const SEEDS: [Seed; 21] = [
    seed(
        "Emergency Shelter Operations",
        "emergency-shelter-operations",
        "Opening, staffing and coordinating emergency beds during crises and severe weather.",
        "🏠",
        Emergency,
        RealTime,
    ),
    seed(
        "Street Outreach",
        "street-outreach",
        "Meeting people where they are with food, water, first aid and a route into services.",
        "🚶",
        Emergency,
        Daily,
    ),
    seed(
        "Crisis Intervention",
        "crisis-intervention",
        "De-escalation, mental health response and immediate safety planning.",
        "🆘",
        Emergency,
        RealTime,
    ),
    seed(
        "Extreme Weather Response",
        "extreme-weather-response",
        "Activating warming and cooling centres when temperatures turn dangerous.",
        "🌡️",
        Emergency,
        RealTime,
    ),
    seed(
        "Emergency Food Distribution",
        "emergency-food-distribution",
        "Getting meals and groceries to people who need them today.",
        "🍲",
        Emergency,
        Daily,
    ),
    seed(
        "Coordinated Entry",
        "coordinated-entry",
        "Assessing needs and matching people to housing through a single prioritised list.",
        "📋",
        Operational,
        Daily,
    ),
    seed(
        "Case Management",
        "case-management",
        "Ongoing one-to-one support that helps people reach and keep stable housing.",
        "🤝",
        Operational,
        Weekly,
    ),
    seed(
        "Housing Placement",
        "housing-placement",
        "Finding units, working with landlords and moving people into homes.",
        "🔑",
        Operational,
        Weekly,
    ),
    seed(
        "Benefits Enrollment",
        "benefits-enrollment",
        "Helping people apply for the income, health and food assistance they qualify for.",
        "🧾",
        Operational,
        Weekly,
    ),
    seed(
        "Volunteer Coordination",
        "volunteer-coordination",
        "Recruiting, training and scheduling volunteers across programs.",
        "🙋",
        Operational,
        Weekly,
    ),
    seed(
        "Data Collection & HMIS",
        "data-collection-hmis",
        "Recording services and outcomes in the homeless management information system.",
        "💾",
        Operational,
        Daily,
    ),
    seed(
        "Point-in-Time Count",
        "point-in-time-count",
        "Planning and running the yearly count of people experiencing homelessness.",
        "📊",
        Strategic,
        Annual,
    ),
    seed(
        "Funding & Grants",
        "funding-grants",
        "Finding, writing and reporting on the grants that keep programs running.",
        "💰",
        Strategic,
        Annual,
    ),
    seed(
        "Community Partnerships",
        "community-partnerships",
        "Building coalitions between nonprofits, faith groups, businesses and government.",
        "🌐",
        Strategic,
        Monthly,
    ),
    seed(
        "Program Evaluation",
        "program-evaluation",
        "Measuring what works and improving services with evidence.",
        "📈",
        Strategic,
        Monthly,
    ),
    seed(
        "Capacity Planning",
        "capacity-planning",
        "Forecasting regional demand for beds, housing units and support services.",
        "🧭",
        Strategic,
        Annual,
    ),
    seed(
        "Affordable Housing Development",
        "affordable-housing-development",
        "Increasing the supply of homes that people on low incomes can afford.",
        "🏗️",
        Systemic,
        MultiYear,
    ),
    seed(
        "Policy Advocacy",
        "policy-advocacy",
        "Changing local and state policy to prevent and end homelessness.",
        "🏛️",
        Systemic,
        MultiYear,
    ),
    seed(
        "Homelessness Prevention",
        "homelessness-prevention",
        "Stopping evictions and keeping families housed before a crisis starts.",
        "🛡️",
        Systemic,
        Monthly,
    ),
    seed(
        "Healthcare Integration",
        "healthcare-integration",
        "Connecting housing with physical health, mental health and addiction care.",
        "🏥",
        Systemic,
        MultiYear,
    ),
    seed(
        "Workforce Development",
        "workforce-development",
        "Job training and employment pathways that lead to a stable income.",
        "💼",
        Systemic,
        MultiYear,
    ),
];

static BUILTIN: OnceLock<Vec<CategoryRecord>> = OnceLock::new();

fn build() -> Vec<CategoryRecord> {
    SEEDS
        .iter()
        .zip(1_i32..)
        .filter_map(|(seed, position)| {
            let draft = CategoryRecordDraft {
                id: position.to_string(),
                name: seed.name.to_owned(),
                slug: seed.slug.to_owned(),
                description: seed.description.to_owned(),
                icon: seed.icon.to_owned(),
                category: seed.category,
                timeframe: seed.timeframe,
                sort_order: position,
            };
            CategoryRecord::new(draft)
                .inspect_err(|error| error!(slug = seed.slug, %error, "skipping built-in category"))
                .ok()
        })
        .collect()
}

/// The 21 built-in records, ordered by `sort_order`.
pub fn builtin_categories() -> &'static [CategoryRecord] {
    BUILTIN.get_or_init(build).as_slice()
}
