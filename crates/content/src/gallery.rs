use std::str::FromStr;

use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};

/// Category a gallery project belongs to. Tags follow the public URLs
/// (`?category=roadAssistance`), hence the camelCase serialization.
#[derive(
    EnumString, Display, AsRefStr, IntoStaticStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq,
    Deserialize,
)]
pub enum ProjectCategory {
    #[strum(serialize = "transportation")]
    Transportation,
    #[strum(serialize = "construction")]
    Construction,
    #[strum(serialize = "winter")]
    Winter,
    #[strum(serialize = "roadAssistance")]
    RoadAssistance,
}

impl ProjectCategory {
    /// URL tag, e.g. `roadAssistance`.
    pub fn tag(&self) -> &'static str {
        (*self).into()
    }

    pub fn label_key(&self) -> String {
        format!("projects.categories.{}", self.as_ref())
    }
}

/// Gallery filter: either the `all` wildcard or exactly one category.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("unknown category tag: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    // Fail closed on unknown tags, the caller keeps its current filter.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if tag == "all" {
            return Ok(Self::All);
        }

        ProjectCategory::from_str(tag)
            .map(Self::Only)
            .map_err(|_| UnknownCategory(tag.to_owned()))
    }
}

impl CategoryFilter {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => (*category).into(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == *category,
        }
    }
}

/// One entry of the project gallery. Title and description are bilingual
/// and resolved through the locale bundles via `slug`.
#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub id: u32,
    pub slug: &'static str,
    pub category: ProjectCategory,
    pub images: &'static [&'static str],
    pub year: Option<&'static str>,
    pub location: Option<&'static str>,
}

impl Project {
    pub fn title_key(&self) -> String {
        format!("projects.items.{}.title", self.slug)
    }

    pub fn description_key(&self) -> String {
        format!("projects.items.{}.description", self.slug)
    }
}

/// Derive the visible project list by exact category match.
pub fn filter_projects(filter: CategoryFilter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.matches(p)).collect()
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        slug: "freight",
        category: ProjectCategory::Transportation,
        images: &["/static/images/bleiner-transport-17.jpg"],
        year: None,
        location: None,
    },
    Project {
        id: 2,
        slug: "bulk",
        category: ProjectCategory::Transportation,
        images: &["/static/images/bleiner-transport-15.jpg"],
        year: None,
        location: None,
    },
    Project {
        id: 3,
        slug: "oversized",
        category: ProjectCategory::Transportation,
        images: &["/static/images/bleiner-transport-13.jpg"],
        year: None,
        location: None,
    },
    Project {
        id: 4,
        slug: "heavy_high",
        category: ProjectCategory::Transportation,
        images: &["/static/images/bleiner-transport-16.jpg"],
        year: None,
        location: None,
    },
    Project {
        id: 5,
        slug: "night_ops",
        category: ProjectCategory::Transportation,
        images: &["/static/images/bleiner-transport-2.jpg"],
        year: None,
        location: None,
    },
    Project {
        id: 6,
        slug: "earthworks",
        category: ProjectCategory::Construction,
        images: &[
            "/static/images/bleiner-construction-3.jpg",
            "/static/images/bleiner-construction-4.jpg",
            "/static/images/bleiner-construction-10.jpg",
        ],
        year: None,
        location: None,
    },
    Project {
        id: 7,
        slug: "ground_prep",
        category: ProjectCategory::Construction,
        images: &["/static/images/bleiner-construction-1.jpg"],
        year: None,
        location: None,
    },
    Project {
        id: 8,
        slug: "crane",
        category: ProjectCategory::Construction,
        images: &["/static/images/bleiner-construction-5.jpg"],
        year: None,
        location: None,
    },
    Project {
        id: 9,
        slug: "floor_base",
        category: ProjectCategory::Construction,
        images: &[
            "/static/images/bleiner-construction-8.jpg",
            "/static/images/bleiner-construction-9.jpg",
            "/static/images/bleiner-construction-11.jpg",
        ],
        year: None,
        location: None,
    },
    Project {
        id: 10,
        slug: "transformer",
        category: ProjectCategory::Transportation,
        images: &["/static/images/bleiner-transport-12.jpg"],
        year: None,
        location: None,
    },
    Project {
        id: 11,
        slug: "winter_roads",
        category: ProjectCategory::Winter,
        images: &["/static/images/bleiner-snow-2.jpg"],
        year: Some("2026"),
        location: Some("Steyr"),
    },
    Project {
        id: 12,
        slug: "alpine",
        category: ProjectCategory::Winter,
        images: &["/static/images/bleiner-snow-3.jpg"],
        year: Some("2023"),
        location: Some("Steyr"),
    },
    Project {
        id: 13,
        slug: "terrain",
        category: ProjectCategory::Winter,
        images: &["/static/images/bleiner-snow-5.jpg"],
        year: Some("2022"),
        location: Some("Steyr"),
    },
    Project {
        id: 14,
        slug: "road_assistance",
        category: ProjectCategory::RoadAssistance,
        images: &["/static/images/bleiner-others-1.jpeg"],
        year: None,
        location: None,
    },
    Project {
        id: 15,
        slug: "all_weather",
        category: ProjectCategory::RoadAssistance,
        images: &[
            "/static/images/bleiner-others-2.jpg",
            "/static/images/bleiner-others-3.jpg",
        ],
        year: None,
        location: None,
    },
];
