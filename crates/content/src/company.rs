/// Trade license card for the about section. Title and description are
/// bilingual bundle keys under `about.licenses.<slug>`; the GISA number
/// is the same in both languages and lives here.
#[derive(Clone, Copy, Debug)]
pub struct License {
    pub slug: &'static str,
    pub gisa: &'static str,
}

impl License {
    pub fn title_key(&self) -> String {
        format!("about.licenses.{}.title", self.slug)
    }

    pub fn description_key(&self) -> String {
        format!("about.licenses.{}.description", self.slug)
    }
}

pub static LICENSES: &[License] = &[
    License {
        slug: "metal",
        gisa: "37809485",
    },
    License {
        slug: "construction",
        gisa: "12071968",
    },
    License {
        slug: "automotive",
        gisa: "35380955",
    },
    License {
        slug: "waste",
        gisa: "33181769",
    },
    License {
        slug: "auxiliary",
        gisa: "12071975",
    },
    License {
        slug: "freight",
        gisa: "12044931",
    },
    License {
        slug: "surveying",
        gisa: "-",
    },
    License {
        slug: "agriculture",
        gisa: "-",
    },
];
