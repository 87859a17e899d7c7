/// One of the three core service sections. Each service carries five
/// feature bullet points in the bundles, keyed `services.<slug>.features.1`
/// through `.5`.
#[derive(Clone, Copy, Debug)]
pub struct Service {
    pub slug: &'static str,
    pub images: &'static [&'static str],
    pub reversed: bool,
}

pub const FEATURES_PER_SERVICE: usize = 5;

impl Service {
    pub fn title_key(&self) -> String {
        format!("services.{}.title", self.slug)
    }

    pub fn subtitle_key(&self) -> String {
        format!("services.{}.subtitle", self.slug)
    }

    pub fn description_key(&self) -> String {
        format!("services.{}.description", self.slug)
    }

    pub fn feature_keys(&self) -> Vec<String> {
        (1..=FEATURES_PER_SERVICE)
            .map(|n| format!("services.{}.features.{n}", self.slug))
            .collect()
    }
}

pub static SERVICES: &[Service] = &[
    Service {
        slug: "transportation",
        images: &[
            "/static/images/bleiner-transport-4.jpg",
            "/static/images/bleiner-transport-5.jpg",
            "/static/images/bleiner-transport-7.jpg",
            "/static/images/bleiner-transport-9.jpg",
            "/static/images/bleiner-transport-10.jpg",
            "/static/images/bleiner-transport-11.jpg",
        ],
        reversed: false,
    },
    Service {
        slug: "construction",
        images: &[
            "/static/images/bleiner-construction-1.jpg",
            "/static/images/bleiner-construction-2.jpeg",
            "/static/images/bleiner-construction-5.jpg",
            "/static/images/bleiner-construction-6.jpg",
            "/static/images/bleiner-construction-10.jpg",
            "/static/images/bleiner-construction-12.jpg",
        ],
        reversed: true,
    },
    Service {
        slug: "winter",
        images: &[
            "/static/images/bleiner-snow-2.jpg",
            "/static/images/bleiner-snow-3.jpg",
            "/static/images/bleiner-snow-5.jpg",
        ],
        reversed: false,
    },
];
