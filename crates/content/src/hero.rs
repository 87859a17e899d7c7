/// One hero carousel slide. Text comes from the locale bundles under
/// `hero.slides.<slug>`.
#[derive(Clone, Copy, Debug)]
pub struct Slide {
    pub slug: &'static str,
    pub image: &'static str,
}

impl Slide {
    pub fn title_key(&self) -> String {
        format!("hero.slides.{}.title", self.slug)
    }

    pub fn subtitle_key(&self) -> String {
        format!("hero.slides.{}.subtitle", self.slug)
    }

    pub fn description_key(&self) -> String {
        format!("hero.slides.{}.description", self.slug)
    }
}

pub static SLIDES: &[Slide] = &[
    Slide {
        slug: "transport",
        image: "/static/images/ai-bleiner-transport-1.png",
    },
    Slide {
        slug: "construction",
        image: "/static/images/ai-bleiner-construction-2.png",
    },
    Slide {
        slug: "winter",
        image: "/static/images/ai-bleiner-snow-1.png",
    },
];

/// Wrap any requested slide number onto the carousel, so `?slide=7`
/// lands on a real slide instead of an error page.
pub fn slide_index(requested: usize) -> usize {
    requested % SLIDES.len()
}
