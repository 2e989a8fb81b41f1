//! Per-page scene presets: point budget, scatter and the section list that
//! scrolling walks through.

use crate::backdrop::{PostLook, SparkleField, StarField};
use crate::color::Rgb;
use crate::error::ParseError;
use crate::shapes::{ShapeDescriptor, ShapeKind};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Services,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Services, Page::Contact];

    pub const fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Contact => "contact",
        }
    }

    pub fn preset(self) -> &'static ScenePreset {
        match self {
            Page::Home => &HOME,
            Page::About => &ABOUT,
            Page::Services => &SERVICES,
            Page::Contact => &CONTACT,
        }
    }

    /// Next page in navigation order, wrapping around.
    pub fn next(self) -> Page {
        let i = Page::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Page::ALL[(i + 1) % Page::ALL.len()]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().trim_start_matches('/').to_ascii_lowercase();
        match key.as_str() {
            "" | "home" | "index" => Ok(Page::Home),
            "about" => Ok(Page::About),
            "services" => Ok(Page::Services),
            "contact" => Ok(Page::Contact),
            _ => Err(ParseError::UnknownPage(s.to_string())),
        }
    }
}

/// One scroll section: copy shown in the page and the shape it morphs to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub shape: ShapeDescriptor,
}

impl Section {
    const fn new(
        id: &'static str,
        title: &'static str,
        subtitle: &'static str,
        kind: ShapeKind,
        hex: u32,
    ) -> Self {
        Self {
            id,
            title,
            subtitle,
            shape: ShapeDescriptor::new(kind, Rgb::from_hex(hex)),
        }
    }

    /// Same section without the shape's shimmer.
    const fn calm(self) -> Self {
        Self {
            shape: self.shape.with_shimmer(None),
            ..self
        }
    }
}

#[derive(Debug)]
pub struct ScenePreset {
    pub page: Page,
    pub count: usize,
    pub scatter_extent: f32,
    pub sections: &'static [Section],
    pub look: PostLook,
    pub stars: Option<StarField>,
    pub sparkles: Option<SparkleField>,
}

const DEEP_SPACE: StarField = StarField::new(5000, 100.0, 50.0);

/// Stand-in for a preset built without sections.
static EMPTY_SECTION: Section = Section::new("", "", "", ShapeKind::LiquidSphere, 0xffffff);

impl ScenePreset {
    /// Section at `index`, or the first one when out of range. A preset
    /// without sections yields a plain white sphere.
    pub fn section(&self, index: usize) -> &Section {
        self.sections
            .get(index)
            .or_else(|| self.sections.first())
            .unwrap_or(&EMPTY_SECTION)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

pub static HOME: ScenePreset = ScenePreset {
    page: Page::Home,
    count: 8000,
    scatter_extent: 20.0,
    sections: &[
        Section::new(
            "hero",
            "Creative Services",
            "Creative Services Excellence",
            ShapeKind::LiquidSphere,
            0xf4afab,
        ),
        Section::new(
            "3d",
            "QUANTUM\nREALITY",
            "Visual Singularity",
            ShapeKind::Tornado,
            0xff0055,
        ),
        Section::new(
            "horizontal-scroll",
            "RETHINKING\nSMOOTH SCROLL",
            "Architecture",
            ShapeKind::Helix,
            0xffd700,
        ),
        Section::new(
            "services",
            "Our Services",
            "Capabilities",
            ShapeKind::LatticeRain,
            0x00ff88,
        ),
        Section::new(
            "portfolio",
            "ASTRAL\nARCHIVE",
            "Selected Works",
            ShapeKind::GalaxySpiral,
            0x8a2be2,
        ),
        Section::new("cta", "INITIATE", "CONTACT", ShapeKind::VortexTunnel, 0x00f0ff),
    ],
    look: PostLook::LANDING,
    stars: None,
    sparkles: None,
};

pub static ABOUT: ScenePreset = ScenePreset {
    page: Page::About,
    count: 12000,
    scatter_extent: 25.0,
    sections: &[
        Section::new(
            "hero",
            "ARCHITECTS OF\nTOMORROW",
            "System Online",
            ShapeKind::NeuralNexus,
            0x00f3ff,
        ),
        Section::new(
            "values",
            "CORE\nFOUNDATION",
            "The Code We Live By",
            ShapeKind::CrystallineFortress,
            0xffd700,
        ),
        Section::new(
            "heritage",
            "TIMELINE\nEVOLUTION",
            "Our Legacy",
            ShapeKind::ChronosHourglass,
            0xbc13fe,
        ),
        Section::new(
            "cta",
            "JOIN THE\nREVOLUTION",
            "Initiate",
            ShapeKind::EventHorizon,
            0xffffff,
        ),
    ],
    look: PostLook::LANDING.with_threshold(0.1).with_darkness(1.0),
    stars: Some(DEEP_SPACE),
    sparkles: Some(SparkleField::new(300, 12.0, 0.4, 0.4)),
};

pub static SERVICES: ScenePreset = ScenePreset {
    page: Page::Services,
    count: 12000,
    scatter_extent: 30.0,
    sections: &[
        Section::new(
            "hero",
            "QUANTUM\nENGINEERING",
            "System Online",
            ShapeKind::QuantumGrid,
            0x35c4dd,
        ),
        Section::new(
            "services",
            "SYSTEM\nARCHITECTURE",
            "Our Capabilities",
            ShapeKind::DnaHelix,
            0xffffff,
        ),
        Section::new(
            "tech",
            "GLOBAL\nMATRIX",
            "The Stack",
            ShapeKind::CyberSphere,
            0xbc13fe,
        ),
        Section::new(
            "cta",
            "INITIATE\nSEQUENCE",
            "Deploy",
            ShapeKind::WarpTunnel,
            0xffd700,
        ),
    ],
    look: PostLook::LANDING
        .with_darkness(1.0)
        .with_chromatic(0.002, 0.002),
    stars: Some(DEEP_SPACE),
    sparkles: None,
};

pub static CONTACT: ScenePreset = ScenePreset {
    page: Page::Contact,
    count: 4000,
    scatter_extent: 20.0,
    sections: &[Section::new(
        "contact",
        "CONTACT",
        "Get in Touch",
        ShapeKind::VortexTunnel,
        0x00f0ff,
    )
    .calm()],
    look: PostLook::LANDING.with_darkness(1.0),
    stars: None,
    sparkles: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_names_parse_back() {
        for page in Page::ALL {
            assert_eq!(page.name().parse::<Page>(), Ok(page));
        }
        assert_eq!("/About ".parse::<Page>(), Ok(Page::About));
        assert!("blog".parse::<Page>().is_err());
    }

    #[test]
    fn next_cycles_through_every_page() {
        let mut p = Page::Home;
        for _ in 0..Page::ALL.len() {
            p = p.next();
        }
        assert_eq!(p, Page::Home);
    }
}
