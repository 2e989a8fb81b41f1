use morph_core::preset::{ABOUT, CONTACT, HOME, SERVICES};
use morph_core::{Page, PostLook, Rgb, ScenePreset, ShapeKind};
use std::collections::HashSet;

#[test]
fn every_preset_is_well_formed() {
    for page in Page::ALL {
        let preset = page.preset();
        assert_eq!(preset.page, page);
        assert!(!preset.is_empty(), "{page} has no sections");
        assert!(preset.count > 0);
        assert!(preset.scatter_extent.is_finite() && preset.scatter_extent > 0.0);

        let ids: HashSet<_> = preset.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), preset.len(), "{page} repeats a section id");
        for s in preset.sections {
            let c = s.shape.theme_color;
            for v in c.to_array() {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}

#[test]
fn home_walks_the_landing_shapes_in_order() {
    let kinds: Vec<ShapeKind> = HOME.sections.iter().map(|s| s.shape.kind).collect();
    assert_eq!(
        kinds,
        [
            ShapeKind::LiquidSphere,
            ShapeKind::Tornado,
            ShapeKind::Helix,
            ShapeKind::LatticeRain,
            ShapeKind::GalaxySpiral,
            ShapeKind::VortexTunnel,
        ]
    );
    assert_eq!(HOME.count, 8000);
    assert_eq!(HOME.sections[0].shape.theme_color.to_css_hex(), "#f4afab");
}

#[test]
fn page_budgets_match_layouts() {
    assert_eq!((ABOUT.count, ABOUT.scatter_extent), (12000, 25.0));
    assert_eq!((SERVICES.count, SERVICES.scatter_extent), (12000, 30.0));
    assert_eq!((CONTACT.count, CONTACT.len()), (4000, 1));
}

#[test]
fn out_of_range_section_falls_back_to_first() {
    let preset = Page::About.preset();
    assert_eq!(preset.section(99).id, preset.sections[0].id);
    assert_eq!(preset.section(2).shape.kind, ShapeKind::ChronosHourglass);
}

#[test]
fn each_page_carries_its_own_look() {
    assert_eq!(HOME.look, PostLook::LANDING);
    assert_eq!(HOME.look.vignette_darkness, 1.1);

    assert_eq!(ABOUT.look.bloom_threshold, 0.1);
    assert_eq!(ABOUT.look.vignette_darkness, 1.0);
    assert_eq!(SERVICES.look.vignette_darkness, 1.0);
    assert_eq!(CONTACT.look.vignette_darkness, 1.0);

    assert_eq!(SERVICES.look.chromatic_offset, [0.002, 0.002]);
    for p in [&HOME, &ABOUT, &CONTACT] {
        assert_eq!(p.look.chromatic_offset, [0.0, 0.0], "{}", p.page);
    }
    for p in Page::ALL {
        let look = p.preset().look;
        assert_eq!((look.bloom_strength, look.grain), (1.5, 0.05));
    }
}

#[test]
fn stars_and_sparkles_only_where_the_page_has_them() {
    let with_stars: Vec<Page> = Page::ALL
        .into_iter()
        .filter(|p| p.preset().stars.is_some())
        .collect();
    assert_eq!(with_stars, [Page::About, Page::Services]);
    let stars = ABOUT.stars.unwrap();
    assert_eq!((stars.count, stars.radius, stars.depth), (5000, 100.0, 50.0));

    let sparkles = ABOUT.sparkles.unwrap();
    assert_eq!((sparkles.count, sparkles.scale), (300, 12.0));
    assert!(HOME.sparkles.is_none() && SERVICES.sparkles.is_none());
}

#[test]
fn contact_vortex_is_calm_and_home_vortex_shimmers() {
    let contact = CONTACT.section(0).shape;
    let home = HOME.sections[5].shape;
    assert_eq!(contact.kind, ShapeKind::VortexTunnel);
    assert_eq!(home.kind, ShapeKind::VortexTunnel);
    assert!(contact.shimmer.is_none());
    assert!(home.shimmer.is_some());
    assert_eq!(
        contact.target_position(40, 4000, 1.7, 0.25),
        ShapeKind::VortexTunnel.base_target(40, 4000, 1.7, 0.25)
    );
}

#[test]
fn preset_without_sections_still_answers() {
    let bare = ScenePreset {
        page: Page::Home,
        count: 10,
        scatter_extent: 5.0,
        sections: &[],
        look: PostLook::default(),
        stars: None,
        sparkles: None,
    };
    assert!(bare.is_empty());
    assert_eq!(bare.section(0).shape.kind, ShapeKind::LiquidSphere);
    assert_eq!(bare.section(7).shape.theme_color, Rgb::WHITE);
}
