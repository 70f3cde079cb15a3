use crate::*;
use std::collections::HashSet;

#[test]
fn names_parse_case_insensitively() {
    assert_eq!("pastel".parse::<Palette>(), Ok(Palette::Pastel));
    assert_eq!("spectral".parse::<Palette>(), Ok(Palette::Spectral));
    assert_eq!("SET2".parse::<Palette>(), Ok(Palette::Set2));
    assert!("rainbow".parse::<Palette>().is_err());
    for p in Palette::ALL {
        assert_eq!(p.name().parse::<Palette>(), Ok(p));
    }
}

#[test]
fn missing_choice_is_the_default_palette() {
    assert_eq!(Palette::from_choice(None), Ok(Palette::Pastel));
    assert_eq!(Palette::from_choice(Some("  ")), Ok(Palette::Pastel));
    assert_eq!(Palette::from_choice(Some("Mako")), Ok(Palette::Mako));
    let err = Palette::from_choice(Some("rainbow")).unwrap_err();
    assert_eq!(err, UnknownPalette("rainbow".to_string()));
    assert_eq!(err.to_string(), "unknown palette `rainbow`");
}

#[test]
fn qualitative_palettes_take_a_prefix() {
    assert_eq!(
        Palette::Tab10.colors(3),
        vec!["#1f77b4", "#ff7f0e", "#2ca02c"]
    );
    assert_eq!(Palette::Pastel.colors(1), vec!["#a1c9f4"]);
}

#[test]
fn qualitative_palettes_cycle_past_native_size() {
    let colors = Palette::Set2.colors(10);
    assert_eq!(colors.len(), 10);
    assert_eq!(colors[8], colors[0]);
    assert_eq!(Palette::Set2.native_size(), Some(8));
}

#[test]
fn continuous_palettes_give_distinct_colors() {
    for p in [
        Palette::Viridis,
        Palette::Mako,
        Palette::Flare,
        Palette::Spectral,
        Palette::Cubehelix,
    ] {
        let colors = p.colors(6);
        assert_eq!(colors.len(), 6, "{p}");
        let distinct: HashSet<_> = colors.iter().collect();
        assert_eq!(distinct.len(), 6, "{p}: {colors:?}");
        assert!(colors.iter().all(|c| Rgb::parse(c).is_some()));
        assert_eq!(p.native_size(), None);
    }
}

#[test]
fn continuous_sampling_skips_the_endpoints() {
    // One sample sits in the middle of the map.
    assert_eq!(Palette::Viridis.colors(1), vec!["#21918c"]);
}

#[test]
fn zero_colors_requested() {
    assert!(Palette::Deep.colors(0).is_empty());
    assert!(Palette::Viridis.colors(0).is_empty());
}
