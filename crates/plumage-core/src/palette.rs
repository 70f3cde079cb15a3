//! Named color palettes for categorical coloring.
//!
//! Qualitative palettes hand out their colors in order and cycle once exhausted. Continuous
//! palettes are sampled at `k` evenly spaced interior points of the colormap, so `k` colors
//! are always distinct for reasonable `k`.

use crate::color::Rgb;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    #[default]
    Pastel,
    Deep,
    Muted,
    Bright,
    Dark,
    Colorblind,
    Flare,
    Mako,
    Viridis,
    Cubehelix,
    Spectral,
    Set1,
    Set2,
    Set3,
    Tab10,
    Tab20,
    Tab20b,
    Tab20c,
}

impl Palette {
    pub const ALL: [Palette; 18] = [
        Palette::Pastel,
        Palette::Deep,
        Palette::Muted,
        Palette::Bright,
        Palette::Dark,
        Palette::Colorblind,
        Palette::Flare,
        Palette::Mako,
        Palette::Viridis,
        Palette::Cubehelix,
        Palette::Spectral,
        Palette::Set1,
        Palette::Set2,
        Palette::Set3,
        Palette::Tab10,
        Palette::Tab20,
        Palette::Tab20b,
        Palette::Tab20c,
    ];

    /// Resolves a palette control. A missing or blank choice is the default palette.
    pub fn from_choice(choice: Option<&str>) -> Result<Self, UnknownPalette> {
        match choice.map(str::trim) {
            None | Some("") => Ok(Palette::default()),
            Some(name) => name.parse(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Palette::Pastel => "pastel",
            Palette::Deep => "deep",
            Palette::Muted => "muted",
            Palette::Bright => "bright",
            Palette::Dark => "dark",
            Palette::Colorblind => "colorblind",
            Palette::Flare => "flare",
            Palette::Mako => "mako",
            Palette::Viridis => "viridis",
            Palette::Cubehelix => "cubehelix",
            Palette::Spectral => "Spectral",
            Palette::Set1 => "Set1",
            Palette::Set2 => "Set2",
            Palette::Set3 => "Set3",
            Palette::Tab10 => "tab10",
            Palette::Tab20 => "tab20",
            Palette::Tab20b => "tab20b",
            Palette::Tab20c => "tab20c",
        }
    }

    /// Number of distinct colors before a qualitative palette starts repeating; `None` for
    /// continuous palettes.
    pub fn native_size(self) -> Option<usize> {
        match self.kind() {
            Kind::Qualitative(colors) => Some(colors.len()),
            Kind::Stops(_) | Kind::Cubehelix => None,
        }
    }

    /// `k` hex colors, in the order they are assigned to category values.
    pub fn colors(self, k: usize) -> Vec<String> {
        if k == 0 {
            return Vec::new();
        }
        match self.kind() {
            Kind::Qualitative(colors) => colors
                .iter()
                .cycle()
                .take(k)
                .map(|c| (*c).to_string())
                .collect(),
            Kind::Stops(stops) => interior_positions(k)
                .map(|p| sample_stops(stops, p).to_hex())
                .collect(),
            Kind::Cubehelix => interior_positions(k).map(|p| cubehelix(p).to_hex()).collect(),
        }
    }

    fn kind(self) -> Kind {
        match self {
            Palette::Pastel => Kind::Qualitative(PASTEL),
            Palette::Deep => Kind::Qualitative(DEEP),
            Palette::Muted => Kind::Qualitative(MUTED),
            Palette::Bright => Kind::Qualitative(BRIGHT),
            Palette::Dark => Kind::Qualitative(DARK),
            Palette::Colorblind => Kind::Qualitative(COLORBLIND),
            Palette::Set1 => Kind::Qualitative(SET1),
            Palette::Set2 => Kind::Qualitative(SET2),
            Palette::Set3 => Kind::Qualitative(SET3),
            Palette::Tab10 => Kind::Qualitative(TAB10),
            Palette::Tab20 => Kind::Qualitative(TAB20),
            Palette::Tab20b => Kind::Qualitative(TAB20B),
            Palette::Tab20c => Kind::Qualitative(TAB20C),
            Palette::Flare => Kind::Stops(FLARE),
            Palette::Mako => Kind::Stops(MAKO),
            Palette::Viridis => Kind::Stops(VIRIDIS),
            Palette::Spectral => Kind::Stops(SPECTRAL),
            Palette::Cubehelix => Kind::Cubehelix,
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown palette `{0}`")]
pub struct UnknownPalette(pub String);

impl FromStr for Palette {
    type Err = UnknownPalette;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Palette::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPalette(s.to_string()))
    }
}

enum Kind {
    Qualitative(&'static [&'static str]),
    Stops(&'static [&'static str]),
    Cubehelix,
}

/// `linspace(0, 1, k + 2)` without its endpoints.
fn interior_positions(k: usize) -> impl Iterator<Item = f64> {
    (1..=k).map(move |i| i as f64 / (k + 1) as f64)
}

fn sample_stops(stops: &[&str], p: f64) -> Rgb {
    let rgb: Vec<Rgb> = stops.iter().filter_map(|s| Rgb::parse(s)).collect();
    let Some(last) = rgb.len().checked_sub(1) else {
        return Rgb::WHITE;
    };
    if last == 0 {
        return rgb[0];
    }
    let f = p.clamp(0.0, 1.0) * last as f64;
    let i = (f.floor() as usize).min(last - 1);
    let frac = f - i as f64;
    let (a, b) = (rgb[i], rgb[i + 1]);
    let lerp = |x: u8, y: u8| -> u8 {
        (x as f64 + (y as f64 - x as f64) * frac)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Rgb::new(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
}

/// Green's cubehelix scheme with start 0.5, rotations -1.5, hue 1, gamma 1.
fn cubehelix(x: f64) -> Rgb {
    const START: f64 = 0.5;
    const ROTATIONS: f64 = -1.5;
    const HUE: f64 = 1.0;

    let amp = HUE * x * (1.0 - x) / 2.0;
    let phi = 2.0 * PI * (START / 3.0 + ROTATIONS * x);
    let (sin, cos) = phi.sin_cos();
    let channel = |v: f64| -> u8 { (v.clamp(0.0, 1.0) * 255.0).round() as u8 };
    Rgb::new(
        channel(x + amp * (-0.14861 * cos + 1.78277 * sin)),
        channel(x + amp * (-0.29227 * cos - 0.90649 * sin)),
        channel(x + amp * (1.97294 * cos)),
    )
}

static PASTEL: &[&str] = &[
    "#a1c9f4", "#ffb482", "#8de5a1", "#ff9f9b", "#d0bbff", "#debb9b", "#fab0e4", "#cfcfcf",
    "#fffea3", "#b9f2f0",
];
static DEEP: &[&str] = &[
    "#4c72b0", "#dd8452", "#55a868", "#c44e52", "#8172b3", "#937860", "#da8bc3", "#8c8c8c",
    "#ccb974", "#64b5cd",
];
static MUTED: &[&str] = &[
    "#4878d0", "#ee854a", "#6acc64", "#d65f5f", "#956cb4", "#8c613c", "#dc7ec0", "#797979",
    "#d5bb67", "#82c6e2",
];
static BRIGHT: &[&str] = &[
    "#023eff", "#ff7c00", "#1ac938", "#e8000b", "#8b2be2", "#9f4800", "#f14cc1", "#a3a3a3",
    "#ffc400", "#00d7ff",
];
static DARK: &[&str] = &[
    "#001c7f", "#b1400d", "#12711c", "#8c0800", "#591e71", "#592f0d", "#a23582", "#3c3c3c",
    "#b8850a", "#006374",
];
static COLORBLIND: &[&str] = &[
    "#0173b2", "#de8f05", "#029e73", "#d55e00", "#cc78bc", "#ca9161", "#fbafe4", "#949494",
    "#ece133", "#56b4e9",
];
static SET1: &[&str] = &[
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf",
    "#999999",
];
static SET2: &[&str] = &[
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];
static SET3: &[&str] = &[
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
    "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
];
static TAB10: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];
static TAB20: &[&str] = &[
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
    "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];
static TAB20B: &[&str] = &[
    "#393b79", "#5254a3", "#6b6ecf", "#9c9ede", "#637939", "#8ca252", "#b5cf6b", "#cedb9c",
    "#8c6d31", "#bd9e39", "#e7ba52", "#e7cb94", "#843c39", "#ad494a", "#d6616b", "#e7969c",
    "#7b4173", "#a55194", "#ce6dbd", "#de9ed6",
];
static TAB20C: &[&str] = &[
    "#3182bd", "#6baed6", "#9ecae1", "#c6dbef", "#e6550d", "#fd8d3c", "#fdae6b", "#fdd0a2",
    "#31a354", "#74c476", "#a1d99b", "#c7e9c0", "#756bb1", "#9e9ac8", "#bcbddc", "#dadaeb",
    "#636363", "#969696", "#bdbdbd", "#d9d9d9",
];

static VIRIDIS: &[&str] = &[
    "#440154", "#472d7b", "#3b528b", "#2c728e", "#21918c", "#28ae80", "#5ec962", "#addc30",
    "#fde725",
];
static SPECTRAL: &[&str] = &[
    "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#e6f598", "#abdda4",
    "#66c2a5", "#3288bd", "#5e4fa2",
];
static MAKO: &[&str] = &[
    "#0b0405", "#2e1e3c", "#413d7b", "#37659e", "#348fa7", "#40b7ad", "#8bdab2", "#def5e5",
];
static FLARE: &[&str] = &[
    "#edb081", "#e98d6b", "#e3685c", "#d14a61", "#b13c6c", "#8f3371", "#6c2b6d", "#4b2362",
];
