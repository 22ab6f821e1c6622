//! The fixed filter palette.
//!
//! Each [`FilterId`] maps to a static, ordered list of [`Stage`]s. The
//! table is plain data: nothing here is built at runtime and nothing can
//! mutate it.

use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;
use crate::filters::color_matrix::ColorMatrix;

use super::stage::Stage;

/// The 12 filters, in palette order. The position is the persisted filter index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterId {
    Vintage,
    WarmSunset,
    CoolBreeze,
    BlackWhiteClassic,
    CinematicTealOrange,
    HighContrastMono,
    PastelDream,
    RetroFilm,
    HdrPop,
    SepiaFade,
    CyberpunkNeon,
    SoftMatte,
}

/// A named, ordered sequence of stages.
#[derive(Debug)]
pub struct FilterDefinition {
    pub id: FilterId,
    pub stages: &'static [Stage],
}

const WARM_SUNSET_MATRIX: ColorMatrix = ColorMatrix::new([
    [1.2, 0.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.8, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
]);

const COOL_BREEZE_MATRIX: ColorMatrix = ColorMatrix::new([
    [0.8, 0.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 1.2, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
]);

const TEAL_ORANGE_MATRIX: ColorMatrix = ColorMatrix::new([
    [1.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.9, 0.1, 0.0, 0.0],
    [0.0, 0.2, 0.8, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
]);

const RETRO_FILM_MATRIX: ColorMatrix = ColorMatrix::new([
    [0.9, 0.1, 0.0, 0.0, 0.0],
    [0.0, 0.9, 0.1, 0.0, 0.0],
    [0.0, 0.0, 0.9, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
]);

const CYBERPUNK_MATRIX: ColorMatrix = ColorMatrix::new([
    [1.5, 0.0, 0.5, 0.0, 0.0],
    [0.0, 0.8, 1.2, 0.0, 0.0],
    [0.5, 0.0, 1.5, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
]);

/// Stage table, indexed by [`FilterId::index`].
pub static CATALOG: [FilterDefinition; 12] = [
    FilterDefinition {
        id: FilterId::Vintage,
        stages: &[Stage::ColorMatrix(ColorMatrix::SEPIA), Stage::Vignette],
    },
    FilterDefinition {
        id: FilterId::WarmSunset,
        stages: &[Stage::ColorMatrix(WARM_SUNSET_MATRIX), Stage::contrast(1.2)],
    },
    FilterDefinition {
        id: FilterId::CoolBreeze,
        stages: &[Stage::ColorMatrix(COOL_BREEZE_MATRIX), Stage::brightness(0.05)],
    },
    FilterDefinition {
        id: FilterId::BlackWhiteClassic,
        stages: &[Stage::Grayscale],
    },
    FilterDefinition {
        id: FilterId::CinematicTealOrange,
        stages: &[
            Stage::ColorMatrix(TEAL_ORANGE_MATRIX),
            Stage::contrast(1.3),
            Stage::saturation(1.2),
        ],
    },
    FilterDefinition {
        id: FilterId::HighContrastMono,
        stages: &[Stage::Grayscale, Stage::contrast(2.0)],
    },
    FilterDefinition {
        id: FilterId::PastelDream,
        stages: &[
            Stage::saturation(0.6),
            Stage::brightness(0.1),
            Stage::Blur { radius: 0.5 },
        ],
    },
    FilterDefinition {
        id: FilterId::RetroFilm,
        stages: &[
            Stage::ColorMatrix(RETRO_FILM_MATRIX),
            Stage::Vignette,
            Stage::contrast(1.1),
        ],
    },
    FilterDefinition {
        id: FilterId::HdrPop,
        stages: &[
            Stage::contrast(1.5),
            Stage::saturation(1.5),
            Stage::Sharpen { amount: 0.4 },
        ],
    },
    FilterDefinition {
        id: FilterId::SepiaFade,
        stages: &[Stage::ColorMatrix(ColorMatrix::SEPIA)],
    },
    FilterDefinition {
        id: FilterId::CyberpunkNeon,
        stages: &[Stage::ColorMatrix(CYBERPUNK_MATRIX), Stage::contrast(1.4)],
    },
    FilterDefinition {
        id: FilterId::SoftMatte,
        stages: &[
            Stage::saturation(0.8),
            Stage::contrast(0.9),
            Stage::Blur { radius: 0.3 },
        ],
    },
];

impl FilterId {
    /// Every filter in palette order.
    pub const ALL: [FilterId; 12] = [
        FilterId::Vintage,
        FilterId::WarmSunset,
        FilterId::CoolBreeze,
        FilterId::BlackWhiteClassic,
        FilterId::CinematicTealOrange,
        FilterId::HighContrastMono,
        FilterId::PastelDream,
        FilterId::RetroFilm,
        FilterId::HdrPop,
        FilterId::SepiaFade,
        FilterId::CyberpunkNeon,
        FilterId::SoftMatte,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self, FilterError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(FilterError::UnknownFilter(index))
    }

    pub fn definition(self) -> &'static FilterDefinition {
        &CATALOG[self.index()]
    }

    pub fn stages(self) -> &'static [Stage] {
        self.definition().stages
    }

    /// Name shown to users and stored with recent edits.
    pub fn display_name(self) -> &'static str {
        match self {
            FilterId::Vintage => "Vintage",
            FilterId::WarmSunset => "Warm Sunset",
            FilterId::CoolBreeze => "Cool Breeze",
            FilterId::BlackWhiteClassic => "B&W Classic",
            FilterId::CinematicTealOrange => "Cinematic",
            FilterId::HighContrastMono => "High Contrast",
            FilterId::PastelDream => "Pastel Dream",
            FilterId::RetroFilm => "Retro Film",
            FilterId::HdrPop => "HDR Pop",
            FilterId::SepiaFade => "Sepia Fade",
            FilterId::CyberpunkNeon => "Cyberpunk",
            FilterId::SoftMatte => "Soft Matte",
        }
    }

    /// Stable lowercase identifier used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            FilterId::Vintage => "vintage",
            FilterId::WarmSunset => "warm-sunset",
            FilterId::CoolBreeze => "cool-breeze",
            FilterId::BlackWhiteClassic => "bw-classic",
            FilterId::CinematicTealOrange => "cinematic-teal-orange",
            FilterId::HighContrastMono => "high-contrast-mono",
            FilterId::PastelDream => "pastel-dream",
            FilterId::RetroFilm => "retro-film",
            FilterId::HdrPop => "hdr-pop",
            FilterId::SepiaFade => "sepia-fade",
            FilterId::CyberpunkNeon => "cyberpunk-neon",
            FilterId::SoftMatte => "soft-matte",
        }
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FilterId {
    type Err = FilterError;

    /// Accepts a slug, a display name (case-insensitive) or a palette index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index);
        }
        let lowered = trimmed.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.slug() == lowered || id.display_name().to_lowercase() == lowered)
            .ok_or_else(|| FilterError::UnknownFilterName(trimmed.to_string()))
    }
}
