//! Card size system: nine discrete size keys on a 333px master baseline.
//!
//! Every dimension is a fixed fraction or multiple of [`MASTER_SIZE`], and all
//! grid/spacing numbers for a card are derived from its key. The column table
//! is curated per size and is not a function of the width.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ShowcaseError;

/// Width of the size-5 card. Every other size is a rational multiple of it.
pub const MASTER_SIZE: u32 = 333;

/// Fixed top padding above a card grid, identical for every size.
pub const TOP_PADDING: u32 = 16;

/// Golden-ratio spacing factor.
const GOLDEN_RATIO: f64 = 0.618;

/// Smallest corner-button offset regardless of card size.
const MIN_CORNER_OFFSET: u32 = 4;

/// Card size key, 1 (micro badge) through 9 (mega hero).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
#[repr(u8)]
pub enum SizeKey {
    /// 333 ÷ 4
    Micro = 1,
    /// 333 ÷ 3
    Tiny = 2,
    /// 333 ÷ 2
    Small = 3,
    /// 333 × 2/3
    Compact = 4,
    /// 333 × 1
    #[default]
    Baseline = 5,
    /// 333 × 4/3
    Large = 6,
    /// 333 × 5/3
    Feature = 7,
    /// 333 × 7/3
    Showcase = 8,
    /// 333 × 3
    Mega = 9,
}

/// Size key → card width in pixels, ascending.
pub const SIZE_TABLE: [(SizeKey, u32); 9] = [
    (SizeKey::Micro, 88),
    (SizeKey::Tiny, 111),
    (SizeKey::Small, 166),
    (SizeKey::Compact, 222),
    (SizeKey::Baseline, 333),
    (SizeKey::Large, 444),
    (SizeKey::Feature, 555),
    (SizeKey::Showcase, 777),
    (SizeKey::Mega, 999),
];

/// Grid density per size. 7 and 8 both use two columns.
const COLUMN_TABLE: [u32; 9] = [9, 8, 6, 5, 4, 3, 2, 2, 1];

impl SizeKey {
    /// All keys in ascending order.
    pub const ALL: [SizeKey; 9] = [
        SizeKey::Micro,
        SizeKey::Tiny,
        SizeKey::Small,
        SizeKey::Compact,
        SizeKey::Baseline,
        SizeKey::Large,
        SizeKey::Feature,
        SizeKey::Showcase,
        SizeKey::Mega,
    ];

    /// Numeric value of the key (1-9).
    pub const fn get(self) -> u8 {
        self as u8
    }

    const fn index(self) -> usize {
        self as usize - 1
    }

    /// Card width in pixels.
    pub const fn dimension(self) -> u32 {
        SIZE_TABLE[self.index()].1
    }

    /// Number of grid columns that fit this card size.
    pub const fn optimal_columns(self) -> u32 {
        COLUMN_TABLE[self.index()]
    }

    /// Image box edge: two thirds of the card width, rounded.
    pub fn sub_box_size(self) -> u32 {
        (f64::from(self.dimension()) * (2.0 / 3.0)).round() as u32
    }

    /// Compact / balanced / spacious gaps for this size.
    pub fn spacing(self) -> Spacing {
        let width = f64::from(self.dimension());
        Spacing {
            compact: width * 0.5,
            balanced: width * GOLDEN_RATIO,
            spacious: width * 0.75,
        }
    }

    /// Offset of the corner buttons from the card edge, never below 4px.
    pub fn corner_offset(self) -> u32 {
        let scaled = (f64::from(self.dimension()) * 0.015).round() as u32;
        scaled.max(MIN_CORNER_OFFSET)
    }

    pub const fn show_buy_button(self) -> bool {
        self.get() >= 4
    }

    pub const fn show_color_palette(self) -> bool {
        self.get() >= 5
    }

    pub const fn show_toolbar(self) -> bool {
        self.get() >= 4
    }

    pub const fn show_corner_buttons(self) -> bool {
        self.get() >= 4
    }

    /// Key whose width is closest to `pixels`.
    ///
    /// Scans 1..=9 and only replaces the candidate on a strictly smaller
    /// difference, so ties resolve to the smaller key.
    pub fn nearest(pixels: f64) -> SizeKey {
        let mut closest = SizeKey::Baseline;
        let mut min_diff = f64::INFINITY;
        for (key, width) in SIZE_TABLE {
            let diff = (f64::from(width) - pixels).abs();
            if diff < min_diff {
                min_diff = diff;
                closest = key;
            }
        }
        closest
    }
}

impl TryFrom<i64> for SizeKey {
    type Error = ShowcaseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1..=9 => Ok(SizeKey::ALL[(value - 1) as usize]),
            other => Err(ShowcaseError::InvalidSize(other)),
        }
    }
}

impl From<SizeKey> for u8 {
    fn from(key: SizeKey) -> Self {
        key.get()
    }
}

impl fmt::Display for SizeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SIZE-{}", self.get())
    }
}

/// Gap presets for a card size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub compact: f64,
    pub balanced: f64,
    pub spacious: f64,
}

/// Which of the three gap presets a grid uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingMode {
    Compact,
    #[default]
    Balanced,
    Spacious,
}

impl Spacing {
    pub fn get(&self, mode: SpacingMode) -> f64 {
        match mode {
            SpacingMode::Compact => self.compact,
            SpacingMode::Balanced => self.balanced,
            SpacingMode::Spacious => self.spacious,
        }
    }
}

/// True iff `size` is an integer in 1..=9.
pub fn is_valid_size(size: f64) -> bool {
    (1.0..=9.0).contains(&size) && size.fract() == 0.0
}

pub fn card_width(size: SizeKey) -> u32 {
    size.dimension()
}

pub fn optimal_columns(size: SizeKey) -> u32 {
    size.optimal_columns()
}

pub fn image_box_size(size: SizeKey) -> u32 {
    size.sub_box_size()
}

pub fn optimal_spacing(size: SizeKey) -> Spacing {
    size.spacing()
}

pub fn corner_offset(size: SizeKey) -> u32 {
    size.corner_offset()
}

pub fn top_padding() -> u32 {
    TOP_PADDING
}

pub fn size_from_pixels(pixels: f64) -> SizeKey {
    SizeKey::nearest(pixels)
}

pub fn all_sizes() -> Vec<SizeKey> {
    SizeKey::ALL.to_vec()
}

/// Every layout number for one card size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub size: SizeKey,
    pub card_width: u32,
    pub columns: u32,
    pub image_box: u32,
    pub spacing: Spacing,
    pub corner_offset: u32,
    pub top_padding: u32,
}

impl GridLayout {
    pub fn for_size(size: SizeKey) -> Self {
        Self {
            size,
            card_width: size.dimension(),
            columns: size.optimal_columns(),
            image_box: size.sub_box_size(),
            spacing: size.spacing(),
            corner_offset: size.corner_offset(),
            top_padding: TOP_PADDING,
        }
    }
}
