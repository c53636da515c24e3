//! Rating bands and the palette that colors them.
//!
//! Bands are presentation only; nothing filters on them.

use std::fmt;

/// Display band for a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingBand {
    /// Below 2
    Poor,
    /// 2 up to (not including) 5
    Fair,
    /// 5 up to (not including) 8
    Good,
    /// 8 and above
    Excellent,
}

impl RatingBand {
    pub fn for_rating(rating: f64) -> Self {
        if rating < 2.0 {
            RatingBand::Poor
        } else if rating < 5.0 {
            RatingBand::Fair
        } else if rating < 8.0 {
            RatingBand::Good
        } else {
            RatingBand::Excellent
        }
    }

    /// CSS class for the rating cell
    pub fn css_class(self) -> &'static str {
        match self {
            RatingBand::Poor => "rating-poor",
            RatingBand::Fair => "rating-fair",
            RatingBand::Good => "rating-good",
            RatingBand::Excellent => "rating-excellent",
        }
    }
}

impl fmt::Display for RatingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RatingBand::Poor => "poor",
            RatingBand::Fair => "fair",
            RatingBand::Good => "good",
            RatingBand::Excellent => "excellent",
        };
        f.write_str(label)
    }
}

/// Color used for each band.
///
/// Colors are plain names ("red", "green", ...) so the same palette
/// works for CSS and for terminal output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingPalette {
    pub poor: String,
    pub fair: String,
    pub good: String,
    pub excellent: String,
}

impl RatingPalette {
    pub fn color_for(&self, band: RatingBand) -> &str {
        match band {
            RatingBand::Poor => &self.poor,
            RatingBand::Fair => &self.fair,
            RatingBand::Good => &self.good,
            RatingBand::Excellent => &self.excellent,
        }
    }
}

impl Default for RatingPalette {
    fn default() -> Self {
        Self {
            poor: "red".to_string(),
            fair: "yellow".to_string(),
            good: "blue".to_string(),
            excellent: "green".to_string(),
        }
    }
}
