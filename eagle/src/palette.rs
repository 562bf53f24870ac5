use anyhow::{anyhow, Result};
use opencv::core::Scalar;

/// A point in OpenCV's 8-bit HSV space (hue 0..=180, saturation and value 0..=255).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HsvBound {
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
}

impl HsvBound {
    pub const fn new(hue: u8, saturation: u8, value: u8) -> Self {
        HsvBound {
            hue,
            saturation,
            value,
        }
    }

    pub fn to_scalar(self) -> Scalar {
        Scalar::new(
            self.hue as f64,
            self.saturation as f64,
            self.value as f64,
            0.0,
        )
    }
}

/// Inclusive HSV bounds selecting the pixels of one marker color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorRange {
    pub min: HsvBound,
    pub max: HsvBound,
}

impl ColorRange {
    pub const fn new(min: HsvBound, max: HsvBound) -> Self {
        ColorRange { min, max }
    }

    pub fn contains(&self, hsv: HsvBound) -> bool {
        (self.min.hue..=self.max.hue).contains(&hsv.hue)
            && (self.min.saturation..=self.max.saturation).contains(&hsv.saturation)
            && (self.min.value..=self.max.value).contains(&hsv.value)
    }
}

pub const GREEN: ColorRange =
    ColorRange::new(HsvBound::new(45, 91, 77), HsvBound::new(61, 224, 255));
pub const VIOLET: ColorRange =
    ColorRange::new(HsvBound::new(141, 89, 58), HsvBound::new(161, 255, 255));
pub const YELLOW: ColorRange =
    ColorRange::new(HsvBound::new(21, 100, 131), HsvBound::new(30, 245, 255));

/// Named color ranges the finders are built from.
#[derive(Clone, Debug)]
pub struct Palette {
    entries: Vec<(String, ColorRange)>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette::empty()
            .with("green", GREEN)
            .with("violet", VIOLET)
            .with("yellow", YELLOW)
    }
}

impl Palette {
    pub fn empty() -> Self {
        Palette {
            entries: Vec::new(),
        }
    }

    /// Adds `range` under `name`, replacing an existing entry of the same name.
    pub fn with(mut self, name: &str, range: ColorRange) -> Self {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = range,
            None => self.entries.push((name.to_string(), range)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<ColorRange> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, range)| range)
    }

    pub fn range(&self, name: &str) -> Result<ColorRange> {
        self.get(name).ok_or_else(|| {
            anyhow!(
                "unknown marker color '{name}', known colors: {}",
                self.names().collect::<Vec<_>>().join(", ")
            )
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_has_all_colors() {
        let palette = Palette::default();
        assert_eq!(palette.get("green"), Some(GREEN));
        assert_eq!(palette.get("violet"), Some(VIOLET));
        assert_eq!(palette.get("yellow"), Some(YELLOW));
        assert_eq!(
            palette.names().collect::<Vec<_>>(),
            ["green", "violet", "yellow"]
        );
    }

    #[test]
    fn unknown_color_names_known_ones() {
        let err = Palette::default().range("magenta").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("magenta"));
        assert!(msg.contains("green, violet, yellow"));
    }

    #[test]
    fn with_replaces_existing_entry() {
        let palette = Palette::default().with("green", YELLOW);
        assert_eq!(palette.get("green"), Some(YELLOW));
        assert_eq!(palette.names().count(), 3);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(GREEN.contains(GREEN.min));
        assert!(GREEN.contains(GREEN.max));
        assert!(!GREEN.contains(HsvBound::new(44, 150, 150)));
        assert!(!GREEN.contains(HsvBound::new(50, 225, 150)));
    }
}
