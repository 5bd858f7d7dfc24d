#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    #[default]
    Red,
    Orange,
    Green,
}

impl Priority {
    /// Form order; the first entry is the default selection.
    pub const ALL: [Priority; 3] = [Priority::Red, Priority::Orange, Priority::Green];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Red => "Red",
            Priority::Orange => "Orange",
            Priority::Green => "Green",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Priority::Red => "#FF0000",
            Priority::Orange => "#FFA500",
            Priority::Green => "#008000",
        }
    }

    pub fn from_label(label: &str) -> Option<Priority> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(label))
    }

    pub fn from_color(color: &str) -> Option<Priority> {
        let color = color.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.color().eq_ignore_ascii_case(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_map_to_fixed_colors() {
        assert_eq!(Priority::from_label("Red").map(Priority::color), Some("#FF0000"));
        assert_eq!(Priority::from_label("orange").map(Priority::color), Some("#FFA500"));
        assert_eq!(Priority::from_label(" GREEN ").map(Priority::color), Some("#008000"));
        assert_eq!(Priority::from_label("Blue"), None);
    }

    #[test]
    fn color_lookup_round_trips_known_values() {
        assert_eq!(Priority::from_color("#ffa500"), Some(Priority::Orange));
        assert_eq!(Priority::from_color("#123456"), None);
        assert_eq!(Priority::default(), Priority::Red);
    }
}
