use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Map};

/// Ordered mapping from color name to display value (hex string).
///
/// Order matters: the number keys select colors by position.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette(#[serde_as(as = "Map<_, _>")] Vec<(String, String)>);

impl Default for Palette {
    fn default() -> Self {
        Self::mosaic()
    }
}

impl Palette {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self(entries)
    }

    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }

    /// Tile glazes available for the triangle mosaic.
    pub fn mosaic() -> Self {
        Self::from_pairs(&[
            ("tusk", "#d1d1d1"),
            ("ember", "#e06f67"),
            ("tuolomne meadows", "#dfba5a"),
            ("tidewater", "#688b83"),
            ("tiki blue", "#5494b2"),
            ("sea green", "#6e876d"),
        ])
    }

    /// Glazes used by the Escher cube generator.
    pub fn cubes() -> Self {
        Self::from_pairs(&[
            ("tusk", "#f0ede8"),
            ("moonshine", "#e7ecf0"),
            ("french linen", "#dcdbd7"),
            ("salton sea", "#c8d3cb"),
            ("koi", "#f2b069"),
        ])
    }

    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.value_of(name).is_some()
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let palette = Palette::mosaic();
        assert_eq!(palette.value_of("ember"), Some("#e06f67"));
        assert_eq!(palette.value_of("koi"), None);
        assert_eq!(palette.name_at(0), Some("tusk"));
        assert_eq!(palette.name_at(5), Some("sea green"));
        assert_eq!(palette.name_at(6), None);
    }

    #[test]
    fn test_custom_palette_keeps_order() {
        let palette = Palette::new(vec![
            ("koi".to_string(), "#f2b069".to_string()),
            ("ember".to_string(), "#e06f67".to_string()),
        ]);
        assert_eq!(palette.len(), 2);
        assert!(palette.contains("koi"));
        assert_eq!(palette.iter().map(|(name, _)| name).collect::<Vec<_>>(), ["koi", "ember"]);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let json = serde_json::to_string(&Palette::cubes()).unwrap();
        assert!(json.starts_with(r##"{"tusk":"#f0ede8","moonshine""##));
        let parsed: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Palette::cubes());
        assert_eq!(parsed.name_at(4), Some("koi"));
    }
}
