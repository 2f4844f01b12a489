use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_COLOR: &str = "tusk";

/// Which corner the first triangle of a module points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Nw,
    Sw,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Nw => Orientation::Sw,
            Orientation::Sw => Orientation::Nw,
        }
    }
}

/// One grid cell: two triangles sharing a square, separated by a grout line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Module {
    #[serde(default = "default_colors", deserialize_with = "deserialize_colors")]
    pub colors: [String; 2],
    #[serde(default)]
    pub orientation: Orientation,
}

fn default_colors() -> [String; 2] {
    [DEFAULT_COLOR.to_string(), DEFAULT_COLOR.to_string()]
}

/// Saved grids may hold `null` for a triangle that was never painted.
fn deserialize_colors<'de, D>(deserializer: D) -> Result<[String; 2], D::Error>
where
    D: Deserializer<'de>,
{
    let [first, second] = <[Option<String>; 2]>::deserialize(deserializer)?;
    let or_default = |color: Option<String>| color.unwrap_or_else(|| DEFAULT_COLOR.to_string());
    Ok([or_default(first), or_default(second)])
}

impl Default for Module {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            orientation: Orientation::default(),
        }
    }
}

impl Module {
    pub fn new(first: &str, second: &str, orientation: Orientation) -> Self {
        Self {
            colors: [first.to_string(), second.to_string()],
            orientation,
        }
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = match self.orientation {
            Orientation::Nw => '\\',
            Orientation::Sw => '/',
        };
        write!(f, "{}{}{}", self.colors[0], marker, self.colors[1])
    }
}
