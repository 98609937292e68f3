use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Graphviz color names handed out to node groups.
///
/// Black and white are left out so node labels stay readable.
/// See <https://graphviz.org/doc/info/colors.html>.
pub const GRAPHVIZ_COLORS: &[&str] = &[
    "aqua",
    "azure",
    "beige",
    "blue",
    "brown",
    "cyan",
    "darkblue",
    "darkcyan",
    "darkgrey",
    "darkgreen",
    "darkkhaki",
    "darkmagenta",
    "darkolivegreen",
    "darkorange",
    "darkorchid",
    "darkred",
    "darksalmon",
    "darkviolet",
    "fuchsia",
    "gold",
    "green",
    "indigo",
    "khaki",
    "lightblue",
    "lightcyan",
    "lightgreen",
    "lightgrey",
    "lightpink",
    "lightyellow",
    "lime",
    "magenta",
    "maroon",
    "navy",
    "olive",
    "orange",
    "pink",
    "purple",
    "violet",
    "red",
    "silver",
    "yellow",
    "palegoldenrod",
    "palegreen",
    "paleturquoise",
    "palevioletred1",
    "skyblue1",
    "slategray1",
    "seashell1",
    "lightslateblue",
    "darkseagreen",
    "peachpuff",
    "plum1",
    "plum3",
    "khaki1",
];

/// An ordered, immutable list of color names.
///
/// Cloning is cheap; all clones share the same backing list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ColorPalette {
    colors: Arc<[String]>,
}

impl ColorPalette {
    /// Builds a palette from the given names. An empty list falls back to
    /// [`GRAPHVIZ_COLORS`] so that assignment always has something to hand out.
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Self::default();
        }
        Self {
            colors: colors.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }

    /// Starts a fresh assignment scoped to one formula invocation.
    pub fn assigner(&self) -> ColorAssigner<'_> {
        ColorAssigner::new(self)
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            colors: GRAPHVIZ_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl From<Vec<String>> for ColorPalette {
    fn from(colors: Vec<String>) -> Self {
        Self::new(colors)
    }
}

impl From<ColorPalette> for Vec<String> {
    fn from(palette: ColorPalette) -> Self {
        palette.colors.to_vec()
    }
}

/// Hands out palette colors to group keys, one color per distinct key.
///
/// Unseen keys take the color under the cursor, which walks the palette from
/// the front and wraps back to the first entry once every color has been used.
#[derive(Debug)]
pub struct ColorAssigner<'a> {
    palette: &'a ColorPalette,
    cursor: usize,
    assigned: AHashMap<String, &'a str>,
}

impl<'a> ColorAssigner<'a> {
    pub fn new(palette: &'a ColorPalette) -> Self {
        Self {
            palette,
            cursor: 0,
            assigned: AHashMap::new(),
        }
    }

    /// Returns the color bound to `key`, binding the next palette color first
    /// if the key has not been seen in this assignment.
    pub fn color_for(&mut self, key: &str) -> &'a str {
        if let Some(color) = self.assigned.get(key) {
            return *color;
        }

        if self.cursor >= self.palette.len() {
            log::debug!("Palette exhausted after {} groups, refilling", self.assigned.len());
            self.cursor = 0;
        }
        let palette: &'a ColorPalette = self.palette;
        let color = palette.colors[self.cursor].as_str();
        self.cursor += 1;

        log::debug!("Assigned color '{}' to group '{}'", color, key);
        self.assigned.insert(key.to_string(), color);
        color
    }

    /// Number of distinct keys bound so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
