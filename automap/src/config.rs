use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colours used for the map. The defaults follow the Doom automap: red solid
/// walls, brown two-sided lines, yellow for lines that do something, green
/// things.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    /// One-sided lines
    pub wall: Rgb,
    pub two_sided: Rgb,
    /// Lines with an action special, whatever their sidedness
    pub special: Rgb,
    pub thing: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(0, 0, 0),
            wall: Rgb::new(252, 0, 0),
            two_sided: Rgb::new(188, 120, 72),
            special: Rgb::new(252, 252, 0),
            thing: Rgb::new(116, 252, 108),
        }
    }
}

/// Everything a caller picks per render
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomapConfig {
    /// Target length in pixels of the canvas' long edge, border included
    pub max_pixels: i32,
    /// Fixed margin in pixels around the map
    pub border: i32,
    /// Decode the THINGS lump and emit spawn markers
    pub include_things: bool,
    pub palette: Palette,
}

impl Default for AutomapConfig {
    fn default() -> Self {
        Self {
            max_pixels: 1024,
            border: 8,
            include_things: false,
            palette: Palette::default(),
        }
    }
}
