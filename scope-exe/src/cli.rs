use argh::FromArgs;

/// Draw a top-down map of a level from a Doom WAD, as SVG
#[derive(Debug, Clone, FromArgs)]
pub struct CLIOptions {
    /// verbose level: off, error, warn, info, debug, trace
    #[argh(option)]
    pub verbose: Option<log::LevelFilter>,
    /// path to the WAD to read. Remembered for the next run
    #[argh(option, default = "Default::default()")]
    pub wad: String,
    /// map to draw, such as E1M1 or MAP01. Defaults to the first map in the
    /// WAD
    #[argh(option)]
    pub map: Option<String>,
    /// list the maps in the WAD and exit
    #[argh(switch)]
    pub list: bool,
    /// length in pixels of the long edge of the image
    #[argh(option)]
    pub max_pixels: Option<i32>,
    /// margin in pixels around the map
    #[argh(option)]
    pub border: Option<i32>,
    /// draw thing spawn points
    #[argh(option)]
    pub things: Option<bool>,
    /// file to write, defaults to <map>.svg
    #[argh(option)]
    pub output: Option<String>,
}
