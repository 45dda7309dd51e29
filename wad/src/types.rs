//! Structures, in WAD order, for the lumps a map needs to be drawn:
//!  - Thing
//!  - LineDef
//!  - SideDef
//!  - Vertex

/// A side reference of `0xFFFF` means the line has no side there
pub const NO_SIDEDEF: u16 = 0xFFFF;

/// A `Thing` describes only the position, type, and angle + spawn flags
///
/// The data in the WAD lump is structured as follows:
///
/// | Field Size | Data Type | Content    |
/// |------------|-----------|------------|
/// |  0x00-0x01 |    i16    | X Position |
/// |  0x02-0x03 |    i16    | Y Position |
/// |  0x04-0x05 |    i16    | Angle      |
/// |  0x06-0x07 |    i16    | Type       |
/// |  0x08-0x09 |    i16    | Flags      |
///
/// Each `Thing` record is 10 bytes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WadThing {
    pub x: i16,
    pub y: i16,
    pub angle: i16,
    pub kind: i16,
    pub flags: i16,
}

impl WadThing {
    pub const RECORD_SIZE: usize = 10;

    pub fn new(x: i16, y: i16, angle: i16, kind: i16, flags: i16) -> WadThing {
        WadThing {
            x,
            y,
            angle,
            kind,
            flags,
        }
    }
}

/// A `Vertex` is the basic struct used for any type of coordinate in a map
///
/// | Field Size | Data Type | Content      |
/// |------------|-----------|--------------|
/// |  0x00-0x01 |    i16    | X Coordinate |
/// |  0x02-0x03 |    i16    | Y Coordinate |
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct WadVertex {
    pub x: i16,
    pub y: i16,
}

impl WadVertex {
    pub const RECORD_SIZE: usize = 4;

    pub fn new(x: i16, y: i16) -> WadVertex {
        WadVertex { x, y }
    }
}

/// Each linedef represents a line from one of the VERTEXES to another.
///
///| Field Size | Data Type      | Content                                   |
///|------------|----------------|-------------------------------------------|
///|  0x00-0x01 | Unsigned short | Start vertex                              |
///|  0x02-0x03 | Unsigned short | End vertex                                |
///|  0x04-0x05 | Signed short   | Flags (see `LineDefFlags`)                |
///|  0x06-0x07 | Signed short   | Line type / Action                        |
///|  0x08-0x09 | Signed short   | Sector tag                                |
///|  0x0A-0x0B | Unsigned short | Front sidedef ( 0xFFFF side not present ) |
///|  0x0C-0x0D | Unsigned short | Back sidedef  ( 0xFFFF side not present ) |
///
/// Each linedef's record is 14 bytes, and is made up of 7 16-bit fields
///
/// A Linedef will always have at least one side. This first side is referred
/// to as either front or right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WadLineDef {
    /// The line starts from this point
    pub start_vertex: u16,
    /// The line ends at this point
    pub end_vertex: u16,
    /// The line attributes, see `LineDefFlags`
    pub flags: i16,
    /// Action triggered by the line, 0 is none
    pub special: i16,
    /// This is a number which ties this line's effect type to all SECTORS
    /// that have the same tag number
    pub sector_tag: i16,
    pub front_sidedef: u16,
    /// `None` if the parsed value is `0xFFFF`
    pub back_sidedef: Option<u16>,
}

impl WadLineDef {
    pub const RECORD_SIZE: usize = 14;

    pub fn new(
        start_vertex: u16,
        end_vertex: u16,
        flags: i16,
        special: i16,
        sector_tag: i16,
        front_sidedef: u16,
        back_sidedef: Option<u16>,
    ) -> WadLineDef {
        WadLineDef {
            start_vertex,
            end_vertex,
            flags,
            special,
            sector_tag,
            front_sidedef,
            back_sidedef,
        }
    }
}

/// Bits of `WadLineDef::flags`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDefFlags {
    /// Players and monsters cannot cross this line
    Blocking = 1,
    BlockMonsters = 1 << 1,
    /// The line borders two sectors, so can be seen through and often crossed
    TwoSided = 1 << 2,
    UnpegTop = 1 << 3,
    UnpegBottom = 1 << 4,
    /// Drawn as a one-sided wall on the automap
    Secret = 1 << 5,
    BlockSound = 1 << 6,
    NeverOnAutomap = 1 << 7,
    AlwaysOnAutomap = 1 << 8,
}

impl LineDefFlags {
    pub const fn is_set(self, flags: i16) -> bool {
        flags as u16 & self as u16 != 0
    }
}

/// A sidedef is a definition of what wall texture(s) to draw along a
/// `LineDef`, and a group of sidedefs outline the space of a `Sector`
///
/// | Field Size | Data Type | Content                  |
/// |------------|-----------|--------------------------|
/// |  0x00-0x01 |    i16    | X offset                 |
/// |  0x02-0x03 |    i16    | Y offset                 |
/// |  0x04-0x0B |  8 ASCII  | Upper texture name       |
/// |  0x0C-0x13 |  8 ASCII  | Lower texture name       |
/// |  0x14-0x1B |  8 ASCII  | Middle texture name      |
/// |  0x1C-0x1D |    i16    | Sector this side faces   |
///
/// Each `SideDef` record is 30 bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WadSideDef {
    pub x_offset: i16,
    pub y_offset: i16,
    /// Name of upper texture used for example in the upper of a window
    pub upper_tex: String,
    /// Name of lower texture used for example in the front of a step
    pub lower_tex: String,
    /// The regular part of a wall
    pub middle_tex: String,
    /// Sector that this sidedef faces or helps to surround
    pub sector: i16,
}

impl WadSideDef {
    pub const RECORD_SIZE: usize = 30;
}
