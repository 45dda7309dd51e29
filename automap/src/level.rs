use log::{debug, info};
use wad::types::{LineDefFlags, NO_SIDEDEF, WadLineDef, WadSideDef};
use wad::{DecodeError, MapLump, WadData};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    pub x: i16,
    pub y: i16,
}

/// A wall segment between two vertexes of the level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDef {
    /// Index in to `Level::vertexes`, always valid
    pub start_vertex: usize,
    pub end_vertex: usize,
    /// Set from `LineDefFlags::TwoSided`. A two-sided line can be seen through
    /// and usually walked through, a one-sided line is solid wall.
    pub two_sided: bool,
    /// The line triggers an action (door, lift, switch, teleport...)
    pub has_special_action: bool,
    pub flags: i16,
    pub special: i16,
    pub sector_tag: i16,
    pub front_sidedef: Option<u16>,
    pub back_sidedef: Option<u16>,
}

impl LineDef {
    fn from_wad(l: &WadLineDef) -> LineDef {
        LineDef {
            start_vertex: l.start_vertex as usize,
            end_vertex: l.end_vertex as usize,
            two_sided: LineDefFlags::TwoSided.is_set(l.flags),
            has_special_action: l.special != 0,
            flags: l.flags,
            special: l.special,
            sector_tag: l.sector_tag,
            front_sidedef: (l.front_sidedef != NO_SIDEDEF).then_some(l.front_sidedef),
            back_sidedef: l.back_sidedef,
        }
    }
}

/// A spawn point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thing {
    pub x: i16,
    pub y: i16,
    /// Facing, in degrees
    pub angle: i16,
    pub type_code: i16,
    pub flags: i16,
}

/// The geometry of one map, decoded and checked. Nothing in here can be
/// changed after `assemble`, so every index held by a `LineDef` stays valid.
#[derive(Debug, Clone, Default)]
pub struct Level {
    name: String,
    vertexes: Vec<Vertex>,
    linedefs: Vec<LineDef>,
    sidedefs: Vec<WadSideDef>,
    things: Vec<Thing>,
}

impl Level {
    /// Decode the map marked by `map_name`. Things are only read if
    /// `include_things` is set, otherwise `things()` is empty.
    ///
    /// A bad reference in one map fails only that map, the `WadData` and its
    /// other maps are untouched.
    pub fn assemble(
        wad: &WadData,
        map_name: &str,
        include_things: bool,
    ) -> Result<Level, DecodeError> {
        let lumps = wad.map_lumps(map_name)?;

        let vertexes: Vec<Vertex> = lumps
            .vertex_iter()?
            .map(|v| Vertex { x: v.x, y: v.y })
            .collect();
        debug!("{}: {} vertexes", map_name, vertexes.len());

        // Side references can only be checked if the map has sides to check
        // against
        let check_sides = lumps.get(MapLump::SideDefs).is_some();
        let sidedefs: Vec<WadSideDef> = if check_sides {
            lumps.sidedef_iter()?.collect()
        } else {
            Vec::new()
        };

        let out_of_range = |record: usize, index: usize, count: usize| {
            DecodeError::IndexOutOfRange {
                map: map_name.to_owned(),
                lump: MapLump::LineDefs.name().to_owned(),
                record,
                index,
                count,
            }
        };

        let mut linedefs = Vec::new();
        for (num, raw) in lumps.linedef_iter()?.enumerate() {
            let line = LineDef::from_wad(&raw);
            for index in [line.start_vertex, line.end_vertex] {
                if index >= vertexes.len() {
                    return Err(out_of_range(num, index, vertexes.len()));
                }
            }
            if check_sides {
                for side in [line.front_sidedef, line.back_sidedef].into_iter().flatten() {
                    if side as usize >= sidedefs.len() {
                        return Err(out_of_range(num, side as usize, sidedefs.len()));
                    }
                }
            }
            linedefs.push(line);
        }
        debug!("{}: {} linedefs", map_name, linedefs.len());

        let things = if include_things {
            lumps
                .thing_iter()?
                .map(|t| Thing {
                    x: t.x,
                    y: t.y,
                    angle: t.angle,
                    type_code: t.kind,
                    flags: t.flags,
                })
                .collect()
        } else {
            Vec::new()
        };

        info!(
            "{}: Loaded {} vertexes, {} linedefs, {} sidedefs, {} things",
            map_name,
            vertexes.len(),
            linedefs.len(),
            sidedefs.len(),
            things.len()
        );

        Ok(Level {
            name: lumps.name().to_owned(),
            vertexes,
            linedefs,
            sidedefs,
            things,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertexes(&self) -> &[Vertex] {
        &self.vertexes
    }

    pub fn linedefs(&self) -> &[LineDef] {
        &self.linedefs
    }

    pub fn sidedefs(&self) -> &[WadSideDef] {
        &self.sidedefs
    }

    pub fn things(&self) -> &[Thing] {
        &self.things
    }

    /// The two ends of a line
    pub fn line_vertexes(&self, line: &LineDef) -> (Vertex, Vertex) {
        (
            self.vertexes[line.start_vertex],
            self.vertexes[line.end_vertex],
        )
    }
}
