use crate::{DecodeError, Lump, WadData};
use log::debug;
use std::fmt;

/// The lumps that make up a map, listed in the order they follow the map
/// marker in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapLump {
    /// Position and angle for all monster, powerup and spawn location
    Things,
    /// An array of lines referencing two vertices (Two vertexes are connected
    /// by one `LineDef`). Also points to one or two `SideDef` depending on if
    /// this line is a wall or a portal
    LineDefs,
    /// Defines upper, lower, and middle textures. Also defines texture
    /// horizontal and vertical offsets. This is information for a `LineDef`
    SideDefs,
    /// An array of signed short X, Y pairs (`Vertex`). All coordinates in this
    /// map block are indexes into this array
    Vertexes,
    /// Portions of lines cut due to Binary Space Partitioning
    Segs,
    /// Set of segments of a `LineDef` representing a convex subspace
    SSectors,
    /// BSP with segs, nodes and sub-sector leaves
    Nodes,
    /// Area surrounded by lines, with set ceiling and floor textures/heights
    /// with light level
    Sectors,
    /// Sector-to-sector visibility matrix to speed-up line of sight
    /// calculations
    Reject,
    /// 128x128 grid partition of the map LINEDEFS to accelerate collision
    /// detection
    Blockmap,
    /// Hexen format scripts
    Behavior,
}

impl MapLump {
    pub const ALL: [MapLump; 11] = [
        MapLump::Things,
        MapLump::LineDefs,
        MapLump::SideDefs,
        MapLump::Vertexes,
        MapLump::Segs,
        MapLump::SSectors,
        MapLump::Nodes,
        MapLump::Sectors,
        MapLump::Reject,
        MapLump::Blockmap,
        MapLump::Behavior,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            MapLump::Things => "THINGS",
            MapLump::LineDefs => "LINEDEFS",
            MapLump::SideDefs => "SIDEDEFS",
            MapLump::Vertexes => "VERTEXES",
            MapLump::Segs => "SEGS",
            MapLump::SSectors => "SSECTORS",
            MapLump::Nodes => "NODES",
            MapLump::Sectors => "SECTORS",
            MapLump::Reject => "REJECT",
            MapLump::Blockmap => "BLOCKMAP",
            MapLump::Behavior => "BEHAVIOR",
        }
    }

    pub fn from_name(name: &str) -> Option<MapLump> {
        Self::ALL.into_iter().find(|l| l.name() == name)
    }
}

impl fmt::Display for MapLump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The run of component lumps belonging to one map
#[derive(Debug, Clone)]
pub struct MapLumps<'a> {
    name: &'a str,
    marker: usize,
    lumps: Vec<(MapLump, Lump<'a>)>,
}

impl<'a> MapLumps<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Directory index of the map marker
    pub fn marker_index(&self) -> usize {
        self.marker
    }

    pub fn get(&self, kind: MapLump) -> Option<Lump<'a>> {
        self.lumps.iter().find(|(k, _)| *k == kind).map(|(_, l)| *l)
    }

    pub fn expect(&self, kind: MapLump) -> Result<Lump<'a>, DecodeError> {
        self.get(kind).ok_or_else(|| DecodeError::MissingLump {
            map: self.name.to_owned(),
            lump: kind.name().to_owned(),
        })
    }

    pub fn kinds(&self) -> impl Iterator<Item = MapLump> + '_ {
        self.lumps.iter().map(|(k, _)| *k)
    }
}

impl WadData {
    /// A map marker is any lump that is not itself a map component and is
    /// directly followed by one.
    pub fn is_map_marker(&self, index: usize) -> bool {
        let lumps = self.lumps();
        match (lumps.get(index), lumps.get(index + 1)) {
            (Some(marker), Some(next)) => {
                MapLump::from_name(&marker.name).is_none()
                    && MapLump::from_name(&next.name).is_some()
            }
            _ => false,
        }
    }

    /// Names of every map in the WAD, in directory order. A name overridden
    /// later in the directory is listed once, at its first position.
    pub fn map_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (i, info) in self.lumps().iter().enumerate() {
            if self.is_map_marker(i) && !names.contains(&info.name.as_str()) {
                names.push(&info.name);
            }
        }
        names
    }

    /// Find the map marker named `map_name` and collect the component lumps
    /// following it, up to the next lump that is not a map component. The
    /// last marker with the name wins.
    pub fn map_lumps(&self, map_name: &str) -> Result<MapLumps<'_>, DecodeError> {
        let marker = (0..self.lumps().len())
            .rev()
            .find(|&i| self.lumps()[i].name == map_name && self.is_map_marker(i))
            .ok_or_else(|| DecodeError::MapNotFound {
                name: map_name.to_owned(),
            })?;

        let mut lumps = Vec::new();
        for index in marker + 1..self.lumps().len() {
            let Some(lump) = self.lump_at(index) else {
                break;
            };
            let Some(kind) = MapLump::from_name(lump.name) else {
                break;
            };
            lumps.push((kind, lump));
        }
        debug!(
            "Map {} at lump {} has {} component lumps",
            map_name,
            marker,
            lumps.len()
        );

        Ok(MapLumps {
            name: &self.lumps()[marker].name,
            marker,
            lumps,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::WadBuilder;
    use crate::{DecodeError, MapLump, WadData, WadType};

    fn two_map_wad() -> WadData {
        let bytes = WadBuilder::new(WadType::IWad)
            .lump("PLAYPAL", vec![0; 4])
            .marker("E1M1")
            .lump("THINGS", Vec::new())
            .lump("LINEDEFS", Vec::new())
            .lump("VERTEXES", vec![1, 0, 2, 0])
            .marker("E1M2")
            .lump("THINGS", Vec::new())
            .lump("LINEDEFS", Vec::new())
            .lump("VERTEXES", vec![3, 0, 4, 0, 5, 0, 6, 0])
            .lump("ENDOOM", vec![0; 2])
            .build();
        WadData::from_bytes(bytes).unwrap()
    }

    #[test]
    fn lists_maps() {
        let wad = two_map_wad();
        assert_eq!(wad.map_names(), vec!["E1M1", "E1M2"]);
        assert!(!wad.is_map_marker(0));
        assert!(wad.is_map_marker(1));
    }

    #[test]
    fn run_stops_at_next_marker() {
        let wad = two_map_wad();
        let map = wad.map_lumps("E1M1").unwrap();
        assert_eq!(map.name(), "E1M1");
        assert_eq!(map.marker_index(), 1);
        assert_eq!(
            map.kinds().collect::<Vec<_>>(),
            vec![MapLump::Things, MapLump::LineDefs, MapLump::Vertexes]
        );
        // The run must not reach in to E1M2's VERTEXES
        assert_eq!(map.expect(MapLump::Vertexes).unwrap().len(), 4);
    }

    #[test]
    fn run_stops_at_other_lump() {
        let wad = two_map_wad();
        let map = wad.map_lumps("E1M2").unwrap();
        assert_eq!(map.kinds().count(), 3);
        assert_eq!(map.expect(MapLump::Vertexes).unwrap().len(), 8);
    }

    #[test]
    fn missing_map() {
        let wad = two_map_wad();
        assert!(matches!(
            wad.map_lumps("MAP99"),
            Err(DecodeError::MapNotFound { name }) if name == "MAP99"
        ));
        // Present, but not a marker
        assert!(matches!(
            wad.map_lumps("PLAYPAL"),
            Err(DecodeError::MapNotFound { .. })
        ));
    }

    #[test]
    fn missing_component() {
        let wad = two_map_wad();
        let map = wad.map_lumps("E1M1").unwrap();
        assert!(map.get(MapLump::SideDefs).is_none());
        assert!(matches!(
            map.expect(MapLump::SideDefs),
            Err(DecodeError::MissingLump { map, lump }) if map == "E1M1" && lump == "SIDEDEFS"
        ));
    }

    #[test]
    fn later_marker_overrides() {
        let bytes = WadBuilder::new(WadType::PWad)
            .marker("MAP01")
            .lump("VERTEXES", vec![0; 4])
            .marker("MAP01")
            .lump("VERTEXES", vec![0; 12])
            .build();
        let wad = WadData::from_bytes(bytes).unwrap();
        assert_eq!(wad.map_names(), vec!["MAP01"]);
        let map = wad.map_lumps("MAP01").unwrap();
        assert_eq!(map.marker_index(), 2);
        assert_eq!(map.expect(MapLump::Vertexes).unwrap().len(), 12);
    }
}
