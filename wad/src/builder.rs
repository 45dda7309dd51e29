//! Writes small WADs in memory. Used to make synthetic maps for tests and
//! benches without shipping game data.

use crate::types::{NO_SIDEDEF, WadLineDef, WadSideDef, WadThing};
use crate::{LUMP_NAME_LEN, WadType};

const HEADER_SIZE: usize = 12;

pub struct WadBuilder {
    wad_type: WadType,
    lumps: Vec<([u8; LUMP_NAME_LEN], Vec<u8>)>,
}

fn pad_name(name: &str) -> [u8; LUMP_NAME_LEN] {
    let mut n = [0u8; LUMP_NAME_LEN];
    for (dst, src) in n.iter_mut().zip(name.bytes()) {
        *dst = src;
    }
    n
}

impl WadBuilder {
    pub fn new(wad_type: WadType) -> Self {
        Self {
            wad_type,
            lumps: Vec::new(),
        }
    }

    /// Names longer than 8 bytes are cut short
    pub fn lump(self, name: &str, data: impl Into<Vec<u8>>) -> Self {
        self.raw_lump(pad_name(name), data)
    }

    /// Use the exact 8 name bytes, including anything after a NUL
    pub fn raw_lump(mut self, name: [u8; LUMP_NAME_LEN], data: impl Into<Vec<u8>>) -> Self {
        self.lumps.push((name, data.into()));
        self
    }

    /// An empty lump, such as a map marker
    pub fn marker(self, name: &str) -> Self {
        self.lump(name, Vec::new())
    }

    pub fn vertexes(self, vertexes: &[(i16, i16)]) -> Self {
        let mut data = Vec::with_capacity(vertexes.len() * 4);
        for (x, y) in vertexes {
            data.extend_from_slice(&x.to_le_bytes());
            data.extend_from_slice(&y.to_le_bytes());
        }
        self.lump("VERTEXES", data)
    }

    pub fn linedefs(self, lines: &[WadLineDef]) -> Self {
        let mut data = Vec::with_capacity(lines.len() * WadLineDef::RECORD_SIZE);
        for l in lines {
            data.extend_from_slice(&l.start_vertex.to_le_bytes());
            data.extend_from_slice(&l.end_vertex.to_le_bytes());
            data.extend_from_slice(&l.flags.to_le_bytes());
            data.extend_from_slice(&l.special.to_le_bytes());
            data.extend_from_slice(&l.sector_tag.to_le_bytes());
            data.extend_from_slice(&l.front_sidedef.to_le_bytes());
            data.extend_from_slice(&l.back_sidedef.unwrap_or(NO_SIDEDEF).to_le_bytes());
        }
        self.lump("LINEDEFS", data)
    }

    pub fn sidedefs(self, sides: &[WadSideDef]) -> Self {
        let mut data = Vec::with_capacity(sides.len() * WadSideDef::RECORD_SIZE);
        for s in sides {
            data.extend_from_slice(&s.x_offset.to_le_bytes());
            data.extend_from_slice(&s.y_offset.to_le_bytes());
            data.extend_from_slice(&pad_name(&s.upper_tex));
            data.extend_from_slice(&pad_name(&s.lower_tex));
            data.extend_from_slice(&pad_name(&s.middle_tex));
            data.extend_from_slice(&s.sector.to_le_bytes());
        }
        self.lump("SIDEDEFS", data)
    }

    pub fn things(self, things: &[WadThing]) -> Self {
        let mut data = Vec::with_capacity(things.len() * WadThing::RECORD_SIZE);
        for t in things {
            for field in [t.x, t.y, t.angle, t.kind, t.flags] {
                data.extend_from_slice(&field.to_le_bytes());
            }
        }
        self.lump("THINGS", data)
    }

    /// Header, then all lump data, then the directory
    pub fn build(&self) -> Vec<u8> {
        let data_len: usize = self.lumps.iter().map(|(_, d)| d.len()).sum();
        let dir_offset = HEADER_SIZE + data_len;

        let mut out = Vec::with_capacity(dir_offset + self.lumps.len() * 16);
        out.extend_from_slice(self.wad_type.magic());
        out.extend_from_slice(&(self.lumps.len() as u32).to_le_bytes());
        out.extend_from_slice(&(dir_offset as u32).to_le_bytes());

        let mut dir = Vec::with_capacity(self.lumps.len() * 16);
        for (name, data) in &self.lumps {
            dir.extend_from_slice(&(out.len() as u32).to_le_bytes());
            dir.extend_from_slice(&(data.len() as u32).to_le_bytes());
            dir.extend_from_slice(name);
            out.extend_from_slice(data);
        }
        out.extend_from_slice(&dir);
        out
    }
}
