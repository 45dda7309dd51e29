use crate::{DecodeError, MapLump};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::{fmt, str};

/// Length of a lump name in the directory, NUL padded
pub const LUMP_NAME_LEN: usize = 8;
const HEADER_SIZE: usize = 12;
const DIR_ENTRY_SIZE: usize = 16;

/// Will be either `IWAD` for a game, or `PWAD` for a patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WadType {
    IWad,
    PWad,
}

impl WadType {
    pub fn from_magic(magic: &[u8; 4]) -> Option<Self> {
        match magic {
            b"IWAD" => Some(Self::IWad),
            b"PWAD" => Some(Self::PWad),
            _ => None,
        }
    }

    pub const fn magic(&self) -> &'static [u8; 4] {
        match self {
            Self::IWad => b"IWAD",
            Self::PWad => b"PWAD",
        }
    }
}

/// Header which tells us the WAD type and where the directory is
///
/// The header structure in the WAD is as follows:
///
/// | Field Size | Data Type    | Content                                              |
/// |------------|--------------|------------------------------------------------------|
/// | 0x00-0x03  | 4 ASCII char | *Must* be an ASCII string (either "IWAD" or "PWAD")  |
/// | 0x04-0x07  | unsigned int | The number entries in the directory                  |
/// | 0x08-0x0b  | unsigned int | Offset in bytes to the directory in the WAD file     |
#[derive(Debug)]
struct WadHeader {
    wad_type: WadType,
    /// The count of "lumps" of data
    dir_count: usize,
    /// Offset in bytes that the directory starts at
    dir_offset: usize,
}

/// Contains the details for a lump of data: where it starts, the size of it,
/// and the name
///
/// The directory structure in the WAD is as follows:
///
/// | Field Size | Data Type    | Content                                                    |
/// |------------|--------------|------------------------------------------------------------|
/// | 0x00-0x03  | unsigned int | Offset value to the start of the lump data in the WAD file |
/// | 0x04-0x07  | unsigned int | The size of the lump in bytes                              |
/// | 0x08-0x0f  | 8 ASCII char | ASCII holding the name of the lump                         |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumpInfo {
    pub name: String,
    pub offset: usize,
    pub size: usize,
}

/// A borrowed view of one lump's bytes
#[derive(Debug, Clone, Copy)]
pub struct Lump<'a> {
    pub name: &'a str,
    pub data: &'a [u8],
}

impl Lump<'_> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Callers must have checked `offset + 2 <= len`
    pub fn read_i16(&self, offset: usize) -> i16 {
        i16::from_le_bytes([self.data[offset], self.data[offset + 1]])
    }

    pub fn read_u16(&self, offset: usize) -> u16 {
        u16::from_le_bytes([self.data[offset], self.data[offset + 1]])
    }

    /// Reads a NUL padded 8 byte name, such as a texture name
    pub fn read_name(&self, offset: usize) -> String {
        read_name(&self.data[offset..offset + LUMP_NAME_LEN])
    }
}

/// Everything after the first NUL is padding
pub(crate) fn read_name(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// "Where's All (the) Data": contains the WAD in memory, plus the directory
/// telling us where each data lump starts
pub struct WadData {
    wad_type: WadType,
    /// The WAD as an array of bytes read in to memory
    data: Vec<u8>,
    /// Tells us where each lump of data is, in directory order
    lumps: Vec<LumpInfo>,
}

impl fmt::Debug for WadData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("WadData")
            .field("wad_type", &self.wad_type)
            .field("len", &self.data.len())
            .field("lumps", &self.lumps.len())
            .finish()
    }
}

impl WadData {
    /// Read a WAD file from disk and parse its directory
    pub fn open<P: AsRef<Path>>(path: P) -> Result<WadData, DecodeError> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let wad = Self::from_bytes(data)?;
        info!(
            "Loaded {:?} from {:?}: {} lumps",
            wad.wad_type,
            path,
            wad.lumps.len()
        );
        Ok(wad)
    }

    /// Parse the header and directory of an in-memory WAD. The buffer is kept
    /// as is and lumps are handed out as borrowed slices of it.
    pub fn from_bytes(data: Vec<u8>) -> Result<WadData, DecodeError> {
        let header = read_header(&data)?;
        debug!("{:?}", header);
        let lumps = read_directory(&data, &header)?;
        Ok(WadData {
            wad_type: header.wad_type,
            data,
            lumps,
        })
    }

    pub fn wad_type(&self) -> WadType {
        self.wad_type
    }

    /// The directory, in file order
    pub fn lumps(&self) -> &[LumpInfo] {
        &self.lumps
    }

    /// Index of the lump named `name`. If more than one lump has the name
    /// then the last one in the directory wins, the same as a PWAD overriding
    /// an IWAD lump.
    pub fn lump_index(&self, name: &str) -> Option<usize> {
        self.lumps.iter().rposition(|l| l.name == name)
    }

    pub fn lump(&self, name: &str) -> Result<Lump<'_>, DecodeError> {
        self.lump_index(name)
            .and_then(|i| self.lump_at(i))
            .ok_or_else(|| DecodeError::LumpNotFound {
                name: name.to_owned(),
            })
    }

    pub fn lump_at(&self, index: usize) -> Option<Lump<'_>> {
        let info = self.lumps.get(index)?;
        // Bounds were checked when the directory was read
        Some(Lump {
            name: &info.name,
            data: &self.data[info.offset..info.offset + info.size],
        })
    }
}

fn read_header(data: &[u8]) -> Result<WadHeader, DecodeError> {
    if data.len() < HEADER_SIZE {
        // Still report a bad signature first if there is one to look at
        if data.len() >= 4 {
            let found = [data[0], data[1], data[2], data[3]];
            if WadType::from_magic(&found).is_none() {
                return Err(DecodeError::BadMagic { found });
            }
        }
        return Err(DecodeError::TruncatedHeader { len: data.len() });
    }

    let found = [data[0], data[1], data[2], data[3]];
    let wad_type = WadType::from_magic(&found).ok_or(DecodeError::BadMagic { found })?;

    Ok(WadHeader {
        wad_type,
        dir_count: read_u32(data, 4) as usize,
        dir_offset: read_u32(data, 8) as usize,
    })
}

fn read_directory(data: &[u8], header: &WadHeader) -> Result<Vec<LumpInfo>, DecodeError> {
    let dir_end = header
        .dir_count
        .checked_mul(DIR_ENTRY_SIZE)
        .and_then(|len| len.checked_add(header.dir_offset));
    if dir_end.is_none_or(|end| end > data.len()) {
        return Err(DecodeError::TruncatedDirectory {
            offset: header.dir_offset,
            count: header.dir_count,
            len: data.len(),
        });
    }

    let mut lumps = Vec::with_capacity(header.dir_count);
    for i in 0..header.dir_count {
        let entry = header.dir_offset + i * DIR_ENTRY_SIZE;
        let info = LumpInfo {
            offset: read_u32(data, entry) as usize,
            size: read_u32(data, entry + 4) as usize,
            name: read_name(&data[entry + 8..entry + 8 + LUMP_NAME_LEN]),
        };
        if info
            .offset
            .checked_add(info.size)
            .is_none_or(|end| end > data.len())
        {
            return Err(DecodeError::TruncatedLump {
                name: info.name,
                offset: info.offset,
                size: info.size,
                len: data.len(),
            });
        }
        lumps.push(info);
    }
    for name in duplicate_names(&lumps) {
        warn!("Duplicate lump {}, the last one is used", name);
    }
    Ok(lumps)
}

/// Names given to more than one lump, once each. Map lumps repeat once per
/// map so they are left out.
fn duplicate_names(lumps: &[LumpInfo]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(lumps.len());
    let mut dupes = Vec::new();
    for lump in lumps {
        let name = lump.name.as_str();
        if !seen.insert(name) && MapLump::from_name(name).is_none() && !dupes.contains(&name) {
            dupes.push(name);
        }
    }
    dupes
}
