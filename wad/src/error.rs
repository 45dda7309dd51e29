use thiserror::Error;

/// Everything that can go wrong while reading a WAD or one of its maps.
///
/// Each variant carries the lump name, offsets and sizes involved so that the
/// caller can report exactly which part of the file is broken.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("could not read WAD: {0}")]
    Io(#[from] std::io::Error),
    /// The first four bytes are not a recognised WAD signature
    #[error("unrecognised WAD signature {found:?}")]
    BadMagic { found: [u8; 4] },
    #[error("WAD is {len} bytes, too short for a header")]
    TruncatedHeader { len: usize },
    #[error("directory of {count} entries at offset {offset} runs past end of WAD ({len} bytes)")]
    TruncatedDirectory { offset: usize, count: usize, len: usize },
    /// A directory entry points outside the buffer
    #[error("lump {name} at offset {offset} with size {size} runs past end of WAD ({len} bytes)")]
    TruncatedLump {
        name: String,
        offset: usize,
        size: usize,
        len: usize,
    },
    /// The lump size is not a whole number of records
    #[error("lump {name} is {len} bytes, not a multiple of the {record_size} byte record")]
    MalformedLump {
        name: String,
        record_size: usize,
        len: usize,
    },
    #[error("no lump named {name}")]
    LumpNotFound { name: String },
    #[error("no map marker named {name}")]
    MapNotFound { name: String },
    #[error("map {map} has no {lump} lump")]
    MissingLump { map: String, lump: String },
    /// A record references an entry of another lump that does not exist
    #[error("map {map}: {lump} record {record} references index {index}, but only {count} exist")]
    IndexOutOfRange {
        map: String,
        lump: String,
        record: usize,
        index: usize,
        count: usize,
    },
}
