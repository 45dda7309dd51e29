use crate::types::*;
use crate::{DecodeError, Lump, MapLump, MapLumps, LUMP_NAME_LEN};
use std::marker::PhantomData;

/// Walks a lump one fixed-size record at a time, handing each record's
/// offset to `transformer`
pub struct LumpIter<T, F: Fn(usize) -> T> {
    item_size: usize,
    item_count: usize,
    current: usize,
    transformer: F,
    _phantom: PhantomData<T>,
}

impl<T, F> Iterator for LumpIter<T, F>
where
    F: Fn(usize) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.item_count {
            let offset = self.current * self.item_size;
            let item = (self.transformer)(offset);
            self.current += 1;
            return Some(item);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.item_count - self.current;
        (remaining, Some(remaining))
    }
}

impl<T, F> ExactSizeIterator for LumpIter<T, F> where F: Fn(usize) -> T {}

/// Checks the lump holds a whole number of records and returns how many
fn record_count(lump: &Lump, item_size: usize) -> Result<usize, DecodeError> {
    if lump.len() % item_size != 0 {
        return Err(DecodeError::MalformedLump {
            name: lump.name.to_owned(),
            record_size: item_size,
            len: lump.len(),
        });
    }
    Ok(lump.len() / item_size)
}

fn lump_iter<'a, T>(
    lump: Lump<'a>,
    item_size: usize,
    transformer: impl Fn(Lump<'a>, usize) -> T + 'a,
) -> Result<LumpIter<T, impl Fn(usize) -> T + 'a>, DecodeError>
where
    T: 'a,
{
    let item_count = record_count(&lump, item_size)?;
    Ok(LumpIter {
        item_size,
        item_count,
        current: 0,
        transformer: move |offset| transformer(lump, offset),
        _phantom: PhantomData,
    })
}

impl<'a> MapLumps<'a> {
    pub fn vertex_iter(
        &self,
    ) -> Result<LumpIter<WadVertex, impl Fn(usize) -> WadVertex + 'a>, DecodeError> {
        let lump = self.expect(MapLump::Vertexes)?;
        lump_iter(lump, WadVertex::RECORD_SIZE, |lump, offset| {
            WadVertex::new(lump.read_i16(offset), lump.read_i16(offset + 2))
        })
    }

    pub fn linedef_iter(
        &self,
    ) -> Result<LumpIter<WadLineDef, impl Fn(usize) -> WadLineDef + 'a>, DecodeError> {
        let lump = self.expect(MapLump::LineDefs)?;
        lump_iter(lump, WadLineDef::RECORD_SIZE, |lump, offset| {
            let back_sidedef = match lump.read_u16(offset + 12) {
                NO_SIDEDEF => None,
                index => Some(index),
            };
            WadLineDef::new(
                lump.read_u16(offset),
                lump.read_u16(offset + 2),
                lump.read_i16(offset + 4),
                lump.read_i16(offset + 6),
                lump.read_i16(offset + 8),
                lump.read_u16(offset + 10),
                back_sidedef,
            )
        })
    }

    pub fn sidedef_iter(
        &self,
    ) -> Result<LumpIter<WadSideDef, impl Fn(usize) -> WadSideDef + 'a>, DecodeError> {
        let lump = self.expect(MapLump::SideDefs)?;
        lump_iter(lump, WadSideDef::RECORD_SIZE, |lump, offset| WadSideDef {
            x_offset: lump.read_i16(offset),
            y_offset: lump.read_i16(offset + 2),
            upper_tex: lump.read_name(offset + 4),
            lower_tex: lump.read_name(offset + 4 + LUMP_NAME_LEN),
            middle_tex: lump.read_name(offset + 4 + LUMP_NAME_LEN * 2),
            sector: lump.read_i16(offset + 28),
        })
    }

    pub fn thing_iter(
        &self,
    ) -> Result<LumpIter<WadThing, impl Fn(usize) -> WadThing + 'a>, DecodeError> {
        let lump = self.expect(MapLump::Things)?;
        lump_iter(lump, WadThing::RECORD_SIZE, |lump, offset| {
            WadThing::new(
                lump.read_i16(offset),
                lump.read_i16(offset + 2),
                lump.read_i16(offset + 4),
                lump.read_i16(offset + 6),
                lump.read_i16(offset + 8),
            )
        })
    }
}
