use automap::{AutomapConfig, DrawList, Level};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wad::builder::WadBuilder;
use wad::types::WadLineDef;
use wad::{WadData, WadType};

/// A grid of rooms roughly the size of a large Doom II map
fn big_map() -> WadData {
    let side = 64i16;
    let mut vertexes = Vec::new();
    for y in 0..side {
        for x in 0..side {
            vertexes.push((x * 64 - 2048, -(y * 64) + 2048));
        }
    }
    let mut lines = Vec::new();
    for y in 0..side as u16 {
        for x in 0..side as u16 - 1 {
            let v = y * side as u16 + x;
            let flags = if (x + y) % 3 == 0 { 1 } else { 4 };
            lines.push(WadLineDef::new(v, v + 1, flags, 0, 0, 0, None));
        }
    }
    let bytes = WadBuilder::new(WadType::PWad)
        .marker("MAP01")
        .linedefs(&lines)
        .vertexes(&vertexes)
        .build();
    WadData::from_bytes(bytes).unwrap()
}

fn bench(c: &mut Criterion) {
    let wad = big_map();
    c.bench_function("Assemble MAP01", |b| {
        b.iter(|| Level::assemble(&wad, black_box("MAP01"), false).unwrap())
    });

    let level = Level::assemble(&wad, "MAP01", false).unwrap();
    let config = AutomapConfig::default();
    c.bench_function("Project and sequence MAP01", |b| {
        b.iter(|| DrawList::build(black_box(&level), &config))
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
