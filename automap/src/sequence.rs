use crate::config::{Palette, Rgb};
use crate::level::{Level, LineDef};
use crate::projection::{MapExtents, ProjectionContext};
use glam::IVec2;
use log::debug;

/// One line on the canvas, ready to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub p1: IVec2,
    pub p2: IVec2,
    pub color: Rgb,
    /// `false` for two-sided lines, `true` for one-sided. Commands are sorted
    /// on this so that solid walls are drawn last, over anything passable.
    pub order_key: bool,
}

/// Where a thing spawns, on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnMarker {
    pub p: IVec2,
    pub angle: i16,
    pub type_code: i16,
    pub color: Rgb,
}

/// An action special wins over sidedness, then two-sided lines get their own
/// colour and anything left is wall.
pub fn line_color(line: &LineDef, palette: &Palette) -> Rgb {
    if line.has_special_action {
        palette.special
    } else if line.two_sided {
        palette.two_sided
    } else {
        palette.wall
    }
}

/// Turn every linedef of the level in to a draw command. Two-sided lines
/// come first and one-sided lines after, otherwise lines keep their order
/// from the LINEDEFS lump. The result must be drawn in order.
pub fn sequence(level: &Level, ctx: &ProjectionContext, palette: &Palette) -> Vec<DrawCommand> {
    let mut commands: Vec<DrawCommand> = level
        .linedefs()
        .iter()
        .map(|line| {
            let (v1, v2) = level.line_vertexes(line);
            DrawCommand {
                p1: ctx.vertex_to_screen(v1),
                p2: ctx.vertex_to_screen(v2),
                color: line_color(line, palette),
                order_key: !line.two_sided,
            }
        })
        .collect();
    // sort_by_key is stable
    commands.sort_by_key(|c| c.order_key);
    commands
}

/// A marker for each thing inside the level's bounding box, in lump order
pub fn spawn_markers(
    level: &Level,
    ctx: &ProjectionContext,
    palette: &Palette,
) -> Vec<SpawnMarker> {
    let extents = MapExtents::from_vertexes(level.vertexes());
    level
        .things()
        .iter()
        .filter(|t| {
            let inside = extents.contains(t.x, t.y);
            if !inside {
                debug!(
                    "{}: skipping thing {} at ({}, {}), outside the level",
                    level.name(),
                    t.type_code,
                    t.x,
                    t.y
                );
            }
            inside
        })
        .map(|t| SpawnMarker {
            p: ctx.to_screen(t.x, t.y),
            angle: t.angle,
            type_code: t.type_code,
            color: palette.thing,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{line_color, sequence, spawn_markers};
    use crate::config::Palette;
    use crate::level::Level;
    use crate::projection::project;
    use glam::IVec2;
    use wad::builder::WadBuilder;
    use wad::types::{WadLineDef, WadThing};
    use wad::{WadData, WadType};

    const ONE_SIDED: i16 = 0x0001;
    const TWO_SIDED: i16 = 0x0004;

    fn line(v1: u16, v2: u16, flags: i16, special: i16) -> WadLineDef {
        WadLineDef::new(v1, v2, flags, special, 0, 0, None)
    }

    fn level(vertexes: &[(i16, i16)], lines: &[WadLineDef], things: &[WadThing]) -> Level {
        let bytes = WadBuilder::new(WadType::PWad)
            .marker("MAP01")
            .things(things)
            .linedefs(lines)
            .vertexes(vertexes)
            .build();
        let wad = WadData::from_bytes(bytes).unwrap();
        Level::assemble(&wad, "MAP01", true).unwrap()
    }

    #[test]
    fn corner_to_corner_wall() {
        let l = level(&[(0, 0), (100, -100)], &[line(0, 1, ONE_SIDED, 0)], &[]);
        let palette = Palette::default();
        let ctx = project(&l, 108, 4);
        let cmds = sequence(&l, &ctx, &palette);

        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].p1, IVec2::new(4, 4));
        assert_eq!(cmds[0].p2, IVec2::new(104, 104));
        assert_eq!(cmds[0].color, palette.wall);
        assert!(cmds[0].order_key);
    }

    #[test]
    fn two_sided_drawn_first() {
        let vertexes = [(0, 0), (64, 0), (64, 64), (0, 64), (32, 32)];
        let lines = [
            line(0, 1, ONE_SIDED, 0),
            line(1, 2, TWO_SIDED, 0),
            line(2, 3, ONE_SIDED, 0),
            line(3, 4, TWO_SIDED, 0),
            line(4, 0, TWO_SIDED, 0),
        ];
        let l = level(&vertexes, &lines, &[]);
        let ctx = project(&l, 200, 8);
        let cmds = sequence(&l, &ctx, &Palette::default());

        let keys: Vec<bool> = cmds.iter().map(|c| c.order_key).collect();
        assert_eq!(keys, vec![false, false, false, true, true]);

        // Ties keep their LINEDEFS order
        let starts: Vec<IVec2> = cmds.iter().map(|c| c.p1).collect();
        let expect: Vec<IVec2> = [1, 3, 4, 0, 2]
            .iter()
            .map(|&i| {
                let (x, y) = vertexes[lines[i].start_vertex as usize];
                ctx.to_screen(x, y)
            })
            .collect();
        assert_eq!(starts, expect);
    }

    #[test]
    fn color_priority() {
        let l = level(
            &[(0, 0), (10, 0)],
            &[
                line(0, 1, ONE_SIDED, 0),
                line(0, 1, TWO_SIDED, 0),
                line(0, 1, ONE_SIDED, 1),
                line(0, 1, TWO_SIDED, 97),
            ],
            &[],
        );
        let palette = Palette::default();
        let colors: Vec<_> = l.linedefs().iter().map(|ld| line_color(ld, &palette)).collect();
        assert_eq!(
            colors,
            vec![
                palette.wall,
                palette.two_sided,
                palette.special,
                palette.special
            ]
        );

        // A special two-sided line is tinted but still ordered as two-sided
        let ctx = project(&l, 64, 2);
        let cmds = sequence(&l, &ctx, &palette);
        assert_eq!(cmds[1].color, palette.special);
        assert!(!cmds[1].order_key);
        assert_eq!(cmds[2].color, palette.wall);
    }

    #[test]
    fn no_lines_no_commands() {
        let l = level(&[(12, 34)], &[], &[]);
        let ctx = project(&l, 108, 4);
        assert!(sequence(&l, &ctx, &Palette::default()).is_empty());
    }

    #[test]
    fn things_become_markers() {
        let l = level(
            &[(0, 0), (100, -100)],
            &[line(0, 1, ONE_SIDED, 0)],
            &[WadThing::new(50, -50, 270, 3001, 7), WadThing::new(0, 0, 0, 1, 7)],
        );
        let palette = Palette::default();
        let ctx = project(&l, 108, 4);
        let markers = spawn_markers(&l, &ctx, &palette);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].p, IVec2::new(54, 54));
        assert_eq!(markers[0].type_code, 3001);
        assert_eq!(markers[0].angle, 270);
        assert_eq!(markers[1].p, IVec2::new(4, 4));
        assert_eq!(markers[1].color, palette.thing);
    }

    #[test]
    fn things_outside_level_skipped() {
        let l = level(
            &[(0, 0), (100, -100)],
            &[line(0, 1, ONE_SIDED, 0)],
            &[
                WadThing::new(500, -50, 0, 1, 7),
                WadThing::new(50, -50, 90, 2, 7),
                WadThing::new(50, 10, 0, 3, 7),
            ],
        );
        let ctx = project(&l, 108, 4);
        let markers = spawn_markers(&l, &ctx, &Palette::default());
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].type_code, 2);
        assert_eq!(markers[0].p, IVec2::new(54, 54));
    }

    /// Small LCG so the sweep is repeatable without pulling in a rand crate
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            self.0 >> 33
        }

        fn coord(&mut self) -> i16 {
            self.next() as u16 as i16
        }
    }

    #[test]
    fn sweep_layering_and_bounds() {
        let mut rng = Lcg(0x5eed);
        for round in 0..200 {
            let n_verts = 1 + (rng.next() % 40) as usize;
            let vertexes: Vec<(i16, i16)> = (0..n_verts)
                .map(|_| {
                    // Mix huge and tiny levels
                    if round % 2 == 0 {
                        (rng.coord(), rng.coord())
                    } else {
                        ((rng.next() % 7) as i16 - 3, (rng.next() % 7) as i16 - 3)
                    }
                })
                .collect();
            let lines: Vec<WadLineDef> = (0..rng.next() % 60)
                .map(|_| {
                    let v1 = (rng.next() % n_verts as u64) as u16;
                    let v2 = (rng.next() % n_verts as u64) as u16;
                    let flags = if rng.next() % 2 == 0 { ONE_SIDED } else { TWO_SIDED };
                    let special = if rng.next() % 5 == 0 { 1 } else { 0 };
                    line(v1, v2, flags, special)
                })
                .collect();
            let l = level(&vertexes, &lines, &[]);

            let max_pixels = (rng.next() % 2000) as i32;
            let border = (rng.next() % 6) as i32;
            let ctx = project(&l, max_pixels, border);
            let cmds = sequence(&l, &ctx, &Palette::default());
            assert_eq!(cmds.len(), lines.len());

            for c in &cmds {
                for p in [c.p1, c.p2] {
                    assert!(
                        p.x >= 0 && p.x < ctx.canvas_width,
                        "round {round}: x {} outside {}",
                        p.x,
                        ctx.canvas_width
                    );
                    assert!(
                        p.y >= 0 && p.y < ctx.canvas_height,
                        "round {round}: y {} outside {}",
                        p.y,
                        ctx.canvas_height
                    );
                }
            }

            // Once a one-sided line has been seen no two-sided may follow
            let first_solid = cmds.iter().position(|c| c.order_key).unwrap_or(cmds.len());
            assert!(cmds[first_solid..].iter().all(|c| c.order_key));
        }
    }
}
