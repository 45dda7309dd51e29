//! Turns a level from a WAD in to a flat list of coloured 2D lines, sized to
//! fit a canvas, in the order they must be drawn.
//!
//! ```text,ignore
//!  WadData ──> Level::assemble ──> project ──> ProjectionContext
//!                    │                               │
//!                    └────────────> sequence <───────┘ ──> Vec<DrawCommand>
//! ```
//!
//! Nothing here draws: the caller owns the surface and draws the commands in
//! the order given.

pub mod config;
pub mod level;
pub mod projection;
pub mod sequence;

pub use config::{AutomapConfig, Palette, Rgb};
pub use level::{Level, LineDef, Thing, Vertex};
pub use projection::{MapExtents, ProjectionContext, project, project_with};
pub use sequence::{DrawCommand, SpawnMarker, line_color, sequence, spawn_markers};

/// Everything needed to draw one level at one size
#[derive(Debug, Clone)]
pub struct DrawList {
    pub ctx: ProjectionContext,
    /// Draw in order, two-sided lines first
    pub lines: Vec<DrawCommand>,
    /// Draw after all the lines
    pub markers: Vec<SpawnMarker>,
}

impl DrawList {
    /// Projects and sequences `level`. Markers are only produced if the
    /// config asks for them and the level was assembled with its things.
    pub fn build(level: &Level, config: &AutomapConfig) -> DrawList {
        let ctx = project_with(level, config);
        let lines = sequence(level, &ctx, &config.palette);
        let markers = if config.include_things {
            spawn_markers(level, &ctx, &config.palette)
        } else {
            Vec::new()
        };
        DrawList {
            ctx,
            lines,
            markers,
        }
    }

    pub fn canvas_width(&self) -> i32 {
        self.ctx.canvas_width
    }

    pub fn canvas_height(&self) -> i32 {
        self.ctx.canvas_height
    }
}
