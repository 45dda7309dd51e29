use crate::AutomapConfig;
use crate::level::{Level, Vertex};
use glam::IVec2;
use log::debug;

/// Smallest scale handed out, so a pixel budget too small for the border still
/// gives a finite, positive scale
pub const MIN_SCALE: f64 = 1e-6;

/// Largest border honoured. Twice this plus any scaled level still fits an i32.
pub const MAX_BORDER: i32 = i32::MAX / 4;

/// The smallest and largest coordinates of the level, with y already flipped
/// so that it grows downwards like screen space
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MapExtents {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl MapExtents {
    /// An empty level has extents of a single point at the origin
    pub fn from_vertexes(vertexes: &[Vertex]) -> Self {
        let Some(first) = vertexes.first() else {
            return Self::default();
        };
        // Start from the first vertex, not zero, or a level entirely in
        // negative space would get a max of 0
        let (fx, fy) = (first.x as i32, -(first.y as i32));
        let (x_min, x_max, y_min, y_max) = vertexes.iter().fold(
            (fx, fx, fy, fy),
            |(x_min, x_max, y_min, y_max), v| {
                let (x, y) = (v.x as i32, -(v.y as i32));
                (x_min.min(x), x_max.max(x), y_min.min(y), y_max.max(y))
            },
        );
        Self {
            x_min: x_min as f64,
            x_max: x_max as f64,
            y_min: y_min as f64,
            y_max: y_max as f64,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// The longer side, or 1 if the level has no size at all
    pub fn span(&self) -> f64 {
        let span = self.width().max(self.height());
        if span == 0.0 { 1.0 } else { span }
    }

    /// Whether a world point lies inside the box. `y` is in world space.
    pub fn contains(&self, x: i16, y: i16) -> bool {
        let (x, y) = (x as f64, -(y as f64));
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

/// How world coordinates map on to a canvas sized to fit one level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionContext {
    pub scale: f64,
    /// `x_min * scale`
    pub origin_x: f64,
    /// `y_min * scale`, with y flipped
    pub origin_y: f64,
    pub border: i32,
    pub canvas_width: i32,
    pub canvas_height: i32,
}

impl ProjectionContext {
    /// World to screen. The result is always inside the canvas.
    pub fn to_screen(&self, x: i16, y: i16) -> IVec2 {
        let sx = (x as f64 * self.scale).round() - self.origin_x.round() + self.border as f64;
        let sy = (-(y as f64) * self.scale).round() - self.origin_y.round() + self.border as f64;
        // Rounding each term separately can land an extreme vertex one pixel
        // past the edge when the border is under 2 pixels
        IVec2::new(
            (sx as i32).clamp(0, self.canvas_width - 1),
            (sy as i32).clamp(0, self.canvas_height - 1),
        )
    }

    pub fn vertex_to_screen(&self, v: Vertex) -> IVec2 {
        self.to_screen(v.x, v.y)
    }

    pub fn canvas_size(&self) -> IVec2 {
        IVec2::new(self.canvas_width, self.canvas_height)
    }
}

/// Fit `level` in to a square of `max_pixels`, keeping `border` pixels clear
/// around it. Never fails: an empty or single point level gets a tiny canvas.
pub fn project(level: &Level, max_pixels: i32, border: i32) -> ProjectionContext {
    let border = border.clamp(0, MAX_BORDER);
    let extents = MapExtents::from_vertexes(level.vertexes());

    let scale = ((max_pixels as f64 - 2.0 * border as f64) / extents.span()).max(MIN_SCALE);
    // f64 to i32 casts saturate, so a huge scale can't wrap the canvas size
    let edge = |len: f64| ((len * scale).round() + 2.0 * border as f64).max(1.0) as i32;
    let canvas_width = edge(extents.width());
    let canvas_height = edge(extents.height());

    debug!(
        "{}: extents {:?}, scale {}, canvas {}x{}",
        level.name(),
        extents,
        scale,
        canvas_width,
        canvas_height
    );

    ProjectionContext {
        scale,
        origin_x: extents.x_min * scale,
        origin_y: extents.y_min * scale,
        border,
        canvas_width,
        canvas_height,
    }
}

pub fn project_with(level: &Level, config: &AutomapConfig) -> ProjectionContext {
    project(level, config.max_pixels, config.border)
}
