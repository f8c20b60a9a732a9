//! The visual marks a plot can render. Every positional or styling
//! property that varies per row is a [`Spec`] resolved against the
//! renderer's data source.

use crate::color::Color;
use crate::data::Spec;

/// Horizontal anchoring of a text glyph relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchoring of a text glyph relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

/// Font settings shared by text glyphs and plot titles.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub font_size: f64,
    pub bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: crate::color::BLACK,
            font_size: 16.,
            bold: false,
        }
    }
}

impl TextStyle {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

/// Outline drawn around filled wedges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// A full circular sector, from the center out to `radius`.
///
/// Angles are radians anticlockwise from the positive x axis; a wedge
/// whose end does not exceed its start draws nothing.
#[derive(Debug, Clone)]
pub struct Wedge {
    pub x: Spec<f64>,
    pub y: Spec<f64>,
    pub radius: Spec<f64>,
    pub start_angle: Spec<f64>,
    pub end_angle: Spec<f64>,
    pub fill: Spec<Color>,
    pub stroke: Option<Stroke>,
}

/// A ring sector between `inner_radius` and `outer_radius`.
#[derive(Debug, Clone)]
pub struct AnnularWedge {
    pub x: Spec<f64>,
    pub y: Spec<f64>,
    pub inner_radius: Spec<f64>,
    pub outer_radius: Spec<f64>,
    pub start_angle: Spec<f64>,
    pub end_angle: Spec<f64>,
    pub fill: Spec<Color>,
    pub stroke: Option<Stroke>,
}

/// A text label. Empty strings keep their row but draw nothing.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: Spec<f64>,
    pub y: Spec<f64>,
    pub text: Spec<String>,
    /// Rotation in radians, anticlockwise in data space.
    pub angle: f64,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub style: TextStyle,
}

/// A raster marker anchored at its center. The named column holds
/// per-row images; `None` rows draw nothing.
#[derive(Debug, Clone)]
pub struct Image {
    pub x: Spec<f64>,
    pub y: Spec<f64>,
    pub image: String,
}

#[derive(Debug, Clone)]
pub enum Glyph {
    Wedge(Wedge),
    AnnularWedge(AnnularWedge),
    Text(Text),
    Image(Image),
}

impl From<Wedge> for Glyph {
    fn from(glyph: Wedge) -> Self {
        Glyph::Wedge(glyph)
    }
}

impl From<AnnularWedge> for Glyph {
    fn from(glyph: AnnularWedge) -> Self {
        Glyph::AnnularWedge(glyph)
    }
}

impl From<Text> for Glyph {
    fn from(glyph: Text) -> Self {
        Glyph::Text(glyph)
    }
}

impl From<Image> for Glyph {
    fn from(glyph: Image) -> Self {
        Glyph::Image(glyph)
    }
}
