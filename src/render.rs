//! Walks a plot's renderers and draws them into any [`piet::RenderContext`].

use kurbo::{Affine, CircleSegment, Point, Rect};
use piet::{
    FontFamily, FontWeight, ImageFormat, InterpolationMode, RenderContext, Text as _,
    TextAttribute, TextLayout as _, TextLayoutBuilder,
};

use crate::color::Color;
use crate::data::ColumnDataSource;
use crate::error::Error;
use crate::glyph::{AnnularWedge, Glyph, Image, Stroke, Text, TextAlign, TextBaseline, TextStyle, Wedge};
use crate::plot::Plot;

const TITLE_PADDING: f64 = 10.;

/// Linear map from data space (y up) to pixel space (y down).
pub(crate) struct Frame {
    sx: f64,
    sy: f64,
    x0: f64,
    y0: f64,
    height: f64,
}

impl Frame {
    pub(crate) fn new(plot: &Plot) -> Self {
        Self {
            sx: plot.width as f64 / plot.x_range.span(),
            sy: plot.height as f64 / plot.y_range.span(),
            x0: plot.x_range.start,
            y0: plot.y_range.start,
            height: plot.height as f64,
        }
    }

    fn point(&self, x: f64, y: f64) -> Point {
        Point::new(
            (x - self.x0) * self.sx,
            self.height - (y - self.y0) * self.sy,
        )
    }

    /// Radii map through the x axis, matching the toolkits this mirrors.
    fn radius(&self, r: f64) -> f64 {
        r * self.sx
    }
}

/// Render `plot` into `ctx`: background, title, then every glyph renderer
/// in insertion order.
pub fn render_plot<RC: RenderContext>(plot: &Plot, ctx: &mut RC) -> Result<(), Error> {
    ctx.clear(None, plot.background.to_piet_color());

    if let Some(title) = &plot.title {
        let layout = ctx
            .text()
            .new_text_layout(title.clone())
            .apply_style(&plot.title_style)
            .build()?;
        let size = layout.size();
        let top_left = Point::new(plot.width as f64 / 2. - size.width / 2., TITLE_PADDING);
        ctx.draw_text(&layout, top_left);
    }

    let frame = Frame::new(plot);
    for renderer in plot.renderers() {
        let source = renderer.source.as_ref();
        match &renderer.glyph {
            Glyph::Wedge(glyph) => draw_wedges(ctx, &frame, source, glyph)?,
            Glyph::AnnularWedge(glyph) => draw_annular_wedges(ctx, &frame, source, glyph)?,
            Glyph::Text(glyph) => draw_texts(ctx, &frame, source, glyph)?,
            Glyph::Image(glyph) => draw_images(ctx, &frame, source, glyph)?,
        }
    }
    Ok(())
}

fn draw_wedges<RC: RenderContext>(
    ctx: &mut RC,
    frame: &Frame,
    source: &ColumnDataSource,
    glyph: &Wedge,
) -> Result<(), Error> {
    let xs = source.numbers(&glyph.x)?;
    let ys = source.numbers(&glyph.y)?;
    let radii = source.numbers(&glyph.radius)?;
    let starts = source.numbers(&glyph.start_angle)?;
    let ends = source.numbers(&glyph.end_angle)?;
    let fills = source.colors(&glyph.fill)?;

    for i in 0..source.len() {
        let segment = match segment(frame, xs[i], ys[i], radii[i], 0., starts[i], ends[i]) {
            Some(segment) => segment,
            None => continue,
        };
        fill_segment(ctx, segment, fills[i], glyph.stroke.as_ref());
    }
    Ok(())
}

fn draw_annular_wedges<RC: RenderContext>(
    ctx: &mut RC,
    frame: &Frame,
    source: &ColumnDataSource,
    glyph: &AnnularWedge,
) -> Result<(), Error> {
    let xs = source.numbers(&glyph.x)?;
    let ys = source.numbers(&glyph.y)?;
    let inner = source.numbers(&glyph.inner_radius)?;
    let outer = source.numbers(&glyph.outer_radius)?;
    let starts = source.numbers(&glyph.start_angle)?;
    let ends = source.numbers(&glyph.end_angle)?;
    let fills = source.colors(&glyph.fill)?;

    for i in 0..source.len() {
        let segment = match segment(frame, xs[i], ys[i], outer[i], inner[i], starts[i], ends[i]) {
            Some(segment) => segment,
            None => continue,
        };
        fill_segment(ctx, segment, fills[i], glyph.stroke.as_ref());
    }
    Ok(())
}

fn draw_texts<RC: RenderContext>(
    ctx: &mut RC,
    frame: &Frame,
    source: &ColumnDataSource,
    glyph: &Text,
) -> Result<(), Error> {
    let xs = source.numbers(&glyph.x)?;
    let ys = source.numbers(&glyph.y)?;
    let texts = source.texts(&glyph.text)?;

    for i in 0..source.len() {
        if texts[i].is_empty() {
            continue;
        }
        let layout = ctx
            .text()
            .new_text_layout(texts[i].clone())
            .apply_style(&glyph.style)
            .build()?;
        let size = layout.size();
        let dx = match glyph.align {
            TextAlign::Left => 0.,
            TextAlign::Center => -size.width / 2.,
            TextAlign::Right => -size.width,
        };
        let dy = match glyph.baseline {
            TextBaseline::Top => 0.,
            TextBaseline::Middle => -size.height / 2.,
            TextBaseline::Bottom => -size.height,
        };
        let anchor = frame.point(xs[i], ys[i]);
        if glyph.angle == 0. {
            ctx.draw_text(&layout, Point::new(anchor.x + dx, anchor.y + dy));
        } else {
            // data-space anticlockwise rotation is clockwise on the
            // flipped y axis
            ctx.with_save(|ctx| {
                ctx.transform(Affine::translate(anchor.to_vec2()) * Affine::rotate(-glyph.angle));
                ctx.draw_text(&layout, Point::new(dx, dy));
                Ok(())
            })?;
        }
    }
    Ok(())
}

fn draw_images<RC: RenderContext>(
    ctx: &mut RC,
    frame: &Frame,
    source: &ColumnDataSource,
    glyph: &Image,
) -> Result<(), Error> {
    let xs = source.numbers(&glyph.x)?;
    let ys = source.numbers(&glyph.y)?;
    let rasters = source.images(&glyph.image)?;

    for i in 0..source.len() {
        let raster = match &rasters[i] {
            Some(raster) => raster,
            None => continue,
        };
        let image = ctx.make_image(
            raster.width(),
            raster.height(),
            raster.data(),
            ImageFormat::RgbaSeparate,
        )?;
        let center = frame.point(xs[i], ys[i]);
        let (hw, hh) = (raster.width() as f64 / 2., raster.height() as f64 / 2.);
        let dst = Rect::new(center.x - hw, center.y - hh, center.x + hw, center.y + hh);
        ctx.draw_image(&image, dst, InterpolationMode::Bilinear);
    }
    Ok(())
}

/// Anticlockwise data angles stay anticlockwise on screen because the y
/// flip mirrors them; the screen arc runs from `-end` back to `-start`.
fn segment(
    frame: &Frame,
    x: f64,
    y: f64,
    outer: f64,
    inner: f64,
    start: f64,
    end: f64,
) -> Option<CircleSegment> {
    if end - start <= 0. {
        return None;
    }
    Some(CircleSegment {
        center: frame.point(x, y),
        outer_radius: frame.radius(outer),
        inner_radius: frame.radius(inner),
        start_angle: -end,
        sweep_angle: end - start,
    })
}

fn fill_segment<RC: RenderContext>(
    ctx: &mut RC,
    segment: CircleSegment,
    fill: Color,
    stroke: Option<&Stroke>,
) {
    let brush = ctx.solid_brush(fill.to_piet_color());
    ctx.fill(segment, &brush);
    if let Some(stroke) = stroke {
        let brush = ctx.solid_brush(stroke.color.to_piet_color());
        ctx.stroke(segment, &brush, stroke.width);
    }
}

trait ApplyStyle {
    fn apply_style(self, style: &TextStyle) -> Self;
}

impl<T: TextLayoutBuilder> ApplyStyle for T {
    fn apply_style(self, style: &TextStyle) -> Self {
        let mut this = self
            .default_attribute(TextAttribute::FontFamily(FontFamily::SANS_SERIF))
            .default_attribute(TextAttribute::FontSize(px_to_pt(style.font_size)));
        if style.bold {
            this = this.default_attribute(TextAttribute::Weight(FontWeight::BOLD));
        }
        this.text_color(style.color.to_piet_color())
    }
}

fn px_to_pt(px: f64) -> f64 {
    0.75 * px
}
