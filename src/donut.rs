//! Donut chart assembly: aggregated category shares in, a glyph scene out.
//!
//! The scene is two concentric rings. The inner ring has one wedge per
//! category; the outer ring breaks each category into sub-item slices in
//! progressively lightened shades of the category color, with a remainder
//! slice covering whatever the shown sub-items leave uncovered. Percentage
//! labels sit inside the wedges, sub-item labels on the annulus midline,
//! and optional icon markers float outside the ring.

use std::fmt;
use std::rc::Rc;

use kurbo::Point;
use once_cell::sync::Lazy;

use crate::color::{self, Color, ColorPalette, CyclePalette};
use crate::data::{ColumnDataSource, Raster, Spec};
use crate::error::Error;
use crate::geometry::{cumulative_slices, polar_to_cartesian, Slice};
use crate::glyph::{AnnularWedge, Image, Stroke, Text, TextAlign, TextBaseline, TextStyle, Wedge};
use crate::plot::{Plot, Range1d};

/// The default style used with [`DonutChart::to_plot`].
pub static DEFAULT_STYLE: Lazy<DonutStyle> = Lazy::new(DonutStyle::default);
pub static DARK_STYLE: Lazy<DonutStyle> = Lazy::new(DonutStyle::default_dark);

/// A sub-item of one category, shown in the outer ring.
#[derive(Debug, Clone, PartialEq)]
pub struct SubShare {
    pub label: String,
    pub value: f64,
}

/// One category with its percentage share of the whole circle.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub label: String,
    pub value: f64,
    /// Sub-item shares in display order. Their sum never exceeds `value`.
    pub breakdown: Vec<SubShare>,
}

#[derive(Clone)]
pub struct DonutStyle {
    pub background: Color,
    pub title: TextStyle,
    pub percent_label: TextStyle,
    pub segment_label: TextStyle,
    pub outline: Option<Stroke>,
    /// Colors categories that were not assigned one.
    pub fallback: Box<dyn ColorPalette + Send + Sync>,
    /// Half the data-space width of the square plot; the inner wedge ring
    /// has radius 1 in the same units.
    pub extent: f64,
    /// Pixel width and height of the square plot.
    pub size: usize,
    pub wedge_radius: f64,
    pub annulus: (f64, f64),
    pub percent_radius: f64,
    pub label_radius: f64,
    pub icon_radius: f64,
    /// Lightness added per successive sub-item shade.
    pub shade_step: f64,
    /// Sub-items below this share collapse into the remainder slice.
    pub min_breakdown_share: f64,
    /// Sub-items below this share keep their slice but lose their label.
    pub min_label_share: f64,
}

impl fmt::Debug for DonutStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DonutStyle")
            .field("background", &self.background)
            .field("title", &self.title)
            .field("percent_label", &self.percent_label)
            .field("segment_label", &self.segment_label)
            .field("outline", &self.outline)
            .field("fallback", &"dyn ColorPalette")
            .field("extent", &self.extent)
            .field("size", &self.size)
            .field("wedge_radius", &self.wedge_radius)
            .field("annulus", &self.annulus)
            .field("shade_step", &self.shade_step)
            .finish()
    }
}

impl DonutStyle {
    pub fn default() -> Self {
        Self {
            background: color::WHITE,
            title: TextStyle::default().with_bold(true),
            percent_label: TextStyle::default().with_font_size(12.),
            segment_label: TextStyle::default().with_font_size(12.),
            outline: Some(Stroke::new(color::BLACK, 1.)),
            fallback: Box::new(CyclePalette),
            extent: 2.,
            size: 800,
            wedge_radius: 1.,
            annulus: (1., 1.5),
            percent_radius: 0.7,
            label_radius: 1.25,
            icon_radius: 1.7,
            shade_step: 0.05,
            min_breakdown_share: 0.5,
            min_label_share: 1.,
        }
    }

    pub fn default_dark() -> Self {
        let mut this = Self::default();
        this.background = Color::rgb8(18, 18, 20);
        this.title = TextStyle::default().with_bold(true).with_color(color::WHITE);
        this.percent_label = TextStyle::default()
            .with_font_size(12.)
            .with_color(color::WHITE);
        this.segment_label = TextStyle::default()
            .with_font_size(12.)
            .with_color(color::WHITE);
        this
    }
}

/// Builder for the two-ring donut scene.
#[derive(Debug, Clone)]
pub struct DonutChart {
    title: Option<String>,
    categories: Vec<CategoryShare>,
    colors: Vec<(String, Color)>,
    icons: Vec<(String, Raster)>,
    style: DonutStyle,
}

impl DonutChart {
    pub fn new(categories: Vec<CategoryShare>) -> Self {
        Self {
            title: None,
            categories,
            colors: Vec::new(),
            icons: Vec::new(),
            style: (*DEFAULT_STYLE).clone(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_style(mut self, style: DonutStyle) -> Self {
        self.style = style;
        self
    }

    /// Assign a fill color to the category named `label`.
    pub fn color(mut self, label: impl Into<String>, color: Color) -> Self {
        self.colors.push((label.into(), color));
        self
    }

    /// Attach an icon marker to the category named `label`.
    pub fn icon(mut self, label: impl Into<String>, icon: Raster) -> Self {
        self.icons.push((label.into(), icon));
        self
    }

    fn category_color(&self, index: usize, label: &str) -> Color {
        self.colors
            .iter()
            .find(|(assigned, _)| assigned == label)
            .map(|(_, color)| *color)
            .unwrap_or_else(|| self.style.fallback.color(index))
    }

    /// Assemble the glyph scene.
    pub fn to_plot(&self) -> Result<Plot, Error> {
        let style = &self.style;
        let range = Range1d::new(-style.extent, style.extent);
        let mut plot = Plot::new(range, range, style.size, style.size);
        plot.title = self.title.clone();
        plot.title_style = style.title.clone();
        plot.background = style.background;

        let slices = cumulative_slices(0., self.categories.iter().map(|c| c.value));
        let colors: Vec<Color> = self
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| self.category_color(i, &c.label))
            .collect();

        // inner ring: one wedge per category
        let mut wedges = ColumnDataSource::new();
        wedges.insert_number("start", slices.iter().map(|s| s.start).collect())?;
        wedges.insert_number("end", slices.iter().map(|s| s.end).collect())?;
        wedges.insert_color("colors", colors.clone())?;
        plot.add_glyph(
            Rc::new(wedges),
            Wedge {
                x: 0.0.into(),
                y: 0.0.into(),
                radius: style.wedge_radius.into(),
                start_angle: Spec::field("start"),
                end_angle: Spec::field("end"),
                fill: Spec::field("colors"),
                stroke: style.outline,
            },
        );

        // outer ring: shaded sub-item slices plus a remainder slice that
        // closes each category's span exactly
        for ((category, slice), base) in self.categories.iter().zip(&slices).zip(&colors) {
            let shown: Vec<&SubShare> = category
                .breakdown
                .iter()
                .filter(|s| s.value >= style.min_breakdown_share)
                .collect();
            let mut ring = cumulative_slices(slice.start, shown.iter().map(|s| s.value));
            let tail = ring.last().map_or(slice.start, |s| s.end);
            ring.push(Slice {
                start: tail,
                end: slice.end,
            });

            let fills: Vec<Color> = (0..ring.len())
                .map(|i| base.lighten(i as f64 * style.shade_step))
                .collect();
            let mut source = ColumnDataSource::new();
            source.insert_number("start", ring.iter().map(|s| s.start).collect())?;
            source.insert_number("end", ring.iter().map(|s| s.end).collect())?;
            source.insert_color("fill", fills)?;
            plot.add_glyph(
                Rc::new(source),
                AnnularWedge {
                    x: 0.0.into(),
                    y: 0.0.into(),
                    inner_radius: style.annulus.0.into(),
                    outer_radius: style.annulus.1.into(),
                    start_angle: Spec::field("start"),
                    end_angle: Spec::field("end"),
                    fill: Spec::field("fill"),
                    stroke: style.outline,
                },
            );

            // sub-item labels on the annulus midline; rows below the label
            // threshold keep an empty slot so the columns stay aligned
            let labels: Vec<String> = shown
                .iter()
                .map(|s| {
                    if s.value >= style.min_label_share {
                        s.label.clone()
                    } else {
                        String::new()
                    }
                })
                .collect();
            let points: Vec<Point> = ring[..shown.len()]
                .iter()
                .map(|&s| polar_to_cartesian(style.label_radius, s))
                .collect();
            let mut source = ColumnDataSource::new();
            source.insert_text("text", labels)?;
            source.insert_number("x", points.iter().map(|p| p.x).collect())?;
            source.insert_number("y", points.iter().map(|p| p.y).collect())?;
            plot.add_glyph(
                Rc::new(source),
                Text {
                    x: Spec::field("x"),
                    y: Spec::field("y"),
                    text: Spec::field("text"),
                    angle: 0.,
                    align: TextAlign::Center,
                    baseline: TextBaseline::Middle,
                    style: style.segment_label.clone(),
                },
            );
        }

        // icon markers outside the ring; categories without one keep an
        // empty row
        let icons: Vec<Option<Raster>> = self
            .categories
            .iter()
            .map(|c| {
                self.icons
                    .iter()
                    .find(|(label, _)| label == &c.label)
                    .map(|(_, raster)| raster.clone())
            })
            .collect();
        let points: Vec<Point> = slices
            .iter()
            .map(|&s| polar_to_cartesian(style.icon_radius, s))
            .collect();
        let mut source = ColumnDataSource::new();
        source.insert_image("icons", icons)?;
        source.insert_number("x", points.iter().map(|p| p.x).collect())?;
        source.insert_number("y", points.iter().map(|p| p.y).collect())?;
        plot.add_glyph(
            Rc::new(source),
            Image {
                x: Spec::field("x"),
                y: Spec::field("y"),
                image: "icons".into(),
            },
        );

        // percentage labels inside the wedges
        let labels: Vec<String> = self
            .categories
            .iter()
            .map(|c| format!("{:.2}%", c.value))
            .collect();
        let points: Vec<Point> = slices
            .iter()
            .map(|&s| polar_to_cartesian(style.percent_radius, s))
            .collect();
        let mut source = ColumnDataSource::new();
        source.insert_text("text", labels)?;
        source.insert_number("x", points.iter().map(|p| p.x).collect())?;
        source.insert_number("y", points.iter().map(|p| p.y).collect())?;
        plot.add_glyph(
            Rc::new(source),
            Text {
                x: Spec::field("x"),
                y: Spec::field("y"),
                text: Spec::field("text"),
                angle: 0.,
                align: TextAlign::Center,
                baseline: TextBaseline::Middle,
                style: style.percent_label.clone(),
            },
        );

        Ok(plot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Column;
    use crate::glyph::Glyph;
    use crate::plot::GlyphRenderer;
    use std::f64::consts::PI;

    fn sub(label: &str, value: f64) -> SubShare {
        SubShare {
            label: label.into(),
            value,
        }
    }

    fn sample_chart() -> DonutChart {
        let categories = vec![
            CategoryShare {
                label: "A".into(),
                value: 50.,
                breakdown: vec![sub("A1", 30.), sub("A2", 0.8), sub("A3", 0.4)],
            },
            CategoryShare {
                label: "B".into(),
                value: 30.,
                breakdown: vec![sub("B1", 29.), sub("B2", 1.)],
            },
            CategoryShare {
                label: "C".into(),
                value: 20.,
                breakdown: vec![],
            },
        ];
        DonutChart::new(categories)
            .color("A", color::ORANGE)
            .color("B", color::SKYBLUE)
    }

    fn numbers(renderer: &GlyphRenderer, name: &str) -> Vec<f64> {
        match renderer.source.column(name) {
            Some(Column::Number(values)) => values.clone(),
            other => panic!("expected number column {name:?}, got {other:?}"),
        }
    }

    fn texts(renderer: &GlyphRenderer, name: &str) -> Vec<String> {
        match renderer.source.column(name) {
            Some(Column::Text(values)) => values.clone(),
            other => panic!("expected text column {name:?}, got {other:?}"),
        }
    }

    #[test]
    fn renderer_layout() {
        let plot = sample_chart().to_plot().unwrap();
        // one wedge ring, annulus + labels per category, icons, percents
        assert_eq!(plot.renderers().len(), 1 + 2 * 3 + 1 + 1);
        assert!(matches!(plot.renderers()[0].glyph, Glyph::Wedge(_)));
        assert!(matches!(plot.renderers()[1].glyph, Glyph::AnnularWedge(_)));
        assert!(matches!(plot.renderers()[7].glyph, Glyph::Image(_)));
        assert!(matches!(plot.renderers()[8].glyph, Glyph::Text(_)));
    }

    #[test]
    fn inner_ring_covers_the_circle() {
        let plot = sample_chart().to_plot().unwrap();
        let starts = numbers(&plot.renderers()[0], "start");
        let ends = numbers(&plot.renderers()[0], "end");
        assert_eq!(starts[0], 0.);
        assert_eq!(&starts[1..], &ends[..2]);
        assert!((ends[2] - 2. * PI).abs() < 1e-12);
    }

    #[test]
    fn remainder_closes_each_category() {
        let plot = sample_chart().to_plot().unwrap();
        let wedge_ends = numbers(&plot.renderers()[0], "end");
        for (category, renderer) in [1usize, 3, 5].into_iter().enumerate() {
            let ends = numbers(&plot.renderers()[renderer], "end");
            assert_eq!(*ends.last().unwrap(), wedge_ends[category]);
        }
    }

    #[test]
    fn breakdown_filters_and_labels() {
        let plot = sample_chart().to_plot().unwrap();
        // A: A1 and A2 shown (A3 < 0.5), plus the remainder slice
        let starts = numbers(&plot.renderers()[1], "start");
        assert_eq!(starts.len(), 3);
        // only A1 reaches the label threshold
        assert_eq!(texts(&plot.renderers()[2], "text"), vec!["A1", ""]);
        // C has no breakdown: a single remainder slice spanning the wedge
        let starts = numbers(&plot.renderers()[5], "start");
        let ends = numbers(&plot.renderers()[5], "end");
        assert_eq!(starts.len(), 1);
        assert_eq!(starts[0], numbers(&plot.renderers()[0], "start")[2]);
        assert_eq!(ends[0], numbers(&plot.renderers()[0], "end")[2]);
    }

    #[test]
    fn shades_lighten_along_the_ring() {
        let plot = sample_chart().to_plot().unwrap();
        let fills = match plot.renderers()[1].source.column("fill") {
            Some(Column::Color(colors)) => colors.clone(),
            other => panic!("expected color column, got {other:?}"),
        };
        assert_eq!(fills[0], color::ORANGE);
        assert_eq!(fills[1], color::ORANGE.lighten(0.05));
        assert_eq!(fills[2], color::ORANGE.lighten(0.10));
    }

    #[test]
    fn unassigned_category_uses_the_palette() {
        let chart = sample_chart();
        let fallback = chart.style.fallback.color(2);
        let plot = chart.to_plot().unwrap();
        let colors = match plot.renderers()[0].source.column("colors") {
            Some(Column::Color(colors)) => colors.clone(),
            other => panic!("expected color column, got {other:?}"),
        };
        assert_eq!(colors[2], fallback);
    }

    #[test]
    fn percent_labels_are_formatted() {
        let plot = sample_chart().to_plot().unwrap();
        assert_eq!(
            texts(&plot.renderers()[8], "text"),
            vec!["50.00%", "30.00%", "20.00%"]
        );
    }

    #[test]
    fn icons_default_to_empty_rows() {
        let raster = Raster::new(1, 1, vec![0, 0, 0, 255]).unwrap();
        let plot = sample_chart().icon("B", raster).to_plot().unwrap();
        let icons = match plot.renderers()[7].source.column("icons") {
            Some(Column::Image(icons)) => icons.clone(),
            other => panic!("expected image column, got {other:?}"),
        };
        assert!(icons[0].is_none());
        assert!(icons[1].is_some());
        assert!(icons[2].is_none());
    }
}
