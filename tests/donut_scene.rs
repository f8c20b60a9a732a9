//! Assembles the market-share example scene and checks the scene graph
//! and the serialized output.

use std::f64::consts::PI;

use donut::{color, file_html, sampledata, Column, Document, DonutChart, Glyph};

fn market_share_chart() -> DonutChart {
    let browsers = sampledata::aggregate(sampledata::browsers_nov_2013(), 1.0);
    DonutChart::new(browsers)
        .with_title("Web browser market share (November 2013)")
        .color("Chrome", color::LIMEGREEN)
        .color("Firefox", color::ORANGE)
        .color("Safari", color::PURPLE)
        .color("Opera", color::ORANGERED)
        .color("IE", color::SKYBLUE)
        .color("Other", color::LIGHTGRAY)
}

#[test]
fn scene_matches_the_market_share_layout() {
    let plot = market_share_chart().to_plot().unwrap();

    // six categories: one wedge ring, an annulus and a label source per
    // category, one icon ring, one percent ring
    assert_eq!(plot.renderers().len(), 1 + 2 * 6 + 1 + 1);
    assert!(matches!(plot.renderers()[0].glyph, Glyph::Wedge(_)));
    assert!(matches!(
        plot.renderers().last().unwrap().glyph,
        Glyph::Text(_)
    ));

    // the inner ring closes the circle
    let ends = match plot.renderers()[0].source.column("end") {
        Some(Column::Number(values)) => values.clone(),
        other => panic!("expected number column, got {other:?}"),
    };
    assert_eq!(ends.len(), 6);
    assert!((ends.last().unwrap() - 2. * PI).abs() < 1e-9);
}

#[test]
fn percent_labels_carry_the_category_totals() {
    let plot = market_share_chart().to_plot().unwrap();
    let labels = match plot.renderers().last().unwrap().source.column("text") {
        Some(Column::Text(values)) => values.clone(),
        other => panic!("expected text column, got {other:?}"),
    };
    assert_eq!(
        labels,
        vec!["39.19%", "17.90%", "26.99%", "1.43%", "8.26%", "6.23%"]
    );
}

#[test]
fn icon_markers_cover_the_major_browsers() {
    let mut chart = market_share_chart();
    for browser in ["Chrome", "Firefox", "Safari", "Opera", "IE"] {
        let icon = sampledata::icon(browser).unwrap().unwrap();
        chart = chart.icon(browser, icon);
    }
    let plot = chart.to_plot().unwrap();
    let icons = plot
        .renderers()
        .iter()
        .find_map(|r| match &r.glyph {
            Glyph::Image(glyph) => Some(r.source.column(&glyph.image)),
            _ => None,
        })
        .flatten();
    let icons = match icons {
        Some(Column::Image(values)) => values.clone(),
        other => panic!("expected image column, got {other:?}"),
    };
    assert_eq!(icons.len(), 6);
    assert_eq!(icons.iter().filter(|icon| icon.is_some()).count(), 5);
    // "Other" is the trailing category and has no icon
    assert!(icons.last().unwrap().is_none());
}

#[test]
fn html_output_is_standalone() {
    let mut doc = Document::new("Donut Chart");
    doc.add(market_share_chart().to_plot().unwrap());
    let html = file_html(&doc).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Donut Chart</title>"));
    assert!(html.contains("<svg"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn save_writes_the_html_file() {
    let mut doc = Document::new("Donut Chart");
    doc.add(market_share_chart().to_plot().unwrap());
    let path = std::env::temp_dir().join("donut-scene-test.html");
    doc.save(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("<svg"));
    std::fs::remove_file(&path).ok();
}
