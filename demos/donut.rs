use anyhow::Result;
use donut::{color, sampledata, Document, DonutChart};

fn main() -> Result<()> {
    let browsers = sampledata::aggregate(sampledata::browsers_nov_2013(), 1.0);

    let mut chart = DonutChart::new(browsers)
        .with_title("Web browser market share (November 2013)")
        .color("Chrome", color::LIMEGREEN)
        .color("Firefox", color::ORANGE)
        .color("Safari", color::PURPLE)
        .color("Opera", color::ORANGERED)
        .color("IE", color::SKYBLUE)
        .color("Other", color::LIGHTGRAY);
    for browser in ["Chrome", "Firefox", "Safari", "Opera", "IE"] {
        if let Some(icon) = sampledata::icon(browser)? {
            chart = chart.icon(browser, icon);
        }
    }

    let mut doc = Document::new("Donut Chart");
    doc.add(chart.to_plot()?);

    let filename = "donut.html";
    doc.save(filename)?;
    println!("Wrote {filename}");
    open::that(filename)?;
    Ok(())
}
