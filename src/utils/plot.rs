//! render the sweep as a TFLOPS-vs-ratio line chart, one line per frequency

use std::path::Path;

use eyre::Result;
use itertools::Itertools;
use plotters::prelude::*;

use crate::result::ResultTable;

pub fn plot_tflops(table: &ResultTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let x_max = table
        .points
        .iter()
        .map(|p| p.alpha)
        .fold(1.0f64, f64::max);
    let y_max = table
        .points
        .iter()
        .map(|p| p.tflops)
        .fold(0.0f64, f64::max);

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "TFLOPS vs α for Different CPU Frequencies",
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("Memory Access Ratio (α)")
        .y_desc("Theoretical TFLOPS")
        .draw()?;

    for (idx, (q_ghz, points)) in table
        .points
        .iter()
        .group_by(|p| p.q_ghz)
        .into_iter()
        .enumerate()
    {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(
                LineSeries::new(points.map(|p| (p.alpha, p.tflops)), &color).point_size(3),
            )?
            .label(format!("{} GHz", q_ghz))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}
