use crate::{GridSamples, SampleTable, Surface};
use plotpy::{Curve, Plot};

/// Plots AD samples against reference samples, side by side
///
/// The left subplot compares f and the right subplot compares f'.
/// Both point sets are drawn as 3D scatters with the same marker;
/// the caller saves the returned figure
pub fn plot_comparison(table: &SampleTable, grid: &GridSamples, surface: &Surface) -> Plot {
    // AD samples of f
    let mut curve_ad_f = Curve::new();
    curve_ad_f
        .set_label("AD F(x,y)")
        .set_line_style("None")
        .set_marker_style("o")
        .draw_3d(&table.x, &table.y, &table.f);

    // reference samples of f
    let mut curve_ref_f = Curve::new();
    curve_ref_f
        .set_label("analytical F(x,y)")
        .set_line_style("None")
        .set_marker_style("o")
        .draw_3d(&grid.x, &grid.y, &grid.f);

    // AD samples of f'
    let mut curve_ad_fp = Curve::new();
    curve_ad_fp
        .set_label("AD F'(x,y)")
        .set_line_style("None")
        .set_marker_style("o")
        .draw_3d(&table.x, &table.y, &table.fp);

    // reference samples of f'
    let mut curve_ref_fp = Curve::new();
    curve_ref_fp
        .set_label("analytical F'(x,y)")
        .set_line_style("None")
        .set_marker_style("o")
        .draw_3d(&grid.x, &grid.y, &grid.fp);

    // generate the figure
    let mut plot = Plot::new();
    plot.set_subplot_3d(1, 2, 1)
        .add(&curve_ad_f)
        .add(&curve_ref_f)
        .set_title(surface.formula())
        .set_labels_3d("X", "Y", "F(X, Y)")
        .legend()
        .set_subplot_3d(1, 2, 2)
        .add(&curve_ad_fp)
        .add(&curve_ref_fp)
        .set_title(surface.formula_prime())
        .set_labels_3d("X", "Y", "F'(X, Y)")
        .legend()
        .set_figure_size_points(800.0, 400.0);
    plot
}
