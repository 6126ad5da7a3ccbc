use ad_check_demo::{SampleTable, Surface, SurfaceType, plot_comparison};
use plotpy::linspace;
use russell_lab::approx_eq;
use std::fs;

const SAVE_FIGURE: bool = false;

const TMP_DIR: &str = "/tmp/ad_check_demo";

#[test]
fn pipeline_matches_reference_surface() {
    // write a synthetic AD table the way the external program does,
    // one tab-separated row per point with a header line
    let surface = Surface::new(SurfaceType::ProductSine);
    let xx = linspace(-2.0, 2.0, 11);
    let yy = linspace(-2.0, 2.0, 11);
    let mut contents = String::from("x\ty\tf\tfp\n");
    for &y in &yy {
        for &x in &xx {
            contents.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                x,
                y,
                surface.value(x, y),
                surface.derivative(x, y)
            ));
        }
    }
    fs::create_dir_all(TMP_DIR).unwrap();
    let path = format!("{}/file1_synthetic.out", TMP_DIR);
    fs::write(&path, contents).unwrap();

    // load the table and sample the reference grid over the same points
    let table = SampleTable::read(&path).unwrap();
    let grid = surface.sample_grid(-2.0, 2.0, -2.0, 2.0, 11);
    assert_eq!(table.len(), grid.len());
    for i in 0..table.len() {
        approx_eq(table.x[i], grid.x[i], 1e-15);
        approx_eq(table.y[i], grid.y[i], 1e-15);
        approx_eq(table.f[i], grid.f[i], 1e-15);
        approx_eq(table.fp[i], grid.fp[i], 1e-15);
    }

    // generate the figure
    if SAVE_FIGURE {
        let plot = plot_comparison(&table, &grid, &surface);
        plot.save(&format!("{}/test_pipeline.svg", TMP_DIR)).unwrap();
    }
}

#[test]
fn pipeline_fails_on_missing_file() {
    let res = SampleTable::read("__missing_file1__.out");
    assert!(res.is_err());
}
