use ad_check_demo::{SampleTable, StrError, Surface, SurfaceType, plot_comparison};

const DATA_FILE: &str = "file1.out";
const FIGURE_FILE: &str = "/tmp/ad_check_demo/file1.svg";

const GRID_MIN: f64 = -2.0;
const GRID_MAX: f64 = 2.0;
const GRID_DIVISIONS: usize = 30;

fn main() -> Result<(), StrError> {
    // load the AD samples
    let table = SampleTable::read(DATA_FILE)?;

    // sample the reference surface on the grid
    let surface = Surface::new(SurfaceType::ProductSine);
    let grid = surface.sample_grid(GRID_MIN, GRID_MAX, GRID_MIN, GRID_MAX, GRID_DIVISIONS + 1);

    // generate the figure
    let plot = plot_comparison(&table, &grid, &surface);
    plot.save(FIGURE_FILE)?;
    println!("figure saved in {}", FIGURE_FILE);
    Ok(())
}
