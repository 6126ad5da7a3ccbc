use crate::{CosineSine, ProductSine, SurfaceTrait, SurfaceType};
use plotpy::linspace;

const DELTA: f64 = 1e-5;

/// Holds surface samples evaluated on a rectangular grid
///
/// The vectors are the flattened Cartesian product of the two axes,
/// with x varying fastest (row-major, meshgrid order)
pub struct GridSamples {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub f: Vec<f64>,
    pub fp: Vec<f64>,
}

impl GridSamples {
    /// Returns the number of sampled points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if no point has been sampled
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Represents a reference surface f(x,y) and the derivative f' reported by the AD program
///
/// The AD program seeds both inputs with a unit dual part; hence its
/// derivative output is f' = ∂f/∂x + ∂f/∂y
pub struct Surface {
    actual: Box<dyn SurfaceTrait>,
}

impl Surface {
    /// Allocates a new instance
    pub fn new(surface_type: SurfaceType) -> Self {
        let actual: Box<dyn SurfaceTrait> = match surface_type {
            SurfaceType::ProductSine => Box::new(ProductSine::new()),
            SurfaceType::CosineSine => Box::new(CosineSine::new()),
        };
        Surface { actual }
    }

    /// Calculates f(x,y)
    pub fn value(&self, x: f64, y: f64) -> f64 {
        self.actual.calc_f(x, y)
    }

    /// Calculates f'(x,y) = ∂f/∂x + ∂f/∂y
    pub fn derivative(&self, x: f64, y: f64) -> f64 {
        self.actual.calc_fx(x, y) + self.actual.calc_fy(x, y)
    }

    /// Approximates f'(x,y) with central differences
    pub fn numerical_derivative(&self, x: f64, y: f64) -> f64 {
        let dfdx = (self.actual.calc_f(x + DELTA, y) - self.actual.calc_f(x - DELTA, y)) / (2.0 * DELTA);
        let dfdy = (self.actual.calc_f(x, y + DELTA) - self.actual.calc_f(x, y - DELTA)) / (2.0 * DELTA);
        dfdx + dfdy
    }

    /// Returns the formula of f for plot titles
    pub fn formula(&self) -> &'static str {
        self.actual.formula()
    }

    /// Returns the formula of f' for plot titles
    pub fn formula_prime(&self) -> &'static str {
        self.actual.formula_prime()
    }

    /// Samples the surface on an npoint × npoint grid
    ///
    /// Generates `npoint` evenly spaced values per axis (endpoints included)
    /// over `[xmin, xmax]` × `[ymin, ymax]` and evaluates f and f' at every
    /// combination, yielding npoint² samples
    pub fn sample_grid(&self, xmin: f64, xmax: f64, ymin: f64, ymax: f64, npoint: usize) -> GridSamples {
        let xx = linspace(xmin, xmax, npoint);
        let yy = linspace(ymin, ymax, npoint);
        let n = npoint * npoint;
        let mut grid = GridSamples {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            f: Vec::with_capacity(n),
            fp: Vec::with_capacity(n),
        };
        for &y in &yy {
            for &x in &xx {
                grid.x.push(x);
                grid.y.push(y);
                grid.f.push(self.actual.calc_f(x, y));
                grid.fp.push(self.actual.calc_fx(x, y) + self.actual.calc_fy(x, y));
            }
        }
        grid
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_works() {
        let surface = Surface::new(SurfaceType::ProductSine);
        assert_eq!(surface.value(1.0, 0.0), 0.0);
        assert_eq!(surface.derivative(1.0, 0.0), 1.0);
    }
}
