use crate::SurfaceTrait;

/// Cosine-sine surface
///
/// ```text
/// f(x,y) = cos(x) sin(y)
/// f'(x,y) = cos(x) cos(y) - sin(x) sin(y)
/// ```
pub struct CosineSine {}

impl CosineSine {
    /// Allocates a new instance
    pub fn new() -> Self {
        CosineSine {}
    }

    /// Calculates the analytical f(x,y)
    pub fn analytical_f(x: f64, y: f64) -> f64 {
        f64::cos(x) * f64::sin(y)
    }

    /// Calculates the analytical f'(x,y)
    pub fn analytical_fp(x: f64, y: f64) -> f64 {
        f64::cos(x) * f64::cos(y) - f64::sin(x) * f64::sin(y)
    }
}

impl SurfaceTrait for CosineSine {
    /// Calculates f(x,y)
    fn calc_f(&self, x: f64, y: f64) -> f64 {
        f64::cos(x) * f64::sin(y)
    }

    /// Calculates ∂f/∂x
    fn calc_fx(&self, x: f64, y: f64) -> f64 {
        -f64::sin(x) * f64::sin(y)
    }

    /// Calculates ∂f/∂y
    fn calc_fy(&self, x: f64, y: f64) -> f64 {
        f64::cos(x) * f64::cos(y)
    }

    /// Returns the formula of f for plot titles
    fn formula(&self) -> &'static str {
        "F = cos(x) sin(y)"
    }

    /// Returns the formula of f' for plot titles
    fn formula_prime(&self) -> &'static str {
        "F' = cos(x) cos(y) - sin(x) sin(y)"
    }
}
