use crate::SurfaceTrait;

/// Product-sine surface
///
/// ```text
/// f(x,y) = x sin(y)
/// f'(x,y) = sin(y) + x cos(y)
/// ```
///
/// f' is the dual part produced by the AD program with both
/// input seeds set to 1, i.e., ∂f/∂x + ∂f/∂y
pub struct ProductSine {}

impl ProductSine {
    /// Allocates a new instance
    pub fn new() -> Self {
        ProductSine {}
    }

    /// Calculates the analytical f(x,y)
    pub fn analytical_f(x: f64, y: f64) -> f64 {
        x * f64::sin(y)
    }

    /// Calculates the analytical f'(x,y)
    pub fn analytical_fp(x: f64, y: f64) -> f64 {
        f64::sin(y) + x * f64::cos(y)
    }
}

impl SurfaceTrait for ProductSine {
    /// Calculates f(x,y)
    fn calc_f(&self, x: f64, y: f64) -> f64 {
        x * f64::sin(y)
    }

    /// Calculates ∂f/∂x
    fn calc_fx(&self, _x: f64, y: f64) -> f64 {
        f64::sin(y)
    }

    /// Calculates ∂f/∂y
    fn calc_fy(&self, x: f64, y: f64) -> f64 {
        x * f64::cos(y)
    }

    /// Returns the formula of f for plot titles
    fn formula(&self) -> &'static str {
        "F = x sin(y)"
    }

    /// Returns the formula of f' for plot titles
    fn formula_prime(&self) -> &'static str {
        "F' = sin(y) + x cos(y)"
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytical_formulas_work() {
        assert_eq!(ProductSine::analytical_f(1.0, 0.0), 0.0);
        assert_eq!(ProductSine::analytical_fp(1.0, 0.0), 1.0);
        let surface = ProductSine::new();
        assert_eq!(surface.calc_fx(1.0, 0.0) + surface.calc_fy(1.0, 0.0), 1.0);
    }
}
