pub trait SurfaceTrait {
    /// Calculates f(x,y)
    fn calc_f(&self, x: f64, y: f64) -> f64;

    /// Calculates ∂f/∂x
    fn calc_fx(&self, x: f64, y: f64) -> f64;

    /// Calculates ∂f/∂y
    fn calc_fy(&self, x: f64, y: f64) -> f64;

    /// Returns the formula of f for plot titles
    fn formula(&self) -> &'static str;

    /// Returns the formula of f' for plot titles
    fn formula_prime(&self) -> &'static str;
}
