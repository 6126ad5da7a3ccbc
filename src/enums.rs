/// Specifies the reference surface
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SurfaceType {
    /// f(x,y) = x sin(y)
    ProductSine,

    /// f(x,y) = cos(x) sin(y)
    CosineSine,
}
