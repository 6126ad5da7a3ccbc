pub type StrError = &'static str;

mod cosine_sine;
pub mod enums;
mod figure;
mod product_sine;
mod sample_table;
pub mod surface;
mod surface_trait;

pub use cosine_sine::*;
pub use enums::*;
pub use figure::*;
pub use product_sine::*;
pub use sample_table::*;
pub use surface::*;
use surface_trait::*;
