pub mod geo_traits;
pub mod primitives;
mod offset;
mod repair;
mod transformation;

#[doc(inline)]
pub use offset::erode;
#[doc(inline)]
pub use repair::repair_ring;
#[doc(inline)]
pub use transformation::Transformation;
