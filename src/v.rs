extern crate vek;

// NOTE: Avoid repr_simd for alignment reasons (when sending packed data to OpenGL)
pub use self::vek::vec::repr_c::{Vec3, Rgba, Extent2};
