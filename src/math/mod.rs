pub mod color;
mod state;
mod transform;

pub use state::VectorSpace;
pub use transform::{Axis, Transform};
