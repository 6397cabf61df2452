pub mod atomic;
pub mod buffer;
pub mod dispatch;
pub mod kernel;
pub mod math;
pub mod ptr;
pub mod scalar;
pub mod vector;

// Re-exports — preserves `riptide::X` paths used by tests and benches
pub use buffer::HostBuffer;
pub use dispatch::{launch, DispatchContext, GridDim};
pub use ptr::{ConstPtr, ConstantPtr, GlobalPtr, LocalPtr, PrivatePtr, Ptr};
pub use scalar::{Float, Int, MaskScalar, Scalar};
pub use vector::Vector;
