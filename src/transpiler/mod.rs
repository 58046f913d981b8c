pub mod basis;
pub mod pass;

// Re-export for easier access
pub use basis::{lower_to_basis, BasisLowering, BASIS_GATES};
pub use pass::{Pass, PassManager};
