mod allocator;
mod loader;

pub use allocator::{AllocationError, CandidatePool};
