pub mod core;
pub mod shared;
