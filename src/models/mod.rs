pub mod car;
pub mod object;
pub mod patch;

pub use car::{describe_errors, Car, CarInput, CarPatch};
pub use patch::Patch;
