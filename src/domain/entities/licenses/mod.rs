pub mod license;

pub use license::License;
