pub mod math;
pub mod metrics;
pub mod providers;

pub use providers::TextProvider;
