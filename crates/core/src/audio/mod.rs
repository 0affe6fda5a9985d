pub mod feedback;
pub mod metrics;
pub mod transcript;
