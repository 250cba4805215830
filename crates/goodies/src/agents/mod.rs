//! Goody implementations, one module per strategy.

pub mod matt;
pub mod random;
pub mod static_goody;

pub use matt::MattGoody;
pub use random::RandomGoody;
pub use static_goody::StaticGoody;
