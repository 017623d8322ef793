pub mod engine;
pub mod events;
pub mod ranking;
pub mod repository;
pub mod validation;

// Re-export main components
pub use engine::*;
pub use events::*;
pub use ranking::*;
pub use repository::*;
pub use validation::*;
