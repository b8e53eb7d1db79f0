//! Ironcoach - triathlon team coaching dashboard
//!
//! A self-hosted dashboard for a small team training toward a long-distance
//! triathlon. Generates phase-based weekly training plans, rotates daily meal
//! suggestions, and persists per-athlete activity, nutrition and sleep logs.

pub mod coaching;
pub mod nutrition;
pub mod plan;
pub mod session;
pub mod storage;
pub mod team;
pub mod ui;

// Re-export commonly used types
pub use nutrition::MealPicker;
pub use plan::PlanGenerator;
pub use session::SessionState;
pub use storage::config::AppConfig;
pub use storage::LogStore;
pub use team::Roster;
