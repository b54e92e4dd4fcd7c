pub mod gates;
pub mod persona;
pub mod progress;
pub mod team;

pub use persona::aggregate_personas;
pub use progress::aggregate_sprint_progress;
pub use team::aggregate_teams;
