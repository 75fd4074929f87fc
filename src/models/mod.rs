//! Core data models for the aggregation engine.

mod category;
mod ids;
mod keeper;
mod matchup;
mod power;
mod season;
mod team;

pub use category::*;
pub use ids::*;
pub use keeper::*;
pub use matchup::*;
pub use power::*;
pub use season::*;
pub use team::*;
