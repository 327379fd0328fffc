pub mod reducer;
pub mod rounds;
pub mod simulation;
pub mod queries;

pub use reducer::*;
pub use rounds::*;
pub use simulation::*;
pub use queries::*;
