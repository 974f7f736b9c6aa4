pub mod token;
pub mod assignment;
pub mod lifecycle;
pub mod desk;
pub mod slip;

pub use token::*;
pub use assignment::*;
pub use lifecycle::*;
pub use desk::*;
pub use slip::*;
