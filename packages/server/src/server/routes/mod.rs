// HTTP routes
pub mod export;
pub mod extract;
pub mod health;
pub mod index;
pub mod sample;

pub use export::*;
pub use extract::*;
pub use health::*;
pub use index::*;
pub use sample::*;
