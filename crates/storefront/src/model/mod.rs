//! Page state and its rules. Nothing in here is async or touches the event channel.

pub mod cart;
pub mod event;
pub mod product;
pub mod review;
pub mod variant;

pub use cart::*;
pub use event::*;
pub use product::*;
pub use review::*;
pub use variant::*;
