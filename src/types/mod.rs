//! Type definitions

pub mod messages;
pub mod route_group;
pub mod stop;
pub mod zone;

pub use messages::*;
pub use route_group::*;
pub use stop::*;
pub use zone::*;
