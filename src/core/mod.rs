pub mod render;
pub mod search;

pub use crate::domain::model::{Lookup, Profile, Trigger, View};
pub use crate::domain::ports::{Display, ProfileSource};
pub use crate::utils::error::Result;
