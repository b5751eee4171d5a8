use crate::domain::model::{Lookup, View};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn lookup(&self, username: &str) -> Result<Lookup>;
}

/// The display container. `show` replaces everything previously shown.
pub trait Display: Send + Sync {
    fn show(&self, view: &View);
}
