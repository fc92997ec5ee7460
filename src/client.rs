use crate::requests::CalcImmediateRequest;
use async_trait::async_trait;
use std::error::Error;

#[async_trait]
pub trait Client {
    type Error: Error;

    /// Triggers an immediate recalculation of a ranking table.
    ///
    /// `owner_id`, `ranking_table_id` and `game_mode` must be set on the
    /// request; missing fields are not checked locally and surface as a
    /// backend rejection through the returned error.
    async fn calc_immediate(&self, request: CalcImmediateRequest) -> Result<(), Self::Error>;
}
