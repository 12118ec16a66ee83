use models::endpoints::{TEAMS, TEAMS_REORDER};
use models::{CreateTeam, ReorderTeams, Team, TeamListParams, UpdateTeam};
use tracing::info;

use super::{Resource, ResourceService};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy)]
pub struct Teams;

impl Resource for Teams {
    type Item = Team;
    type Create = CreateTeam;
    type Update = UpdateTeam;
    type Query = TeamListParams;

    const BASE: &'static str = TEAMS;
    const NOUN: &'static str = "team member";
    const PLURAL: &'static str = "team members";

    fn id(item: &Team) -> &str {
        &item.id
    }
}

pub type TeamService = ResourceService<Teams>;

impl ResourceService<Teams> {
    /// Persist a new display order. `ordered_ids` lists member ids front to
    /// back; the backend assigns `displayOrder` from the position.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn reorder(&self, ordered_ids: Vec<String>) -> Result<(), ApiError> {
        let count = ordered_ids.len();
        let _: serde_json::Value = self.api().put(TEAMS_REORDER, &ReorderTeams { ordered_ids }).await?;
        info!(count, "team member: reordered");
        Ok(())
    }
}
