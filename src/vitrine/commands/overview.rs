use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{PortfolioItem, ServiceItem, TeamMember};
use crate::store::backend::StorageBackend;
use crate::store::collection::CollectionStore;

/// Record counts shown on the dashboard landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overview {
    pub portfolio: usize,
    pub services: usize,
    pub team: usize,
}

pub fn run<B: StorageBackend>(
    portfolio: &CollectionStore<PortfolioItem, B>,
    services: &CollectionStore<ServiceItem, B>,
    team: &CollectionStore<TeamMember, B>,
) -> Result<CmdResult> {
    let overview = Overview {
        portfolio: portfolio.len(),
        services: services.len(),
        team: team.len(),
    };
    Ok(CmdResult {
        overview: Some(overview),
        ..Default::default()
    })
}
