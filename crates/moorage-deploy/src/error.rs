use moorage_core::id::DimensionId;
use moorage_data::DataLoadError;
use moorage_spatial::PlacementError;

/// Errors that can occur while deploying a supply ship.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// The deployer is not allowed to place structures in this dimension.
    #[error("deploying in dimension {} is not allowed", dimension.0)]
    DimensionNotAllowed { dimension: DimensionId },

    /// The footprint failed validation. Holds every violation, in scan order.
    #[error("placement rejected with {} error(s)", errors.len())]
    Rejected { errors: Vec<PlacementError> },

    /// Failed to load the deployer configuration.
    #[error(transparent)]
    Config(#[from] DataLoadError),
}

impl DeployError {
    /// The placement violations, if this is a rejection.
    pub fn placement_errors(&self) -> &[PlacementError] {
        match self {
            DeployError::Rejected { errors } => errors,
            _ => &[],
        }
    }
}
