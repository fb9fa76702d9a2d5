//! Error types for geograph

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeographError {
    /// The graph's node indices do not match the coordinate array positions.
    #[error("GeoGraph nodes and coords not aligned")]
    NodesCoordsMisaligned,

    /// The spatial reference string could not be parsed by PROJ.
    #[error(transparent)]
    Srs(#[from] proj::ProjCreateError),

    /// PROJ failed while querying an already-parsed spatial reference.
    #[error(transparent)]
    Proj(#[from] proj::ProjError),
}

pub type Result<T> = std::result::Result<T, GeographError>;
