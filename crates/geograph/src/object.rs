//! Geo-tagged base object: a spatial reference plus associated coordinates.

use proj::Proj;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Projection names of the geographic (angular, lat/long) family.
const GEOGRAPHIC_PROJECTIONS: [&str; 4] = ["longlat", "latlong", "latlon", "lonlat"];

/// A value tagged with a spatial reference system and coordinate data.
///
/// `coords` is deliberately unconstrained at this layer: a single coordinate,
/// a positional array, or anything else the embedding type needs. The graph
/// layer instantiates it with a per-node coordinate array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoObject<C> {
    /// Spatial reference system for `coords`, in proj4 string format.
    /// Treated as immutable after construction by convention.
    pub srs: String,
    /// The coordinate data associated with this object.
    pub coords: C,
}

impl<C> GeoObject<C> {
    pub fn new(srs: impl Into<String>, coords: C) -> Self {
        Self { srs: srs.into(), coords }
    }

    /// Whether `srs` names a geographic (angular) reference system, as
    /// opposed to a projected (planar) one.
    ///
    /// The string is handed to PROJ on every call; nothing is cached. A
    /// string PROJ cannot parse is an error, not `false`.
    ///
    /// Classification covers definitions whose projection is directly in
    /// the longlat family; angular systems expressed indirectly (such as
    /// `+proj=ob_tran +o_proj=longlat`) classify as projected.
    pub fn is_geographic(&self) -> Result<bool> {
        let sr = Proj::new(&self.srs)?;
        let def = sr.def()?;
        // PROJ has no direct is-geographic query on a parsed definition, but
        // the normalized definition names the projection, and the longlat
        // family is exactly the angular one.
        Ok(def.split_whitespace().any(|token| {
            token
                .trim_start_matches('+')
                .strip_prefix("proj=")
                .is_some_and(|name| GEOGRAPHIC_PROJECTIONS.contains(&name))
        }))
    }
}
