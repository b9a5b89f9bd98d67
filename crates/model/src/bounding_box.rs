use std::{error, fmt};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An axis-aligned latitude/longitude rectangle used as a spatial filter.
/// All four bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundingBoxError {
    LatitudeBoundsInverted,
    LongitudeBoundsInverted,
}

impl fmt::Display for BoundingBoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundingBoxError::LatitudeBoundsInverted => {
                write!(f, "min_lat must not exceed max_lat")
            }
            BoundingBoxError::LongitudeBoundsInverted => {
                write!(f, "min_lng must not exceed max_lng")
            }
        }
    }
}

impl error::Error for BoundingBoxError {}

impl BoundingBox {
    pub fn validate(&self) -> Result<(), BoundingBoxError> {
        if self.min_lat > self.max_lat {
            return Err(BoundingBoxError::LatitudeBoundsInverted);
        }
        if self.min_lng > self.max_lng {
            return Err(BoundingBoxError::LongitudeBoundsInverted);
        }
        Ok(())
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_lat
            && latitude <= self.max_lat
            && longitude >= self.min_lng
            && longitude <= self.max_lng
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundingBox, BoundingBoxError};

    fn downtown_vancouver() -> BoundingBox {
        BoundingBox {
            min_lat: 49.27,
            max_lat: 49.29,
            min_lng: -123.13,
            max_lng: -123.10,
        }
    }

    #[test]
    fn contains_interior_point() {
        assert!(downtown_vancouver().contains(49.2827, -123.1067));
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = downtown_vancouver();
        assert!(bounds.contains(49.27, -123.12));
        assert!(bounds.contains(49.29, -123.12));
        assert!(bounds.contains(49.28, -123.13));
        assert!(bounds.contains(49.28, -123.10));
        assert!(bounds.contains(49.27, -123.13));
    }

    #[test]
    fn excludes_points_outside() {
        let bounds = downtown_vancouver();
        assert!(!bounds.contains(49.2699, -123.12));
        assert!(!bounds.contains(49.28, -123.0999));
        assert!(!bounds.contains(48.0, 11.0));
    }

    #[test]
    fn validate_accepts_well_formed_bounds() {
        assert_eq!(downtown_vancouver().validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_degenerate_point_box() {
        let bounds = BoundingBox {
            min_lat: 49.2827,
            max_lat: 49.2827,
            min_lng: -123.1067,
            max_lng: -123.1067,
        };
        assert_eq!(bounds.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_inverted_latitude() {
        let bounds = BoundingBox {
            min_lat: 49.29,
            max_lat: 49.27,
            min_lng: -123.13,
            max_lng: -123.10,
        };
        assert_eq!(
            bounds.validate(),
            Err(BoundingBoxError::LatitudeBoundsInverted)
        );
    }

    #[test]
    fn validate_rejects_inverted_longitude() {
        let bounds = BoundingBox {
            min_lat: 49.27,
            max_lat: 49.29,
            min_lng: -123.10,
            max_lng: -123.13,
        };
        assert_eq!(
            bounds.validate(),
            Err(BoundingBoxError::LongitudeBoundsInverted)
        );
    }
}
