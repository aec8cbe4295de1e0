use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An axis aligned rectangle in (longitude, latitude) space.
///
/// All four bounds are inclusive. Boxes crossing the antimeridian are not
/// supported: `min_longitude` is expected to be west of `max_longitude` in
/// plain numeric order, so a box from 170 to -170 matches nothing.
/// Bounds are not checked against the valid coordinate ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoundingBox {
    pub min_longitude: f64,
    pub min_latitude: f64,
    pub max_longitude: f64,
    pub max_latitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundingBoxError {
    #[error("a bounding box needs exactly 4 values (min_long, min_lat, max_long, max_lat), got {0}")]
    WrongArity(usize),
}

impl BoundingBox {
    pub fn new(
        min_longitude: f64,
        min_latitude: f64,
        max_longitude: f64,
        max_latitude: f64,
    ) -> Self {
        Self {
            min_longitude,
            min_latitude,
            max_longitude,
            max_latitude,
        }
    }

    pub fn contains(&self, longitude: f64, latitude: f64) -> bool {
        self.min_longitude <= longitude
            && longitude <= self.max_longitude
            && self.min_latitude <= latitude
            && latitude <= self.max_latitude
    }
}

impl TryFrom<&[f64]> for BoundingBox {
    type Error = BoundingBoxError;

    /// Values are expected in the order min_long, min_lat, max_long, max_lat.
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            [min_longitude, min_latitude, max_longitude, max_latitude] => Ok(Self::new(
                *min_longitude,
                *min_latitude,
                *max_longitude,
                *max_latitude,
            )),
            _ => Err(BoundingBoxError::WrongArity(values.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundingBox, BoundingBoxError};

    #[test]
    fn bounds_are_inclusive() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(bbox.contains(10.0, 10.0));
        assert!(bbox.contains(0.0, 0.0));
        assert!(bbox.contains(0.0, 10.0));
        assert!(bbox.contains(5.0, 5.0));
    }

    #[test]
    fn points_outside_are_rejected() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(!bbox.contains(50.0, 50.0));
        assert!(!bbox.contains(10.000001, 5.0));
        assert!(!bbox.contains(5.0, -0.000001));
    }

    #[test]
    fn antimeridian_crossing_box_matches_nothing() {
        let bbox = BoundingBox::new(170.0, -10.0, -170.0, 10.0);
        assert!(!bbox.contains(175.0, 0.0));
        assert!(!bbox.contains(-175.0, 0.0));
    }

    #[test]
    fn built_from_four_values_in_order() {
        let values = [1.0, 2.0, 3.0, 4.0];
        let bbox = BoundingBox::try_from(&values[..]).unwrap();
        assert_eq!(bbox, BoundingBox::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(bbox.min_longitude, 1.0);
        assert_eq!(bbox.min_latitude, 2.0);
        assert_eq!(bbox.max_longitude, 3.0);
        assert_eq!(bbox.max_latitude, 4.0);
    }

    #[test]
    fn wrong_number_of_values_is_an_error() {
        assert_eq!(
            BoundingBox::try_from(&[1.0, 2.0, 3.0][..]),
            Err(BoundingBoxError::WrongArity(3))
        );
        let empty: [f64; 0] = [];
        assert_eq!(
            BoundingBox::try_from(&empty[..]),
            Err(BoundingBoxError::WrongArity(0))
        );
    }
}
