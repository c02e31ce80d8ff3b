//! Conduit cross-section geometry.
//!
//! Pure functions for area, wetted perimeter and hydraulic diameter, plus the
//! `CrossSection` variant a pipe segment is built from.

use crate::error::{FlowError, FlowResult, positive_dimension};
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Area of a circle, π·d²/4.
pub fn circular_area(diameter: f64) -> FlowResult<f64> {
    let d = positive_dimension(diameter, "diameter must be > 0")?;
    Ok(PI * d * d / 4.0)
}

/// Perimeter of a circle, π·d.
pub fn circular_perimeter(diameter: f64) -> FlowResult<f64> {
    let d = positive_dimension(diameter, "diameter must be > 0")?;
    Ok(PI * d)
}

/// Area of a rectangle, w·h.
pub fn rectangular_area(width: f64, height: f64) -> FlowResult<f64> {
    let w = positive_dimension(width, "width must be > 0")?;
    let h = positive_dimension(height, "height must be > 0")?;
    Ok(w * h)
}

/// Perimeter of a rectangle, 2·(w + h).
pub fn rectangular_perimeter(width: f64, height: f64) -> FlowResult<f64> {
    let w = positive_dimension(width, "width must be > 0")?;
    let h = positive_dimension(height, "height must be > 0")?;
    Ok(2.0 * (w + h))
}

/// Hydraulic diameter, 4·A/P.
pub fn hydraulic_diameter(perimeter: f64, area: f64) -> FlowResult<f64> {
    let p = positive_dimension(perimeter, "wetted perimeter must be > 0")?;
    let a = positive_dimension(area, "cross-sectional area must be > 0")?;
    Ok(4.0 * a / p)
}

/// Shape of the flow passage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "shape", rename_all = "snake_case"))]
pub enum CrossSection {
    Circular { diameter: f64 },
    Rectangular { width: f64, height: f64 },
}

/// Geometric properties frozen at pipe construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SectionProperties {
    pub area: f64,
    pub wetted_perimeter: f64,
    pub hydraulic_diameter: f64,
}

impl CrossSection {
    /// Circular section with validated diameter.
    pub fn circular(diameter: f64) -> FlowResult<Self> {
        positive_dimension(diameter, "diameter must be > 0")?;
        Ok(Self::Circular { diameter })
    }

    /// Rectangular section with validated sides.
    pub fn rectangular(width: f64, height: f64) -> FlowResult<Self> {
        positive_dimension(width, "width must be > 0")?;
        positive_dimension(height, "height must be > 0")?;
        Ok(Self::Rectangular { width, height })
    }

    /// Pick the variant from optional dimensions.
    ///
    /// Exactly one of `diameter` or the `width`/`height` pair must be given.
    pub fn from_dimensions(
        diameter: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
    ) -> FlowResult<Self> {
        match (diameter, width, height) {
            (Some(d), None, None) => Self::circular(d),
            (None, Some(w), Some(h)) => Self::rectangular(w, h),
            (None, None, None) => Err(FlowError::InvalidGeometry {
                what: "cross-section requires a diameter or a width and height",
            }),
            (Some(_), _, _) => Err(FlowError::InvalidGeometry {
                what: "cross-section takes a diameter or a width and height, not both",
            }),
            _ => Err(FlowError::InvalidGeometry {
                what: "rectangular cross-section requires both width and height",
            }),
        }
    }

    pub fn area(&self) -> FlowResult<f64> {
        match *self {
            Self::Circular { diameter } => circular_area(diameter),
            Self::Rectangular { width, height } => rectangular_area(width, height),
        }
    }

    pub fn wetted_perimeter(&self) -> FlowResult<f64> {
        match *self {
            Self::Circular { diameter } => circular_perimeter(diameter),
            Self::Rectangular { width, height } => rectangular_perimeter(width, height),
        }
    }

    /// Area, perimeter and hydraulic diameter in one pass.
    pub fn properties(&self) -> FlowResult<SectionProperties> {
        let area = self.area()?;
        let wetted_perimeter = self.wetted_perimeter()?;
        let hydraulic_diameter = hydraulic_diameter(wetted_perimeter, area)?;
        Ok(SectionProperties {
            area,
            wetted_perimeter,
            hydraulic_diameter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_hydraulic_diameter_is_diameter() {
        let props = CrossSection::circular(0.05).unwrap().properties().unwrap();
        assert!((props.area - PI * 0.05 * 0.05 / 4.0).abs() < 1e-15);
        assert!((props.wetted_perimeter - PI * 0.05).abs() < 1e-15);
        assert!((props.hydraulic_diameter - 0.05).abs() < 1e-15);
    }

    #[test]
    fn rectangle_properties() {
        let props = CrossSection::rectangular(0.2, 0.1)
            .unwrap()
            .properties()
            .unwrap();
        assert!((props.area - 0.02).abs() < 1e-15);
        assert!((props.wetted_perimeter - 0.6).abs() < 1e-15);
        // 4 * 0.02 / 0.6
        assert!((props.hydraulic_diameter - 0.133_333_333_333_333_3).abs() < 1e-12);
    }

    #[test]
    fn square_duct_hydraulic_diameter_is_side() {
        let props = CrossSection::rectangular(0.3, 0.3)
            .unwrap()
            .properties()
            .unwrap();
        assert!((props.hydraulic_diameter - 0.3).abs() < 1e-12);
    }

    #[test]
    fn non_positive_dimensions_rejected() {
        assert!(matches!(
            circular_area(0.0),
            Err(FlowError::InvalidGeometry { .. })
        ));
        assert!(matches!(
            circular_perimeter(-1.0),
            Err(FlowError::InvalidGeometry { .. })
        ));
        assert!(rectangular_area(1.0, 0.0).is_err());
        assert!(rectangular_perimeter(-2.0, 1.0).is_err());
        assert!(hydraulic_diameter(0.0, 1.0).is_err());
        assert!(CrossSection::circular(f64::NAN).is_err());
    }

    #[test]
    fn from_dimensions_requires_exactly_one_shape() {
        assert!(matches!(
            CrossSection::from_dimensions(Some(0.1), None, None),
            Ok(CrossSection::Circular { .. })
        ));
        assert!(matches!(
            CrossSection::from_dimensions(None, Some(0.1), Some(0.2)),
            Ok(CrossSection::Rectangular { .. })
        ));

        for (d, w, h) in [
            (None, None, None),
            (None, Some(0.1), None),
            (None, None, Some(0.1)),
            (Some(0.1), Some(0.1), Some(0.1)),
            (Some(0.1), Some(0.1), None),
        ] {
            assert!(
                matches!(
                    CrossSection::from_dimensions(d, w, h),
                    Err(FlowError::InvalidGeometry { .. })
                ),
                "expected InvalidGeometry for {d:?} {w:?} {h:?}"
            );
        }
    }
}
