use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Beverage-type tag carried by a venue. A venue may hold several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeverageType {
    Winery,
    Cidery,
    Brewery,
    Distillery,
}

impl std::fmt::Display for BeverageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BeverageType::Winery => write!(f, "winery"),
            BeverageType::Cidery => write!(f, "cidery"),
            BeverageType::Brewery => write!(f, "brewery"),
            BeverageType::Distillery => write!(f, "distillery"),
        }
    }
}

impl FromStr for BeverageType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "winery" => Ok(BeverageType::Winery),
            "cidery" => Ok(BeverageType::Cidery),
            "brewery" => Ok(BeverageType::Brewery),
            "distillery" => Ok(BeverageType::Distillery),
            other => Err(CoreError::InvalidInput(format!(
                "unknown beverage type '{other}'; expected one of winery, cidery, brewery, distillery"
            ))),
        }
    }
}

/// A WGS84 point in degrees. Both components are guaranteed finite when
/// built through [`Coordinate::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting NaN and infinities.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if either component is not finite.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, CoreError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(CoreError::InvalidInput(
                "lat and lng must be finite numbers".to_string(),
            ));
        }
        Ok(Self { lat, lng })
    }
}

/// Parse a request-boundary coordinate from raw string parameters.
///
/// Missing, blank, non-numeric, or non-finite values are all rejected the
/// same way, before any query engine sees them.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] when either parameter is unusable.
pub fn parse_coordinate(lat: Option<&str>, lng: Option<&str>) -> Result<Coordinate, CoreError> {
    let parse = |raw: Option<&str>| -> Option<f64> {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|v| v.is_finite())
    };

    match (parse(lat), parse(lng)) {
        (Some(lat), Some(lng)) => Ok(Coordinate { lat, lng }),
        _ => Err(CoreError::InvalidInput(
            "lat and lng query parameters are required numbers".to_string(),
        )),
    }
}

/// One catalog entry. Coordinates are absent until the geocode tool fills
/// them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub categories: Vec<BeverageType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl Venue {
    /// The venue's position, if both components are present and finite.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Coordinate::try_new(lat, lng).ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn has_category(&self, category: BeverageType) -> bool {
        self.categories.contains(&category)
    }
}

impl AsRef<Venue> for Venue {
    fn as_ref(&self) -> &Venue {
        self
    }
}
