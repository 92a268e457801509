use geojson::{GeoJson, Geometry, Value};
use log::debug;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub fn new(x: f64, y: f64) -> Self {
    Point { x, y }
  }

  /// The X ordinate (longitude).
  pub fn x(&self) -> f64 {
    self.x
  }

  /// The Y ordinate (latitude).
  pub fn y(&self) -> f64 {
    self.y
  }

  /// Serializes the point as a GeoJSON `Point` geometry.
  pub fn to_geojson(&self) -> Result<String> {
    let geometry = Geometry::new(Value::Point(vec![self.x, self.y]));
    Ok(serde_json::to_string(&geometry)?)
  }
}

/// Turns a JSON string into a point geometry. `None` means the input could
/// not be parsed into a point.
pub trait GeometryParser {
  fn parse(&self, json: &str) -> Option<Point>;
}

/// Parses GeoJSON `Point` geometries, bare or wrapped in a `Feature`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeoJsonParser;

impl GeometryParser for GeoJsonParser {
  fn parse(&self, json: &str) -> Option<Point> {
    let geojson = match json.parse::<GeoJson>() {
      Ok(geojson) => geojson,
      Err(err) => {
        debug!("rejecting input, not GeoJSON: {}", err);
        return None;
      }
    };

    let geometry = match geojson {
      GeoJson::Geometry(geometry) => geometry,
      GeoJson::Feature(feature) => match feature.geometry {
        Some(geometry) => geometry,
        None => {
          debug!("rejecting input, feature has no geometry");
          return None;
        }
      },
      GeoJson::FeatureCollection(_) => {
        debug!("rejecting input, feature collections are not points");
        return None;
      }
    };

    match geometry.value {
      // a Z ordinate is allowed and dropped
      Value::Point(ref position) if position.len() >= 2 => {
        Some(Point::new(position[0], position[1]))
      }
      Value::Point(ref position) => {
        debug!(
          "rejecting input, point has {} ordinates",
          position.len()
        );
        None
      }
      _ => {
        debug!("rejecting input, geometry is not a Point");
        None
      }
    }
  }
}
