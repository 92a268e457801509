use std::io::Write;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::geom::{GeoJsonParser, GeometryParser, Point};
use crate::wps::{InputDescription, OutputDescription, Parameters, Process};

const INVALID_GEOMETRY_MESSAGE: &str = "Invalid GeoJSON geometry: Could not parse input.";

// in order of: longitude, latitude
const SAMPLE_POINT: (f64, f64) = (6.88587, 52.22443);

/// Extracts the X (longitude) and Y (latitude) ordinates of a point.
///
/// `execute` does not read the declared `feature` input; it always works on
/// a fixed sample point.
#[derive(Debug, Default, Clone)]
pub struct CoordinateExtraction<P: GeometryParser = GeoJsonParser> {
  parser: P,
}

impl CoordinateExtraction<GeoJsonParser> {
  pub fn new() -> Self {
    CoordinateExtraction {
      parser: GeoJsonParser,
    }
  }
}

impl<P: GeometryParser> CoordinateExtraction<P> {
  pub fn with_parser(parser: P) -> Self {
    CoordinateExtraction { parser }
  }
}

impl<P: GeometryParser> Process for CoordinateExtraction<P> {
  fn title(&self) -> String {
    "Coordinate Extraction".to_string()
  }

  fn abstract_(&self) -> String {
    "Extracts the X (longitude) and Y (latitude) coordinates from a point geometry.".to_string()
  }

  fn inputs(&self) -> Vec<InputDescription> {
    vec![InputDescription::new(
      "feature",
      "Input feature",
      "A point geometry in GeoJSON format.",
      "application/json",
      true,
    )]
  }

  fn outputs(&self) -> Vec<OutputDescription> {
    vec![
      OutputDescription::new(
        "x",
        "Longitude",
        "The X coordinate (longitude) of the point.",
        "text/plain",
      ),
      OutputDescription::new(
        "y",
        "Latitude",
        "The Y coordinate (latitude) of the point.",
        "text/plain",
      ),
    ]
  }

  fn execute(&self, parameters: &Parameters, out: &mut dyn Write) -> Result<()> {
    if !parameters.is_empty() {
      debug!(
        "ignoring {} supplied parameter(s), using the sample point",
        parameters.len()
      );
    }

    let feature = Point::new(SAMPLE_POINT.0, SAMPLE_POINT.1).to_geojson()?;
    let point = self
      .parser
      .parse(&feature)
      .ok_or_else(|| Error::InvalidGeometry(INVALID_GEOMETRY_MESSAGE.to_string()))?;

    info!("extracted x={} y={}", point.x(), point.y());
    write!(
      out,
      "Content-type: text/plain\n\nx={}\ny={}\n",
      point.x(),
      point.y()
    )?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  struct NullParser;

  impl GeometryParser for NullParser {
    fn parse(&self, _json: &str) -> Option<Point> {
      None
    }
  }

  #[test]
  fn test_title() {
    assert_eq!(CoordinateExtraction::new().title(), "Coordinate Extraction");
  }

  #[test]
  fn test_abstract() {
    assert_eq!(
      CoordinateExtraction::new().abstract_(),
      "Extracts the X (longitude) and Y (latitude) coordinates from a point geometry."
    );
  }

  #[test]
  fn test_inputs() {
    let inputs = CoordinateExtraction::new().inputs();
    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].identifier, "feature");
    assert_eq!(inputs[0].media_type, "application/json");
    assert!(inputs[0].required);
  }

  #[test]
  fn test_outputs() {
    let outputs = CoordinateExtraction::new().outputs();
    let identifiers: Vec<&str> = outputs.iter().map(|o| o.identifier.as_str()).collect();
    assert_eq!(identifiers, vec!["x", "y"]);
    assert!(outputs.iter().all(|o| o.media_type == "text/plain"));
  }

  #[test]
  fn test_execute() {
    let mut out = Vec::new();
    CoordinateExtraction::new()
      .execute(&Parameters::new(), &mut out)
      .unwrap();
    assert_eq!(
      String::from_utf8(out).unwrap(),
      "Content-type: text/plain\n\nx=6.88587\ny=52.22443\n"
    );
  }

  #[test]
  fn test_execute_ignores_parameters() {
    let mut parameters = Parameters::new();
    parameters.insert(
      "feature".to_string(),
      json!({"type": "Point", "coordinates": [1.0, 2.0]}),
    );
    let mut out = Vec::new();
    CoordinateExtraction::new()
      .execute(&parameters, &mut out)
      .unwrap();
    assert_eq!(
      String::from_utf8(out).unwrap(),
      "Content-type: text/plain\n\nx=6.88587\ny=52.22443\n"
    );
  }

  #[test]
  fn test_execute_with_null_parser() {
    let mut out = Vec::new();
    let err = CoordinateExtraction::with_parser(NullParser)
      .execute(&Parameters::new(), &mut out)
      .unwrap_err();
    assert!(matches!(err, Error::InvalidGeometry(_)));
    assert_eq!(
      err.to_string(),
      "Invalid GeoJSON geometry: Could not parse input."
    );
    assert!(out.is_empty());
  }
}
