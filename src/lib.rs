//! A Web Processing Service (WPS) process that extracts the X (longitude) and
//! Y (latitude) ordinates of a point geometry.

pub mod coord_extraction;
pub mod error;
pub mod geom;
pub mod wps;

pub use coord_extraction::CoordinateExtraction;
pub use error::{Error, Result};
pub use geom::{GeoJsonParser, GeometryParser, Point};
pub use wps::{InputDescription, OutputDescription, Parameters, Process, ProcessDescription};
