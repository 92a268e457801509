//! The WPS process convention: metadata getters describing a process and a
//! single `execute` entry point called by the host.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Host-supplied inputs, keyed by input identifier.
pub type Parameters = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDescription {
  pub identifier: String,
  pub title: String,
  #[serde(rename = "abstract")]
  pub abstract_: String,
  pub media_type: String,
  pub required: bool,
}

impl InputDescription {
  pub fn new(identifier: &str, title: &str, abstract_: &str, media_type: &str, required: bool) -> Self {
    InputDescription {
      identifier: identifier.to_string(),
      title: title.to_string(),
      abstract_: abstract_.to_string(),
      media_type: media_type.to_string(),
      required,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDescription {
  pub identifier: String,
  pub title: String,
  #[serde(rename = "abstract")]
  pub abstract_: String,
  pub media_type: String,
}

impl OutputDescription {
  pub fn new(identifier: &str, title: &str, abstract_: &str, media_type: &str) -> Self {
    OutputDescription {
      identifier: identifier.to_string(),
      title: title.to_string(),
      abstract_: abstract_.to_string(),
      media_type: media_type.to_string(),
    }
  }
}

pub trait Process {
  /// Display name.
  fn title(&self) -> String;

  /// One-line description.
  fn abstract_(&self) -> String;

  fn inputs(&self) -> Vec<InputDescription>;

  fn outputs(&self) -> Vec<OutputDescription>;

  /// Runs the process, writing its textual response to `out`.
  fn execute(&self, parameters: &Parameters, out: &mut dyn Write) -> Result<()>;

  fn execute_to_stdout(&self, parameters: &Parameters) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    self.execute(parameters, &mut lock)?;
    lock.flush()?;
    Ok(())
  }
}

/// Everything a host needs to advertise a process, in one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescription {
  pub title: String,
  #[serde(rename = "abstract")]
  pub abstract_: String,
  pub inputs: Vec<InputDescription>,
  pub outputs: Vec<OutputDescription>,
}

impl ProcessDescription {
  pub fn of<P: Process + ?Sized>(process: &P) -> Self {
    ProcessDescription {
      title: process.title(),
      abstract_: process.abstract_(),
      inputs: process.inputs(),
      outputs: process.outputs(),
    }
  }
}
