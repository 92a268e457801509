use clap::{Parser, Subcommand};
use coord_extraction::{CoordinateExtraction, Parameters, Process, ProcessDescription};
use log::error;

#[derive(Debug, Parser)]
#[clap(
  name = "coord_extraction",
  about = "WPS process that extracts the coordinates of a point geometry",
  version
)]
struct Cli {
  #[clap(subcommand)]
  command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
  #[clap(name = "describe", about = "Print the process description as JSON")]
  Describe,

  #[clap(name = "execute", about = "Run the process and print its text/plain response")]
  Execute {
    /// Point geometry in GeoJSON format
    #[clap(long, value_parser)]
    feature: Option<String>,

    /// Additional input, as name=value
    #[clap(long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,
  },
}

fn parse_param(s: &str) -> Result<(String, String), String> {
  match s.split_once('=') {
    Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
    _ => Err(format!("expected name=value, got `{}`", s)),
  }
}

fn build_parameters(feature: Option<String>, params: Vec<(String, String)>) -> Parameters {
  let mut parameters = Parameters::new();
  for (name, value) in params {
    parameters.insert(name, serde_json::Value::String(value));
  }
  if let Some(feature) = feature {
    // keep unparseable input as a string, the process decides what to do with it
    let value = serde_json::from_str(&feature).unwrap_or(serde_json::Value::String(feature));
    parameters.insert("feature".to_string(), value);
  }
  parameters
}

fn run(command: Commands) -> coord_extraction::Result<()> {
  let process = CoordinateExtraction::new();
  match command {
    Commands::Describe => {
      let description = ProcessDescription::of(&process);
      println!("{}", serde_json::to_string_pretty(&description)?);
      Ok(())
    }
    Commands::Execute { feature, params } => {
      let parameters = build_parameters(feature, params);
      process.execute_to_stdout(&parameters)
    }
  }
}

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  let args = Cli::parse();
  if let Err(err) = run(args.command) {
    error!("process failed: {:?}", err);
    eprintln!("{}", err);
    std::process::exit(1);
  }
}
