use std::io::Write;
use tempfile::NamedTempFile;

/// Complete configuration exercising every section
pub const VALID_CONFIG: &str = r"
data_sources:
  seismic:
    path: /data/seismic
    format: segy
  well_logs:
    path: /data/well_logs
    format: las
  historical:
    path: /data/historical
  external_apis:
    weather: https://api.weather.com
    regulations: https://api.regulations.com

seismic_agent:
  path: /models/seismic
  version: 1.0.0
  confidence_threshold: 0.75
  device: cuda

drilling_agent:
  path: models/drilling
  version: 1.0.0

api:
  host: 0.0.0.0
  port: 8080
  workers: 2
  api_keys:
    client1: abc123
    client2: def456
";

/// Write `content` to a fresh temporary file
///
/// The file is removed when the returned handle is dropped.
pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp config");
    file.write_all(content.as_bytes())
        .expect("failed to write temp config");
    file.flush().expect("failed to flush temp config");
    file
}
