use oil_exploration::{ConfigErrorKind, ConfigLoader, Violation, ViolationKind};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

/// Every field the schema requires, as dot-joined paths
const REQUIRED_PATHS: &[&str] = &[
    "data_sources",
    "data_sources.seismic",
    "data_sources.well_logs",
    "data_sources.historical",
    "data_sources.external_apis",
    "seismic_agent",
    "seismic_agent.path",
    "seismic_agent.version",
    "drilling_agent",
    "drilling_agent.path",
    "drilling_agent.version",
    "api",
    "api.api_keys",
];

#[derive(Debug, Clone)]
struct ModelFields {
    threshold: Option<f64>,
    device: Option<String>,
}

#[derive(Debug, Clone)]
struct GeneratedDocument {
    seismic: ModelFields,
    drilling: ModelFields,
    host: Option<String>,
    port: Option<u16>,
    workers: Option<u32>,
    enable_feedback_loop: Option<bool>,
    api_keys: BTreeMap<String, String>,
}

fn mapping(entries: Vec<(&str, Value)>) -> Value {
    Value::Mapping(
        entries
            .into_iter()
            .map(|(key, value)| (Value::from(key), value))
            .collect::<Mapping>(),
    )
}

fn model_value(path: &str, fields: &ModelFields) -> Value {
    let mut entries = vec![("path", Value::from(path)), ("version", Value::from("1.0.0"))];
    if let Some(threshold) = fields.threshold {
        entries.push(("confidence_threshold", Value::from(threshold)));
    }
    if let Some(ref device) = fields.device {
        entries.push(("device", Value::from(device.as_str())));
    }
    mapping(entries)
}

impl GeneratedDocument {
    fn to_value(&self) -> Value {
        let data_sources = mapping(vec![
            ("seismic", mapping(vec![("path", Value::from("/data/seismic"))])),
            ("well_logs", mapping(vec![])),
            ("historical", mapping(vec![("path", Value::from("/data/historical"))])),
            (
                "external_apis",
                mapping(vec![("weather", Value::from("https://api.weather.com"))]),
            ),
        ]);

        let mut api = Vec::new();
        if let Some(ref host) = self.host {
            api.push(("host", Value::from(host.as_str())));
        }
        if let Some(port) = self.port {
            api.push(("port", Value::from(port)));
        }
        if let Some(workers) = self.workers {
            api.push(("workers", Value::from(workers)));
        }
        let keys = self
            .api_keys
            .iter()
            .map(|(client, key)| (Value::from(client.as_str()), Value::from(key.as_str())))
            .collect::<Mapping>();
        api.push(("api_keys", Value::Mapping(keys)));

        let mut root = vec![
            ("data_sources", data_sources),
            ("seismic_agent", model_value("/models/seismic", &self.seismic)),
            ("drilling_agent", model_value("/models/drilling", &self.drilling)),
            ("api", mapping(api)),
        ];
        if let Some(enabled) = self.enable_feedback_loop {
            root.push(("enable_feedback_loop", Value::from(enabled)));
        }
        mapping(root)
    }
}

fn model_fields() -> impl Strategy<Value = ModelFields> {
    (
        proptest::option::of((0u32..=100).prop_map(|n| f64::from(n) / 100.0)),
        proptest::option::of("(cpu|cuda|tpu)"),
    )
        .prop_map(|(threshold, device)| ModelFields { threshold, device })
}

fn document() -> impl Strategy<Value = GeneratedDocument> {
    (
        model_fields(),
        model_fields(),
        proptest::option::of("[a-z]{1,8}(\\.[a-z]{1,8}){0,2}"),
        proptest::option::of(any::<u16>()),
        proptest::option::of(1u32..64),
        proptest::option::of(any::<bool>()),
        prop::collection::btree_map("[a-z]{1,8}[0-9]{0,2}", "[A-Za-z0-9]{4,16}", 0..4),
    )
        .prop_map(
            |(seismic, drilling, host, port, workers, enable_feedback_loop, api_keys)| {
                GeneratedDocument {
                    seismic,
                    drilling,
                    host,
                    port,
                    workers,
                    enable_feedback_loop,
                    api_keys,
                }
            },
        )
}

/// Delete the field at a dot-joined path
fn remove_path(document: &mut Value, path: &str) {
    let (parent, key) = match path.rsplit_once('.') {
        Some((parent, key)) => (Some(parent), key),
        None => (None, path),
    };

    let mut target = document;
    if let Some(parent) = parent {
        for segment in parent.split('.') {
            target = target
                .get_mut(segment)
                .expect("generated document contains every required parent");
        }
    }
    target
        .as_mapping_mut()
        .expect("parents are mappings")
        .remove(key);
}

fn render(document: &Value) -> Result<String, TestCaseError> {
    serde_yaml::to_string(document).map_err(|e| TestCaseError::fail(e.to_string()))
}

proptest! {
    /// Property: omitted optional fields equal their documented defaults,
    /// supplied ones come through unchanged
    #[test]
    fn prop_optional_fields_default_or_pass_through(doc in document()) {
        let yaml = render(&doc.to_value())?;
        let config = ConfigLoader::load_str(&yaml, "generated.yaml")
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        for (loaded, fields) in [
            (&config.seismic_agent, &doc.seismic),
            (&config.drilling_agent, &doc.drilling),
        ] {
            prop_assert_eq!(loaded.confidence_threshold, fields.threshold.unwrap_or(0.7));
            prop_assert_eq!(loaded.device.as_str(), fields.device.as_deref().unwrap_or("cuda"));
        }

        prop_assert_eq!(config.api.host.as_str(), doc.host.as_deref().unwrap_or("0.0.0.0"));
        prop_assert_eq!(config.api.port, doc.port.unwrap_or(8000));
        prop_assert_eq!(config.api.workers, doc.workers.unwrap_or(4));
        prop_assert_eq!(config.enable_feedback_loop, doc.enable_feedback_loop.unwrap_or(true));
        prop_assert_eq!(&config.api.api_keys, &doc.api_keys);
    }

    /// Property: dropping any one required field yields exactly one
    /// `Missing` violation at that field's path
    #[test]
    fn prop_missing_required_field_is_reported(
        doc in document(),
        index in 0..REQUIRED_PATHS.len(),
    ) {
        let removed = REQUIRED_PATHS[index];
        let mut value = doc.to_value();
        remove_path(&mut value, removed);
        let yaml = render(&value)?;

        let err = match ConfigLoader::load_str(&yaml, "generated.yaml") {
            Ok(_) => return Err(TestCaseError::fail(format!("{removed} removed but document loaded"))),
            Err(err) => err,
        };

        prop_assert_eq!(err.kind(), ConfigErrorKind::Validation);
        prop_assert_eq!(err.violations(), &[Violation::new(removed, ViolationKind::Missing)][..]);
    }
}
