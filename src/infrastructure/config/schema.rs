//! Schema validation for the system configuration document
//!
//! The parsed YAML tree is walked depth-first by one function per record
//! type. Each function records every problem it sees into a shared
//! [`Validator`] instead of returning on the first one, so a single load
//! reports the whole list. Absent optional fields take their documented
//! defaults; unknown extra keys are ignored.

use serde_yaml::{Mapping, Number, Value};
use std::collections::BTreeMap;

use crate::domain::errors::{ROOT_PATH, SchemaValidationError, Violation, ViolationKind};
use crate::domain::models::config::{
    default_confidence_threshold, default_device, default_enable_feedback_loop, default_host,
    default_port, default_workers,
};
use crate::domain::models::{
    ApiConfig, ConfigMap, ConfigValue, DataSourceConfig, ModelConfig, SystemConfig,
};

/// Validate a parsed document and build the typed configuration.
///
/// # Errors
/// Returns every violation found when the document does not match the schema.
pub fn validate(document: &Value) -> Result<SystemConfig, SchemaValidationError> {
    let mut validator = Validator::default();
    let config = validator.system(document);

    match config {
        Some(config) if validator.violations.is_empty() => Ok(config),
        _ => Err(SchemaValidationError {
            violations: validator.violations,
        }),
    }
}

/// Join a parent path and a child key (`api` + `port` -> `api.port`).
fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Type name of a raw YAML value, for messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(n) if n.is_f64() => "float".to_string(),
        Value::Number(_) => "integer".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Sequence(_) => "sequence".to_string(),
        Value::Mapping(_) => "mapping".to_string(),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}

/// Render a mapping key for messages.
fn render_key(key: &Value) -> String {
    match key {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => format!("<{}>", describe(other)),
    }
}

#[derive(Default)]
struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    fn report(&mut self, path: impl Into<String>, kind: ViolationKind) {
        self.violations.push(Violation::new(path, kind));
    }

    fn mismatch(&mut self, path: &str, expected: &str, found: &Value) {
        self.report(
            path,
            ViolationKind::TypeMismatch {
                expected: expected.to_string(),
                found: describe(found),
            },
        );
    }

    fn expect_mapping<'a>(&mut self, value: &'a Value, path: &str) -> Option<&'a Mapping> {
        if let Value::Mapping(map) = value {
            Some(map)
        } else {
            self.mismatch(path, "mapping", value);
            None
        }
    }

    /// Look up a required key, reporting it as missing when absent.
    fn required<'a>(&mut self, map: &'a Mapping, parent: &str, key: &str) -> Option<&'a Value> {
        let value = map.get(key);
        if value.is_none() {
            self.report(join_path(parent, key), ViolationKind::Missing);
        }
        value
    }

    fn string(&mut self, value: &Value, path: &str) -> Option<String> {
        if let Value::String(s) = value {
            Some(s.clone())
        } else {
            self.mismatch(path, "string", value);
            None
        }
    }

    fn boolean(&mut self, value: &Value, path: &str) -> Option<bool> {
        if let Value::Bool(b) = value {
            Some(*b)
        } else {
            self.mismatch(path, "boolean", value);
            None
        }
    }

    fn float(&mut self, value: &Value, path: &str) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            other => {
                self.mismatch(path, "float", other);
                None
            }
        }
    }

    /// Integer that must fit `T`; floats are not truncated.
    fn integer<T>(&mut self, value: &Value, path: &str, expected: &str) -> Option<T>
    where
        T: TryFrom<i64> + TryFrom<u64>,
    {
        let Value::Number(n) = value else {
            self.mismatch(path, "integer", value);
            return None;
        };
        if n.is_f64() {
            self.mismatch(path, "integer", value);
            return None;
        }

        let converted = match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => <T as TryFrom<i64>>::try_from(i).ok(),
            (None, Some(u)) => <T as TryFrom<u64>>::try_from(u).ok(),
            (None, None) => None,
        };
        if converted.is_none() {
            self.report(
                path,
                ViolationKind::OutOfRange {
                    expected: expected.to_string(),
                    value: n.to_string(),
                },
            );
        }
        converted
    }

    fn required_string(&mut self, map: &Mapping, parent: &str, key: &str) -> Option<String> {
        let value = self.required(map, parent, key)?;
        self.string(value, &join_path(parent, key))
    }

    fn optional_string(
        &mut self,
        map: &Mapping,
        parent: &str,
        key: &str,
        default: impl FnOnce() -> String,
    ) -> Option<String> {
        match map.get(key) {
            Some(value) => self.string(value, &join_path(parent, key)),
            None => Some(default()),
        }
    }

    /// Convert an arbitrary subtree into a [`ConfigValue`].
    fn value(&mut self, value: &Value, path: &str) -> Option<ConfigValue> {
        match value {
            Value::Null => Some(ConfigValue::Null),
            Value::Bool(b) => Some(ConfigValue::Bool(*b)),
            Value::Number(n) => Some(number(n)),
            Value::String(s) => Some(ConfigValue::String(s.clone())),
            Value::Sequence(items) => {
                let mut converted = Vec::with_capacity(items.len());
                let mut ok = true;
                for (idx, item) in items.iter().enumerate() {
                    match self.value(item, &format!("{path}[{idx}]")) {
                        Some(item) => converted.push(item),
                        None => ok = false,
                    }
                }
                ok.then_some(ConfigValue::Sequence(converted))
            }
            Value::Mapping(map) => self.open_mapping(map, path).map(ConfigValue::Mapping),
            Value::Tagged(_) => {
                self.mismatch(path, "untagged value", value);
                None
            }
        }
    }

    /// Open-ended mapping: string keys, values of any shape.
    fn open_mapping(&mut self, map: &Mapping, path: &str) -> Option<ConfigMap> {
        let mut converted = ConfigMap::new();
        let mut ok = true;
        for (key, value) in map {
            let Value::String(key) = key else {
                self.report(
                    path,
                    ViolationKind::NonStringKey {
                        key: render_key(key),
                    },
                );
                ok = false;
                continue;
            };
            match self.value(value, &join_path(path, key)) {
                Some(value) => {
                    converted.insert(key.clone(), value);
                }
                None => ok = false,
            }
        }
        ok.then_some(converted)
    }

    fn section(&mut self, map: &Mapping, parent: &str, key: &str) -> Option<ConfigMap> {
        let value = self.required(map, parent, key)?;
        let path = join_path(parent, key);
        let section = self.expect_mapping(value, &path)?;
        self.open_mapping(section, &path)
    }

    fn data_sources(&mut self, value: &Value, path: &str) -> Option<DataSourceConfig> {
        let map = self.expect_mapping(value, path)?;

        let seismic = self.section(map, path, "seismic");
        let well_logs = self.section(map, path, "well_logs");
        let historical = self.section(map, path, "historical");
        let external_apis = self.section(map, path, "external_apis");

        Some(DataSourceConfig {
            seismic: seismic?,
            well_logs: well_logs?,
            historical: historical?,
            external_apis: external_apis?,
        })
    }

    fn model(&mut self, value: &Value, path: &str) -> Option<ModelConfig> {
        let map = self.expect_mapping(value, path)?;

        let model_path = self.required_string(map, path, "path");
        let version = self.required_string(map, path, "version");
        let confidence_threshold = match map.get("confidence_threshold") {
            Some(value) => self.float(value, &join_path(path, "confidence_threshold")),
            None => Some(default_confidence_threshold()),
        };
        let device = self.optional_string(map, path, "device", default_device);

        Some(ModelConfig {
            path: model_path?,
            version: version?,
            confidence_threshold: confidence_threshold?,
            device: device?,
        })
    }

    fn api_keys(&mut self, value: &Value, path: &str) -> Option<BTreeMap<String, String>> {
        let map = self.expect_mapping(value, path)?;

        let mut keys = BTreeMap::new();
        let mut ok = true;
        for (client, key) in map {
            let Value::String(client) = client else {
                self.report(
                    path,
                    ViolationKind::NonStringKey {
                        key: render_key(client),
                    },
                );
                ok = false;
                continue;
            };
            match self.string(key, &join_path(path, client)) {
                Some(key) => {
                    keys.insert(client.clone(), key);
                }
                None => ok = false,
            }
        }
        ok.then_some(keys)
    }

    fn api(&mut self, value: &Value, path: &str) -> Option<ApiConfig> {
        let map = self.expect_mapping(value, path)?;

        let host = self.optional_string(map, path, "host", default_host);
        let port = match map.get("port") {
            Some(value) => self.integer::<u16>(value, &join_path(path, "port"), "0..=65535"),
            None => Some(default_port()),
        };
        let workers = match map.get("workers") {
            Some(value) => {
                self.integer::<u32>(value, &join_path(path, "workers"), "non-negative integer")
            }
            None => Some(default_workers()),
        };
        let api_keys = self
            .required(map, path, "api_keys")
            .and_then(|value| self.api_keys(value, &join_path(path, "api_keys")));

        Some(ApiConfig {
            host: host?,
            port: port?,
            workers: workers?,
            api_keys: api_keys?,
        })
    }

    fn system(&mut self, document: &Value) -> Option<SystemConfig> {
        let map = self.expect_mapping(document, ROOT_PATH)?;

        let data_sources = self
            .required(map, "", "data_sources")
            .and_then(|value| self.data_sources(value, "data_sources"));
        let seismic_agent = self
            .required(map, "", "seismic_agent")
            .and_then(|value| self.model(value, "seismic_agent"));
        let drilling_agent = self
            .required(map, "", "drilling_agent")
            .and_then(|value| self.model(value, "drilling_agent"));
        let api = self
            .required(map, "", "api")
            .and_then(|value| self.api(value, "api"));
        let enable_feedback_loop = match map.get("enable_feedback_loop") {
            Some(value) => self.boolean(value, "enable_feedback_loop"),
            None => Some(default_enable_feedback_loop()),
        };

        Some(SystemConfig {
            data_sources: data_sources?,
            seismic_agent: seismic_agent?,
            drilling_agent: drilling_agent?,
            api: api?,
            enable_feedback_loop: enable_feedback_loop?,
        })
    }
}

fn number(n: &Number) -> ConfigValue {
    if let Some(i) = n.as_i64() {
        ConfigValue::Integer(i)
    } else if let Some(u) = n.as_u64() {
        ConfigValue::Unsigned(u)
    } else {
        ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}
