//! The exchange schema artifact and its process-wide instance.

use serde_json::Value;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

use crate::{REQUEST_KEY, RESPONSE_KEY, SchemaLoadError, SchemaViolation};

/// Built-in schema, shipped with this crate.
const BUILTIN_SCHEMA: &str = include_str!("../schemas/llm-exchange.schema.json");

static SCHEMA: OnceLock<ExchangeSchema> = OnceLock::new();

/// A compiled exchange schema.
///
/// The raw document is only exposed by shared reference, so a loaded schema
/// cannot be altered through any handle this type gives out.
pub struct ExchangeSchema {
    document: Value,
    validator: jsonschema::Validator,
}

impl std::fmt::Debug for ExchangeSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeSchema")
            .field("id", &self.id())
            .field("version", &self.version())
            .finish()
    }
}

impl ExchangeSchema {
    /// Compile the schema embedded in this crate.
    pub fn builtin() -> Result<Self, SchemaLoadError> {
        let document: Value = serde_json::from_str(BUILTIN_SCHEMA)
            .map_err(|e| SchemaLoadError::Parse(e.to_string()))?;
        Self::from_value(document)
    }

    /// Read and compile a schema file.
    pub fn from_path(path: &Path) -> Result<Self, SchemaLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| SchemaLoadError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let document: Value =
            serde_json::from_str(&content).map_err(|e| SchemaLoadError::Parse(e.to_string()))?;
        Self::from_value(document)
    }

    /// Compile a schema document.
    pub fn from_value(document: Value) -> Result<Self, SchemaLoadError> {
        let validator = jsonschema::validator_for(&document)
            .map_err(|e| SchemaLoadError::Compile(e.to_string()))?;
        Ok(Self {
            document,
            validator,
        })
    }

    /// The raw schema document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// The schema's `$id`, if it declares one.
    pub fn id(&self) -> Option<&str> {
        self.document.get("$id").and_then(Value::as_str)
    }

    /// The schema's declared `version`, if any.
    pub fn version(&self) -> Option<&str> {
        self.document.get("version").and_then(Value::as_str)
    }

    /// Structural check against the schema, then the `request` key rule.
    pub fn validate_request(&self, data: &Value) -> Result<(), SchemaViolation> {
        self.check(data)?;
        require_key(data, REQUEST_KEY)
    }

    /// Structural check against the schema, then the `response` key rule.
    pub fn validate_response(&self, data: &Value) -> Result<(), SchemaViolation> {
        self.check(data)?;
        require_key(data, RESPONSE_KEY)
    }

    /// Report the first structural violation, if any. Never coerces `data`.
    fn check(&self, data: &Value) -> Result<(), SchemaViolation> {
        self.validator
            .validate(data)
            .map_err(|e| SchemaViolation::Schema(e.to_string()))
    }
}

fn require_key(data: &Value, key: &'static str) -> Result<(), SchemaViolation> {
    match data.as_object() {
        Some(obj) if obj.contains_key(key) => Ok(()),
        _ => Err(SchemaViolation::MissingKey(key)),
    }
}

/// Replace the built-in schema with one read from `path`.
///
/// Must be called before the first validation; once the process-wide schema
/// exists it is never replaced.
pub fn init_from_path(path: &Path) -> Result<&'static ExchangeSchema, SchemaLoadError> {
    let loaded = ExchangeSchema::from_path(path)?;
    SCHEMA
        .set(loaded)
        .map_err(|_| SchemaLoadError::AlreadyInitialized)?;
    info!(path = %path.display(), "Exchange schema loaded");
    schema()
}

/// The process-wide schema, compiling the built-in one on first use.
pub fn schema() -> Result<&'static ExchangeSchema, SchemaLoadError> {
    if let Some(existing) = SCHEMA.get() {
        return Ok(existing);
    }
    let built = ExchangeSchema::builtin()?;
    debug!(version = ?built.version(), "Built-in exchange schema compiled");
    Ok(SCHEMA.get_or_init(move || built))
}
