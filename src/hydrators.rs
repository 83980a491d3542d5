//! # Hydrators
//!
//! A hydrator turns the raw text of a filter value or cursor into a typed
//! [`Value`] before the Sea-ORM converter embeds it in an expression. They are
//! keyed by **logical** field name, before any field mapping.
//!
//! ```rust
//! use crudcriteria::hydrators::{self, Hydrators};
//!
//! let hydrators = Hydrators::new()
//!     .with("createdAt", hydrators::naive_datetime)
//!     .with("userId", hydrators::uuid);
//!
//! assert!(hydrators.hydrate("createdAt", "2021-01-01 00:00:00").is_ok());
//! assert!(hydrators.hydrate("createdAt", "yesterday").is_err());
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use sea_orm::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::errors::{CriteriaError, HydrationError};

type HydratorFn = dyn Fn(&str) -> Result<Value, HydrationError> + Send + Sync;

/// Logical field name -> conversion function.
#[derive(Clone, Default)]
pub struct Hydrators(HashMap<String, Arc<HydratorFn>>);

impl Hydrators {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with<F>(mut self, field: impl Into<String>, hydrator: F) -> Self
    where
        F: Fn(&str) -> Result<Value, HydrationError> + Send + Sync + 'static,
    {
        self.0.insert(field.into(), Arc::new(hydrator));
        self
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Convert `raw` with the hydrator registered for `field`, or keep it as a
    /// string when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::Hydration`] when the hydrator rejects `raw`.
    pub fn hydrate(&self, field: &str, raw: &str) -> Result<Value, CriteriaError> {
        let Some(hydrator) = self.0.get(field) else {
            return Ok(Value::from(raw.to_string()));
        };

        hydrator(raw).map_err(|source| {
            tracing::debug!(field = %field, value = %raw, error = %source, "Hydrator rejected value");
            CriteriaError::Hydration {
                field: field.to_string(),
                value: raw.to_string(),
                source,
            }
        })
    }
}

impl fmt::Debug for Hydrators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<_> = self.0.keys().collect();
        fields.sort();
        f.debug_tuple("Hydrators").field(&fields).finish()
    }
}

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// `2021-01-01 00:00:00`, optionally with fractional seconds or a `T` separator.
///
/// # Errors
///
/// Fails when `raw` matches none of the accepted formats.
pub fn naive_datetime(raw: &str) -> Result<Value, HydrationError> {
    let mut last_error = None;
    for format in NAIVE_DATETIME_FORMATS {
        match NaiveDateTime::parse_from_str(raw.trim(), format) {
            Ok(parsed) => return Ok(Value::from(parsed)),
            Err(e) => last_error = Some(e),
        }
    }
    Err(last_error.map_or_else(|| "unparseable date-time".into(), Into::into))
}

/// RFC 3339 timestamp, normalised to UTC.
///
/// # Errors
///
/// Fails when `raw` is not RFC 3339.
pub fn datetime_utc(raw: &str) -> Result<Value, HydrationError> {
    let parsed = DateTime::parse_from_rfc3339(raw.trim())?;
    Ok(Value::from(parsed.with_timezone(&Utc)))
}

/// # Errors
///
/// Fails when `raw` is not a UUID.
pub fn uuid(raw: &str) -> Result<Value, HydrationError> {
    Ok(Value::from(uuid::Uuid::parse_str(raw.trim())?))
}

/// # Errors
///
/// Fails when `raw` is not a base-10 `i64`.
pub fn integer(raw: &str) -> Result<Value, HydrationError> {
    Ok(Value::from(raw.trim().parse::<i64>()?))
}

/// Accepts `true`/`false` and `1`/`0`.
///
/// # Errors
///
/// Fails on anything else.
pub fn boolean(raw: &str) -> Result<Value, HydrationError> {
    match raw.trim() {
        "true" | "1" => Ok(Value::from(true)),
        "false" | "0" => Ok(Value::from(false)),
        other => Err(format!("'{other}' is not a boolean").into()),
    }
}
