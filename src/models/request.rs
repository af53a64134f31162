// GraphQL request body sent to Contentful
// Author: kelexine (https://github.com/kelexine)

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// GraphQL variables keyed by name.
///
/// A `BTreeMap` keeps serialization order stable, which cache keys rely on.
pub type Variables = BTreeMap<String, Value>;

/// A GraphQL query plus its variables, serialized verbatim as the POST body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentfulRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: Variables,
}

impl ContentfulRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Variables::new(),
        }
    }

    /// Set a single variable from anything that converts into a JSON value.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Set a single variable from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns `ContentfulError::Json` if `value` cannot be represented as JSON.
    pub fn try_with_variable<T: Serialize + ?Sized>(
        mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<Self> {
        self.variables.insert(name.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Replace all variables at once.
    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }
}
