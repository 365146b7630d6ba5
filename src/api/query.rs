//! Query string assembly for service endpoints.

use std::collections::BTreeMap;

/// Ordered query parameters.
///
/// Keys are emitted in lexical order and values keep insertion order, so the
/// same arguments always produce the same endpoint string.
#[derive(Debug, Default, Clone)]
pub struct Query {
    params: BTreeMap<String, Vec<String>>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value for `key`.
    pub fn add(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.params
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
        self
    }

    /// Append a value only if it is present.
    pub fn add_opt<T: ToString>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.add(key, value);
        }
        self
    }

    /// Append a string value unless it is empty.
    pub fn add_non_empty(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.add(key, value);
        }
        self
    }

    /// Repeat `key` once per value (`id=1&id=2`).
    pub fn add_each<T: ToString>(&mut self, key: &str, values: &[T]) -> &mut Self {
        for value in values {
            self.add(key, value.to_string());
        }
        self
    }

    /// Join values with commas into a single parameter (`expand=a,b`).
    pub fn add_joined<T: AsRef<str>>(&mut self, key: &str, values: &[T]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(|v| v.as_ref())
                .collect::<Vec<_>>()
                .join(",");
            self.add(key, joined);
        }
        self
    }

    /// Append a boolean only when it is `true`.
    pub fn add_flag(&mut self, key: &str, value: bool) -> &mut Self {
        if value {
            self.add(key, true);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Percent-encode the parameters.
    pub fn encode(&self) -> String {
        self.params
            .iter()
            .flat_map(|(key, values)| {
                values.iter().map(move |value| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                })
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Attach the encoded parameters to `path`.
    pub fn append_to(&self, path: String) -> String {
        if self.is_empty() {
            path
        } else {
            format!("{}?{}", path, self.encode())
        }
    }
}
