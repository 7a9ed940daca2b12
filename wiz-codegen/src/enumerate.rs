//! Option-space enumeration.
//!
//! A [`Blueprint`] lists, for every option key, the values worth testing.
//! Its alternatives are the full Cartesian product, produced lazily in
//! odometer order (the last key varies fastest). Blueprints joined with
//! [`Blueprint::or`] yield the records of each product in turn.

use std::collections::VecDeque;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// The values one option key ranges over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Domain {
    /// Literal values, in the order they are tried.
    Values(Vec<Value>),
    /// A nested blueprint, expanded to the list of its own records.
    Nested(Blueprint),
}

/// Mapping from option key to its domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blueprint {
    domains: IndexMap<String, Domain>,
    #[serde(skip)]
    alternates: Vec<Blueprint>,
}

impl Blueprint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key ranging over literal values.
    pub fn values<I, V>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.domains.insert(key.to_string(), Domain::Values(values));
        self
    }

    /// Add a key ranging over `[true, false]`.
    pub fn toggle(self, key: &str) -> Self {
        self.values(key, [true, false])
    }

    pub fn nested(mut self, key: &str, blueprint: Blueprint) -> Self {
        self.domains
            .insert(key.to_string(), Domain::Nested(blueprint));
        self
    }

    /// Union with `other`: every record of `self`, then every record of
    /// `other`. The two need not share keys.
    pub fn or(mut self, other: Blueprint) -> Self {
        self.alternates.push(other);
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(String::as_str)
    }

    /// Number of records the blueprint expands to.
    pub fn count(&self) -> usize {
        let own: usize = self
            .domains
            .values()
            .map(|domain| match domain {
                Domain::Values(values) => values.len(),
                Domain::Nested(blueprint) => blueprint.count(),
            })
            .product();
        own + self.alternates.iter().map(Blueprint::count).sum::<usize>()
    }

    /// Iterate over every combination of option values.
    pub fn alternatives(&self) -> Alternatives {
        let mut parts = VecDeque::from([self.product()]);
        for alternate in &self.alternates {
            parts.extend(alternate.alternatives().parts);
        }
        Alternatives { parts }
    }

    fn product(&self) -> Product {
        let domains: Vec<(String, Vec<Value>)> = self
            .domains
            .iter()
            .map(|(key, domain)| {
                let values = match domain {
                    Domain::Values(values) => values.clone(),
                    Domain::Nested(blueprint) => blueprint.alternatives().collect(),
                };
                (key.clone(), values)
            })
            .collect();
        let remaining = domains.iter().map(|(_, values)| values.len()).product();

        Product {
            indices: vec![0; domains.len()],
            domains,
            remaining,
        }
    }

    /// Iterate over every combination, deserialized into typed options.
    pub fn records<T: DeserializeOwned>(&self) -> impl Iterator<Item = serde_json::Result<T>> {
        self.alternatives().map(serde_json::from_value)
    }
}

/// Lazy iterator over a blueprint's records.
#[derive(Debug, Clone)]
pub struct Alternatives {
    parts: VecDeque<Product>,
}

impl Iterator for Alternatives {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        while let Some(part) = self.parts.front_mut() {
            if let Some(record) = part.next() {
                return Some(record);
            }
            self.parts.pop_front();
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.parts.iter().map(|part| part.remaining).sum();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Alternatives {}

/// Cartesian product over one blueprint's domains.
#[derive(Debug, Clone)]
struct Product {
    domains: Vec<(String, Vec<Value>)>,
    indices: Vec<usize>,
    remaining: usize,
}

impl Product {
    fn next(&mut self) -> Option<Value> {
        if self.remaining == 0 {
            return None;
        }

        let record: Map<String, Value> = self
            .domains
            .iter()
            .zip(&self.indices)
            .map(|((key, values), &i)| (key.clone(), values[i].clone()))
            .collect();
        self.remaining -= 1;

        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.domains[pos].1.len() {
                break;
            }
            self.indices[pos] = 0;
        }

        Some(Value::Object(record))
    }
}
