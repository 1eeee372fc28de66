// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Key extraction: how a record becomes the string we sort and match on.
//!
//! Callers describe keys with [`Selector`]: the record itself, a named
//! field, or an arbitrary closure. Resolution happens once, at construction,
//! and yields a flat list of closures. Nothing downstream ever looks at the
//! selector variant again.
//!
//! Missing data never fails. A field that isn't there, or an identity
//! selector over a record with no text, produces `""`. The empty key sorts
//! first and only the empty prefix matches it.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Text access for records fed to identity and field selectors.
///
/// Both methods default to "absent", so a type that is only ever matched
/// through [`Selector::Custom`] can opt in with an empty `impl`.
pub trait Record {
    /// The record as a whole, used by [`Selector::Identity`].
    fn text(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// A named scalar member, used by [`Selector::Field`].
    fn field(&self, _name: &str) -> Option<Cow<'_, str>> {
        None
    }
}

impl Record for str {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Record for String {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl Record for Cow<'_, str> {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_ref()))
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn text(&self) -> Option<Cow<'_, str>> {
        (**self).text()
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn text(&self) -> Option<Cow<'_, str>> {
        (**self).text()
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Rc<R> {
    fn text(&self) -> Option<Cow<'_, str>> {
        (**self).text()
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Arc<R> {
    fn text(&self) -> Option<Cow<'_, str>> {
        (**self).text()
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}

impl Record for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl Record for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

/// JSON records: strings are their own text, object members are fields.
///
/// Numbers and booleans are rendered the way `to_string` prints them.
/// Arrays, objects and null have no text.
impl Record for serde_json::Value {
    fn text(&self) -> Option<Cow<'_, str>> {
        scalar_text(self)
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).and_then(scalar_text)
    }
}

fn scalar_text(value: &serde_json::Value) -> Option<Cow<'_, str>> {
    match value {
        serde_json::Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        serde_json::Value::Number(n) => Some(Cow::Owned(n.to_string())),
        serde_json::Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

/// A caller-supplied key function.
pub type KeyFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// How to derive a comparison key from a record.
pub enum Selector<T> {
    /// The record's own text ([`Record::text`]).
    Identity,
    /// A named field ([`Record::field`]). An empty name means identity.
    Field(String),
    /// Any pure function of the record.
    Custom(KeyFn<T>),
}

impl<T> Selector<T> {
    pub fn field(name: impl Into<String>) -> Self {
        Selector::Field(name.into())
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Selector::Custom(Arc::new(f))
    }
}

impl<T> Clone for Selector<T> {
    fn clone(&self) -> Self {
        match self {
            Selector::Identity => Selector::Identity,
            Selector::Field(name) => Selector::Field(name.clone()),
            Selector::Custom(f) => Selector::Custom(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Identity => write!(f, "Identity"),
            Selector::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Selector::Custom(_) => write!(f, "Custom(<fn>)"),
        }
    }
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::Identity
    }
}

impl<T> From<&str> for Selector<T> {
    fn from(name: &str) -> Self {
        Selector::Field(name.to_string())
    }
}

impl<T> From<String> for Selector<T> {
    fn from(name: String) -> Self {
        Selector::Field(name)
    }
}

/// Fold a comparison key or query prefix for case-insensitive matching.
///
/// Keys and prefixes must go through the same function or prefix tests
/// silently disagree on non-ASCII input.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Resolve configured selectors into key-extraction closures.
///
/// An empty slice resolves to a single identity selector. Order is
/// preserved: it decides the order in which index lists are consulted.
/// Case folding is not applied here; the index builder folds the keys.
pub fn resolve_selectors<T: Record>(selectors: &[Selector<T>]) -> Vec<KeyFn<T>> {
    if selectors.is_empty() {
        return vec![resolve_one(&Selector::Identity)];
    }

    selectors.iter().map(resolve_one).collect()
}

fn resolve_one<T: Record>(selector: &Selector<T>) -> KeyFn<T> {
    match selector {
        Selector::Custom(f) => Arc::clone(f),
        Selector::Field(name) if !name.is_empty() => {
            let name = name.clone();
            Arc::new(move |record: &T| {
                record
                    .field(&name)
                    .map(Cow::into_owned)
                    .unwrap_or_default()
            })
        }
        Selector::Field(_) | Selector::Identity => {
            Arc::new(|record: &T| record.text().map(Cow::into_owned).unwrap_or_default())
        }
    }
}
