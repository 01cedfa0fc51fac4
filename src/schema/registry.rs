//! Shape Registry - name-keyed catalogue of declared record shapes

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::RecordShape;
use crate::collection::RecordCollection;
use crate::{Error, Result};

/// Declaration of one record shape, as found in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeDecl {
    /// Shape name
    pub name: String,
    /// Name of the parent shape, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Attributes added by this shape
    #[serde(default)]
    pub attributes: Vec<String>,
}

/// Catalogue of record shapes, looked up by name.
///
/// Parents are resolved by name at declaration time, so a parent must be
/// declared before its children.
///
/// ## Example
///
/// ```rust
/// use recordbook::schema::ShapeRegistry;
///
/// let registry = ShapeRegistry::from_json(r#"[
///     {"name": "PhoneEntry", "attributes": ["name", "phone"]},
///     {"name": "PhoneEntryExt", "parent": "PhoneEntry", "attributes": ["email"]}
/// ]"#)?;
///
/// let shape = registry.shape("PhoneEntryExt")?;
/// assert_eq!(shape.schema().names(), ["name", "phone", "email"]);
/// # Ok::<(), recordbook::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    shapes: HashMap<String, Arc<RecordShape>>,
    order: Vec<String>,
}

impl ShapeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from declarations, applied in order.
    ///
    /// # Errors
    ///
    /// Fails on the first declaration that [`declare`](Self::declare) rejects.
    pub fn from_decls<I>(decls: I) -> Result<Self>
    where
        I: IntoIterator<Item = ShapeDecl>,
    {
        let mut registry = Self::new();
        for decl in decls {
            registry.declare(&decl.name, decl.parent.as_deref(), decl.attributes)?;
        }
        Ok(registry)
    }

    /// Build a registry from a JSON array of [`ShapeDecl`].
    ///
    /// # Errors
    ///
    /// Returns `Config` for malformed JSON, otherwise as [`from_decls`](Self::from_decls).
    pub fn from_json(json: &str) -> Result<Self> {
        let decls: Vec<ShapeDecl> = serde_json::from_str(json)?;
        Self::from_decls(decls)
    }

    /// Declare a shape, inheriting from the registered shape named `parent`.
    ///
    /// # Errors
    ///
    /// - `DuplicateShape` if `name` is already registered
    /// - `UnknownShape` if `parent` is not registered
    /// - `RedeclaredAttribute` if an attribute repeats
    pub fn declare<I, S>(
        &mut self,
        name: &str,
        parent: Option<&str>,
        attributes: I,
    ) -> Result<Arc<RecordShape>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.shapes.contains_key(name) {
            return Err(Error::DuplicateShape(name.to_string()));
        }

        let shape = match parent {
            Some(parent) => RecordShape::extend(&self.shape(parent)?, name, attributes)?,
            None => RecordShape::root(name, attributes)?,
        };

        self.shapes.insert(name.to_string(), Arc::clone(&shape));
        self.order.push(name.to_string());
        Ok(shape)
    }

    /// Get a shape by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<RecordShape>> {
        self.shapes.get(name).cloned()
    }

    /// Get a shape by name, failing with `UnknownShape` when absent.
    ///
    /// # Errors
    ///
    /// Returns `UnknownShape` if `name` is not registered.
    pub fn shape(&self, name: &str) -> Result<Arc<RecordShape>> {
        self.get(name)
            .ok_or_else(|| Error::UnknownShape(name.to_string()))
    }

    /// Create an empty collection bound to the shape named `name`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownShape` if `name` is not registered.
    pub fn collection(&self, name: &str) -> Result<RecordCollection> {
        Ok(RecordCollection::new(self.shape(name)?))
    }

    /// Number of registered shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if no shape is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shape names in declaration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.order
    }
}
