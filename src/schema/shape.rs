//! Record Shape - a named, incremental attribute declaration

use std::collections::HashSet;
use std::sync::Arc;

use super::AttributeSchema;
use crate::{Error, Result};

/// Record Shape declares the attributes a record type adds on top of its parent.
///
/// The full [`AttributeSchema`] is computed once, when the shape is declared,
/// by appending the shape's own attributes to the parent's schema. Shapes are
/// immutable afterwards and shared through `Arc`, so every record of a shape
/// sees the same schema for the lifetime of the process.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordShape {
    name: String,
    parent: Option<Arc<RecordShape>>,
    own_attributes: Vec<String>,
    schema: AttributeSchema,
}

impl RecordShape {
    /// Declare a shape with no parent.
    ///
    /// # Errors
    ///
    /// Returns `RedeclaredAttribute` if `attributes` lists a name twice.
    pub fn root<I, S>(name: impl Into<String>, attributes: I) -> Result<Arc<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::declare(name.into(), None, attributes)
    }

    /// Declare a shape inheriting every attribute of `parent`.
    ///
    /// # Errors
    ///
    /// Returns `RedeclaredAttribute` if one of `attributes` is already in the
    /// parent's schema or is listed twice.
    pub fn extend<I, S>(
        parent: &Arc<Self>,
        name: impl Into<String>,
        attributes: I,
    ) -> Result<Arc<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::declare(name.into(), Some(Arc::clone(parent)), attributes)
    }

    fn declare<I, S>(name: String, parent: Option<Arc<Self>>, attributes: I) -> Result<Arc<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let own_attributes: Vec<String> = attributes.into_iter().map(Into::into).collect();

        let mut schema = parent
            .as_ref()
            .map_or_else(AttributeSchema::new, |p| p.schema.clone());
        let mut seen: HashSet<&str> = schema.iter().collect();

        for attribute in &own_attributes {
            if !seen.insert(attribute.as_str()) {
                return Err(Error::RedeclaredAttribute {
                    shape: name,
                    name: attribute.clone(),
                });
            }
        }
        drop(seen);

        for attribute in &own_attributes {
            schema.push(attribute.clone());
        }

        tracing::debug!(shape = %name, schema = %schema, "declared record shape");

        Ok(Arc::new(Self {
            name,
            parent,
            own_attributes,
            schema,
        }))
    }

    /// Get the shape name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the parent shape, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&Arc<Self>> {
        self.parent.as_ref()
    }

    /// Attributes declared by this shape itself, excluding inherited ones.
    #[must_use]
    pub fn own_attributes(&self) -> &[String] {
        &self.own_attributes
    }

    /// Full attribute schema, inherited attributes first.
    #[must_use]
    pub const fn schema(&self) -> &AttributeSchema {
        &self.schema
    }

    /// Shape names from the most general ancestor down to this shape.
    #[must_use]
    pub fn ancestry(&self) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut current = Some(self);
        while let Some(shape) = current {
            chain.push(shape.name());
            current = shape.parent.as_deref();
        }
        chain.reverse();
        chain
    }
}
