//! Material handles carried through intersection results.

use std::fmt;

/// Surface description attached to a primitive.
///
/// The intersection core never interprets a material. It only passes the
/// reference of whichever primitive was hit on to the shading stage.
pub trait Material: Send + Sync + fmt::Debug {
    /// Name used in log output.
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// A material that carries nothing but a name.
///
/// Enough for visibility queries and tests, where only the identity of the
/// surface that was hit matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged {
    name: String,
}

impl Tagged {
    /// Create a new tagged material.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Material for Tagged {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Identity comparison of two material references.
///
/// Compares addresses only, ignoring vtables.
#[inline]
pub fn same_material(a: &dyn Material, b: &dyn Material) -> bool {
    std::ptr::addr_eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_tagged_name() {
        assert_eq!(Tagged::new("ground").name(), "ground");
    }

    #[test]
    fn test_same_material_is_identity_not_equality() {
        let a: Arc<dyn Material> = Arc::new(Tagged::new("glass"));
        let b: Arc<dyn Material> = Arc::new(Tagged::new("glass"));
        let a2 = Arc::clone(&a);

        assert!(same_material(a.as_ref(), a2.as_ref()));
        assert!(!same_material(a.as_ref(), b.as_ref()));
    }
}
