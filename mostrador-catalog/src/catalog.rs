use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::{CatalogError, Product};

/// The full, unfiltered product list loaded at start-up.
///
/// Storage is shared and immutable; cloning a catalog never copies products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode the `productos.json` payload: a JSON array of product objects.
    pub fn from_json_slice(payload: &[u8]) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_slice(payload)?;
        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.products.iter())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_from_json_keeps_order() {
        let payload = br#"[
            {"Codigo": "200", "EAN Unidad": "2", "Articulo_descripcion": "B", "Proveedor": "P", "Rubro": "R"},
            {"Codigo": "100", "EAN Unidad": "1", "Articulo_descripcion": "A", "Proveedor": "P", "Rubro": "R"}
        ]"#;
        let catalog = Catalog::from_json_slice(payload).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].code, "200");
        assert_eq!(catalog.products()[1].code, "100");
    }

    #[test]
    fn test_non_array_payload_is_malformed() {
        let result = Catalog::from_json_slice(br#"{"Codigo": "1"}"#);
        assert!(matches!(result, Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn test_clone_shares_storage() {
        let catalog = Catalog::new(vec![Product::new("1", "", "", "", "")]);
        let copy = catalog.clone();
        assert!(std::ptr::eq(catalog.products().as_ptr(), copy.products().as_ptr()));
    }

    #[test]
    fn test_serializes_as_array() {
        let catalog = Catalog::new(vec![Product::new("1", "2", "d", "s", "c")]);
        let value = serde_json::to_value(&catalog).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["Codigo"], "1");
    }
}
