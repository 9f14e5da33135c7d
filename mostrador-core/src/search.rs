use mostrador_catalog::{Catalog, Product};
use serde::{Deserialize, Serialize};

use crate::dates::{format_date, parse_input_date};
use crate::CoreResult;

/// Nominal bounds of the `base` field as offered by the form
pub const BASE_MIN: u32 = 10;
pub const BASE_MAX: u32 = 99;

/// Transient form input. Every field is kept as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchQuery {
    pub code_filter: String,
    pub ean_filter: String,
    /// `YYYY-MM-DD` or empty
    pub entry_date: String,
    /// `YYYY-MM-DD` or empty
    pub expiry_date: String,
    pub base: String,
}

impl SearchQuery {
    pub fn by_code(code: impl Into<String>) -> Self {
        Self {
            code_filter: code.into(),
            ..Self::default()
        }
    }

    pub fn by_ean(ean: impl Into<String>) -> Self {
        Self {
            ean_filter: ean.into(),
            ..Self::default()
        }
    }

    /// Reject dates that are not real calendar dates. `base` is not checked
    /// here, see [`SearchQuery::base_in_range`].
    pub fn validate(&self) -> CoreResult<()> {
        parse_input_date(&self.entry_date)?;
        parse_input_date(&self.expiry_date)?;
        Ok(())
    }

    /// Whether `base` lies in the form's 10-99 hint. Empty counts as in range.
    pub fn base_in_range(&self) -> bool {
        let base = self.base.trim();
        if base.is_empty() {
            return true;
        }
        base.parse::<u32>()
            .map(|b| (BASE_MIN..=BASE_MAX).contains(&b))
            .unwrap_or(false)
    }

    pub fn formatted_entry_date(&self) -> CoreResult<String> {
        Ok(format_date(&self.entry_date)?)
    }

    pub fn formatted_expiry_date(&self) -> CoreResult<String> {
        Ok(format_date(&self.expiry_date)?)
    }
}

/// Products currently on display, always in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    products: Vec<Product>,
}

impl ResultSet {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            products: catalog.products().to_vec(),
        }
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

impl FromIterator<Product> for ResultSet {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

/// Case-sensitive substring match on code OR EAN. An empty filter never
/// matches, so two empty filters select nothing.
pub fn matches(product: &Product, code_filter: &str, ean_filter: &str) -> bool {
    (!code_filter.is_empty() && product.code.contains(code_filter))
        || (!ean_filter.is_empty() && product.ean_unit.contains(ean_filter))
}

pub fn filter_products(catalog: &Catalog, code_filter: &str, ean_filter: &str) -> ResultSet {
    catalog
        .iter()
        .filter(|p| matches(p, code_filter, ean_filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("100", "7791234", "Yerba mate 1kg", "Molinos", "Almacen"),
            Product::new("1001", "7790000", "Azucar 1kg", "Ledesma", "Almacen"),
            Product::new("250", "7791234999", "Lavandina", "Ayudin", "Limpieza"),
            Product::new("AB12", "123", "Servilletas", "Elite", "Bazar"),
        ])
    }

    #[test]
    fn test_code_filter_exact_match() {
        let catalog = Catalog::new(vec![Product::new("100", "7791234", "d", "s", "c")]);
        let results = filter_products(&catalog, "100", "");
        assert_eq!(results.len(), 1);

        let results = filter_products(&catalog, "999", "");
        assert!(results.is_empty());
    }

    #[test]
    fn test_code_filter_is_substring() {
        let results = filter_products(&sample_catalog(), "100", "");
        let codes: Vec<&str> = results.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["100", "1001"]);
    }

    #[test]
    fn test_ean_filter_is_substring() {
        let results = filter_products(&sample_catalog(), "", "7791234");
        let codes: Vec<&str> = results.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["100", "250"]);
    }

    #[test]
    fn test_filters_are_or_combined() {
        let results = filter_products(&sample_catalog(), "AB", "7790000");
        let codes: Vec<&str> = results.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["1001", "AB12"]);
    }

    #[test]
    fn test_empty_filters_select_nothing() {
        assert!(filter_products(&sample_catalog(), "", "").is_empty());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(filter_products(&sample_catalog(), "ab", "").is_empty());
        assert_eq!(filter_products(&sample_catalog(), "AB", "").len(), 1);
    }

    #[test]
    fn test_results_are_subset_satisfying_predicate() {
        let catalog = sample_catalog();
        for (code, ean) in [("1", ""), ("", "9"), ("0", "12"), ("zz", "zz"), ("", "")] {
            let results = filter_products(&catalog, code, ean);
            for product in results.iter() {
                assert!(catalog.products().contains(product));
                assert!(matches(product, code, ean));
            }
            let expected = catalog.iter().filter(|p| matches(p, code, ean)).count();
            assert_eq!(results.len(), expected);
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = sample_catalog();
        let before = catalog.clone();
        let first = filter_products(&catalog, "1", "123");
        let second = filter_products(&catalog, "1", "123");
        assert_eq!(first, second);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_base_range_is_advisory() {
        let mut query = SearchQuery::by_code("1");
        assert!(query.base_in_range());
        query.base = "10".into();
        assert!(query.base_in_range());
        query.base = "99".into();
        assert!(query.base_in_range());
        query.base = "9".into();
        assert!(!query.base_in_range());
        query.base = "100".into();
        assert!(!query.base_in_range());
        query.base = "abc".into();
        assert!(!query.base_in_range());
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_dates() {
        let query = SearchQuery {
            entry_date: "2024-02-30".into(),
            ..SearchQuery::default()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_query_deserializes_camel_case_with_defaults() {
        let query: SearchQuery =
            serde_json::from_str(r#"{"codeFilter": "100", "entryDate": "2024-03-05"}"#).unwrap();
        assert_eq!(query.code_filter, "100");
        assert_eq!(query.ean_filter, "");
        assert_eq!(query.formatted_entry_date().unwrap(), "05/03/2024");
    }
}
