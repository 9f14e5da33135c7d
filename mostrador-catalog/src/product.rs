use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single catalog entry as published in `productos.json`.
///
/// The export feeding the catalog is not consistent about scalar types: codes
/// and barcodes show up as strings in some rows and as JSON numbers in others.
/// Every field is normalised to its display text on the way in so matching and
/// rendering never have to care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Codigo", default, deserialize_with = "scalar_text")]
    pub code: String,

    #[serde(rename = "EAN Unidad", default, deserialize_with = "scalar_text")]
    pub ean_unit: String,

    #[serde(rename = "Articulo_descripcion", default, deserialize_with = "scalar_text")]
    pub description: String,

    #[serde(rename = "Proveedor", default, deserialize_with = "scalar_text")]
    pub supplier: String,

    #[serde(rename = "Rubro", default, deserialize_with = "scalar_text")]
    pub category: String,
}

impl Product {
    pub fn new(
        code: impl Into<String>,
        ean_unit: impl Into<String>,
        description: impl Into<String>,
        supplier: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            ean_unit: ean_unit.into(),
            description: description.into(),
            supplier: supplier.into(),
            category: category.into(),
        }
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(number_text(&n)),
        other => Err(serde::de::Error::custom(format!(
            "expected a scalar catalog value, found {}",
            other
        ))),
    }
}

/// Integral floats print without a fractional part (`1.0` -> `"1"`), matching
/// how the spreadsheet export displays them.
fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }

    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
