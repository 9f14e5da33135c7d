use mostrador_catalog::Product;
use mostrador_core::{ResultSet, SearchQuery};

pub const TITLE: &str = "Resultados de Búsqueda";

/// Everything an export needs, frozen at the moment the user asks for it:
/// the products on display plus the form fields printed next to each one.
#[derive(Debug, Clone)]
pub struct ExportSheet<'a> {
    products: &'a [Product],
    code_filter: &'a str,
    base: &'a str,
    entry_date: String,
    expiry_date: String,
}

impl<'a> ExportSheet<'a> {
    pub fn new(results: &'a ResultSet, query: &'a SearchQuery) -> crate::ExportResult<Self> {
        Ok(Self {
            products: results.products(),
            code_filter: &query.code_filter,
            base: &query.base,
            entry_date: query.formatted_entry_date()?,
            expiry_date: query.formatted_expiry_date()?,
        })
    }

    pub fn products(&self) -> &[Product] {
        self.products
    }

    /// `productos_<code>_<DD/MM/YYYY>.pdf`, as offered to the browser
    pub fn file_name(&self) -> String {
        format!("productos_{}_{}.pdf", self.code_filter, self.entry_date)
    }

    /// [`Self::file_name`] made safe for a single path component
    pub fn disk_file_name(&self) -> String {
        self.file_name()
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' => '-',
                c if c.is_control() => '-',
                c => c,
            })
            .collect()
    }

    /// One block of labelled lines per product, in display order.
    pub fn blocks(&self) -> Vec<Vec<String>> {
        self.products
            .iter()
            .enumerate()
            .map(|(index, product)| self.block(index, product))
            .collect()
    }

    fn block(&self, index: usize, product: &Product) -> Vec<String> {
        vec![
            format!("Producto {}:", index + 1),
            format!("Código: {}", product.code),
            format!("Descripción: {}", product.description),
            format!("EAN: {}", product.ean_unit),
            format!("Proveedor: {}", product.supplier),
            format!("Rubro: {}", product.category),
            format!("Base: {}", self.base),
            format!("Fecha de Ingreso: {}", self.entry_date),
            format!("Fecha de Vencimiento: {}", self.expiry_date),
        ]
    }
}
