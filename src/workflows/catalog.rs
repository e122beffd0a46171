use crate::workflows::loans::{InMemoryProductRepository, LoanType, Product, ProductId};
use crate::workflows::loans::domain::{lenient_count, lenient_decimal};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnsupportedFormat(PathBuf),
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read product catalog: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogImportError::Json(err) => write!(f, "invalid catalog JSON data: {}", err),
            CatalogImportError::UnsupportedFormat(path) => write!(
                f,
                "unsupported catalog format for {} (expected .csv or .json)",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::Json(err) => Some(err),
            CatalogImportError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for CatalogImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Spreadsheet export of the products table. Every cell may be blank.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    bank: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "empty_string_as_none")]
    loan_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    rate_apr: Option<f64>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    min_income: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    min_credit_score: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    tenure_min_months: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    tenure_max_months: Option<u32>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    processing_fee_pct: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    prepayment_allowed: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    disbursal_speed: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    docs_level: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    summary: Option<String>,
}

impl CatalogRow {
    fn into_product(self) -> Option<Product> {
        let id = self.id?;
        Some(Product {
            id: ProductId(id),
            name: self.name,
            bank: self.bank,
            loan_type: self.loan_type.map(LoanType::from),
            rate_apr: self.rate_apr,
            min_income: self.min_income,
            min_credit_score: self.min_credit_score,
            tenure_min_months: self.tenure_min_months,
            tenure_max_months: self.tenure_max_months,
            processing_fee_pct: self.processing_fee_pct,
            prepayment_allowed: self
                .prepayment_allowed
                .as_deref()
                .map(parse_truthy)
                .unwrap_or(false),
            disbursal_speed: self.disbursal_speed,
            docs_level: self.docs_level,
            summary: self.summary,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "t" | "yes" | "y" | "1"
    )
}

pub struct CatalogImporter;

impl CatalogImporter {
    /// Load a catalog file, choosing the parser from its extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Product>, CatalogImportError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let products = match extension.as_deref() {
            Some("csv") => Self::from_csv_reader(std::fs::File::open(path)?)?,
            Some("json") => Self::from_json_reader(std::fs::File::open(path)?)?,
            _ => return Err(CatalogImportError::UnsupportedFormat(path.to_path_buf())),
        };

        info!(path = %path.display(), products = products.len(), "product catalog loaded");
        Ok(products)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<Product>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut products = Vec::new();
        for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            let row = record?;
            match row.into_product() {
                Some(product) => products.push(product),
                // header is line 1
                None => warn!(line = index + 2, "catalog row without id skipped"),
            }
        }

        Ok(products)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<Product>, CatalogImportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Repository over the configured catalog file, or the built-in sample.
    pub fn repository(path: Option<&Path>) -> Result<InMemoryProductRepository, CatalogImportError> {
        match path {
            Some(path) => Self::from_path(path).map(InMemoryProductRepository::new),
            None => {
                info!("no catalog configured; serving sample products");
                Ok(InMemoryProductRepository::sample())
            }
        }
    }
}
