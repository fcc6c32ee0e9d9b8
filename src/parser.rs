//! Row → [`InventoryItem`] conversion. Pure; called concurrently by every worker.

use crate::InventoryItem;
use crate::error::ParseError;
use crate::utils::config::PipelineConsts;

/// Column positions in the source file.
struct Col;

impl Col {
    const ID: usize = 0;
    const SKU: usize = 1;
    const PRODUCT_NAME: usize = 2;
    const CATEGORY: usize = 3;
    const STOCK: usize = 4;
    const PRICE: usize = 5;
    const LAST_UPDATED: usize = 6;
}

fn parse_int(
    fields: &[impl AsRef<str>],
    idx: usize,
    field: &'static str,
) -> Result<i64, ParseError> {
    let value = fields[idx].as_ref();
    value.parse::<i64>().map_err(|source| ParseError::InvalidInteger {
        field,
        value: value.to_string(),
        source,
    })
}

fn parse_float(
    fields: &[impl AsRef<str>],
    idx: usize,
    field: &'static str,
) -> Result<f64, ParseError> {
    let value = fields[idx].as_ref();
    value.parse::<f64>().map_err(|source| ParseError::InvalidFloat {
        field,
        value: value.to_string(),
        source,
    })
}

/// Parse one raw row. Needs at least 7 fields; extra fields are ignored.
/// Strings are taken verbatim (no trimming), so `" 5"` is not a valid stock.
pub fn parse_record<S: AsRef<str>>(fields: &[S]) -> Result<InventoryItem, ParseError> {
    if fields.len() < PipelineConsts::MIN_FIELDS {
        return Err(ParseError::InsufficientFields {
            found: fields.len(),
        });
    }

    let id = parse_int(fields, Col::ID, "id")?;
    let stock = parse_int(fields, Col::STOCK, "stock")?;
    let price = parse_float(fields, Col::PRICE, "price")?;

    Ok(InventoryItem {
        id,
        sku: fields[Col::SKU].as_ref().to_string(),
        product_name: fields[Col::PRODUCT_NAME].as_ref().to_string(),
        category: fields[Col::CATEGORY].as_ref().to_string(),
        stock,
        price,
        last_updated: fields[Col::LAST_UPDATED].as_ref().to_string(),
    })
}
