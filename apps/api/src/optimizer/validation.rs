//! Request validation: turns loosely-typed input into a [`Problem`].
//!
//! Every field is optional at the serde level so that a missing field is
//! reported as `InvalidInput` with a precise location instead of a generic
//! deserialization failure. Nothing here touches the search.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::optimizer::error::OptimizeError;
use crate::optimizer::models::{Problem, Product, SheetSize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: Option<String>,
    pub area: Option<f64>,
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub products: Option<Vec<ProductInput>>,
    pub sheet_sizes: Option<Vec<f64>>,
}

/// Validates a request. The first violation wins.
pub fn validate_request(request: OptimizeRequest) -> Result<Problem, OptimizeError> {
    let inputs = request
        .products
        .ok_or_else(|| invalid("products is required"))?;
    let sheet_sizes = request
        .sheet_sizes
        .ok_or_else(|| invalid("sheet_sizes is required"))?;
    if inputs.is_empty() {
        return Err(invalid("products cannot be empty"));
    }
    if sheet_sizes.is_empty() {
        return Err(invalid("sheet_sizes cannot be empty"));
    }

    let products = inputs
        .into_iter()
        .enumerate()
        .map(|(i, input)| convert_product(i, input))
        .collect::<Result<Vec<_>, _>>()?;

    build_problem(products, &sheet_sizes)
}

/// Checks typed products and raw sheet areas and assembles a [`Problem`].
///
/// Rejects empty lists, blank or duplicate names, non-positive or non-finite
/// areas, and non-positive or non-finite sheet sizes.
pub fn build_problem(products: Vec<Product>, sheet_sizes: &[f64]) -> Result<Problem, OptimizeError> {
    if products.is_empty() {
        return Err(invalid("products cannot be empty"));
    }
    if sheet_sizes.is_empty() {
        return Err(invalid("sheet_sizes cannot be empty"));
    }

    check_products(&products)?;

    let sheet_sizes = sheet_sizes
        .iter()
        .enumerate()
        .map(|(i, &area)| {
            SheetSize::new(area).ok_or_else(|| {
                invalid(format!(
                    "sheet_sizes[{i}] must be a positive finite number, got {area}"
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Problem {
        products,
        sheet_sizes,
    })
}

fn check_products(products: &[Product]) -> Result<(), OptimizeError> {
    let mut seen = HashSet::with_capacity(products.len());
    for (i, product) in products.iter().enumerate() {
        if product.name.trim().is_empty() {
            return Err(invalid(format!("products[{i}].name is required")));
        }
        if !product.area.is_finite() || product.area <= 0.0 {
            return Err(invalid(format!(
                "products[{i}].area must be positive, got {}",
                product.area
            )));
        }
        if !seen.insert(product.name.as_str()) {
            return Err(invalid(format!(
                "products[{i}].name '{}' is duplicated",
                product.name
            )));
        }
    }
    Ok(())
}

/// Presence checks and the quantity sign check. Value checks live in `build_problem`.
fn convert_product(index: usize, input: ProductInput) -> Result<Product, OptimizeError> {
    let name = input
        .name
        .ok_or_else(|| invalid(format!("products[{index}].name is required")))?;
    let area = input
        .area
        .ok_or_else(|| invalid(format!("products[{index}].area is required")))?;
    let quantity = input
        .quantity
        .ok_or_else(|| invalid(format!("products[{index}].quantity is required")))?;
    let quantity = u64::try_from(quantity).map_err(|_| {
        invalid(format!(
            "products[{index}].quantity must be non-negative, got {quantity}"
        ))
    })?;

    Ok(Product::new(name, area, quantity))
}

fn invalid(detail: impl Into<String>) -> OptimizeError {
    OptimizeError::InvalidInput(detail.into())
}
