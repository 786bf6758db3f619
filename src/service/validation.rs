//! Write-body validation: shape a raw JSON body into a `NewProduct` or report
//! every offending field.

use crate::error::{AppError, FieldError};
use crate::model::NewProduct;
use serde_json::Value;

/// Validate a create/update body. Required fields: `name` and `description`
/// (strings), `price` (number; a numeric string parses). Unknown fields are
/// ignored. No defaulting and no cross-field rules.
pub fn validate_product_input(body: &Value) -> Result<NewProduct, AppError> {
    let obj = match body.as_object() {
        Some(obj) => obj,
        None => {
            return Err(AppError::Validation(vec![FieldError::new(
                "body",
                "must be a JSON object",
            )]))
        }
    };

    let mut errors = Vec::new();

    let name = match obj.get("name") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new("name", "must be a string"));
            None
        }
        None => {
            errors.push(FieldError::new("name", "field required"));
            None
        }
    };

    let price = match obj.get("price") {
        Some(v) => match parse_price(v) {
            Some(p) => Some(p),
            None => {
                errors.push(FieldError::new("price", "must be a number"));
                None
            }
        },
        None => {
            errors.push(FieldError::new("price", "field required"));
            None
        }
    };

    let description = match obj.get("description") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new("description", "must be a string"));
            None
        }
        None => {
            errors.push(FieldError::new("description", "field required"));
            None
        }
    };

    match (name, price, description) {
        (Some(name), Some(price), Some(description)) => Ok(NewProduct {
            name,
            price,
            description,
        }),
        _ => Err(AppError::Validation(errors)),
    }
}

fn parse_price(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
