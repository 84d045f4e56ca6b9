//! Form validation and price coercion.

use crate::error::ApiError;
use crate::types::{FormInput, NewItem};

/// Reject the form when any field is the empty string.
///
/// Fields are not trimmed: a value of only spaces counts as filled in.
pub fn validate(input: &FormInput) -> Result<(), ApiError> {
    if input.id.is_empty() || input.name.is_empty() || input.price.is_empty() {
        return Err(ApiError::Validation);
    }
    Ok(())
}

/// Validate the form and coerce the price text into the create payload.
pub fn to_new_item(input: &FormInput) -> Result<NewItem, ApiError> {
    validate(input)?;
    let price: f64 = input
        .price
        .trim()
        .parse()
        .map_err(|_| ApiError::InvalidPrice(input.price.clone()))?;
    // JSON has no encoding for NaN or infinities.
    if !price.is_finite() {
        return Err(ApiError::InvalidPrice(input.price.clone()));
    }
    Ok(NewItem {
        id: input.id.clone(),
        name: input.name.clone(),
        price,
    })
}
