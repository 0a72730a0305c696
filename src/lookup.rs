//! Fixed tables consulted without a network call.

use crate::types::status;

/// Meats treated as halal without asking the model.
pub const HALAL_MEAT_TYPES: [&str; 8] = [
    "beef", "lamb", "goat", "chicken", "turkey", "duck", "fish", "seafood",
];

/// Meats treated as haram without asking the model.
pub const HARAM_MEAT_TYPES: [&str; 6] = ["pork", "bacon", "ham", "sausage", "pepperoni", "salami"];

/// Verdict from the static meat tables, or `None` when the term is in neither.
pub fn known_meat_verdict(meat_type: &str) -> Option<bool> {
    let meat = meat_type.to_lowercase();
    if HARAM_MEAT_TYPES.contains(&meat.as_str()) {
        Some(false)
    } else if HALAL_MEAT_TYPES.contains(&meat.as_str()) {
        Some(true)
    } else {
        None
    }
}

/// Numeric score for a status: Halal 100, Questionable 50, Haram 0, anything else -1.
///
/// The status is lowercased before comparison.
pub fn status_score(value: &str) -> i32 {
    let lowered = value.to_lowercase();
    if lowered == status::HALAL.to_lowercase() {
        100
    } else if lowered == status::QUESTIONABLE.to_lowercase() {
        50
    } else if lowered == status::HARAM.to_lowercase() {
        0
    } else {
        -1
    }
}
