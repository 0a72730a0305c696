//! Fixed-shape result records returned by the classifier.
//!
//! Every field is always populated: either from the upstream answer or from
//! the default documented on the field.

use serde::{Deserialize, Serialize};

/// Status literals the model is asked to produce, plus the two fallback statuses.
pub mod status {
    pub const HALAL: &str = "Halal";
    pub const HARAM: &str = "Haram";
    pub const QUESTIONABLE: &str = "Questionable";
    /// Upstream answer was not a JSON object, or omitted `status`.
    pub const UNKNOWN: &str = "Unknown";
    /// Request failed at the HTTP or transport level.
    pub const ERROR: &str = "Error";
}

/// Verdict for a single ingredient or food item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The ingredient or food name that was queried.
    pub subject: String,
    /// Free-form status; defaults to `"Unknown"`.
    pub status: String,
    /// Defaults to `"No explanation provided"`.
    pub explanation: String,
    /// Free-form confidence; defaults to `"Low"`.
    pub confidence: String,
    /// Defaults to an empty list.
    pub concerns: Vec<String>,
}

impl ClassificationResult {
    pub fn is_halal(&self) -> bool {
        self.status.eq_ignore_ascii_case(status::HALAL)
    }

    pub fn is_haram(&self) -> bool {
        self.status.eq_ignore_ascii_case(status::HARAM)
    }

    pub fn is_questionable(&self) -> bool {
        self.status.eq_ignore_ascii_case(status::QUESTIONABLE)
    }

    /// Whether this result came from a failed request rather than a verdict.
    pub fn is_error(&self) -> bool {
        self.status == status::ERROR
    }
}

/// Extended verdict carrying guidance on top of the basic classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedClassification {
    #[serde(flatten)]
    pub classification: ClassificationResult,
    /// Defaults to an empty list.
    pub recommendations: Vec<String>,
    /// Defaults to `true`.
    pub certification_required: bool,
    /// Defaults to an empty list.
    pub alternatives: Vec<String>,
}

/// Halal certification status of a branded product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationResult {
    pub brand: String,
    pub product: String,
    /// Defaults to `false`.
    pub has_certification: bool,
    /// Defaults to `"Unknown"`.
    pub certifying_body: String,
    /// Defaults to `"Low"`.
    pub reliability: String,
    /// Falls back to the upstream explanation, then `"No details available"`.
    pub details: String,
}

/// Result of checking a specific certificate number with its issuing body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateVerification {
    pub certificate_number: String,
    pub certifying_body: String,
    /// Defaults to `false`.
    pub is_valid: bool,
    /// Defaults to `"Unknown"`.
    pub status: String,
    /// Defaults to `"Unknown"`.
    pub issued_to: String,
    /// Defaults to `"Unknown"`.
    pub expiry_date: String,
    /// Falls back to the upstream explanation, then `"No details available"`.
    pub details: String,
}

/// Halal status of a restaurant at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantResult {
    pub restaurant: String,
    pub location: String,
    /// Defaults to `false`.
    pub is_halal: bool,
    /// Defaults to `"Unknown"`.
    pub certification_body: String,
    /// Defaults to `"Unknown"`.
    pub last_verified: String,
    /// Falls back to the upstream explanation, then `"No information available"`.
    pub notes: String,
}

/// Aggregate verdict over a recipe's ingredients, computed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeAnalysis {
    pub recipe: String,
    pub overall_status: String,
    pub safe_ingredients: Vec<String>,
    pub questionable_ingredients: Vec<String>,
    pub haram_ingredients: Vec<String>,
    pub total_ingredients: usize,
    /// `100 * safe / total`, or 0 for an empty recipe.
    pub halal_percentage: f64,
}

impl RecipeAnalysis {
    /// Assemble an analysis from already-partitioned ingredient lists.
    pub fn from_partitions(
        recipe: impl Into<String>,
        total_ingredients: usize,
        safe_ingredients: Vec<String>,
        questionable_ingredients: Vec<String>,
        haram_ingredients: Vec<String>,
    ) -> Self {
        let overall_status = if !haram_ingredients.is_empty() {
            status::HARAM
        } else if !questionable_ingredients.is_empty() {
            status::QUESTIONABLE
        } else {
            status::HALAL
        };
        let halal_percentage = if total_ingredients == 0 {
            0.0
        } else {
            100.0 * safe_ingredients.len() as f64 / total_ingredients as f64
        };
        Self {
            recipe: recipe.into(),
            overall_status: overall_status.to_string(),
            safe_ingredients,
            questionable_ingredients,
            haram_ingredients,
            total_ingredients,
            halal_percentage,
        }
    }
}

/// What kind of item a batch contains; selects the prompt used per item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[default]
    Ingredient,
    FoodItem,
}

impl std::str::FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ingredient" => Ok(ItemKind::Ingredient),
            "food" | "food_item" => Ok(ItemKind::FoodItem),
            _ => Err(format!("Unknown item kind: {}", s)),
        }
    }
}
