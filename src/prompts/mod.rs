//! Prompt builders.
//!
//! Every public classification operation renders its instruction here. The
//! builders are pure string formatting: inputs are interpolated as given, with
//! no validation or escaping.

/// JSON shape requested from the model, which also selects the fallback shape
/// used when the answer cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseSchema {
    /// status, explanation, confidence, concerns
    #[default]
    Basic,
    /// Basic plus recommendations, certification_required, alternatives
    Extended,
}

impl ResponseSchema {
    /// System message: scholar persona plus the required JSON fields.
    pub fn persona(&self) -> &'static str {
        match self {
            ResponseSchema::Basic => BASIC_PERSONA,
            ResponseSchema::Extended => EXTENDED_PERSONA,
        }
    }
}

const BASIC_PERSONA: &str = "You are an Islamic scholar expert in halal and haram food classification. \
Always respond with valid JSON containing: status (Halal/Haram/Questionable), \
explanation (string), confidence (High/Medium/Low), and concerns (array of strings).";

const EXTENDED_PERSONA: &str = "You are an Islamic scholar expert in halal and haram food classification. \
Always respond with valid JSON containing: status (Halal/Haram/Questionable), \
explanation (string), confidence (High/Medium/Low), concerns (array of strings), \
recommendations (array of strings), certification_required (boolean), \
and alternatives (array of strings).";

const VERDICT_SHAPE: &str = "{'status': 'Halal/Haram/Questionable', 'explanation': 'detailed explanation', \
'confidence': 'High/Medium/Low', 'concerns': ['list of concerns']}";

pub fn ingredient(ingredient: &str) -> String {
    format!(
        "Analyze this ingredient for halal/haram status: '{}'. \
         Consider its source (animal, plant, synthetic), the processing method, \
         and the risk of cross-contamination. Respond with JSON: {}",
        ingredient, VERDICT_SHAPE
    )
}

pub fn food_item(food_name: &str) -> String {
    format!(
        "Analyze this food item for halal/haram status: '{}'. \
         Consider all typical ingredients and preparation methods. Respond with JSON: {}",
        food_name, VERDICT_SHAPE
    )
}

pub fn ingredient_detailed(ingredient: &str) -> String {
    format!(
        "Give a detailed halal/haram analysis of this ingredient: '{}'. \
         Consider its source, processing method, cross-contamination risk, and \
         differences of opinion between schools of thought. Respond with JSON: \
         {{'status': 'Halal/Haram/Questionable', 'explanation': 'detailed explanation', \
         'confidence': 'High/Medium/Low', 'concerns': ['list of concerns'], \
         'recommendations': ['what the consumer should do'], \
         'certification_required': true/false, 'alternatives': ['halal substitutes']}}",
        ingredient
    )
}

pub fn product_label(product: &str) -> String {
    format!(
        "Using the label information above, analyze the packaged product '{}' for \
         halal/haram status. Flag any ingredient whose source is not stated. \
         Respond with JSON: {}",
        product, VERDICT_SHAPE
    )
}

/// Context block carrying the printed ingredient list for [`product_label`].
pub fn label_context(label_text: &str) -> String {
    format!("Ingredient list printed on the label: {}", label_text)
}

pub fn e_number(code: &str) -> String {
    format!(
        "Analyze the food additive '{}' (E-number or INS code) for halal/haram status. \
         Consider whether it can be derived from animal sources, alcohol, or insects. \
         Respond with JSON: {}",
        code, VERDICT_SHAPE
    )
}

pub fn alternatives(item: &str) -> String {
    format!(
        "Provide 3-5 halal alternatives for this haram/questionable item: '{}'. \
         Respond with JSON: {{'alternatives': ['alternative1', 'alternative2', \
         'alternative3', 'alternative4', 'alternative5']}}",
        item
    )
}

pub fn certification(brand: &str, product: &str) -> String {
    format!(
        "Check if '{}' brand's '{}' has halal certification. \
         Respond with JSON: {{'has_certification': true/false, 'certifying_body': 'body name', \
         'reliability': 'High/Medium/Low', 'details': 'detailed information'}}",
        brand, product
    )
}

pub fn certificate_number(certificate_number: &str, certifying_body: &str) -> String {
    format!(
        "Verify halal certificate number '{}' issued by '{}'. \
         Respond with JSON: {{'is_valid': true/false, 'status': 'Active/Expired/Revoked/Unknown', \
         'issued_to': 'company name', 'expiry_date': 'date', 'details': 'detailed information'}}",
        certificate_number, certifying_body
    )
}

pub fn restaurant(name: &str, location: &str) -> String {
    format!(
        "Check whether the restaurant '{}' in '{}' is halal. \
         Respond with JSON: {{'is_halal': true/false, 'certification_body': 'body name', \
         'last_verified': 'date', 'notes': 'additional information'}}",
        name, location
    )
}
