use crate::batch::{BatchExecutor, BatchStrategy};
use crate::client::builder::HalalDetectorBuilder;
use crate::prompts::{self, ResponseSchema};
use crate::response::{extract_alternatives, UpstreamFields};
use crate::transport::Transport;
use crate::types::{
    status, CertificateVerification, CertificationResult, ClassificationResult,
    DetailedClassification, ItemKind, RestaurantResult,
};
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

const NO_EXPLANATION: &str = "No explanation provided";
const NO_DETAILS: &str = "No details available";
const NO_INFORMATION: &str = "No information available";
const UNKNOWN: &str = "Unknown";
const LOW: &str = "Low";

/// Client that classifies foods by asking a hosted language model.
///
/// Every operation returns a fully populated record. Request failures and
/// unparseable answers come back as records with status `Error` or `Unknown`
/// instead of as errors.
pub struct HalalDetector {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) endpoint: String,
    pub(crate) model: String,
    pub(crate) api_key: Option<String>,
    pub(crate) timeout: Duration,
    pub(crate) batch: BatchExecutor,
}

impl HalalDetector {
    /// Client for the default endpoint. `api_key` is stored but never sent.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let mut builder = HalalDetectorBuilder::new();
        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }
        builder.build()
    }

    pub fn builder() -> HalalDetectorBuilder {
        HalalDetectorBuilder::new()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn batch_strategy(&self) -> BatchStrategy {
        self.batch.strategy()
    }

    /// Classify a single ingredient.
    pub async fn detect_ingredient(&self, ingredient: &str) -> ClassificationResult {
        self.classify(ingredient, &prompts::ingredient(ingredient), None)
            .await
    }

    /// Classify an ingredient with caller-supplied context (school of thought,
    /// region, manufacturer notes) placed ahead of the prompt.
    pub async fn detect_ingredient_with_context(
        &self,
        ingredient: &str,
        context: &str,
    ) -> ClassificationResult {
        self.classify(ingredient, &prompts::ingredient(ingredient), Some(context))
            .await
    }

    /// Classify a prepared dish or food item.
    pub async fn detect_food_item(&self, food_name: &str) -> ClassificationResult {
        self.classify(food_name, &prompts::food_item(food_name), None)
            .await
    }

    /// Classify a packaged product from the ingredient list printed on its label.
    pub async fn analyze_product_label(
        &self,
        product: &str,
        label_text: &str,
    ) -> ClassificationResult {
        let context = prompts::label_context(label_text);
        self.classify(product, &prompts::product_label(product), Some(&context))
            .await
    }

    /// Classify a food additive by E-number or INS code.
    pub async fn check_e_number(&self, code: &str) -> ClassificationResult {
        self.classify(code, &prompts::e_number(code), None).await
    }

    /// Classify an ingredient with recommendations and alternatives.
    pub async fn analyze_ingredient_detailed(&self, ingredient: &str) -> DetailedClassification {
        let fields = self
            .generate(
                &prompts::ingredient_detailed(ingredient),
                None,
                ResponseSchema::Extended,
            )
            .await
            .fields(ResponseSchema::Extended);
        DetailedClassification {
            recommendations: fields.recommendations.clone().unwrap_or_default(),
            certification_required: fields.certification_required.unwrap_or(true),
            alternatives: fields.alternatives.clone().unwrap_or_default(),
            classification: classification(ingredient, fields),
        }
    }

    /// Classify every item, one request per item. Output order matches input order.
    pub async fn batch_detect(
        &self,
        items: &[impl AsRef<str>],
        kind: ItemKind,
    ) -> Vec<ClassificationResult> {
        let items: Vec<String> = items.iter().map(|i| i.as_ref().to_string()).collect();
        self.batch
            .execute(items, |item| async move {
                match kind {
                    ItemKind::Ingredient => self.detect_ingredient(&item).await,
                    ItemKind::FoodItem => self.detect_food_item(&item).await,
                }
            })
            .await
    }

    /// Up to five halal alternatives for a haram or questionable item.
    pub async fn halal_alternatives(&self, item: &str) -> Vec<String> {
        let fields = self
            .generate(&prompts::alternatives(item), None, ResponseSchema::Basic)
            .await
            .fields(ResponseSchema::Basic);
        extract_alternatives(&fields)
    }

    /// Check whether a brand's product carries halal certification.
    pub async fn verify_certification(&self, brand: &str, product: &str) -> CertificationResult {
        let fields = self
            .generate(
                &prompts::certification(brand, product),
                None,
                ResponseSchema::Basic,
            )
            .await
            .fields(ResponseSchema::Basic);
        CertificationResult {
            brand: brand.to_string(),
            product: product.to_string(),
            has_certification: fields.has_certification.unwrap_or(false),
            certifying_body: fields.certifying_body.unwrap_or_else(|| UNKNOWN.to_string()),
            reliability: fields.reliability.unwrap_or_else(|| LOW.to_string()),
            details: fields
                .details
                .or(fields.explanation)
                .unwrap_or_else(|| NO_DETAILS.to_string()),
        }
    }

    /// Check a specific certificate number against its issuing body.
    pub async fn verify_certificate_number(
        &self,
        certificate_number: &str,
        certifying_body: &str,
    ) -> CertificateVerification {
        let fields = self
            .generate(
                &prompts::certificate_number(certificate_number, certifying_body),
                None,
                ResponseSchema::Basic,
            )
            .await
            .fields(ResponseSchema::Basic);
        CertificateVerification {
            certificate_number: certificate_number.to_string(),
            certifying_body: certifying_body.to_string(),
            is_valid: fields.is_valid.unwrap_or(false),
            status: fields.status.unwrap_or_else(|| UNKNOWN.to_string()),
            issued_to: fields.issued_to.unwrap_or_else(|| UNKNOWN.to_string()),
            expiry_date: fields.expiry_date.unwrap_or_else(|| UNKNOWN.to_string()),
            details: fields
                .details
                .or(fields.explanation)
                .unwrap_or_else(|| NO_DETAILS.to_string()),
        }
    }

    /// Check whether a restaurant at a location serves halal food.
    pub async fn check_restaurant(&self, name: &str, location: &str) -> RestaurantResult {
        let fields = self
            .generate(&prompts::restaurant(name, location), None, ResponseSchema::Basic)
            .await
            .fields(ResponseSchema::Basic);
        RestaurantResult {
            restaurant: name.to_string(),
            location: location.to_string(),
            is_halal: fields.is_halal.unwrap_or(false),
            certification_body: fields
                .certification_body
                .unwrap_or_else(|| UNKNOWN.to_string()),
            last_verified: fields.last_verified.unwrap_or_else(|| UNKNOWN.to_string()),
            notes: fields
                .notes
                .or(fields.explanation)
                .unwrap_or_else(|| NO_INFORMATION.to_string()),
        }
    }

    async fn classify(
        &self,
        subject: &str,
        prompt: &str,
        context: Option<&str>,
    ) -> ClassificationResult {
        let fields = self
            .generate(prompt, context, ResponseSchema::Basic)
            .await
            .fields(ResponseSchema::Basic);
        classification(subject, fields)
    }
}

impl std::fmt::Debug for HalalDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HalalDetector")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("batch", &self.batch.strategy())
            .finish()
    }
}

fn classification(subject: &str, fields: UpstreamFields) -> ClassificationResult {
    ClassificationResult {
        subject: subject.to_string(),
        status: fields.status.unwrap_or_else(|| status::UNKNOWN.to_string()),
        explanation: fields
            .explanation
            .unwrap_or_else(|| NO_EXPLANATION.to_string()),
        confidence: fields.confidence.unwrap_or_else(|| LOW.to_string()),
        concerns: fields.concerns.unwrap_or_default(),
    }
}
