use crate::client::core::HalalDetector;
use crate::lookup::{known_meat_verdict, status_score};
use crate::types::{ClassificationResult, ItemKind, RecipeAnalysis};

impl HalalDetector {
    /// Whether the ingredient's status is `Halal`, ignoring case.
    pub async fn is_halal(&self, ingredient: &str) -> bool {
        self.detect_ingredient(ingredient).await.is_halal()
    }

    /// Whether the ingredient's status is `Haram`, ignoring case.
    pub async fn is_haram(&self, ingredient: &str) -> bool {
        self.detect_ingredient(ingredient).await.is_haram()
    }

    /// Whether the ingredient's status is `Questionable`, ignoring case.
    pub async fn is_questionable(&self, ingredient: &str) -> bool {
        self.detect_ingredient(ingredient).await.is_questionable()
    }

    /// Classify an ingredient and map its status through [`status_score`].
    pub async fn halal_score(&self, ingredient: &str) -> i32 {
        status_score(&self.detect_ingredient(ingredient).await.status)
    }

    /// Ingredients classified haram, in input order.
    pub async fn haram_ingredients(&self, ingredients: &[impl AsRef<str>]) -> Vec<String> {
        self.filter_ingredients(ingredients, ClassificationResult::is_haram)
            .await
    }

    /// Ingredients classified questionable, in input order.
    pub async fn questionable_ingredients(&self, ingredients: &[impl AsRef<str>]) -> Vec<String> {
        self.filter_ingredients(ingredients, ClassificationResult::is_questionable)
            .await
    }

    /// Ingredients classified halal, in input order.
    pub async fn safe_ingredients(&self, ingredients: &[impl AsRef<str>]) -> Vec<String> {
        self.filter_ingredients(ingredients, ClassificationResult::is_halal)
            .await
    }

    /// Aggregate verdict for a recipe.
    ///
    /// Each filter classifies the full list on its own, so every ingredient is
    /// requested three times.
    pub async fn analyze_recipe(
        &self,
        recipe: &str,
        ingredients: &[impl AsRef<str>],
    ) -> RecipeAnalysis {
        let haram = self.haram_ingredients(ingredients).await;
        let questionable = self.questionable_ingredients(ingredients).await;
        let safe = self.safe_ingredients(ingredients).await;
        RecipeAnalysis::from_partitions(recipe, ingredients.len(), safe, questionable, haram)
    }

    /// Whether a meat type is halal. Listed meats are answered from the static
    /// tables; anything else costs one classification.
    pub async fn check_meat_type(&self, meat_type: &str) -> bool {
        match known_meat_verdict(meat_type) {
            Some(verdict) => verdict,
            None => self.is_halal(meat_type).await,
        }
    }

    async fn filter_ingredients(
        &self,
        ingredients: &[impl AsRef<str>],
        keep: fn(&ClassificationResult) -> bool,
    ) -> Vec<String> {
        self.batch_detect(ingredients, ItemKind::Ingredient)
            .await
            .into_iter()
            .filter(|result| keep(result))
            .map(|result| result.subject)
            .collect()
    }
}
