//! Suggestion and analysis entry points used by the HTTP layer.

use std::sync::Arc;

use tracing::Instrument;

use crate::ai::prompts::suggestions::SUGGESTION_PROMPT_NAME;
use crate::ai::prompts::{render_suggestion_prompt, SUGGESTION_SYSTEM_PROMPT};
use crate::ai::{parse_ai_response, refine_suggestions, AiClient, ChatMessage, ChatRequest};
use crate::duplicates::find_duplicates;
use crate::risk::{risk_score, RiskWeights};
use crate::store::DataSet;
use crate::suggest;
use crate::types::{
    Analysis, DuplicateMatch, FieldSuggestions, MaterialEntry, SuggestionContext, SuggestionField,
};
use crate::validate::{validate_entry, MaterialCodeFormat};

const AI_TEMPERATURE: f32 = 0.1;
const AI_MAX_TOKENS: u32 = 100;

/// Local scoring, optionally refined by a model.
#[derive(Clone, Default)]
pub struct SuggestionEngine {
    ai: Option<Arc<dyn AiClient>>,
    code_format: MaterialCodeFormat,
    weights: RiskWeights,
}

impl SuggestionEngine {
    pub fn new(ai: Option<Arc<dyn AiClient>>) -> Self {
        Self {
            ai,
            ..Default::default()
        }
    }

    pub fn with_code_format(mut self, code_format: MaterialCodeFormat) -> Self {
        self.code_format = code_format;
        self
    }

    pub fn with_risk_weights(mut self, weights: RiskWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn code_format(&self) -> MaterialCodeFormat {
        self.code_format
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai.is_some()
    }

    /// Suggestions for one field.
    ///
    /// Model failures are logged and never surface; the local suggestions
    /// are returned instead.
    pub async fn suggest(
        &self,
        field: SuggestionField,
        context: &SuggestionContext,
        data: &DataSet,
    ) -> Vec<String> {
        let local = suggest::suggest(field, context, data);
        self.refine(field, context, local).await
    }

    async fn refine(
        &self,
        field: SuggestionField,
        context: &SuggestionContext,
        local: Vec<String>,
    ) -> Vec<String> {
        let Some(ai) = &self.ai else {
            return local;
        };
        let Some(prompt) = render_suggestion_prompt(field, context) else {
            return local;
        };

        let request = ChatRequest {
            messages: vec![
                ChatMessage::system(SUGGESTION_SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ],
            max_tokens: Some(AI_MAX_TOKENS),
            temperature: Some(AI_TEMPERATURE),
        };

        let span = tracing::info_span!(
            "ai.complete",
            prompt_name = SUGGESTION_PROMPT_NAME,
            field = field.as_str()
        );
        match ai
            .complete(SUGGESTION_PROMPT_NAME, request)
            .instrument(span)
            .await
        {
            Ok(response) => {
                refine_suggestions(parse_ai_response(&response.content, field), &local)
            }
            Err(e) => {
                tracing::warn!(
                    field = field.as_str(),
                    error = %e,
                    "AI suggestion failed, using local suggestions"
                );
                local
            }
        }
    }

    async fn suggest_for_entry(
        &self,
        field: SuggestionField,
        context: &SuggestionContext,
        data: &DataSet,
    ) -> Vec<String> {
        let local = suggest::suggest_with_code_hint(field, context, data);
        self.refine(field, context, local).await
    }

    /// Suggestions for every analyzed field, computed concurrently.
    ///
    /// Material types here also weigh the material code prefix.
    pub async fn suggest_all(&self, context: &SuggestionContext, data: &DataSet) -> FieldSuggestions {
        let (base_unit_of_measure, material_type, industry_sector, material_group) = tokio::join!(
            self.suggest_for_entry(SuggestionField::BaseUnitOfMeasure, context, data),
            self.suggest_for_entry(SuggestionField::MaterialType, context, data),
            self.suggest_for_entry(SuggestionField::IndustrySector, context, data),
            self.suggest_for_entry(SuggestionField::MaterialGroup, context, data),
        );
        FieldSuggestions {
            base_unit_of_measure,
            material_type,
            industry_sector,
            material_group,
        }
    }

    async fn assess(
        &self,
        entry: &MaterialEntry,
        data: &DataSet,
        duplicates: Vec<DuplicateMatch>,
    ) -> Analysis {
        let context = entry.suggestion_context();
        let suggestions = self.suggest_all(&context, data).await;
        let validations = validate_entry(entry, &suggestions, data, self.code_format);
        let risk_score = risk_score(&validations, duplicates.len(), &self.weights);

        Analysis {
            suggestions,
            validations,
            risk_score,
            duplicates,
        }
    }

    /// Suggestions, validations and risk for one entry.
    ///
    /// Duplicate detection is a separate call; `duplicates` is always empty
    /// here and does not contribute to the risk score.
    pub async fn analyze(&self, entry: &MaterialEntry, data: &DataSet) -> Analysis {
        self.assess(entry, data, Vec::new()).await
    }

    /// Analysis of an entry about to be saved: [`analyze`](Self::analyze)
    /// plus the existing materials it resembles, each adding to the risk.
    pub async fn analyze_submission(&self, entry: &MaterialEntry, data: &DataSet) -> Analysis {
        let duplicates = self.duplicates(entry.effective_description(), data);
        self.assess(entry, data, duplicates).await
    }

    pub fn duplicates(&self, description: &str, data: &DataSet) -> Vec<DuplicateMatch> {
        find_duplicates(description, &data.materials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FakeAiClient;
    use crate::types::ValidationStatus;

    fn context(description: &str) -> SuggestionContext {
        SuggestionContext {
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_local_only() {
        let engine = SuggestionEngine::default();
        let data = DataSet::mock();
        let types = engine
            .suggest(SuggestionField::MaterialType, &context("cement"), &data)
            .await;
        assert_eq!(types, vec!["ZCHM", "ZCEM"]);
    }

    #[tokio::test]
    async fn test_ai_reorders_within_local() {
        let fake = Arc::new(FakeAiClient::with_response("material type codes", "ZCEM\nZCHM"));
        let engine = SuggestionEngine::new(Some(fake.clone()));
        let data = DataSet::mock();
        let types = engine
            .suggest(SuggestionField::MaterialType, &context("cement"), &data)
            .await;
        assert_eq!(types, vec!["ZCEM", "ZCHM"]);
        assert_eq!(fake.calls(), 1);
    }

    #[tokio::test]
    async fn test_ai_failure_falls_back() {
        let fake = Arc::new(FakeAiClient::new());
        let engine = SuggestionEngine::new(Some(fake.clone()));
        let data = DataSet::mock();
        let types = engine
            .suggest(SuggestionField::MaterialType, &context("cement"), &data)
            .await;
        assert_eq!(types, vec!["ZCHM", "ZCEM"]);
        assert_eq!(fake.calls(), 1);
    }

    #[tokio::test]
    async fn test_vendor_suggestions_skip_ai() {
        let fake = Arc::new(FakeAiClient::new().with_default_response("999999"));
        let engine = SuggestionEngine::new(Some(fake.clone()));
        let context = SuggestionContext {
            category: "CEMENT".to_string(),
            ..Default::default()
        };
        let vendors = engine
            .suggest(SuggestionField::VendorId, &context, &DataSet::mock())
            .await;
        assert_eq!(vendors, vec!["200003"]);
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn test_analyze() {
        let engine = SuggestionEngine::default().with_code_format(MaterialCodeFormat::Legacy);
        let entry = MaterialEntry {
            material_code: Some("CEM002".to_string()),
            description: Some("Portland cement 50kg".to_string()),
            material_type: Some("ZDRL".to_string()),
            ..Default::default()
        };
        let analysis = engine.analyze(&entry, &DataSet::mock()).await;

        assert_eq!(analysis.suggestions.material_type, vec!["ZCEM", "ZCHM"]);
        assert!(analysis.duplicates.is_empty());
        let warnings: Vec<&str> = analysis
            .validations
            .iter()
            .filter(|v| v.status == ValidationStatus::Warning)
            .map(|v| v.field.as_str())
            .collect();
        assert_eq!(warnings, vec!["materialType"]);
        assert_eq!(analysis.risk_score, 15);
    }

    #[tokio::test]
    async fn test_submission_counts_duplicates() {
        let engine = SuggestionEngine::default();
        let entry = MaterialEntry {
            material_code: Some("CEM00100".to_string()),
            description: Some("Portland Cement 50kg".to_string()),
            ..Default::default()
        };
        let data = DataSet::mock();

        let analysis = engine.analyze(&entry, &data).await;
        assert!(analysis.duplicates.is_empty());
        assert_eq!(analysis.risk_score, 0);

        let submission = engine.analyze_submission(&entry, &data).await;
        assert_eq!(submission.duplicates.len(), 1);
        assert_eq!(submission.duplicates[0].material.id, "3");
        assert_eq!(submission.risk_score, 20);
        assert_eq!(submission.validations, analysis.validations);
    }
}
