//! FeaturePipeline -- collect, prompt, complete, (image), persist.
//!
//! One generic run over a [`FeatureDefinition`]. Presence of every required
//! field is checked before anything else; an invalid input makes no
//! generator or store calls. Once validated, the run always reaches `Done`:
//! completion and image failures are already downgraded by their clients,
//! and a failed append is reported as a diagnostic next to the result.

use thiserror::Error;
use tracing::{debug, error, info};

use dineai_types::error::PromptError;
use dineai_types::form::FormInput;
use dineai_types::generation::{CompletionText, GeneratedImage, ImageOutcome};
use dineai_types::record::PersistedRecord;

use crate::llm::{CompletionClient, ImageClient, ImageGenerator, TextGenerator};
use crate::prompt::PromptBuilder;
use crate::repository::RecordStore;

use super::definition::{FeatureDefinition, FeatureId};

/// Shown when required fields are missing.
pub const INPUT_INVALID_MESSAGE: &str =
    "Please fill in all fields before generating a recommendation.";

/// Dependencies shared by every pipeline run.
///
/// Constructed once at startup and passed by reference; the pipeline holds
/// no handles of its own.
pub struct PipelineServices<'a, T, I, S> {
    pub prompts: &'a PromptBuilder,
    pub completion: &'a CompletionClient<T>,
    pub images: &'a ImageClient<I>,
    pub records: &'a S,
}

/// Where a pipeline currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    AwaitingInput,
    InputInvalid,
    RequestingCompletion,
    Done,
}

/// What happened to the record for a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    Appended { collection: String },
    NotConfigured,
    Failed { collection: String, reason: String },
}

/// Everything a completed run produced.
#[derive(Debug)]
pub struct FeatureResult {
    pub feature: FeatureId,
    pub prompt: String,
    pub completion: CompletionText,
    pub image: Option<GeneratedImage>,
    pub persistence: Persistence,
    /// Non-fatal messages to show next to the result.
    pub diagnostics: Vec<String>,
}

impl FeatureResult {
    /// The text to display: model output or the fallback message.
    pub fn text(&self) -> &str {
        &self.completion.text
    }
}

#[derive(Debug)]
pub enum PipelineOutcome {
    InputInvalid { missing: Vec<String>, message: String },
    Done(FeatureResult),
}

/// Misconfiguration detected while building prompts (never user error).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("prompt error: {0}")]
    Prompt(#[from] PromptError),
}

/// A single feature's pipeline.
pub struct FeaturePipeline<'f> {
    feature: &'f FeatureDefinition,
    state: PipelineState,
}

impl<'f> FeaturePipeline<'f> {
    pub fn new(feature: &'f FeatureDefinition) -> Self {
        Self {
            feature,
            state: PipelineState::AwaitingInput,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn feature(&self) -> &FeatureDefinition {
        self.feature
    }

    fn transition(&mut self, next: PipelineState) {
        debug!(feature = %self.feature.id, from = ?self.state, to = ?next, "Pipeline transition");
        self.state = next;
    }

    /// Run the pipeline once with `input`.
    ///
    /// Returns `Err` only when a template is unknown or malformed.
    pub async fn run<T, I, S>(
        &mut self,
        services: &PipelineServices<'_, T, I, S>,
        input: FormInput,
    ) -> Result<PipelineOutcome, PipelineError>
    where
        T: TextGenerator,
        I: ImageGenerator,
        S: RecordStore,
    {
        self.state = PipelineState::AwaitingInput;
        let feature = self.feature;

        let missing = input.missing_fields(feature.required_fields);
        if !missing.is_empty() {
            return Ok(self.reject(missing));
        }

        // Defaults only reach the prompt; the record keeps what was submitted.
        let mut rendered = input.clone();
        for (name, value) in feature.defaults {
            if rendered.present(name).is_none() {
                rendered.insert(*name, *value);
            }
        }

        // Required fields and defaults cover every placeholder of the builtin
        // templates, so MissingField here means a misconfigured definition.
        let prompt = match services.prompts.build(feature.template_id, &rendered) {
            Ok(prompt) => prompt,
            Err(PromptError::MissingField(field)) => return Ok(self.reject(vec![field])),
            Err(other) => return Err(other.into()),
        };
        let image_prompt = match feature.image_template_id {
            Some(template_id) => match services.prompts.build(template_id, &rendered) {
                Ok(prompt) => Some(prompt),
                Err(PromptError::MissingField(field)) => return Ok(self.reject(vec![field])),
                Err(other) => return Err(other.into()),
            },
            None => None,
        };

        self.transition(PipelineState::RequestingCompletion);
        info!(feature = %feature.id, prompt_chars = prompt.len(), "Running feature pipeline");

        let completion = services.completion.complete(&prompt).await;
        let mut diagnostics = Vec::new();

        let image = match image_prompt {
            Some(image_prompt) => match services.images.generate_image(&image_prompt).await {
                ImageOutcome::Generated(image) => Some(image),
                ImageOutcome::Unavailable { reason } => {
                    diagnostics.push(reason);
                    None
                }
            },
            None => None,
        };

        let persistence = match feature.collection {
            Some(collection) => {
                let record = PersistedRecord::new(input, completion.text.clone());
                match services.records.append(collection, &record).await {
                    Ok(()) => Persistence::Appended {
                        collection: collection.to_string(),
                    },
                    Err(err) => {
                        error!(
                            feature = %feature.id,
                            collection,
                            error = %err,
                            "Failed to persist record"
                        );
                        diagnostics.push(format!("The result could not be saved: {err}"));
                        Persistence::Failed {
                            collection: collection.to_string(),
                            reason: err.to_string(),
                        }
                    }
                }
            }
            None => Persistence::NotConfigured,
        };

        self.transition(PipelineState::Done);

        Ok(PipelineOutcome::Done(FeatureResult {
            feature: feature.id,
            prompt,
            completion,
            image,
            persistence,
            diagnostics,
        }))
    }

    fn reject(&mut self, missing: Vec<String>) -> PipelineOutcome {
        self.transition(PipelineState::InputInvalid);
        let message = format!("{INPUT_INVALID_MESSAGE} Missing: {}", missing.join(", "));
        info!(feature = %self.feature.id, missing = ?missing, "Input rejected");
        self.transition(PipelineState::AwaitingInput);
        PipelineOutcome::InputInvalid { missing, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dineai_types::error::{GenerationError, RecordStoreError};
    use dineai_types::generation::{ImageRequest, ImageResponse, TextRequest, TextResponse};
    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct EchoText {
        calls: AtomicUsize,
    }

    impl TextGenerator for EchoText {
        fn name(&self) -> &str {
            "echo"
        }

        fn generate_text(
            &self,
            _request: &TextRequest,
        ) -> impl Future<Output = Result<TextResponse, GenerationError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async {
                Ok(TextResponse {
                    text: "T".to_string(),
                    model: "echo".to_string(),
                    finish_reason: None,
                    usage: None,
                })
            }
        }
    }

    struct NoImages {
        calls: AtomicUsize,
    }

    impl ImageGenerator for NoImages {
        fn name(&self) -> &str {
            "none"
        }

        fn generate_image(
            &self,
            _request: &ImageRequest,
        ) -> impl Future<Output = Result<ImageResponse, GenerationError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async { Err(GenerationError::NoImage) }
        }
    }

    #[derive(Default)]
    struct VecStore {
        appended: Mutex<Vec<(String, PersistedRecord)>>,
        fail: bool,
    }

    impl RecordStore for VecStore {
        fn append(
            &self,
            collection: &str,
            record: &PersistedRecord,
        ) -> impl Future<Output = Result<(), RecordStoreError>> + Send {
            let result = if self.fail {
                Err(RecordStoreError::Query("database is locked".to_string()))
            } else {
                self.appended
                    .lock()
                    .unwrap()
                    .push((collection.to_string(), record.clone()));
                Ok(())
            };
            async move { result }
        }
    }

    struct Fixture {
        prompts: PromptBuilder,
        completion: CompletionClient<EchoText>,
        images: ImageClient<NoImages>,
        store: VecStore,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                prompts: PromptBuilder::builtin().unwrap(),
                completion: CompletionClient::new(
                    EchoText {
                        calls: AtomicUsize::new(0),
                    },
                    "m",
                ),
                images: ImageClient::new(
                    NoImages {
                        calls: AtomicUsize::new(0),
                    },
                    "i",
                ),
                store: VecStore::default(),
            }
        }

        fn services(&self) -> PipelineServices<'_, EchoText, NoImages, VecStore> {
            PipelineServices {
                prompts: &self.prompts,
                completion: &self.completion,
                images: &self.images,
                records: &self.store,
            }
        }
    }

    fn leftovers() -> FormInput {
        FormInput::new()
            .with("leftover_type", "Rice")
            .with("quantity", 2.5)
    }

    #[tokio::test]
    async fn test_done_state_and_record() {
        let fx = Fixture::new();
        let mut pipeline =
            FeaturePipeline::new(FeatureDefinition::get(FeatureId::LeftoverOptimization));

        let outcome = pipeline.run(&fx.services(), leftovers()).await.unwrap();
        assert_eq!(pipeline.state(), PipelineState::Done);

        let PipelineOutcome::Done(result) = outcome else {
            panic!("expected Done");
        };
        assert_eq!(result.text(), "T");
        assert!(result.prompt.contains("2.5 kg of leftover Rice"));
        assert_eq!(
            result.persistence,
            Persistence::Appended {
                collection: "leftovers".to_string()
            }
        );

        let appended = fx.store.appended.lock().unwrap();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].1, PersistedRecord::new(leftovers(), "T"));
    }

    #[tokio::test]
    async fn test_invalid_input_returns_to_awaiting() {
        let fx = Fixture::new();
        let mut pipeline =
            FeaturePipeline::new(FeatureDefinition::get(FeatureId::LeftoverOptimization));

        let input = FormInput::new().with("leftover_type", "Rice");
        let outcome = pipeline.run(&fx.services(), input).await.unwrap();

        assert_eq!(pipeline.state(), PipelineState::AwaitingInput);
        match outcome {
            PipelineOutcome::InputInvalid { missing, message } => {
                assert_eq!(missing, vec!["quantity".to_string()]);
                assert!(message.starts_with(INPUT_INVALID_MESSAGE));
                assert!(message.contains("quantity"));
            }
            PipelineOutcome::Done(_) => panic!("expected InputInvalid"),
        }
        assert_eq!(fx.completion_calls(), 0);
        assert!(fx.store.appended.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chatbot_does_not_persist() {
        let fx = Fixture::new();
        let mut pipeline = FeaturePipeline::new(FeatureDefinition::get(FeatureId::Chatbot));

        let input = FormInput::new().with("user_input", "What wine goes with risotto?");
        let PipelineOutcome::Done(result) = pipeline.run(&fx.services(), input).await.unwrap()
        else {
            panic!("expected Done");
        };

        assert_eq!(result.persistence, Persistence::NotConfigured);
        assert!(fx.store.appended.lock().unwrap().is_empty());
        assert_eq!(fx.completion_calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_image_becomes_diagnostic() {
        let fx = Fixture::new();
        let mut pipeline =
            FeaturePipeline::new(FeatureDefinition::get(FeatureId::MenuRecommendation));

        let input = FormInput::new()
            .with("meal_type", "Dinner")
            .with("dietary_pref", "Gluten-free");
        let PipelineOutcome::Done(result) = pipeline.run(&fx.services(), input).await.unwrap()
        else {
            panic!("expected Done");
        };

        assert!(result.image.is_none());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(fx.images.generator().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_persistence_failure_still_returns_result() {
        let mut fx = Fixture::new();
        fx.store.fail = true;
        let mut pipeline =
            FeaturePipeline::new(FeatureDefinition::get(FeatureId::LeftoverOptimization));

        let PipelineOutcome::Done(result) =
            pipeline.run(&fx.services(), leftovers()).await.unwrap()
        else {
            panic!("expected Done");
        };

        assert_eq!(result.text(), "T");
        assert!(matches!(result.persistence, Persistence::Failed { .. }));
        assert!(result.diagnostics[0].contains("could not be saved"));
        assert_eq!(pipeline.state(), PipelineState::Done);
    }

    #[tokio::test]
    async fn test_defaults_fill_optional_fields() {
        let fx = Fixture::new();
        let mut pipeline = FeaturePipeline::new(FeatureDefinition::get(FeatureId::EventPlan));

        let input = FormInput::new()
            .with("occasion", "Anniversary")
            .with("people", 2)
            .with("cuisine", "Veg")
            .with("budget", "$200");
        let PipelineOutcome::Done(result) = pipeline.run(&fx.services(), input).await.unwrap()
        else {
            panic!("expected Done");
        };

        assert!(result.prompt.contains("- Drinks: No preference"));
    }

    #[tokio::test]
    async fn test_defaults_are_not_persisted() {
        let fx = Fixture::new();
        let mut pipeline = FeaturePipeline::new(FeatureDefinition::get(FeatureId::EventPlan));

        let input = FormInput::new()
            .with("occasion", "Wedding")
            .with("people", 50)
            .with("cuisine", "Mixed")
            .with("budget", "$5000");
        let PipelineOutcome::Done(result) =
            pipeline.run(&fx.services(), input.clone()).await.unwrap()
        else {
            panic!("expected Done");
        };
        assert!(result.prompt.contains("- Drinks: No preference"));

        let appended = fx.store.appended.lock().unwrap();
        assert_eq!(appended[0].1, PersistedRecord::new(input, "T"));
        let doc = appended[0].1.to_document().unwrap();
        assert!(doc.get("drinks").is_none());
    }

    #[tokio::test]
    async fn test_misconfigured_template_field_is_rejected() {
        static UNCOVERED: FeatureDefinition = FeatureDefinition {
            id: FeatureId::LeftoverOptimization,
            template_id: "leftover_optimization",
            required_fields: &["leftover_type"],
            defaults: &[],
            collection: Some("leftovers"),
            image_template_id: None,
        };
        let fx = Fixture::new();
        let mut pipeline = FeaturePipeline::new(&UNCOVERED);

        let input = FormInput::new().with("leftover_type", "Rice");
        let outcome = pipeline.run(&fx.services(), input).await.unwrap();

        match outcome {
            PipelineOutcome::InputInvalid { missing, .. } => {
                assert_eq!(missing, vec!["quantity".to_string()]);
            }
            PipelineOutcome::Done(_) => panic!("expected InputInvalid"),
        }
        assert_eq!(fx.completion_calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_template_is_an_error() {
        static BROKEN: FeatureDefinition = FeatureDefinition {
            id: FeatureId::Chatbot,
            template_id: "does_not_exist",
            required_fields: &[],
            defaults: &[],
            collection: None,
            image_template_id: None,
        };
        let fx = Fixture::new();
        let mut pipeline = FeaturePipeline::new(&BROKEN);

        let result = pipeline.run(&fx.services(), FormInput::new()).await;
        assert!(matches!(
            result,
            Err(PipelineError::Prompt(PromptError::UnknownTemplate(_)))
        ));
        assert_eq!(fx.completion_calls(), 0);
    }

    impl Fixture {
        fn completion_calls(&self) -> usize {
            self.completion.generator().calls.load(Ordering::SeqCst)
        }
    }
}
