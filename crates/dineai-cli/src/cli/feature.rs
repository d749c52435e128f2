//! Feature commands: build the form input, run the pipeline, render.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use dineai_core::feature::{
    FeatureDefinition, FeatureId, FeaturePipeline, FeatureResult, PipelineOutcome,
};
use dineai_types::form::FormInput;
use dineai_types::generation::GeneratedImage;

use super::render::{self, OutputMode};
use super::{Cuisine, Drink, MealType};
use crate::state::AppState;

pub async fn plan_event(
    state: &AppState,
    occasion: String,
    people: u32,
    cuisine: Cuisine,
    budget: String,
    drinks: Option<Drink>,
    mode: OutputMode,
) -> Result<()> {
    let mut input = FormInput::new()
        .with("occasion", occasion)
        .with("people", people)
        .with("cuisine", cuisine.to_string())
        .with("budget", budget);
    if let Some(drinks) = drinks {
        input.insert("drinks", drinks.to_string());
    }

    run(state, FeatureId::EventPlan, input, None, mode).await
}

pub async fn recommend_menu(
    state: &AppState,
    meal_type: MealType,
    dietary_pref: String,
    image_out: Option<PathBuf>,
    mode: OutputMode,
) -> Result<()> {
    let input = FormInput::new()
        .with("meal_type", meal_type.to_string())
        .with("dietary_pref", dietary_pref);

    run(state, FeatureId::MenuRecommendation, input, image_out, mode).await
}

pub async fn optimize_leftovers(
    state: &AppState,
    leftover_type: String,
    quantity: f64,
    mode: OutputMode,
) -> Result<()> {
    let input = FormInput::new()
        .with("leftover_type", leftover_type)
        .with("quantity", quantity);

    run(state, FeatureId::LeftoverOptimization, input, None, mode).await
}

pub async fn chat(state: &AppState, message: String, mode: OutputMode) -> Result<()> {
    let input = FormInput::new().with("user_input", message);
    run(state, FeatureId::Chatbot, input, None, mode).await
}

pub async fn todays_event(state: &AppState, date: Option<String>, mode: OutputMode) -> Result<()> {
    let today = date.unwrap_or_else(today_label);
    let input = FormInput::new().with("today", today);
    run(state, FeatureId::TodaysEvent, input, None, mode).await
}

/// Local date as "Month DD" (e.g., "February 14").
pub fn today_label() -> String {
    chrono::Local::now().format("%B %d").to_string()
}

async fn run(
    state: &AppState,
    id: FeatureId,
    input: FormInput,
    image_out: Option<PathBuf>,
    mode: OutputMode,
) -> Result<()> {
    let mut pipeline = FeaturePipeline::new(FeatureDefinition::get(id));
    let outcome = pipeline.run(&state.services(), input).await?;

    let mut result = match outcome {
        PipelineOutcome::InputInvalid { missing, message } => {
            render::input_invalid(&missing, &message, mode)?;
            anyhow::bail!("missing input: {}", missing.join(", "));
        }
        PipelineOutcome::Done(result) => result,
    };

    let image_path = store_image(&mut result, image_out, &state.images_dir()).await;
    render::feature_result(&result, image_path.as_deref(), mode)
}

/// Save the generated image, if any, and return where it landed.
///
/// A write failure only costs the image: it becomes a diagnostic and the
/// text is still rendered.
async fn store_image(
    result: &mut FeatureResult,
    image_out: Option<PathBuf>,
    images_dir: &Path,
) -> Option<PathBuf> {
    let image = result.image.as_ref()?;
    let path = image_out.unwrap_or_else(|| default_image_path(images_dir, image));
    match save_image(&path, image).await {
        Ok(()) => Some(path),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %format!("{e:#}"), "Menu image not saved");
            result
                .diagnostics
                .push(format!("Image could not be saved: {e:#}"));
            None
        }
    }
}

fn default_image_path(dir: &Path, image: &GeneratedImage) -> PathBuf {
    dir.join(format!("menu-{}.{}", uuid::Uuid::now_v7(), image.extension()))
}

async fn save_image(path: &Path, image: &GeneratedImage) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
    }
    tokio::fs::write(path, &image.bytes)
        .await
        .with_context(|| format!("cannot write image to {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = image.bytes.len(), "Menu image saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> GeneratedImage {
        GeneratedImage {
            mime_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn test_today_label_format() {
        let label = today_label();
        let (month, day) = label.rsplit_once(' ').unwrap();
        assert!(month.chars().all(|c| c.is_ascii_alphabetic()));
        assert_eq!(day.len(), 2);
        assert!(day.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_default_image_path_uses_extension() {
        let path = default_image_path(Path::new("/data/images"), &image());
        assert!(path.starts_with("/data/images"));
        assert_eq!(path.extension().unwrap(), "png");
    }

    fn menu_result() -> FeatureResult {
        FeatureResult {
            feature: FeatureId::MenuRecommendation,
            prompt: "Suggest a Lunch menu".to_string(),
            completion: dineai_types::generation::CompletionText {
                text: "Chickpea bowl".to_string(),
                failure: None,
            },
            image: Some(image()),
            persistence: dineai_core::feature::Persistence::Appended {
                collection: "menus".to_string(),
            },
            diagnostics: vec![],
        }
    }

    #[tokio::test]
    async fn test_unwritable_image_path_becomes_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the parent directory should be.
        let blocker = dir.path().join("blocker");
        tokio::fs::write(&blocker, b"").await.unwrap();
        let path = blocker.join("menu.png");

        let mut result = menu_result();
        let saved = store_image(&mut result, Some(path.clone()), dir.path()).await;

        assert!(saved.is_none());
        assert!(!path.exists());
        assert_eq!(result.text(), "Chickpea bowl");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].starts_with("Image could not be saved: "));
        assert!(render::result_json(&result, saved.as_deref())["image"].is_null());
    }

    #[tokio::test]
    async fn test_store_image_uses_default_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut result = menu_result();

        let saved = store_image(&mut result, None, dir.path()).await.unwrap();
        assert!(saved.starts_with(dir.path()));
        assert!(result.diagnostics.is_empty());
    }

    #[tokio::test]
    async fn test_store_image_without_image_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut result = menu_result();
        result.image = None;

        assert!(store_image(&mut result, None, dir.path()).await.is_none());
        assert!(result.diagnostics.is_empty());
    }

    #[tokio::test]
    async fn test_save_image_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("menu.png");

        save_image(&path, &image()).await.unwrap();
        assert_eq!(tokio::fs::read(&path).await.unwrap(), vec![1, 2, 3]);
    }
}
