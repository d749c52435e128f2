//! Output rendering for feature results.

use std::path::Path;

use anyhow::Result;
use console::style;

use dineai_core::feature::{FeatureId, FeatureResult, Persistence};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Styled,
    Json,
    /// Only the text, nothing else.
    Quiet,
}

impl OutputMode {
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if json {
            OutputMode::Json
        } else if quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Styled
        }
    }
}

fn title(feature: FeatureId) -> &'static str {
    match feature {
        FeatureId::EventPlan => "Event Recommendation",
        FeatureId::TodaysEvent => "Today's Event Recommendation",
        FeatureId::MenuRecommendation => "Menu Recommendation",
        FeatureId::LeftoverOptimization => "Leftover Optimization",
        FeatureId::Chatbot => "Assistant",
    }
}

pub fn result_json(result: &FeatureResult, image_path: Option<&Path>) -> serde_json::Value {
    let persisted = match &result.persistence {
        Persistence::Appended { collection } => {
            serde_json::json!({ "status": "appended", "collection": collection })
        }
        Persistence::NotConfigured => serde_json::json!({ "status": "not_configured" }),
        Persistence::Failed { collection, reason } => {
            serde_json::json!({ "status": "failed", "collection": collection, "reason": reason })
        }
    };

    let image = match (&result.image, image_path) {
        (Some(image), Some(path)) => serde_json::json!({
            "path": path.display().to_string(),
            "mime_type": image.mime_type,
            "width": image.width,
            "height": image.height,
        }),
        _ => serde_json::Value::Null,
    };

    serde_json::json!({
        "feature": result.feature.to_string(),
        "text": result.text(),
        "fallback": result.completion.is_fallback(),
        "error": result.completion.failure.as_ref().map(|e| e.to_string()),
        "persistence": persisted,
        "image": image,
        "diagnostics": result.diagnostics,
    })
}

pub fn feature_result(
    result: &FeatureResult,
    image_path: Option<&Path>,
    mode: OutputMode,
) -> Result<()> {
    match mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&result_json(result, image_path))?);
        }
        OutputMode::Quiet => println!("{}", result.text()),
        OutputMode::Styled => {
            println!();
            println!("  {}", style(title(result.feature)).bold().cyan());
            println!();
            if result.completion.is_fallback() {
                println!("{}", style(result.text()).yellow());
            } else {
                println!("{}", result.text());
            }
            println!();

            if let (Some(image), Some(path)) = (&result.image, image_path) {
                println!(
                    "  {} Image saved to {} ({}x{}, {})",
                    style("✓").green(),
                    style(path.display()).cyan(),
                    image.width,
                    image.height,
                    image.mime_type
                );
            }
            if let Persistence::Appended { collection } = &result.persistence {
                println!(
                    "  {} Saved to '{}'",
                    style("✓").green(),
                    style(collection).dim()
                );
            }
            for diagnostic in &result.diagnostics {
                println!("  {} {}", style("!").yellow().bold(), style(diagnostic).yellow());
            }
            println!();
        }
    }
    Ok(())
}

pub fn input_invalid(missing: &[String], message: &str, mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Json => {
            let body = serde_json::json!({
                "error": "input_invalid",
                "message": message,
                "missing": missing,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputMode::Quiet | OutputMode::Styled => {
            eprintln!("  {} {}", style("✗").red().bold(), style(message).yellow());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dineai_types::error::GenerationError;
    use dineai_types::generation::{CompletionText, GeneratedImage};

    fn result() -> FeatureResult {
        FeatureResult {
            feature: FeatureId::MenuRecommendation,
            prompt: "Suggest a Lunch menu".to_string(),
            completion: CompletionText {
                text: "AI response unavailable. Please try again later.".to_string(),
                failure: Some(GenerationError::RateLimited),
            },
            image: Some(GeneratedImage {
                mime_type: "image/png".to_string(),
                bytes: vec![0; 4],
                width: 640,
                height: 480,
            }),
            persistence: Persistence::Appended {
                collection: "menus".to_string(),
            },
            diagnostics: vec![],
        }
    }

    #[test]
    fn test_output_mode_json_wins() {
        assert_eq!(OutputMode::from_flags(true, true), OutputMode::Json);
        assert_eq!(OutputMode::from_flags(false, true), OutputMode::Quiet);
        assert_eq!(OutputMode::from_flags(false, false), OutputMode::Styled);
    }

    #[test]
    fn test_result_json_shape() {
        let json = result_json(&result(), Some(Path::new("/tmp/menu.png")));
        assert_eq!(json["feature"], "menu_recommendation");
        assert_eq!(json["fallback"], true);
        assert_eq!(json["error"], "rate limited");
        assert_eq!(json["persistence"]["status"], "appended");
        assert_eq!(json["persistence"]["collection"], "menus");
        assert_eq!(json["image"]["path"], "/tmp/menu.png");
        assert_eq!(json["image"]["width"], 640);
    }

    #[test]
    fn test_result_json_without_image() {
        let mut r = result();
        r.image = None;
        r.persistence = Persistence::NotConfigured;
        let json = result_json(&r, None);
        assert!(json["image"].is_null());
        assert_eq!(json["persistence"]["status"], "not_configured");
    }
}
