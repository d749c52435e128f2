//! Feature catalog.
//!
//! Each user-facing feature is one [`FeatureDefinition`]: which template
//! to render, which fields must be filled in, which collection receives the
//! record, and whether a menu image is generated. The pipeline is the same
//! code for all of them.

use std::fmt;
use std::str::FromStr;

use crate::prompt::library::ids;

/// Identifier of a configured feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureId {
    EventPlan,
    TodaysEvent,
    MenuRecommendation,
    LeftoverOptimization,
    Chatbot,
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureId::EventPlan => write!(f, "event_plan"),
            FeatureId::TodaysEvent => write!(f, "todays_event"),
            FeatureId::MenuRecommendation => write!(f, "menu_recommendation"),
            FeatureId::LeftoverOptimization => write!(f, "leftover_optimization"),
            FeatureId::Chatbot => write!(f, "chatbot"),
        }
    }
}

impl FromStr for FeatureId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "event_plan" => Ok(FeatureId::EventPlan),
            "todays_event" => Ok(FeatureId::TodaysEvent),
            "menu_recommendation" => Ok(FeatureId::MenuRecommendation),
            "leftover_optimization" => Ok(FeatureId::LeftoverOptimization),
            "chatbot" => Ok(FeatureId::Chatbot),
            other => Err(format!("invalid feature: '{other}'")),
        }
    }
}

/// Configuration of one feature pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDefinition {
    pub id: FeatureId,
    pub template_id: &'static str,
    /// Fields that must be present before any network call is made.
    pub required_fields: &'static [&'static str],
    /// Values filled in for optional fields the user left out.
    pub defaults: &'static [(&'static str, &'static str)],
    /// Collection receiving the record; `None` disables persistence.
    pub collection: Option<&'static str>,
    /// Template for the derived image prompt; `None` skips the image step.
    pub image_template_id: Option<&'static str>,
}

static FEATURES: [FeatureDefinition; 5] = [
    FeatureDefinition {
        id: FeatureId::EventPlan,
        template_id: ids::EVENT_PLAN,
        required_fields: &["occasion", "people", "cuisine", "budget"],
        defaults: &[("drinks", "No preference")],
        collection: Some("events"),
        image_template_id: None,
    },
    FeatureDefinition {
        id: FeatureId::TodaysEvent,
        template_id: ids::TODAYS_EVENT,
        required_fields: &["today"],
        defaults: &[],
        collection: None,
        image_template_id: None,
    },
    FeatureDefinition {
        id: FeatureId::MenuRecommendation,
        template_id: ids::MENU_RECOMMENDATION,
        required_fields: &["meal_type", "dietary_pref"],
        defaults: &[],
        collection: Some("menus"),
        image_template_id: Some(ids::MENU_IMAGE),
    },
    FeatureDefinition {
        id: FeatureId::LeftoverOptimization,
        template_id: ids::LEFTOVER_OPTIMIZATION,
        required_fields: &["leftover_type", "quantity"],
        defaults: &[],
        collection: Some("leftovers"),
        image_template_id: None,
    },
    FeatureDefinition {
        id: FeatureId::Chatbot,
        template_id: ids::CHATBOT,
        required_fields: &["user_input"],
        defaults: &[],
        collection: None,
        image_template_id: None,
    },
];

impl FeatureDefinition {
    /// Every configured feature.
    pub fn all() -> &'static [FeatureDefinition] {
        &FEATURES
    }

    /// The definition for `id`.
    pub fn get(id: FeatureId) -> &'static FeatureDefinition {
        match id {
            FeatureId::EventPlan => &FEATURES[0],
            FeatureId::TodaysEvent => &FEATURES[1],
            FeatureId::MenuRecommendation => &FEATURES[2],
            FeatureId::LeftoverOptimization => &FEATURES[3],
            FeatureId::Chatbot => &FEATURES[4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::PromptBuilder;

    #[test]
    fn test_get_matches_id() {
        for feature in FeatureDefinition::all() {
            assert_eq!(FeatureDefinition::get(feature.id).id, feature.id);
        }
    }

    #[test]
    fn test_feature_id_roundtrip() {
        for feature in FeatureDefinition::all() {
            let parsed: FeatureId = feature.id.to_string().parse().unwrap();
            assert_eq!(parsed, feature.id);
        }
        assert!("dessert".parse::<FeatureId>().is_err());
    }

    #[test]
    fn test_collections() {
        assert_eq!(FeatureDefinition::get(FeatureId::EventPlan).collection, Some("events"));
        assert_eq!(
            FeatureDefinition::get(FeatureId::MenuRecommendation).collection,
            Some("menus")
        );
        assert_eq!(
            FeatureDefinition::get(FeatureId::LeftoverOptimization).collection,
            Some("leftovers")
        );
        assert_eq!(FeatureDefinition::get(FeatureId::Chatbot).collection, None);
        assert_eq!(FeatureDefinition::get(FeatureId::TodaysEvent).collection, None);
    }

    #[test]
    fn test_only_menu_generates_images() {
        let with_images: Vec<FeatureId> = FeatureDefinition::all()
            .iter()
            .filter(|f| f.image_template_id.is_some())
            .map(|f| f.id)
            .collect();
        assert_eq!(with_images, vec![FeatureId::MenuRecommendation]);
    }

    /// Every placeholder a feature's templates use is either required or
    /// defaulted, so a validated input can always be rendered.
    #[test]
    fn test_template_fields_are_covered() {
        let prompts = PromptBuilder::builtin().unwrap();
        for feature in FeatureDefinition::all() {
            let templates = std::iter::once(feature.template_id).chain(feature.image_template_id);
            for template_id in templates {
                let template = prompts.template(template_id).unwrap();
                for field in template.fields() {
                    let covered = feature.required_fields.contains(&field)
                        || feature.defaults.iter().any(|(name, _)| *name == field);
                    assert!(covered, "{}: field '{field}' not covered", feature.id);
                }
            }
        }
    }
}
