//! OpenTelemetry GenAI semantic-convention attribute names.
//!
//! The generation clients in `dineai-core` emit spans whose field names
//! match these constants; tests assert the two stay in sync.

/// The operation performed ("generate_content", "generate_image").
pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";

/// The provider serving the request (e.g., "gemini").
pub const GEN_AI_PROVIDER_NAME: &str = "gen_ai.provider.name";

pub const GEN_AI_REQUEST_MODEL: &str = "gen_ai.request.model";
pub const GEN_AI_REQUEST_TEMPERATURE: &str = "gen_ai.request.temperature";
pub const GEN_AI_REQUEST_MAX_TOKENS: &str = "gen_ai.request.max_tokens";

/// Recorded only when the provider reports usage.
pub const GEN_AI_USAGE_INPUT_TOKENS: &str = "gen_ai.usage.input_tokens";
pub const GEN_AI_USAGE_OUTPUT_TOKENS: &str = "gen_ai.usage.output_tokens";

// --- Span names ---

pub const SPAN_GENERATE_CONTENT: &str = "gen_ai.generate_content";
pub const SPAN_GENERATE_IMAGE: &str = "gen_ai.generate_image";

// --- Operation name values ---

pub const OP_GENERATE_CONTENT: &str = "generate_content";
pub const OP_GENERATE_IMAGE: &str = "generate_image";

// --- Provider name values ---

pub const PROVIDER_GEMINI: &str = "gemini";
