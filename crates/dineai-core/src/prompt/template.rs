//! Prompt templates with named placeholders.
//!
//! Syntax: `{name}` is replaced by the form value for `name`; `{{` and `}}`
//! produce literal braces. Names are ASCII letters, digits and underscores.
//! Templates are parsed once at construction so a malformed body is caught
//! at startup rather than on a user request.

use dineai_types::error::PromptError;
use dineai_types::form::FormInput;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(String),
}

/// An immutable, pre-parsed prompt template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    id: String,
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// Parse `body` into a template identified by `id`.
    pub fn new(id: impl Into<String>, body: &str) -> Result<Self, PromptError> {
        let id = id.into();
        let invalid = |reason: String| PromptError::InvalidTemplate {
            id: id.clone(),
            reason,
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = body.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for n in chars.by_ref() {
                        if n == '}' {
                            closed = true;
                            break;
                        }
                        name.push(n);
                    }
                    if !closed {
                        return Err(invalid(format!("unterminated placeholder '{{{name}'")));
                    }
                    let name = name.trim().to_string();
                    if name.is_empty() {
                        return Err(invalid("empty placeholder".to_string()));
                    }
                    if !name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
                        return Err(invalid(format!("invalid placeholder name '{name}'")));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(name));
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(invalid("unmatched '}'".to_string())),
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { id, segments })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Placeholder names in order of first appearance.
    pub fn fields(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Field(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Interpolate `values`. Fails on the first placeholder without a
    /// present value.
    pub fn render(&self, values: &FormInput) -> Result<String, PromptError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(name) => {
                    let value = values
                        .present(name)
                        .ok_or_else(|| PromptError::MissingField(name.clone()))?;
                    out.push_str(&value.to_string());
                }
            }
        }
        Ok(out)
    }
}
