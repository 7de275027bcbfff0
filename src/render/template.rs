//! Placeholder template rendering
//!
//! A deliberately small renderer for UTF-8 text templates:
//!
//! - `{{ name }}` substitutes a scalar context value
//! - `{{#table}} ... {{/table}}` repeats its body once per record of a
//!   table value; inside the section, field names resolve against the
//!   current record first, then the outer context
//!
//! Unknown names render as empty text rather than failing, matching the
//! leniency of the Jinja placeholders the document templates were written
//! for. This is not a general templating engine and does not aim to be one.

use std::fmt;

use super::{ContextRow, ContextValue, RenderContext};

/// A parsed template
#[derive(Debug, Clone)]
pub struct Template {
    nodes: Vec<Node>,
}

#[derive(Debug, Clone)]
enum Node {
    Text(String),
    Var(String),
    Section { name: String, body: Vec<Node> },
}

#[derive(Debug, Clone)]
enum Token {
    Text(String),
    Var(String),
    SectionStart(String),
    SectionEnd(String),
}

/// Error type for template parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateParseError {
    /// A `{{` with no matching `}}`
    UnclosedTag,
    /// A `{{/name}}` with no open `{{#name}}`
    UnmatchedSectionEnd(String),
    /// A `{{#name}}` never closed
    UnterminatedSection(String),
}

impl fmt::Display for TemplateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclosedTag => write!(f, "unclosed placeholder tag"),
            Self::UnmatchedSectionEnd(name) => {
                write!(f, "section end '{{{{/{}}}}}' without matching start", name)
            }
            Self::UnterminatedSection(name) => {
                write!(f, "section '{{{{#{}}}}}' is never closed", name)
            }
        }
    }
}

impl std::error::Error for TemplateParseError {}

impl Template {
    /// Parse template source into a renderable form
    pub fn parse(source: &str) -> Result<Self, TemplateParseError> {
        let tokens = tokenize(source)?;

        let mut stack: Vec<(String, Vec<Node>)> = Vec::new();
        let mut current: Vec<Node> = Vec::new();

        for token in tokens {
            match token {
                Token::Text(text) => current.push(Node::Text(text)),
                Token::Var(name) => current.push(Node::Var(name)),
                Token::SectionStart(name) => {
                    stack.push((name, std::mem::take(&mut current)));
                }
                Token::SectionEnd(name) => match stack.pop() {
                    Some((open, parent)) if open == name => {
                        let body = std::mem::replace(&mut current, parent);
                        current.push(Node::Section { name, body });
                    }
                    _ => return Err(TemplateParseError::UnmatchedSectionEnd(name)),
                },
            }
        }

        if let Some((name, _)) = stack.pop() {
            return Err(TemplateParseError::UnterminatedSection(name));
        }

        Ok(Self { nodes: current })
    }

    /// Render against a context
    pub fn render(&self, ctx: &RenderContext) -> String {
        let mut out = String::new();
        render_nodes(&self.nodes, ctx, None, &mut out);
        out
    }
}

fn tokenize(source: &str) -> Result<Vec<Token>, TemplateParseError> {
    let mut tokens = Vec::new();
    let mut rest = source;

    while let Some(open) = rest.find("{{") {
        if open > 0 {
            tokens.push(Token::Text(rest[..open].to_string()));
        }
        let after_open = &rest[open + 2..];
        let close = after_open
            .find("}}")
            .ok_or(TemplateParseError::UnclosedTag)?;
        let inner = after_open[..close].trim();

        let token = if let Some(name) = inner.strip_prefix('#') {
            Token::SectionStart(name.trim().to_string())
        } else if let Some(name) = inner.strip_prefix('/') {
            Token::SectionEnd(name.trim().to_string())
        } else {
            Token::Var(inner.to_string())
        };
        tokens.push(token);

        rest = &after_open[close + 2..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Text(rest.to_string()));
    }

    Ok(tokens)
}

fn render_nodes(nodes: &[Node], ctx: &RenderContext, row: Option<&ContextRow>, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Var(name) => {
                if let Some(value) = resolve(name, ctx, row) {
                    push_scalar(value, out);
                }
            }
            Node::Section { name, body } => {
                if let Some(ContextValue::Table(rows)) = resolve(name, ctx, row) {
                    for record in rows {
                        render_nodes(body, ctx, Some(record), out);
                    }
                }
            }
        }
    }
}

/// Resolve a name against the current record first, then the outer context
fn resolve<'a>(
    name: &str,
    ctx: &'a RenderContext,
    row: Option<&'a ContextRow>,
) -> Option<&'a ContextValue> {
    row.and_then(|r| r.get(name)).or_else(|| ctx.get(name))
}

fn push_scalar(value: &ContextValue, out: &mut String) {
    match value {
        ContextValue::Text(text) => out.push_str(text),
        ContextValue::Number(n) => out.push_str(&format_number(*n)),
        // Tables only render through sections
        ContextValue::Table(_) => {}
    }
}

/// Format a number for document text, dropping a trailing ".0"
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
