//! Scope-stack parser building the model from logical lines.

use cmlgen_ir::{Aggregate, BoundedContext, Entity, Enumeration, Model, ValueObject};

use crate::lexer::logical_lines;
use crate::property::{AGGREGATE_ROOT_MARKER, parse_property};

/// Open scope. Indices point into the model under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Context(usize),
    Aggregate(usize, usize),
    Entity(usize, usize, usize),
    ValueObject(usize, usize, usize),
    Enum(usize, usize, usize),
    /// Block whose content is ignored; keeps braces balanced.
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    BoundedContext,
    Aggregate,
    Entity,
    ValueObject,
    Enum,
}

impl Keyword {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "BoundedContext" => Some(Self::BoundedContext),
            "Aggregate" => Some(Self::Aggregate),
            "Entity" => Some(Self::Entity),
            "ValueObject" => Some(Self::ValueObject),
            "enum" => Some(Self::Enum),
            _ => None,
        }
    }
}

/// Parse CML text into a model.
///
/// Never fails: unknown lines are dropped, missing names become `""` and
/// declarations without a valid parent are skipped along with their body.
pub fn parse(text: &str) -> Model {
    let mut parser = Parser::default();
    for line in logical_lines(text) {
        parser.line(&line.text);
    }
    parser.model
}

#[derive(Debug, Default)]
struct Parser {
    model: Model,
    stack: Vec<Frame>,
}

impl Parser {
    fn line(&mut self, text: &str) {
        if text == "{" {
            return;
        }

        let (body, closes) = match text.strip_suffix('}') {
            Some(rest) => (rest.trim_end(), true),
            None => (text, false),
        };

        let (head, inline) = match body.split_once('{') {
            Some((head, inline)) => (head.trim(), Some(inline.trim())),
            None => (body, None),
        };

        let mut tokens = head.split_whitespace();
        let keyword = tokens.next().and_then(Keyword::from_token);

        match (keyword, inline) {
            (Some(keyword), inline) => {
                let name = tokens.next().unwrap_or_default();
                self.open(keyword, name);
                if let Some(inline) = inline.filter(|s| !s.is_empty()) {
                    self.content(inline);
                }
            }
            (None, Some(inline)) => {
                tracing::trace!(block = head, "skipping unsupported block");
                self.stack.push(Frame::Detached);
                if !inline.is_empty() {
                    self.content(inline);
                }
            }
            (None, None) => {
                if !body.is_empty() {
                    self.content(body);
                }
            }
        }

        if closes {
            self.stack.pop();
        }
    }

    /// Nearest enclosing frame accepted by `accept`, unless a detached block
    /// is hit first.
    fn parent<T>(&self, accept: impl Fn(Frame) -> Option<T>) -> Option<T> {
        for frame in self.stack.iter().rev() {
            if *frame == Frame::Detached {
                return None;
            }
            if let Some(found) = accept(*frame) {
                return Some(found);
            }
        }
        None
    }

    fn aggregate_parent(&self) -> Option<(usize, usize)> {
        self.parent(|frame| match frame {
            Frame::Aggregate(ci, ai) => Some((ci, ai)),
            _ => None,
        })
    }

    fn open(&mut self, keyword: Keyword, name: &str) {
        let frame = match keyword {
            Keyword::BoundedContext => {
                if self.stack.contains(&Frame::Detached) {
                    None
                } else {
                    self.model.bounded_contexts.push(BoundedContext::new(name));
                    Some(Frame::Context(self.model.bounded_contexts.len() - 1))
                }
            }
            Keyword::Aggregate => self
                .parent(|frame| match frame {
                    Frame::Context(ci) => Some(ci),
                    _ => None,
                })
                .map(|ci| {
                    let aggregates = &mut self.model.bounded_contexts[ci].aggregates;
                    aggregates.push(Aggregate::new(name));
                    Frame::Aggregate(ci, aggregates.len() - 1)
                }),
            Keyword::Entity => self.aggregate_parent().map(|(ci, ai)| {
                let entities = &mut self.aggregate_mut(ci, ai).entities;
                entities.push(Entity::new(name));
                Frame::Entity(ci, ai, entities.len() - 1)
            }),
            Keyword::ValueObject => self.aggregate_parent().map(|(ci, ai)| {
                let value_objects = &mut self.aggregate_mut(ci, ai).value_objects;
                value_objects.push(ValueObject::new(name));
                Frame::ValueObject(ci, ai, value_objects.len() - 1)
            }),
            Keyword::Enum => self.aggregate_parent().map(|(ci, ai)| {
                let enums = &mut self.aggregate_mut(ci, ai).enums;
                enums.push(Enumeration::new(name));
                Frame::Enum(ci, ai, enums.len() - 1)
            }),
        };

        match frame {
            Some(frame) => {
                tracing::debug!(?keyword, name, "opened scope");
                self.stack.push(frame);
            }
            None => {
                tracing::debug!(?keyword, name, "declaration without a valid parent, skipping");
                self.stack.push(Frame::Detached);
            }
        }
    }

    fn content(&mut self, text: &str) {
        let Some(frame) = self.stack.last().copied() else {
            return;
        };

        match frame {
            Frame::Enum(ci, ai, ei) => {
                let values = text
                    .split(',')
                    .map(|value| value.trim().trim_end_matches([';', ',']).trim())
                    .filter(|value| !value.is_empty())
                    .map(str::to_string);
                self.aggregate_mut(ci, ai).enums[ei].values.extend(values);
            }
            Frame::Entity(ci, ai, ei) => {
                let entity = &mut self.aggregate_mut(ci, ai).entities[ei];
                if text == AGGREGATE_ROOT_MARKER {
                    entity.is_aggregate_root = true;
                } else if let Some(property) = parse_property(text) {
                    entity.properties.push(property);
                }
            }
            Frame::ValueObject(ci, ai, vi) => {
                if let Some(property) = parse_property(text) {
                    self.aggregate_mut(ci, ai).value_objects[vi]
                        .properties
                        .push(property);
                }
            }
            Frame::Context(_) | Frame::Aggregate(..) | Frame::Detached => {}
        }
    }

    fn aggregate_mut(&mut self, ci: usize, ai: usize) -> &mut Aggregate {
        &mut self.model.bounded_contexts[ci].aggregates[ai]
    }
}
