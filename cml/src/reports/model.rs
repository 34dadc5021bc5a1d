//! Tree rendering of a parsed model.

use cmlgen_ir::{Model, Property};

use super::output::{Output, Report};

/// A parsed model, printed as an indented tree.
#[derive(Debug)]
pub struct ModelReport<'a> {
    pub model: &'a Model,
}

fn describe(property: &Property) -> String {
    let mut flags = Vec::new();
    if property.is_relation {
        flags.push("relation");
    }
    if property.is_collection {
        flags.push("collection");
    }
    if property.is_enum {
        flags.push("enum");
    }
    if property.nullable {
        flags.push("nullable");
    }

    if flags.is_empty() {
        format!("{}: {}", property.name, property.ty)
    } else {
        format!("{}: {} [{}]", property.name, property.ty, flags.join(", "))
    }
}

impl Report for ModelReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        if self.model.is_empty() {
            out.preformatted("(no bounded contexts)");
            return;
        }

        for context in &self.model.bounded_contexts {
            out.preformatted(&format!("BoundedContext {}", context.name));
            for aggregate in &context.aggregates {
                out.preformatted(&format!("  Aggregate {}", aggregate.name));
                for entity in &aggregate.entities {
                    let root = if entity.is_aggregate_root {
                        " (aggregate root)"
                    } else {
                        ""
                    };
                    out.preformatted(&format!("    Entity {}{}", entity.name, root));
                    for property in &entity.properties {
                        out.preformatted(&format!("      {}", describe(property)));
                    }
                }
                for value_object in &aggregate.value_objects {
                    out.preformatted(&format!("    ValueObject {}", value_object.name));
                    for property in &value_object.properties {
                        out.preformatted(&format!("      {}", describe(property)));
                    }
                }
                for enumeration in &aggregate.enums {
                    out.preformatted(&format!(
                        "    enum {} {{ {} }}",
                        enumeration.name,
                        enumeration.values.join(", ")
                    ));
                }
            }
        }
    }
}
