//! PHP rendering of class and enum specifications.
//!
//! - `ClassSpec` → `[final] [readonly] class Name [extends Parent]`
//! - `EnumSpec` → backed `enum Name: string`
//! - promoted constructor parameters → one parameter per line, trailing comma

use cmlgen_codegen::{
    CodeFragment, Renderable,
    builder::{
        ClassSpec, ConstructorParam, ConstructorSpec, EnumSpec, MethodSpec, ParamSpec, PropertySpec,
    },
};

/// Renders declarative specs to PHP code fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpRenderer;

impl PhpRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a class declaration with its members.
    pub fn render_class(&self, spec: &ClassSpec) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !spec.doc.is_empty() {
            fragments.push(CodeFragment::DocBlock(spec.doc.clone()));
        }
        for attribute in &spec.attributes {
            fragments.push(CodeFragment::line(attribute.as_str()));
        }
        fragments.push(CodeFragment::line(class_header(spec)));

        let mut sections: Vec<Vec<CodeFragment>> = Vec::new();
        if !spec.properties.is_empty() {
            sections.push(self.render_properties(&spec.properties));
        }
        if let Some(ctor) = &spec.constructor {
            sections.push(self.render_constructor(ctor));
        }
        for method in &spec.methods {
            sections.push(self.render_method(method));
        }

        fragments.push(CodeFragment::block(
            "{",
            join_sections(sections),
            Some("}".to_string()),
        ));
        fragments
    }

    /// Render a backed enum.
    pub fn render_enum(&self, spec: &EnumSpec) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !spec.doc.is_empty() {
            fragments.push(CodeFragment::DocBlock(spec.doc.clone()));
        }
        let header = match &spec.backing {
            Some(backing) => format!("enum {}: {}", spec.name, backing),
            None => format!("enum {}", spec.name),
        };
        fragments.push(CodeFragment::line(header));

        let cases = spec
            .cases
            .iter()
            .map(|case| match &case.value {
                Some(value) => CodeFragment::line(format!("case {} = {};", case.name, value)),
                None => CodeFragment::line(format!("case {};", case.name)),
            })
            .collect();
        fragments.push(CodeFragment::block("{", cases, Some("}".to_string())));
        fragments
    }

    /// Consecutive plain properties stay together; annotated ones get air.
    fn render_properties(&self, properties: &[PropertySpec]) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        for (i, property) in properties.iter().enumerate() {
            if i > 0 && (is_annotated(&properties[i - 1]) || is_annotated(property)) {
                fragments.push(CodeFragment::blank());
            }
            fragments.extend(annotations(&property.doc, &property.attributes));
            fragments.push(CodeFragment::line(format!(
                "{};",
                property_declaration(property)
            )));
        }
        fragments
    }

    fn render_constructor(&self, ctor: &ConstructorSpec) -> Vec<CodeFragment> {
        let body: Vec<CodeFragment> = ctor.body.iter().map(CodeFragment::line).collect();

        if !ctor.has_promoted_params() {
            let params = ctor
                .params
                .iter()
                .map(|param| match param {
                    ConstructorParam::Plain(p) => param_declaration(p),
                    ConstructorParam::Promoted(p) => property_declaration(p),
                })
                .collect::<Vec<_>>()
                .join(", ");
            return vec![
                CodeFragment::line(format!("public function __construct({})", params)),
                CodeFragment::block("{", body, Some("}".to_string())),
            ];
        }

        let mut params = Vec::new();
        for param in &ctor.params {
            match param {
                ConstructorParam::Plain(p) => {
                    params.push(CodeFragment::line(format!("{},", param_declaration(p))));
                }
                ConstructorParam::Promoted(p) => {
                    params.extend(annotations(&p.doc, &p.attributes));
                    params.push(CodeFragment::line(format!("{},", property_declaration(p))));
                }
            }
        }

        vec![
            CodeFragment::line("public function __construct("),
            CodeFragment::indent(params),
            CodeFragment::line(") {"),
            CodeFragment::indent(body),
            CodeFragment::line("}"),
        ]
    }

    fn render_method(&self, method: &MethodSpec) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !method.doc.is_empty() {
            fragments.push(CodeFragment::DocBlock(method.doc.clone()));
        }

        let params = method
            .params
            .iter()
            .map(param_declaration)
            .collect::<Vec<_>>()
            .join(", ");
        let signature = match &method.return_type {
            Some(ret) => format!(
                "{} function {}({}): {}",
                method.visibility.as_str(),
                method.name,
                params,
                ret
            ),
            None => format!(
                "{} function {}({})",
                method.visibility.as_str(),
                method.name,
                params
            ),
        };
        fragments.push(CodeFragment::line(signature));
        fragments.push(CodeFragment::block(
            "{",
            method.body.iter().map(CodeFragment::line).collect(),
            Some("}".to_string()),
        ));
        fragments
    }
}

fn class_header(spec: &ClassSpec) -> String {
    let mut header = String::new();
    if spec.is_final {
        header.push_str("final ");
    }
    if spec.is_readonly {
        header.push_str("readonly ");
    }
    header.push_str("class ");
    header.push_str(&spec.name);
    if let Some(parent) = &spec.extends {
        header.push_str(" extends ");
        header.push_str(parent);
    }
    header
}

fn join_sections(sections: Vec<Vec<CodeFragment>>) -> Vec<CodeFragment> {
    let mut fragments = Vec::new();
    for (i, section) in sections.into_iter().enumerate() {
        if i > 0 {
            fragments.push(CodeFragment::blank());
        }
        fragments.extend(section);
    }
    fragments
}

fn is_annotated(property: &PropertySpec) -> bool {
    !property.doc.is_empty() || !property.attributes.is_empty()
}

fn annotations(doc: &[String], attributes: &[String]) -> Vec<CodeFragment> {
    let mut fragments = Vec::new();
    if !doc.is_empty() {
        fragments.push(CodeFragment::DocBlock(doc.to_vec()));
    }
    fragments.extend(attributes.iter().map(|a| CodeFragment::line(a.as_str())));
    fragments
}

/// `private readonly ?string $name = null`, without the terminator.
fn property_declaration(property: &PropertySpec) -> String {
    let mut decl = String::from(property.visibility.as_str());
    if property.readonly {
        decl.push_str(" readonly");
    }
    if !property.ty.is_empty() {
        decl.push(' ');
        decl.push_str(&property.ty);
    }
    decl.push_str(" $");
    decl.push_str(&property.name);
    if let Some(default) = &property.default {
        decl.push_str(" = ");
        decl.push_str(default);
    }
    decl
}

fn param_declaration(param: &ParamSpec) -> String {
    let mut decl = String::new();
    if !param.ty.is_empty() {
        decl.push_str(&param.ty);
        decl.push(' ');
    }
    decl.push('$');
    decl.push_str(&param.name);
    if let Some(default) = &param.default {
        decl.push_str(" = ");
        decl.push_str(default);
    }
    decl
}

/// A class spec ready to be placed in a [`PhpFile`](crate::PhpFile).
pub struct PhpClass<'a>(pub &'a ClassSpec);

impl Renderable for PhpClass<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        PhpRenderer.render_class(self.0)
    }
}

/// An enum spec ready to be placed in a [`PhpFile`](crate::PhpFile).
pub struct PhpEnum<'a>(pub &'a EnumSpec);

impl Renderable for PhpEnum<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        PhpRenderer.render_enum(self.0)
    }
}

#[cfg(test)]
mod tests {
    use cmlgen_codegen::{
        CodeBuilder,
        builder::{CaseSpec, Visibility},
    };

    use super::*;

    fn render(node: impl Renderable) -> String {
        let mut builder = CodeBuilder::php();
        builder.emit(&node);
        builder.build()
    }

    #[test]
    fn test_render_enum() {
        let spec = EnumSpec::new("Status")
            .backed_by("string")
            .case(CaseSpec::new("OPEN").value("'OPEN'"))
            .case(CaseSpec::new("CLOSED").value("'CLOSED'"));

        assert_eq!(
            render(PhpEnum(&spec)),
            "enum Status: string\n{\n    case OPEN = 'OPEN';\n    case CLOSED = 'CLOSED';\n}\n"
        );
    }

    #[test]
    fn test_render_empty_class() {
        let spec = ClassSpec::new("Marker").final_();
        assert_eq!(render(PhpClass(&spec)), "final class Marker\n{\n}\n");
    }

    #[test]
    fn test_render_plain_constructor_and_accessor() {
        let mut spec = ClassSpec::new("Order")
            .extends("Model")
            .property(PropertySpec::new("code", "string").visibility(Visibility::Private))
            .method(
                MethodSpec::new("getCode")
                    .returns("string")
                    .statement("return $this->code;"),
            );
        spec.constructor = Some(
            ConstructorSpec::new()
                .param(ConstructorParam::Plain(ParamSpec::new("code", "string")))
                .statement("$this->code = $code;"),
        );

        let expected = "\
class Order extends Model
{
    private string $code;

    public function __construct(string $code)
    {
        $this->code = $code;
    }

    public function getCode(): string
    {
        return $this->code;
    }
}
";
        assert_eq!(render(PhpClass(&spec)), expected);
    }

    #[test]
    fn test_render_promoted_constructor() {
        let mut spec = ClassSpec::new("Money").final_().readonly();
        spec.constructor = Some(
            ConstructorSpec::new()
                .param(ConstructorParam::Promoted(
                    PropertySpec::new("amount", "float").visibility(Visibility::Private),
                ))
                .param(ConstructorParam::Promoted(
                    PropertySpec::new("currency", "string")
                        .visibility(Visibility::Private)
                        .attribute("#[ORM\\Column(type: Types::STRING)]"),
                )),
        );

        let expected = "\
final readonly class Money
{
    public function __construct(
        private float $amount,
        #[ORM\\Column(type: Types::STRING)]
        private string $currency,
    ) {
    }
}
";
        assert_eq!(render(PhpClass(&spec)), expected);
    }

    #[test]
    fn test_annotated_properties_are_separated() {
        let spec = ClassSpec::new("Order")
            .property(PropertySpec::new("a", "int").visibility(Visibility::Private))
            .property(PropertySpec::new("b", "int").visibility(Visibility::Private))
            .property(
                PropertySpec::new("tags", "array")
                    .visibility(Visibility::Private)
                    .doc("@var array<int, string>"),
            );

        let expected = "\
class Order
{
    private int $a;
    private int $b;

    /** @var array<int, string> */
    private array $tags;
}
";
        assert_eq!(render(PhpClass(&spec)), expected);
    }

    #[test]
    fn test_property_declaration_modifiers() {
        let property = PropertySpec::new("nickname", "?string")
            .visibility(Visibility::Public)
            .default_value("null");
        assert_eq!(
            property_declaration(&property),
            "public ?string $nickname = null"
        );

        let property = PropertySpec::new("amount", "float")
            .visibility(Visibility::Private)
            .readonly();
        assert_eq!(property_declaration(&property), "private readonly float $amount");
    }
}
