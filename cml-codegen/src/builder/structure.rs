//! Declarative class and enum definitions.
//!
//! These describe *what* a generated type contains. Framework adapters edit
//! them before a language renderer turns them into source text.

/// Member visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

/// A declarative specification for a class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassSpec {
    pub name: String,
    /// Doc block lines.
    pub doc: Vec<String>,
    /// Attribute lines such as `#[ORM\Entity]`, without indentation.
    pub attributes: Vec<String>,
    pub is_final: bool,
    pub is_readonly: bool,
    pub extends: Option<String>,
    pub properties: Vec<PropertySpec>,
    pub constructor: Option<ConstructorSpec>,
    pub methods: Vec<MethodSpec>,
}

impl ClassSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    pub fn attribute(mut self, attr: impl Into<String>) -> Self {
        self.attributes.push(attr.into());
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }

    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    /// Look up a declared property by name.
    pub fn find_property(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Whether the class has no members at all.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.constructor.is_none() && self.methods.is_empty()
    }
}

/// A property of a class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySpec {
    pub name: String,
    pub ty: String,
    pub visibility: Visibility,
    pub readonly: bool,
    /// Initializer expression.
    pub default: Option<String>,
    pub doc: Vec<String>,
    pub attributes: Vec<String>,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    pub fn attribute(mut self, attr: impl Into<String>) -> Self {
        self.attributes.push(attr.into());
        self
    }
}

/// A plain function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub ty: String,
    pub default: Option<String>,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: None,
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// A constructor parameter, optionally promoted to a property.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructorParam {
    /// Assigned to a declared property in the body.
    Plain(ParamSpec),
    /// Declares the property itself.
    Promoted(PropertySpec),
}

impl ConstructorParam {
    pub fn name(&self) -> &str {
        match self {
            ConstructorParam::Plain(param) => &param.name,
            ConstructorParam::Promoted(property) => &property.name,
        }
    }
}

/// A constructor: parameters plus body statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructorSpec {
    pub params: Vec<ConstructorParam>,
    /// Statement lines, without indentation.
    pub body: Vec<String>,
}

impl ConstructorSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, param: ConstructorParam) -> Self {
        self.params.push(param);
        self
    }

    pub fn statement(mut self, stmt: impl Into<String>) -> Self {
        self.body.push(stmt.into());
        self
    }

    /// A constructor without parameters or statements is not worth emitting.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty() && self.body.is_empty()
    }

    pub fn has_promoted_params(&self) -> bool {
        self.params
            .iter()
            .any(|p| matches!(p, ConstructorParam::Promoted(_)))
    }
}

/// A method of a class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodSpec {
    pub name: String,
    pub visibility: Visibility,
    pub params: Vec<ParamSpec>,
    /// Return type (None when the language infers or omits it).
    pub return_type: Option<String>,
    /// Statement lines, without indentation.
    pub body: Vec<String>,
    pub doc: Vec<String>,
}

impl MethodSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn statement(mut self, stmt: impl Into<String>) -> Self {
        self.body.push(stmt.into());
        self
    }

    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }
}

/// A declarative specification for a backed enum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumSpec {
    pub name: String,
    /// Backing type, e.g. `string`.
    pub backing: Option<String>,
    pub cases: Vec<CaseSpec>,
    pub doc: Vec<String>,
}

impl EnumSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn backed_by(mut self, ty: impl Into<String>) -> Self {
        self.backing = Some(ty.into());
        self
    }

    pub fn case(mut self, case: CaseSpec) -> Self {
        self.cases.push(case);
        self
    }
}

/// One enum case with its backing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseSpec {
    pub name: String,
    pub value: Option<String>,
}

impl CaseSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_spec_builder() {
        let class = ClassSpec::new("Money")
            .final_()
            .readonly()
            .attribute("#[ORM\\Embeddable]")
            .property(PropertySpec::new("amount", "float").visibility(Visibility::Private));

        assert!(class.is_final && class.is_readonly);
        assert_eq!(class.attributes.len(), 1);
        assert_eq!(class.find_property("amount").unwrap().ty, "float");
        assert!(class.find_property("currency").is_none());
        assert!(!class.is_empty());
        assert!(ClassSpec::new("Empty").is_empty());
    }

    #[test]
    fn test_constructor_spec() {
        assert!(ConstructorSpec::new().is_empty());

        let ctor = ConstructorSpec::new()
            .param(ConstructorParam::Plain(ParamSpec::new("code", "string")))
            .statement("$this->code = $code;");
        assert!(!ctor.is_empty());
        assert!(!ctor.has_promoted_params());
        assert_eq!(ctor.params[0].name(), "code");

        let promoted = ConstructorSpec::new()
            .param(ConstructorParam::Promoted(PropertySpec::new("code", "string")));
        assert!(promoted.has_promoted_params());
    }

    #[test]
    fn test_enum_spec() {
        let spec = EnumSpec::new("Status")
            .backed_by("string")
            .case(CaseSpec::new("OPEN").value("'OPEN'"));
        assert_eq!(spec.backing.as_deref(), Some("string"));
        assert_eq!(spec.cases[0].value.as_deref(), Some("'OPEN'"));
    }

    #[test]
    fn test_visibility_as_str() {
        assert_eq!(Visibility::Public.as_str(), "public");
        assert_eq!(Visibility::Protected.as_str(), "protected");
        assert_eq!(Visibility::Private.as_str(), "private");
    }
}
