use indexmap::IndexMap;

use super::definition::DefinitionBase;
use super::types::{Argument, Type};
use crate::ast::PropertyAttribute;
use crate::base::text::camel_case;
use crate::encoding::INSTANCETYPE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceKind {
    Class,
    Protocol,
    Category,
}

/// A class, protocol or category.
///
/// Categories are registered as extensions keyed by the class they extend;
/// `categories` lists every category name merged into this definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDefinition {
    pub base: DefinitionBase,
    pub kind: InterfaceKind,
    pub superclass: Option<String>,
    pub protocols: Vec<String>,
    pub categories: Vec<String>,
    /// Methods keyed by selector.
    pub methods: IndexMap<String, MethodDefinition>,
    /// Properties keyed by name.
    pub properties: IndexMap<String, Property>,
}

impl InterfaceDefinition {
    pub fn new(base: DefinitionBase, kind: InterfaceKind) -> Self {
        Self {
            base,
            kind,
            superclass: None,
            protocols: Vec::new(),
            categories: Vec::new(),
            methods: IndexMap::new(),
            properties: IndexMap::new(),
        }
    }

    pub fn add_protocol(&mut self, name: &str) {
        if !self.protocols.iter().any(|p| p == name) {
            self.protocols.push(name.to_string());
        }
    }

    pub fn add_method(&mut self, method: MethodDefinition) {
        self.methods.insert(method.selector.clone(), method);
    }

    pub fn add_property(&mut self, property: Property) {
        self.properties.insert(property.name.clone(), property);
    }

    /// Fold another interface (a category) into this one.
    pub fn merge(&mut self, other: InterfaceDefinition) {
        for protocol in &other.protocols {
            self.add_protocol(protocol);
        }
        self.categories.extend(other.categories);
        self.methods.extend(other.methods);
        self.properties.extend(other.properties);
    }
}

/// An Objective-C method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodDefinition {
    pub selector: String,
    /// Method encoding as reported by the front-end.
    pub encoding: String,
    pub returns: Type,
    pub arguments: Vec<Argument>,
    pub instance: bool,
    pub optional: bool,
}

impl MethodDefinition {
    /// Camel-cased selector.
    pub fn name(&self) -> String {
        camel_case(&self.selector)
    }

    /// Returns a new instance of the receiving type.
    pub fn is_constructor(&self) -> bool {
        self.returns.is("typedef") && self.returns.value() == INSTANCETYPE
    }
}

/// An Objective-C property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub ty: Type,
    pub attributes: Vec<PropertyAttribute>,
    pub optional: bool,
}

impl Property {
    /// Attribute names in readonly, readwrite, class order.
    pub fn attribute_names(&self) -> Vec<&'static str> {
        let mut attrs: Vec<PropertyAttribute> = self
            .attributes
            .iter()
            .copied()
            .filter(|a| a.as_str().is_some())
            .collect();
        attrs.sort();
        attrs.dedup();
        attrs.into_iter().filter_map(PropertyAttribute::as_str).collect()
    }
}
