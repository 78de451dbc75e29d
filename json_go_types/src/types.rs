//! Inferred type graph: descriptors, struct definitions and the per-call
//! registry that owns them.

use indexmap::IndexMap;

/// Go primitive a JSON leaf maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    String,
    Bool,
    Int,
    Float64,
    Any,
}

impl PrimitiveKind {
    /// The Go spelling of this primitive.
    #[must_use]
    pub fn as_go(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float64 => "float64",
            Self::Any => "any",
        }
    }
}

/// Inferred type of one JSON value.
///
/// `Named` is a reference into the [`TypeRegistry`] that produced it; the
/// field list lives there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    SliceOf(Box<TypeDescriptor>),
    Named(String),
}

impl TypeDescriptor {
    #[must_use]
    pub fn any() -> Self {
        Self::Primitive(PrimitiveKind::Any)
    }

    #[must_use]
    pub fn slice_of(element: Self) -> Self {
        Self::SliceOf(Box::new(element))
    }
}

/// One field of a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Key as written in the JSON document; used for the struct tag.
    pub original_key: String,
    /// Go identifier for the field.
    pub display_name: String,
    pub ty: TypeDescriptor,
}

/// A hoisted, named struct with fields ordered by original key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDefinition {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

/// All named types discovered during one transformation.
///
/// Insertion order is preserved; the emitter relies on it for a stable
/// declaration order.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    structs: IndexMap<String, StructDefinition>,
    root_name: String,
    root_type: Option<TypeDescriptor>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new(root_name: &str) -> Self {
        Self {
            structs: IndexMap::new(),
            root_name: root_name.to_string(),
            root_type: None,
        }
    }

    #[must_use]
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// Type of the root declaration. `any` until the builder sets it.
    #[must_use]
    pub fn root_type(&self) -> TypeDescriptor {
        self.root_type.clone().unwrap_or_else(TypeDescriptor::any)
    }

    pub(crate) fn set_root_type(&mut self, ty: TypeDescriptor) {
        self.root_type = Some(ty);
    }

    /// True when the root declaration is an inlined struct registered
    /// under the root name.
    #[must_use]
    pub fn root_is_struct(&self) -> bool {
        self.structs.contains_key(&self.root_name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.structs.contains_key(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StructDefinition> {
        self.structs.get(name)
    }

    /// Claims `name` with an empty field list so that it keeps its
    /// insertion position while its fields are being built.
    pub(crate) fn reserve(&mut self, name: &str) {
        self.structs
            .entry(name.to_string())
            .or_insert_with(|| StructDefinition {
                name: name.to_string(),
                fields: Vec::new(),
            });
    }

    /// Sets the fields of `name`, registering it if it was not reserved.
    pub(crate) fn define(&mut self, name: &str, fields: Vec<FieldDescriptor>) {
        self.reserve(name);
        if let Some(def) = self.structs.get_mut(name) {
            def.fields = fields;
        }
    }

    /// Registered structs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StructDefinition> {
        self.structs.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.structs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structs.is_empty()
    }
}
