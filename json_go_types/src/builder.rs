//! Walks a decoded JSON tree and registers one named struct per distinct
//! object type.

use crate::classify::{Classified, classify};
use crate::naming::{NOT_NAMED_FIELD, item_type_name, numbered, to_display_name, to_type_name};
use crate::settings::{DedupMode, TransformSettings};
use crate::types::{FieldDescriptor, TypeDescriptor, TypeRegistry};
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, trace, warn};

/// Builds the type graph for one transformation.
///
/// Owns the registry for its whole lifetime and hands it over in
/// [`TypeGraphBuilder::finish`]; a builder is never reused.
pub struct TypeGraphBuilder<'s> {
    registry: TypeRegistry,
    settings: &'s TransformSettings,
    /// Structs whose fields are still being built.
    pending: HashSet<String>,
}

impl<'s> TypeGraphBuilder<'s> {
    /// Starts a graph whose root declaration is named `root_name`, as given.
    #[must_use]
    pub fn new(root_name: &str, settings: &'s TransformSettings) -> Self {
        Self {
            registry: TypeRegistry::new(root_name),
            settings,
            pending: HashSet::new(),
        }
    }

    /// Builds the root declaration from `value` and returns the populated
    /// registry.
    #[must_use]
    pub fn build_root(mut self, value: &Value) -> TypeRegistry {
        let root_name: String = self.registry.root_name().to_string();
        let root_type: TypeDescriptor = match value {
            Value::Object(map) => {
                self.registry.reserve(&root_name);
                self.pending.insert(root_name.clone());
                let fields: Vec<FieldDescriptor> = self.build_fields(map);
                self.pending.remove(&root_name);
                debug!(name = %root_name, fields = fields.len(), "registered root struct");
                self.registry.define(&root_name, fields);
                TypeDescriptor::Named(root_name)
            }
            other => self.build(&root_name, other),
        };
        self.registry.set_root_type(root_type);
        self.finish()
    }

    /// Infers the type of `value`, registering any structs it needs under
    /// names derived from `candidate`.
    pub fn build(&mut self, candidate: &str, value: &Value) -> TypeDescriptor {
        match classify(value) {
            Classified::Resolved(ty) => ty,
            Classified::ArrayOf(first) => {
                let element_candidate: String = if first.is_object() {
                    item_type_name(candidate)
                } else {
                    candidate.to_string()
                };
                TypeDescriptor::slice_of(self.build(&element_candidate, first))
            }
            Classified::Object(map) => self.build_struct(&to_type_name(candidate), map),
        }
    }

    #[must_use]
    pub fn finish(self) -> TypeRegistry {
        self.registry
    }

    fn build_struct(&mut self, name: &str, map: &Map<String, Value>) -> TypeDescriptor {
        match self.settings.dedup {
            DedupMode::ByName => self.build_struct_by_name(name, map),
            DedupMode::Structural => self.build_struct_structural(name, map),
        }
    }

    /// True when `name` cannot be referenced by a nested struct: its fields
    /// are still being built, or it belongs to a root that is not a struct.
    fn name_taken(&self, name: &str) -> bool {
        self.pending.contains(name)
            || (name == self.registry.root_name() && !self.registry.root_is_struct())
    }

    fn build_struct_by_name(&mut self, name: &str, map: &Map<String, Value>) -> TypeDescriptor {
        let mut attempt: usize = 0;
        while self.name_taken(&numbered(name, attempt)) {
            attempt += 1;
        }
        let name: String = numbered(name, attempt);
        if attempt > 0 {
            warn!(renamed = %name, "type name taken by an enclosing declaration");
        }

        if self.registry.contains(&name) {
            debug!(%name, "reusing registered struct");
            return TypeDescriptor::Named(name);
        }

        self.registry.reserve(&name);
        self.pending.insert(name.clone());
        let fields: Vec<FieldDescriptor> = self.build_fields(map);
        self.pending.remove(&name);
        debug!(%name, fields = fields.len(), "registered struct");
        self.registry.define(&name, fields);
        TypeDescriptor::Named(name)
    }

    fn build_struct_structural(&mut self, name: &str, map: &Map<String, Value>) -> TypeDescriptor {
        let fields: Vec<FieldDescriptor> = self.build_fields(map);

        let mut attempt: usize = 0;
        loop {
            let candidate: String = numbered(name, attempt);
            attempt += 1;
            if self.name_taken(&candidate) {
                continue;
            }
            match self.registry.get(&candidate) {
                None => {
                    if candidate != name {
                        warn!(%name, renamed = %candidate, "struct shape differs from registered type");
                    }
                    debug!(name = %candidate, fields = fields.len(), "registered struct");
                    self.registry.define(&candidate, fields);
                    return TypeDescriptor::Named(candidate);
                }
                Some(existing) if existing.fields == fields => {
                    debug!(name = %candidate, "reusing structurally equal struct");
                    return TypeDescriptor::Named(candidate);
                }
                Some(_) => {}
            }
        }
    }

    /// Builds the fields of an object in lexicographic key order.
    fn build_fields(&mut self, map: &Map<String, Value>) -> Vec<FieldDescriptor> {
        let mut entries: Vec<(&String, &Value)> = map.iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut fields: Vec<FieldDescriptor> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let mut display_name: String = to_display_name(key);
            let mut original_key: String = key.clone();
            if display_name.is_empty() {
                display_name = NOT_NAMED_FIELD.to_string();
                original_key = NOT_NAMED_FIELD.to_string();
            }
            if !seen.insert(display_name.clone()) {
                warn!(key = %key, field = %display_name, "field name collides with an earlier key");
            }

            let ty: TypeDescriptor = self.build(&display_name, value);
            trace!(key = %key, field = %display_name, ?ty, "field");
            fields.push(FieldDescriptor {
                original_key,
                display_name,
                ty,
            });
        }
        fields
    }
}
