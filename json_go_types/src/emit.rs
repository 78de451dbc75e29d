//! Renders a populated [`TypeRegistry`] as Go type declarations.

use crate::types::{FieldDescriptor, StructDefinition, TypeDescriptor, TypeRegistry};

/// Render every declaration: the root first, then each other registered
/// struct once, in registration order. Declarations are separated by a
/// blank line; there is no trailing newline.
#[must_use]
pub fn render(registry: &TypeRegistry) -> String {
    let root_name: &str = registry.root_name();
    let mut declarations: Vec<String> = Vec::with_capacity(registry.len() + 1);
    declarations.push(format!(
        "type {root_name} {}",
        render_root_type(registry, &registry.root_type())
    ));

    let skip_root: bool = registry.root_is_struct();
    for struct_def in registry.iter() {
        if skip_root && struct_def.name == root_name {
            continue;
        }
        declarations.push(format!(
            "type {} {}",
            struct_def.name,
            render_struct_body(struct_def)
        ));
    }
    declarations.join("\n\n")
}

/// The root has no separate declaration to point at, so a root struct is
/// inlined. Anything else renders as it would in a field.
fn render_root_type(registry: &TypeRegistry, root_type: &TypeDescriptor) -> String {
    match root_type {
        TypeDescriptor::Named(name) if name == registry.root_name() => registry
            .get(name)
            .map_or_else(|| name.clone(), render_struct_body),
        other => render_type(other),
    }
}

/// Render a type as it appears after a field name: named structs are
/// referenced, never inlined.
#[must_use]
pub fn render_type(ty: &TypeDescriptor) -> String {
    match ty {
        TypeDescriptor::Primitive(kind) => kind.as_go().to_string(),
        TypeDescriptor::SliceOf(element) => format!("[]{}", render_type(element)),
        TypeDescriptor::Named(name) => name.clone(),
    }
}

fn render_struct_body(struct_def: &StructDefinition) -> String {
    let mut body: String = String::from("struct {\n");
    for field in &struct_def.fields {
        body.push_str(&render_field(field));
        body.push('\n');
    }
    body.push('}');
    body
}

fn render_field(field: &FieldDescriptor) -> String {
    format!(
        "\t{} {} {}",
        field.display_name,
        render_type(&field.ty),
        render_tag(&field.original_key)
    )
}

/// Struct tag for a JSON key. Uses a raw string literal unless the key
/// contains a backtick, which raw literals cannot hold.
fn render_tag(json_key: &str) -> String {
    let tag: String = format!("json:\"{}\"", escape_go_string(json_key));
    if tag.contains('`') {
        format!("\"{}\"", escape_go_string(&tag))
    } else {
        format!("`{tag}`")
    }
}

/// Escape for the inside of a Go interpreted string literal.
fn escape_go_string(s: &str) -> String {
    let mut out: String = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimitiveKind;

    fn field(key: &str, name: &str, ty: TypeDescriptor) -> FieldDescriptor {
        FieldDescriptor {
            original_key: key.to_string(),
            display_name: name.to_string(),
            ty,
        }
    }

    #[test]
    fn render_type_nested_slices() {
        let ty: TypeDescriptor = TypeDescriptor::slice_of(TypeDescriptor::slice_of(
            TypeDescriptor::Named("TagsItem".to_string()),
        ));
        assert_eq!("[][]TagsItem", render_type(&ty));
    }

    #[test]
    fn render_root_struct_inline_and_hoist_nested() {
        let mut registry: TypeRegistry = TypeRegistry::new("Out");
        registry.reserve("Out");
        registry.define(
            "User",
            vec![field(
                "name",
                "Name",
                TypeDescriptor::Primitive(PrimitiveKind::String),
            )],
        );
        registry.define(
            "Out",
            vec![field("user", "User", TypeDescriptor::Named("User".to_string()))],
        );
        registry.set_root_type(TypeDescriptor::Named("Out".to_string()));

        let expected: &str = "type Out struct {\n\
                              \tUser User `json:\"user\"`\n\
                              }\n\
                              \n\
                              type User struct {\n\
                              \tName string `json:\"name\"`\n\
                              }";
        assert_eq!(expected, render(&registry));
    }

    #[test]
    fn render_primitive_root() {
        let mut registry: TypeRegistry = TypeRegistry::new("Typeich");
        registry.set_root_type(TypeDescriptor::Primitive(PrimitiveKind::Float64));
        assert_eq!("type Typeich float64", render(&registry));
    }

    #[test]
    fn render_empty_struct() {
        let mut registry: TypeRegistry = TypeRegistry::new("Out");
        registry.define("Out", Vec::new());
        registry.set_root_type(TypeDescriptor::Named("Out".to_string()));
        assert_eq!("type Out struct {\n}", render(&registry));
    }

    #[test]
    fn render_tag_plain_key() {
        assert_eq!("`json:\"first_name\"`", render_tag("first_name"));
    }

    #[test]
    fn render_tag_escapes_quotes_and_backslashes() {
        assert_eq!(r#"`json:"say \"hi\" \\o/"`"#, render_tag(r#"say "hi" \o/"#));
    }

    #[test]
    fn render_tag_with_backtick_uses_interpreted_literal() {
        assert_eq!(r#""json:\"a`b\"""#, render_tag("a`b"));
    }

    #[test]
    fn render_tag_escapes_control_characters() {
        assert_eq!("`json:\"a\\nb\\u0001\"`", render_tag("a\nb\u{1}"));
    }
}
