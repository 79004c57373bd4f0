//! Kind-specific detail view for a selected node.

use crate::model::{Field, NodeKind, RawNode};

/// Everything the detail panel shows for one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
	/// The kind's wire tag, e.g. `"function"`.
	pub type_label: &'static str,
	/// The node's full name.
	pub name: String,
	/// Kind-specific section.
	pub body: DetailBody,
	/// Doc text, if the node has any.
	pub documentation: Option<String>,
	/// Source text, if the node has any.
	pub source_code: Option<String>,
}

/// The kind-specific part of a [`DetailView`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailBody {
	/// Location of a workspace, package or module.
	Path(String),
	/// Struct fields.
	Fields(Vec<Field>),
	/// Enum variant names.
	Variants(Vec<String>),
	/// Function signature.
	Signature {
		/// Typed arguments.
		arguments: Vec<Field>,
		/// Return type, if not `()`.
		return_type: Option<String>,
	},
	/// Constant type and value.
	Constant {
		/// Rendered type.
		type_name: String,
		/// Rendered value.
		value: String,
	},
	/// Macro flavor.
	Macro {
		/// Whether this is `macro_rules!`.
		is_macro_rules: bool,
	},
	/// Static type and mutability.
	Static {
		/// Rendered type.
		type_name: String,
		/// Whether this is `static mut`.
		is_mutable: bool,
	},
	/// Trait qualifiers.
	Trait {
		/// `auto trait`.
		is_auto: bool,
		/// `unsafe trait`.
		is_unsafe: bool,
	},
	/// Generic parameters of an alias.
	Generics(String),
	/// Nothing kind-specific to show.
	Empty,
}

impl DetailView {
	/// Builds the view for `node`.
	pub fn new(node: &RawNode) -> Self {
		let body = match &node.kind {
			NodeKind::Workspace { path } | NodeKind::Package { path } | NodeKind::Module { path } => {
				DetailBody::Path(path.clone())
			}
			NodeKind::Struct { fields } => DetailBody::Fields(fields.clone()),
			NodeKind::Enum { variants } => DetailBody::Variants(variants.clone()),
			NodeKind::Function {
				arguments,
				return_type,
			} => DetailBody::Signature {
				arguments: arguments.clone(),
				return_type: return_type.clone(),
			},
			NodeKind::Const { type_name, value } => DetailBody::Constant {
				type_name: type_name.clone(),
				value: value.clone(),
			},
			NodeKind::Macro { is_macro_rules } => DetailBody::Macro {
				is_macro_rules: *is_macro_rules,
			},
			NodeKind::Static {
				type_name,
				is_mutable,
			} => DetailBody::Static {
				type_name: type_name.clone(),
				is_mutable: *is_mutable,
			},
			NodeKind::Trait { is_auto, is_unsafe } => DetailBody::Trait {
				is_auto: *is_auto,
				is_unsafe: *is_unsafe,
			},
			NodeKind::TraitAlias { generics } | NodeKind::Type { generics } => {
				DetailBody::Generics(generics.clone())
			}
			NodeKind::Unknown => DetailBody::Empty,
		};

		Self {
			type_label: node.kind.tag().as_str(),
			name: node.name.clone(),
			body,
			documentation: non_empty(&node.documentation),
			source_code: non_empty(&node.source_code),
		}
	}
}

fn non_empty(text: &str) -> Option<String> {
	(!text.is_empty()).then(|| text.to_owned())
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::{DetailBody, DetailView};
	use crate::model::{Field, NodeKind, RawNode};

	fn node(kind: NodeKind) -> RawNode {
		RawNode {
			id: 2,
			name: "item".into(),
			kind,
			children: Vec::new(),
			documentation: String::new(),
			source_code: String::new(),
		}
	}

	#[test]
	fn function_shows_signature() {
		let arguments = vec![Field {
			name: "path".into(),
			type_name: "& Path".into(),
		}];
		let view = DetailView::new(&node(NodeKind::Function {
			arguments: arguments.clone(),
			return_type: None,
		}));

		assert_eq!(view.type_label, "function");
		assert_eq!(
			view.body,
			DetailBody::Signature {
				arguments,
				return_type: None,
			}
		);
	}

	#[test]
	fn containers_show_path() {
		let view = DetailView::new(&node(NodeKind::Package {
			path: "crates/core".into(),
		}));
		assert_eq!(view.type_label, "package");
		assert_eq!(view.body, DetailBody::Path("crates/core".into()));
	}

	#[test]
	fn aliases_show_generics_and_unknown_is_empty() {
		let view = DetailView::new(&node(NodeKind::TraitAlias {
			generics: "<'a>".into(),
		}));
		assert_eq!(view.type_label, "traitAlias");
		assert_eq!(view.body, DetailBody::Generics("<'a>".into()));

		let view = DetailView::new(&node(NodeKind::Unknown));
		assert_eq!(view.type_label, "unknown");
		assert_eq!(view.body, DetailBody::Empty);
	}

	fn field(name: &str, type_name: &str) -> Field {
		Field {
			name: name.into(),
			type_name: type_name.into(),
		}
	}

	#[rstest]
	#[case::workspace(
		NodeKind::Workspace { path: "/repo".into() },
		"workspace",
		DetailBody::Path("/repo".into())
	)]
	#[case::package(
		NodeKind::Package { path: "crates/core".into() },
		"package",
		DetailBody::Path("crates/core".into())
	)]
	#[case::module(
		NodeKind::Module { path: "src/lib.rs".into() },
		"module",
		DetailBody::Path("src/lib.rs".into())
	)]
	#[case::structure(
		NodeKind::Struct { fields: vec![field("x", "f64"), field("y", "f64")] },
		"struct",
		DetailBody::Fields(vec![field("x", "f64"), field("y", "f64")])
	)]
	#[case::enumeration(
		NodeKind::Enum { variants: vec!["Up".into(), "Down".into()] },
		"enum",
		DetailBody::Variants(vec!["Up".into(), "Down".into()])
	)]
	#[case::function(
		NodeKind::Function { arguments: vec![field("n", "u8")], return_type: Some("u16".into()) },
		"function",
		DetailBody::Signature { arguments: vec![field("n", "u8")], return_type: Some("u16".into()) }
	)]
	#[case::constant(
		NodeKind::Const { type_name: "usize".into(), value: "4".into() },
		"const",
		DetailBody::Constant { type_name: "usize".into(), value: "4".into() }
	)]
	#[case::macro_rules(
		NodeKind::Macro { is_macro_rules: true },
		"macro",
		DetailBody::Macro { is_macro_rules: true }
	)]
	#[case::static_mut(
		NodeKind::Static { type_name: "u32".into(), is_mutable: true },
		"static",
		DetailBody::Static { type_name: "u32".into(), is_mutable: true }
	)]
	#[case::unsafe_trait(
		NodeKind::Trait { is_auto: false, is_unsafe: true },
		"trait",
		DetailBody::Trait { is_auto: false, is_unsafe: true }
	)]
	#[case::trait_alias(
		NodeKind::TraitAlias { generics: "<T>".into() },
		"traitAlias",
		DetailBody::Generics("<T>".into())
	)]
	#[case::type_alias(
		NodeKind::Type { generics: "<'a, T>".into() },
		"type",
		DetailBody::Generics("<'a, T>".into())
	)]
	#[case::unknown(NodeKind::Unknown, "unknown", DetailBody::Empty)]
	fn body_matches_kind(
		#[case] kind: NodeKind,
		#[case] type_label: &str,
		#[case] body: DetailBody,
	) {
		let view = DetailView::new(&node(kind));
		assert_eq!(view.type_label, type_label);
		assert_eq!(view.body, body);
	}

	#[test]
	fn whitespace_only_text_is_still_shown() {
		let mut raw = node(NodeKind::Unknown);
		raw.documentation = "   \n".into();
		raw.source_code = "\n".into();

		let view = DetailView::new(&raw);

		assert_eq!(view.documentation.as_deref(), Some("   \n"));
		assert_eq!(view.source_code.as_deref(), Some("\n"));
	}

	#[test]
	fn optional_text_only_when_present() {
		let mut raw = node(NodeKind::Enum {
			variants: vec!["A".into()],
		});
		assert_eq!(DetailView::new(&raw).documentation, None);
		assert_eq!(DetailView::new(&raw).source_code, None);

		raw.documentation = "Directions.".into();
		raw.source_code = "enum E { A }".into();
		let view = DetailView::new(&raw);
		assert_eq!(view.documentation.as_deref(), Some("Directions."));
		assert_eq!(view.source_code.as_deref(), Some("enum E { A }"));
		assert_eq!(view.body, DetailBody::Variants(vec!["A".into()]));
	}
}
