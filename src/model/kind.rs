use std::fmt;

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A named, typed slot: a struct field or a function argument.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
	/// Field or argument name (for arguments, the rendered pattern).
	pub name: String,
	/// Rendered type.
	#[serde(alias = "type_name")]
	pub type_name: String,
}

/// What a node in the code graph stands for, with its kind-specific payload.
///
/// Decoding never fails on the kind itself: tags this client does not know and
/// payloads it cannot read both become [`NodeKind::Unknown`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NodeKind {
	/// A cargo workspace.
	Workspace {
		/// Filesystem path of the workspace.
		path: String,
	},
	/// A package inside a workspace.
	Package {
		/// Filesystem path of the package.
		path: String,
	},
	/// A module, either a source file or an inline `mod` block.
	Module {
		/// Source file the module lives in.
		path: String,
	},
	/// A struct with its named fields.
	Struct {
		/// Fields in declaration order.
		fields: Vec<Field>,
	},
	/// An enum with its variant names.
	Enum {
		/// Variant names in declaration order.
		variants: Vec<String>,
	},
	/// A free function.
	Function {
		/// Typed arguments in declaration order.
		arguments: Vec<Field>,
		/// Rendered return type, absent for `()`.
		return_type: Option<String>,
	},
	/// A `const` item.
	Const {
		/// Rendered type.
		type_name: String,
		/// Rendered initializer.
		value: String,
	},
	/// A macro definition.
	Macro {
		/// Whether this is a `macro_rules!` macro.
		is_macro_rules: bool,
	},
	/// A `static` item.
	Static {
		/// Rendered type.
		type_name: String,
		/// Whether this is a `static mut`.
		is_mutable: bool,
	},
	/// A trait definition.
	Trait {
		/// Whether this is an `auto trait`.
		is_auto: bool,
		/// Whether this is an `unsafe trait`.
		is_unsafe: bool,
	},
	/// A trait alias.
	TraitAlias {
		/// Rendered generic parameter list.
		generics: String,
	},
	/// A type alias.
	Type {
		/// Rendered generic parameter list.
		generics: String,
	},
	/// A kind the backend produced that this client does not understand.
	#[default]
	Unknown,
}

/// The bare discriminant of a [`NodeKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KindTag {
	/// See [`NodeKind::Workspace`].
	Workspace,
	/// See [`NodeKind::Package`].
	Package,
	/// See [`NodeKind::Module`].
	Module,
	/// See [`NodeKind::Struct`].
	Struct,
	/// See [`NodeKind::Enum`].
	Enum,
	/// See [`NodeKind::Function`].
	Function,
	/// See [`NodeKind::Const`].
	Const,
	/// See [`NodeKind::Macro`].
	Macro,
	/// See [`NodeKind::Static`].
	Static,
	/// See [`NodeKind::Trait`].
	Trait,
	/// See [`NodeKind::TraitAlias`].
	TraitAlias,
	/// See [`NodeKind::Type`].
	Type,
	/// See [`NodeKind::Unknown`].
	Unknown,
}

impl KindTag {
	/// Every tag, in declaration order.
	pub const ALL: [KindTag; 13] = [
		Self::Workspace,
		Self::Package,
		Self::Module,
		Self::Struct,
		Self::Enum,
		Self::Function,
		Self::Const,
		Self::Macro,
		Self::Static,
		Self::Trait,
		Self::TraitAlias,
		Self::Type,
		Self::Unknown,
	];

	/// The wire spelling of the tag.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Workspace => "workspace",
			Self::Package => "package",
			Self::Module => "module",
			Self::Struct => "struct",
			Self::Enum => "enum",
			Self::Function => "function",
			Self::Const => "const",
			Self::Macro => "macro",
			Self::Static => "static",
			Self::Trait => "trait",
			Self::TraitAlias => "traitAlias",
			Self::Type => "type",
			Self::Unknown => "unknown",
		}
	}

	/// Human-facing name, used in tooltips.
	pub fn title(self) -> &'static str {
		match self {
			Self::Workspace => "Workspace",
			Self::Package => "Package",
			Self::Module => "Module",
			Self::Struct => "Struct",
			Self::Enum => "Enum",
			Self::Function => "Function",
			Self::Const => "Const",
			Self::Macro => "Macro",
			Self::Static => "Static",
			Self::Trait => "Trait",
			Self::TraitAlias => "Trait alias",
			Self::Type => "Type alias",
			Self::Unknown => "Unknown",
		}
	}

	/// Looks a wire tag up. Returns `None` for anything unrecognized.
	pub fn from_tag(tag: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|t| t.as_str() == tag)
	}
}

impl fmt::Display for KindTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl NodeKind {
	/// The discriminant of this kind.
	pub fn tag(&self) -> KindTag {
		match self {
			Self::Workspace { .. } => KindTag::Workspace,
			Self::Package { .. } => KindTag::Package,
			Self::Module { .. } => KindTag::Module,
			Self::Struct { .. } => KindTag::Struct,
			Self::Enum { .. } => KindTag::Enum,
			Self::Function { .. } => KindTag::Function,
			Self::Const { .. } => KindTag::Const,
			Self::Macro { .. } => KindTag::Macro,
			Self::Static { .. } => KindTag::Static,
			Self::Trait { .. } => KindTag::Trait,
			Self::TraitAlias { .. } => KindTag::TraitAlias,
			Self::Type { .. } => KindTag::Type,
			Self::Unknown => KindTag::Unknown,
		}
	}

	/// Decodes an already-parsed JSON kind value.
	///
	/// Accepts the externally tagged form `{"module": {"path": ".."}}` and a
	/// bare tag string such as `"unknown"`.
	pub fn from_value(value: Value) -> Self {
		let (tag, payload) = match value {
			Value::String(tag) => (tag, Value::Null),
			Value::Object(map) if map.len() == 1 => match map.into_iter().next() {
				Some(entry) => entry,
				None => return Self::Unknown,
			},
			other => {
				warn!("node kind is neither a tag nor a single-entry object: {other}");
				return Self::Unknown;
			}
		};

		let Some(kind_tag) = KindTag::from_tag(&tag) else {
			warn!("unrecognized node kind `{tag}`, treating as unknown");
			return Self::Unknown;
		};

		let payload = match payload {
			Value::Null => Value::Object(Map::new()),
			payload => payload,
		};
		match Self::decode_payload(kind_tag, payload) {
			Ok(kind) => kind,
			Err(err) => {
				warn!("malformed `{tag}` payload ({err}), treating as unknown");
				Self::Unknown
			}
		}
	}

	fn decode_payload(tag: KindTag, payload: Value) -> Result<Self, serde_json::Error> {
		Ok(match tag {
			KindTag::Workspace => Self::Workspace {
				path: payload_of::<PathPayload>(payload)?.path,
			},
			KindTag::Package => Self::Package {
				path: payload_of::<PathPayload>(payload)?.path,
			},
			KindTag::Module => Self::Module {
				path: payload_of::<PathPayload>(payload)?.path,
			},
			KindTag::Struct => Self::Struct {
				fields: payload_of::<StructPayload>(payload)?.fields,
			},
			KindTag::Enum => Self::Enum {
				variants: payload_of::<EnumPayload>(payload)?.variants,
			},
			KindTag::Function => {
				let p: FunctionPayload = payload_of(payload)?;
				Self::Function {
					arguments: p.arguments,
					return_type: p.return_type,
				}
			}
			KindTag::Const => {
				let p: ConstPayload = payload_of(payload)?;
				Self::Const {
					type_name: p.type_name,
					value: p.value,
				}
			}
			KindTag::Macro => Self::Macro {
				is_macro_rules: payload_of::<MacroPayload>(payload)?.is_macro_rules,
			},
			KindTag::Static => {
				let p: StaticPayload = payload_of(payload)?;
				Self::Static {
					type_name: p.type_name,
					is_mutable: p.is_mutable,
				}
			}
			KindTag::Trait => {
				let p: TraitPayload = payload_of(payload)?;
				Self::Trait {
					is_auto: p.is_auto,
					is_unsafe: p.is_unsafe,
				}
			}
			KindTag::TraitAlias => Self::TraitAlias {
				generics: payload_of::<GenericsPayload>(payload)?.generics,
			},
			KindTag::Type => Self::Type {
				generics: payload_of::<GenericsPayload>(payload)?.generics,
			},
			KindTag::Unknown => Self::Unknown,
		})
	}
}

impl<'de> Deserialize<'de> for NodeKind {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Value::deserialize(deserializer).map(Self::from_value)
	}
}

fn payload_of<T: DeserializeOwned>(payload: Value) -> Result<T, serde_json::Error> {
	serde_json::from_value(payload)
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct PathPayload {
	path: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct StructPayload {
	fields: Vec<Field>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct EnumPayload {
	variants: Vec<String>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FunctionPayload {
	arguments: Vec<Field>,
	#[serde(alias = "return_type")]
	return_type: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct ConstPayload {
	#[serde(rename = "type")]
	type_name: String,
	value: String,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct MacroPayload {
	#[serde(alias = "is_macro_rules")]
	is_macro_rules: bool,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StaticPayload {
	#[serde(rename = "type")]
	type_name: String,
	#[serde(alias = "is_mutable")]
	is_mutable: bool,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TraitPayload {
	#[serde(alias = "is_auto")]
	is_auto: bool,
	#[serde(alias = "is_unsafe")]
	is_unsafe: bool,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct GenericsPayload {
	generics: String,
}

#[cfg(test)]
mod tests {
	use rstest::rstest;
	use serde_json::json;

	use super::{Field, KindTag, NodeKind};

	fn decode(value: serde_json::Value) -> NodeKind {
		serde_json::from_value(value).expect("kind decodes")
	}

	#[test]
	fn tags_roundtrip_through_their_wire_spelling() {
		for tag in KindTag::ALL {
			assert_eq!(KindTag::from_tag(tag.as_str()), Some(tag));
		}
		assert_eq!(KindTag::from_tag("Module"), None);
	}

	#[test]
	fn decodes_externally_tagged_function() {
		let kind = decode(json!({
			"function": {
				"arguments": [{ "name": "graph", "typeName": "& mut Graph" }],
				"returnType": "Result < () >"
			}
		}));

		assert_eq!(
			kind,
			NodeKind::Function {
				arguments: vec![Field {
					name: "graph".into(),
					type_name: "& mut Graph".into(),
				}],
				return_type: Some("Result < () >".into()),
			}
		);
	}

	#[test]
	fn accepts_snake_case_payload_keys() {
		let kind = decode(json!({ "function": { "arguments": [], "return_type": "u8" } }));
		assert_eq!(
			kind,
			NodeKind::Function {
				arguments: Vec::new(),
				return_type: Some("u8".into()),
			}
		);

		let kind = decode(json!({ "static": { "type": "u32", "is_mutable": true } }));
		assert_eq!(
			kind,
			NodeKind::Static {
				type_name: "u32".into(),
				is_mutable: true,
			}
		);
	}

	#[test]
	fn decodes_payloads_of_leaf_kinds() {
		assert_eq!(
			decode(json!({ "const": { "type": "usize", "value": "4" } })),
			NodeKind::Const {
				type_name: "usize".into(),
				value: "4".into(),
			}
		);
		assert_eq!(
			decode(json!({ "trait": { "isAuto": false, "isUnsafe": true } })),
			NodeKind::Trait {
				is_auto: false,
				is_unsafe: true,
			}
		);
		assert_eq!(
			decode(json!({ "traitAlias": { "generics": "<T>" } })),
			NodeKind::TraitAlias {
				generics: "<T>".into()
			}
		);
		assert_eq!(
			decode(json!({ "macro": { "isMacroRules": true } })),
			NodeKind::Macro {
				is_macro_rules: true
			}
		);
	}

	#[rstest]
	#[case::unrecognized_tag(json!({ "union": { "fields": [] } }))]
	#[case::bare_unknown(json!("unknown"))]
	#[case::bare_garbage(json!("impl"))]
	#[case::two_tags(json!({ "module": { "path": "a" }, "struct": { "fields": [] } }))]
	#[case::number(json!(7))]
	#[case::bad_payload(json!({ "enum": { "variants": "A, B" } }))]
	fn unreadable_kinds_decode_to_unknown(#[case] value: serde_json::Value) {
		assert_eq!(decode(value), NodeKind::Unknown);
	}

	#[test]
	fn bare_known_tag_takes_default_payload() {
		assert_eq!(
			decode(json!("module")),
			NodeKind::Module {
				path: String::new()
			}
		);
	}

	#[test]
	fn tag_matches_variant() {
		let kind = NodeKind::Enum {
			variants: vec!["A".into()],
		};
		assert_eq!(kind.tag(), KindTag::Enum);
		assert_eq!(NodeKind::Unknown.tag(), KindTag::Unknown);
		assert_eq!(KindTag::TraitAlias.to_string(), "traitAlias");
	}
}
