//! Per-node label, tooltip and color.

use crate::model::{KindTag, NodeKind, RawNode};

/// Color for [`KindTag::Unknown`] and anything else without its own hue.
pub const FALLBACK_COLOR: &str = "#7f7f7f";

/// Short text drawn next to the node.
///
/// Containers are named by path, so only the last non-empty `/` segment is
/// shown. Items keep their name verbatim.
pub fn label(node: &RawNode) -> String {
	match &node.kind {
		NodeKind::Workspace { .. } | NodeKind::Package { .. } | NodeKind::Module { .. } => {
			last_segment(&node.name).to_owned()
		}
		NodeKind::Struct { .. }
		| NodeKind::Enum { .. }
		| NodeKind::Function { .. }
		| NodeKind::Const { .. }
		| NodeKind::Macro { .. }
		| NodeKind::Static { .. }
		| NodeKind::Trait { .. }
		| NodeKind::TraitAlias { .. }
		| NodeKind::Type { .. }
		| NodeKind::Unknown => node.name.clone(),
	}
}

/// One-line hover summary of the node.
pub fn tooltip(node: &RawNode) -> String {
	let tag = node.kind.tag();
	match &node.kind {
		NodeKind::Struct { fields } => format!("Struct with {} fields", fields.len()),
		NodeKind::Enum { variants } => format!("Enum with {} variants", variants.len()),
		NodeKind::Function { arguments, .. } => {
			format!("Function with {} arguments", arguments.len())
		}
		NodeKind::Workspace { .. }
		| NodeKind::Package { .. }
		| NodeKind::Module { .. }
		| NodeKind::Const { .. }
		| NodeKind::Macro { .. }
		| NodeKind::Static { .. }
		| NodeKind::Trait { .. }
		| NodeKind::TraitAlias { .. }
		| NodeKind::Type { .. }
		| NodeKind::Unknown => tag.title().to_owned(),
	}
}

/// Fill color for a kind. Depends on the tag only, never on the payload.
pub fn color(tag: KindTag) -> &'static str {
	match tag {
		KindTag::Workspace => "#1f77b4",
		KindTag::Package => "#ff7f0e",
		KindTag::Module => "#2ca02c",
		KindTag::Struct => "#d62728",
		KindTag::Enum => "#9467bd",
		KindTag::Function => "#8c564b",
		KindTag::Const => "#e377c2",
		KindTag::Macro => "#bcbd22",
		KindTag::Static => "#17becf",
		KindTag::Trait => "#aec7e8",
		KindTag::TraitAlias => "#ffbb78",
		KindTag::Type => "#98df8a",
		KindTag::Unknown => FALLBACK_COLOR,
	}
}

fn last_segment(name: &str) -> &str {
	name.rsplit('/')
		.find(|segment| !segment.is_empty())
		.unwrap_or(name)
}
