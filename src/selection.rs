//! Single-node selection driving the detail panel.

use log::debug;

use crate::model::NodeId;

/// Which node, if any, the detail panel is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
	/// Nothing selected; the panel is hidden.
	#[default]
	Idle,
	/// A node is selected; the panel is shown.
	Selected(NodeId),
}

impl Selection {
	/// Selects `id`, replacing any previous selection, including `id` itself.
	pub fn pick(&mut self, id: NodeId) {
		debug!("selection: {self:?} -> Selected({id})");
		*self = Self::Selected(id);
	}

	/// Clears the selection. A no-op when already idle.
	pub fn dismiss(&mut self) {
		if let Self::Selected(id) = *self {
			debug!("selection: Selected({id}) dismissed");
		}
		*self = Self::Idle;
	}

	/// Clears the selection because a new graph replaced the old one.
	pub fn reload(&mut self) {
		if let Self::Selected(id) = *self {
			debug!("selection: Selected({id}) dropped on reload");
		}
		*self = Self::Idle;
	}

	/// The selected id, if any.
	pub fn selected(&self) -> Option<NodeId> {
		match *self {
			Self::Idle => None,
			Self::Selected(id) => Some(id),
		}
	}

	/// Whether the detail panel should be visible.
	pub fn detail_visible(&self) -> bool {
		matches!(self, Self::Selected(_))
	}
}
