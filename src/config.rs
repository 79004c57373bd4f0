//! Viewer configuration: where to fetch the graph and how to lay it out.

use std::fmt;
use std::str::FromStr;

use log::warn;

/// Default graph location, the file the analyzer writes.
pub const DEFAULT_GRAPH_URL: &str = "crate_graph.json";

/// Axis along which hierarchy levels advance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutDirection {
	/// Roots on top, children below.
	#[default]
	UpDown,
	/// Roots at the bottom.
	DownUp,
	/// Roots on the left.
	LeftRight,
	/// Roots on the right.
	RightLeft,
}

impl LayoutDirection {
	/// Short code, as accepted by [`FromStr`].
	pub fn as_str(self) -> &'static str {
		match self {
			Self::UpDown => "UD",
			Self::DownUp => "DU",
			Self::LeftRight => "LR",
			Self::RightLeft => "RL",
		}
	}
}

impl fmt::Display for LayoutDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Returned for a direction code other than `UD`, `DU`, `LR` or `RL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLayoutDirectionError(String);

impl fmt::Display for ParseLayoutDirectionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "invalid layout direction `{}` (expected UD|DU|LR|RL)", self.0)
	}
}

impl std::error::Error for ParseLayoutDirectionError {}

impl FromStr for LayoutDirection {
	type Err = ParseLayoutDirectionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_uppercase().as_str() {
			"UD" => Ok(Self::UpDown),
			"DU" => Ok(Self::DownUp),
			"LR" => Ok(Self::LeftRight),
			"RL" => Ok(Self::RightLeft),
			_ => Err(ParseLayoutDirectionError(s.to_owned())),
		}
	}
}

/// Hierarchical layout parameters. There is no physics: positions follow
/// from the hierarchy alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
	/// Direction levels advance in.
	pub direction: LayoutDirection,
	/// Distance between consecutive levels.
	pub level_separation: f64,
	/// Distance between neighbors within a level.
	pub node_spacing: f64,
}

impl Default for LayoutOptions {
	fn default() -> Self {
		Self {
			direction: LayoutDirection::UpDown,
			level_separation: 150.0,
			node_spacing: 100.0,
		}
	}
}

/// Everything the host shell needs to start.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
	/// URL of the graph document.
	pub graph_url: String,
	/// Layout parameters.
	pub layout: LayoutOptions,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			graph_url: DEFAULT_GRAPH_URL.to_owned(),
			layout: LayoutOptions::default(),
		}
	}
}

impl ViewerConfig {
	/// Defaults with the page's `graph` and `direction` query values applied.
	/// An unparseable direction is logged and ignored.
	pub fn from_query(graph: Option<String>, direction: Option<String>) -> Self {
		let mut config = Self::default();
		if let Some(url) = graph.filter(|url| !url.trim().is_empty()) {
			config.graph_url = url;
		}
		if let Some(code) = direction {
			match code.parse() {
				Ok(direction) => config.layout.direction = direction,
				Err(err) => warn!("{err}; keeping {}", config.layout.direction),
			}
		}
		config
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::{DEFAULT_GRAPH_URL, LayoutDirection, ViewerConfig};

	#[rstest]
	#[case("UD", LayoutDirection::UpDown)]
	#[case("du", LayoutDirection::DownUp)]
	#[case(" LR ", LayoutDirection::LeftRight)]
	#[case("rl", LayoutDirection::RightLeft)]
	fn parses_direction_codes(#[case] code: &str, #[case] expected: LayoutDirection) {
		assert_eq!(code.parse::<LayoutDirection>(), Ok(expected));
	}

	#[test]
	fn rejects_unknown_direction() {
		let err = "sideways".parse::<LayoutDirection>().unwrap_err();
		assert_eq!(
			err.to_string(),
			"invalid layout direction `sideways` (expected UD|DU|LR|RL)"
		);
	}

	#[test]
	fn query_overrides_defaults() {
		let config = ViewerConfig::from_query(Some("/api/graph".into()), Some("LR".into()));
		assert_eq!(config.graph_url, "/api/graph");
		assert_eq!(config.layout.direction, LayoutDirection::LeftRight);
	}

	#[test]
	fn bad_query_values_keep_defaults() {
		let config = ViewerConfig::from_query(Some("  ".into()), Some("XX".into()));
		assert_eq!(config, ViewerConfig::default());
		assert_eq!(config.graph_url, DEFAULT_GRAPH_URL);
	}
}
