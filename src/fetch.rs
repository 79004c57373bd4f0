//! Fetching the graph document from the backend.

use log::error;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::model::RawGraph;

/// Why the graph could not be obtained.
#[derive(Debug, Error)]
pub enum FetchError {
	/// No browser window to fetch from.
	#[error("no browser window available")]
	NoWindow,
	/// The request itself failed (network, CORS, ...).
	#[error("request to {url} failed: {reason}")]
	Transport {
		/// Requested URL.
		url: String,
		/// Browser-reported reason.
		reason: String,
	},
	/// The server answered with a non-success status.
	#[error("{url} answered HTTP {status}")]
	Status {
		/// Requested URL.
		url: String,
		/// HTTP status code.
		status: u16,
	},
	/// The response body could not be read as text.
	#[error("could not read response body: {0}")]
	Body(String),
	/// The body is not a graph document.
	#[error("invalid graph document: {0}")]
	Decode(#[from] serde_json::Error),
}

fn describe(value: &JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// GETs `url` and decodes it as a [`RawGraph`].
pub async fn fetch_graph(url: &str) -> Result<RawGraph, FetchError> {
	let result = fetch_text(url).await.and_then(|text| Ok(RawGraph::from_json(&text)?));
	if let Err(err) = &result {
		error!("failed to load graph: {err}");
	}
	result
}

async fn fetch_text(url: &str) -> Result<String, FetchError> {
	let window = web_sys::window().ok_or(FetchError::NoWindow)?;
	let transport = |err: JsValue| FetchError::Transport {
		url: url.to_owned(),
		reason: describe(&err),
	};

	let response: Response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(transport)?
		.dyn_into()
		.map_err(transport)?;
	if !response.ok() {
		return Err(FetchError::Status {
			url: url.to_owned(),
			status: response.status(),
		});
	}

	let body = response.text().map_err(|err| FetchError::Body(describe(&err)))?;
	JsFuture::from(body)
		.await
		.map_err(|err| FetchError::Body(describe(&err)))?
		.as_string()
		.ok_or_else(|| FetchError::Body("body is not text".into()))
}

#[cfg(test)]
mod tests {
	use super::FetchError;
	use crate::model::RawGraph;

	#[test]
	fn messages_name_the_failure() {
		let status = FetchError::Status {
			url: "crate_graph.json".into(),
			status: 404,
		};
		assert_eq!(status.to_string(), "crate_graph.json answered HTTP 404");

		let decode: FetchError = RawGraph::from_json("{").unwrap_err().into();
		assert!(decode.to_string().starts_with("invalid graph document: "));
	}
}
