//! Interactive explorer for a crate's module and item graph.
//!
//! The analyzer backend emits a [`model::RawGraph`]. [`graph::transform`] turns
//! it into a [`graph::RenderGraph`] that the canvas lays out hierarchically;
//! picking a node updates the [`explorer::Explorer`] selection, which drives
//! the [`detail::DetailView`] panel.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

pub mod config;
pub mod detail;
pub mod explorer;
pub mod fetch;
pub mod graph;
pub mod model;
pub mod presentation;
pub mod selection;

mod components;
mod pages;

use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the explorer and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		<Title text="Crate Graph Explorer" />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
