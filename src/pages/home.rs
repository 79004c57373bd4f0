use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::components::detail_panel::DetailPanel;
use crate::components::graph_canvas::GraphCanvas;
use crate::config::ViewerConfig;
use crate::explorer::Explorer;
use crate::fetch::fetch_graph;
use crate::model::NodeId;

#[derive(Clone, Debug, PartialEq)]
enum LoadStatus {
	Loading,
	Ready,
	Failed(String),
}

/// Default Home Page: fetches the graph and wires canvas, selection and detail panel.
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let config = query.with_untracked(|q| ViewerConfig::from_query(q.get("graph"), q.get("direction")));

	let explorer = RwSignal::new(Explorer::new());
	let status = RwSignal::new(LoadStatus::Loading);

	let url = config.graph_url.clone();
	spawn_local(async move {
		match fetch_graph(&url).await {
			Ok(raw) => {
				explorer.update(|e| e.load(raw));
				status.set(LoadStatus::Ready);
			}
			Err(err) => status.set(LoadStatus::Failed(err.to_string())),
		}
	});

	let render_graph = Memo::new(move |_| explorer.with(|e| e.render_graph().cloned()));
	let selected = Memo::new(move |_| explorer.with(|e| e.selection().selected()));
	let detail = Memo::new(move |_| explorer.with(Explorer::detail));
	let visible = Memo::new(move |_| explorer.with(Explorer::detail_visible));
	let summary = move || {
		explorer.with(|e| {
			e.render_graph()
				.map(|g| format!("{} nodes · {} edges", g.nodes.len(), g.edges.len()))
		})
	};

	let dismiss = move |_: ()| explorer.update(Explorer::dismiss);
	let _escape = window_event_listener(ev::keydown, move |ev| {
		if ev.key() == "Escape" {
			explorer.update(Explorer::dismiss);
		}
	});

	view! {
		<div class="fullscreen-graph">
			<GraphCanvas
				graph=render_graph
				selected=selected
				on_pick=move |id: NodeId| explorer.update(|e| e.pick(id))
				on_dismiss=dismiss
				layout=config.layout
				fullscreen=true
			/>
			<div class="graph-overlay">
				<h1>"Crate Graph"</h1>
				{move || match status.get() {
					LoadStatus::Loading => view! { <p class="subtitle">"Loading graph…"</p> }.into_any(),
					LoadStatus::Ready => view! { <p class="subtitle">{summary}</p> }.into_any(),
					LoadStatus::Failed(message) => {
						view! { <p class="error-banner">"Could not load graph: "{message}</p> }.into_any()
					}
				}}
				<p class="subtitle">"Click a node for details. Scroll to zoom. Drag background to pan."</p>
			</div>
			<DetailPanel detail=detail visible=visible on_close=dismiss />
		</div>
	}
}
