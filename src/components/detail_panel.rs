use leptos::prelude::*;

use crate::detail::{DetailBody, DetailView};
use crate::model::Field;

fn yes_no(flag: bool) -> &'static str {
	if flag { "yes" } else { "no" }
}

fn field_list(title: &'static str, fields: Vec<Field>) -> impl IntoView {
	let items = if fields.is_empty() {
		view! { <p class="detail-empty">"none"</p> }.into_any()
	} else {
		view! {
			<ul class="detail-list">
				{fields
					.into_iter()
					.map(|field| view! { <li><code>{field.name}": "{field.type_name}</code></li> })
					.collect_view()}
			</ul>
		}
		.into_any()
	};
	view! {
		<h3>{title}</h3>
		{items}
	}
}

fn entry(term: &'static str, value: String) -> impl IntoView {
	view! {
		<dt>{term}</dt>
		<dd><code>{value}</code></dd>
	}
}

fn body_view(body: DetailBody) -> AnyView {
	match body {
		DetailBody::Path(path) => view! { <dl>{entry("Path", path)}</dl> }.into_any(),
		DetailBody::Fields(fields) => field_list("Fields", fields).into_any(),
		DetailBody::Variants(variants) => {
			let items = variants
				.into_iter()
				.map(|variant| view! { <li><code>{variant}</code></li> })
				.collect_view();
			view! {
				<h3>"Variants"</h3>
				<ul class="detail-list">{items}</ul>
			}
			.into_any()
		}
		DetailBody::Signature {
			arguments,
			return_type,
		} => view! {
			{field_list("Arguments", arguments)}
			<dl>{entry("Returns", return_type.unwrap_or_else(|| "()".into()))}</dl>
		}
		.into_any(),
		DetailBody::Constant { type_name, value } => view! {
			<dl>
				{entry("Type", type_name)}
				{entry("Value", value)}
			</dl>
		}
		.into_any(),
		DetailBody::Macro { is_macro_rules } => view! {
			<dl>{entry("macro_rules!", yes_no(is_macro_rules).into())}</dl>
		}
		.into_any(),
		DetailBody::Static {
			type_name,
			is_mutable,
		} => view! {
			<dl>
				{entry("Type", type_name)}
				{entry("Mutable", yes_no(is_mutable).into())}
			</dl>
		}
		.into_any(),
		DetailBody::Trait { is_auto, is_unsafe } => view! {
			<dl>
				{entry("Auto", yes_no(is_auto).into())}
				{entry("Unsafe", yes_no(is_unsafe).into())}
			</dl>
		}
		.into_any(),
		DetailBody::Generics(generics) => view! { <dl>{entry("Generics", generics)}</dl> }.into_any(),
		DetailBody::Empty => ().into_any(),
	}
}

fn detail_content(detail: DetailView) -> impl IntoView {
	let DetailView {
		type_label,
		name,
		body,
		documentation,
		source_code,
	} = detail;

	view! {
		<p class="detail-type">{type_label}</p>
		<h2 class="detail-name">{name}</h2>
		{body_view(body)}
		{documentation.map(|doc| view! {
			<section class="detail-docs">
				<h3>"Documentation"</h3>
				<p>{doc}</p>
			</section>
		})}
		{source_code.map(|source| view! {
			<section class="detail-source">
				<h3>"Source"</h3>
				<pre><code>{source}</code></pre>
			</section>
		})}
	}
}

/// Side panel with the kind-specific details of the selected node.
#[component]
pub fn DetailPanel(
	#[prop(into)] detail: Signal<Option<DetailView>>,
	#[prop(into)] visible: Signal<bool>,
	#[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
	view! {
		<Show when=move || visible.get()>
			<aside class="detail-panel">
				<button class="detail-close" title="Close" on:click=move |_| on_close.run(())>
					"×"
				</button>
				{move || match detail.get() {
					Some(detail) => detail_content(detail).into_any(),
					None => {
						view! { <p class="detail-empty">"This node is not part of the loaded graph."</p> }
							.into_any()
					}
				}}
			</aside>
		</Show>
	}
}
