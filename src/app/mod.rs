use crate::components::anchor::{Anchor, AnchorTree};
use crate::config::AnchorConfig;
use crate::models::{parse_toc, LinkTarget, TocEntry};
use crate::state::AnchorState;
use leptos::prelude::*;

const DEMO_TOC: &str = r##"[
    {"href": "#overview", "title": "Overview"},
    {"href": "#registry", "title": "Link registry", "children": [
        {"href": "#registry-register", "title": "Registering"},
        {"href": "#registry-retarget", "title": "Changing targets", "children": [
            {"href": "#registry-retarget-order", "title": "Ordering"}
        ]},
        {"href": "#registry-cleanup", "title": "Cleanup"}
    ]},
    {"href": "#levels", "title": "Levels"},
    {"href": "#external", "title": "External link", "target": "_self"}
]"##;

fn flatten(entries: &[TocEntry], out: &mut Vec<(LinkTarget, String)>) {
    for e in entries {
        out.push((e.href.clone(), e.title.clone()));
        flatten(&e.children, out);
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AnchorConfig::new());

    let state = AnchorState::default();
    let active = state.active;

    let toc = match parse_toc(DEMO_TOC) {
        Ok(toc) => toc,
        Err(e) => {
            return view! { <div class="px-4 py-8 text-xs text-destructive">{e.to_string()}</div> }
                .into_any();
        }
    };

    let mut sections = vec![];
    flatten(&toc, &mut sections);

    view! {
        <div class="flex gap-8 px-4 py-8">
            <aside class="w-56 shrink-0">
                <Anchor state=state>
                    <AnchorTree entries=toc />
                </Anchor>
                <div class="mt-4 text-xs text-muted-foreground">
                    {move || match active.get() {
                        Some(href) => format!("Active: {href}"),
                        None => "Active: none".to_string(),
                    }}
                </div>
            </aside>
            <main class="flex-1">
                {sections
                    .into_iter()
                    .map(|(href, title)| {
                        view! {
                            <section id=href.fragment().to_string() class="min-h-[60vh]">
                                <h2 class="text-lg font-medium">{title}</h2>
                            </section>
                        }
                    })
                    .collect_view()}
            </main>
        </div>
    }
    .into_any()
}
