pub mod item;

pub use item::*;

use crate::config::AnchorConfig;
use crate::models::{LinkClick, LinkTarget, TocEntry};
use crate::state::{AnchorContext, AnchorLevel, AnchorState};
use leptos::context::Provider;
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Container that owns the link registry for the items below it.
///
/// Pass `state` to share an [`AnchorState`] with code outside the tree (for
/// example a scroll tracker calling `set_active`); otherwise one is created.
#[component]
pub fn Anchor(
    #[prop(optional)] state: Option<AnchorState>,
    #[prop(optional)] config: Option<AnchorConfig>,
    #[prop(optional)] on_click: Option<Callback<LinkClick>>,
    #[prop(optional)] on_change: Option<Callback<Option<LinkTarget>>>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let state = state.unwrap_or_else(|| AnchorState::new(on_click, on_change));
    let config = config
        .or_else(use_context::<AnchorConfig>)
        .unwrap_or_default();
    let merged_class = tw_merge!(config.anchor_class(), class);

    // Provided in a child scope; siblings of the container never see them.
    view! {
        <div data-name="Anchor" class=merged_class>
            <Provider value=config>
                <Provider value=AnchorContext::new(state)>
                    <Provider value=AnchorLevel::default()>{children()}</Provider>
                </Provider>
            </Provider>
        </div>
    }
}

/// Renders a table of contents as nested [`AnchorItem`]s.
#[component]
pub fn AnchorTree(#[prop(into)] entries: Vec<TocEntry>) -> impl IntoView {
    entries
        .into_iter()
        .map(|entry| view! { <TocNode entry=entry /> })
        .collect_view()
}

#[component]
fn TocNode(entry: TocEntry) -> AnyView {
    let TocEntry {
        href,
        title,
        target,
        children,
    } = entry;

    view! {
        <AnchorItem href=String::from(href) title=title target=target>
            {children
                .into_iter()
                .map(|child| view! { <TocNode entry=child /> })
                .collect_view()}
        </AnchorItem>
    }
    .into_any()
}
