use crate::components::hooks::use_level_var::use_level_var;
use crate::config::AnchorConfig;
use crate::models::LinkTarget;
use crate::state::{current_level, is_active, AnchorContext, AnchorLevel, LinkRegistration};
use leptos::context::Provider;
use leptos::html;
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Title of an anchor link: a literal string or a render function.
#[derive(Clone)]
pub enum AnchorTitle {
    Text(String),
    Render(ViewFn),
}

impl AnchorTitle {
    pub fn render<F, V>(f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: IntoView + 'static,
    {
        Self::Render(ViewFn::from(f))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Render(_) => None,
        }
    }
}

impl From<&str> for AnchorTitle {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnchorTitle {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Title content supplied by the caller as markup.
#[slot]
pub struct LinkTitle {
    children: ChildrenFn,
}

pub(crate) enum TitleSource<'a, S> {
    Text(&'a str),
    Render(&'a ViewFn),
    Slot(&'a S),
    Empty,
}

/// Pick the one title source to show: string, then render function, then slot.
pub(crate) fn resolve_title<'a, S>(
    title: Option<&'a AnchorTitle>,
    slot: Option<&'a S>,
) -> TitleSource<'a, S> {
    match (title, slot) {
        (Some(AnchorTitle::Text(s)), _) => TitleSource::Text(s),
        (Some(AnchorTitle::Render(f)), _) => TitleSource::Render(f),
        (None, Some(slot)) => TitleSource::Slot(slot),
        (None, None) => TitleSource::Empty,
    }
}

/// One entry of an anchor tree.
///
/// Registers `href` with the enclosing [`AnchorContext`] on creation,
/// re-registers when `href` changes and unregisters on cleanup. Items nested
/// in `children` are one level deeper.
#[component]
pub fn AnchorItem(
    #[prop(into)] href: Signal<String>,
    #[prop(optional, into)] title: Option<AnchorTitle>,
    #[prop(optional)] link_title: Option<LinkTitle>,
    /// Forwarded to the `<a target>` attribute, e.g. `_blank`.
    #[prop(into, optional)]
    target: MaybeProp<String>,
    #[prop(into, optional)] class: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let initial = match LinkTarget::parse(&href.get_untracked()) {
        Ok(t) => t,
        Err(e) => {
            leptos::logging::error!("AnchorItem rejected: {e}");
            return ().into_any();
        }
    };

    let controller = use_context::<AnchorContext>();
    let config = use_context::<AnchorConfig>().unwrap_or_default();
    let level = current_level();

    let current: RwSignal<Option<LinkTarget>> = RwSignal::new(Some(initial.clone()));
    let registration = StoredValue::new(LinkRegistration::new(controller.clone()));
    registration.update_value(|reg| reg.retarget(Some(initial)));

    // Later href changes go through the same path as the first registration.
    Effect::new(move |prev: Option<String>| {
        let raw = href.get();
        let first_run = prev.is_none();
        let unchanged =
            current.with_untracked(|c| c.as_ref().map(LinkTarget::as_str) == Some(raw.as_str()));
        if first_run && unchanged {
            return raw;
        }

        let next = match LinkTarget::parse(&raw) {
            Ok(t) => Some(t),
            Err(e) => {
                leptos::logging::error!("AnchorItem target change rejected: {e}");
                None
            }
        };
        registration.update_value(|reg| reg.retarget(next.clone()));
        current.set(next);
        raw
    });

    on_cleanup(move || {
        registration.try_update_value(|reg| reg.release());
    });

    let title_text = title.as_ref().and_then(AnchorTitle::as_text).map(str::to_string);
    let title_view = match resolve_title(title.as_ref(), link_title.as_ref().map(|s| &s.children)) {
        TitleSource::Text(s) => s.to_string().into_any(),
        TitleSource::Render(f) => f.run(),
        TitleSource::Slot(children) => children(),
        TitleSource::Empty => ().into_any(),
    };

    let title_for_click = title_text.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        let forwarded = registration
            .try_with_value(|reg| reg.click(title_for_click.clone(), Some(ev)))
            .unwrap_or(false);
        if !forwarded {
            leptos::logging::debug_warn!("AnchorItem click not forwarded: no controller in scope");
        }
    };

    let item_class = config.item_class();
    let active_class = config.active_class();
    let link_class = config.link_class();
    let wrapper_class = move || {
        let active = current.with(|c| is_active(controller.as_ref(), c.as_ref()));
        if active {
            tw_merge!(&item_class, &active_class, &class)
        } else {
            tw_merge!(&item_class, &class)
        }
    };

    let wrapper_ref: NodeRef<html::Div> = NodeRef::new();
    use_level_var(wrapper_ref, level);

    // Children get their own scope so the level does not leak to siblings.
    let nested = children.map(|children| {
        view! { <Provider value=AnchorLevel(level).child()>{children()}</Provider> }
    });

    view! {
        <div data-name="AnchorItem" class=wrapper_class node_ref=wrapper_ref>
            <a
                href=move || current.get().map(String::from)
                title=title_text
                class=link_class
                target=move || target.get()
                on:click=on_click
            >
                {title_view}
            </a>
        </div>
        {nested}
    }
    .into_any()
}
