use crate::config::LEVEL_VAR;
use leptos::html;
use leptos::prelude::*;

/// Set the `--level` custom property on `node_ref` once the element exists.
///
/// Runs after mount, at most once. If the owning view is torn down before the
/// element shows up, the effect is disposed with it and nothing is touched.
pub fn use_level_var(node_ref: NodeRef<html::Div>, level: u32) {
    Effect::new(move |applied: Option<bool>| {
        if applied == Some(true) {
            return true;
        }
        let Some(el) = node_ref.get() else {
            return false;
        };
        let style = web_sys::HtmlElement::style(&el);
        if let Err(e) = style.set_property(LEVEL_VAR, &level.to_string()) {
            leptos::logging::debug_warn!("failed to set {LEVEL_VAR}: {e:?}");
        }
        true
    });
}
