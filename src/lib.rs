mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod state;

pub use crate::app::App;
pub use crate::components::anchor::{Anchor, AnchorItem, AnchorTitle, AnchorTree, LinkTitle};
pub use crate::config::AnchorConfig;
pub use crate::models::{parse_toc, LinkClick, LinkTarget, TargetError, TargetErrorKind, TocEntry};
pub use crate::state::{AnchorContext, AnchorController, AnchorLevel, AnchorState, LinkRegistration};

use leptos::prelude::*;

// The demo app mounts itself when the wasm module starts.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Mounted-tree tests: registry membership, clicks, href changes and the `--level`
// variable need a real DOM, so they only build for wasm32 and run in a browser.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use leptos::mount::mount_to;
    use leptos::reactive::owner::Owner;
    use leptos::task::Executor;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> web_sys::HtmlElement {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document should exist");
        let el = document.create_element("div").expect("should create div");
        document
            .body()
            .expect("body should exist")
            .append_child(&el)
            .expect("should append container");
        el.unchecked_into()
    }

    fn target(s: &str) -> LinkTarget {
        LinkTarget::parse(s).expect("valid target")
    }

    /// Let scheduled effects run.
    async fn flush() {
        for _ in 0..3 {
            Executor::tick().await;
        }
    }

    #[wasm_bindgen_test]
    async fn test_level_var_set_on_mounted_wrappers() {
        let _ = Executor::init_wasm_bindgen();
        let root = container();
        let _handle = mount_to(root.clone(), || {
            view! {
                <Anchor>
                    <AnchorItem href="#l1" title="L1">
                        <AnchorItem href="#l2" title="L2">
                            <AnchorItem href="#l3" title="L3" />
                        </AnchorItem>
                    </AnchorItem>
                    <AnchorItem href="#m1" title="M1" />
                </Anchor>
            }
        });
        flush().await;

        let items = root
            .query_selector_all("[data-name='AnchorItem']")
            .expect("selector should be valid");
        let mut levels = vec![];
        for i in 0..items.length() {
            let el: web_sys::HtmlElement = items
                .item(i)
                .expect("item should exist")
                .unchecked_into();
            let value = web_sys::HtmlElement::style(&el)
                .get_property_value("--level")
                .expect("style should be readable");
            levels.push(value);
        }
        assert_eq!(levels, vec!["1", "2", "3", "1"]);
    }

    #[wasm_bindgen_test]
    async fn test_href_change_swaps_registration() {
        let _ = Executor::init_wasm_bindgen();
        let owner = Owner::new();
        let (state, href) =
            owner.with(|| (AnchorState::default(), RwSignal::new("#old".to_string())));
        let root = container();

        let state_for_view = state.clone();
        let _handle = mount_to(root.clone(), move || {
            view! {
                <Anchor state=state_for_view>
                    <AnchorItem href=href title="Moving" />
                </Anchor>
            }
        });
        assert_eq!(state.links.get_untracked(), vec![target("#old")]);

        href.set("#new".to_string());
        flush().await;

        assert_eq!(state.links.get_untracked(), vec![target("#new")]);
        let link = root
            .query_selector("a")
            .expect("selector should be valid")
            .expect("link should be rendered");
        assert_eq!(link.get_attribute("href").as_deref(), Some("#new"));
    }

    #[wasm_bindgen_test]
    fn test_mounted_tree_registers_and_unregisters() {
        let owner = Owner::new();
        let state = owner.with(AnchorState::default);
        let root = container();

        let state_for_view = state.clone();
        let handle = mount_to(root.clone(), move || {
            view! {
                <Anchor state=state_for_view>
                    <AnchorItem href="#intro" title="Intro">
                        <AnchorItem href="#intro-details" title="Details" />
                    </AnchorItem>
                    <AnchorItem href="#usage" title="Usage" />
                </Anchor>
            }
        });

        assert_eq!(
            state.links.get_untracked(),
            vec![target("#intro"), target("#intro-details"), target("#usage")]
        );
        let items = root
            .query_selector_all("[data-name='AnchorItem']")
            .expect("selector should be valid");
        assert_eq!(items.length(), 3);

        drop(handle);
        assert!(state.links.get_untracked().is_empty());
    }

    #[wasm_bindgen_test]
    fn test_click_forwards_to_controller() {
        let owner = Owner::new();
        let clicks: RwSignal<Vec<(String, Option<String>)>> = owner.with(|| RwSignal::new(vec![]));
        let root = container();

        let _handle = mount_to(root.clone(), move || {
            let on_click = Callback::new(move |c: LinkClick| {
                clicks.update(|v| v.push((c.href.to_string(), c.title)));
            });
            view! {
                <Anchor on_click=on_click>
                    <AnchorItem href="#intro" title="Intro" />
                    <AnchorItem href="#computed" title=AnchorTitle::render(|| "Computed") />
                </Anchor>
            }
        });

        for selector in ["a[href='#intro']", "a[href='#computed']"] {
            let link: web_sys::HtmlElement = root
                .query_selector(selector)
                .expect("selector should be valid")
                .expect("link should be rendered")
                .unchecked_into();
            link.click();
        }

        assert_eq!(
            clicks.get_untracked(),
            vec![
                ("#intro".to_string(), Some("Intro".to_string())),
                ("#computed".to_string(), None),
            ]
        );
    }

    #[wasm_bindgen_test]
    fn test_malformed_target_renders_nothing() {
        let owner = Owner::new();
        let state = owner.with(AnchorState::default);
        let root = container();

        let state_for_view = state.clone();
        let _handle = mount_to(root.clone(), move || {
            view! {
                <Anchor state=state_for_view>
                    <AnchorItem href="section-1" title="Section 1" />
                </Anchor>
            }
        });

        assert!(state.links.get_untracked().is_empty());
        assert!(root
            .query_selector("a")
            .expect("selector should be valid")
            .is_none());
    }

    #[wasm_bindgen_test]
    fn test_item_outside_anchor_still_renders() {
        let root = container();
        let _handle = mount_to(root.clone(), move || {
            view! { <AnchorItem href="#lonely" title="Lonely" /> }
        });

        let link = root
            .query_selector("a[href='#lonely']")
            .expect("selector should be valid");
        assert!(link.is_some());
    }
}

// Skipped under test: wasm-bindgen-test provides its own entry point.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
