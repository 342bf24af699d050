use crate::models::{LinkClick, LinkTarget};
use leptos::prelude::*;
use std::sync::Arc;

/// What a link node needs from whoever owns the link registry.
///
/// Registry calls have no error channel: `register_link` is idempotent and
/// `unregister_link` of an unknown target is a no-op.
pub trait AnchorController {
    fn register_link(&self, href: &LinkTarget);
    fn unregister_link(&self, href: &LinkTarget);
    fn handle_link_click(&self, click: LinkClick);
    fn active(&self) -> Option<LinkTarget>;
}

/// Controller handed down to every link of a tree through context.
#[derive(Clone)]
pub struct AnchorContext(pub Arc<dyn AnchorController + Send + Sync>);

impl AnchorContext {
    pub fn new(controller: impl AnchorController + Send + Sync + 'static) -> Self {
        Self(Arc::new(controller))
    }
}

/// Level an item created in the current scope takes. Root items are 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorLevel(pub u32);

impl Default for AnchorLevel {
    fn default() -> Self {
        Self(1)
    }
}

impl AnchorLevel {
    pub fn child(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Level for an item being constructed in the current reactive scope.
pub fn current_level() -> u32 {
    use_context::<AnchorLevel>().unwrap_or_default().0
}

pub fn is_active(controller: Option<&AnchorContext>, href: Option<&LinkTarget>) -> bool {
    match (controller, href) {
        (Some(controller), Some(href)) => controller.0.active().as_ref() == Some(href),
        _ => false,
    }
}

/// Registry membership of a single link node.
///
/// Holds the target the node is currently registered under. Every
/// registration, the first one included, goes through [`retarget`], which
/// unregisters the previous target before registering the next one.
/// Without a controller every call is a no-op.
///
/// [`retarget`]: LinkRegistration::retarget
pub struct LinkRegistration {
    controller: Option<AnchorContext>,
    current: Option<LinkTarget>,
}

impl LinkRegistration {
    pub fn new(controller: Option<AnchorContext>) -> Self {
        Self {
            controller,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&LinkTarget> {
        self.current.as_ref()
    }

    pub fn retarget(&mut self, next: Option<LinkTarget>) {
        self.release();
        if let (Some(controller), Some(next)) = (&self.controller, &next) {
            controller.0.register_link(next);
        }
        self.current = next;
    }

    /// Unregister the current target, if any. Safe to call more than once.
    pub fn release(&mut self) {
        let Some(current) = self.current.take() else {
            return;
        };
        if let Some(controller) = &self.controller {
            controller.0.unregister_link(&current);
        }
    }

    pub fn is_active(&self) -> bool {
        is_active(self.controller.as_ref(), self.current.as_ref())
    }

    /// Forward a click to the controller. Returns `false` when nothing was forwarded.
    pub fn click(&self, title: Option<String>, event: Option<web_sys::MouseEvent>) -> bool {
        let (Some(controller), Some(href)) = (&self.controller, &self.current) else {
            return false;
        };
        controller.0.handle_link_click(LinkClick {
            href: href.clone(),
            title,
            event,
        });
        true
    }
}

/// Signal-backed controller used by the `Anchor` container.
///
/// It keeps the registered links in registration order and tracks the
/// active one; it does not scroll or watch the viewport. Anything that
/// knows which section is in view reports it with [`AnchorState::set_active`].
#[derive(Clone)]
pub struct AnchorState {
    pub links: RwSignal<Vec<LinkTarget>>,
    pub active: RwSignal<Option<LinkTarget>>,
    on_click: Option<Callback<LinkClick>>,
    on_change: Option<Callback<Option<LinkTarget>>>,
}

impl AnchorState {
    pub fn new(
        on_click: Option<Callback<LinkClick>>,
        on_change: Option<Callback<Option<LinkTarget>>>,
    ) -> Self {
        Self {
            links: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            on_click,
            on_change,
        }
    }

    pub fn contains(&self, href: &LinkTarget) -> bool {
        self.links.with_untracked(|links| links.contains(href))
    }

    pub fn set_active(&self, next: Option<LinkTarget>) {
        if self.active.with_untracked(|active| *active == next) {
            return;
        }
        self.active.set(next.clone());
        if let Some(on_change) = &self.on_change {
            on_change.run(next);
        }
    }
}

impl Default for AnchorState {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl AnchorController for AnchorState {
    fn register_link(&self, href: &LinkTarget) {
        if self.contains(href) {
            return;
        }
        self.links.update(|links| links.push(href.clone()));
    }

    fn unregister_link(&self, href: &LinkTarget) {
        if !self.contains(href) {
            return;
        }
        self.links.update(|links| links.retain(|l| l != href));
        if self.active.with_untracked(|active| active.as_ref() == Some(href)) {
            self.set_active(None);
        }
    }

    fn handle_link_click(&self, click: LinkClick) {
        let href = click.href.clone();
        if let Some(on_click) = &self.on_click {
            on_click.run(click);
        }
        self.set_active(Some(href));
    }

    fn active(&self) -> Option<LinkTarget> {
        self.active.get()
    }
}
