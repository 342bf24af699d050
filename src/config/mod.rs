use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_CLASS_PREFIX: &str = "t";

/// CSS custom property carrying an item's nesting depth.
pub const LEVEL_VAR: &str = "--level";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AnchorConfig {
    pub class_prefix: String,
}

impl AnchorConfig {
    /// Reads the class prefix from `window.ENV`, falling back to `"t"`.
    pub fn new() -> Self {
        // Accept both `window.ENV.CLASS_PREFIX` and `window.ENV.class_prefix`.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    for key in ["CLASS_PREFIX", "class_prefix"] {
                        if let Ok(value) = js_sys::Reflect::get(&env, &key.into()) {
                            if let Some(prefix) = value.as_string() {
                                return Self::with_prefix(prefix);
                            }
                        }
                    }
                }
            }
        }

        Self::with_prefix(DEFAULT_CLASS_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let prefix = prefix.trim();
        Self {
            class_prefix: if prefix.is_empty() {
                DEFAULT_CLASS_PREFIX.to_string()
            } else {
                prefix.to_string()
            },
        }
    }

    pub fn anchor_class(&self) -> String {
        format!("{}-anchor", self.class_prefix)
    }

    pub fn item_class(&self) -> String {
        format!("{}-anchor__item", self.class_prefix)
    }

    pub fn link_class(&self) -> String {
        format!("{}-anchor__item-link", self.class_prefix)
    }

    pub fn active_class(&self) -> String {
        format!("{}-is-active", self.class_prefix)
    }
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_CLASS_PREFIX)
    }
}
