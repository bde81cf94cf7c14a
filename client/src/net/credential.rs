//! Host-provided credential selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! When the site runs inside an AI Studio frame, the host page exposes a
//! `window.aistudio` object with `hasSelectedApiKey()` and `openSelectKey()`,
//! both returning promises. Outside that frame the object is missing and
//! [`AiStudioHost::detect`] returns `None`.

/// Credential host seam. Implemented by the browser host and by test fakes.
#[allow(async_fn_in_trait)]
pub trait CredentialHost {
    /// Whether a usable key is currently selected.
    async fn has_selected_key(&self) -> bool;

    /// Prompt the user to select a key. Completion says nothing about the
    /// outcome.
    async fn open_select_key(&self);
}

/// Handle to `window.aistudio`.
pub struct AiStudioHost {
    #[cfg(feature = "hydrate")]
    handle: wasm_bindgen::JsValue,
}

impl AiStudioHost {
    /// Capability-detect the host object. Always `None` during SSR.
    #[must_use]
    pub fn detect() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            let handle = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("aistudio")).ok()?;
            if handle.is_undefined() || handle.is_null() {
                return None;
            }
            Some(Self { handle })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    #[cfg(feature = "hydrate")]
    async fn call(&self, method: &str) -> Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast as _;

        let func: js_sys::Function =
            js_sys::Reflect::get(&self.handle, &wasm_bindgen::JsValue::from_str(method))?.dyn_into()?;
        let returned = func.call0(&self.handle)?;
        wasm_bindgen_futures::JsFuture::from(js_sys::Promise::resolve(&returned)).await
    }
}

impl CredentialHost for AiStudioHost {
    async fn has_selected_key(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            match self.call("hasSelectedApiKey").await {
                Ok(value) => value.as_bool().unwrap_or(false),
                Err(e) => {
                    log::warn!("hasSelectedApiKey failed: {e:?}");
                    false
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    async fn open_select_key(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Err(e) = self.call("openSelectKey").await {
                log::warn!("openSelectKey failed: {e:?}");
            }
        }
    }
}
