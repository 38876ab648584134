//! Thin browser-global accessors.
//!
//! Everything here degrades to `None` (or a no-op) outside a browser so
//! native test runs exercise the same call sites without a DOM.

use web_sys::{Document, Storage, Window};

/// Retrieve the global `window` object, if one exists.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Access the browser `localStorage` handle. `None` when the window is
/// missing or storage access is denied.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying
/// JavaScript promise rejects.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), wasm_bindgen::JsValue> {
    use js_sys::{Function, Promise};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;

    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_globals_are_absent_off_wasm() {
        assert!(window().is_none());
        assert!(document().is_none());
        assert!(local_storage().is_none());
    }
}
