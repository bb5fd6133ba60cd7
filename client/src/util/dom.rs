//! Imperative DOM helpers the reactive view can't express.

/// Move keyboard focus to the element with `id`, if it exists.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn focus(id: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::debug!("focus target #{id} not in document");
            return;
        };
        match element.dyn_into::<web_sys::HtmlElement>() {
            Ok(element) => {
                if let Err(e) = element.focus() {
                    log::warn!("focusing #{id} failed: {e:?}");
                }
            }
            Err(_) => log::debug!("#{id} is not focusable"),
        }
    }
}
