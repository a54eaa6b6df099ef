use super::*;

use spanview_client_core::{ScriptError, ScriptProcessor};

/// Operator script processor backed by the document. Discovery reads the
/// `__SPANVIEW_CONFIG_SCRIPTS__` window global (an array of url strings, set
/// by the hosting page); execution injects one deferred script tag per url.
#[derive(Default)]
pub(super) struct DomScriptProcessor;

impl ScriptProcessor for DomScriptProcessor {
    fn process_scripts(&mut self) -> Result<(), ScriptError> {
        let urls = configured_script_urls();
        if urls.is_empty() {
            return Ok(());
        }
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ScriptError::Discovery("document is unavailable".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| ScriptError::Discovery("document body is unavailable".to_string()))?;
        for url in urls {
            let element = document.create_element("script").map_err(|_| {
                ScriptError::Injection {
                    url: url.clone(),
                    reason: "failed to create script element".to_string(),
                }
            })?;
            let script: web_sys::HtmlScriptElement =
                element.dyn_into().map_err(|_| ScriptError::Injection {
                    url: url.clone(),
                    reason: "script element has the wrong type".to_string(),
                })?;
            script.set_src(&url);
            script.set_defer(true);
            body.append_child(&script)
                .map_err(|_| ScriptError::Injection {
                    url: url.clone(),
                    reason: "failed to append script element".to_string(),
                })?;
        }
        Ok(())
    }
}

fn configured_script_urls() -> Vec<String> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_SCRIPTS_GLOBAL))
    else {
        return Vec::new();
    };
    if value.is_undefined() || value.is_null() {
        return Vec::new();
    }
    let Ok(array) = value.dyn_into::<js_sys::Array>() else {
        return Vec::new();
    };
    array
        .iter()
        .filter_map(|entry| entry.as_string())
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect()
}
