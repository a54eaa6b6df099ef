use super::*;

/// Browser-history-backed navigation context. Stateless: the browser owns
/// the location; this type just narrows the History API to the dispatcher's
/// capability set.
pub(super) struct BrowserNavigation;

impl NavigationContext for BrowserNavigation {
    fn location(&self) -> String {
        current_location()
    }

    fn push(&mut self, path: &str) {
        push_location_to_browser_history(path);
    }

    fn replace(&mut self, path: &str) {
        replace_location_in_browser_history(path);
    }
}

pub(super) fn push_location_to_browser_history(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    if current_location() == path {
        return;
    }
    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
}

pub(super) fn replace_location_in_browser_history(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    if current_location() == path {
        return;
    }
    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
}

pub(super) fn apply_route_transition(path: &str, push_history: bool) {
    if push_history {
        push_location_to_browser_history(path);
    } else {
        replace_location_in_browser_history(path);
    }
    if let Err(error) = render_active_view() {
        web_sys::console::error_1(&format!("route transition failed: {error}").into());
    }
}

pub(super) fn install_browser_navigation_handlers() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    ROUTE_POPSTATE_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            // The browser already moved the location; re-dispatch only.
            if let Err(error) = render_active_view() {
                web_sys::console::error_1(&format!("popstate dispatch failed: {error}").into());
            }
        }));
        let _ =
            window.add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });

    ROUTE_LINK_CLICK_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |event| {
            intercept_internal_link_click(event);
        }));
        let _ = document.add_event_listener_with_callback_and_bool(
            "click",
            callback.as_ref().unchecked_ref(),
            true,
        );
        *slot.borrow_mut() = Some(callback);
    });
}

pub(super) fn intercept_internal_link_click(event: web_sys::Event) {
    if event.default_prevented() {
        return;
    }
    let Some(mouse_event) = event.dyn_ref::<MouseEvent>() else {
        return;
    };
    if mouse_event.button() != 0
        || mouse_event.meta_key()
        || mouse_event.ctrl_key()
        || mouse_event.shift_key()
        || mouse_event.alt_key()
    {
        return;
    }

    let Some(anchor) = anchor_from_event(&event) else {
        return;
    };
    let href_attribute = anchor.get_attribute("href").unwrap_or_default();
    if href_attribute.trim().is_empty() || href_attribute.starts_with('#') {
        return;
    }
    if anchor.has_attribute("download") {
        return;
    }
    let target = anchor.target();
    if !target.is_empty() && target != "_self" {
        return;
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(origin) = window.location().origin() else {
        return;
    };

    let href = anchor.href();
    if href.is_empty() {
        return;
    }

    let path_with_query_and_hash = if href.starts_with(&origin) {
        href.strip_prefix(&origin).unwrap_or_default().to_string()
    } else if href.starts_with('/') {
        href
    } else {
        return;
    };

    let without_hash = path_with_query_and_hash
        .split('#')
        .next()
        .unwrap_or_default();
    let path = without_hash.split('?').next().unwrap_or_default();
    if path.is_empty() || !crate::routes::is_internal_shell_path(path) {
        return;
    }

    event.prevent_default();
    apply_route_transition(without_hash, true);
}

pub(super) fn anchor_from_event(event: &web_sys::Event) -> Option<HtmlAnchorElement> {
    let composed_path = event.composed_path();
    for index in 0..composed_path.length() {
        let value = composed_path.get(index);
        if let Ok(anchor) = value.dyn_into::<HtmlAnchorElement>() {
            return Some(anchor);
        }
    }
    None
}
