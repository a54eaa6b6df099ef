use super::*;

fn create_element(
    document: &web_sys::Document,
    tag: &str,
) -> Result<web_sys::Element, String> {
    document
        .create_element(tag)
        .map_err(|_| format!("failed to create {tag} element"))
}

/// Builds the page frame once: status line, header with title and nav links,
/// the view mount point, and the footer. Re-entrant so a second boot attempt
/// reuses existing elements.
pub(super) fn ensure_shell_dom() -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    let document = window
        .document()
        .ok_or_else(|| "document is unavailable".to_string())?;
    let body = document
        .body()
        .ok_or_else(|| "document body is unavailable".to_string())?;

    let status = match document.get_element_by_id(SHELL_STATUS_ID) {
        Some(existing) => existing
            .dyn_into::<HtmlElement>()
            .map_err(|_| "status element exists but is not HtmlElement".to_string())?,
        None => {
            let element = create_element(&document, "div")?;
            element.set_id(SHELL_STATUS_ID);
            let status = element
                .dyn_into::<HtmlElement>()
                .map_err(|_| "status element is not HtmlElement".to_string())?;
            let _ = status.style().set_property("position", "fixed");
            let _ = status.style().set_property("top", "12px");
            let _ = status.style().set_property("right", "12px");
            let _ = status.style().set_property("font-family", "monospace");
            let _ = status.style().set_property("font-size", "12px");
            let _ = status.style().set_property("color", "#9a989b");
            body.append_child(&status)
                .map_err(|_| "failed to append status element".to_string())?;
            status
        }
    };
    status.set_inner_text("Boot: starting");

    if document.get_element_by_id(SHELL_ROOT_ID).is_some() {
        return Ok(());
    }

    let root = create_element(&document, "div")?;
    root.set_id(SHELL_ROOT_ID);

    let header = create_element(&document, "header")?;
    header.set_id(SHELL_HEADER_ID);
    let title = create_element(&document, "span")?;
    title.set_text_content(Some("SpanView"));
    header
        .append_child(&title)
        .map_err(|_| "failed to append header title".to_string())?;

    let nav = create_element(&document, "nav")?;
    nav.set_id(SHELL_NAV_ID);
    for (label, path) in NAV_LINKS {
        let anchor = create_element(&document, "a")?;
        anchor
            .set_attribute("href", path)
            .map_err(|_| "failed to set nav link href".to_string())?;
        anchor.set_text_content(Some(label));
        nav.append_child(&anchor)
            .map_err(|_| "failed to append nav link".to_string())?;
    }
    header
        .append_child(&nav)
        .map_err(|_| "failed to append nav".to_string())?;

    let main = create_element(&document, "main")?;
    main.set_id(SHELL_MAIN_ID);

    let footer = create_element(&document, "footer")?;
    footer.set_id(SHELL_FOOTER_ID);
    footer.set_text_content(Some("SpanView — distributed tracing"));

    for child in [&header, &main, &footer] {
        root.append_child(child)
            .map_err(|_| "failed to assemble shell frame".to_string())?;
    }
    body.append_child(&root)
        .map_err(|_| "failed to append shell frame".to_string())?;
    Ok(())
}

pub(super) fn set_boot_phase(phase: &str, detail: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.phase = phase.to_string();
        state.detail = detail.to_string();
        if phase != "error" {
            state.last_error = None;
        }
    });
    update_status_dom(phase, detail, false);
}

pub(super) fn set_boot_error(message: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.phase = "error".to_string();
        state.detail = "startup failed".to_string();
        state.last_error = Some(message.to_string());
    });
    update_status_dom("error", message, true);
}

pub(super) fn update_status_dom(phase: &str, detail: &str, is_error: bool) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(status) = document.get_element_by_id(SHELL_STATUS_ID) {
                if let Ok(status) = status.dyn_into::<HtmlElement>() {
                    let label = if is_error { "Boot error" } else { "Boot" };
                    status.set_inner_text(&format!("{label}: {phase} ({detail})"));
                    let color = if is_error { "#f0544f" } else { "#9a989b" };
                    let _ = status.style().set_property("color", color);
                }
            }
        }
    }
}

pub(super) fn record_boot_milestone(metric_name: &str, actual_ms: u64, budget_ms: u64) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        if metric_name == "dom_ready_latency_ms" {
            state.dom_ready_latency_ms = Some(actual_ms);
        }
        if actual_ms > budget_ms {
            state
                .budget_breaches
                .push(format!("{metric_name}>{budget_ms} (actual={actual_ms})"));
        }
    });
}

pub(super) fn epoch_millis_now() -> u64 {
    let now = js_sys::Date::now();
    if !now.is_finite() || now.is_sign_negative() {
        return 0;
    }
    now.floor().min(u64::MAX as f64) as u64
}

pub(super) fn should_force_boot_failure() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(search) = window.location().search() else {
        return false;
    };
    search.contains(BOOT_FAIL_QUERY_FLAG)
}

/// Current path plus query from the host browsing context. The fragment is
/// never routable state.
pub(super) fn current_location() -> String {
    let Some(window) = web_sys::window() else {
        return "/".to_string();
    };
    let location = window.location();
    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    let pathname = if pathname.trim().is_empty() {
        "/".to_string()
    } else {
        pathname
    };
    let search = location.search().unwrap_or_default();
    format!("{pathname}{search}")
}

pub(super) fn update_diagnostics_from_state(route_path: String, view: AppView) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.route_path = route_path;
        state.active_view = Some(view.title().to_string());
        state.views_rendered = state.views_rendered.saturating_add(1);
    });
}
