pub const ROUTE_PATTERN: &str = "/trace/:id";

/// The trace id segment of the location, query excluded.
pub fn trace_id_from_location(location: &str) -> Option<&str> {
    let path = location.split('?').next().unwrap_or_default();
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    match (segments.next(), segments.next()) {
        (Some("trace"), Some(id)) if !id.is_empty() => Some(id),
        _ => None,
    }
}

#[cfg(target_arch = "wasm32")]
pub fn render(
    document: &web_sys::Document,
    mount: &web_sys::Element,
    state: &spanview_app_state::AppState,
) -> Result<(), wasm_bindgen::JsValue> {
    let heading = document.create_element("h2")?;
    heading.set_text_content(Some("Trace"));
    mount.append_child(&heading)?;

    let summary = document.create_element("p")?;
    match trace_id_from_location(&state.location) {
        Some(id) => summary.set_text_content(Some(&format!("Loading trace {id}."))),
        None => summary.set_text_content(Some("No trace id in the location.")),
    }
    mount.append_child(&summary)?;
    Ok(())
}
