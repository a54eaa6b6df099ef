pub const ROUTE_PATTERN: &str = "/trace/:a...:b";

/// The pair of trace ids being compared, taken from the `a...b` id segment.
pub fn diff_pair_from_location(location: &str) -> Option<(&str, &str)> {
    let path = location.split('?').next().unwrap_or_default();
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    let ("trace", Some(pair)) = (segments.next()?, segments.next()) else {
        return None;
    };
    let (a, b) = pair.split_once("...")?;
    (!a.is_empty() && !b.is_empty()).then_some((a, b))
}

#[cfg(target_arch = "wasm32")]
pub fn render(
    document: &web_sys::Document,
    mount: &web_sys::Element,
    state: &spanview_app_state::AppState,
) -> Result<(), wasm_bindgen::JsValue> {
    let heading = document.create_element("h2")?;
    heading.set_text_content(Some("Compare traces"));
    mount.append_child(&heading)?;

    let summary = document.create_element("p")?;
    match diff_pair_from_location(&state.location) {
        Some((a, b)) => summary.set_text_content(Some(&format!("Comparing {a} against {b}."))),
        None => summary.set_text_content(Some("No trace pair in the location.")),
    }
    mount.append_child(&summary)?;
    Ok(())
}
