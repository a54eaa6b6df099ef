pub const ROUTE_PATTERN: &str = "/search";

/// The `service` filter carried in the location query, if any.
pub fn service_from_location(location: &str) -> Option<&str> {
    let (_, query) = location.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "service" && !value.is_empty()).then_some(value)
    })
}

#[cfg(target_arch = "wasm32")]
pub fn render(
    document: &web_sys::Document,
    mount: &web_sys::Element,
    state: &spanview_app_state::AppState,
) -> Result<(), wasm_bindgen::JsValue> {
    let heading = document.create_element("h2")?;
    heading.set_text_content(Some("Search traces"));
    mount.append_child(&heading)?;

    let summary = document.create_element("p")?;
    match service_from_location(&state.location) {
        Some(service) => {
            summary.set_text_content(Some(&format!("Showing traces for service {service}.")));
        }
        None => summary.set_text_content(Some("Pick a service to find traces.")),
    }
    mount.append_child(&summary)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_service_filter_from_query() {
        assert_eq!(
            service_from_location("/search?service=checkout&limit=20"),
            Some("checkout")
        );
    }

    #[test]
    fn missing_or_empty_filter_is_none() {
        assert_eq!(service_from_location("/search"), None);
        assert_eq!(service_from_location("/search?service="), None);
        assert_eq!(service_from_location("/search?limit=20"), None);
    }
}
