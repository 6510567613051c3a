use shared::AppConfig;
use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;

/// Name of the `<meta>` tag carrying a JSON `AppConfig` override
pub const CONFIG_META_NAME: &str = "app-config";

fn meta_content() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", CONFIG_META_NAME))
        .ok()??;
    let meta = element.dyn_into::<HtmlMetaElement>().ok()?;
    Some(meta.content())
}

/// Load the page configuration, falling back to defaults
pub fn load_config() -> AppConfig {
    match meta_content() {
        Some(raw) if !raw.trim().is_empty() => match AppConfig::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                gloo::console::warn!("Ignoring malformed app-config meta tag:", e.to_string());
                AppConfig::default()
            }
        },
        _ => AppConfig::default(),
    }
}

/// User id rendered by the server into `#currentUserId`, if any
pub fn current_user_id() -> Option<i64> {
    let document = web_sys::window()?.document()?;
    let input = document
        .get_element_by_id("currentUserId")?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.value().trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_defaults_without_meta_tag() {
        assert_eq!(load_config(), AppConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_no_current_user_id_element() {
        assert_eq!(current_user_id(), None);
    }
}
