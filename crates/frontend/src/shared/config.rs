use contracts::shared::config::{load_config, PageConfig};

/// Id of the `<script type="application/json">` element a host page may use
/// to supply its own profile and seed cards.
pub const PAGE_CONFIG_ELEMENT_ID: &str = "page-config";

/// Configuration supplied by the host page, if any.
fn host_page_config() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(PAGE_CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

/// Host page config first, embedded default otherwise.
pub fn read_page_config() -> PageConfig {
    match load_config(host_page_config().as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load page config: {:#}", e);
            PageConfig::default()
        }
    }
}
