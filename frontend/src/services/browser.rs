use anyhow::{anyhow, Result};

/// Blocking alert; the customer has to dismiss it before continuing
pub fn show_alert(message: &str) {
    gloo::dialogs::alert(message);
}

/// Open `url` in a new browsing context without waiting on it
pub fn open_in_new_tab(url: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("No window available"))?;
    let opened = window
        .open_with_url_and_target(url, "_blank")
        .map_err(|e| anyhow!("window.open failed: {:?}", e))?;

    if opened.is_none() {
        return Err(anyhow!("Popup was blocked"));
    }
    Ok(())
}
