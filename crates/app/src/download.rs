//! Client-side file download: wraps the bytes in a Blob, points a
//! temporary anchor at an object URL and clicks it.

use chrono::NaiveDate;

/// Filename for the admin CSV export, stamped with the given date.
pub fn export_filename(date: NaiveDate) -> String {
    format!("disaster-reports-{}.csv", date.format("%Y-%m-%d"))
}

/// Save `bytes` as a download named `filename`. Failures are logged; there
/// is nothing useful to surface beyond the caller's own toast.
#[cfg(target_arch = "wasm32")]
pub fn save_file(filename: &str, bytes: &[u8]) {
    if let Err(err) = save_file_inner(filename, bytes) {
        tracing::error!("download failed: {err:?}");
    }
}

#[cfg(target_arch = "wasm32")]
fn save_file_inner(filename: &str, bytes: &[u8]) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let object_url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&object_url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&object_url)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_file(filename: &str, bytes: &[u8]) {
    // No browser to hand the file to; only reachable from native builds.
    tracing::info!("skipping download of {filename} ({} bytes)", bytes.len());
}
