//! Platform glue: document theming and file delivery.

use super::csv::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }
}

/// Class carried by the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Mirror the theme onto `<body>` so page-level styles follow it.
#[cfg(target_arch = "wasm32")]
pub fn apply_root_theme(dark: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let classes = body.class_list();
    let result = if dark {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if result.is_err() {
        tracing::warn!("couldn't update body theme class");
    }
}

/// Native windows render the class on the dashboard root only.
#[cfg(not(target_arch = "wasm32"))]
pub fn apply_root_theme(_dark: bool) {}

/// Hand `bytes` to the user as `filename`.
///
/// Web: triggers a browser download and returns `None`.
/// Native: writes into the app data `exports/` directory and returns the path.
pub fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let delivery = |msg: &str| ExportError::Delivery(msg.to_string());

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| delivery("failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| delivery("unable to create download"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| delivery("document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| delivery("unable to create anchor"))?
            .dyn_into()
            .map_err(|_| delivery("anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| delivery("missing body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = desktop_export_dir()?;
        write_export(&dir, filename, &bytes).map(Some)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, ExportError> {
    let dirs = directories::ProjectDirs::from("com", "QualityDash", "QualityDash")
        .ok_or_else(|| ExportError::Delivery("unable to determine export directory".into()))?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(not(target_arch = "wasm32"))]
fn write_export(dir: &std::path::Path, filename: &str, bytes: &[u8]) -> Result<String, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, bytes)?;
    Ok(path.to_string_lossy().to_string())
}
