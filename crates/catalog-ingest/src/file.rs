//! Local JSON payloads, for offline use and fixtures.

use std::fs;
use std::path::Path;

use tracing::info;

use catalog_model::ProductsPage;

use crate::error::Result;

/// Load a products payload from a JSON file on disk.
///
/// The file holds the same shape as the remote endpoint response.
///
/// # Errors
///
/// I/O failure or a payload that does not decode.
pub fn load_products_file(path: &Path) -> Result<ProductsPage> {
    let body = fs::read_to_string(path)?;
    let page: ProductsPage = serde_json::from_str(&body)?;
    info!(
        path = %path.display(),
        products = page.products.len(),
        "loaded product payload"
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;
    use std::io::Write;

    #[test]
    fn loads_a_payload_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"products":[{{"id":7,"title":"Desk Lamp","price":35.5,"category":"office"}}],"total":1}}"#
        )
        .expect("write payload");

        let page = load_products_file(file.path()).expect("load payload");
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.products[0].title, "Desk Lamp");
        assert_eq!(page.products[0].category, "office");
    }

    #[test]
    fn malformed_json_maps_to_decode_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{not json").expect("write payload");
        let err = load_products_file(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::Decode(_)));
    }

    #[test]
    fn missing_file_maps_to_io_error() {
        let err = load_products_file(Path::new("/nonexistent/products.json")).unwrap_err();
        assert!(matches!(err, IngestError::Io(_)));
    }
}
