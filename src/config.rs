use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "CasoLab";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default path of the plain-text ISO reference document.
/// Override with the `ISO_DOC_PATH` environment variable.
pub const DEFAULT_REFERENCE_PATH: &str = "ISO19011.txt";

/// Default local Ollama endpoint. Override with `OLLAMA_BASE_URL`.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Default generation model. Override with `CASOLAB_MODEL`.
pub const DEFAULT_MODEL: &str = "gemma3:latest";

/// Default listen address for the study API. Override with `CASOLAB_ADDR`.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8077";

/// Get the application data directory
/// ~/CasoLab/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("CasoLab")
}

/// Get the exports directory (saved TXT/DOCX copies land here)
pub fn exports_dir() -> PathBuf {
    app_data_dir().join("exports")
}

/// Path of the reference document that grounds every generation.
pub fn reference_doc_path() -> PathBuf {
    std::env::var("ISO_DOC_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_REFERENCE_PATH))
}

/// The generation model name.
pub fn model_name() -> String {
    std::env::var("CASOLAB_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
}

/// The address the study API binds to.
///
/// Falls back to the default on an unparseable `CASOLAB_ADDR` value
/// rather than refusing to start.
pub fn listen_addr() -> SocketAddr {
    let raw = std::env::var("CASOLAB_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(addr = %raw, "Invalid CASOLAB_ADDR, using default");
        DEFAULT_LISTEN_ADDR.parse().expect("default listen addr parses")
    })
}

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> String {
    "info,casolab_lib=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("CasoLab"));
    }

    #[test]
    fn exports_dir_under_app_data() {
        let exports = exports_dir();
        let app = app_data_dir();
        assert!(exports.starts_with(app));
        assert!(exports.ends_with("exports"));
    }

    #[test]
    fn app_name_is_casolab() {
        assert_eq!(APP_NAME, "CasoLab");
    }

    #[test]
    fn app_version_is_set() {
        assert!(!APP_VERSION.is_empty());
    }

    #[test]
    fn default_listen_addr_parses() {
        let addr: SocketAddr = DEFAULT_LISTEN_ADDR.parse().unwrap();
        assert_eq!(addr.port(), 8077);
    }

    #[test]
    fn default_log_filter_mentions_crate() {
        assert!(default_log_filter().contains("casolab"));
    }
}
