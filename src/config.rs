use gloo::console::{error, log};
use serde::Deserialize;
use web_sys::window;

const CONFIG_SCRIPT_ID: &str = "app-config";

/// Runtime settings, embedded in `index.html` as
/// `<script id="app-config" type="application/json">`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Prefix for every API path. Empty means same-origin.
    #[serde(default)]
    pub api_base: String,
    #[serde(default = "default_notice_timeout_ms")]
    pub notice_timeout_ms: u32,
    /// Show the client-side demo roster next to the server list.
    #[serde(default = "default_demo_fallback")]
    pub demo_fallback: bool,
}

fn default_notice_timeout_ms() -> u32 {
    5000
}

fn default_demo_fallback() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            notice_timeout_ms: default_notice_timeout_ms(),
            demo_fallback: default_demo_fallback(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }

    /// Reads the embedded config block; falls back to defaults when it is
    /// missing or malformed.
    pub fn load() -> Self {
        let Some(json) = read_embedded_json(CONFIG_SCRIPT_ID) else {
            log!("no app-config block, using defaults");
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(cfg) => {
                log!(format!("config loaded: api_base={:?}", cfg.api_base));
                cfg
            }
            Err(e) => {
                error!(format!("app-config parse error: {e}"));
                Self::default()
            }
        }
    }

    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}

fn read_embedded_json(script_id: &str) -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(script_id)?;
    el.text_content()
}
