use crate::core::config::data::Config;
use crate::core::config::defaults::{DEFAULT_BASE_URL, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

impl Config {
    pub fn print_all(&self) {
        print!("{}", self.describe());
    }

    pub(crate) fn describe(&self) -> String {
        let mut out = String::from("Current configuration:\n");
        match &self.base_url {
            Some(url) => out.push_str(&format!("  base-url: {url}\n")),
            None => out.push_str(&format!("  base-url: (unset, using {DEFAULT_BASE_URL})\n")),
        }
        match &self.endpoint {
            Some(endpoint) => out.push_str(&format!("  endpoint: {endpoint}\n")),
            None => out.push_str(&format!("  endpoint: (unset, using {DEFAULT_ENDPOINT})\n")),
        }
        match self.timeout_secs {
            Some(secs) => out.push_str(&format!("  timeout: {secs}s\n")),
            None => out.push_str(&format!("  timeout: (unset, using {DEFAULT_TIMEOUT_SECS}s)\n")),
        }
        match &self.log_file {
            Some(path) => out.push_str(&format!("  log-file: {path}\n")),
            None => out.push_str("  log-file: (unset)\n"),
        }
        out
    }
}
