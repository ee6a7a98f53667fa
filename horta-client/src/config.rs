use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub session_file: PathBuf,
}

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_SESSION_FILE: &str = ".horta-session.json";

impl Config {
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("HORTA_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let session_file = std::env::var("HORTA_SESSION_FILE")
            .unwrap_or_else(|_| DEFAULT_SESSION_FILE.to_string());
        Self::new(base_url, session_file)
    }

    pub fn new(base_url: impl Into<String>, session_file: impl Into<PathBuf>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            session_file: session_file.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = Config::new("http://localhost:8000//", "s.json");
        assert_eq!(config.base_url, "http://localhost:8000");
    }
}
