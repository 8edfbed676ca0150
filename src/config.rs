use std::path::{Path, PathBuf};

/// Runtime configuration, built once from the CLI and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose immediate children are served as repositories
    pub repo_base_path: PathBuf,
    /// Public URL prefix used when building `url`/`git_url` links
    pub base_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn new<P: AsRef<Path>>(repo_base_path: P, host: &str, port: u16, base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| format!("http://{}:{}", host, port))
            .trim_end_matches('/')
            .to_string();

        Self {
            repo_base_path: repo_base_path.as_ref().to_path_buf(),
            base_url,
            host: host.to_string(),
            port,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = Config::new("/srv/git", "127.0.0.1", 3001, None);
        assert_eq!(config.base_url, "http://127.0.0.1:3001");
        assert_eq!(config.bind_addr(), "127.0.0.1:3001");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = Config::new("/srv/git", "0.0.0.0", 80, Some("https://git.example.com/".into()));
        assert_eq!(config.base_url, "https://git.example.com");
    }
}
