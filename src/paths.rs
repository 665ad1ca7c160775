use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = directories::BaseDirs::new() {
            return home.home_dir().join(rest);
        }
    } else if path == "~" {
        if let Some(home) = directories::BaseDirs::new() {
            return home.home_dir().to_path_buf();
        }
    }
    PathBuf::from(path)
}
