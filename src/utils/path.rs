//! `~` expansion for paths typed by the user (config file, export file).

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path {
        "~" => "",
        p => match p.strip_prefix("~/") {
            Some(r) => r,
            None => return PathBuf::from(path),
        },
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde("out/plan.pdf"), PathBuf::from("out/plan.pdf"));
        assert_eq!(expand_tilde("~user/x"), PathBuf::from("~user/x"));
    }

    #[test]
    fn tilde_points_into_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/plan.pdf"), home.join("plan.pdf"));
            assert_eq!(expand_tilde("~"), home);
        }
    }
}
