//! Skin URL construction.

use crate::mcid::Username;

const PLACEHOLDER: &str = "{username}";

/// Interpolates `username` into `template`. A template without the
/// placeholder gets the name appended as the last path segment.
pub fn skin_url(template: &str, username: &Username) -> String {
    if template.contains(PLACEHOLDER) {
        template.replace(PLACEHOLDER, username.as_str())
    } else if template.ends_with('/') {
        format!("{}{}", template, username)
    } else {
        format!("{}/{}", template, username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Username {
        Username::parse(s).unwrap()
    }

    #[test]
    fn default_template() {
        assert_eq!(
            skin_url(super::super::DEFAULT_SKIN_URL_TEMPLATE, &name("Notch")),
            "https://minotar.net/skin/Notch"
        );
    }

    #[test]
    fn template_without_placeholder() {
        assert_eq!(
            skin_url("http://127.0.0.1:9000/skin", &name("jeb_")),
            "http://127.0.0.1:9000/skin/jeb_"
        );
        assert_eq!(
            skin_url("http://127.0.0.1:9000/skin/", &name("jeb_")),
            "http://127.0.0.1:9000/skin/jeb_"
        );
    }

    #[test]
    fn placeholder_in_query() {
        assert_eq!(
            skin_url("https://skins.example/get?name={username}&size=64", &name("Dinnerbone")),
            "https://skins.example/get?name=Dinnerbone&size=64"
        );
    }
}
