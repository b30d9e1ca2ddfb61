use log::warn;
use macroquad::file::load_file;
use zscreen::Settings;

use crate::{error::ZError, ZResult};

/// A missing file means default settings, a broken one is an error.
pub async fn load_settings(path: &str) -> ZResult<Settings> {
    match load_file(path).await {
        Ok(data) => parse_settings(&String::from_utf8_lossy(&data[..]), path),
        Err(err) => {
            warn!("Can't load '{}' ({}), using default settings", path, err);
            Ok(Settings::default())
        }
    }
}

fn parse_settings(s: &str, path: &str) -> ZResult<Settings> {
    ron::de::from_str(s).map_err(|e| ZError::from_ron_de_error(e, path.into()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use zscreen::Settings;

    use crate::error::ZError;

    use super::parse_settings;

    #[test]
    fn parse_full_settings() {
        let s = "(internal_cycle_events: false, starts_first_screen: false)";
        let expected = Settings {
            internal_cycle_events: false,
            starts_first_screen: false,
        };
        assert_eq!(parse_settings(s, "test.ron").unwrap(), expected);
    }

    #[test]
    fn parse_partial_settings() {
        let settings = parse_settings("(starts_first_screen: false)", "test.ron").unwrap();
        assert!(settings.internal_cycle_events);
        assert!(!settings.starts_first_screen);
    }

    #[test]
    fn parse_broken_settings() {
        let err = parse_settings("(starts_first_screen: 42)", "broken.ron").unwrap_err();
        match err {
            ZError::RonDeserializeError { path, .. } => assert_eq!(path.to_str(), Some("broken.ron")),
            err => panic!("Unexpected error: {}", err),
        }
    }
}
