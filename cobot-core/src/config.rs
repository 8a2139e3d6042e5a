use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Error;

/// Reads and parses a TOML config file.
pub fn load_toml<T, P>(path: P) -> Result<T, Error>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    debug!("Loading {:?}", path.as_ref());
    from_toml_str(
        &std::fs::read_to_string(&path).map_err(|e| Error::NoFile(path.as_ref().to_owned(), e))?,
        &path,
    )
}

/// Parses a TOML document. `path` is only used in error messages.
pub fn from_toml_str<T, P>(s: &str, path: P) -> Result<T, Error>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    toml::from_str(s).map_err(|e| Error::TomlParseFailure(path.as_ref().to_owned(), e))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(deny_unknown_fields)]
    struct Sample {
        name: String,
        speed: f64,
    }

    #[test]
    fn test_load_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"gripper\"\nspeed = 0.2").unwrap();
        let sample: Sample = load_toml(file.path()).unwrap();
        assert_eq!(
            sample,
            Sample {
                name: "gripper".to_owned(),
                speed: 0.2
            }
        );
    }

    #[test]
    fn test_load_toml_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            load_toml::<Sample, _>(&path),
            Err(Error::NoFile(p, _)) if p == path
        ));
    }

    #[test]
    fn test_from_toml_str_parse_failure() {
        assert!(matches!(
            from_toml_str::<Sample, _>("name = \"gripper\"\nspeed = 0.2\nextra = 1", "a.toml"),
            Err(Error::TomlParseFailure(p, _)) if p == Path::new("a.toml")
        ));
    }
}
