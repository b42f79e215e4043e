mod defaults;

use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use xyz2mol::core::models::units::LengthUnit;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialInputConfig {
    units: Option<LengthUnit>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    title: Option<String>,
}

/// Settings as read from a configuration file; every field may be absent.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    input: Option<PartialInputConfig>,
    output: Option<PartialOutputConfig>,
}

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides<'a> {
    pub units: Option<LengthUnit>,
    pub title: Option<&'a str>,
}

/// Fully resolved settings for a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub units: LengthUnit,
    /// Replaces the title read from the input file when set.
    pub title: Option<String>,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        if !path.is_file() {
            return Err(CliError::Config(format!(
                "Configuration file '{}' does not exist.",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file at `path` if one is given, or starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(self, overrides: CliOverrides<'_>) -> AppConfig {
        let defaults = DefaultsConfig::default();
        let input = self.input.unwrap_or_default();
        let output = self.output.unwrap_or_default();

        let units = overrides
            .units
            .or(input.units)
            .unwrap_or(defaults.units);
        let title = overrides
            .title
            .map(str::to_string)
            .or(output.title)
            .or(defaults.title);

        debug!("Resolved configuration: units = {}, title = {:?}", units, title);
        AppConfig { units, title }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config_file(dir: &TempDir, content: &str) -> PathBuf {
        let file_path = dir.path().join("xyz2mol.toml");
        fs::write(&file_path, content).unwrap();
        file_path
    }

    #[test]
    fn empty_configuration_falls_back_to_defaults() {
        let config = PartialConfig::load(None)
            .unwrap()
            .merge_with_cli(CliOverrides::default());
        assert_eq!(
            config,
            AppConfig {
                units: LengthUnit::Angstrom,
                title: None,
            }
        );
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            [input]
            units = "bohr"

            [output]
            title = "from file"
            "#,
        );

        let config = PartialConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(CliOverrides::default());
        assert_eq!(config.units, LengthUnit::Bohr);
        assert_eq!(config.title.as_deref(), Some("from file"));
    }

    #[test]
    fn cli_values_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            [input]
            units = "au"

            [output]
            title = "from file"
            "#,
        );

        let config = PartialConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(CliOverrides {
                units: Some(LengthUnit::Angstrom),
                title: Some("from cli"),
            });
        assert_eq!(config.units, LengthUnit::Angstrom);
        assert_eq!(config.title.as_deref(), Some("from cli"));
    }

    #[test]
    fn file_units_accept_the_same_labels_as_the_command_line() {
        let dir = tempfile::tempdir().unwrap();
        for (label, unit) in [
            ("Bohr", LengthUnit::Bohr),
            ("BOHR", LengthUnit::Bohr),
            ("A.U.", LengthUnit::Bohr),
            ("angstroms", LengthUnit::Angstrom),
            ("Ang", LengthUnit::Angstrom),
        ] {
            let path = write_config_file(&dir, &format!("[input]\nunits = \"{}\"\n", label));
            let config = PartialConfig::from_file(&path)
                .unwrap()
                .merge_with_cli(CliOverrides::default());
            assert_eq!(config.units, unit, "label {:?}", label);
            assert_eq!(label.parse::<LengthUnit>(), Ok(unit));
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "[input]\nbond-factor = 1.3\n");

        let err = PartialConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
    }

    #[test]
    fn invalid_unit_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "[input]\nunits = \"nanometer\"\n");

        let err = PartialConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PartialConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
