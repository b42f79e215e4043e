use super::{load_molecule, progress_reporter, warn_if_exhausted};
use crate::cli::ConvertArgs;
use crate::config::{CliOverrides, PartialConfig};
use crate::error::{CliError, Result};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;
use xyz2mol::workflows::convert;

pub fn run(args: &ConvertArgs, config_path: Option<&Path>) -> Result<()> {
    let config = PartialConfig::load(config_path)?.merge_with_cli(CliOverrides {
        units: args.units,
        title: args.title.as_deref(),
    });

    let molecule = load_molecule(&args.input, &config)?;

    info!("Invoking the conversion workflow...");
    let mut record = Vec::new();
    let profile = convert::run_with_reporter(&molecule, &mut record, &progress_reporter())?;
    warn_if_exhausted(&profile);

    match &args.output {
        Some(path) => {
            info!("Writing MOL record to {:?}", path);
            std::fs::write(path, &record).map_err(|e| CliError::FileParsing {
                path: path.clone(),
                source: e.into(),
            })?;
            eprintln!(
                "Wrote {} atoms and {} bonds to {}",
                molecule.active_atom_count(),
                profile.bonds.len(),
                path.display()
            );
        }
        None => {
            let mut handle = io::stdout().lock();
            handle.write_all(&record)?;
            handle.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use xyz2mol::core::io::traits::MoleculeReader;
    use xyz2mol::core::io::xyz::XyzFile;
    use xyz2mol::engine::error::EngineError;
    use xyz2mol::workflows::WorkflowError;

    const FORMALDEHYDE_XYZ: &str = "\
4
formaldehyde
C    0.000    0.000   -0.529
O    0.000    0.000    0.677
H    0.000    0.935   -1.117
H    0.000   -0.935   -1.117
";

    fn write_input(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn converts_xyz_file_to_mol_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "h2co.xyz", FORMALDEHYDE_XYZ);
        let output = dir.path().join("h2co.mol");

        let args = ConvertArgs {
            input,
            output: Some(output.clone()),
            units: None,
            title: None,
        };
        run(&args, None).unwrap();

        let text = fs::read_to_string(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "formaldehyde");
        assert_eq!(lines[3], "  4  3  0  0  0  0  0  0  0  0999 V2000");
        assert_eq!(lines[8], "  1  2  2  0  0  0");
        assert_eq!(lines.last(), Some(&"M  END"));
    }

    #[test]
    fn title_and_units_come_from_config_unless_overridden() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "h2.xyz", "2\nhydrogen\nH 0 0 0\nH 0 0 1.4\n");
        let config = write_input(
            &dir,
            "config.toml",
            "[input]\nunits = \"bohr\"\n\n[output]\ntitle = \"from config\"\n",
        );
        let output = dir.path().join("h2.mol");

        let args = ConvertArgs {
            input,
            output: Some(output.clone()),
            units: None,
            title: Some("from cli".to_string()),
        };
        run(&args, Some(&config)).unwrap();

        let text = fs::read_to_string(output).unwrap();
        assert!(text.starts_with("from cli\n"));
        assert!(text.contains("    0.0000    0.0000    0.7408 H   0  0  0  0  0\n"));
        assert!(text.contains("\n  1  2  1  0  0  0\n"));
    }

    #[test]
    fn unsupported_element_fails_without_writing_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "nacl.xyz", "2\nsalt\nNa 0 0 0\nCl 0 0 2.4\n");
        let output = dir.path().join("nacl.mol");

        let args = ConvertArgs {
            input,
            output: Some(output.clone()),
            units: None,
            title: None,
        };
        let err = run(&args, None).unwrap_err();
        assert!(matches!(
            err,
            CliError::Workflow(WorkflowError::Perception(
                EngineError::UnknownElement { index: 0, .. }
            ))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn malformed_input_reports_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "broken.xyz", "three\ntitle\n");

        let args = ConvertArgs {
            input: input.clone(),
            output: None,
            units: None,
            title: None,
        };
        match run(&args, None).unwrap_err() {
            CliError::FileParsing { path, .. } => assert_eq!(path, input),
            other => panic!("Expected a file parsing error, got {:?}", other),
        }
    }

    #[test]
    fn output_matches_library_conversion() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "h2co.xyz", FORMALDEHYDE_XYZ);
        let output = dir.path().join("h2co.mol");

        let args = ConvertArgs {
            input: input.clone(),
            output: Some(output.clone()),
            units: None,
            title: None,
        };
        run(&args, None).unwrap();

        let molecule = XyzFile::read_from_path(&input).unwrap();
        let (expected, _) = convert::to_mol_block(&molecule).unwrap();
        assert_eq!(fs::read_to_string(output).unwrap(), expected);
    }
}
