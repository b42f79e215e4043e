use crate::core::io::traits::MoleculeReader;
use crate::core::models::molecule::Molecule;
use crate::core::models::units::LengthUnit;
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: XyzParseErrorKind,
    },
    #[error("Atom count mismatch: header declares {expected} atoms but {found} were found")]
    AtomCountMismatch { expected: usize, found: usize },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum XyzParseErrorKind {
    #[error("Invalid atom count (value: '{value}')")]
    InvalidCount { value: String },
    #[error("Invalid float for {field} coordinate (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
    #[error("Required field '{field}' is missing")]
    MissingField { field: &'static str },
    #[error("Ghost atom marker without an element symbol (value: '{value}')")]
    EmptyGhost { value: String },
}

/// Reader for the plain XYZ coordinate format.
///
/// The first line holds the atom count, the second a free-form title, and each
/// following line `Symbol x y z` (further columns are ignored). Ghost atoms written as
/// `@Sym` or `Gh(Sym)` and dummy atoms `X` or `Q` are kept as inactive atoms. Only the
/// first frame of a multi-frame file is read.
pub struct XyzFile;

impl XyzFile {
    /// Reads a molecule whose coordinates are expressed in `units`.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure, malformed lines, or when fewer atom lines are
    /// present than the header declares.
    pub fn read_from_with_units(
        reader: &mut impl BufRead,
        units: LengthUnit,
    ) -> Result<Molecule, XyzError> {
        let mut lines = reader.lines().enumerate();

        let (count_line_num, count_line) = match lines.next() {
            Some((n, line)) => (n + 1, line?),
            None => return Err(XyzError::MissingRecord("atom count line".into())),
        };
        let count_str = count_line.trim();
        let expected: usize = count_str.parse().map_err(|_| XyzError::Parse {
            line: count_line_num,
            kind: XyzParseErrorKind::InvalidCount {
                value: count_str.into(),
            },
        })?;

        let title = match lines.next() {
            Some((_, line)) => line?,
            None => return Err(XyzError::MissingRecord("title line".into())),
        };

        let mut molecule = Molecule::new(&title, units);
        for (line_num, line_res) in lines {
            if molecule.atoms().len() >= expected {
                break;
            }
            let line = line_res?;
            let line_num = line_num + 1;
            if line.trim().is_empty() {
                continue;
            }

            let record = parse_atom_line(&line, line_num)?;
            trace!(line = line_num, symbol = %record.symbol, active = record.active, "Parsed atom record");
            if record.active {
                molecule.push_atom(&record.symbol, record.position);
            } else {
                molecule.push_inactive_atom(&record.symbol, record.position);
            }
        }

        let found = molecule.atoms().len();
        if found != expected {
            return Err(XyzError::AtomCountMismatch { expected, found });
        }
        debug!(
            "Read XYZ molecule '{}' with {} atoms ({} active).",
            molecule.title,
            found,
            molecule.active_atom_count()
        );
        Ok(molecule)
    }

    /// Reads a molecule from a file path, with coordinates expressed in `units`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    pub fn read_from_path_with_units<P: AsRef<Path>>(
        path: P,
        units: LengthUnit,
    ) -> Result<Molecule, XyzError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from_with_units(&mut reader, units)
    }
}

impl MoleculeReader for XyzFile {
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<Molecule, Self::Error> {
        Self::read_from_with_units(reader, LengthUnit::Angstrom)
    }
}

struct AtomRecord {
    symbol: String,
    position: Point3<f64>,
    active: bool,
}

fn parse_atom_line(line: &str, line_num: usize) -> Result<AtomRecord, XyzError> {
    let mut fields = line.split_whitespace();

    let label = fields.next().ok_or(XyzError::Parse {
        line: line_num,
        kind: XyzParseErrorKind::MissingField { field: "symbol" },
    })?;
    let (symbol, active) = decode_label(label).ok_or_else(|| XyzError::Parse {
        line: line_num,
        kind: XyzParseErrorKind::EmptyGhost {
            value: label.into(),
        },
    })?;

    let mut coordinate = |field: &'static str| -> Result<f64, XyzError> {
        let value = fields.next().ok_or(XyzError::Parse {
            line: line_num,
            kind: XyzParseErrorKind::MissingField { field },
        })?;
        value.parse().map_err(|_| XyzError::Parse {
            line: line_num,
            kind: XyzParseErrorKind::InvalidFloat {
                field,
                value: value.into(),
            },
        })
    };
    let x = coordinate("x")?;
    let y = coordinate("y")?;
    let z = coordinate("z")?;

    Ok(AtomRecord {
        symbol,
        position: Point3::new(x, y, z),
        active,
    })
}

/// Splits an atom label into its element symbol and active flag.
///
/// Returns `None` for a ghost marker with nothing inside it.
fn decode_label(label: &str) -> Option<(String, bool)> {
    let ghost = if let Some(rest) = label.strip_prefix('@') {
        Some(rest)
    } else if label.len() > 4
        && label.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("gh("))
        && label.ends_with(')')
    {
        Some(&label[3..label.len() - 1])
    } else {
        None
    };

    match ghost {
        Some(inner) if inner.is_empty() => None,
        Some(inner) => Some((inner.to_string(), false)),
        None if label.eq_ignore_ascii_case("x") || label.eq_ignore_ascii_case("q") => {
            Some((label.to_string(), false))
        }
        None => Some((label.to_string(), true)),
    }
}
