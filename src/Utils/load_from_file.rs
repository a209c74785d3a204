use crate::Kinetics::rxn_errors::RxnError;
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// equations and comment read from a text file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EquationsFile {
    pub equations: Vec<String>,
    pub comment: String,
}

pub struct LoadData {
    pub file_name: String,
}

impl LoadData {
    pub fn new(file_name: String) -> Self {
        LoadData { file_name }
    }
    pub fn load_equations(&self) -> Result<EquationsFile, RxnError> {
        load_equations_from_file(&self.file_name)
    }
}

fn is_header(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}

/// Collects the non-empty, non-'#' lines that follow `header` up to the next header.
/// None if the header does not occur.
fn section(lines: &[String], header: &str) -> Option<Vec<String>> {
    let start_index = lines
        .iter()
        .position(|line| line.trim().eq_ignore_ascii_case(header))?
        + 1;
    let mut collected = Vec::new();
    for line in &lines[start_index..] {
        let trimmed = line.trim();
        if is_header(trimmed) {
            break;
        }
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        collected.push(trimmed.to_string());
    }
    Some(collected)
}

/// Parses a document with a "REACTIONS" section, one equation per line, and an optional
/// "COMMENT" section whose lines are joined with a space.
/// ```text
/// COMMENT
/// hydrogen oxidation
/// REACTIONS
/// H2 + O2 = 2OH
/// # lines starting with '#' are skipped
/// OH + H2 = H2O + H
/// ```
pub fn parse_equations(content: &str, file_name: &Path) -> Result<EquationsFile, RxnError> {
    let lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();
    let equations = match section(&lines, "REACTIONS") {
        Some(equations) => equations,
        None => return Err(RxnError::NoReactionsSection(file_name.to_path_buf())),
    };
    if equations.is_empty() {
        warn!("'REACTIONS' section of '{}' is empty", file_name.display());
    }
    let comment = section(&lines, "COMMENT")
        .map(|lines| lines.join(" "))
        .unwrap_or_default();
    Ok(EquationsFile { equations, comment })
}

pub fn load_equations_from_file<P: AsRef<Path>>(file_name: P) -> Result<EquationsFile, RxnError> {
    let path = file_name.as_ref();
    let io_error = |source: std::io::Error| RxnError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    let reader = BufReader::new(file);
    let mut content = String::new();
    for line in reader.lines() {
        content.push_str(&line.map_err(io_error)?);
        content.push('\n');
    }
    let parsed = parse_equations(&content, path)?;
    info!(
        "{} equation(s) loaded from '{}'",
        parsed.equations.len(),
        path.display()
    );
    Ok(parsed)
}
