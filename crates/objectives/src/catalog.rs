use serde::{Deserialize, Serialize};
use shared::protocol::{LineSelection, SelectionEntry};

use crate::{
    error::GridError,
    grid::{GRID_SIZE, POSITIONS_PER_LINE},
};

/// Human-readable objective names, `lines[line][objective]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct ObjectiveCatalog {
    lines: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct RawCatalog {
    lines: Vec<Vec<String>>,
}

impl TryFrom<RawCatalog> for ObjectiveCatalog {
    type Error = GridError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        Self::new(raw.lines)
    }
}

impl ObjectiveCatalog {
    pub fn new(lines: Vec<Vec<String>>) -> Result<Self, GridError> {
        if lines.len() != GRID_SIZE {
            return Err(GridError::MalformedCatalog(format!(
                "expected {GRID_SIZE} lines, got {}",
                lines.len()
            )));
        }
        if let Some((line, names)) = lines
            .iter()
            .enumerate()
            .find(|(_, names)| names.len() != POSITIONS_PER_LINE)
        {
            return Err(GridError::MalformedCatalog(format!(
                "line {line} has {} names, expected {POSITIONS_PER_LINE}",
                names.len()
            )));
        }
        Ok(Self { lines })
    }

    /// Generic names for layouts with no name data.
    pub fn placeholder() -> Self {
        let lines = (0..GRID_SIZE)
            .map(|line| {
                (0..POSITIONS_PER_LINE)
                    .map(|objective| format!("Sector {} objective {}", line + 1, objective + 1))
                    .collect()
            })
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[Vec<String>] {
        &self.lines
    }

    pub fn name(&self, line: usize, objective: usize) -> Option<&str> {
        self.lines.get(line)?.get(objective).map(String::as_str)
    }

    /// Case-insensitive lookup of an objective on one line.
    pub fn index_of(&self, line: usize, name: &str) -> Result<usize, GridError> {
        let names = self.lines.get(line).ok_or(GridError::LineOutOfRange {
            line,
            lines: GRID_SIZE,
        })?;
        let wanted = name.trim();
        names
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GridError::UnknownObjective {
                line,
                name: wanted.to_string(),
            })
    }

    pub fn describe(&self, selection: &[LineSelection]) -> Vec<String> {
        selection
            .iter()
            .map(|entry| match entry.objective {
                SelectionEntry::Random => "Random".to_string(),
                SelectionEntry::Objective(index) => self
                    .name(entry.line_index, index)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{index}")),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_shape() {
        let err =
            ObjectiveCatalog::new(vec![vec!["a".into()]; GRID_SIZE]).expect_err("short lines");
        assert!(err.to_string().contains("line 0 has 1 names"));
        assert!(ObjectiveCatalog::new(Vec::new()).is_err());
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        let catalog = ObjectiveCatalog::placeholder();
        assert_eq!(catalog.index_of(2, "  sector 3 OBJECTIVE 2 ").expect("found"), 1);
        assert!(matches!(
            catalog.index_of(2, "Sector 1 objective 1"),
            Err(GridError::UnknownObjective { line: 2, .. })
        ));
        assert!(matches!(
            catalog.index_of(8, "x"),
            Err(GridError::LineOutOfRange { line: 8, .. })
        ));
    }

    #[test]
    fn deserializes_from_toml_and_validates() {
        let raw = r#"
lines = [
  ["A1", "A2", "A3"],
  ["B1", "B2", "B3"],
  ["C1", "C2", "C3"],
  ["D1", "D2", "D3"],
  ["E1", "E2", "E3"],
]
"#;
        let catalog: ObjectiveCatalog = toml::from_str(raw).expect("catalog");
        assert_eq!(catalog.name(4, 2), Some("E3"));

        let short = "lines = [[\"A1\"]]";
        assert!(toml::from_str::<ObjectiveCatalog>(short).is_err());
    }

    #[test]
    fn describe_labels_random_lines() {
        let catalog = ObjectiveCatalog::placeholder();
        let selection = [
            LineSelection {
                line_index: 0,
                objective: SelectionEntry::Objective(2),
            },
            LineSelection {
                line_index: 1,
                objective: SelectionEntry::Random,
            },
        ];
        assert_eq!(
            catalog.describe(&selection),
            vec!["Sector 1 objective 3".to_string(), "Random".to_string()]
        );
    }
}
