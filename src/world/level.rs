//! World domain: level descriptions and their on-disk formats.
//!
//! A level description is a sparse map from cell to integer type code. It
//! can be read from `.properties` text (`x,y=code`) or from a
//! JSON object (`{"x,y": code}`).

use std::collections::BTreeMap;
use std::path::Path;

use crate::world::GridPosition;
use crate::world::loader::MazeLoadError;

pub const CODE_WALL: i64 = 0;
pub const CODE_ENTRY: i64 = 1;
pub const CODE_EXIT: i64 = 2;
pub const CODE_TRAP: i64 = 3;
pub const CODE_ENEMY: i64 = 4;
pub const CODE_KEY: i64 = 5;
pub const CODE_HEART: i64 = 6;
pub const CODE_LASER: i64 = 7;

/// Largest accepted width or height of a level, in cells.
pub const MAX_LEVEL_SIDE: i32 = 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelDescription {
    cells: BTreeMap<GridPosition, i64>,
}

impl LevelDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the code for a cell, replacing any earlier one.
    pub fn insert(&mut self, cell: GridPosition, code: i64) {
        self.cells.insert(cell, code);
    }

    pub fn get(&self, cell: GridPosition) -> Option<i64> {
        self.cells.get(&cell).copied()
    }

    /// Entries in ascending (x, y) order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPosition, i64)> + '_ {
        self.cells.iter().map(|(cell, code)| (*cell, *code))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `(max x + 1, max y + 1)`, with both maxima starting at zero. Saturates
    /// at `i32::MAX`.
    pub fn dimensions(&self) -> (i32, i32) {
        let (max_x, max_y) = self
            .cells
            .keys()
            .fold((0, 0), |(mx, my), cell| (mx.max(cell.x), my.max(cell.y)));
        (max_x.saturating_add(1), max_y.saturating_add(1))
    }

    /// Parse `.properties` text. Blank lines and lines starting with `#` or
    /// `!` are ignored; later duplicates win.
    pub fn parse_properties(contents: &str, file: &str) -> Result<Self, MazeLoadError> {
        let mut description = Self::new();

        for (number, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let malformed = |message: String| MazeLoadError::Malformed {
                file: file.to_string(),
                message: format!("line {}: {}", number + 1, message),
            };

            let Some(split) = line.find(['=', ':']) else {
                return Err(malformed(format!("expected `x,y=code`, got `{}`", line)));
            };
            let (key, value) = (&line[..split], &line[split + 1..]);

            let cell = parse_cell_key(key).map_err(malformed)?;
            let code = parse_code(value).map_err(malformed)?;
            description.insert(cell, code);
        }

        Ok(description)
    }

    /// Parse a JSON object of `"x,y": code` pairs.
    pub fn parse_json(contents: &str, file: &str) -> Result<Self, MazeLoadError> {
        let raw: BTreeMap<String, i64> =
            serde_json::from_str(contents).map_err(|e| MazeLoadError::Malformed {
                file: file.to_string(),
                message: e.to_string(),
            })?;

        let mut description = Self::new();
        for (key, code) in raw {
            let cell = parse_cell_key(&key).map_err(|message| MazeLoadError::Malformed {
                file: file.to_string(),
                message,
            })?;
            description.insert(cell, code);
        }
        Ok(description)
    }

    /// Read a level file, picking the parser by extension (`.json` or
    /// anything else as properties).
    pub fn from_path(path: &Path) -> Result<Self, MazeLoadError> {
        if !path.exists() {
            return Err(MazeLoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|source| MazeLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = path.display().to_string();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents, &file),
            _ => Self::parse_properties(&contents, &file),
        }
    }

    /// Serialize back to `.properties` text, one cell per line.
    pub fn to_properties(&self) -> String {
        self.iter()
            .map(|(cell, code)| format!("{},{}={}\n", cell.x, cell.y, code))
            .collect()
    }
}

impl FromIterator<(GridPosition, i64)> for LevelDescription {
    fn from_iter<I: IntoIterator<Item = (GridPosition, i64)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

fn parse_cell_key(key: &str) -> Result<GridPosition, String> {
    let mut parts = key.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("cell key `{}` is not `x,y`", key.trim()));
    };

    let coordinate = |part: &str| -> Result<i32, String> {
        let part = part.trim();
        match part.parse::<i32>() {
            Ok(value) if value >= MAX_LEVEL_SIDE => Err(format!(
                "coordinate {} in `{}` exceeds the {}-cell limit",
                value,
                key.trim(),
                MAX_LEVEL_SIDE
            )),
            Ok(value) if value >= 0 => Ok(value),
            Ok(value) => Err(format!("negative coordinate {} in `{}`", value, key.trim())),
            Err(e) => Err(format!("bad coordinate `{}`: {}", part, e)),
        }
    };

    Ok(GridPosition::new(coordinate(x)?, coordinate(y)?))
}

fn parse_code(value: &str) -> Result<i64, String> {
    let value = value.trim();
    value
        .parse::<i64>()
        .map_err(|e| format!("bad type code `{}`: {}", value, e))
}
