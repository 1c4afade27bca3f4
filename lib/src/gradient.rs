use crate::color::{Color, Gradient};
use crate::error::{ConfigError, Error, Result};
use log::debug;
use std::collections::BTreeMap;
use std::io::Read;
use std::path;

const BUILTIN: [(&str, Gradient); 9] = [
    ("sunshine", grad((255, 248, 9), (255, 65, 9))),
    ("purples", grad((255, 9, 204), (4, 137, 232))),
    ("grass", grad((255, 232, 38), (88, 255, 38))),
    ("valentine", grad((102, 0, 85), (255, 25, 216))),
    ("sky", grad((0, 177, 255), (9, 74, 102))),
    ("ubuntu", grad((119, 41, 83), (221, 72, 20))),
    ("fedora", grad((41, 65, 114), (60, 110, 180))),
    ("debian", grad((215, 10, 83), (10, 10, 10))),
    ("opensuse", grad((151, 208, 5), (34, 120, 8))),
];

const fn grad(start: (u8, u8, u8), end: (u8, u8, u8)) -> Gradient {
    Gradient::new(
        Color::new(start.0, start.1, start.2),
        Color::new(end.0, end.1, end.2),
    )
}

/// Named gradients available for coloring.
#[derive(Clone, Debug)]
pub struct Gradients {
    table: BTreeMap<String, Gradient>,
}

impl Default for Gradients {
    fn default() -> Self {
        Gradients {
            table: BUILTIN
                .iter()
                .map(|(name, gradient)| (name.to_string(), *gradient))
                .collect(),
        }
    }
}

impl Gradients {
    pub fn get(&self, name: &str) -> Result<Gradient> {
        self.table
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::UnknownGradient(name.to_string()).into())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    /// Adds the gradients of a JSON object mapping names to `[[r, g, b], [r, g, b]]`. Entries
    /// replace existing gradients of the same name.
    pub fn extend_from_reader<R: Read>(&mut self, reader: R) -> serde_json::Result<usize> {
        let table: BTreeMap<String, Gradient> = serde_json::from_reader(reader)?;
        let count = table.len();
        self.table.extend(table);
        Ok(count)
    }

    pub fn extend_from_file(&mut self, filename: &path::Path) -> Result<()> {
        let table_error = |source: Box<dyn std::error::Error + Send + Sync>| Error::GradientTable {
            path: filename.to_path_buf(),
            source,
        };

        let file = std::fs::File::open(filename).map_err(|e| table_error(e.into()))?;
        let count = self
            .extend_from_reader(std::io::BufReader::new(file))
            .map_err(|e| table_error(e.into()))?;

        debug!("Loaded {} gradients from {}", count, filename.display());
        Ok(())
    }
}
