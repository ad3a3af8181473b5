use std::{fmt, str::FromStr};

use crate::error::DataFileError;

/// Physical format of a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Apache Avro (`AVRO`)
    Avro,
    /// Apache ORC (`ORC`)
    Orc,
    /// Apache Parquet (`PARQUET`)
    Parquet,
}

impl FileFormat {
    /// Canonical name, as written to the `file_format` slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Avro => "AVRO",
            Self::Orc => "ORC",
            Self::Parquet => "PARQUET",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Avro => "avro",
            Self::Orc => "orc",
            Self::Parquet => "parquet",
        }
    }

    /// Append this format's extension to `path` unless it already ends with it.
    pub fn add_extension(&self, path: &str) -> String {
        let suffix = format!(".{}", self.extension());
        if path.ends_with(&suffix) {
            path.to_string()
        } else {
            format!("{path}{suffix}")
        }
    }
}

impl FromStr for FileFormat {
    type Err = DataFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Avro, Self::Orc, Self::Parquet]
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DataFileError::UnknownFileFormat {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
