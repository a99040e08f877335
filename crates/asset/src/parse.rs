//! Line-level helpers shared by the OBJ and MTL readers.

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use glam::{Vec2, Vec3};

use crate::error::{LoadError, LoadResult};

pub(crate) fn open(path: &Path) -> LoadResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })
}

/// Location of the line being parsed, for error reporting.
#[derive(Clone, Copy)]
pub(crate) struct Line<'a> {
    pub path: &'a Path,
    /// 1-based.
    pub number: usize,
}

impl Line<'_> {
    pub fn malformed(&self, message: impl Into<String>) -> LoadError {
        LoadError::Malformed {
            path: self.path.to_path_buf(),
            line: self.number,
            message: message.into(),
        }
    }

    /// Undecodable text is a malformed line; anything else is an I/O failure.
    pub fn read_error(&self, source: io::Error) -> LoadError {
        if source.kind() == io::ErrorKind::InvalidData {
            return self.malformed("invalid UTF-8");
        }
        LoadError::Io {
            path: self.path.to_path_buf(),
            source,
        }
    }

    pub fn path_buf(&self) -> PathBuf {
        self.path.to_path_buf()
    }

    pub fn f32(&self, value: Option<&str>, what: &str) -> LoadResult<f32> {
        let token = value.ok_or_else(|| self.malformed(format!("missing {what}")))?;
        token
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.malformed(format!("invalid {what} '{token}'")))
    }

    pub fn vec3<'t>(&self, parts: &mut impl Iterator<Item = &'t str>, what: &str) -> LoadResult<Vec3> {
        let x = self.f32(parts.next(), &format!("{what} x"))?;
        let y = self.f32(parts.next(), &format!("{what} y"))?;
        let z = self.f32(parts.next(), &format!("{what} z"))?;
        Ok(Vec3::new(x, y, z))
    }

    pub fn vec2<'t>(&self, parts: &mut impl Iterator<Item = &'t str>, what: &str) -> LoadResult<Vec2> {
        let u = self.f32(parts.next(), &format!("{what} u"))?;
        let v = self.f32(parts.next(), &format!("{what} v"))?;
        Ok(Vec2::new(u, v))
    }

    pub fn word<'t>(&self, value: Option<&'t str>, directive: &str) -> LoadResult<&'t str> {
        value.ok_or_else(|| self.malformed(format!("'{directive}' needs a name")))
    }
}

/// Splits a line into `(directive, remaining tokens)`, skipping blanks and comments.
pub(crate) fn directive(line: &str) -> Option<(&str, std::str::SplitWhitespace<'_>)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let mut parts = trimmed.split_whitespace();
    parts.next().map(|tag| (tag, parts))
}
