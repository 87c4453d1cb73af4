use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CurtainError, CurtainResult};

/// An alignment line on an element or on the viewport, as a fraction of its height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
    Fraction(f64),
}

impl Edge {
    pub fn fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
            Self::Fraction(f) => f,
        }
    }
}

impl FromStr for Edge {
    type Err = CurtainError;

    fn from_str(s: &str) -> CurtainResult<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            other => {
                let (num, scale) = match other.strip_suffix('%') {
                    Some(pct) => (pct, 100.0),
                    None => (other, 1.0),
                };
                let v: f64 = num.parse().map_err(|_| {
                    CurtainError::validation(format!("unknown scroll edge '{other}'"))
                })?;
                if !v.is_finite() {
                    return Err(CurtainError::validation(format!(
                        "scroll edge '{other}' must be finite"
                    )));
                }
                Ok(Self::Fraction(v / scale))
            }
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Center => f.write_str("center"),
            Self::End => f.write_str("end"),
            Self::Fraction(v) => write!(f, "{v}"),
        }
    }
}

/// "When the target's `target` edge meets the viewport's `container` edge."
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub target: Edge,
    pub container: Edge,
}

impl Intersection {
    pub const fn new(target: Edge, container: Edge) -> Self {
        Self { target, container }
    }
}

impl FromStr for Intersection {
    type Err = CurtainError;

    /// Parses `"start end"`; a single token applies to both edges.
    fn from_str(s: &str) -> CurtainResult<Self> {
        let mut parts = s.split_whitespace();
        let Some(first) = parts.next() else {
            return Err(CurtainError::validation("scroll intersection must be non-empty"));
        };
        let target: Edge = first.parse()?;
        let container = match parts.next() {
            Some(second) => second.parse()?,
            None => target,
        };
        if parts.next().is_some() {
            return Err(CurtainError::validation(format!(
                "scroll intersection '{s}' has more than two edges"
            )));
        }
        Ok(Self { target, container })
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.container)
    }
}

/// The pair of intersections that define progress `0` and progress `1`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[String; 2]", into = "[String; 2]")]
pub struct ScrollOffset {
    pub enter: Intersection,
    pub exit: Intersection,
}

impl ScrollOffset {
    /// `["start end", "end start"]`: from first pixel visible to last pixel gone.
    pub const THROUGH: Self = Self {
        enter: Intersection::new(Edge::Start, Edge::End),
        exit: Intersection::new(Edge::End, Edge::Start),
    };

    /// `["start start", "end end"]`: while a tall section is pinned under the viewport.
    pub const PINNED: Self = Self {
        enter: Intersection::new(Edge::Start, Edge::Start),
        exit: Intersection::new(Edge::End, Edge::End),
    };

    /// `["start end", "end end"]`: from entering until the bottom edges align.
    pub const ARRIVE: Self = Self {
        enter: Intersection::new(Edge::Start, Edge::End),
        exit: Intersection::new(Edge::End, Edge::End),
    };

    pub fn parse(enter: &str, exit: &str) -> CurtainResult<Self> {
        Ok(Self {
            enter: enter.parse()?,
            exit: exit.parse()?,
        })
    }
}

impl Default for ScrollOffset {
    fn default() -> Self {
        Self::THROUGH
    }
}

impl TryFrom<[String; 2]> for ScrollOffset {
    type Error = CurtainError;

    fn try_from(pair: [String; 2]) -> CurtainResult<Self> {
        Self::parse(&pair[0], &pair[1])
    }
}

impl From<ScrollOffset> for [String; 2] {
    fn from(offset: ScrollOffset) -> Self {
        [offset.enter.to_string(), offset.exit.to_string()]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/offset.rs"]
mod tests;
