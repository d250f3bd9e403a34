//! Text form: `Polygon([(x, y), ...], is_convex=false, is_simple=true)`.
//!
//! Floats use Rust's shortest round-trip formatting, so parsing the output
//! restores the exact vertices in the same order. Only known flags are written.

use std::fmt;
use std::str::FromStr;

use crate::error::{PolygonError, PolygonResult};
use crate::vector::Vec2;

use super::cache::Known;
use super::{Hints, Polygon};

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Polygon([")?;
        for (i, v) in self.verts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, {})", v.x, v.y)?;
        }
        f.write_str("]")?;
        match (self.cache.convex, self.cache.simple) {
            (Known::Value(true), _) => f.write_str(", is_convex=true")?,
            (Known::Value(false), Known::Value(simple)) => {
                write!(f, ", is_convex=false, is_simple={simple}")?
            }
            (Known::Value(false), Known::Unknown) => f.write_str(", is_convex=false")?,
            (Known::Unknown, Known::Value(simple)) => write!(f, ", is_simple={simple}")?,
            (Known::Unknown, Known::Unknown) => {}
        }
        f.write_str(")")
    }
}

impl FromStr for Polygon {
    type Err = PolygonError;

    fn from_str(s: &str) -> PolygonResult<Self> {
        let body = s
            .trim()
            .strip_prefix("Polygon(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| parse_error("expected `Polygon(...)`"))?;
        let open = body
            .find('[')
            .ok_or_else(|| parse_error("missing `[`"))?;
        let close = body
            .rfind(']')
            .filter(|&close| close > open)
            .ok_or_else(|| parse_error("missing `]`"))?;
        if !body[..open].trim().is_empty() {
            return Err(parse_error("unexpected text before vertex list"));
        }
        let points = parse_points(&body[open + 1..close])?;

        let mut hints = Hints::default();
        for item in body[close + 1..].split(',').map(str::trim) {
            if item.is_empty() {
                continue;
            }
            let (key, value) = item
                .split_once('=')
                .ok_or_else(|| parse_error(format!("expected `key=value`, got `{item}`")))?;
            let value = parse_bool(value.trim())?;
            match key.trim() {
                "is_convex" => hints.is_convex = Some(value),
                "is_simple" => hints.is_simple = Some(value),
                other => return Err(parse_error(format!("unknown flag `{other}`"))),
            }
        }
        Polygon::with_hints(points, hints)
    }
}

fn parse_points(list: &str) -> PolygonResult<Vec<Vec2>> {
    let mut points = Vec::new();
    let mut rest = list.trim();
    while !rest.is_empty() {
        let inner = rest
            .strip_prefix('(')
            .ok_or_else(|| parse_error(format!("expected `(` at `{rest}`")))?;
        let end = inner
            .find(')')
            .ok_or_else(|| parse_error("unterminated point"))?;
        let (x, y) = inner[..end]
            .split_once(',')
            .ok_or_else(|| parse_error(format!("expected `x, y`, got `{}`", &inner[..end])))?;
        points.push(Vec2::new(parse_f64(x)?, parse_f64(y)?));
        rest = inner[end + 1..].trim_start();
        if rest.is_empty() {
            break;
        }
        rest = rest
            .strip_prefix(',')
            .ok_or_else(|| parse_error(format!("expected `,` at `{rest}`")))?
            .trim_start();
    }
    Ok(points)
}

fn parse_f64(s: &str) -> PolygonResult<f64> {
    s.trim()
        .parse()
        .map_err(|_| parse_error(format!("invalid number `{}`", s.trim())))
}

fn parse_bool(s: &str) -> PolygonResult<bool> {
    match s {
        "true" | "True" => Ok(true),
        "false" | "False" => Ok(false),
        other => Err(parse_error(format!("invalid flag value `{other}`"))),
    }
}

fn parse_error(reason: impl Into<String>) -> PolygonError {
    PolygonError::Parse {
        reason: reason.into(),
    }
}
