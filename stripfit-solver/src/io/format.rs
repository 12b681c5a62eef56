//! The rectangle file format of spec.md §6: line 1 is the rectangle count
//! `N`; line 2 is `W H_target`; lines `3..N+2` are `w_i h_i` (extra
//! whitespace-separated fields on a line are ignored).

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use stripfit_core::Rectangle;

pub struct ParsedInstance {
    pub rectangles: Vec<Rectangle>,
    pub width: i64,
    /// `H_target`, or `None` if the line reads `+inf`/`inf` (spec.md §6:
    /// "known optimum `H_target` (or `+∞` if unknown)").
    pub target_height: Option<i64>,
}

pub fn parse_instance(path: &Path) -> Result<ParsedInstance> {
    let contents = fs::read_to_string(path).with_context(|| format!("could not read {path:?}"))?;
    let mut lines = contents.lines();

    let count: usize = lines
        .next()
        .context("missing rectangle count on line 1")?
        .split_whitespace()
        .next()
        .context("line 1 is empty")?
        .parse()
        .context("line 1 is not a valid rectangle count")?;

    let header = lines.next().context("missing width/height line 2")?;
    let mut header_fields = header.split_whitespace();
    let width: i64 = header_fields
        .next()
        .context("line 2 is missing the strip width")?
        .parse()
        .context("line 2's width is not an integer")?;
    let target_height = match header_fields.next() {
        None => bail!("line 2 is missing the target height"),
        Some(tok) if tok.eq_ignore_ascii_case("inf") || tok == "+inf" => None,
        Some(tok) => Some(
            tok.parse::<i64>()
                .with_context(|| format!("line 2's target height {tok:?} is not an integer"))?,
        ),
    };

    let mut rectangles = Vec::with_capacity(count);
    for (id, line) in lines.by_ref().take(count).enumerate() {
        let mut fields = line.split_whitespace();
        let w: i64 = fields
            .next()
            .with_context(|| format!("rectangle {id} is missing its width"))?
            .parse()
            .with_context(|| format!("rectangle {id}'s width is not an integer"))?;
        let h: i64 = fields
            .next()
            .with_context(|| format!("rectangle {id} is missing its height"))?
            .parse()
            .with_context(|| format!("rectangle {id}'s height is not an integer"))?;
        rectangles.push(Rectangle::new(id, w, h));
    }

    if rectangles.len() != count {
        bail!(
            "expected {count} rectangles, file only contained {}",
            rectangles.len()
        );
    }

    Ok(ParsedInstance {
        rectangles,
        width,
        target_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    fn write_temp(contents: &str) -> std::path::PathBuf {
        let id = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("stripfit-format-test-{id}.txt"));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parses_well_formed_instance() {
        let path = write_temp("2\n10 5\n10 5  # ignored trailing comment tokens\n4 4\n");
        let parsed = parse_instance(&path).unwrap();
        assert_eq!(parsed.width, 10);
        assert_eq!(parsed.target_height, Some(5));
        assert_eq!(parsed.rectangles.len(), 2);
        assert_eq!((parsed.rectangles[0].width, parsed.rectangles[0].height), (10, 5));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn treats_inf_as_unknown_target() {
        let path = write_temp("1\n10 inf\n3 3\n");
        let parsed = parse_instance(&path).unwrap();
        assert_eq!(parsed.target_height, None);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn rejects_truncated_rectangle_list() {
        let path = write_temp("2\n10 5\n3 3\n");
        let err = parse_instance(&path).unwrap_err();
        assert!(err.to_string().contains("expected 2"));
        fs::remove_file(&path).ok();
    }
}
