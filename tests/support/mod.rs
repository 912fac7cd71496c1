#![allow(dead_code)]

use wavyte_morph::{PathCommand, commands_from_json};

pub const EPSILON: f64 = 1e-3;

/// Just short of the end, where snapping does not apply yet.
pub const APPROX_MAX_T: f64 = 0.999999999999;

/// Splits path data into letters and numbers: `M5,5 L10,10` -> `M 5 5 L 10 10`.
fn items(path: &str) -> Vec<Result<char, f64>> {
    fn flush(num: &mut String, out: &mut Vec<Result<char, f64>>) {
        if !num.is_empty() {
            out.push(Err(num.parse().unwrap_or(f64::NAN)));
            num.clear();
        }
    }

    let mut out = Vec::new();
    let mut num = String::new();
    for c in path.chars() {
        if c.is_ascii_alphabetic() && c != 'e' && c != 'E' {
            flush(&mut num, &mut out);
            out.push(Ok(c));
        } else if c == ',' || c.is_whitespace() {
            flush(&mut num, &mut out);
        } else {
            num.push(c);
        }
    }
    flush(&mut num, &mut out);
    out
}

#[track_caller]
pub fn assert_approx_path(actual: &str, expected: &str) {
    let (a, e) = (items(actual), items(expected));
    let same = a.len() == e.len()
        && a.iter().zip(&e).all(|pair| match pair {
            (Ok(x), Ok(y)) => x == y,
            (Err(x), Err(y)) => (x - y).abs() <= EPSILON,
            _ => false,
        });
    assert!(same, "expected '{actual}' to approximately match '{expected}'");
}

#[track_caller]
pub fn assert_approx_commands(actual: &[PathCommand], expected: &[PathCommand]) {
    let same = actual.len() == expected.len()
        && actual.iter().zip(expected).all(|(a, e)| {
            a.same_shape(e)
                && a
                    .fields()
                    .iter()
                    .zip(&e.fields())
                    .all(|(x, y)| (x - y).abs() <= EPSILON)
        });
    assert!(same, "expected {actual:?} to approximately match {expected:?}");
}

/// Commands from their JSON object form.
#[track_caller]
pub fn cmds(json: &str) -> Vec<PathCommand> {
    commands_from_json(json).unwrap()
}
