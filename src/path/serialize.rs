use std::fmt;

use crate::foundation::math::Num;
use crate::path::command::PathCommand;

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        let kind = self.kind();
        for (i, v) in self.op.fields().into_iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if kind.is_flag_field(i) {
                f.write_str(if v >= 0.5 { "1" } else { "0" })?;
            } else {
                write!(f, "{}", Num(v))?;
            }
        }
        Ok(())
    }
}

/// Renders commands as compact path data: `M0,0L10,10Z`.
pub fn serialize_path(commands: &[PathCommand]) -> String {
    use fmt::Write as _;

    let mut out = String::with_capacity(commands.len() * 16);
    for cmd in commands {
        // Writing into a String cannot fail.
        let _ = write!(out, "{cmd}");
    }
    out
}
