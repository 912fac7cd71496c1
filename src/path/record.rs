//! JSON object form of path commands: `{"type":"C","x1":..,"y1":..,..}`.

use crate::foundation::error::{MorphError, MorphResult};
use crate::path::command::{CommandKind, PathCommand, PathCommands, PathOp};

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommandRecord {
    #[serde(rename = "type")]
    letter: char,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rx: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ry: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x_axis_rotation: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "flag_as_int"
    )]
    large_arc_flag: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "flag_as_int"
    )]
    sweep_flag: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
}

// Flags are written as `0`/`1` but read from any JSON number.
fn flag_as_int<S: serde::Serializer>(flag: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match flag {
        Some(v) => serializer.serialize_some(&u8::from(*v >= 0.5)),
        None => serializer.serialize_none(),
    }
}

impl CommandRecord {
    fn slot(&mut self, name: &str) -> Option<&mut Option<f64>> {
        Some(match name {
            "x1" => &mut self.x1,
            "y1" => &mut self.y1,
            "x2" => &mut self.x2,
            "y2" => &mut self.y2,
            "rx" => &mut self.rx,
            "ry" => &mut self.ry,
            "xAxisRotation" => &mut self.x_axis_rotation,
            "x" => &mut self.x,
            "y" => &mut self.y,
            _ => return None,
        })
    }

    fn flag(&self, name: &str) -> Option<f64> {
        match name {
            "largeArcFlag" => self.large_arc_flag,
            "sweepFlag" => self.sweep_flag,
            _ => None,
        }
    }
}

impl From<PathCommand> for CommandRecord {
    fn from(cmd: PathCommand) -> Self {
        let kind = cmd.kind();
        let mut rec = CommandRecord {
            letter: cmd.letter(),
            ..Default::default()
        };
        for (i, (name, v)) in kind
            .field_names()
            .iter()
            .zip(cmd.fields())
            .enumerate()
        {
            if kind.is_flag_field(i) {
                let flag = Some(if v >= 0.5 { 1.0 } else { 0.0 });
                match *name {
                    "largeArcFlag" => rec.large_arc_flag = flag,
                    _ => rec.sweep_flag = flag,
                }
            } else if let Some(slot) = rec.slot(name) {
                *slot = Some(v);
            }
        }
        rec
    }
}

impl TryFrom<CommandRecord> for PathCommand {
    type Error = MorphError;

    fn try_from(mut rec: CommandRecord) -> Result<Self, Self::Error> {
        let (kind, case) = CommandKind::from_letter(rec.letter)
            .ok_or_else(|| MorphError::serde(format!("unknown command type '{}'", rec.letter)))?;

        let mut fields = Vec::with_capacity(kind.arity());
        for (i, name) in kind.field_names().iter().enumerate() {
            let value = if kind.is_flag_field(i) {
                match rec.flag(name) {
                    Some(v) if v == 0.0 || v == 1.0 => Some(v),
                    Some(other) => {
                        return Err(MorphError::serde(format!(
                            "'{}' {name} must be 0 or 1, got {other}",
                            rec.letter
                        )));
                    }
                    None => None,
                }
            } else {
                rec.slot(name).and_then(|slot| slot.take())
            };
            let value = value.ok_or_else(|| {
                MorphError::serde(format!("'{}' command is missing {name}", rec.letter))
            })?;
            fields.push(value);
        }

        Ok(PathCommand::new(case, PathOp::from_fields(kind, &fields)))
    }
}

impl serde::Serialize for PathCommand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&CommandRecord::from(*self), serializer)
    }
}

impl<'de> serde::Deserialize<'de> for PathCommand {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rec = <CommandRecord as serde::Deserialize>::deserialize(deserializer)?;
        PathCommand::try_from(rec).map_err(serde::de::Error::custom)
    }
}

/// Decodes a JSON array of command objects.
pub fn commands_from_json(json: &str) -> MorphResult<PathCommands> {
    serde_json::from_str(json).map_err(|e| MorphError::serde(e.to_string()))
}

/// Encodes commands as a JSON array of command objects.
pub fn commands_to_json(commands: &[PathCommand]) -> MorphResult<String> {
    serde_json::to_string(commands).map_err(|e| MorphError::serde(e.to_string()))
}
