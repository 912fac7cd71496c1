mod support;

use support::{APPROX_MAX_T, assert_approx_commands, cmds};
use wavyte_morph::{
    CommandInterpolator, MorphOptions, PathCommand, commands_to_json, interpolate_path_commands,
};

fn morph(a: Option<&[PathCommand]>, b: Option<&[PathCommand]>) -> CommandInterpolator {
    interpolate_path_commands(a, b, MorphOptions::default())
}

#[test]
fn equal_length_lines() {
    let a = cmds(r#"[{"type":"M","x":0,"y":0},{"type":"L","x":10,"y":10},{"type":"L","x":100,"y":100}]"#);
    let b = cmds(r#"[{"type":"M","x":10,"y":10},{"type":"L","x":20,"y":20},{"type":"L","x":200,"y":200}]"#);
    let interp = morph(Some(&a), Some(&b));
    assert_eq!(interp.eval(0.0), a);
    assert_eq!(interp.eval(1.0), b);
    assert_eq!(
        interp.eval(0.5),
        cmds(r#"[{"type":"M","x":5,"y":5},{"type":"L","x":15,"y":15},{"type":"L","x":150,"y":150}]"#)
    );
}

#[test]
fn longer_source_splits_the_destination() {
    let a = cmds(r#"[{"type":"M","x":0,"y":0},{"type":"L","x":10,"y":10},{"type":"L","x":100,"y":100}]"#);
    let b = cmds(r#"[{"type":"M","x":10,"y":10},{"type":"L","x":20,"y":20}]"#);
    let interp = morph(Some(&a), Some(&b));
    assert_eq!(interp.eval(0.0), a);
    assert_eq!(interp.eval(1.0), b);
    assert_approx_commands(
        &interp.eval(APPROX_MAX_T),
        &cmds(r#"[{"type":"M","x":10,"y":10},{"type":"L","x":15,"y":15},{"type":"L","x":20,"y":20}]"#),
    );
    assert_eq!(
        interp.eval(0.5),
        cmds(r#"[{"type":"M","x":5,"y":5},{"type":"L","x":12.5,"y":12.5},{"type":"L","x":60,"y":60}]"#)
    );
}

#[test]
fn shorter_source_is_extended() {
    let a = cmds(r#"[{"type":"M","x":0,"y":0},{"type":"L","x":10,"y":10}]"#);
    let b = cmds(r#"[{"type":"M","x":10,"y":10},{"type":"L","x":20,"y":20},{"type":"L","x":200,"y":200}]"#);
    let interp = morph(Some(&a), Some(&b));
    assert_eq!(
        interp.eval(0.0),
        cmds(r#"[{"type":"M","x":0,"y":0},{"type":"L","x":5,"y":5},{"type":"L","x":10,"y":10}]"#)
    );
    assert_approx_commands(&interp.eval(APPROX_MAX_T), &b);
    assert_eq!(
        interp.eval(0.5),
        cmds(r#"[{"type":"M","x":5,"y":5},{"type":"L","x":12.5,"y":12.5},{"type":"L","x":105,"y":105}]"#)
    );
}

#[test]
fn point_with_close_against_lines() {
    let a = cmds(r#"[{"type":"M","x":0,"y":0},{"type":"Z"}]"#);
    let b = cmds(r#"[{"type":"M","x":10,"y":10},{"type":"L","x":20,"y":20},{"type":"L","x":200,"y":200}]"#);
    let interp = morph(Some(&a), Some(&b));
    assert_eq!(
        interp.eval(0.0),
        cmds(r#"[{"type":"M","x":0,"y":0},{"type":"L","x":0,"y":0},{"type":"L","x":0,"y":0}]"#)
    );
    assert_eq!(interp.eval(1.0), b);
    assert_eq!(
        interp.eval(0.5),
        cmds(r#"[{"type":"M","x":5,"y":5},{"type":"L","x":10,"y":10},{"type":"L","x":100,"y":100}]"#)
    );
}

#[test]
fn lines_against_point_with_close() {
    let a = cmds(r#"[{"type":"M","x":0,"y":0},{"type":"L","x":10,"y":10},{"type":"L","x":100,"y":100}]"#);
    let b = cmds(r#"[{"type":"M","x":10,"y":10},{"type":"Z"}]"#);
    let interp = morph(Some(&a), Some(&b));
    assert_eq!(interp.eval(0.0), a);
    assert_eq!(interp.eval(1.0), b);
    assert_eq!(
        interp.eval(0.5),
        cmds(r#"[{"type":"M","x":5,"y":5},{"type":"L","x":10,"y":10},{"type":"L","x":55,"y":55}]"#)
    );
}

#[test]
fn absent_source() {
    let b = cmds(r#"[{"type":"M","x":10,"y":10},{"type":"L","x":20,"y":20},{"type":"L","x":200,"y":200}]"#);
    let interp = morph(None, Some(&b));
    assert_eq!(
        interp.eval(0.0),
        cmds(r#"[{"type":"M","x":10,"y":10},{"type":"L","x":10,"y":10},{"type":"L","x":10,"y":10}]"#)
    );
    assert_eq!(interp.eval(1.0), b);
    assert_eq!(
        interp.eval(0.5),
        cmds(r#"[{"type":"M","x":10,"y":10},{"type":"L","x":15,"y":15},{"type":"L","x":105,"y":105}]"#)
    );
}

#[test]
fn absent_destination() {
    let a = cmds(r#"[{"type":"M","x":0,"y":0},{"type":"L","x":10,"y":10},{"type":"L","x":100,"y":100}]"#);
    let interp = morph(Some(&a), None);
    assert_eq!(interp.eval(0.0), a);
    assert!(interp.eval(1.0).is_empty());
    assert_eq!(
        interp.eval(0.5),
        cmds(r#"[{"type":"M","x":0,"y":0},{"type":"L","x":5,"y":5},{"type":"L","x":50,"y":50}]"#)
    );
}

#[test]
fn both_absent() {
    let interp = morph(None, None);
    for t in [0.0, 0.5, 1.0] {
        assert!(interp.eval(t).is_empty());
    }
}

#[test]
fn both_closed() {
    let a = cmds(r#"[{"type":"M","x":0,"y":0},{"type":"Z"}]"#);
    let b = cmds(r#"[{"type":"M","x":10,"y":10},{"type":"L","x":20,"y":20},{"type":"Z"}]"#);
    let interp = morph(Some(&a), Some(&b));
    assert_eq!(
        interp.eval(0.0),
        cmds(r#"[{"type":"M","x":0,"y":0},{"type":"L","x":0,"y":0},{"type":"Z"}]"#)
    );
    assert_eq!(interp.eval(1.0), b);
    assert_eq!(
        interp.eval(0.5),
        cmds(r#"[{"type":"M","x":5,"y":5},{"type":"L","x":10,"y":10},{"type":"Z"}]"#)
    );
}

#[test]
fn absent_source_closed_destination() {
    let b = cmds(r#"[{"type":"M","x":10,"y":10},{"type":"L","x":20,"y":20},{"type":"Z"}]"#);
    let interp = morph(None, Some(&b));
    assert_eq!(
        interp.eval(0.0),
        cmds(r#"[{"type":"M","x":10,"y":10},{"type":"L","x":10,"y":10},{"type":"Z"}]"#)
    );
    assert_eq!(interp.eval(1.0), b);
    assert_eq!(
        interp.eval(0.5),
        cmds(r#"[{"type":"M","x":10,"y":10},{"type":"L","x":15,"y":15},{"type":"Z"}]"#)
    );
}

#[test]
fn evaluated_commands_serialize_to_the_object_form() {
    let a = cmds(r#"[{"type":"M","x":0,"y":0},{"type":"a","rx":1,"ry":1,"xAxisRotation":0,"largeArcFlag":0,"sweepFlag":0,"x":4,"y":0}]"#);
    let b = cmds(r#"[{"type":"M","x":0,"y":0},{"type":"a","rx":3,"ry":3,"xAxisRotation":0,"largeArcFlag":1,"sweepFlag":1,"x":8,"y":0}]"#);
    let interp = morph(Some(&a), Some(&b));
    assert_eq!(
        commands_to_json(&interp.eval(0.5)).unwrap(),
        r#"[{"type":"M","x":0.0,"y":0.0},{"type":"a","rx":2.0,"ry":2.0,"xAxisRotation":0.0,"largeArcFlag":1,"sweepFlag":1,"x":6.0,"y":0.0}]"#
    );
}
