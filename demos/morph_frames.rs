use wavyte_morph::{MorphOptions, commands_to_json, interpolate_path, parse_path, to_bez_path};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let square = "M10,10 H90 V90 H10 Z";
    let blob = "M50,5 C80,5 95,30 95,50 S80,95 50,95 A45,45 0 0 1 5,50 Q5,5 50,5 Z";
    let options = MorphOptions::from_json(r#"{ "snapEndsToInput": true }"#)?;
    let morph = interpolate_path(square, blob, options);

    for f in 0..=6u32 {
        let t = f64::from(f) / 6.0;
        let d = morph.eval(t);
        let bbox = kurbo::Shape::bounding_box(&to_bez_path(&parse_path(d.as_str())));
        println!("t={t:.3} bbox={:.1}x{:.1} d={d}", bbox.width(), bbox.height());
    }

    let mid = morph.plan().blend(0.5);
    println!("{}", commands_to_json(&mid)?);

    Ok(())
}
