use std::time::{Duration, Instant};

use anyhow::Context as _;
use serde_json::json;
use wavyte_morph::{MorphOptions, interpolate_path};

#[derive(Clone, Debug)]
struct BenchArgs {
    from_len: usize,
    to_len: usize,
    frames: usize,
    warmup: u32,
    repeats: u32,
    json: bool,
}

#[derive(Clone, Debug, Default)]
struct RunMetrics {
    build: Duration,
    eval_total: Duration,
    output_bytes: usize,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = parse_args()?;
    if args.from_len == 0 || args.to_len == 0 {
        anyhow::bail!("--from-len/--to-len must be > 0");
    }
    if args.frames < 2 {
        anyhow::bail!("--frames must be >= 2");
    }
    if args.repeats == 0 {
        anyhow::bail!("--repeats must be > 0");
    }

    let a = wave_path(args.from_len, 40.0);
    let b = curve_path(args.to_len, 25.0);
    eprintln!(
        "paths: from={} commands ({} bytes), to={} commands ({} bytes)",
        args.from_len,
        a.len(),
        args.to_len,
        b.len()
    );

    if args.warmup > 0 {
        eprintln!("warmup: {} run(s)", args.warmup);
    }
    for _ in 0..args.warmup {
        run_once(&args, &a, &b)?;
    }

    let mut runs = Vec::with_capacity(args.repeats as usize);
    for run_idx in 0..args.repeats {
        let m = run_once(&args, &a, &b)?;
        eprintln!(
            "run {run_idx:03}: build={build:.3}ms eval={ev:.3}ms per_frame={pf:.1}us bytes={bytes}",
            build = m.build.as_secs_f64() * 1000.0,
            ev = m.eval_total.as_secs_f64() * 1000.0,
            pf = m.eval_total.as_secs_f64() * 1e6 / args.frames as f64,
            bytes = m.output_bytes,
        );
        runs.push(m);
    }

    report_percentiles(&runs, args.json);
    Ok(())
}

fn run_once(args: &BenchArgs, a: &str, b: &str) -> anyhow::Result<RunMetrics> {
    let mut m = RunMetrics::default();

    let t = Instant::now();
    let interp = interpolate_path(a, b, MorphOptions::default());
    m.build = t.elapsed();

    let t = Instant::now();
    for f in 0..args.frames {
        let d = interp.eval(f as f64 / (args.frames - 1) as f64);
        m.output_bytes += d.len();
    }
    m.eval_total = t.elapsed();

    if interp.eval(1.0) != b {
        anyhow::bail!("interpolator did not snap to the destination at t=1");
    }
    Ok(m)
}

/// Polyline zig-zag with `n` commands.
fn wave_path(n: usize, amp: f64) -> String {
    let mut d = String::from("M0,0");
    for i in 1..n {
        let y = if i % 2 == 0 { amp } else { -amp };
        d.push_str(&format!("L{},{y}", i * 10));
    }
    d.push('Z');
    d
}

/// Cubic wave with `n` commands, mixing absolute and relative segments.
fn curve_path(n: usize, amp: f64) -> String {
    let mut d = String::from("M0,100");
    for i in 1..n {
        if i % 3 == 0 {
            d.push_str(&format!("s5,{amp},10,0"));
        } else {
            let x = i as f64 * 10.0;
            d.push_str(&format!("C{},{},{},{},{x},100", x - 7.0, 100.0 + amp, x - 3.0, 100.0 - amp));
        }
    }
    d.push('Z');
    d
}

fn parse_args() -> anyhow::Result<BenchArgs> {
    let mut args = std::env::args().skip(1);

    let mut out = BenchArgs {
        from_len: 2_000,
        to_len: 5_000,
        frames: 120,
        warmup: 1,
        repeats: 20,
        json: false,
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--from-len" => out.from_len = parse_usize(args.next(), "--from-len")?,
            "--to-len" => out.to_len = parse_usize(args.next(), "--to-len")?,
            "--frames" => out.frames = parse_usize(args.next(), "--frames")?,
            "--warmup" => out.warmup = parse_u32(args.next(), "--warmup")?,
            "--repeats" => out.repeats = parse_u32(args.next(), "--repeats")?,
            "--json" => out.json = true,
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => anyhow::bail!("unknown arg '{a}' (try --help)"),
        }
    }

    Ok(out)
}

fn print_help() {
    eprintln!(
        r#"wavyte-morph-bench

Builds a morph between two generated paths and evaluates it over a range of
frames, reporting p50/p90/p99 for build and evaluation.

Usage:
  cargo run -q --release
  cargo run -q --release -- --from-len 500 --to-len 20000 --frames 60

Args:
  --from-len N     commands in the source path (default 2000)
  --to-len N       commands in the destination path (default 5000)
  --frames N       evaluations per run, t spread over [0, 1] (default 120)
  --warmup N       (default 1)
  --repeats N      (default 20)
  --json           print the summary as one JSON object on stdout
"#
    );
}

fn parse_u32(v: Option<String>, flag: &str) -> anyhow::Result<u32> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<u32>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}

fn parse_usize(v: Option<String>, flag: &str) -> anyhow::Result<usize> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<usize>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}

fn report_percentiles(runs: &[RunMetrics], as_json: bool) {
    type Getter = fn(&RunMetrics) -> Duration;

    fn collect(runs: &[RunMetrics], f: Getter) -> Vec<Duration> {
        let mut v = runs.iter().map(f).collect::<Vec<_>>();
        v.sort_by_key(|d| d.as_nanos());
        v
    }

    fn p(v: &[Duration], p: f64) -> Duration {
        if v.is_empty() {
            return Duration::ZERO;
        }
        let n = v.len();
        let rank = (p * (n as f64)).ceil().clamp(1.0, n as f64) as usize;
        v[rank - 1]
    }

    fn ms(d: Duration) -> f64 {
        d.as_secs_f64() * 1000.0
    }

    let fields: &[(&'static str, Getter)] = &[("build", |m| m.build), ("eval_total", |m| m.eval_total)];

    let mut summary = serde_json::Map::new();
    eprintln!("\npercentiles across runs (p50/p90/p99):");
    for (name, getter) in fields {
        let v = collect(runs, *getter);
        let (p50, p90, p99) = (p(&v, 0.50), p(&v, 0.90), p(&v, 0.99));
        eprintln!(
            "  {name:12} p50={:>10.3}ms  p90={:>10.3}ms  p99={:>10.3}ms",
            ms(p50),
            ms(p90),
            ms(p99)
        );
        summary.insert(
            (*name).to_owned(),
            json!({ "p50_ms": ms(p50), "p90_ms": ms(p90), "p99_ms": ms(p99) }),
        );
    }

    if as_json {
        println!("{}", serde_json::Value::Object(summary));
    }
}
