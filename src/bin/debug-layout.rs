/// Diagnostic tool to inspect a squarified layout from the command line
///
/// Usage: debug-layout <dx> <dy> <weight>...
use anyhow::{bail, Context};
use squarify_rs::{squarify, LayoutStats, Rect};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("squarify_rs=debug".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!("usage: debug-layout <dx> <dy> <weight>...");
    }

    let dx: f64 = args[0]
        .parse()
        .with_context(|| format!("invalid width '{}'", args[0]))?;
    let dy: f64 = args[1]
        .parse()
        .with_context(|| format!("invalid height '{}'", args[1]))?;
    let weights = args[2..]
        .iter()
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("invalid weight '{}'", s))
        })
        .collect::<anyhow::Result<Vec<f64>>>()?;

    let container = Rect::new(0.0, 0.0, dx, dy);
    println!("=== DIAGNOSTIC: Squarified Layout ===");
    println!("Container: {}", container);
    println!("Weights:   {} items", weights.len());

    let rects = squarify(&weights, 0.0, 0.0, dx, dy).context("layout failed")?;

    println!("\n[1] Rectangles:");
    for (i, (rect, weight)) in rects.iter().zip(&weights).enumerate() {
        println!(
            "    [{}] weight={} - rect: {:.3}x{:.3} at ({:.3}, {:.3}) - ratio {:.3}",
            i,
            weight,
            rect.dx,
            rect.dy,
            rect.x,
            rect.y,
            rect.aspect_ratio()
        );
    }

    let stats = LayoutStats::measure(&rects, container);
    println!("\n[2] Checking for anomalies:");
    println!("    Total rect area: {:.3}", stats.covered_area);
    println!("    Container area:  {:.3}", container.area());
    println!("    Coverage: {:.4}%", stats.coverage * 100.0);
    println!("    Worst ratio: {:.3}", stats.worst_ratio);
    println!("    Mean ratio:  {:.3}", stats.mean_ratio);

    let escaped = rects
        .iter()
        .filter(|r| !container.contains(r, 1e-9 * container.dx.max(container.dy)))
        .count();
    if escaped > 0 {
        println!("    WARNING: {} rects extend past the container", escaped);
    }

    Ok(())
}
