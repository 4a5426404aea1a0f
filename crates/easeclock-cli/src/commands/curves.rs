use anyhow::Result;

use easeclock_core::Curve;

pub fn run() -> Result<()> {
    println!("Easing curves ({}):\n", Curve::ALL.len());
    println!("  {:<18} {:>8} {:>8} {:>8}", "name", "t=0.25", "t=0.5", "t=0.75");

    for curve in Curve::ALL {
        println!(
            "  {:<18} {:>8.4} {:>8.4} {:>8.4}",
            curve.name(),
            curve.apply(0.25),
            curve.apply(0.5),
            curve.apply(0.75)
        );
    }

    println!("\nCustom curves: pass x1,y1,x2,y2 to --easing for a cubic bezier.");
    Ok(())
}
