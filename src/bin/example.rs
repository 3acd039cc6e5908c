//! Fiber Section Example - Reinforced Concrete Beam
//!
//! Runs a moment-curvature sweep with and without axial load and an
//! interaction sweep. Pass `--json` for machine-readable output; set
//! `RUST_LOG=debug` to follow the solver.

use anyhow::{Context, Result};
use fiber_section::prelude::*;
use fiber_section::results::converged_points;
use log::info;
use serde_json::json;

const WIDTH: f64 = 0.25;
const HEIGHT: f64 = 0.6;
const COVER: f64 = 0.05;
/// Area of one 20 mm bar (m²)
const BAR_AREA: f64 = 3.14e-4;

fn build_beam() -> Result<Section> {
    let concrete = Material::concrete_ec2(20e6, 0.002, 0.0035).context("concrete")?;
    let bottom_steel =
        Material::park_sampson_steel(200e9, 500e6, 600e6, 0.01, 0.09).context("bottom steel")?;
    let top_steel = Material::bilinear_steel(200e9, 500e6, Some(0.02)).context("top steel")?;

    let mut section = Section::new("RC beam 250x600");
    section.add_rectangular_patch(
        Rectangle::new(WIDTH, HEIGHT).at(WIDTH / 2.0, HEIGHT / 2.0),
        1,
        40,
        concrete,
    )?;

    // Two bars in each face
    for x in [COVER, WIDTH - COVER] {
        section.add_fiber(BAR_AREA, x, COVER, bottom_steel);
        section.add_fiber(BAR_AREA, x, HEIGHT - COVER, top_steel);
    }
    Ok(section)
}

fn main() -> Result<()> {
    env_logger::init();
    let as_json = std::env::args().any(|arg| arg == "--json");

    let section = build_beam()?;
    info!("{}", section);

    let solver = SectionSolver::new(&section);

    // Sagging: negative curvature compresses the top fibers
    let curvatures: Vec<f64> = (0..=60).map(|i| -0.0005 * i as f64).collect();
    let axial_load = -500e3;

    let bending = solver.moment_curvature_analysis(curvatures.iter().copied(), Some(0.0))?;
    let with_axial = solver.moment_curvature_analysis(curvatures.iter().copied(), Some(axial_load))?;
    let interaction = solver.interaction_curve(solver.search_bracket()?)?;

    let bending_summary = SweepSummary::from_points(&bending);
    let axial_summary = SweepSummary::from_points(&with_axial);

    if as_json {
        let output = json!({
            "section": section.name,
            "gross_area": section.total_area(),
            "centroid": section.centroid()?,
            "moment_curvature": converged_points(&bending),
            "moment_curvature_axial": {
                "axial_force": axial_load,
                "points": converged_points(&with_axial),
            },
            "interaction": interaction,
            "summary": {
                "pure_bending": bending_summary,
                "with_axial": axial_summary,
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("=== Fiber Section Example: {} ===\n", section.name);
    println!("Fibers: {}", section.fibers().len());
    println!("Area: {:.6} m²", section.total_area());
    let centroid = section.centroid()?;
    println!("Centroid: ({:.4}, {:.4}) m", centroid.x, centroid.y);
    println!("Ix: {:.6e} m⁴", section.moment_of_inertia()?.ix);

    println!("\n--- Moment-curvature (N = 0 and N = {:.0} kN) ---", axial_load / 1e3);
    println!("{:>12} {:>14} {:>14}", "κ (1/m)", "M (kN·m)", "M,N (kN·m)");
    for (plain, loaded) in bending.iter().zip(&with_axial) {
        println!(
            "{:>12.5} {:>14} {:>14}",
            plain.curvature,
            format_moment(plain.moment),
            format_moment(loaded.moment)
        );
    }

    println!("\n--- Interaction (κ = {}) ---", solver.options().interaction_curvature);
    println!("{:>10} {:>14} {:>14}", "NA (m)", "N (kN)", "M (kN·m)");
    for point in &interaction {
        println!(
            "{:>10.4} {:>14.2} {:>14.2}",
            point.neutral_axis,
            point.axial_force / 1e3,
            point.moment / 1e3
        );
    }

    println!("\n=== Summary ===");
    for (label, summary) in [("N = 0", bending_summary), ("with axial load", axial_summary)] {
        println!(
            "{}: peak M = {:.2} kN·m at κ = {:.4}, {} converged, {} failed",
            label,
            summary.peak_moment / 1e3,
            summary.peak_curvature,
            summary.converged,
            summary.failed
        );
    }

    Ok(())
}

fn format_moment(moment: Option<f64>) -> String {
    match moment {
        Some(m) => format!("{:.2}", m / 1e3),
        None => "-".to_string(),
    }
}
