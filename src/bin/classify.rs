//! Utility to grade a single nutrient profile from the command line
//!
//! Usage: nutrigrade-classify <calories> <protein> <fat> <carbs>
//! Missing trailing arguments count as zero.

use nutrigrade::models::NutrientProfile;
use nutrigrade::tools::grading;

fn parse_arg(args: &[String], index: usize, name: &str) -> Result<f64, Box<dyn std::error::Error>> {
    match args.get(index) {
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|e| format!("invalid {} '{}': {}", name, raw, e).into()),
        None => Ok(0.0),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > 4 || args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: nutrigrade-classify <calories> <protein> <fat> <carbs>");
        std::process::exit(2);
    }

    let profile = NutrientProfile::new(
        parse_arg(&args, 0, "calories")?,
        parse_arg(&args, 1, "protein")?,
        parse_arg(&args, 2, "fat")?,
        parse_arg(&args, 3, "carbs")?,
    );

    let response = grading::classify_nutrition(profile, false)?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
