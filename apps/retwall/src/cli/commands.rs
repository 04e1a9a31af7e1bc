//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api::{self, AppState, FieldsResponse};
use crate::config::{WallFile, load_wall_file};
use retwall_core::{
    ForceBreakdown, StabilityReport, WallDraft, WallError, breakdown, check_domain, evaluate,
    to_fixed,
};
use std::path::Path;

// =============================================================================
// DRAFT ASSEMBLY
// =============================================================================

/// Build a draft from an optional wall file and `field=value` overrides.
///
/// Overrides apply in order, after the file, through parse-or-zero.
pub fn build_draft(file: Option<&Path>, overrides: &[String]) -> Result<WallDraft, WallError> {
    let mut draft = match file {
        Some(path) => {
            tracing::info!("Loading wall file {:?}", path);
            load_wall_file(path)?.into_draft()
        }
        None => WallDraft::new(),
    };

    for item in overrides {
        let (name, raw) = item.split_once('=').ok_or_else(|| WallError::InvalidValue {
            field: item.clone(),
            reason: "expected FIELD=VALUE".to_string(),
        })?;
        draft.set_raw_str(name, raw)?;
    }

    Ok(draft)
}

/// Render intermediate quantities, one per line.
pub fn render_breakdown(f: &ForceBreakdown) -> String {
    let rows = [
        ("φ", to_fixed(f.friction_angle_rad, 4), "rad"),
        ("Ka", to_fixed(f.ka, 4), ""),
        ("Pa", to_fixed(f.active_thrust, 2), "kN/m"),
        ("Mo", to_fixed(f.overturning_moment, 2), "kN·m/m"),
        ("B", to_fixed(f.base_width, 3), "m"),
        ("t_base", to_fixed(f.base_thickness, 3), "m"),
        ("t_stem", to_fixed(f.stem_thickness, 3), "m"),
        ("V_base", to_fixed(f.base_volume, 3), "m³/m"),
        ("V_stem", to_fixed(f.stem_volume, 3), "m³/m"),
        ("W", to_fixed(f.self_weight, 2), "kN/m"),
        ("x_W", to_fixed(f.weight_arm, 3), "m"),
        ("Mr", to_fixed(f.resisting_moment, 2), "kN·m/m"),
        ("R", to_fixed(f.sliding_resistance, 2), "kN/m"),
    ];

    let mut out = String::from("Breakdown\n");
    for (label, value, unit) in rows {
        out.push_str(&format!("  {:<7} = {} {}\n", label, value, unit));
    }
    out.trim_end().to_string()
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Evaluate one wall and print the report.
pub fn cmd_check(
    file: Option<&Path>,
    overrides: &[String],
    strict: bool,
    detailed: bool,
    json_mode: bool,
) -> Result<(), WallError> {
    let draft = build_draft(file, overrides)?;
    let input = draft.build();

    let warnings = check_domain(&input);
    for warning in &warnings {
        tracing::warn!("Domain warning: {}", warning);
    }
    if strict && !warnings.is_empty() {
        return Err(WallError::DomainCheckFailed(warnings.len()));
    }

    let result = evaluate(&input);
    let report = StabilityReport::from(&result);
    tracing::info!(
        wall = %draft.profile().name,
        all_ok = result.all_ok(),
        "Evaluated wall"
    );

    if json_mode {
        let mut output = serde_json::json!({
            "profile": draft.profile(),
            "input": input,
            "result": result,
            "report": report,
            "warnings": warnings.iter().map(ToString::to_string).collect::<Vec<_>>(),
        });
        if detailed {
            output["breakdown"] = serde_json::json!(breakdown(&input));
        }
        let text = serde_json::to_string_pretty(&output)
            .map_err(|e| WallError::SerializationError(e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }

    println!("{}", report.render_for(draft.profile()));

    if detailed {
        println!();
        println!("{}", render_breakdown(&breakdown(&input)));
    }

    if !warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &warnings {
            println!("  - {}", warning);
        }
    }

    Ok(())
}

// =============================================================================
// DEFAULTS / FIELDS COMMANDS
// =============================================================================

/// Print the default wall file.
pub fn cmd_defaults() -> Result<(), WallError> {
    let text = WallFile::default().to_toml_string()?;
    print!("{}", text);
    Ok(())
}

/// List editable fields.
pub fn cmd_fields(json_mode: bool) -> Result<(), WallError> {
    let catalogue = FieldsResponse::catalogue();

    if json_mode {
        let text = serde_json::to_string_pretty(&catalogue)
            .map_err(|e| WallError::SerializationError(e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }

    println!(
        "{:<22} {:<20} {:<6} {:>8}  used",
        "field", "form alias", "unit", "default"
    );
    for field in &catalogue.fields {
        println!(
            "{:<22} {:<20} {:<6} {:>8}  {}",
            field.name,
            field.alias,
            field.unit,
            field.default,
            if field.feeds_calculation { "yes" } else { "no" }
        );
    }
    Ok(())
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(host: &str, port: u16, strict: bool) -> Result<(), WallError> {
    println!("Retwall Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:   {}", host);
    println!("  Port:   {}", port);
    println!("  Strict: {}", strict);
    println!();
    println!("Endpoints:");
    println!("  GET  /health   - Health check");
    println!("  GET  /defaults - Default wall");
    println!("  GET  /fields   - Field catalogue");
    println!("  POST /evaluate - Evaluate a wall");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, AppState::new(strict)).await
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use retwall_core::WallInput;
    use std::io::Write;

    #[test]
    fn build_draft_without_inputs_is_default() {
        let draft = build_draft(None, &[]).expect("draft");
        assert_eq!(draft.build(), WallInput::default());
    }

    #[test]
    fn overrides_apply_after_file() {
        let mut tmp = tempfile::NamedTempFile::new().expect("tmp");
        writeln!(tmp, "[general]\nheight = 5.0\n[soil]\ncohesion = 4.0").expect("write");

        let overrides = vec!["altura=6".to_string(), "name=M3".to_string()];
        let draft = build_draft(Some(tmp.path()), &overrides).expect("draft");

        assert_eq!(draft.build().height, 6.0);
        assert_eq!(draft.build().cohesion, 4.0);
        assert_eq!(draft.profile().name, "M3");
    }

    #[test]
    fn override_text_goes_through_parse_or_zero() {
        let draft = build_draft(None, &["surcharge=lots".to_string()]).expect("draft");
        assert_eq!(draft.build().surcharge, 0.0);
    }

    #[test]
    fn malformed_override_rejected() {
        let result = build_draft(None, &["height".to_string()]);
        assert!(matches!(result, Err(WallError::InvalidValue { .. })));

        let result = build_draft(None, &["colour=red".to_string()]);
        assert!(matches!(result, Err(WallError::UnknownField(_))));
    }

    #[test]
    fn strict_check_refuses_out_of_domain_wall() {
        let result = cmd_check(None, &["height=0".to_string()], true, false, true);
        assert!(matches!(result, Err(WallError::DomainCheckFailed(1))));
    }

    #[test]
    fn lenient_check_evaluates_degenerate_wall() {
        let overrides = vec!["inner_base=0".to_string(), "outer_base=0".to_string()];
        assert!(cmd_check(None, &overrides, false, true, true).is_ok());
    }

    #[test]
    fn breakdown_lists_every_quantity() {
        let text = render_breakdown(&breakdown(&WallInput::default()));
        assert!(text.starts_with("Breakdown"));
        assert!(text.contains("W       = 58.80 kN/m"));
        assert!(text.contains("Mr      = 72.03 kN·m/m"));
        assert_eq!(text.lines().count(), 14);
    }
}
