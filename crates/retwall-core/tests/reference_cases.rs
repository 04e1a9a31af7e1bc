//! # Reference Case Tests (R0-R3)
//!
//! Hand-checked walls. If ANY tier fails, the calculator is INVALID.
//!
//! ## Tiers
//! - R0: Rankine thrust
//! - R1: Default wall, step by step
//! - R2: Verdict boundaries
//! - R3: Degenerate input

use retwall_core::{
    StabilityReport, WallDraft, WallField, WallInput, breakdown, check_domain, evaluate,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {} ± {}, got {}",
        expected,
        tol,
        actual
    );
}

// =============================================================================
// TIER R0: RANKINE THRUST
// =============================================================================

mod r0_rankine_thrust {
    use super::*;

    /// R0.1: φ = 30° gives Ka = tan²(30°) = 1/3.
    #[test]
    fn ka_for_thirty_degrees() {
        let result = evaluate(&WallInput::default());
        assert_close(result.ka, 1.0 / 3.0, 1e-12);
    }

    /// R0.2: Ka decreases as φ grows.
    #[test]
    fn ka_decreases_with_friction() {
        let ka = |phi: f64| {
            evaluate(&WallInput {
                friction_angle: phi,
                ..WallInput::default()
            })
            .ka
        };
        assert!(ka(20.0) > ka(30.0));
        assert!(ka(30.0) > ka(40.0));
        assert_close(ka(40.0), 0.217_442_8, 1e-6);
    }

    /// R0.3: H=3, γs=18, q=5 → Pa = 27 + 5 kN/m.
    #[test]
    fn thrust_soil_plus_surcharge() {
        let result = evaluate(&WallInput::default());
        assert_close(result.active_thrust, 32.0, 1e-9);

        let no_surcharge = evaluate(&WallInput {
            surcharge: 0.0,
            ..WallInput::default()
        });
        assert_close(no_surcharge.active_thrust, 27.0, 1e-9);
    }

    /// R0.4: Thrust grows with the square of the height when q = 0.
    #[test]
    fn thrust_scales_with_height_squared() {
        let at = |h: f64| {
            evaluate(&WallInput {
                height: h,
                surcharge: 0.0,
                ..WallInput::default()
            })
            .active_thrust
        };
        assert_close(at(6.0) / at(3.0), 4.0, 1e-12);
    }
}

// =============================================================================
// TIER R1: DEFAULT WALL
// =============================================================================

mod r1_default_wall {
    use super::*;

    /// R1.1: Geometry and weight of the form's initial wall.
    #[test]
    fn weight_and_moments() {
        let f = breakdown(&WallInput::default());
        assert_close(f.self_weight, 58.8, 1e-9);
        assert_close(f.weight_arm, 1.225, 1e-12);
        assert_close(f.resisting_moment, 72.03, 1e-9);
        assert_close(f.overturning_moment, 32.0, 1e-9);
    }

    /// R1.2: Sliding fails, overturning passes.
    #[test]
    fn factors_of_safety() {
        let result = evaluate(&WallInput::default());
        assert_close(result.sliding_factor, 0.918_75, 1e-9);
        assert!(!result.sliding_ok);
        assert_close(result.overturning_factor, 2.250_937_5, 1e-9);
        assert!(result.overturning_ok);
    }

    /// R1.3: Resultant outside the middle third, so bearing fails even
    /// though σ_max is well under σ_adm.
    #[test]
    fn bearing_fails_on_eccentricity() {
        let result = evaluate(&WallInput::default());
        assert_close(result.eccentricity, 40.03 / 58.8, 1e-9);
        assert_close(result.max_bearing_pressure, 89.445, 1e-9);
        assert!(result.max_bearing_pressure <= 200.0);
        assert!(!result.bearing_ok);
    }

    /// R1.4: Display rounding of the default wall.
    #[test]
    fn rounded_report() {
        let report = StabilityReport::from(&evaluate(&WallInput::default()));
        assert_eq!(
            (
                report.ka.as_str(),
                report.active_thrust.as_str(),
                report.self_weight.as_str()
            ),
            ("0.333", "32.00", "58.80")
        );
        assert_eq!(report.eccentricity, "0.681");
        assert_eq!(report.max_bearing_pressure, "89.4");
    }

    /// R1.5: A draft fed the form's text yields the same result.
    #[test]
    fn draft_from_form_text() {
        let mut draft = WallDraft::new();
        for (name, raw) in [
            ("altura", "3"),
            ("gamma_solo", "18"),
            ("ang_atrito", "30"),
            ("coesao", "0"),
            ("sobrecarga", "5"),
            ("base_interna", "1.0"),
            ("base_externa", "1.0"),
            ("altura_maior", "0.7"),
            ("altura_menor", "0.4"),
            ("largura_topo", "0.3"),
            ("largura_base_parede", "0.6"),
            ("gamma_concreto", "24"),
            ("mu", "0.5"),
            ("sigma_adm", "200"),
        ] {
            draft.set_raw_str(name, raw).expect("known field");
        }
        assert_eq!(evaluate(&draft.build()), evaluate(&WallInput::default()));
    }
}

// =============================================================================
// TIER R2: VERDICT BOUNDARIES
// =============================================================================

mod r2_verdict_boundaries {
    use super::*;

    /// No thrust (φ = 90°, Ka = 0) on a 6 m base with the weight
    /// acting exactly 1 m from the toe: e = B/6 exactly.
    fn middle_third_wall(outer_base: f64) -> WallInput {
        WallInput {
            friction_angle: 90.0,
            inner_base: 6.0 - outer_base,
            outer_base,
            higher_footing: 0.5,
            lower_footing: 0.5,
            top_width: 0.5,
            stem_base_width: 0.5,
            ..WallInput::default()
        }
    }

    /// R2.1: e == B/6 still passes the middle-third rule.
    #[test]
    fn eccentricity_on_middle_third_passes() {
        let result = evaluate(&middle_third_wall(0.75));
        assert_eq!(result.eccentricity, 1.0);
        assert_eq!(result.max_bearing_pressure, 36.0);
        assert!(result.bearing_ok);
    }

    /// R2.2: Just past B/6 fails.
    #[test]
    fn eccentricity_past_middle_third_fails() {
        let result = evaluate(&middle_third_wall(0.76));
        assert!(result.eccentricity > 1.0);
        assert!(!result.bearing_ok);
    }

    /// R2.3: σ_max == σ_adm passes.
    #[test]
    fn bearing_pressure_equal_to_allowable_passes() {
        let input = WallInput {
            allowable_bearing: 36.0,
            ..middle_third_wall(0.75)
        };
        assert!(evaluate(&input).bearing_ok);

        let tighter = WallInput {
            allowable_bearing: 35.9,
            ..input
        };
        assert!(!evaluate(&tighter).bearing_ok);
    }

    /// R2.4: Cohesion can lift sliding over 1.5.
    #[test]
    fn cohesion_rescues_sliding() {
        // need R >= 1.5 * 32 = 48; W·µ = 29.4, so c·B >= 18.6
        let input = WallInput {
            cohesion: 9.3,
            ..WallInput::default()
        };
        let result = evaluate(&input);
        assert_close(result.sliding_factor, 1.5, 1e-9);

        let more = evaluate(&WallInput {
            cohesion: 9.4,
            ..WallInput::default()
        });
        assert!(more.sliding_ok);
    }

    /// R2.5: Profile fields never reach the verdicts.
    #[test]
    fn profile_fields_are_inert() {
        let mut draft = WallDraft::new();
        let baseline = evaluate(&draft.build());
        draft
            .set(WallField::InnerInclination, 20.0)
            .set(WallField::KeyHeight, 0.5)
            .set(WallField::Elevation, 150.0);
        draft.set_name("M9");
        assert_eq!(evaluate(&draft.build()), baseline);
    }
}

// =============================================================================
// TIER R3: DEGENERATE INPUT
// =============================================================================

mod r3_degenerate_input {
    use super::*;

    /// R3.1: B = 0 returns non-finite bearing pressure without panicking.
    #[test]
    fn zero_base_width() {
        let input = WallInput {
            inner_base: 0.0,
            outer_base: 0.0,
            ..WallInput::default()
        };
        let result = evaluate(&input);
        assert!(!result.max_bearing_pressure.is_finite());
        assert!(result.sliding_factor.is_finite());
        assert!(!result.bearing_ok);
        assert!(!check_domain(&input).is_empty());
    }

    /// R3.2: H = 0 means no thrust; both factors of safety blow up.
    #[test]
    fn zero_height() {
        let result = evaluate(&WallInput {
            height: 0.0,
            ..WallInput::default()
        });
        assert_eq!(result.active_thrust, 0.0);
        assert!(!result.sliding_factor.is_finite());
        assert!(!result.overturning_factor.is_finite());
    }

    /// R3.3: No concrete at all gives a non-finite eccentricity.
    #[test]
    fn zero_weight() {
        let result = evaluate(&WallInput {
            concrete_unit_weight: 0.0,
            ..WallInput::default()
        });
        assert_eq!(result.self_weight, 0.0);
        assert!(!result.eccentricity.is_finite());
        assert!(!result.bearing_ok);
    }

    /// R3.4: Non-finite values still render.
    #[test]
    fn degenerate_report_renders() {
        let report = StabilityReport::from(&evaluate(&WallInput {
            height: 0.0,
            ..WallInput::default()
        }));
        assert_eq!(report.sliding_factor, "Infinity");
    }

    /// R3.5: JSON has no infinities; they serialize as null, finite values stay numbers.
    #[test]
    fn non_finite_values_serialize_as_null() {
        let input = WallInput {
            inner_base: 0.0,
            outer_base: 0.0,
            ..WallInput::default()
        };
        let json = serde_json::to_value(evaluate(&input)).expect("serialize result");

        assert!(json["max_bearing_pressure"].is_null());
        assert!(json["sliding_factor"].is_f64());
        assert_eq!(json["bearing_ok"], serde_json::json!(false));

        let forces = serde_json::to_value(breakdown(&input)).expect("serialize breakdown");
        assert_eq!(forces["base_width"], serde_json::json!(0.0));
    }
}
