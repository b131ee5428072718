//! Terminal Rendering - Prediction Output
//!
//! Renders the model-info block shown at startup and the per-request
//! prediction results. Presentation only, no decision logic.

use std::io::{self, Write};

use crate::logic::adapter::{AttritionLabel, PredictionOutcome};
use crate::logic::model::LoadedModelInfo;

/// Width of the probability bar, in characters.
const BAR_WIDTH: usize = 30;

/// Model info block, the terminal version of the original sidebar.
pub fn render_model_info<W: Write>(writer: &mut W, info: &LoadedModelInfo) -> io::Result<()> {
    writeln!(writer, "Model: {} ({})", info.metadata.model_type, info.model_path)?;
    writeln!(writer, "Best CV score: {:.2}", info.metadata.best_score)?;

    if !info.metadata.best_params.is_empty() {
        writeln!(writer, "Best parameters:")?;
        for (key, value) in &info.metadata.best_params {
            writeln!(writer, "  {}: {}", key, value)?;
        }
    }

    Ok(())
}

/// Full prediction results block for one request.
pub fn render_outcome<W: Write>(writer: &mut W, outcome: &PredictionOutcome) -> io::Result<()> {
    writeln!(writer, "\n--- Prediction Results ---")?;

    match outcome.label {
        AttritionLabel::Stay => {
            writeln!(writer, "Prediction: this employee is likely to STAY")?
        }
        AttritionLabel::Leave => {
            writeln!(writer, "Prediction: this employee is at risk of LEAVING")?
        }
    }

    let filled = ((outcome.leave_probability * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
    writeln!(
        writer,
        "Attrition risk: [{}{}] {:.1}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        outcome.leave_probability * 100.0
    )?;
    writeln!(
        writer,
        "Probability to stay: {:.1}%   Probability to leave: {:.1}%",
        outcome.stay_probability * 100.0,
        outcome.leave_probability * 100.0
    )?;

    writeln!(writer, "\nKey risk factors:")?;
    if outcome.risk_factors.is_empty() {
        writeln!(writer, "  No significant risk factors identified")?;
    } else {
        for factor in &outcome.risk_factors {
            writeln!(writer, "  * {}", factor)?;
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::model::ModelMetadata;
    use crate::logic::risk::{RiskFactor, RiskRule};

    fn render_to_string<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn sample_outcome(label: AttritionLabel, leave: f32) -> PredictionOutcome {
        PredictionOutcome {
            label,
            stay_probability: 1.0 - leave,
            leave_probability: leave,
            risk_factors: vec![],
            inference_time_us: 120,
        }
    }

    #[test]
    fn test_render_stay() {
        let text = render_to_string(|w| {
            render_outcome(w, &sample_outcome(AttritionLabel::Stay, 0.1))
        });
        assert!(text.contains("likely to STAY"));
        assert!(text.contains("Probability to leave: 10.0%"));
        assert!(text.contains("No significant risk factors"));
    }

    #[test]
    fn test_render_leave_with_factors() {
        let mut outcome = sample_outcome(AttritionLabel::Leave, 0.75);
        outcome.risk_factors.push(RiskFactor {
            rule: RiskRule::LowSalary,
            message: RiskRule::LowSalary.label().to_string(),
        });

        let text = render_to_string(|w| render_outcome(w, &outcome));
        assert!(text.contains("at risk of LEAVING"));
        assert!(text.contains("* Low salary level"));
        assert!(!text.contains("No significant risk factors"));
    }

    #[test]
    fn test_bar_is_fixed_width() {
        let text = render_to_string(|w| {
            render_outcome(w, &sample_outcome(AttritionLabel::Leave, 0.5))
        });
        let bar_line = text.lines().find(|l| l.contains('[')).unwrap();
        let inside = &bar_line[bar_line.find('[').unwrap() + 1..bar_line.find(']').unwrap()];
        assert_eq!(inside.len(), BAR_WIDTH);
    }

    #[test]
    fn test_render_model_info() {
        let mut metadata = ModelMetadata::for_current_layout(0.98);
        metadata
            .best_params
            .insert("n_estimators".to_string(), serde_json::json!(300));

        let info = LoadedModelInfo {
            model_path: "models/attrition_rf.onnx".to_string(),
            loaded_at: chrono::Utc::now(),
            metadata,
        };

        let text = render_to_string(|w| render_model_info(w, &info));
        assert!(text.contains("Best CV score: 0.98"));
        assert!(text.contains("n_estimators: 300"));
    }
}
