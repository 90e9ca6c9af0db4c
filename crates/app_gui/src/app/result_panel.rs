//! Result card: a pure view over the prediction and the reference table.

use super::UiApp;
use eframe::egui;
use flower_core::{ConfidenceTier, Prediction, display_name, flower_info};

/// Everything the card shows, derived up front so rendering stays trivial.
#[derive(Debug, PartialEq)]
pub(super) struct ResultCard {
    pub name: String,
    pub percent: String,
    pub tier: ConfidenceTier,
    pub description: Option<&'static str>,
    pub care: Option<&'static str>,
}

impl ResultCard {
    /// Unknown categories get the raw name and no reference rows instead of
    /// a failed lookup.
    pub(super) fn for_prediction(prediction: &Prediction) -> Self {
        let info = flower_info(&prediction.class);
        Self {
            name: display_name(&prediction.class),
            percent: prediction.confidence_percent(),
            tier: prediction.tier(),
            description: info.map(|i| i.description),
            care: info.map(|i| i.care),
        }
    }
}

/// Tier picks emphasis only; the displayed numbers are never altered.
pub(super) fn tier_color(tier: ConfidenceTier) -> egui::Color32 {
    match tier {
        ConfidenceTier::High => egui::Color32::from_rgb(46, 160, 67),
        ConfidenceTier::Medium => egui::Color32::from_rgb(219, 154, 4),
        ConfidenceTier::Low => egui::Color32::from_rgb(201, 42, 42),
    }
}

impl UiApp {
    pub(super) fn render_result_panel(&self, ui: &mut egui::Ui, prediction: &Prediction) {
        let card = ResultCard::for_prediction(prediction);
        let color = tier_color(card.tier);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading("Classification Results");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.strong("Flower Type:");
                ui.colored_label(color, &card.name);
            });
            ui.horizontal(|ui| {
                ui.strong("Confidence:");
                ui.colored_label(color, &card.percent);
            });
            ui.add(
                egui::ProgressBar::new(prediction.confidence)
                    .desired_width(300.0)
                    .fill(color),
            );
            if let Some(description) = card.description {
                ui.add_space(8.0);
                ui.strong("About");
                ui.label(description);
            }
            if let Some(care) = card.care {
                ui.add_space(8.0);
                ui.strong("Care tips");
                ui.label(care);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn known_class_card_carries_verbatim_reference_text() {
        let card = ResultCard::for_prediction(&Prediction {
            class: "rose".into(),
            confidence: 0.92,
        });
        assert_eq!(card.name, "Rose");
        assert_eq!(card.percent, "92.0%");
        assert_eq!(card.tier, ConfidenceTier::High);

        let rose = flower_info("rose").expect("rose is a known class");
        assert_eq!(card.description, Some(rose.description));
        assert_eq!(card.care, Some(rose.care));
    }

    #[test]
    fn unknown_class_falls_back_to_raw_name_without_reference_rows() {
        let card = ResultCard::for_prediction(&Prediction {
            class: "orchid".into(),
            confidence: 0.42,
        });
        assert_eq!(card.name, "Orchid");
        assert_eq!(card.tier, ConfidenceTier::Low);
        assert!(card.description.is_none());
        assert!(card.care.is_none());
    }

    #[rstest]
    #[case(0.80, ConfidenceTier::High)]
    #[case(0.79, ConfidenceTier::Medium)]
    #[case(0.59, ConfidenceTier::Low)]
    fn tier_colors_follow_confidence(#[case] confidence: f32, #[case] tier: ConfidenceTier) {
        let card = ResultCard::for_prediction(&Prediction {
            class: "tulip".into(),
            confidence,
        });
        assert_eq!(card.tier, tier);
        assert_eq!(tier_color(card.tier), tier_color(tier));
    }

    #[test]
    fn each_tier_has_its_own_color() {
        let high = tier_color(ConfidenceTier::High);
        let medium = tier_color(ConfidenceTier::Medium);
        let low = tier_color(ConfidenceTier::Low);
        assert_ne!(high, medium);
        assert_ne!(medium, low);
        assert_ne!(high, low);
    }
}
