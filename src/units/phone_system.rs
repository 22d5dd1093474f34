use super::{RenderableUnit, UnitContext};
use crate::config::AppConfig;
use crate::content::StaticContent;
use eframe::egui;

/// Call statistics shown by the phone-system view. Counters stay at their
/// seeded values until a real telephony feed is wired in; the common-query
/// list comes from the static content bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct CallStatsSnapshot {
    pub total_calls: u32,
    pub answered_calls: u32,
    pub average_call_duration_mins: f32,
    pub common_queries: Vec<String>,
}

impl CallStatsSnapshot {
    /// Seed a fresh snapshot from the mock source. Kept separate from
    /// rendering so a live data source can replace it without touching the
    /// render path.
    pub fn seed(content: &StaticContent) -> Self {
        Self {
            total_calls: 0,
            answered_calls: 0,
            average_call_duration_mins: 0.0,
            common_queries: content.common_queries.clone(),
        }
    }
}

pub struct PhoneSystemUnit {
    stats: CallStatsSnapshot,
}

impl PhoneSystemUnit {
    pub fn new(_config: &AppConfig, content: &StaticContent) -> Self {
        Self {
            stats: CallStatsSnapshot::seed(content),
        }
    }

    pub fn stats(&self) -> &CallStatsSnapshot {
        &self.stats
    }
}

impl RenderableUnit for PhoneSystemUnit {
    fn render(&mut self, ui: &mut egui::Ui, _ctx: &UnitContext<'_>) {
        ui.columns(2, |cols| {
            cols[0].strong("Call Statistics");
            cols[0].label(format!("Total Calls: {}", self.stats.total_calls));
            cols[0].label(format!("Answered Calls: {}", self.stats.answered_calls));
            cols[0].label(format!(
                "Average Call Duration: {} minutes",
                self.stats.average_call_duration_mins
            ));

            cols[1].strong("Common Queries");
            if self.stats.common_queries.is_empty() {
                cols[1].label("No common queries.");
            } else {
                for query in &self.stats.common_queries {
                    cols[1].label(query);
                }
            }
        });
    }

    fn on_config_updated(&mut self, ctx: &UnitContext<'_>) {
        // Replace the snapshot wholesale so nothing from the previous one
        // leaks into the new render.
        self.stats = CallStatsSnapshot::seed(ctx.content);
    }
}
