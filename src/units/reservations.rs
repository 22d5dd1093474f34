use super::{RenderableUnit, UnitContext};
use crate::config::AppConfig;
use crate::content::StaticContent;
use chrono::NaiveDate;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: u32,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: String,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal date")
}

/// Mock reservation rows seeded at mount time. Kept separate from rendering
/// so a reservation store can replace it without touching the render path.
pub fn seed_reservations() -> Vec<Reservation> {
    vec![
        Reservation {
            id: 1,
            guest_name: "John Doe".to_string(),
            check_in: date(2023, 7, 15),
            check_out: date(2023, 7, 20),
            room_type: "Dorm".to_string(),
        },
        Reservation {
            id: 2,
            guest_name: "Jane Smith".to_string(),
            check_in: date(2023, 7, 18),
            check_out: date(2023, 7, 25),
            room_type: "Private".to_string(),
        },
    ]
}

pub struct ReservationTableUnit {
    rows: Vec<Reservation>,
}

impl ReservationTableUnit {
    pub fn new(_config: &AppConfig, _content: &StaticContent) -> Self {
        Self {
            rows: seed_reservations(),
        }
    }

    pub fn with_rows(rows: Vec<Reservation>) -> Self {
        Self { rows }
    }

    /// Rows in display order. Display order is the seed sequence's order and
    /// stays stable across re-renders while the sequence is unchanged.
    pub fn rows(&self) -> &[Reservation] {
        &self.rows
    }
}

impl RenderableUnit for ReservationTableUnit {
    fn render(&mut self, ui: &mut egui::Ui, _ctx: &UnitContext<'_>) {
        let row_height = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder())
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::auto())
            .header(row_height, |mut header| {
                header.col(|ui| {
                    ui.strong("Guest Name");
                });
                header.col(|ui| {
                    ui.strong("Check-In");
                });
                header.col(|ui| {
                    ui.strong("Check-Out");
                });
                header.col(|ui| {
                    ui.strong("Room Type");
                });
            })
            .body(|mut body| {
                for reservation in &self.rows {
                    body.row(row_height, |mut row| {
                        row.col(|ui| {
                            ui.label(&reservation.guest_name);
                        });
                        row.col(|ui| {
                            ui.label(reservation.check_in.format("%Y-%m-%d").to_string());
                        });
                        row.col(|ui| {
                            ui.label(reservation.check_out.format("%Y-%m-%d").to_string());
                        });
                        row.col(|ui| {
                            ui.label(&reservation.room_type);
                        });
                    });
                }
            });
    }

    fn on_config_updated(&mut self, _ctx: &UnitContext<'_>) {
        self.rows = seed_reservations();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_rows_in_original_order() {
        let rows = seed_reservations();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].guest_name, "John Doe");
        assert_eq!(rows[0].check_in, date(2023, 7, 15));
        assert_eq!(rows[0].check_out, date(2023, 7, 20));
        assert_eq!(rows[0].room_type, "Dorm");
        assert_eq!(rows[1].guest_name, "Jane Smith");
        assert_eq!(rows[1].room_type, "Private");
    }

    #[test]
    fn empty_sequence_renders_zero_rows() {
        let config = AppConfig::default();
        let content = StaticContent::empty();
        let mut unit = ReservationTableUnit::with_rows(Vec::new());
        assert!(unit.rows().is_empty());
        let ctx = UnitContext {
            config: &config,
            content: &content,
        };
        egui::__run_test_ui(|ui| {
            unit.render(ui, &ctx);
        });
        assert!(unit.rows().is_empty());
    }

    #[test]
    fn row_order_is_stable_across_renders() {
        let config = AppConfig::default();
        let content = StaticContent::default();
        let mut unit = ReservationTableUnit::new(&config, &content);
        let before = unit.rows().to_vec();
        let ctx = UnitContext {
            config: &config,
            content: &content,
        };
        egui::__run_test_ui(|ui| {
            unit.render(ui, &ctx);
        });
        egui::__run_test_ui(|ui| {
            unit.render(ui, &ctx);
        });
        assert_eq!(unit.rows(), before.as_slice());
    }

    #[test]
    fn n_records_produce_n_rows() {
        let mut rows = seed_reservations();
        rows.push(Reservation {
            id: 3,
            guest_name: "Alex Roe".to_string(),
            check_in: date(2023, 8, 1),
            check_out: date(2023, 8, 3),
            room_type: "Group".to_string(),
        });
        let unit = ReservationTableUnit::with_rows(rows.clone());
        assert_eq!(unit.rows(), rows.as_slice());
    }

    #[test]
    fn reservation_dates_use_iso_wire_format() {
        let json = serde_json::to_value(&seed_reservations()[0]).unwrap();
        assert_eq!(json["guestName"], "John Doe");
        assert_eq!(json["checkIn"], "2023-07-15");
        assert_eq!(json["checkOut"], "2023-07-20");
        assert_eq!(json["roomType"], "Dorm");
    }
}
