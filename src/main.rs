use eframe::egui;
use hostel_dash::{logging, Customization, Dashboard};

struct DashApp {
    dashboard: Dashboard,
}

impl eframe::App for DashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.dashboard.ui(ui);
        });
    }
}

fn main() -> anyhow::Result<()> {
    logging::init(cfg!(debug_assertions));

    let customization = Customization::default_install()?;
    let title = customization.config.title.clone();
    let dashboard = Dashboard::new(customization)?;

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(DashApp { dashboard })),
    )
    .map_err(|e| anyhow::anyhow!("failed to start dashboard shell: {e}"))
}
