use crate::composition::Customization;
use crate::config::TabConfig;
use crate::units::{RenderableUnit, UnitContext};
use eframe::egui;

struct TabRuntime {
    tab: TabConfig,
    unit: Box<dyn RenderableUnit>,
}

/// Mounted dashboard: every configured tab resolved to a live unit. The
/// composition is read once at construction; `reload` replaces the whole
/// triple atomically so tab identifiers and registry never drift apart.
pub struct Dashboard {
    customization: Customization,
    tabs: Vec<TabRuntime>,
    selected: usize,
}

impl Dashboard {
    pub fn new(customization: Customization) -> anyhow::Result<Self> {
        let tabs = Self::mount_tabs(&customization)?;
        Ok(Self {
            customization,
            tabs,
            selected: 0,
        })
    }

    fn mount_tabs(customization: &Customization) -> anyhow::Result<Vec<TabRuntime>> {
        let mut tabs = Vec::with_capacity(customization.config.dashboard.tabs.len());
        for tab in &customization.config.dashboard.tabs {
            if customization.config.features.flag(&tab.id) == Some(false) {
                tracing::debug!(tab = %tab.id, "mounting tab whose feature flag is off");
            }
            let Some(unit) = customization.registry.create(
                &tab.id,
                &customization.config,
                &customization.content,
            ) else {
                // Customization::new validated this; reaching here means the
                // registry changed between validation and mount.
                anyhow::bail!("tab '{}' has no renderable unit registered", tab.id);
            };
            tabs.push(TabRuntime {
                tab: tab.clone(),
                unit,
            });
        }
        Ok(tabs)
    }

    /// Swap in a new composition. The previous config, registry and content
    /// are dropped together with all mounted units.
    pub fn reload(&mut self, customization: Customization) -> anyhow::Result<()> {
        let tabs = Self::mount_tabs(&customization)?;
        let selected = self.selected.min(tabs.len().saturating_sub(1));
        self.customization = customization;
        self.tabs = tabs;
        self.selected = selected;
        Ok(())
    }

    pub fn customization(&self) -> &Customization {
        &self.customization
    }

    pub fn tab_ids(&self) -> Vec<&str> {
        self.tabs.iter().map(|rt| rt.tab.id.as_str()).collect()
    }

    pub fn selected_tab(&self) -> Option<&TabConfig> {
        self.tabs.get(self.selected).map(|rt| &rt.tab)
    }

    /// Select a tab by identifier. Returns false when the id is not mounted.
    pub fn select(&mut self, id: &str) -> bool {
        match self.tabs.iter().position(|rt| rt.tab.id == id) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for (index, rt) in self.tabs.iter().enumerate() {
                let text = format!("{} {}", rt.tab.icon.glyph(), rt.tab.label);
                if ui
                    .selectable_label(index == self.selected, text)
                    .on_hover_text(&rt.tab.description)
                    .clicked()
                {
                    self.selected = index;
                }
            }
        });
        ui.separator();

        let ctx = UnitContext {
            config: &self.customization.config,
            content: &self.customization.content,
        };
        if let Some(rt) = self.tabs.get_mut(self.selected) {
            ui.heading(&rt.tab.label);
            rt.unit.render(ui, &ctx);
        } else {
            ui.label("No tabs configured.");
        }
    }
}
