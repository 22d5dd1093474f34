use crate::config::AppConfig;
use crate::content::StaticContent;
use eframe::egui;
use std::collections::HashMap;
use std::sync::Arc;

mod phone_system;
mod reservations;

pub use phone_system::{CallStatsSnapshot, PhoneSystemUnit};
pub use reservations::{seed_reservations, Reservation, ReservationTableUnit};

/// Read-only inputs available to a unit at render time.
#[derive(Clone, Copy)]
pub struct UnitContext<'a> {
    pub config: &'a AppConfig,
    pub content: &'a StaticContent,
}

/// Renderable unit trait implemented by every dashboard view. Units own their
/// local state exclusively; the context is never mutated.
pub trait RenderableUnit: Send {
    fn render(&mut self, ui: &mut egui::Ui, ctx: &UnitContext<'_>);

    /// Called when the composition was swapped. Units recompute their
    /// snapshot from the new context instead of keeping the old one.
    fn on_config_updated(&mut self, _ctx: &UnitContext<'_>) {}
}

/// Descriptor for building units from the installation configuration.
#[derive(Clone)]
pub struct UnitDescriptor {
    ctor: Arc<dyn Fn(&AppConfig, &StaticContent) -> Box<dyn RenderableUnit> + Send + Sync>,
}

impl std::fmt::Debug for UnitDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitDescriptor").finish_non_exhaustive()
    }
}

impl UnitDescriptor {
    pub fn new<T: RenderableUnit + 'static>(
        build: fn(&AppConfig, &StaticContent) -> T,
    ) -> Self {
        Self {
            ctor: Arc::new(move |config, content| Box::new(build(config, content))),
        }
    }

    pub fn create(&self, config: &AppConfig, content: &StaticContent) -> Box<dyn RenderableUnit> {
        (self.ctor)(config, content)
    }
}

/// Fixed mapping from tab identifier to unit descriptor. Built once next to
/// the composition root; holds no mutable state afterwards.
#[derive(Clone, Default, Debug)]
pub struct UnitRegistry {
    map: HashMap<String, UnitDescriptor>,
}

impl UnitRegistry {
    pub fn with_defaults() -> Self {
        let mut reg = Self::default();
        reg.register("aiPhoneSystem", UnitDescriptor::new(PhoneSystemUnit::new));
        reg.register(
            "reservationManagement",
            UnitDescriptor::new(ReservationTableUnit::new),
        );
        reg
    }

    pub fn register(&mut self, id: &str, descriptor: UnitDescriptor) {
        self.map.insert(id.to_string(), descriptor);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.map.contains_key(id)
    }

    pub fn descriptor(&self, id: &str) -> Option<&UnitDescriptor> {
        self.map.get(id)
    }

    pub fn create(
        &self,
        id: &str,
        config: &AppConfig,
        content: &StaticContent,
    ) -> Option<Box<dyn RenderableUnit>> {
        self.map.get(id).map(|d| d.create(config, content))
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map.keys().cloned().collect();
        names.sort();
        names
    }
}
