use crate::charts::{point, ChartConfig, ChartKind};
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::{Path, PathBuf};

/// Symbolic icon handle for a tab. The rendering side decides how each handle
/// is drawn; configuration only names it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TabIcon {
    Phone,
    Calendar,
    Users,
    BarChart,
    Settings,
}

impl TabIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            TabIcon::Phone => "📞",
            TabIcon::Calendar => "📅",
            TabIcon::Users => "👥",
            TabIcon::BarChart => "📊",
            TabIcon::Settings => "⚙",
        }
    }
}

/// One navigable dashboard tab. `id` is the stable key looked up in the unit
/// registry; list order is display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TabConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub icon: TabIcon,
}

impl TabConfig {
    pub fn new(id: &str, label: &str, description: &str, icon: TabIcon) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            icon,
        }
    }
}

/// Installation feature set. Flags describe intent only; they never hide a
/// tab that is present in the tab list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    #[serde(default)]
    pub ai_phone_system: bool,
    #[serde(default)]
    pub reservation_management: bool,
    #[serde(default)]
    pub multi_language_support: bool,
    #[serde(default)]
    pub data_analytics: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            ai_phone_system: true,
            reservation_management: true,
            multi_language_support: true,
            data_analytics: true,
        }
    }
}

impl FeatureFlags {
    /// Look up a flag by its wire name. Unknown names return `None`.
    pub fn flag(&self, name: &str) -> Option<bool> {
        match name {
            "aiPhoneSystem" => Some(self.ai_phone_system),
            "reservationManagement" => Some(self.reservation_management),
            "multiLanguageSupport" => Some(self.multi_language_support),
            "dataAnalytics" => Some(self.data_analytics),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
}

/// Tabs plus the charts shown on the main dashboard. Chart order follows
/// declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSection {
    #[serde(default)]
    pub tabs: Vec<TabConfig>,
    #[serde(default)]
    pub charts: LinkedHashMap<String, ChartConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSection {
    #[serde(default)]
    pub charts: LinkedHashMap<String, ChartConfig>,
}

/// Root configuration for one installation. Constructed once, immutable
/// afterwards; owned by the composition root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub title: String,
    pub company_name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub secondary_color: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub dashboard: DashboardSection,
    #[serde(default)]
    pub analytics: AnalyticsSection,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut dashboard_charts = LinkedHashMap::new();
        dashboard_charts.insert(
            "callVolume".to_string(),
            ChartConfig {
                kind: ChartKind::Line,
                data_keys: vec!["calls".to_string()],
                colors: vec!["#FF6B6B".to_string()],
                data: vec![
                    point(json!({ "date": "2023-07-01", "calls": 50 })),
                    point(json!({ "date": "2023-07-02", "calls": 45 })),
                    point(json!({ "date": "2023-07-03", "calls": 60 })),
                    point(json!({ "date": "2023-07-04", "calls": 55 })),
                ],
            },
        );
        dashboard_charts.insert(
            "reservationsByRoomType".to_string(),
            ChartConfig {
                kind: ChartKind::Pie,
                data_keys: vec!["value".to_string()],
                colors: vec![
                    "#FF6B6B".to_string(),
                    "#4ECDC4".to_string(),
                    "#45B7D1".to_string(),
                ],
                data: vec![
                    point(json!({ "name": "Dorm", "value": 60 })),
                    point(json!({ "name": "Private", "value": 30 })),
                    point(json!({ "name": "Group", "value": 10 })),
                ],
            },
        );

        let mut analytics_charts = LinkedHashMap::new();
        analytics_charts.insert(
            "occupancyRate".to_string(),
            ChartConfig {
                kind: ChartKind::Bar,
                data_keys: vec!["rate".to_string()],
                colors: vec!["#4ECDC4".to_string()],
                data: vec![
                    point(json!({ "month": "Jan", "rate": 65 })),
                    point(json!({ "month": "Feb", "rate": 70 })),
                    point(json!({ "month": "Mar", "rate": 80 })),
                    point(json!({ "month": "Apr", "rate": 75 })),
                ],
            },
        );

        Self {
            title: "Clink Hostels AI Reservation System".to_string(),
            company_name: "Clink Hostels".to_string(),
            logo: "/path/to/clink-logo.png".to_string(),
            primary_color: "#FF6B6B".to_string(),
            secondary_color: "#4ECDC4".to_string(),
            user_name: "Mickael DA SILVA".to_string(),
            dashboard: DashboardSection {
                tabs: vec![
                    TabConfig::new(
                        "aiPhoneSystem",
                        "AI Phone System",
                        "Manage AI-powered phone reservations",
                        TabIcon::Phone,
                    ),
                    TabConfig::new(
                        "reservationManagement",
                        "Reservation Management",
                        "Overview of current reservations",
                        TabIcon::Calendar,
                    ),
                ],
                charts: dashboard_charts,
            },
            analytics: AnalyticsSection {
                charts: analytics_charts,
            },
            locations: vec![
                Location {
                    id: "dublin".to_string(),
                    name: "Dublin".to_string(),
                    address: "Dublin, Ireland".to_string(),
                },
                Location {
                    id: "london".to_string(),
                    name: "London".to_string(),
                    address: "London, UK".to_string(),
                },
                Location {
                    id: "amsterdam".to_string(),
                    name: "Amsterdam".to_string(),
                    address: "Amsterdam, Netherlands".to_string(),
                },
            ],
            features: FeatureFlags::default(),
        }
    }
}

impl AppConfig {
    /// Load an installation configuration from disk. An empty or missing file
    /// yields the seeded default installation.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Save the configuration to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn path_for(base: &str) -> PathBuf {
        let base = Path::new(base);
        if base.is_dir() {
            base.join("customization.json")
        } else {
            PathBuf::from(base)
        }
    }

    /// All charts of the installation, dashboard section first, in
    /// declaration order.
    pub fn charts(&self) -> impl Iterator<Item = (&str, &ChartConfig)> {
        self.dashboard
            .charts
            .iter()
            .chain(self.analytics.charts.iter())
            .map(|(name, chart)| (name.as_str(), chart))
    }
}
