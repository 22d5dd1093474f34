use hostel_dash::config::{AppConfig, TabConfig, TabIcon};
use hostel_dash::units::{PhoneSystemUnit, ReservationTableUnit};
use hostel_dash::{Customization, Dashboard, StaticContent, UnitRegistry};

#[test]
fn default_install_resolves_every_tab() {
    let customization = Customization::default_install().unwrap();
    for tab in &customization.config.dashboard.tabs {
        assert!(
            customization.registry.contains(&tab.id),
            "tab '{}' must resolve in the registry",
            tab.id
        );
    }
}

#[test]
fn reservation_tab_yields_seeded_rows_in_order() {
    let customization = Customization::default_install().unwrap();
    assert!(customization
        .config
        .dashboard
        .tabs
        .iter()
        .any(|t| t.id == "reservationManagement"));

    let unit = ReservationTableUnit::new(&customization.config, &customization.content);
    let rows = unit.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].guest_name, "John Doe");
    assert_eq!(rows[0].check_in.to_string(), "2023-07-15");
    assert_eq!(rows[0].check_out.to_string(), "2023-07-20");
    assert_eq!(rows[0].room_type, "Dorm");
    assert_eq!(rows[1].guest_name, "Jane Smith");
    assert_eq!(rows[1].check_in.to_string(), "2023-07-18");
    assert_eq!(rows[1].check_out.to_string(), "2023-07-25");
    assert_eq!(rows[1].room_type, "Private");
}

#[test]
fn phone_tab_carries_content_queries_verbatim() {
    let customization = Customization::default_install().unwrap();
    let unit = PhoneSystemUnit::new(&customization.config, &customization.content);
    assert_eq!(
        unit.stats().common_queries,
        customization.content.common_queries
    );
}

#[test]
fn disabled_feature_flag_still_mounts_its_tab() {
    let mut config = AppConfig::default();
    config.features.ai_phone_system = false;
    let customization = Customization::new(
        config,
        UnitRegistry::with_defaults(),
        StaticContent::default(),
    )
    .unwrap();
    let mut dashboard = Dashboard::new(customization).unwrap();
    assert!(dashboard.tab_ids().contains(&"aiPhoneSystem"));
    assert!(dashboard.select("aiPhoneSystem"));
}

#[test]
fn every_orphan_tab_is_named_in_the_failure() {
    let mut config = AppConfig::default();
    config
        .dashboard
        .tabs
        .push(TabConfig::new("spa", "Spa", "", TabIcon::Users));
    config
        .dashboard
        .tabs
        .push(TabConfig::new("gym", "Gym", "", TabIcon::Users));
    let err = Customization::new(
        config,
        UnitRegistry::with_defaults(),
        StaticContent::default(),
    )
    .unwrap_err()
    .to_string();
    assert!(err.contains("'spa'"));
    assert!(err.contains("'gym'"));
}

#[test]
fn absent_content_bundle_degrades_to_no_suggestions() {
    let customization = Customization::new(
        AppConfig::default(),
        UnitRegistry::with_defaults(),
        StaticContent::empty(),
    )
    .unwrap();
    let unit = PhoneSystemUnit::new(&customization.config, &customization.content);
    assert!(unit.stats().common_queries.is_empty());
    assert!(Dashboard::new(customization).is_ok());
}
