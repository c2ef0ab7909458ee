//! End-to-end tests driving the styles the way a host does: load config at
//! startup, register the styles, look one up by name, apply it to a record.

use mailman_ietf_styles::{
    logging, register_ietf_styles, BaselineStyle, IetfStylesPlugin, ListRecord, MailingList,
    Plugin, Style, StyleRegistry, StylesConfig, ALLOWLIST_ENV_VAR, DEFAULT_ALLOWLIST_FQDN,
};
use serde_json::json;
use serial_test::serial;
use std::env;
use std::sync::Arc;

/// Stand-in for the host's generic discussion-list defaults
fn discussion_baseline() -> Arc<dyn BaselineStyle> {
    Arc::new(|_: &mut dyn MailingList| {})
}

/// Stand-in for the host's announce-only defaults
fn announce_baseline() -> Arc<dyn BaselineStyle> {
    Arc::new(|_: &mut dyn MailingList| {})
}

fn host_registry(config: &StylesConfig) -> StyleRegistry {
    let mut registry = StyleRegistry::new();
    register_ietf_styles(
        &mut registry,
        config,
        discussion_baseline(),
        announce_baseline(),
    )
    .expect("fresh registry has no conflicts");
    registry
}

#[test]
fn test_plugin_startup() {
    logging::init();
    logging::init();

    let plugin = IetfStylesPlugin::new();
    plugin.pre_hook();
    plugin.post_hook();
    assert_eq!(plugin.metadata().name, "ietf_styles");
    assert!(plugin.resource().is_none());
}

#[test]
fn test_friend_list_gets_default_allowlist_appended() {
    let registry = host_registry(&StylesConfig::default());
    let style = registry.get("ietf-default").unwrap();

    let mut record =
        ListRecord::new("wg.lists.example.org").with_nonmembers(["@friend@example.org"]);
    style.apply(&mut record);

    assert_eq!(
        record.accept_these_nonmembers,
        Some(vec![
            "@friend@example.org".to_string(),
            "@global-allowlist@ietf.org".to_string(),
        ])
    );
}

#[test]
#[serial]
fn test_env_override_on_unset_record() {
    unsafe {
        env::set_var(ALLOWLIST_ENV_VAR, "@custom@example.com");
    }
    let config = StylesConfig::from_env();
    unsafe {
        env::remove_var(ALLOWLIST_ENV_VAR);
    }

    let registry = host_registry(&config);
    let mut record = ListRecord::new("wg.lists.example.org");
    registry.get("ietf-default").unwrap().apply(&mut record);

    assert_eq!(
        record.accept_these_nonmembers,
        Some(vec!["@custom@example.com".to_string()])
    );
}

#[test]
#[serial]
fn test_no_env_override_uses_default() {
    unsafe {
        env::remove_var(ALLOWLIST_ENV_VAR);
    }
    let registry = host_registry(&StylesConfig::from_env());
    let mut record = ListRecord::new("wg.lists.example.org");
    registry.get("ietf-default").unwrap().apply(&mut record);

    assert_eq!(
        record.accept_these_nonmembers,
        Some(vec![DEFAULT_ALLOWLIST_FQDN.to_string()])
    );
}

#[test]
fn test_announce_empty_stays_empty() {
    let registry = host_registry(&StylesConfig::default());
    let mut record = ListRecord::new("ietf-announce.lists.example.org")
        .with_nonmembers(Vec::<String>::new());

    registry.get("ietf-announce").unwrap().apply(&mut record);

    assert_eq!(record.accept_these_nonmembers, Some(Vec::new()));
}

#[test]
fn test_announce_matches_baseline_alone() {
    let baseline: Arc<dyn BaselineStyle> = Arc::new(|list: &mut dyn MailingList| {
        *list.accept_these_nonmembers_mut() = Some(vec!["@moderators@example.org".to_string()]);
    });
    let mut registry = StyleRegistry::new();
    register_ietf_styles(
        &mut registry,
        &StylesConfig::default(),
        discussion_baseline(),
        baseline.clone(),
    )
    .unwrap();

    let mut expected = ListRecord::new("announce.example.org");
    baseline.apply(&mut expected);

    let mut actual = ListRecord::new("announce.example.org");
    registry.get("ietf-announce").unwrap().apply(&mut actual);

    assert_eq!(actual, expected);
    assert!(
        !actual
            .accept_these_nonmembers
            .unwrap()
            .contains(&DEFAULT_ALLOWLIST_FQDN.to_string())
    );
}

#[test]
fn test_style_names_are_stable() {
    let registry = host_registry(&StylesConfig::default());
    for _ in 0..3 {
        assert_eq!(registry.get("ietf-default").unwrap().name(), "ietf-default");
        assert_eq!(registry.get("ietf-announce").unwrap().name(), "ietf-announce");
    }
    assert!(registry.get("legacy-default").is_none());
}

#[test]
fn test_json_record_round_trip_through_style() -> anyhow::Result<()> {
    let registry = host_registry(&StylesConfig::default());
    let mut record: ListRecord = serde_json::from_value(json!({
        "list_id": "wg.lists.example.org",
        "accept_these_nonmembers": null,
        "subject_prefix": "[wg] ",
        "default_member_action": "defer"
    }))?;

    let style = registry.get("ietf-default").unwrap();
    style.apply(&mut record);
    style.apply(&mut record);

    let output = serde_json::to_value(&record)?;
    assert_eq!(
        output,
        json!({
            "list_id": "wg.lists.example.org",
            "accept_these_nonmembers": ["@global-allowlist@ietf.org"],
            "subject_prefix": "[wg] ",
            "default_member_action": "defer"
        })
    );
    Ok(())
}
