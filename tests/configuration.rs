//! Tests for configuration system

use quickquid::Config;
use quickquid::config::LogFormat;
use quickquid_notification::ProviderKind;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() -> anyhow::Result<()> {
    let config = Config::load(None)?;

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.site.admin_email, "contact@quickquid.in");
    assert_eq!(config.site.waitlist_seed, 1247);
    assert_eq!(config.submission.success_reset_secs, 5);
    assert_eq!(config.submission.error_reset_secs, 8);
    assert_eq!(config.delivery.provider, ProviderKind::EmailJs);
    assert_eq!(config.delivery.waitlist_template(), "template_contact");
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("quickquid.toml");
    std::fs::write(
        &path,
        r#"
[site]
admin_email = "hello@campus.example"

[submission]
error_reset_secs = 12

[delivery]
provider = "smtp"
contact_template_id = "template_a"
waitlist_template_id = "template_b"

[delivery.smtp]
smtp_host = "mail.campus.example"

[logging]
format = "json"
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.site.admin_email, "hello@campus.example");
    assert_eq!(config.site.brand, "QuickQuid");
    assert_eq!(config.submission.success_reset_secs, 5);
    assert_eq!(config.submission.error_reset_secs, 12);
    assert_eq!(config.delivery.provider, ProviderKind::Smtp);
    assert_eq!(config.delivery.waitlist_template(), "template_b");
    assert_eq!(config.delivery.smtp.smtp_host, "mail.campus.example");
    assert_eq!(config.delivery.smtp.smtp_port, 587);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.server.host, "127.0.0.1");

    Ok(())
}

#[test]
fn test_missing_config_file_uses_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("absent.toml");

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.site.display_offset_minutes, 330);
    assert!(config.delivery.contact_template_id.is_empty());

    Ok(())
}
