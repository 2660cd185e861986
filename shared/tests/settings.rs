use shared::{link_width, ParticleSettings, Settings, SettingsError};

#[test]
fn defaults_are_valid() {
    assert_eq!(Settings::default().validate(), Ok(()));
}

#[test]
fn partial_json_fills_defaults() {
    let settings: Settings =
        serde_json::from_str(r#"{ "particles": { "max_count": 40 }, "cursor": { "damping": 0.2 } }"#)
            .unwrap();

    assert_eq!(settings.particles.max_count, 40);
    assert_eq!(settings.particles.link_distance, 120.0);
    assert_eq!(settings.cursor.damping, 0.2);
    assert_eq!(settings.mail.address, "jvravichandra03@gmail.com");
    assert_eq!(settings.reveal.class, "in");
}

#[test]
fn empty_document_is_default() {
    let settings: Settings = serde_json::from_str("{}").unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn rejects_invalid_values() {
    let mut settings = Settings::default();
    settings.cursor.damping = 0.0;
    assert_eq!(settings.validate(), Err(SettingsError::Damping(0.0)));

    let mut settings = Settings::default();
    settings.particles.area_per_particle = -1.0;
    assert_eq!(
        settings.validate(),
        Err(SettingsError::AreaPerParticle(-1.0))
    );

    let mut settings = Settings::default();
    settings.particles.link_distance = 0.0;
    assert_eq!(settings.validate(), Err(SettingsError::LinkDistance(0.0)));

    let mut settings = Settings::default();
    settings.reveal.threshold = 1.5;
    assert_eq!(settings.validate(), Err(SettingsError::RevealThreshold(1.5)));

    let mut settings = Settings::default();
    settings.particles.radius_max = 0.1;
    assert_eq!(settings.validate(), Err(SettingsError::RadiusRange(0.3, 0.1)));

    let mut settings = Settings::default();
    settings.particles.link_fade = 1.0;
    assert_eq!(settings.validate(), Err(SettingsError::LinkFade(1.0, 0.6)));

    let mut settings = Settings::default();
    settings.particles.link_fade = -0.1;
    assert_eq!(settings.validate(), Err(SettingsError::LinkFade(-0.1, 0.6)));

    let mut settings = Settings::default();
    settings.mail.address = "  ".to_string();
    assert!(settings.validated().is_err());
}

#[test]
fn valid_fade_keeps_link_widths_positive() {
    let settings = Settings::default();
    settings.validate().unwrap();

    let particles = &settings.particles;
    let mut previous = f64::INFINITY;

    for distance in 0..120 {
        let distance = distance as f64;
        let width = link_width(distance * distance, particles).unwrap();

        assert!(width >= 0.0, "width at {distance}px = {width}");
        assert!(width < previous);

        previous = width;
    }

    let full_fade = Settings {
        particles: ParticleSettings {
            link_fade: 0.6,
            ..Default::default()
        },
        ..Default::default()
    };
    full_fade.validate().unwrap();

    assert!(link_width(119.0 * 119.0, &full_fade.particles).unwrap() >= 0.0);
}
