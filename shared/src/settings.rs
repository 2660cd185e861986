use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors concerning invalid [`Settings`].
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    /// The viewport area assigned to each particle must be positive.
    #[error("area per particle must be positive, got {0}")]
    AreaPerParticle(f64),
    /// Links need a positive distance threshold.
    #[error("link distance must be positive, got {0}")]
    LinkDistance(f64),
    /// Easing needs a damping factor in `(0, 1]` to converge.
    #[error("cursor damping must lie in (0, 1], got {0}")]
    Damping(f64),
    /// The reveal threshold is a visible fraction.
    #[error("reveal threshold must lie in [0, 1], got {0}")]
    RevealThreshold(f64),
    /// Link fading must stay within `[0, link_width]` so widths never go negative.
    #[error("link fade {0} must lie in [0, link width {1}]")]
    LinkFade(f64, f64),
    /// Particle radii must form a non-empty, non-negative range.
    #[error("radius range [{0}, {1}) is invalid")]
    RadiusRange(f64, f64),
    /// The composer cannot address a draft to nobody.
    #[error("mail address is empty")]
    MailAddress,
}

/// Tunables for the background particle field.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ParticleSettings {
    /// Upper bound on the number of particles, regardless of viewport size.
    pub max_count: usize,
    /// Viewport area, in square pixels, that earns one particle.
    pub area_per_particle: f64,
    /// Smallest particle radius.
    pub radius_min: f64,
    /// Exclusive upper bound on particle radius.
    pub radius_max: f64,
    /// Maximum absolute velocity per axis, in pixels per frame.
    pub max_speed: f64,
    /// Particles closer than this many pixels are linked.
    pub link_distance: f64,
    /// Line width of a link between coincident particles.
    pub link_width: f64,
    /// How much of the link width fades out towards `link_distance`.
    pub link_fade: f64,
}

impl Default for ParticleSettings {
    fn default() -> ParticleSettings {
        ParticleSettings {
            max_count: 140,
            area_per_particle: 18000.0,
            radius_min: 0.3,
            radius_max: 2.1,
            max_speed: 0.175,
            link_distance: 120.0,
            link_width: 0.6,
            link_fade: 0.5,
        }
    }
}

/// CSS colours used by the background renderer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Palette {
    /// Inner stop of the vignette gradient.
    pub vignette_inner: String,
    /// Outer stop of the vignette gradient.
    pub vignette_outer: String,
    /// Particle fill.
    pub particle: String,
    /// Link stroke.
    pub link: String,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            vignette_inner: "rgba(167,139,250,0.08)".to_string(),
            vignette_outer: "rgba(10,10,15,0)".to_string(),
            particle: "rgba(167,139,250,0.9)".to_string(),
            link: "rgba(139,92,246,0.15)".to_string(),
        }
    }
}

/// Tunables for the cursor blob.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CursorSettings {
    /// Fraction of the remaining distance covered each frame.
    pub damping: f64,
}

impl Default for CursorSettings {
    fn default() -> CursorSettings {
        CursorSettings { damping: 0.08 }
    }
}

/// Tunables for scroll reveals.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RevealSettings {
    /// Visible fraction at which an element counts as revealed.
    pub threshold: f64,
    /// Class added to revealed elements.
    pub class: String,
}

impl Default for RevealSettings {
    fn default() -> RevealSettings {
        RevealSettings {
            threshold: 0.12,
            class: "in".to_string(),
        }
    }
}

/// Tunables for tilt cards and magnetic buttons.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct HoverSettings {
    /// Rotation, in degrees, between the card's centre and an edge times two.
    pub tilt_degrees: f64,
    /// Shadow offset, in pixels, between the card's centre and an edge times two.
    pub tilt_shadow: f64,
    /// Perspective distance of the tilt transform, in pixels.
    pub perspective: f64,
    /// Fraction of the pointer's offset from centre a magnetic button follows.
    pub magnet_strength: f64,
}

impl Default for HoverSettings {
    fn default() -> HoverSettings {
        HoverSettings {
            tilt_degrees: 12.0,
            tilt_shadow: 8.0,
            perspective: 800.0,
            magnet_strength: 0.15,
        }
    }
}

/// Tunables for the contact form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MailSettings {
    /// Recipient of composed drafts.
    pub address: String,
    /// Subject line preceding the sender's name.
    pub subject_prefix: String,
}

impl Default for MailSettings {
    fn default() -> MailSettings {
        MailSettings {
            address: "jvravichandra03@gmail.com".to_string(),
            subject_prefix: "Portfolio message from".to_string(),
        }
    }
}

impl MailSettings {
    /// Settings for a form whose `data-mail` attribute reads `attribute`.
    ///
    /// A non-empty attribute overrides the configured recipient.
    pub fn for_form(&self, attribute: Option<&str>) -> MailSettings {
        match attribute.map(str::trim) {
            Some(address) if !address.is_empty() => MailSettings {
                address: address.to_string(),
                ..self.clone()
            },
            _ => self.clone(),
        }
    }
}

/// Every tunable of the page, served as JSON and decoded by the client.
///
/// Absent keys take their default, so an empty object is a valid document.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    /// See [`ParticleSettings`].
    pub particles: ParticleSettings,
    /// See [`Palette`].
    pub palette: Palette,
    /// See [`CursorSettings`].
    pub cursor: CursorSettings,
    /// See [`RevealSettings`].
    pub reveal: RevealSettings,
    /// See [`HoverSettings`].
    pub hover: HoverSettings,
    /// See [`MailSettings`].
    pub mail: MailSettings,
}

impl Settings {
    /// Checks the numeric ranges the effects rely on.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let particles = &self.particles;

        if !(particles.area_per_particle > 0.0) {
            return Err(SettingsError::AreaPerParticle(particles.area_per_particle));
        }

        if !(particles.link_distance > 0.0) {
            return Err(SettingsError::LinkDistance(particles.link_distance));
        }

        if !(particles.link_fade >= 0.0 && particles.link_fade <= particles.link_width) {
            return Err(SettingsError::LinkFade(
                particles.link_fade,
                particles.link_width,
            ));
        }

        if !(particles.radius_min >= 0.0 && particles.radius_max > particles.radius_min) {
            return Err(SettingsError::RadiusRange(
                particles.radius_min,
                particles.radius_max,
            ));
        }

        if !(self.cursor.damping > 0.0 && self.cursor.damping <= 1.0) {
            return Err(SettingsError::Damping(self.cursor.damping));
        }

        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(SettingsError::RevealThreshold(self.reveal.threshold));
        }

        if self.mail.address.trim().is_empty() {
            return Err(SettingsError::MailAddress);
        }

        Ok(())
    }

    /// Validates `self`, handing it back on success.
    pub fn validated(self) -> Result<Settings, SettingsError> {
        self.validate()?;
        Ok(self)
    }
}
