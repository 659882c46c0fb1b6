use {
    crate::domain::{error::EnrichError, format::ValueFormatter},
    chrono::FixedOffset,
    std::{env, str::FromStr},
};

pub const DEFAULT_IDENTIFIER_MAX_CHARS: usize = 30;
pub const DEFAULT_SYSTEM_ACTOR: &str = "System";
pub const DEFAULT_PUBLIC_SUBMISSION_ACTOR: &str = "Public Intake Form";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichConfig {
    /// Offset datetimes are rendered in, in minutes east of UTC.
    pub utc_offset_minutes: i32,
    pub identifier_max_chars: usize,
    pub system_actor_label: String,
    pub public_submission_label: String,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            identifier_max_chars: DEFAULT_IDENTIFIER_MAX_CHARS,
            system_actor_label: DEFAULT_SYSTEM_ACTOR.to_string(),
            public_submission_label: DEFAULT_PUBLIC_SUBMISSION_ACTOR.to_string(),
        }
    }
}

impl EnrichConfig {
    /// Defaults overridden by `AUDIT_LENS_*` variables (a `.env` file is
    /// honoured if present).
    pub fn from_env() -> Result<Self, EnrichError> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let config = Self {
            utc_offset_minutes: parse_var("AUDIT_LENS_UTC_OFFSET_MINUTES")?
                .unwrap_or(defaults.utc_offset_minutes),
            identifier_max_chars: parse_var("AUDIT_LENS_IDENTIFIER_MAX_CHARS")?
                .unwrap_or(defaults.identifier_max_chars),
            system_actor_label: env::var("AUDIT_LENS_SYSTEM_ACTOR")
                .unwrap_or(defaults.system_actor_label),
            public_submission_label: env::var("AUDIT_LENS_PUBLIC_SUBMISSION_ACTOR")
                .unwrap_or(defaults.public_submission_label),
        };
        config.formatter()?;
        Ok(config)
    }

    pub fn formatter(&self) -> Result<ValueFormatter, EnrichError> {
        let offset = self
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                EnrichError::Config(format!(
                    "UTC offset out of range: {} minutes",
                    self.utc_offset_minutes
                ))
            })?;
        Ok(ValueFormatter::new(offset))
    }
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, EnrichError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| EnrichError::Config(format!("{name}={raw}: {e}"))),
        Err(_) => Ok(None),
    }
}
