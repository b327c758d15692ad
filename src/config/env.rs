//! Typed access to the environment variables the gateway reads.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvKey {
    ServerPort,
    RendererBin,
    RendererQualityFlag,
    RendererResolutionTag,
    RenderTimeoutSecs,
    ScratchRoot,
    MaxConcurrentRenders,
    MaxBodyBytes,
}

impl EnvKey {
    pub const ALL: [EnvKey; 8] = [
        EnvKey::ServerPort,
        EnvKey::RendererBin,
        EnvKey::RendererQualityFlag,
        EnvKey::RendererResolutionTag,
        EnvKey::RenderTimeoutSecs,
        EnvKey::ScratchRoot,
        EnvKey::MaxConcurrentRenders,
        EnvKey::MaxBodyBytes,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::RendererBin => "RENDERER_BIN",
            EnvKey::RendererQualityFlag => "RENDERER_QUALITY_FLAG",
            EnvKey::RendererResolutionTag => "RENDERER_RESOLUTION_TAG",
            EnvKey::RenderTimeoutSecs => "RENDER_TIMEOUT_SECS",
            EnvKey::ScratchRoot => "SCRATCH_ROOT",
            EnvKey::MaxConcurrentRenders => "MAX_CONCURRENT_RENDERS",
            EnvKey::MaxBodyBytes => "MAX_BODY_BYTES",
        }
    }
}

/// Trimmed value of `key`. Unset and blank are both `None`.
pub fn lookup(key: EnvKey) -> Option<String> {
    env::var(key.name())
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn string_or(key: EnvKey, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

/// Parsed value of `key`; a value that fails to parse is logged and replaced
/// by `default`.
pub fn parsed_or<T>(key: EnvKey, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => parse_or(key, &raw, default),
        None => default,
    }
}

fn parse_or<T>(key: EnvKey, raw: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().unwrap_or_else(|e| {
        warn!("Ignoring {}={:?} ({}), using default", key.name(), raw, e);
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn variable_names_are_distinct() {
        let names: HashSet<_> = EnvKey::ALL.iter().map(|k| k.name()).collect();

        assert_eq!(names.len(), EnvKey::ALL.len());
    }

    #[test]
    fn valid_value_is_parsed() {
        assert_eq!(parse_or(EnvKey::RenderTimeoutSecs, "90", 60u64), 90);
    }

    #[test]
    fn garbage_falls_back_to_default() {
        assert_eq!(parse_or(EnvKey::ServerPort, "eighty", 8000u16), 8000);
        assert_eq!(parse_or(EnvKey::MaxBodyBytes, "-1", 1024usize), 1024);
    }
}
