use super::{InvocationProfile, PROFILES};

/// Find the profile whose mode name equals `mode` exactly.
pub fn lookup(mode: &str) -> Option<&'static InvocationProfile> {
    PROFILES.iter().find(|profile| profile.mode.as_str() == mode)
}

/// All profiles in declaration order.
pub fn all() -> &'static [InvocationProfile] {
    PROFILES
}
