pub const DEFAULT_PROFILE: &str = "default";

pub fn resolve_profile(requested: &str) -> String {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return DEFAULT_PROFILE.to_string();
    }

    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_profile_falls_back_to_default() {
        assert_eq!(resolve_profile("   "), DEFAULT_PROFILE);
        assert_eq!(resolve_profile("work "), "work");
    }
}
