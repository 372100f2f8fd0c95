use crate::error::AppResult;
use crate::registry::NetworkProfile;

pub fn print_line(line: &str) -> AppResult<()> {
    println!("{line}");
    Ok(())
}

pub fn describe_profile(profile: &NetworkProfile) -> String {
    format!(
        "{}: {}:{} (network id {})",
        profile.name(),
        profile.host(),
        profile.port(),
        profile.network_id()
    )
}

/// One aligned row per profile: name, endpoint, network id.
pub fn profile_table(profiles: &[&NetworkProfile]) -> Vec<String> {
    let endpoints = profiles
        .iter()
        .map(|profile| format!("{}:{}", profile.host(), profile.port()))
        .collect::<Vec<_>>();
    let name_width = profiles
        .iter()
        .map(|profile| profile.name().len())
        .max()
        .unwrap_or(0);
    let endpoint_width = endpoints.iter().map(String::len).max().unwrap_or(0);

    profiles
        .iter()
        .zip(&endpoints)
        .map(|(profile, endpoint)| {
            format!(
                "{:<name_width$}  {:<endpoint_width$}  {}",
                profile.name(),
                endpoint,
                profile.network_id()
            )
        })
        .collect()
}
