/// Static files compiled into the binary, keyed by the name they are served under.
static ASSETS: &[(&str, &str)] = &[(
    "dashboard.css",
    include_str!("../../assets/dashboard.css"),
)];

pub fn asset(name: &str) -> Option<&'static str> {
    ASSETS
        .iter()
        .find(|(asset_name, _)| *asset_name == name)
        .map(|(_, body)| *body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_is_embedded() {
        let css = asset("dashboard.css").expect("stylesheet");
        assert!(css.contains(".panel"));
        assert!(asset("../Cargo.toml").is_none());
    }
}
