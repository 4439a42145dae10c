#[cfg(test)]
pub mod style_tests {
    const MANIFEST: &str = include_str!("../Cargo.toml");
    const MAIN_CSS: &str = include_str!("../style/main.css");
    const LOGIN_MODAL: &str = include_str!("../src/frontend/components/login_modal.rs");

    #[test]
    fn test_stylesheet_is_built_by_tailwind() {
        assert!(MANIFEST.contains(r#"tailwind-input-file = "style/main.css""#));
        assert!(!MANIFEST.contains("\nstyle-file ="));
    }

    #[test]
    fn test_stylesheet_imports_tailwind_and_scans_sources() {
        assert!(MAIN_CSS.contains(r#"@import "tailwindcss";"#));
        assert!(MAIN_CSS.contains(r#"@source "../src";"#));
    }

    #[test]
    fn test_stylesheet_defines_theme_variables_used_by_components() {
        for var in [
            "--page-background",
            "--card-background",
            "--input-background",
            "--text-color",
            "--border-color",
        ] {
            assert!(MAIN_CSS.contains(&format!("{}:", var)), "missing {}", var);
        }
    }

    #[test]
    fn test_login_modal_uses_overlay_utilities() {
        for class in ["fixed", "inset-0", "z-50", "items-center", "justify-center"] {
            assert!(
                LOGIN_MODAL.contains(&format!(" {} ", class))
                    || LOGIN_MODAL.contains(&format!("\"{} ", class)),
                "missing {}",
                class
            );
        }
    }
}
