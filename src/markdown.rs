use crate::models::{Library, LibraryEntry, LicenseRef, Manifest};

/// Shown when a library declares no license with a usable name.
pub const UNKNOWN_LICENSE: &str = "Unknown License";

/// Render the manifest as Markdown bullet lines, one per named library.
pub fn format_libraries(manifest: &Manifest) -> Vec<String> {
    collect_entries(manifest)
        .iter()
        .map(LibraryEntry::to_markdown)
        .collect()
}

/// Resolve every named library, sorted case-insensitively by name.
///
/// The sort is stable, so libraries whose names differ only by case keep
/// their manifest order.
pub fn collect_entries(manifest: &Manifest) -> Vec<LibraryEntry> {
    let mut libraries: Vec<&Library> = manifest.libraries.iter().collect();
    libraries.sort_by_cached_key(|lib| lib.name.as_deref().unwrap_or("").to_lowercase());

    libraries
        .into_iter()
        .filter_map(|lib| {
            let name = lib.name.as_deref().filter(|n| !n.is_empty())?;
            Some(LibraryEntry {
                name: name.to_string(),
                version: lib.artifact_version.clone().unwrap_or_default(),
                website: lib.website.clone().filter(|w| !w.is_empty()),
                licenses: license_text(manifest, lib),
                unique_id: lib.unique_id.clone(),
            })
        })
        .collect()
}

/// Display names of a library's licenses joined with `", "`, or [`UNKNOWN_LICENSE`].
pub fn license_text(manifest: &Manifest, library: &Library) -> String {
    let names: Vec<String> = library
        .licenses
        .iter()
        .flatten()
        .map(|license| resolve_license(manifest, license))
        .filter(|name| !name.trim().is_empty())
        .collect();

    if names.is_empty() {
        UNKNOWN_LICENSE.to_string()
    } else {
        names.join(", ")
    }
}

/// Turn a license reference into its display name.
///
/// Keys missing from the license table (or whose entry has no name) fall back
/// to the key itself.
pub fn resolve_license(manifest: &Manifest, license: &LicenseRef) -> String {
    match license {
        LicenseRef::Inline { name } => name.clone().unwrap_or_default(),
        LicenseRef::Key(key) => manifest
            .licenses
            .get(key)
            .and_then(|entry| entry.name.clone())
            .unwrap_or_else(|| key.clone()),
    }
}

impl LibraryEntry {
    /// The linked form separates version and license with `|`; the plain form does not.
    pub fn to_markdown(&self) -> String {
        match &self.website {
            Some(url) => format!(
                "- [{}]({}) {} | Under {}",
                self.name, url, self.version, self.licenses
            ),
            None => format!("- {} {} Under {}", self.name, self.version, self.licenses),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(json: &str) -> Manifest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_reference_example() {
        let m = manifest(
            r#"{"libraries":[{"name":"Zeta","artifactVersion":"1.0","website":"","licenses":["mit"]},{"name":"alpha","artifactVersion":"2.0","website":"https://x.io","licenses":[{"name":"Apache-2.0"}]}],"licenses":{"mit":{"name":"MIT License"}}}"#,
        );
        assert_eq!(
            format_libraries(&m),
            vec![
                "- [alpha](https://x.io) 2.0 | Under Apache-2.0".to_string(),
                "- Zeta 1.0 Under MIT License".to_string(),
            ]
        );
    }

    #[test]
    fn test_unnamed_libraries_dropped() {
        let m = manifest(
            r#"{"libraries":[
                {"artifactVersion":"1.0","licenses":["mit"]},
                {"name":"","artifactVersion":"1.0"},
                {"name":"kept","artifactVersion":"3.1"}
            ]}"#,
        );
        let lines = format_libraries(&m);
        assert_eq!(lines, vec!["- kept 3.1 Under Unknown License".to_string()]);
    }

    #[test]
    fn test_stable_case_insensitive_sort() {
        let m = manifest(
            r#"{"libraries":[
                {"name":"beta","artifactVersion":"1"},
                {"name":"Okio","artifactVersion":"first"},
                {"name":"Alpha","artifactVersion":"1"},
                {"name":"okio","artifactVersion":"second"},
                {"name":"OKIO","artifactVersion":"third"}
            ]}"#,
        );
        let versions: Vec<(String, String)> = collect_entries(&m)
            .into_iter()
            .map(|e| (e.name, e.version))
            .collect();
        assert_eq!(
            versions,
            vec![
                ("Alpha".to_string(), "1".to_string()),
                ("beta".to_string(), "1".to_string()),
                ("Okio".to_string(), "first".to_string()),
                ("okio".to_string(), "second".to_string()),
                ("OKIO".to_string(), "third".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_license_fallback() {
        let m = manifest(
            r#"{"libraries":[
                {"name":"a","artifactVersion":"1","licenses":[]},
                {"name":"b","artifactVersion":"1","licenses":[{"name":""},{"name":"   "},{}]},
                {"name":"c","artifactVersion":"1"}
            ]}"#,
        );
        for entry in collect_entries(&m) {
            assert_eq!(entry.licenses, UNKNOWN_LICENSE);
        }
    }

    #[test]
    fn test_license_resolution() {
        let m = manifest(
            r#"{"libraries":[{"name":"x","artifactVersion":"1","licenses":["mit","custom",{"name":"Inline"},"noname"]}],
                "licenses":{"mit":{"name":"MIT License"},"noname":{"url":"https://example.com"}}}"#,
        );
        assert_eq!(
            license_text(&m, &m.libraries[0]),
            "MIT License, custom, Inline, noname"
        );
    }

    #[test]
    fn test_blank_names_filtered_from_join() {
        let m = manifest(
            r#"{"libraries":[{"name":"x","artifactVersion":"1","licenses":[{"name":""},"bsd"]}],
                "licenses":{"bsd":{"name":"BSD 3-Clause"}}}"#,
        );
        assert_eq!(license_text(&m, &m.libraries[0]), "BSD 3-Clause");
    }

    #[test]
    fn test_link_forms() {
        let m = manifest(
            r#"{"libraries":[
                {"name":"linked","artifactVersion":"1","website":"https://a.dev","licenses":[{"name":"MIT"}]},
                {"name":"nolink","artifactVersion":"2","licenses":[{"name":"MIT"}]},
                {"name":"nulllink","artifactVersion":"3","website":null,"licenses":[{"name":"MIT"}]}
            ]}"#,
        );
        assert_eq!(
            format_libraries(&m),
            vec![
                "- [linked](https://a.dev) 1 | Under MIT".to_string(),
                "- nolink 2 Under MIT".to_string(),
                "- nulllink 3 Under MIT".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_version_renders_empty() {
        let m = manifest(r#"{"libraries":[{"name":"x","licenses":[{"name":"MIT"}]}]}"#);
        assert_eq!(format_libraries(&m), vec!["- x  Under MIT".to_string()]);
    }

    #[test]
    fn test_line_count_matches_named_libraries() {
        let m = manifest(
            r#"{"libraries":[{"name":"a"},{"name":""},{"name":"b"},{},{"name":"C"}]}"#,
        );
        let named = m
            .libraries
            .iter()
            .filter(|l| l.name.as_deref().is_some_and(|n| !n.is_empty()))
            .count();
        assert_eq!(format_libraries(&m).len(), named);
        assert_eq!(named, 3);
    }
}
