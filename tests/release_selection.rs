#[cfg(test)]
mod tests {
    use hugo_updater::api::github::Release;
    use hugo_updater::libs::asset::{select_asset, AssetMatcher};
    use hugo_updater::libs::error::{UpdateError, EXIT_FORMAT};
    use hugo_updater::libs::release::{latest_stable, normalize_version};
    use serde_json::json;

    fn release(tag: &str, created_at: &str, prerelease: bool) -> serde_json::Value {
        json!({
            "tag_name": tag,
            "created_at": created_at,
            "prerelease": prerelease,
            "assets": [],
        })
    }

    fn parse(listing: serde_json::Value) -> Vec<Release> {
        serde_json::from_value(listing).unwrap()
    }

    #[test]
    fn test_latest_stable_picks_newest_non_prerelease() {
        let releases = parse(json!([
            release("v0.122.0", "2024-01-26T10:00:00Z", false),
            release("v0.124.0-rc1", "2024-03-01T10:00:00Z", true),
            release("v0.123.4", "2024-02-26T10:00:00Z", false),
            release("v0.121.2", "2024-01-05T10:00:00Z", false),
        ]));

        let latest = latest_stable(releases).unwrap();
        assert_eq!(latest.tag_name, "v0.123.4");
        assert!(!latest.prerelease);
    }

    #[test]
    fn test_latest_stable_keeps_listing_order_on_ties() {
        let releases = parse(json!([
            release("v0.123.0", "2024-02-26T10:00:00Z", false),
            release("v0.123.1", "2024-02-26T10:00:00Z", false),
        ]));

        assert_eq!(latest_stable(releases).unwrap().tag_name, "v0.123.0");
    }

    #[test]
    fn test_latest_stable_compares_timestamps_not_strings() {
        let releases = parse(json!([
            release("v0.123.0", "2024-02-26T10:00:00Z", false),
            release("v0.123.1", "2024-02-26T09:00:00-03:00", false),
        ]));

        assert_eq!(latest_stable(releases).unwrap().tag_name, "v0.123.1");
    }

    #[test]
    fn test_only_prereleases_is_an_error() {
        let releases = parse(json!([
            release("v0.124.0-rc1", "2024-03-01T10:00:00Z", true),
            release("v0.124.0-rc2", "2024-03-02T10:00:00Z", true),
        ]));

        let err = latest_stable(releases).unwrap_err();
        assert!(matches!(err, UpdateError::EmptyReleaseSet));
        assert_eq!(err.exit_code(), EXIT_FORMAT);
    }

    #[test]
    fn test_empty_listing_is_an_error() {
        assert!(matches!(latest_stable(Vec::new()), Err(UpdateError::EmptyReleaseSet)));
    }

    #[test]
    fn test_listing_ignores_unknown_fields() {
        let releases = parse(json!([{
            "url": "https://api.github.com/repos/gohugoio/hugo/releases/1",
            "tag_name": "v0.123.4",
            "name": "v0.123.4",
            "draft": false,
            "prerelease": false,
            "created_at": "2024-02-26T10:00:00Z",
            "published_at": "2024-02-26T10:05:00Z",
            "assets": [{
                "id": 1,
                "name": "hugo_0.123.4_Linux-64bit.tar.gz",
                "size": 1024,
                "browser_download_url": "https://github.com/gohugoio/hugo/releases/download/v0.123.4/hugo_0.123.4_Linux-64bit.tar.gz"
            }]
        }]));

        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0].assets[0].name, "hugo_0.123.4_Linux-64bit.tar.gz");
    }

    #[test]
    fn test_normalize_version() {
        assert_eq!(normalize_version("v0.123.4"), "0.123.4");
        assert_eq!(normalize_version("0.123.4"), "0.123.4");
    }

    #[test]
    fn test_select_extended_linux_asset() {
        let releases = parse(json!([{
            "tag_name": "v0.123.4",
            "created_at": "2024-02-26T10:00:00Z",
            "prerelease": false,
            "assets": [
                { "name": "hugo_0.123.4_linux-amd64.tar.gz", "browser_download_url": "https://example.com/1" },
                { "name": "hugo_0.123.4_extended_linux-amd64.tar.gz", "browser_download_url": "https://example.com/2" },
                { "name": "hugo_0.123.4_extended_darwin-amd64.tar.gz", "browser_download_url": "https://example.com/3" }
            ]
        }]));

        let asset = select_asset(&releases[0].assets, &AssetMatcher::default()).unwrap();
        assert_eq!(asset.name, "hugo_0.123.4_extended_linux-amd64.tar.gz");
        assert_eq!(asset.browser_download_url, "https://example.com/2");
    }

    #[test]
    fn test_select_asset_for_other_platform() {
        let releases = parse(json!([{
            "tag_name": "v0.123.4",
            "created_at": "2024-02-26T10:00:00Z",
            "prerelease": false,
            "assets": [
                { "name": "hugo_0.123.4_extended_linux-amd64.tar.gz", "browser_download_url": "https://example.com/1" },
                { "name": "hugo_0.123.4_extended_linux-arm64.tar.gz", "browser_download_url": "https://example.com/2" }
            ]
        }]));

        let matcher = AssetMatcher::new("linux-arm64.tar.gz", "extended");
        let asset = select_asset(&releases[0].assets, &matcher).unwrap();
        assert_eq!(asset.browser_download_url, "https://example.com/2");
    }
}
