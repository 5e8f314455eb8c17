//! Bundled asset resolution for `check-assets`.
//!
//! This plays the renderer's part: every `ImageSource::Asset` name must resolve to a file in
//! the asset directory, otherwise the check fails with [`ArticleError::MissingAsset`].

use folio_article::{Article, ArticleError, ArticleResult};
use std::path::{Component, Path, PathBuf};

/// Resolve an asset name to a file under `asset_dir`.
///
/// Names must be plain relative paths; absolute paths and `..` never resolve.
pub fn resolve_asset(asset_dir: &Path, name: &str) -> ArticleResult<PathBuf> {
    let relative = Path::new(name);
    let plain = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)));

    let candidate = asset_dir.join(relative);
    if plain && candidate.is_file() {
        Ok(candidate)
    } else {
        Err(ArticleError::missing_asset(name))
    }
}

/// Check every asset reference in `article`, in document order.
///
/// Returns the number of asset references checked. Remote references are skipped.
pub fn check_assets(article: &Article, asset_dir: &Path) -> ArticleResult<usize> {
    let mut checked = 0;
    for name in article
        .image_sources()
        .into_iter()
        .filter_map(|source| source.asset_name())
    {
        let path = resolve_asset(asset_dir, name)?;
        tracing::debug!(asset = name, path = %path.display(), "resolved asset");
        checked += 1;
    }
    Ok(checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_article::{Author, HeaderBlock, ImageSource};

    fn article_with_assets(names: &[&str]) -> Article {
        let header = names
            .iter()
            .map(|name| HeaderBlock::HeroImage(ImageSource::asset(*name).expect("asset")))
            .chain([HeaderBlock::Author(
                Author::new("Ada").with_avatar(ImageSource::remote("https://x.test/ada.png")),
            )]);
        Article::new("a", header, Vec::new())
    }

    #[test]
    fn resolves_existing_assets() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("hero.jpg"), b"jpg").expect("write asset");

        let checked = check_assets(&article_with_assets(&["hero.jpg"]), dir.path())
            .expect("asset should resolve");
        assert_eq!(checked, 1);
    }

    #[test]
    fn reports_first_missing_asset() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("hero.jpg"), b"jpg").expect("write asset");

        let err = check_assets(
            &article_with_assets(&["hero.jpg", "missing.png", "also-missing.png"]),
            dir.path(),
        )
        .expect_err("missing asset");
        assert!(matches!(err, ArticleError::MissingAsset { ref name } if name == "missing.png"));
    }

    #[test]
    fn directories_do_not_count_as_assets() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("icons")).expect("mkdir");

        assert!(resolve_asset(dir.path(), "icons").is_err());
    }

    #[test]
    fn names_cannot_escape_the_asset_dir() {
        let root = tempfile::tempdir().expect("tempdir");
        let assets = root.path().join("assets");
        std::fs::create_dir(&assets).expect("mkdir");
        std::fs::write(root.path().join("secret.txt"), b"x").expect("write");

        assert!(resolve_asset(&assets, "../secret.txt").is_err());
        let absolute = root.path().join("secret.txt");
        assert!(resolve_asset(&assets, &absolute.display().to_string()).is_err());
    }

    #[test]
    fn nested_relative_names_resolve() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("avatars")).expect("mkdir");
        std::fs::write(dir.path().join("avatars/ada.png"), b"png").expect("write");

        let path = resolve_asset(dir.path(), "avatars/ada.png").expect("resolve");
        assert!(path.ends_with("avatars/ada.png"));
    }
}
