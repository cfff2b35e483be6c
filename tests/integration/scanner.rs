#![allow(clippy::unwrap_used)]
use color_eyre::Result;
use image::{GrayImage, RgbImage};
use std::path::Path;
use tempfile::TempDir;
use tokio::fs;

use filegate_core::Scanner;
use filegate_models::ColorMode;

/// Create a file with arbitrary bytes, creating parents as needed
async fn create_test_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, content).await?;
    Ok(())
}

/// A folder straight off a memory card: real images, junk and clutter
async fn setup_test_files(root: &Path) -> Result<()> {
    RgbImage::new(64, 48).save(root.join("beach.png"))?;
    GrayImage::new(20, 10).save(root.join("scan.png"))?;
    RgbImage::new(8, 8).save(root.join("tile.bmp"))?;

    create_test_file(&root.join("broken.jpg"), b"not really a jpeg").await?;
    create_test_file(&root.join("notes.txt"), b"shopping list").await?;
    create_test_file(&root.join("clip.mp4"), b"MP4").await?;
    create_test_file(&root.join("SHOUTING.JPG"), b"JPG").await?;
    create_test_file(&root.join(".thumb.jpg"), b"hidden").await?;
    create_test_file(&root.join("nested/deep.png"), b"nested").await?;
    create_test_file(&root.join(".cache/cached.png"), b"cached").await?;
    Ok(())
}

fn names(photos: &[filegate_models::Photo]) -> Vec<&str> {
    photos.iter().map(|p| &*p.filename).collect()
}

#[tokio::test]
async fn test_scanner_enumerates_whitelisted_direct_children() -> Result<()> {
    let temp_dir = TempDir::new()?;
    setup_test_files(temp_dir.path()).await?;

    let photos = Scanner::default().scan_directory(temp_dir.path()).await;

    assert_eq!(names(&photos), ["beach.png", "broken.jpg", "scan.png", "tile.bmp"]);
    for (index, photo) in photos.iter().enumerate() {
        assert_eq!(photo.id, index);
        assert_eq!(photo.path, temp_dir.path().join(&*photo.filename));
    }
    Ok(())
}

#[tokio::test]
async fn test_scanner_reads_header_metadata() -> Result<()> {
    let temp_dir = TempDir::new()?;
    setup_test_files(temp_dir.path()).await?;

    let photos = Scanner::default().scan_directory(temp_dir.path()).await;

    let beach = photos.iter().find(|p| &*p.filename == "beach.png").unwrap();
    assert_eq!((beach.width, beach.height), (Some(64), Some(48)));
    assert_eq!(beach.color_mode, Some(ColorMode::Rgb));
    assert_eq!(beach.coordinates(), None);

    let scan = photos.iter().find(|p| &*p.filename == "scan.png").unwrap();
    assert_eq!(scan.dimensions_label(), "20x10, Gray");

    // Unreadable files are still reviewable, just without metadata
    let broken = photos.iter().find(|p| &*p.filename == "broken.jpg").unwrap();
    assert_eq!(broken.width, None);
    assert_eq!(broken.color_mode, None);
    assert_eq!(broken.dimensions_label(), "0x0, ");
    Ok(())
}

#[tokio::test]
async fn test_scanner_any_case_matching() -> Result<()> {
    let temp_dir = TempDir::new()?;
    setup_test_files(temp_dir.path()).await?;

    let photos = Scanner::new(true).scan_directory(temp_dir.path()).await;

    assert!(names(&photos).contains(&"SHOUTING.JPG"));
    assert!(!names(&photos).contains(&".thumb.jpg"));
    assert_eq!(photos.len(), 5);
    Ok(())
}

#[tokio::test]
async fn test_scanner_missing_directory_yields_empty_batch() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("gone");

    let (photos, result) = Scanner::default().scan_with_result(&missing).await;

    assert!(photos.is_empty());
    assert_eq!(result.photos_found, 0);
}

#[tokio::test]
async fn test_scanner_on_a_file_yields_empty_batch() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = temp_dir.path().join("photo.jpg");
    create_test_file(&file, b"JPG").await?;

    assert!(Scanner::default().scan_directory(&file).await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_scan_result_counts_batch() -> Result<()> {
    let temp_dir = TempDir::new()?;
    setup_test_files(temp_dir.path()).await?;

    let (photos, result) = Scanner::default().scan_with_result(temp_dir.path()).await;

    assert_eq!(result.photos_found, photos.len());
    Ok(())
}
