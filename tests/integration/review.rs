#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]
use color_eyre::Result;
use proptest::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::fs;

use filegate_core::{CommitError, FileCommitter, ReviewStack, Scanner, SwipeGesture};
use filegate_models::Decision;

/// Source folder with `count` small files `IMG_000N.jpg` and an empty output folder
async fn setup_folders(count: usize) -> Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let source = temp_dir.path().join("card");
    let output = temp_dir.path().join("keepers");
    fs::create_dir_all(&source).await?;
    fs::create_dir_all(&output).await?;

    for i in 0..count {
        fs::write(source.join(format!("IMG_{i:04}.jpg")), format!("photo {i}")).await?;
    }
    Ok((temp_dir, source, output))
}

async fn output_names(output: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let mut entries = fs::read_dir(output).await?;
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

#[tokio::test]
async fn test_swipe_session_copies_only_kept_photos() -> Result<()> {
    let (_temp, source, output) = setup_folders(4).await?;
    let photos = Scanner::default().scan_directory(&source).await;
    let mut stack = ReviewStack::new(photos, output.clone(), 4);
    let committer = FileCommitter::new();
    let mut gesture = SwipeGesture::default();
    let width = 80.0;

    // keep, discard, keep, discard from the top down
    for (i, swipe) in [30.0, -30.0, 17.0, -17.0].into_iter().enumerate() {
        let decision = gesture.on_ended(swipe, width).unwrap();
        let photo = stack.decide_top(decision).unwrap();
        assert_eq!(photo.id, 3 - i);
        committer.commit(&photo, decision, &output).await?;
    }

    assert!(stack.is_empty());
    assert_eq!(output_names(&output).await?, ["IMG_0001.jpg", "IMG_0003.jpg"]);
    assert_eq!(fs::read_to_string(output.join("IMG_0003.jpg")).await?, "photo 3");

    // Sources are never touched
    assert_eq!(Scanner::default().list_images(&source)?.len(), 4);
    Ok(())
}

#[tokio::test]
async fn test_short_swipe_decides_nothing() -> Result<()> {
    let (_temp, source, output) = setup_folders(2).await?;
    let photos = Scanner::default().scan_directory(&source).await;
    let stack = ReviewStack::new(photos, output.clone(), 4);
    let mut gesture = SwipeGesture::default();

    // 16 of 80 cells is exactly the threshold
    gesture.on_changed(16.0, 80.0);
    assert_eq!(gesture.on_ended(16.0, 80.0), None);
    assert_eq!(gesture.fraction(), 0.0);
    assert_eq!(gesture.on_ended(-16.0, 80.0), None);

    assert_eq!(stack.remaining(), 2);
    assert!(output_names(&output).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_keep_never_overwrites_existing_output() -> Result<()> {
    let (_temp, source, output) = setup_folders(1).await?;
    fs::write(output.join("IMG_0000.jpg"), "already here").await?;

    let photos = Scanner::default().scan_directory(&source).await;
    let mut stack = ReviewStack::new(photos, output.clone(), 4);
    let photo = stack.decide_top(Decision::Keep).unwrap();

    let err = FileCommitter::new()
        .commit(&photo, Decision::Keep, &output)
        .await
        .unwrap_err();
    assert!(matches!(err, CommitError::DestinationExists(_)));
    assert_eq!(fs::read_to_string(output.join("IMG_0000.jpg")).await?, "already here");
    assert!(stack.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_keep_into_missing_output_dir_fails() -> Result<()> {
    let (temp, source, _output) = setup_folders(1).await?;
    let missing = temp.path().join("nope");

    let photos = Scanner::default().scan_directory(&source).await;
    let err = FileCommitter::new()
        .commit(&photos[0], Decision::Keep, &missing)
        .await
        .unwrap_err();

    assert!(matches!(err, CommitError::Copy { .. }));
    assert!(!missing.exists());
    Ok(())
}

proptest! {
    #[test]
    fn prop_deciding_removes_exactly_that_photo(
        count in 1usize..40,
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..20),
        keep in any::<bool>(),
    ) {
        let photos = (0..count)
            .map(|id| filegate_models::Photo::new(id, format!("p{id}.png"), format!("/in/p{id}.png")))
            .collect();
        let mut stack = ReviewStack::new(photos, PathBuf::from("/out"), 4);
        let decision = if keep { Decision::Keep } else { Decision::Discard };

        for pick in picks {
            if stack.is_empty() {
                break;
            }
            let before: Vec<usize> = stack.photos().iter().map(|p| p.id).collect();
            let id = before[pick.index(before.len())];

            let removed = stack.decide(id, decision).unwrap();
            prop_assert_eq!(removed.id, id);

            let after: Vec<usize> = stack.photos().iter().map(|p| p.id).collect();
            let expected: Vec<usize> = before.into_iter().filter(|&other| other != id).collect();
            prop_assert_eq!(after, expected);
        }
    }

    #[test]
    fn prop_visible_cards_end_at_the_top(count in 1usize..30, visible in 1usize..8) {
        let photos = (0..count)
            .map(|id| filegate_models::Photo::new(id, format!("p{id}.png"), format!("/in/p{id}.png")))
            .collect();
        let stack = ReviewStack::new(photos, PathBuf::from("/out"), visible);

        let cards = stack.visible_cards();
        prop_assert_eq!(cards.len(), visible.min(count));
        prop_assert_eq!(cards.last().map(|p| p.id), Some(count - 1));
    }
}
