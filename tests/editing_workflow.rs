//! File-backed editing sessions: load, filter, save, and the recent-edits history.

use std::path::Path;

use image::{Rgba, RgbaImage};

use photofilter::{EditorSession, FileImageStore, FilterId, PreferencesStore, RecentEdit};

fn write_photo(path: &Path) {
    let img = RgbaImage::from_fn(8, 6, |x, y| Rgba([(x * 30) as u8, (y * 40) as u8, 120, 255]));
    img.save(path).unwrap();
}

#[test]
fn apply_and_save_records_history() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    write_photo(&input);

    let store = FileImageStore::new(dir.path().join("edits"), dir.path().join("cache"), 90);
    let prefs = PreferencesStore::new(dir.path().join("prefs.json"));
    let mut session = EditorSession::new(store);

    session.load_image(input.to_str().unwrap()).unwrap();
    session.apply_filter(FilterId::RetroFilm.index()).unwrap();
    session.update_intensity(60.0).unwrap();
    let location = session.save(&prefs).unwrap();

    assert!(Path::new(&location).exists());
    assert_eq!(session.state().current.as_ref().unwrap().dim(), (6, 8, 4));

    let edits = prefs.recent_edits().unwrap();
    assert_eq!(edits.len(), 1);
    assert_eq!(edits[0].filter(), Some(FilterId::RetroFilm));
    assert_eq!(edits[0].image_uri, location);
}

#[test]
fn history_is_capped_and_most_recent_first() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = PreferencesStore::new(dir.path().join("prefs.json"));

    for i in 0..13 {
        let filter = FilterId::from_index(i % 12).unwrap();
        prefs
            .save_recent_edit(RecentEdit::new(format!("img_{i}.jpg"), filter))
            .unwrap();
    }

    let edits = prefs.recent_edits().unwrap();
    assert_eq!(edits.len(), 10);
    assert_eq!(edits[0].image_uri, "img_12.jpg");
    assert_eq!(edits[9].image_uri, "img_3.jpg");
}

#[test]
fn re_editing_an_image_moves_it_to_front() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = PreferencesStore::new(dir.path().join("prefs.json"));

    prefs.save_recent_edit(RecentEdit::new("a.jpg", FilterId::Vintage)).unwrap();
    prefs.save_recent_edit(RecentEdit::new("b.jpg", FilterId::HdrPop)).unwrap();
    prefs.save_recent_edit(RecentEdit::new("a.jpg", FilterId::SoftMatte)).unwrap();

    let edits = prefs.recent_edits().unwrap();
    let uris: Vec<_> = edits.iter().map(|e| e.image_uri.as_str()).collect();
    assert_eq!(uris, ["a.jpg", "b.jpg"]);
    assert_eq!(edits[0].filter(), Some(FilterId::SoftMatte));
}

#[test]
fn history_survives_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    PreferencesStore::new(&path)
        .save_recent_edit(RecentEdit::new("kept.jpg", FilterId::CoolBreeze))
        .unwrap();
    PreferencesStore::new(&path).save_favorite_filter(4).unwrap();

    let reopened = PreferencesStore::new(&path);
    assert_eq!(reopened.recent_edits().unwrap()[0].image_uri, "kept.jpg");
    assert_eq!(reopened.favorite_filter().unwrap(), Some(4));

    reopened.clear_recent_edits().unwrap();
    assert!(reopened.recent_edits().unwrap().is_empty());
    assert_eq!(reopened.favorite_filter().unwrap(), Some(4));
}

#[test]
fn sharing_writes_a_jpeg_into_the_cache() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    write_photo(&input);

    let store = FileImageStore::new(dir.path().join("edits"), dir.path().join("cache"), 90);
    let mut session = EditorSession::new(store);
    session.load_image(input.to_str().unwrap()).unwrap();
    session.apply_filter(FilterId::SepiaFade.index()).unwrap();

    let shared = session.prepare_for_sharing().unwrap();

    assert!(shared.exists());
    assert_eq!(shared.extension().and_then(|e| e.to_str()), Some("jpg"));
}
