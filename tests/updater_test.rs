//! End-to-end tests running update plans against translation files on disk

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use rstest::rstest;
use serde_json::json;
use tempfile::TempDir;
use translation_updater::config::UpdaterSettings;
use translation_updater::input::translation::load_document;
use translation_updater::plan::Preset;
use translation_updater::types::Locale;
use translation_updater::{
    TranslationUpdater,
    UpdateError,
};

const EN_BASE: &str = r#"{
    "common": {
        "save": "Save",
        "cancel": "Cancel"
    },
    "helpRequests": {
        "title": "Help Requests"
    },
    "districts": {
        "colombo": "Colombo"
    }
}"#;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn settings_for(dir: &TempDir) -> UpdaterSettings {
    UpdaterSettings { base_path: dir.path().to_path_buf(), ..UpdaterSettings::default() }
}

#[rstest]
fn feedback_preset_produces_expected_english_file() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "en.json",
        r#"{"common": {"save": "Save"}, "districts": {"colombo": "Colombo"}}"#,
    );
    let settings = settings_for(&dir);
    let plan = Preset::Feedback.plan().unwrap();

    let report = TranslationUpdater::new(&settings, &plan).run(&[Locale::new("en").unwrap()]);

    assert!(report.is_success());
    let expected = r#"{
    "common": {
        "save": "Save"
    },
    "feedback": {
        "button": "Feedback",
        "title": "Share Your Feedback",
        "description": "Help us improve this website. Your suggestions are valuable.",
        "nameLabel": "Your Name (Optional)",
        "namePlaceholder": "Enter your name",
        "thoughtsLabel": "What do you think about this site?",
        "thoughtsPlaceholder": "Share your thoughts...",
        "improvementsLabel": "What should we improve?",
        "improvementsPlaceholder": "Your suggestions...",
        "submitButton": "Submit Feedback",
        "successMessage": "Thank you for your feedback!",
        "errorMessage": "Failed to submit. Please try again."
    },
    "districts": {
        "colombo": "Colombo"
    }
}"#;
    assert_eq!(fs::read_to_string(dir.path().join("en.json")).unwrap(), expected);
}

#[rstest]
fn both_presets_apply_to_all_locales() {
    let dir = TempDir::new().unwrap();
    for name in ["en.json", "si.json", "ta.json"] {
        write(dir.path(), name, EN_BASE);
    }
    let settings = settings_for(&dir);

    for preset in Preset::ALL {
        let plan = preset.plan().unwrap();
        let report = TranslationUpdater::new(&settings, &plan).run_all();
        assert_eq!(report.succeeded(), 3, "preset {preset} failed");
    }

    let si = load_document(&dir.path().join("si.json")).unwrap();
    let keys: Vec<&str> = si.keys().map(String::as_str).collect();
    assert_eq!(keys, ["common", "helpRequests", "feedback", "districts"]);
    assert_eq!(si["feedback"]["submitButton"], json!("ප්‍රතිචාරය ඉදිරිපත් කරන්න"));
    assert_eq!(
        si["helpRequests"]["pageInstruction"],
        json!(
            "කරුණාකර උදව් ලැබුණු පසු මෙහි තත්වය යාවත්කාලීන කරන්න. එය අන් අයගේ කාලය නාස්ති නොවන ලෙස උදව් කරයි."
        )
    );

    let raw = fs::read_to_string(dir.path().join("ta.json")).unwrap();
    assert!(raw.contains("\"button\": \"கருத்து\""));
    assert!(!raw.contains("\\u"));
}

#[rstest]
fn rerunning_feedback_preset_fails_without_changing_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "en.json", EN_BASE);
    let settings = settings_for(&dir);
    let plan = Preset::Feedback.plan().unwrap();
    let en = [Locale::new("en").unwrap()];

    let first = TranslationUpdater::new(&settings, &plan).run(&en);
    let after_first = fs::read_to_string(dir.path().join("en.json")).unwrap();
    let second = TranslationUpdater::new(&settings, &plan).run(&en);

    assert!(first.is_success());
    assert!(!second.is_success());
    let (_, error) = second.failures().next().unwrap();
    assert!(matches!(error, UpdateError::SectionExists(key) if key == "feedback"));
    assert_eq!(fs::read_to_string(dir.path().join("en.json")).unwrap(), after_first);
}

#[rstest]
fn page_instruction_with_one_missing_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "en.json", EN_BASE);
    write(dir.path(), "ta.json", EN_BASE);
    let settings = settings_for(&dir);
    let plan = Preset::PageInstruction.plan().unwrap();

    let report = TranslationUpdater::new(&settings, &plan).run_all();

    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 1);
    let (file, error) = report.failures().next().unwrap();
    assert_eq!(file.locale.as_str(), "si");
    assert!(matches!(error, UpdateError::FileNotFound(_)));
    assert!(!dir.path().join("si.json").exists());

    let en = load_document(&dir.path().join("en.json")).unwrap();
    assert_eq!(
        en["helpRequests"]["pageInstruction"],
        json!(
            "Please update the status of this request once you have received help. It will give someone else a chance."
        )
    );
    assert_eq!(en["helpRequests"]["title"], json!("Help Requests"));
}
