//! Integration tests for file loading and end-to-end extraction

use resume_extract::error::ResumeExtractError;
use resume_extract::extraction::{Extractor, Field, SourceKind};
use resume_extract::input::InputManager;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.starts_with("Jane Smith\n"));
    assert!(text.contains("Phone: (555) 987-6543"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_can_be_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    let path = Path::new("tests/fixtures/sample_resume.txt");

    manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeExtractError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeExtractError::InvalidInput(_))));
}

#[tokio::test]
async fn test_oversized_document_is_rejected() {
    let mut manager = InputManager::new().with_max_input_chars(100);
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.load_document(path, None).await;
    assert!(matches!(result, Err(ResumeExtractError::InvalidInput(_))));
}

#[tokio::test]
async fn test_source_kind_defaults_and_override() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let document = manager.load_document(path, None).await.unwrap();
    assert_eq!(document.source_kind(), SourceKind::WordProcessor);

    let document = manager
        .load_document(path, Some(SourceKind::Pdf))
        .await
        .unwrap();
    assert_eq!(document.source_kind(), SourceKind::Pdf);
}

#[tokio::test]
async fn test_end_to_end_plain_text_resume() {
    let mut manager = InputManager::new();
    let document = manager
        .load_document(Path::new("tests/fixtures/sample_resume.txt"), None)
        .await
        .unwrap();

    let result = Extractor::new().unwrap().extract_document(&document);

    assert_eq!(result.name, "John Doe");
    assert_eq!(result.field_confidence(Field::Name), Some(85));
    assert_eq!(result.email, "john.doe@email.com");
    assert_eq!(result.phone, "555-123-4567");
    assert_eq!(result.location, "");
    assert_eq!(result.field_confidence(Field::Location), None);

    assert!(result.skills.contains("React"));
    assert!(result.skills.contains("CI/CD"));
    assert!(result.skills.contains("Spring Boot"));
    assert!(result.skills.contains("Java"));
    // Only present inside PostgreSQL and MySQL
    assert!(!result.skills.contains("SQL"));

    assert_eq!(result.experience_summary, "7+ years");
    assert_eq!(
        result.education_summary,
        "Bachelor of Science in Computer Science..."
    );
    assert_eq!(result.extraction_confidence, 95);

    assert_eq!(result.work_history.len(), 2);
    assert_eq!(result.work_history[1].company, "StartupXYZ");
    assert_eq!(result.work_history[1].period.as_deref(), Some("2018-2020"));
    assert_eq!(result.work_history[0].description.len(), 5);
}

#[tokio::test]
async fn test_end_to_end_markdown_resume() {
    let mut manager = InputManager::new();
    let document = manager
        .load_document(Path::new("tests/fixtures/sample_resume.md"), None)
        .await
        .unwrap();

    let result = Extractor::new().unwrap().extract_document(&document);

    assert_eq!(result.name, "Jane Smith");
    assert_eq!(result.phone, "(555) 987-6543");
    assert_eq!(result.email, "jane.smith@gmail.com");
    assert_eq!(result.location, "San Francisco, CA");
    assert_eq!(result.field_confidence(Field::Location), Some(75));
    assert_eq!(result.experience_summary, "6 years");
    assert!(result.education_summary.starts_with("Master of Science in Data Science"));
    assert!(result.skills.contains("Machine Learning"));
    assert!(result.skills.contains("SQL"));
    assert_eq!(result.work_history.len(), 2);
}
