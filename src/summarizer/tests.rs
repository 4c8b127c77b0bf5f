use super::*;

fn excerpts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_prompt_structure() {
    let a = excerpts(&["alpha one", "alpha two"]);
    let b = excerpts(&["beta"]);
    let prompt = ConclusionPrompt::new(&a, &b).build();

    assert!(prompt.starts_with("<s>[INST]\n"));
    assert!(prompt.ends_with("Technical conclusion:\n[/INST]\n"));
    assert!(prompt.contains("Text A:\nalpha one alpha two\n"));
    assert!(prompt.contains("Text B:\nbeta\n"));
    assert!(prompt.contains("without lists"));

    let pos_a = prompt.find("Text A:").unwrap();
    let pos_b = prompt.find("Text B:").unwrap();
    assert!(pos_a < pos_b);
}

#[test]
fn test_prompt_portuguese() {
    let a = excerpts(&["a"]);
    let b = excerpts(&["b"]);
    let prompt = ConclusionPrompt::new(&a, &b)
        .language(PromptLanguage::Portuguese)
        .build();

    assert!(prompt.contains("Texto A:\na\n"));
    assert!(prompt.contains("Conclusão técnica consolidada:\n[/INST]"));
    assert!(prompt.contains("sem listas"));
}

#[test]
fn test_extract_from_echoed_prompt() {
    let a = excerpts(&["x"]);
    let b = excerpts(&["y"]);
    let prompt = ConclusionPrompt::new(&a, &b).build();
    let completion = format!("{}  Both texts describe the same pipeline.\n\nSecond paragraph.  ", prompt);

    assert_eq!(
        extract_conclusion(&completion, PromptLanguage::English),
        "Both texts describe the same pipeline.\n\nSecond paragraph."
    );
}

#[test]
fn test_extract_uses_last_marker() {
    let completion = "Technical conclusion: first\nTechnical conclusion: second";
    assert_eq!(extract_conclusion(completion, PromptLanguage::English), "second");
}

#[test]
fn test_extract_without_marker() {
    let completion = "\n  Only generated text, no echo.  \n";
    assert_eq!(
        extract_conclusion(completion, PromptLanguage::English),
        "Only generated text, no echo."
    );
}

#[test]
fn test_extract_marker_is_language_specific() {
    let completion = "Conclusão técnica consolidada:\n[/INST]\nOs textos convergem.";
    assert_eq!(
        extract_conclusion(completion, PromptLanguage::Portuguese),
        "Os textos convergem."
    );
}

#[test]
fn test_generation_params_defaults() {
    let params = GenerationParams::default();
    assert_eq!(params.max_new_tokens, 900);
    assert_eq!(params.max_input_tokens, 4096);
    assert!(params.do_sample);
    assert!((params.temperature - 0.7).abs() < f32::EPSILON);
    assert!((params.top_p - 0.9).abs() < f32::EPSILON);
    assert!((params.repetition_penalty - 1.1).abs() < f32::EPSILON);
}

#[test]
fn test_generate_request_is_flat() {
    let req = GenerateRequest {
        prompt: "hi".to_string(),
        params: GenerationParams::default(),
    };
    let json = serde_json::to_value(&req).unwrap();

    assert_eq!(json["prompt"], "hi");
    assert_eq!(json["max_new_tokens"], 900);
    assert_eq!(json["do_sample"], true);
}

#[test]
fn test_prompt_language_serde() {
    let lang: PromptLanguage = serde_json::from_str("\"portuguese\"").unwrap();
    assert_eq!(lang, PromptLanguage::Portuguese);
}

// Integration test - requires generation server running
#[tokio::test]
#[ignore]
async fn test_conclusion_round_trip() {
    let client = DocumenterClient::new("http://localhost:18116").unwrap();
    let a = excerpts(&["Rust ownership prevents data races."]);
    let b = excerpts(&["The borrow checker enforces aliasing rules."]);

    let conclusion = client.generate_conclusion(&a, &b).await.unwrap();
    assert!(!conclusion.is_empty());
}
