use ollama_relay::infrastructure::observability::sanitize_prompt;

#[test]
fn given_blank_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt("   \n "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_trimmed_prompt() {
    assert_eq!(sanitize_prompt("  What is RAG?  "), "What is RAG?");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_length() {
    let prompt = "a".repeat(150);

    let result = sanitize_prompt(&prompt);

    assert_eq!(result, format!("{}... (150 chars total)", "a".repeat(100)));
}

#[test]
fn given_long_multibyte_prompt_when_sanitizing_then_cuts_on_char_boundary() {
    let prompt = "é".repeat(120);

    let result = sanitize_prompt(&prompt);

    assert!(result.starts_with(&"é".repeat(100)));
    assert!(result.ends_with("(120 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_it() {
    let result = sanitize_prompt("use Bearer sk-12345 please");

    assert_eq!(result, "use Bearer [REDACTED] please");
}

#[test]
fn given_repeated_secrets_when_sanitizing_then_redacts_every_occurrence() {
    let result = sanitize_prompt("password=hunter2&token=abc and password=again");

    assert_eq!(
        result,
        "password=[REDACTED]&token=[REDACTED] and password=[REDACTED]"
    );
}
