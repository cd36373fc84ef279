mod prompt_sanitizer_test;
