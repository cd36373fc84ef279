mod ollama_client_test;
