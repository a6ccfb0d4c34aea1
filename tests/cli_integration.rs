//! Integration tests for the concierge CLI
//!
//! These tests drive the compiled binary end to end:
//! - One-shot questions against a specific agent
//! - General assistant routing and quick responses
//! - Agent directory listing and lookup
//! - Interactive chat sessions over piped stdin

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Helper to get the concierge binary path
fn concierge_binary() -> PathBuf {
    // When running tests, the binary is in target/debug/concierge
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("concierge");
    path
}

/// Write a test config that disables animation and logging noise
fn write_test_config(dir: &Path) -> PathBuf {
    let config_path = dir.join("concierge.yaml");
    let config = r#"log_level: off
chat:
  animate: false
  response_delay_ms: 0
  reveal_interval_ms: 0
"#;
    fs::write(&config_path, config).unwrap();
    config_path
}

/// Helper to run concierge with the test config
fn run_concierge(config_path: &Path, args: &[&str]) -> std::process::Output {
    Command::new(concierge_binary())
        .arg("--config")
        .arg(config_path)
        .args(args)
        .output()
        .expect("Failed to execute concierge")
}

/// Helper to run concierge and get stdout as string
fn run_concierge_stdout(config_path: &Path, args: &[&str]) -> String {
    let output = run_concierge(config_path, args);
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_agent_ask_answers_from_knowledge_base() {
    let tmp = TempDir::new().unwrap();
    let config = write_test_config(tmp.path());

    let stdout = run_concierge_stdout(
        &config,
        &["ask", "--agent", "financeiro", "-o", "json", "Como visualizar o fluxo de caixa projetado?"],
    );

    let reply: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON reply");
    assert_eq!(reply["agent"], "financeiro");
    let answer = reply["answer"].as_str().unwrap();
    assert!(answer.contains("FINA040"), "expected the projected cash flow routine, got: {answer}");
}

#[test]
fn test_agent_ask_falls_back_below_match_threshold() {
    let tmp = TempDir::new().unwrap();
    let config = write_test_config(tmp.path());

    let stdout = run_concierge_stdout(&config, &["ask", "--agent", "financeiro", "-o", "json", "zzz"]);

    let reply: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON reply");
    let answer = reply["answer"].as_str().unwrap();
    assert!(answer.contains("Posso guiar suas demandas"), "expected fallback, got: {answer}");
    assert!(answer.contains("Compartilhe detalhes como unidade"));
}

#[test]
fn test_agent_ask_unknown_slug_lists_directory() {
    let tmp = TempDir::new().unwrap();
    let config = write_test_config(tmp.path());

    let output = run_concierge(&config, &["ask", "--agent", "not-a-slug", "zzz"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.contains("not found"));
    assert!(stderr.contains("financeiro"));
    assert!(stderr.contains("rescisao-beneficios"));
}

#[test]
fn test_general_ask_quick_response_suggests_owner_agent() {
    let tmp = TempDir::new().unwrap();
    let config = write_test_config(tmp.path());

    let stdout = run_concierge_stdout(
        &config,
        &["ask", "-o", "json", "Como solicitar reembolso de despesas médicas?"],
    );

    let reply: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON reply");
    let text = reply["text"].as_str().unwrap();
    assert!(text.contains("Portal do Colaborador"));
    assert!(text.contains("posso conectar você rapidamente ao agente"));
    assert_eq!(reply["suggested_agent"]["slug"], "rescisao-beneficios");
    assert!(reply["suggested_agent"]["call_to_action"].is_string());
}

#[test]
fn test_general_ask_keyword_routes_without_quick_answer() {
    let tmp = TempDir::new().unwrap();
    let config = write_test_config(tmp.path());

    let stdout = run_concierge_stdout(
        &config,
        &["ask", "-o", "json", "Tenho uma dúvida sobre conciliação bancária"],
    );

    let reply: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON reply");
    let text = reply["text"].as_str().unwrap();
    assert!(text.contains("Percebi que essa demanda conversa com"));
    assert_eq!(reply["suggested_agent"]["slug"], "financeiro");
}

#[test]
fn test_general_ask_unmatched_question_echoes_back() {
    let tmp = TempDir::new().unwrap();
    let config = write_test_config(tmp.path());

    let stdout = run_concierge_stdout(&config, &["ask", "-o", "json", "xyzzy plugh"]);

    let reply: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON reply");
    let text = reply["text"].as_str().unwrap();
    assert!(text.contains("\"xyzzy plugh\""));
    assert!(reply["suggested_agent"].is_null());
}

#[test]
fn test_agent_list_covers_full_directory() {
    let tmp = TempDir::new().unwrap();
    let config = write_test_config(tmp.path());

    let stdout = run_concierge_stdout(&config, &["agent", "list", "-o", "json"]);

    let agents: Vec<serde_json::Value> = serde_json::from_str(&stdout).expect("valid JSON list");
    assert_eq!(agents.len(), 19);

    let slugs: Vec<&str> = agents.iter().map(|a| a["slug"].as_str().unwrap()).collect();
    assert!(slugs.contains(&"financeiro"));
    assert!(slugs.contains(&"spsp-plus"));
    // Directory order is the routing scan order
    assert_eq!(slugs[0], "ativos");
}

#[test]
fn test_agent_show_accepts_percent_encoded_slug() {
    let tmp = TempDir::new().unwrap();
    let config = write_test_config(tmp.path());

    let stdout = run_concierge_stdout(&config, &["agent", "show", "%66inanceiro", "-o", "json"]);

    let agent: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON agent");
    assert_eq!(agent["slug"], "financeiro");
    assert_eq!(agent["knowledge_base"].as_array().unwrap().len(), 3);
}

#[test]
fn test_agent_shortcuts_prints_all_entries() {
    let tmp = TempDir::new().unwrap();
    let config = write_test_config(tmp.path());

    let stdout = run_concierge_stdout(&config, &["agent", "shortcuts", "financeiro"]);

    assert!(stdout.contains("Onde encontro o fluxo de caixa projetado?"));
    assert!(stdout.contains("Como cadastrar uma ordem de pagamento urgente?"));
}

#[test]
fn test_prompts_surfaces_first_six_quick_responses() {
    let tmp = TempDir::new().unwrap();
    let config = write_test_config(tmp.path());

    let stdout = run_concierge_stdout(&config, &["prompts", "-o", "json"]);

    let prompts: Vec<String> = serde_json::from_str(&stdout).expect("valid JSON prompts");
    assert_eq!(prompts.len(), 6);
    assert_eq!(prompts[0], "Como solicitar reembolso de despesas médicas?");
}

#[test]
fn test_chat_session_answers_and_exits() {
    let tmp = TempDir::new().unwrap();
    let config = write_test_config(tmp.path());

    let mut child = Command::new(concierge_binary())
        .arg("--config")
        .arg(&config)
        .args(["chat", "--agent", "financeiro"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn concierge chat");

    child
        .stdin
        .take()
        .unwrap()
        .write_all("Como visualizar o fluxo de caixa projetado?\nsair\n".as_bytes())
        .unwrap();

    let output = child.wait_with_output().expect("chat session finished");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Olá! Eu sou o agente Financeiro."));
    assert!(stdout.contains("FINA040"));
}

#[test]
fn test_chat_session_ends_on_eof() {
    let tmp = TempDir::new().unwrap();
    let config = write_test_config(tmp.path());

    let mut child = Command::new(concierge_binary())
        .arg("--config")
        .arg(&config)
        .args(["chat"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn concierge chat");

    // Close stdin without sending anything
    drop(child.stdin.take());

    let output = child.wait_with_output().expect("chat session finished");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Estou pronta para receber sua dúvida."));
}

#[test]
fn test_completions_generates_bash_script() {
    let tmp = TempDir::new().unwrap();
    let config = write_test_config(tmp.path());

    let stdout = run_concierge_stdout(&config, &["completions", "bash"]);
    assert!(stdout.contains("concierge"));
}
