use std::sync::Arc;

use specwright_ai::testing::ScriptedGateway;
use specwright_ai::{Message, ModelCatalog, ProviderError, Session};

use super::*;
use crate::artifact::ArtifactWriter;

fn repl_with(gateway: &Arc<ScriptedGateway>, output_dir: &std::path::Path) -> Repl {
    let catalog = ModelCatalog::new(["gpt-4", "o1"], "gpt-4");
    let session = Session::new(gateway.clone(), catalog);
    Repl::new(
        session,
        ArtifactWriter::new(Some(output_dir.to_path_buf()), "document.md"),
    )
}

async fn run_script(repl: &mut Repl, input: &str) -> String {
    let mut out = Vec::new();
    repl.run(input.as_bytes(), &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn plain_text_streams_reply_and_records_history() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(ScriptedGateway::new().reply(["Tell me ", "more."]));
    let mut repl = repl_with(&gateway, dir.path());

    let out = run_script(&mut repl, "a todo app\n/quit\n").await;

    assert!(out.contains("Tell me more."));
    assert_eq!(
        repl.session().messages(),
        [Message::user("a todo app"), Message::assistant("Tell me more.")]
    );
}

#[tokio::test]
async fn end_of_input_quits() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(ScriptedGateway::new());
    let mut repl = repl_with(&gateway, dir.path());

    let out = run_script(&mut repl, "").await;
    assert!(out.starts_with("Specwright v"));
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn doc_writes_artifact_and_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(ScriptedGateway::new().reply(["# Doc\n", "body"]));
    let mut repl = repl_with(&gateway, dir.path());

    let out = run_script(&mut repl, "/doc\n").await;

    let path = dir.path().join("document.md");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Doc\nbody");
    assert!(out.contains(&format!("Document written to {}", path.display())));
    assert_eq!(repl.artifact().path(), Some(path));
}

#[tokio::test]
async fn doc_with_type_uses_that_template() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(ScriptedGateway::new().reply(["d"]));
    let mut repl = repl_with(&gateway, dir.path());

    run_script(&mut repl, "/doc requirements\n").await;

    let call = &gateway.calls()[0];
    assert_eq!(
        call.messages.last().unwrap().content,
        "Based on the conversation so far, write the requirements document."
    );
}

#[tokio::test]
async fn doc_with_bad_type_reports_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(ScriptedGateway::new().reply(["still here"]));
    let mut repl = repl_with(&gateway, dir.path());

    let out = run_script(&mut repl, "/doc summary\nhello\n").await;

    assert!(out.contains("error: invalid document type: summary"));
    assert!(out.contains("still here"));
    assert_eq!(gateway.call_count(), 1);
}

#[tokio::test]
async fn failed_doc_is_not_reported_as_written() {
    let dir = tempfile::tempdir().unwrap();
    let gateway =
        Arc::new(ScriptedGateway::new().fail_after(["# Do"], ProviderError::RateLimited));
    let mut repl = repl_with(&gateway, dir.path());

    let out = run_script(&mut repl, "/doc\n").await;

    assert!(out.contains("error: Rate limited"));
    assert!(!out.contains("Document written"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("document.md")).unwrap(),
        "# Do"
    );
}

#[tokio::test]
async fn turn_error_is_printed_and_loop_continues() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(
        ScriptedGateway::new()
            .fail_after(Vec::<String>::new(), ProviderError::Timeout)
            .reply(["recovered"]),
    );
    let mut repl = repl_with(&gateway, dir.path());

    let out = run_script(&mut repl, "one\ntwo\n").await;

    assert!(out.contains("error: Timeout"));
    assert!(out.contains("recovered"));
    assert_eq!(repl.session().messages().len(), 3);
}

#[tokio::test]
async fn model_commands() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(ScriptedGateway::new());
    let mut repl = repl_with(&gateway, dir.path());

    let out = run_script(&mut repl, "/model o1\n/model gpt-99\n/models\n").await;

    assert!(out.contains("model: o1"));
    assert!(out.contains("error: invalid model: gpt-99"));
    assert!(out.contains("  gpt-4\n* o1\n"));
    assert_eq!(repl.session().current_model(), "o1");
}

#[tokio::test]
async fn start_then_history_shows_opening_and_exchange() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(
        ScriptedGateway::new()
            .reply(["What shall we build?"])
            .reply(["Nice."]),
    );
    let mut repl = repl_with(&gateway, dir.path());

    let out = run_script(&mut repl, "/start\na game\n/history\n").await;

    assert!(out.contains("Assistant: What shall we build?\n\nYou: a game\n\nAssistant: Nice.\n\n"));
    assert!(repl.session().opening().is_some());
}

#[tokio::test]
async fn unknown_command_and_help() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(ScriptedGateway::new());
    let mut repl = repl_with(&gateway, dir.path());

    let out = run_script(&mut repl, "/bogus\n/help\n").await;

    assert!(out.contains("unknown command: /bogus"));
    assert!(out.contains("/doc [type]"));
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn interrupt_abandons_stream() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(ScriptedGateway::new().hang_after(["partial"]));
    let mut repl = repl_with(&gateway, dir.path());
    let mut out = Vec::new();

    let outcome = {
        let stream = repl.session.respond("hello", None);
        drive(stream, &mut out, None, tokio::time::sleep(std::time::Duration::from_millis(50)))
            .await
            .unwrap()
    };

    assert!(matches!(outcome, TurnOutcome::Interrupted));
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("partial"));
    assert!(printed.contains("(interrupted)"));
    assert_eq!(repl.session().messages(), [Message::user("hello")]);
}

#[tokio::test]
async fn drive_reports_failure_outcome() {
    let gateway = Arc::new(ScriptedGateway::new().fail_after(["a"], ProviderError::RateLimited));
    let mut session = Session::new(gateway.clone(), ModelCatalog::new(["gpt-4"], "gpt-4"));
    let mut out = Vec::new();

    let outcome = drive(
        session.respond("q", None),
        &mut out,
        None,
        std::future::pending::<()>(),
    )
    .await
    .unwrap();

    assert!(matches!(
        outcome,
        TurnOutcome::Failed(SessionError::Provider(ProviderError::RateLimited))
    ));
}
