use crate::ports::outbound::{PromptSource, RelaySink};
use crate::usecase::RelayUseCase;
use common::adapter::NoopLog;
use common::domain::ModelName;
use common::error::Error;
use common::ports::outbound::{InferenceRunner, RunnerOutput};
use std::sync::{Arc, Mutex};

/// 固定バイト列を返す PromptSource
struct FixedPromptSource(Vec<u8>);

impl PromptSource for FixedPromptSource {
    fn read_to_end(&self) -> Result<Vec<u8>, Error> {
        Ok(self.0.clone())
    }
}

/// 呼び出しを記録して固定結果を返す InferenceRunner
struct RecordingRunner {
    result: Result<RunnerOutput, Error>,
    calls: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingRunner {
    fn new(result: Result<RunnerOutput, Error>) -> Self {
        Self {
            result,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn ok(code: i32, stdout: &[u8], stderr: &[u8]) -> Self {
        Self::new(Ok(RunnerOutput {
            code,
            stdout: stdout.to_vec(),
            stderr: stderr.to_vec(),
        }))
    }

    fn calls(&self) -> Vec<(String, Vec<u8>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl InferenceRunner for RecordingRunner {
    fn run(&self, model: &ModelName, prompt: &[u8]) -> Result<RunnerOutput, Error> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_vec()));
        self.result.clone()
    }
}

/// 書き込みをキャプチャする RelaySink
#[derive(Default)]
struct CaptureSink {
    out: Mutex<Vec<u8>>,
    err: Mutex<Vec<u8>>,
}

impl CaptureSink {
    fn stdout(&self) -> Vec<u8> {
        self.out.lock().unwrap().clone()
    }

    fn stderr(&self) -> Vec<u8> {
        self.err.lock().unwrap().clone()
    }
}

impl RelaySink for CaptureSink {
    fn write_stdout(&self, bytes: &[u8]) -> Result<(), Error> {
        self.out.lock().unwrap().extend_from_slice(bytes);
        Ok(())
    }

    fn write_stderr(&self, bytes: &[u8]) -> Result<(), Error> {
        self.err.lock().unwrap().extend_from_slice(bytes);
        Ok(())
    }
}

fn use_case(
    prompt: &[u8],
    runner: Arc<RecordingRunner>,
    sink: Arc<CaptureSink>,
) -> RelayUseCase {
    RelayUseCase::new(
        Arc::new(FixedPromptSource(prompt.to_vec())),
        runner,
        sink,
        Arc::new(NoopLog),
    )
}

#[test]
fn test_empty_input_short_circuits() {
    let runner = Arc::new(RecordingRunner::ok(0, b"RESPONSE", b""));
    let sink = Arc::new(CaptureSink::default());
    let uc = use_case(b"", Arc::clone(&runner), Arc::clone(&sink));

    let code = uc.run(&ModelName::new("m")).unwrap();
    assert_eq!(code, 0);
    assert!(runner.calls().is_empty(), "runner must not be invoked");
    assert_eq!(sink.stdout(), b"");
    assert_eq!(sink.stderr(), b"");
}

#[test]
fn test_whitespace_only_input_short_circuits() {
    let runner = Arc::new(RecordingRunner::ok(0, b"RESPONSE", b""));
    let sink = Arc::new(CaptureSink::default());
    let uc = use_case(b"  \n\t \r\n", Arc::clone(&runner), Arc::clone(&sink));

    let code = uc.run(&ModelName::new("m")).unwrap();
    assert_eq!(code, 0);
    assert!(runner.calls().is_empty());
    assert_eq!(sink.stdout(), b"");
    assert_eq!(sink.stderr(), b"");
}

#[test]
fn test_success_relays_stdout_verbatim() {
    let runner = Arc::new(RecordingRunner::ok(0, b"RESPONSE", b""));
    let sink = Arc::new(CaptureSink::default());
    let uc = use_case(b"hello", Arc::clone(&runner), Arc::clone(&sink));

    let code = uc.run(&ModelName::new("m")).unwrap();
    assert_eq!(code, 0);
    assert_eq!(sink.stdout(), b"RESPONSE");
    assert_eq!(sink.stderr(), b"", "stderr must stay empty on success");
}

#[test]
fn test_failure_relays_stderr_and_exit_code() {
    let runner = Arc::new(RecordingRunner::ok(7, b"partial", b"ERR"));
    let sink = Arc::new(CaptureSink::default());
    let uc = use_case(b"hello", Arc::clone(&runner), Arc::clone(&sink));

    let code = uc.run(&ModelName::new("m")).unwrap();
    assert_eq!(code, 7);
    assert_eq!(sink.stderr(), b"ERR");
    assert_eq!(sink.stdout(), b"", "stdout must stay empty on failure");
}

#[test]
fn test_prompt_bytes_forwarded_verbatim() {
    // 空判定の trim は転送内容に影響しない
    let prompt = b"  hello with spaces  \n";
    let runner = Arc::new(RecordingRunner::ok(0, b"ok", b""));
    let sink = Arc::new(CaptureSink::default());
    let uc = use_case(prompt, Arc::clone(&runner), Arc::clone(&sink));

    uc.run(&ModelName::new("m")).unwrap();
    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, prompt.to_vec());
}

#[test]
fn test_runner_receives_resolved_model() {
    let runner = Arc::new(RecordingRunner::ok(0, b"ok", b""));
    let sink = Arc::new(CaptureSink::default());
    let uc = use_case(b"hello", Arc::clone(&runner), Arc::clone(&sink));

    uc.run(&ModelName::new("modelX")).unwrap();
    assert_eq!(runner.calls()[0].0, "modelX");
}

#[test]
fn test_rerun_with_same_input_is_identical() {
    let runner = Arc::new(RecordingRunner::ok(0, b"RESPONSE", b""));
    let sink = Arc::new(CaptureSink::default());
    let uc = use_case(b"hello", Arc::clone(&runner), Arc::clone(&sink));

    let first = uc.run(&ModelName::new("m")).unwrap();
    let after_first = sink.stdout();
    let second = uc.run(&ModelName::new("m")).unwrap();

    assert_eq!(first, second);
    assert_eq!(sink.stdout(), [after_first.clone(), after_first].concat());
    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[test]
fn test_launch_failure_propagates() {
    let runner = Arc::new(RecordingRunner::new(Err(Error::unavailable(
        "inference runner not found: 'ollama'",
    ))));
    let sink = Arc::new(CaptureSink::default());
    let uc = use_case(b"hello", Arc::clone(&runner), Arc::clone(&sink));

    let err = uc.run(&ModelName::new("m")).unwrap_err();
    assert_eq!(err.exit_code(), 69);
    assert!(err.to_string().contains("inference runner not found"));
    assert_eq!(sink.stdout(), b"");
    assert_eq!(sink.stderr(), b"");
}
