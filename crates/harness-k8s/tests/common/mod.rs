//! Shared test fakes

use std::cell::RefCell;
use std::collections::VecDeque;

use harness_core::{CommandOutput, Error, ExecOptions, Result, Target};

/// A scripted response from a [`FakeInstance`]
#[derive(Clone)]
pub enum Step {
    Ok(String),
    Fail(i32, String),
}

impl Step {
    pub fn ok(stdout: &str) -> Self {
        Step::Ok(stdout.to_string())
    }

    pub fn fail(status: i32, stderr: &str) -> Self {
        Step::Fail(status, stderr.to_string())
    }
}

/// A harness instance that replays scripted command results and records
/// every call. The final step repeats once the script runs out.
pub struct FakeInstance {
    script: RefCell<VecDeque<Step>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl FakeInstance {
    pub fn new(script: Vec<Step>) -> Self {
        Self {
            script: RefCell::new(script.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl Target for FakeInstance {
    fn exec(&self, args: &[&str], _opts: &ExecOptions) -> Result<CommandOutput> {
        self.calls
            .borrow_mut()
            .push(args.iter().map(|s| s.to_string()).collect());

        let mut script = self.script.borrow_mut();
        let step = if script.len() > 1 {
            script.pop_front().expect("script not empty")
        } else {
            script.front().expect("script must not be empty").clone()
        };

        match step {
            Step::Ok(stdout) => Ok(CommandOutput::new(0, stdout.into_bytes(), vec![])),
            Step::Fail(status, stderr) => Err(Error::command_failed(
                args.join(" "),
                CommandOutput::new(status, vec![], stderr.into_bytes()),
            )),
        }
    }
}
