//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an n8n-setup command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - PATH set to the fake bin directory only
    /// - Current directory set to the test project directory
    /// - Colors disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("n8n-setup").expect("failed to find n8n-setup binary");
        cmd.env("PATH", self.bin.path());
        cmd.env("FAKE_DOCKER_LOG", self.log_path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("N8N_SETUP_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run an action with empty stdin.
    pub fn run(&self, action: &str) -> Output {
        self.cmd()
            .arg(action)
            .write_stdin("")
            .output()
            .expect("failed to run n8n-setup")
    }

    /// Run an action answering the overwrite prompt.
    pub fn run_answering(&self, action: &str, answer: &str) -> Output {
        self.cmd()
            .arg(action)
            .write_stdin(format!("{}\n", answer))
            .output()
            .expect("failed to run n8n-setup")
    }
}
